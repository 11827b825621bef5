use std::path::Path;

use anyhow::Result;
use inquire::{Confirm, Text};
use tracing::error;

use leden_data::FetchAll;
use leden_db::Store;
use leden_mail::{dispatch, Attachment, Newsletter, SmtpMailer};

use crate::config::Config;

use super::optional;

/// Compose the newsletter and mail it to every opted-in member.
pub async fn send(config: &Config) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let members = store.fetch_all().await?;
    let recipients = members.iter().filter(|m| m.email_newsletter).count();
    if recipients == 0 {
        println!("Geen leden met een Enieuwsbrief inschrijving.");
        return Ok(());
    }

    let subject = match optional(Text::new("Onderwerp").prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };
    let body = match optional(Text::new("Bericht").prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };

    // Read once, attach the same bytes to every message.
    let attachment = loop {
        let path = match optional(Text::new("Pad van het PDF-bestand").prompt())? {
            Some(value) => value,
            None => return Ok(()),
        };
        match Attachment::from_pdf_path(Path::new(&path)) {
            Ok(attachment) => break attachment,
            Err(_) => println!("Geen bruikbaar PDF-bestand, probeer opnieuw."),
        }
    };

    let prompt = format!("Nieuwsbrief versturen naar {} leden?", recipients);
    let confirmed = match optional(Confirm::new(&prompt).with_default(true).prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };
    if !confirmed {
        return Ok(());
    }

    let mailer = SmtpMailer::connect(&config.mail)?;
    let newsletter = Newsletter { subject, body };
    let report = dispatch(&mailer, &members, &newsletter, &attachment).await;

    println!();
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => println!("{}: verzonden", outcome.email),
            Err(err) => {
                error!(recipient = outcome.email.as_str(), error = ?err, "send failed");
                println!("{}: mislukt", outcome.email);
            }
        }
    }
    println!();
    println!("{} verzonden, {} mislukt.", report.sent(), report.failed());

    Ok(())
}
