use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::Deserialize;

use crate::{Attachment, Mailer, Newsletter};

/// SMTP submission parameters, read from the `[mail]` table of the
/// config file.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender mailbox, e.g. `Ledenlijst <ledenlijst@example.com>`.
    pub sender: String,
}

/// Authenticated transport to the configured provider. Established
/// once per dispatch run and reused for every recipient.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn connect(config: &MailConfig) -> Result<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(credentials)
            .build();
        let sender = config.sender.parse::<Mailbox>()?;
        Ok(SmtpMailer { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        recipient: &str,
        newsletter: &Newsletter,
        attachment: &Attachment,
    ) -> Result<()> {
        let pdf = lettre::message::Attachment::new(attachment.filename.clone()).body(
            attachment.content.clone(),
            ContentType::parse("application/pdf")?,
        );
        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient.parse()?)
            .subject(newsletter.subject.as_str())
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(newsletter.body.clone()),
                    )
                    .singlepart(pdf),
            )?;
        self.transport.send(message).await?;
        Ok(())
    }
}
