use anyhow::Result;
use chrono::NaiveDate;
use inquire::{Confirm, CustomType, DateSelect, Select, Text};
use tracing::{error, warn};

use leden_data::{
    count_active, format_phone, next_member_id, selected_id, selection_list, CountryCode, Delete,
    FetchAll, Insert, MemberPatch, MembershipStatus, Retrieve, Salutation, Update,
};
use leden_db::Store;

use crate::config::Config;
use crate::formatting::PrintFormatted;

use super::optional;

macro_rules! ask {
    ($prompt:expr) => {
        match optional($prompt.prompt())? {
            Some(value) => value,
            None => return Ok(None),
        }
    };
}

/// Show the full member list with the active-member count.
pub async fn list(config: &Config) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let members = store.fetch_all().await?;

    println!();
    members.print_formatted();
    println!();
    println!("Aantal actuele leden: {}", count_active(&members));

    Ok(())
}

/// Prompt for a phone number until it parses. A rejected entry comes
/// back as the starting value of the retry. None means the operator
/// backed out.
fn phone_prompt<P>(stored: &str, country: CountryCode, mut prompt: P) -> Result<Option<String>>
where
    P: FnMut(&str) -> Result<Option<String>>,
{
    let mut seed = stored.to_string();
    loop {
        let raw = match prompt(&seed)? {
            Some(value) => value,
            None => return Ok(None),
        };
        match format_phone(&raw, country) {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                println!("Ongeldig telefoonnummer, probeer opnieuw.");
                seed = raw;
            }
        }
    }
}

/// One pass over every member field except the ID. Returns None when
/// the operator backs out mid-form.
fn member_form(initial: &MemberPatch) -> Result<Option<MemberPatch>> {
    let partner_id = ask!(Text::new("Partner id").with_initial_value(&initial.partner_id));

    let salutation_idx = Salutation::ALL
        .iter()
        .position(|s| *s == initial.salutation)
        .unwrap_or(0);
    let salutation = ask!(
        Select::new("Aanspreekvorm", Salutation::ALL.to_vec()).with_starting_cursor(salutation_idx)
    );

    let last_name = ask!(Text::new("Naam").with_initial_value(&initial.last_name));
    let first_name = ask!(Text::new("Voornaam").with_initial_value(&initial.first_name));
    let street = ask!(Text::new("Straat en huisnummer").with_initial_value(&initial.street));

    let postal_code = loop {
        let code = ask!(CustomType::<u32>::new("Postcode")
            .with_default(initial.postal_code)
            .with_error_message("Geef een getal op."));
        if code <= 9999 {
            break code;
        }
        println!("Postcode heeft hoogstens 4 cijfers.");
    };

    let city = ask!(Text::new("Woonplaats").with_initial_value(&initial.city));

    let country_idx = CountryCode::ALL
        .iter()
        .position(|c| *c == initial.country)
        .unwrap_or(0);
    let country =
        ask!(Select::new("Landcode", CountryCode::ALL.to_vec()).with_starting_cursor(country_idx));

    // The country just picked decides the dial prefix.
    let phone = match phone_prompt(&initial.phone, country, |seed| {
        optional(Text::new("Telefoon").with_initial_value(seed).prompt())
    })? {
        Some(value) => value,
        None => return Ok(None),
    };
    let mobile = match phone_prompt(&initial.mobile, country, |seed| {
        optional(Text::new("GSM").with_initial_value(seed).prompt())
    })? {
        Some(value) => value,
        None => return Ok(None),
    };

    let email = ask!(Text::new("Email").with_initial_value(&initial.email));

    let date_of_birth = ask!(DateSelect::new("Geboortedatum")
        .with_starting_date(initial.date_of_birth)
        .with_min_date(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()));

    let email_newsletter =
        ask!(Confirm::new("Enieuwsbrief?").with_default(initial.email_newsletter));
    let paper_newsletter =
        ask!(Confirm::new("Nieuwsbrief?").with_default(initial.paper_newsletter));

    let membership_idx = MembershipStatus::ALL
        .iter()
        .position(|s| *s == initial.membership)
        .unwrap_or(0);
    let membership = ask!(Select::new("Actueel lid", MembershipStatus::ALL.to_vec())
        .with_starting_cursor(membership_idx));

    let fee_paid = ask!(Confirm::new("Lidgeld?").with_default(initial.fee_paid));
    let mentor = ask!(Confirm::new("Begeleider?").with_default(initial.mentor));

    Ok(Some(MemberPatch {
        partner_id,
        salutation,
        last_name,
        first_name,
        street,
        postal_code,
        city,
        country,
        phone,
        mobile,
        email,
        date_of_birth,
        email_newsletter,
        paper_newsletter,
        membership,
        fee_paid,
        mentor,
    }))
}

/// Add a member. The new ID is the successor of the highest one.
pub async fn add(config: &Config) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let members = store.fetch_all().await?;
    let id = next_member_id(&members);

    println!();
    println!("Lid id: {}", id);

    let patch = match member_form(&MemberPatch::default())? {
        Some(patch) => patch,
        None => return Ok(()),
    };
    let member = patch.into_member(id.clone());

    println!();
    member.print_formatted();
    println!();
    let confirmed = match optional(Confirm::new("Lid toevoegen?").with_default(true).prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };
    if !confirmed {
        return Ok(());
    }

    match store.insert(member).await {
        Ok(member) => println!("Lid met ID {} is toegevoegd.", member.id),
        Err(err) => {
            error!(error = ?err, "insert failed");
            println!("Lid met ID {} kon niet toegevoegd worden.", id);
        }
    }
    Ok(())
}

/// Pick a member, pre-fill the form and apply the merge-patch.
pub async fn edit(config: &Config) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let members = store.fetch_all().await?;
    if members.is_empty() {
        println!("Geen leden gevonden.");
        return Ok(());
    }

    let labels = selection_list(&members);
    let choice = match optional(Select::new("Aan te passen lid", labels).prompt())? {
        Some(choice) => choice,
        None => return Ok(()),
    };
    let member_id = selected_id(&choice).to_string();
    let member = store.retrieve(member_id.clone()).await?;

    println!();
    println!("Lid id: {}", member.id);

    let patch = match member_form(&MemberPatch::from(&member))? {
        Some(patch) => patch,
        None => return Ok(()),
    };

    println!();
    (member.clone(), patch.clone().into_member(member.id.clone())).print_formatted();
    println!();
    let confirmed = match optional(Confirm::new("Lid aanpassen?").with_default(true).prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };
    if !confirmed {
        return Ok(());
    }

    match store.update(member_id.clone(), patch).await {
        Ok(member) => println!("Lid met ID {} is aangepast.", member.id),
        Err(err) => {
            error!(error = ?err, "update failed");
            println!("Lid met ID {} kon niet aangepast worden.", member_id);
        }
    }
    Ok(())
}

/// Pick a member and delete it. The delete call does not check
/// whether the ID still existed.
pub async fn delete(config: &Config) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let members = store.fetch_all().await?;
    if members.is_empty() {
        println!("Geen leden gevonden.");
        return Ok(());
    }

    let labels = selection_list(&members);
    let choice = match optional(Select::new("Te verwijderen lid", labels).prompt())? {
        Some(choice) => choice,
        None => return Ok(()),
    };
    let member_id = selected_id(&choice).to_string();

    let prompt = format!("Lid met ID {} verwijderen?", member_id);
    let confirmed = match optional(Confirm::new(&prompt).with_default(true).prompt())? {
        Some(value) => value,
        None => return Ok(()),
    };
    if !confirmed {
        return Ok(());
    }

    match store.delete(member_id.clone()).await {
        Ok(()) => println!("Lid met ID {} is verwijderd.", member_id),
        Err(err) => {
            error!(error = ?err, "delete failed");
            println!("Lid met ID {} kon niet verwijderd worden.", member_id);
        }
    }
    Ok(())
}

/// Year-end closing. The rollover rules were never agreed on, so
/// after the confirmation nothing is changed.
pub async fn year_end(_config: &Config) -> Result<()> {
    let confirmed = match optional(
        Confirm::new("Jaarafsluiting starten?")
            .with_default(false)
            .prompt(),
    )? {
        Some(value) => value,
        None => return Ok(()),
    };
    if !confirmed {
        println!("Jaarafsluiting geannuleerd.");
        return Ok(());
    }

    warn!("year-end closing requested, but no rollover rules are defined");
    println!("De jaarafsluiting is nog niet beschikbaar.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_prompt_retry_starts_from_the_rejected_entry() {
        let mut seeds = Vec::new();
        let mut typed = vec!["0473 12 34 56", "geen nummer"];
        let number = phone_prompt("+32 2 345 67 89", CountryCode::BE, |seed| {
            seeds.push(seed.to_string());
            Ok(typed.pop().map(|s| s.to_string()))
        })
        .unwrap()
        .unwrap();

        assert_eq!(seeds, vec!["+32 2 345 67 89", "geen nummer"]);
        assert!(number.starts_with("+32 4"), "got {number}");
    }

    #[test]
    fn test_phone_prompt_backing_out_returns_none() {
        let result = phone_prompt("02 345 67 89", CountryCode::BE, |_| Ok(None)).unwrap();
        assert_eq!(result, None);
    }
}
