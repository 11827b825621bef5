use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bson_date;

/// Salutation used in correspondence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Salutation {
    #[default]
    #[serde(rename = "Mijnheer")]
    Mr,
    #[serde(rename = "Mevrouw")]
    Mrs,
}

impl Salutation {
    pub const ALL: [Salutation; 2] = [Salutation::Mr, Salutation::Mrs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Salutation::Mr => "Mijnheer",
            Salutation::Mrs => "Mevrouw",
        }
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    #[default]
    BE,
    NL,
    FR,
}

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [CountryCode::BE, CountryCode::NL, CountryCode::FR];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::BE => "BE",
            CountryCode::NL => "NL",
            CountryCode::FR => "FR",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Membership status. Stored as free text; older collections carried a
/// boolean here, which has to be rewritten first (see the status
/// migration in the store crate) before documents decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    #[serde(rename = "Ja")]
    Active,
    #[default]
    #[serde(rename = "Nee")]
    Inactive,
    /// Kept on the mailing list for postal address purposes only.
    #[serde(rename = "Adres")]
    AddressOnly,
}

impl MembershipStatus {
    pub const ALL: [MembershipStatus; 3] = [
        MembershipStatus::Active,
        MembershipStatus::Inactive,
        MembershipStatus::AddressOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "Ja",
            MembershipStatus::Inactive => "Nee",
            MembershipStatus::AddressOnly => "Adres",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One member document. The field renames pin the historical Dutch
/// keys of the collection, including the misspelled `Nieuwbrief`.
/// Mongo's own `_id` is left to the server and not part of the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Partnerid", default)]
    pub partner_id: String,
    #[serde(rename = "Aanspreekvorm")]
    pub salutation: Salutation,
    #[serde(rename = "Naam")]
    pub last_name: String,
    #[serde(rename = "Voornaam")]
    pub first_name: String,
    #[serde(rename = "Straat")]
    pub street: String,
    #[serde(rename = "Postcode")]
    pub postal_code: u32,
    #[serde(rename = "Woonplaats")]
    pub city: String,
    #[serde(rename = "Landcode")]
    pub country: CountryCode,
    #[serde(rename = "Telefoon")]
    pub phone: String,
    #[serde(rename = "GSM")]
    pub mobile: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Geboortedatum", with = "bson_date")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "Enieuwsbrief")]
    pub email_newsletter: bool,
    #[serde(rename = "Nieuwbrief")]
    pub paper_newsletter: bool,
    #[serde(rename = "Actueel_lid")]
    pub membership: MembershipStatus,
    #[serde(rename = "Lidgeld")]
    pub fee_paid: bool,
    #[serde(rename = "Begeleider")]
    pub mentor: bool,
}

impl Member {
    /// Label shown in the edit and delete pickers.
    pub fn selection_label(&self) -> String {
        format!("{} | {}, {}", self.id, self.last_name, self.first_name)
    }
}

/// Every member field except the immutable `ID`, used as the
/// merge-patch payload of an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberPatch {
    #[serde(rename = "Partnerid")]
    pub partner_id: String,
    #[serde(rename = "Aanspreekvorm")]
    pub salutation: Salutation,
    #[serde(rename = "Naam")]
    pub last_name: String,
    #[serde(rename = "Voornaam")]
    pub first_name: String,
    #[serde(rename = "Straat")]
    pub street: String,
    #[serde(rename = "Postcode")]
    pub postal_code: u32,
    #[serde(rename = "Woonplaats")]
    pub city: String,
    #[serde(rename = "Landcode")]
    pub country: CountryCode,
    #[serde(rename = "Telefoon")]
    pub phone: String,
    #[serde(rename = "GSM")]
    pub mobile: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Geboortedatum", with = "bson_date")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "Enieuwsbrief")]
    pub email_newsletter: bool,
    #[serde(rename = "Nieuwbrief")]
    pub paper_newsletter: bool,
    #[serde(rename = "Actueel_lid")]
    pub membership: MembershipStatus,
    #[serde(rename = "Lidgeld")]
    pub fee_paid: bool,
    #[serde(rename = "Begeleider")]
    pub mentor: bool,
}

impl From<&Member> for MemberPatch {
    fn from(member: &Member) -> Self {
        MemberPatch {
            partner_id: member.partner_id.clone(),
            salutation: member.salutation,
            last_name: member.last_name.clone(),
            first_name: member.first_name.clone(),
            street: member.street.clone(),
            postal_code: member.postal_code,
            city: member.city.clone(),
            country: member.country,
            phone: member.phone.clone(),
            mobile: member.mobile.clone(),
            email: member.email.clone(),
            date_of_birth: member.date_of_birth,
            email_newsletter: member.email_newsletter,
            paper_newsletter: member.paper_newsletter,
            membership: member.membership,
            fee_paid: member.fee_paid,
            mentor: member.mentor,
        }
    }
}

impl MemberPatch {
    /// Reassemble a full member from the patch and its key.
    pub fn into_member(self, id: String) -> Member {
        Member {
            id,
            partner_id: self.partner_id,
            salutation: self.salutation,
            last_name: self.last_name,
            first_name: self.first_name,
            street: self.street,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
            phone: self.phone,
            mobile: self.mobile,
            email: self.email,
            date_of_birth: self.date_of_birth,
            email_newsletter: self.email_newsletter,
            paper_newsletter: self.paper_newsletter,
            membership: self.membership,
            fee_paid: self.fee_paid,
            mentor: self.mentor,
        }
    }
}

/// Next free member id: the highest numeric id plus one, "1" for an
/// empty collection. Ids that do not parse as a number are skipped.
pub fn next_member_id(members: &[Member]) -> String {
    members
        .iter()
        .filter_map(|m| m.id.trim().parse::<u64>().ok())
        .max()
        .map(|max| max.saturating_add(1).to_string())
        .unwrap_or_else(|| "1".to_string())
}

/// Picker entries for all members, sorted on the whole label string.
/// The sort is textual, not numeric: "10 | Berg" comes before
/// "2 | Aerts".
pub fn selection_list(members: &[Member]) -> Vec<String> {
    let mut labels: Vec<String> = members.iter().map(Member::selection_label).collect();
    labels.sort();
    labels
}

/// The id is the first token of a selection label.
pub fn selected_id(choice: &str) -> &str {
    choice.split(" | ").next().unwrap_or(choice)
}

/// Number of members whose status is "Ja".
pub fn count_active(members: &[Member]) -> usize {
    members
        .iter()
        .filter(|m| m.membership == MembershipStatus::Active)
        .count()
}
