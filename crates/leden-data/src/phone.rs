use anyhow::{anyhow, Result};
use phonenumber::{country, Mode};

use crate::CountryCode;

fn region(country: CountryCode) -> country::Id {
    match country {
        CountryCode::BE => country::BE,
        CountryCode::NL => country::NL,
        CountryCode::FR => country::FR,
    }
}

/// Normalize a phone number to international notation, using the
/// member's country to resolve numbers written without a prefix.
/// Numbers that already carry a `+` prefix keep their own country.
/// An empty input stays empty.
pub fn format_phone(raw: &str, country: CountryCode) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    let number = phonenumber::parse(Some(region(country)), raw)
        .map_err(|e| anyhow!("cannot parse phone number {raw:?}: {e}"))?;
    if !phonenumber::is_valid(&number) {
        return Err(anyhow!("not a valid {} phone number: {raw:?}", country));
    }
    Ok(number.format().mode(Mode::International).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(format_phone("", CountryCode::BE).unwrap(), "");
        assert_eq!(format_phone("   ", CountryCode::NL).unwrap(), "");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(format_phone("geen nummer", CountryCode::BE).is_err());
    }

    #[test]
    fn test_national_number_gets_country_prefix() {
        let formatted = format_phone("02 345 67 89", CountryCode::BE).unwrap();
        assert!(formatted.starts_with("+32"), "got {formatted}");

        let mobile = format_phone("0473 12 34 56", CountryCode::BE).unwrap();
        assert!(mobile.starts_with("+32"), "got {mobile}");
    }

    #[test]
    fn test_existing_prefix_wins_over_country() {
        // A Belgian number on a member filed under NL keeps +32.
        let formatted = format_phone("+32 2 345 67 89", CountryCode::NL).unwrap();
        assert!(formatted.starts_with("+32"), "got {formatted}");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = format_phone("0473 12 34 56", CountryCode::BE).unwrap();
        let twice = format_phone(&once, CountryCode::BE).unwrap();
        assert_eq!(once, twice);
    }
}
