//! Serde adapter for calendar dates stored as BSON datetimes.
//!
//! The collection keeps birth dates as a full datetime pinned to
//! midnight UTC. Decoding takes the calendar date and drops whatever
//! time of day older writers left behind.

use bson::DateTime;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    DateTime::from_millis(midnight.timestamp_millis()).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = DateTime::deserialize(deserializer)?;
    let utc = chrono::DateTime::<Utc>::from_timestamp_millis(stored.timestamp_millis())
        .ok_or_else(|| serde::de::Error::custom("datetime out of range"))?;
    Ok(utc.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        #[serde(with = "crate::bson_date")]
        date: NaiveDate,
    }

    #[test]
    fn test_roundtrip() {
        let doc = Doc {
            date: NaiveDate::from_ymd_opt(1955, 6, 2).unwrap(),
        };
        let encoded = bson::to_document(&doc).unwrap();
        let back: Doc = bson::from_document(encoded).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_encodes_to_midnight_datetime() {
        let doc = Doc {
            date: NaiveDate::from_ymd_opt(1984, 2, 29).unwrap(),
        };
        let encoded = bson::to_document(&doc).unwrap();
        let stored = encoded.get_datetime("date").unwrap();
        assert_eq!(stored.timestamp_millis() % 86_400_000, 0);
    }

    #[test]
    fn test_decodes_stray_time_of_day_to_its_date() {
        let afternoon = NaiveDate::from_ymd_opt(1955, 6, 2)
            .unwrap()
            .and_hms_opt(13, 45, 12)
            .unwrap()
            .and_utc();
        let mut encoded = bson::Document::new();
        encoded.insert("date", DateTime::from_millis(afternoon.timestamp_millis()));
        let back: Doc = bson::from_document(encoded).unwrap();
        assert_eq!(back.date, NaiveDate::from_ymd_opt(1955, 6, 2).unwrap());
    }

    #[test]
    fn test_pre_epoch_dates_survive() {
        let doc = Doc {
            date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
        };
        let encoded = bson::to_document(&doc).unwrap();
        let back: Doc = bson::from_document(encoded).unwrap();
        assert_eq!(back, doc);
    }
}
