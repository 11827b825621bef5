use anyhow::Result;
use bson::{doc, Document};

use crate::Store;

/// Counts reported by a legacy status rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub activated: u64,
    pub deactivated: u64,
}

/// The rewrite steps as (filter, update) pairs: boolean `true`
/// becomes `"Ja"`, boolean `false` becomes `"Nee"`.
fn status_rewrites() -> [(Document, Document); 2] {
    [
        (
            doc! { "Actueel_lid": true },
            doc! { "$set": { "Actueel_lid": "Ja" } },
        ),
        (
            doc! { "Actueel_lid": false },
            doc! { "$set": { "Actueel_lid": "Nee" } },
        ),
    ]
}

impl Store {
    /// Documents still carrying the boolean-era membership flag.
    /// Those fail to decode as members until migrated.
    pub async fn count_legacy_status(&self) -> Result<u64> {
        let count = self
            .members()
            .count_documents(doc! { "Actueel_lid": { "$type": "bool" } })
            .await?;
        Ok(count)
    }

    /// Rewrite the boolean-era `Actueel_lid` values to the tri-state
    /// strings.
    pub async fn migrate_membership_status(&self) -> Result<MigrationReport> {
        let members = self.members();
        let [(was_active, activate), (was_inactive, deactivate)] = status_rewrites();
        let activated = members
            .update_many(was_active, activate)
            .await?
            .modified_count;
        let deactivated = members
            .update_many(was_inactive, deactivate)
            .await?
            .modified_count;
        Ok(MigrationReport {
            activated,
            deactivated,
        })
    }
}

#[cfg(test)]
mod tests {
    use leden_data::MembershipStatus;

    use super::*;

    #[test]
    fn test_status_rewrites() {
        let [(was_active, activate), (was_inactive, deactivate)] = status_rewrites();

        assert_eq!(was_active, doc! { "Actueel_lid": true });
        assert_eq!(activate, doc! { "$set": { "Actueel_lid": "Ja" } });

        assert_eq!(was_inactive, doc! { "Actueel_lid": false });
        assert_eq!(deactivate, doc! { "$set": { "Actueel_lid": "Nee" } });
    }

    #[test]
    fn test_rewritten_statuses_decode() {
        // The written strings must decode as the tri-state status.
        let [(_, activate), (_, deactivate)] = status_rewrites();

        let active = activate
            .get_document("$set")
            .unwrap()
            .get_str("Actueel_lid")
            .unwrap();
        assert_eq!(
            bson::from_bson::<MembershipStatus>(bson::Bson::String(active.to_string())).unwrap(),
            MembershipStatus::Active
        );

        let inactive = deactivate
            .get_document("$set")
            .unwrap()
            .get_str("Actueel_lid")
            .unwrap();
        assert_eq!(
            bson::from_bson::<MembershipStatus>(bson::Bson::String(inactive.to_string())).unwrap(),
            MembershipStatus::Inactive
        );
    }
}
