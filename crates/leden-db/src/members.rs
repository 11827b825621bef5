use anyhow::Result;
use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;

use leden_data::{Delete, FetchAll, Insert, Member, MemberPatch, Retrieve, Update};

use crate::{results::StoreError, Store};

#[async_trait]
impl FetchAll<Member> for Store {
    async fn fetch_all(&self) -> Result<Vec<Member>> {
        let cursor = self.members().find(doc! {}).await?;
        let members = cursor.try_collect().await?;
        Ok(members)
    }
}

#[async_trait]
impl Retrieve<Member> for Store {
    type Key = String;
    async fn retrieve(&self, member_id: Self::Key) -> Result<Member> {
        let member = self
            .members()
            .find_one(doc! { "ID": &member_id })
            .await?
            .ok_or(StoreError::NotFound(member_id))?;
        Ok(member)
    }
}

#[async_trait]
impl Insert<Member> for Store {
    async fn insert(&self, member: Member) -> Result<Member> {
        self.members().insert_one(&member).await?;
        self.retrieve(member.id).await
    }
}

#[async_trait]
impl Update<Member> for Store {
    type Key = String;
    type Patch = MemberPatch;

    /// Merge-patch everything except the immutable ID.
    async fn update(&self, member_id: Self::Key, patch: Self::Patch) -> Result<Member> {
        let fields = bson::to_document(&patch)?;
        self.members()
            .update_one(doc! { "ID": &member_id }, doc! { "$set": fields })
            .await?;
        self.retrieve(member_id).await
    }
}

#[async_trait]
impl Delete<Member> for Store {
    type Key = String;

    /// Delete by ID. A missing ID deletes nothing and is not an error,
    /// so the deleted-count stays uninspected.
    async fn delete(&self, member_id: Self::Key) -> Result<()> {
        self.members().delete_one(doc! { "ID": &member_id }).await?;
        Ok(())
    }
}
