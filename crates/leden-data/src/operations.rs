use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FetchAll<T> {
    /// All entries, in storage order.
    async fn fetch_all(&self) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Update<T> {
    type Key;
    type Patch;
    /// Merge-patch: only the fields in the patch are replaced.
    async fn update(&self, key: Self::Key, patch: Self::Patch) -> Result<T>;
}

#[async_trait]
pub trait Delete<T> {
    type Key;
    async fn delete(&self, key: Self::Key) -> Result<()>;
}
