
pub mod connection;
pub use connection::{Store, StoreConfig};

pub mod results;
pub use results::StoreError;

pub mod members;

pub mod migrate;
pub use migrate::MigrationReport;
