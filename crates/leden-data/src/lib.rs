// Operations
mod operations;
pub use operations::*;

// Models
mod members;
pub use members::*;

// Formatting helpers
mod phone;
pub use phone::*;

pub mod bson_date;
