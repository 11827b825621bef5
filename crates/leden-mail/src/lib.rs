
// Newsletter composition and dispatch
mod newsletter;
pub use newsletter::*;

// SMTP transport
mod smtp;
pub use smtp::*;
