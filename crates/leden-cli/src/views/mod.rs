use anyhow::Result;
use inquire::InquireError;

pub mod members;
pub mod newsletter;

/// The entered value, or None when the operator backed out of the
/// prompt with Esc or Ctrl-C.
pub fn optional<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
