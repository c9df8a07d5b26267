use thiserror::Error;
use crate::portfolio::enums::tracking_error::TrackingError;

/// Failure kinds for contact-form submission.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("missing field: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Store(#[from] TrackingError),
}
