use serde::{Deserialize, Serialize};
use crate::portfolio::enums::contact_status::ContactStatus;

/// A stored contact-form submission. Immutable once written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: i64,
    pub status: ContactStatus,
    pub origin_address: String,
}
