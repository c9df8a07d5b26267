use serde::{Deserialize, Serialize};

/// Lifecycle state of a stored contact submission. This service only ever
/// writes `New`; triage happens outside of it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str
    {
        match self {
            ContactStatus::New => "new",
        }
    }
}
