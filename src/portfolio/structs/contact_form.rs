use serde::{Deserialize, Serialize};

/// Inbound contact-form payload. All three fields are required; extra
/// fields sent by clients are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Returns the name of the first missing or empty required field,
    /// checked in the order name, email, message.
    pub fn validate(&self) -> Result<(), &'static str>
    {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            match value {
                Some(content) if !content.trim().is_empty() => {}
                _ => { return Err(field); }
            }
        }
        Ok(())
    }
}
