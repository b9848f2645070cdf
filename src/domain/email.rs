use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A syntactically valid email address. Addresses are visible to every
/// authenticated user through the user listing, so they are not wrapped in
/// a `Secret`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if !validator::validate_email(trimmed) {
            return Err(ValidationError::new(format!(
                "Invalid email address: {trimmed}"
            )));
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
