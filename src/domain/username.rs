use serde::{Deserialize, Serialize};

use super::ValidationError;

const MAX_USERNAME_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(ValidationError::new("Username cannot be empty")),
            x if x > MAX_USERNAME_CHARS => Err(ValidationError::new(format!(
                "Max username length is {MAX_USERNAME_CHARS} characters"
            ))),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[test]
fn test_valid_usernames() {
    let valid_names = ["a".to_string(), "admin".to_string(), "é".repeat(64)];
    for valid_name in valid_names.iter() {
        let parsed =
            Username::parse(valid_name).expect("Failed to parse valid username");
        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_blank_usernames() {
    for blank in ["", "   "] {
        let error = Username::parse(blank).expect_err(blank);
        assert_eq!(error.as_ref(), "Username cannot be empty");
    }
}

#[test]
fn test_long_usernames() {
    let error = Username::parse(&"a".repeat(65)).unwrap_err();
    assert_eq!(error.as_ref(), "Max username length is 64 characters");
}
