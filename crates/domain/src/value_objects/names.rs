//! Validated string newtypes for storyboard fields
//!
//! These newtypes ensure that values are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace
//!
//! Player-visible text is also passed through the sanitizer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::sanitizer::sanitize;

/// Maximum length for a browser-generated client identifier
const MAX_CLIENT_ID_LENGTH: usize = 128;

/// Maximum length for nicknames and author names
const MAX_NICKNAME_LENGTH: usize = 40;

/// Author shown when a story or comment is shared without one
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

fn validated(value: &str, field: &str, max: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// ClientId
// ============================================================================

/// Opaque identifier a browser generates for itself (no accounts).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

impl ClientId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is blank or longer than 128 characters.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        validated(&id.into(), "clientId", MAX_CLIENT_ID_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> String {
        id.0
    }
}

// ============================================================================
// Nickname
// ============================================================================

/// A sanitized display name (non-empty, <=40 chars, trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the nickname is blank or longer than 40 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(&name.into(), "nickname", MAX_NICKNAME_LENGTH).map(|n| Self(sanitize(&n)))
    }

    /// Author name with the anonymous fallback for blank input.
    pub fn author_or_anonymous(name: Option<&str>) -> Result<Self, DomainError> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => validated(name, "author", MAX_NICKNAME_LENGTH).map(|n| Self(sanitize(&n))),
            None => Ok(Self(ANONYMOUS_AUTHOR.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nickname> for String {
    fn from(name: Nickname) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod client_id {
        use super::*;

        #[test]
        fn trims_and_keeps_value() {
            let id = ClientId::new("  c-42  ").unwrap();
            assert_eq!(id.as_str(), "c-42");
        }

        #[test]
        fn blank_rejected() {
            let err = ClientId::new("   ").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("clientId is required"));
        }

        #[test]
        fn too_long_rejected() {
            assert!(ClientId::new("x".repeat(129)).is_err());
            assert!(ClientId::new("x".repeat(128)).is_ok());
        }
    }

    mod nickname {
        use super::*;

        #[test]
        fn sanitized_on_construction() {
            let name = Nickname::new("Shit Lord").unwrap();
            assert_eq!(name.as_str(), "Sh*t Lord");
        }

        #[test]
        fn length_counts_characters_not_bytes() {
            assert!(Nickname::new("é".repeat(40)).is_ok());
            assert!(Nickname::new("é".repeat(41)).is_err());
        }

        #[test]
        fn missing_author_is_anonymous() {
            assert_eq!(Nickname::author_or_anonymous(None).unwrap().as_str(), ANONYMOUS_AUTHOR);
            assert_eq!(
                Nickname::author_or_anonymous(Some("  ")).unwrap().as_str(),
                ANONYMOUS_AUTHOR
            );
            assert_eq!(Nickname::author_or_anonymous(Some("Ada")).unwrap().as_str(), "Ada");
        }

        #[test]
        fn deserialization_validates() {
            assert!(serde_json::from_str::<Nickname>("\"\"").is_err());
            let name: Nickname = serde_json::from_str("\"Bob\"").unwrap();
            assert_eq!(name.as_str(), "Bob");
        }
    }
}
