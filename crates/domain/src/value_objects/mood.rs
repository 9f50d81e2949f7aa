//! Narrator mood override.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value meaning "no mood override".
pub const DEFAULT_MOOD_SENTINEL: &str = "default";

/// Genre/tone hint for the narrator.
///
/// Clients send a free-form string; the literal `"default"` (or nothing at all)
/// means the narrator keeps its baseline tone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Mood {
    #[default]
    Default,
    Custom(String),
}

impl Mood {
    /// Interpret a raw wire value. Only an absent value or the exact sentinel
    /// map to [`Mood::Default`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Mood::Default,
            Some(DEFAULT_MOOD_SENTINEL) => Mood::Default,
            Some(mood) => Mood::Custom(mood.to_string()),
        }
    }

    pub fn custom(&self) -> Option<&str> {
        match self {
            Mood::Default => None,
            Mood::Custom(mood) => Some(mood),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Mood::Default)
    }
}

impl From<Option<String>> for Mood {
    fn from(raw: Option<String>) -> Self {
        Mood::from_raw(raw.as_deref())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> String {
        match mood {
            Mood::Default => DEFAULT_MOOD_SENTINEL.to_string(),
            Mood::Custom(mood) => mood,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Default => f.write_str(DEFAULT_MOOD_SENTINEL),
            Mood::Custom(mood) => f.write_str(mood),
        }
    }
}
