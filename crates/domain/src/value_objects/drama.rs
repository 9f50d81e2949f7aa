//! Drama level: how theatrical the narrator is and how much the sampler varies.

use std::fmt;

/// Narrator verbosity/theatricality, 1 (plain) to 5 (theatrical).
///
/// Parsing is total: anything that is not exactly `"1"`..`"5"` is
/// [`DramaLevel::Balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DramaLevel {
    Plain,
    Simple,
    #[default]
    Balanced,
    Dramatic,
    Theatrical,
}

impl DramaLevel {
    pub fn all() -> &'static [DramaLevel] {
        &[
            DramaLevel::Plain,
            DramaLevel::Simple,
            DramaLevel::Balanced,
            DramaLevel::Dramatic,
            DramaLevel::Theatrical,
        ]
    }

    /// Interpret a raw value already coerced to a string.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("1") => DramaLevel::Plain,
            Some("2") => DramaLevel::Simple,
            Some("3") => DramaLevel::Balanced,
            Some("4") => DramaLevel::Dramatic,
            Some("5") => DramaLevel::Theatrical,
            _ => DramaLevel::default(),
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            DramaLevel::Plain => 1,
            DramaLevel::Simple => 2,
            DramaLevel::Balanced => 3,
            DramaLevel::Dramatic => 4,
            DramaLevel::Theatrical => 5,
        }
    }

    /// Sampling temperature sent to the completion service.
    pub fn temperature(&self) -> f32 {
        match self {
            DramaLevel::Plain => 0.40,
            DramaLevel::Simple => 0.55,
            DramaLevel::Balanced => 0.70,
            DramaLevel::Dramatic => 0.85,
            DramaLevel::Theatrical => 1.00,
        }
    }

    /// Style clause appended to the narrator's system instruction.
    pub fn instruction(&self) -> &'static str {
        match self {
            DramaLevel::Plain => {
                "Drama level 1: narrate very plainly. Use short, simple sentences and keep detail to a minimum."
            }
            DramaLevel::Simple => {
                "Drama level 2: narrate simply, adding an occasional touch of description."
            }
            DramaLevel::Balanced => {
                "Drama level 3: balance action and detail, with a moderate amount of description."
            }
            DramaLevel::Dramatic => {
                "Drama level 4: be dramatic. Use vivid imagery and build suspense."
            }
            DramaLevel::Theatrical => {
                "Drama level 5: be highly theatrical. Use rich detail, strong emotion and bold flourishes."
            }
        }
    }
}

impl fmt::Display for DramaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
