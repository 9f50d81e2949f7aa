//! Narration request aggregate.
//!
//! Everything the narrator needs for one turn: the dialogue so far, what the
//! player just did, and the two style knobs.

use crate::value_objects::{ConversationTurn, DramaLevel, Mood};

/// Shown when the completion service answers with nothing usable.
pub const NARRATOR_HESITATION: &str =
    "The narrator pauses, searching for the right words... Try another action.";

/// Maximum output tokens requested per narration turn.
pub const MAX_NARRATION_TOKENS: u32 = 220;

/// One request for the next narration turn. Consumed by a single pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NarrationRequest {
    pub history: Vec<ConversationTurn>,
    pub user_turn: String,
    pub mood: Mood,
    pub drama: DramaLevel,
}

impl NarrationRequest {
    pub fn new(user_turn: impl Into<String>) -> Self {
        Self {
            user_turn: user_turn.into(),
            ..Self::default()
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_drama(mut self, drama: DramaLevel) -> Self {
        self.drama = drama;
        self
    }
}
