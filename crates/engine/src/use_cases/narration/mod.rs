//! Narration use cases.
//!
//! One turn of the text adventure: prompt from history and style knobs, one
//! completion call, sanitized text back.

use std::sync::Arc;

mod continue_story;
mod extract;
mod prompt;

pub use continue_story::{ContinueNarration, NarrationError};
pub use extract::extract_output_text;
pub use prompt::{build_messages, system_instruction, NARRATOR_INSTRUCTION};

/// Container for narration use cases.
pub struct NarrationUseCases {
    pub continue_story: Arc<ContinueNarration>,
}

impl NarrationUseCases {
    pub fn new(continue_story: Arc<ContinueNarration>) -> Self {
        Self { continue_story }
    }
}
