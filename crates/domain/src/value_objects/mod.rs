//! Value objects for narration and the storyboard.

mod conversation;
mod drama;
mod mood;
mod names;

pub use conversation::{ConversationRole, ConversationTurn};
pub use drama::DramaLevel;
pub use mood::{Mood, DEFAULT_MOOD_SENTINEL};
pub use names::{ClientId, Nickname, ANONYMOUS_AUTHOR};
