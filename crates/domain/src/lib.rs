//! Storyloom domain: the profanity sanitizer, narration value objects and
//! storyboard entities. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod narration;
pub mod sanitizer;
pub mod value_objects;

pub use entities::{
    NewComment, NewStory, Profile, ProfileUpdate, Story, StoryComment, StoryReaction,
};
pub use error::DomainError;
pub use ids::{CommentId, StoryId};
pub use narration::{NarrationRequest, MAX_NARRATION_TOKENS, NARRATOR_HESITATION};
pub use sanitizer::{sanitize, sanitize_opt, BANNED_TERMS};
pub use value_objects::{
    ClientId, ConversationRole, ConversationTurn, DramaLevel, Mood, Nickname, ANONYMOUS_AUTHOR,
    DEFAULT_MOOD_SENTINEL,
};
