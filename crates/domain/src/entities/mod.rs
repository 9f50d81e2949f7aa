//! Storyboard entities - shared stories and what players attach to them

mod comment;
mod profile;
mod reaction;
mod story;

pub use comment::{NewComment, StoryComment, MAX_COMMENT_LENGTH};
pub use profile::{Profile, ProfileUpdate};
pub use reaction::StoryReaction;
pub use story::{NewStory, Story, MAX_CONTENT_LENGTH, MAX_HANDLE_LENGTH, MAX_TITLE_LENGTH};
