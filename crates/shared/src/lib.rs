//! Storyloom Protocol - wire types shared by the Engine and browser clients
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient requests** - every request field is optional on the wire

pub mod requests;
pub mod responses;

pub use requests::{
    AddCommentRequest, ContinueRequest, ConversationTurn, LikeStoryRequest, ListStoriesQuery,
    ShareStoryRequest, UpdateProfileRequest,
};
pub use responses::{ErrorResponse, LikeResponse, NarrationResponse, SERVER_FALLBACK_TEXT};
