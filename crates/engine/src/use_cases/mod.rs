//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod narration;
pub mod profile;
pub mod storyboard;

pub use narration::NarrationUseCases;
pub use profile::ProfileUseCases;
pub use storyboard::StoryboardUseCases;
