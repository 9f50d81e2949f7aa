//! Storyloom Engine library.
//!
//! Backend for the Storyloom text adventure: narration turns proxied to a
//! completion service, plus the public storyboard of shared stories.
//!
//! ## Structure
//!
//! - `use_cases/` - Narration, storyboard and profile orchestration
//! - `infrastructure/` - Configuration, ports and their adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
