//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod openai;
pub mod ports;
pub mod postgrest;
