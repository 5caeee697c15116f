//! mentalmath-core: Problem generation, scoring, and the session loop.
//!
//! This crate defines the data model, the console and clock ports, and the
//! game logic that the mentalmath binary drives.

pub mod console;
pub mod error;
pub mod generator;
pub mod model;
pub mod prompts;
pub mod scoring;
pub mod session;
pub mod statistics;
pub mod traits;

pub use error::GameError;
