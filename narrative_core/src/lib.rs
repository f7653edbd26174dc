//! # Narrative Core
//!
//! The story side of Beyond the Screen. This crate drives the narrative state
//! machine, from the main menu through the intro and character creation into
//! gameplay, and reaches game state (`game_rules`) only through the facade.
//!
//! ## Core Components
//!
//! - **story**: Phases, inputs and the dialogue script
//! - **facade**: Create, save, load and reset operations for the story to call
//! - **config**: TOML configuration for save location, lives, levels and script

pub mod config;
pub mod facade;
pub mod story;

pub use config::*;
pub use facade::*;
pub use story::*;
