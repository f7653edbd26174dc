//! # Game Rules
//!
//! Game state for Beyond the Screen: the player entities and their inventories,
//! the session registry, level progression, and the save persistence that
//! keeps all of it on disk. This crate holds no narrative flow.

pub mod entities;
pub mod mechanics;
pub mod persistence;
pub mod world_state;

pub use entities::*;
pub use mechanics::*;
pub use persistence::*;
pub use world_state::*;
