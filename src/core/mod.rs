//! Core engine types: players, RNG, configuration, claim history.
//!
//! These are the pieces a session is assembled from. None of them know
//! anything about card attributes or the set rule.

pub mod player;
pub mod rng;
pub mod config;
pub mod claim;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use claim::ClaimRecord;
