//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Slot`: board position identifier
//! - `Zone`: deck, a board slot, or discard
//! - `ZoneManager`: owns the deck / board / discard partition and moves
//!   cards between them

pub mod manager;

pub use manager::{Dealt, Slot, Zone, ZoneManager};
