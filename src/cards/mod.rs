//! Card system: attributes, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Count`, `Shading`, `Color`, `Symbol`: closed three-valued attributes
//! - `Attribute`: names one of the four attributes
//! - `Card`: one value per attribute, immutable
//! - `CardId`: canonical one-byte identifier, `0..81`
//! - `Deck`: ordered pile of undealt cards

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Count, Shading, Symbol};
pub use card::{Card, CardId, DECK_SIZE};
pub use deck::{build_deck, Deck};
