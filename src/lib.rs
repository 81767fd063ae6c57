//! # set-engine
//!
//! Card model, set validation and board lifecycle for the SET card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: The set rule and the board search are plain functions
//!    over card values. They never see sessions, transports, or UI state.
//!
//! 2. **Invalid States Unrepresentable**: Attributes are closed enums and
//!    card identifiers are range-checked, so a malformed card cannot reach
//!    the validator.
//!
//! 3. **Explicit State**: A session owns its deck, board, discard, scores
//!    and RNG. There is no global state and no hidden randomness.
//!
//! ## Invariants
//!
//! - Deck, board and discard always partition the 81 cards.
//! - Every state change applies completely or not at all.
//! - The finder visits triples in lexicographic slot order, so the same
//!   board always yields the same first set.
//!
//! ## Modules
//!
//! - `cards`: Attributes, cards, card IDs, deck construction
//! - `rules`: The set predicate and exhaustive board search
//! - `zones`: Deck / board / discard partition and card movement
//! - `core`: Players, RNG, configuration, claim history
//! - `game`: Full sessions with scoring, growth, game over and snapshots
//!
//! ## Example
//!
//! ```
//! use set_engine::{GameConfig, GameSessionBuilder, PlayerId};
//!
//! let mut session = GameSessionBuilder::new()
//!     .config(GameConfig::new(2))
//!     .build(42)
//!     .unwrap();
//!
//! let triple = session.hint().expect("a fresh board always shows a set");
//! let outcome = session.claim(PlayerId::new(0), triple).unwrap();
//! assert_eq!(session.score(PlayerId::new(0)), Some(1));
//! assert_eq!(outcome.record.slots, triple);
//! ```

pub mod error;
pub mod core;
pub mod cards;
pub mod rules;
pub mod zones;
pub mod game;

// Re-export commonly used types
pub use crate::error::{Result, SetError};

pub use crate::core::{ClaimRecord, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap};

pub use crate::cards::{
    build_deck, Attribute, Card, CardId, Color, Count, Deck, Shading, Symbol, DECK_SIZE,
};

pub use crate::rules::{
    count_sets, failing_attributes, find_all_sets, find_set, find_set_strict, has_set,
    is_valid_set, third_card, validate_triple,
};

pub use crate::zones::{Slot, Zone, ZoneManager};

pub use crate::game::{
    ClaimOutcome, GameResult, GameSession, GameSessionBuilder, GameStatus, SessionSnapshot,
};
