//! Error type shared by every fallible operation in the engine.
//!
//! Only contract violations are errors. "No set on this board" and
//! "the deck ran out while dealing" are ordinary results and never show
//! up here.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::zones::Slot;

/// Everything that can go wrong when calling into the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// The validator was handed something other than three cards.
    #[error("expected exactly 3 cards, got {0}")]
    WrongArity(usize),

    /// A set was demanded from a board holding fewer than three cards.
    #[error("board holds {0} cards, at least 3 are needed to form a set")]
    BoardTooSmall(usize),

    /// Card identifiers live in `0..81`.
    #[error("unknown card id {0}")]
    UnknownCard(u32),

    /// The same card was supplied twice where each card may appear once.
    #[error("{0} given more than once")]
    DuplicateCard(CardId),

    /// Text from the outside world could not be turned into a value.
    #[error("cannot parse {kind} from {value:?}")]
    Parse { kind: &'static str, value: String },

    #[error("{0} is outside the board")]
    SlotOutOfRange(Slot),

    #[error("{0} is empty")]
    EmptySlot(Slot),

    #[error("{0} was selected more than once")]
    DuplicateSlot(Slot),

    /// The selected cards are all on the board but do not form a set.
    #[error("cards at {} {} {} do not form a set", .0[0], .0[1], .0[2])]
    NotASet([Slot; 3]),

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("game is already over")]
    GameOver,

    #[error("game is still in progress")]
    GameInProgress,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Deck, board and discard no longer partition the 81 cards.
    #[error("card partition broken: {0}")]
    PartitionViolated(String),

    #[error("snapshot codec failed: {0}")]
    Snapshot(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;
