//! Claim history: which player took which triple.
//!
//! Every accepted claim is recorded with the slots the player pointed at
//! and the cards that were there at the time, so the history stays
//! meaningful after the board has been refilled.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;
use crate::zones::Slot;

/// One accepted claim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// The player who found the set.
    pub player: PlayerId,

    /// Board positions the player selected.
    pub slots: [Slot; 3],

    /// Cards that were in those slots.
    pub cards: [CardId; 3],

    /// Position of this claim in the session history (0-based).
    pub sequence: u32,
}

impl ClaimRecord {
    #[must_use]
    pub fn new(player: PlayerId, slots: [Slot; 3], cards: [CardId; 3], sequence: u32) -> Self {
        Self {
            player,
            slots,
            cards,
            sequence,
        }
    }
}
