//! Plain-data captures of a session for persistence or transfer.
//!
//! A `SessionSnapshot` holds nothing but serde-friendly values. The
//! surrounding application decides where it goes; `to_bytes` and
//! `from_bytes` give it a compact bincode encoding for free.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::session::{GameSession, GameStatus};
use crate::cards::CardId;
use crate::core::{ClaimRecord, GameConfig, GameRng, GameRngState, PlayerMap};
use crate::error::{Result, SetError};
use crate::zones::ZoneManager;

/// Everything needed to rebuild a `GameSession` exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    /// Undealt cards, next card first.
    pub deck: Vec<CardId>,
    pub board: Vec<Option<CardId>>,
    pub discard: Vec<CardId>,
    pub scores: PlayerMap<u32>,
    pub history: Vec<ClaimRecord>,
    pub status: GameStatus,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| SetError::Snapshot(e.to_string()))
    }

    /// Decode from bincode. The result is not checked until it is restored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| SetError::Snapshot(e.to_string()))
    }
}

impl GameSession {
    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            deck: self.zones.deck().iter().collect(),
            board: self.zones.board().to_vec(),
            discard: self.zones.discard().to_vec(),
            scores: self.scores.clone(),
            history: self.history.iter().cloned().collect(),
            status: self.status.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session, rejecting snapshots that break the card partition
    /// or disagree with their own configuration.
    ///
    /// An in-progress session is settled on the way in: a board below its
    /// base size is refilled and a set-free board grows or ends the game,
    /// exactly as after a claim.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        if snapshot.scores.player_count() != snapshot.config.player_count {
            return Err(SetError::InvalidConfig(format!(
                "{} scores for {} players",
                snapshot.scores.player_count(),
                snapshot.config.player_count
            )));
        }

        if let Some(record) = snapshot
            .history
            .iter()
            .find(|record| !snapshot.scores.contains(record.player))
        {
            return Err(SetError::UnknownPlayer(record.player));
        }

        let zones = ZoneManager::from_parts(snapshot.deck, snapshot.board, snapshot.discard)?;

        let mut session = Self {
            config: snapshot.config,
            zones,
            scores: snapshot.scores,
            history: Vector::from(snapshot.history),
            status: snapshot.status,
            rng: GameRng::from_state(&snapshot.rng),
        };
        if !session.is_over() {
            let dealt = session.settle();
            if !dealt.is_empty() || session.is_over() {
                warn!(
                    dealt = dealt.len(),
                    over = session.is_over(),
                    "restored snapshot was not playable, settled it"
                );
            }
        }
        Ok(session)
    }
}
