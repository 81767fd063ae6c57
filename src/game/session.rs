//! One game of SET from the first deal to game over.
//!
//! A `GameSession` owns its zones, scoreboard, claim history and RNG
//! outright. Nothing is shared between sessions, so a server hosting many
//! games keeps one session per game behind whatever exclusive-access
//! wrapper it already uses.
//!
//! ## Flow
//!
//! 1. `GameSessionBuilder::build` shuffles, deals `board_size` cards and
//!    grows the board until a set shows (or the deck is empty).
//! 2. `GameSession::claim` checks the triple, discards it, scores it,
//!    refills the board and again makes sure a set is showing.
//! 3. When no set is showing and no more cards can come out, the session
//!    finishes and reports a `GameResult`.
//! 4. `GameSession::rematch` gathers every card, reshuffles from the
//!    session RNG and deals a fresh game for the same table.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{Card, CardId, Deck};
use crate::core::{ClaimRecord, GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::{Result, SetError};
use crate::rules::{find_set, has_set, is_valid_set};
use crate::zones::{Dealt, Slot, ZoneManager};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top scorer.
    Winner(PlayerId),
    /// Several players share the top score.
    Winners(Vec<PlayerId>),
    /// Nobody claimed a set.
    NoClaims,
}

impl GameResult {
    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::NoClaims => false,
        }
    }

    fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.iter().map(|(_, &s)| s).max().unwrap_or(0);
        if best == 0 {
            return GameResult::NoClaims;
        }
        let mut leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, &s)| s == best)
            .map(|(p, _)| p)
            .collect();
        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

/// What an accepted claim did to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub record: ClaimRecord,
    /// Cards dealt afterwards, refill and any growth combined.
    pub dealt: Vec<(Slot, CardId)>,
    pub status: GameStatus,
}

/// Builder for creating a `GameSession`.
#[derive(Clone, Debug, Default)]
pub struct GameSessionBuilder {
    config: GameConfig,
    deck: Option<Deck>,
}

impl GameSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    /// Deal from this exact deck instead of a freshly shuffled one.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the session and make the opening deal.
    pub fn build(self, seed: u64) -> Result<GameSession> {
        self.config.validate()?;

        let mut rng = GameRng::new(seed);
        let deck = match self.deck {
            Some(deck) => deck,
            None if self.config.shuffle => Deck::shuffled(&mut rng),
            None => Deck::standard(),
        };

        let mut session = GameSession {
            scores: PlayerMap::with_value(self.config.player_count, 0),
            config: self.config,
            zones: ZoneManager::new(deck),
            history: Vector::new(),
            status: GameStatus::InProgress,
            rng,
        };
        session.deal_opening();

        info!(
            seed,
            players = session.config.player_count,
            board = session.zones.occupied(),
            "session started"
        );
        Ok(session)
    }
}

/// A single game: table state, scores and history.
///
/// Cloning is cheap enough for what-if exploration; the claim history is a
/// persistent vector.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) zones: ZoneManager,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) history: Vector<ClaimRecord>,
    pub(crate) status: GameStatus,
    pub(crate) rng: GameRng,
}

impl GameSession {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Board slots with their cards, the form the finder consumes.
    #[must_use]
    pub fn board_cards(&self) -> Vec<Option<Card>> {
        self.zones.board_cards()
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.zones.deck().len()
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.scores.get(player).copied()
    }

    /// Accepted claims, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ClaimRecord> {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// First set on the board in slot order, for a "show me a set" button.
    #[must_use]
    pub fn hint(&self) -> Option<[Slot; 3]> {
        find_set(&self.zones.board_cards())
    }

    /// Verify the deck / board / discard partition.
    pub fn check_invariants(&self) -> Result<()> {
        self.zones.check_partition()
    }

    /// Let `player` claim the cards at `slots` as a set.
    ///
    /// A rejected claim (bad player, bad slots, not a set, game over)
    /// changes nothing. An accepted one scores a point, discards the
    /// cards, refills the board and may finish the game.
    pub fn claim(&mut self, player: PlayerId, slots: [Slot; 3]) -> Result<ClaimOutcome> {
        if self.is_over() {
            return Err(SetError::GameOver);
        }
        if !self.scores.contains(player) {
            return Err(SetError::UnknownPlayer(player));
        }

        let [a, b, c] = self.zones.cards_at(slots)?.map(CardId::card);
        if !is_valid_set(&a, &b, &c) {
            warn!(%player, ?slots, "rejected claim: not a set");
            return Err(SetError::NotASet(slots));
        }

        let cards = self.zones.consume(slots)?;
        self.scores[player] += 1;

        let record = ClaimRecord::new(player, slots, cards, self.history.len() as u32);
        self.history.push_back(record.clone());
        info!(
            %player,
            ?cards,
            score = self.scores[player],
            remaining = self.zones.deck().len(),
            "claim accepted"
        );

        let dealt = self.settle();

        Ok(ClaimOutcome {
            record,
            dealt,
            status: self.status.clone(),
        })
    }

    /// Start a new game at the same table once this one is over.
    ///
    /// Every card goes back into the deck, which is reshuffled from the
    /// session RNG (or left in enumeration order when the configuration
    /// turns shuffling off). Scores and history start again from zero.
    pub fn rematch(&mut self) -> Result<()> {
        if !self.is_over() {
            return Err(SetError::GameInProgress);
        }

        let mut deck = Deck::standard();
        if self.config.shuffle {
            deck.shuffle(&mut self.rng);
        }
        self.zones = ZoneManager::new(deck);
        self.scores = PlayerMap::with_value(self.config.player_count, 0);
        self.history = Vector::new();
        self.status = GameStatus::InProgress;
        self.deal_opening();

        info!(
            players = self.config.player_count,
            board = self.zones.occupied(),
            "rematch started"
        );
        Ok(())
    }

    fn deal_opening(&mut self) {
        let size = self.config.board_size;
        self.zones.deal(size, size);
        self.ensure_playable();
    }

    /// Refill to the base size, then grow or finish until the board is
    /// playable. Runs after every change to the table while in progress.
    pub(super) fn settle(&mut self) -> Vec<(Slot, CardId)> {
        let mut dealt: Vec<(Slot, CardId)> = self.refill().into_vec();
        dealt.extend(self.ensure_playable());
        dealt
    }

    /// Bring the board back to `board_size` after a claim, closing gaps
    /// left above the base size first.
    fn refill(&mut self) -> Dealt {
        let base = self.config.board_size;
        self.zones.compact(base);
        let missing = base.saturating_sub(self.zones.occupied());
        self.zones.deal(missing, base)
    }

    /// Grow the board until a set shows; finish the game when it cannot grow.
    fn ensure_playable(&mut self) -> Vec<(Slot, CardId)> {
        let mut dealt = Vec::new();

        while !has_set(&self.zones.board_cards()) {
            let step = self.zones.deal(self.config.deal_step, self.config.max_board_size);
            if step.is_empty() {
                self.finish();
                break;
            }
            debug!(
                added = step.len(),
                board = self.zones.occupied(),
                "no set showing, grew board"
            );
            dealt.extend(step);
        }
        dealt
    }

    fn finish(&mut self) {
        let result = GameResult::from_scores(&self.scores);
        info!(
            ?result,
            claims = self.history.len(),
            left_on_board = self.zones.occupied(),
            left_in_deck = self.zones.deck().len(),
            "game over"
        );
        self.status = GameStatus::Finished(result);
    }
}
