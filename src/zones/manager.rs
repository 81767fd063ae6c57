//! Zone manager for card locations and movement.
//!
//! Every one of the 81 cards is always in exactly one zone:
//! - the deck, ordered, front dealt first
//! - the board, a row of slots that are either empty or hold one card
//! - the discard, ordered by when cards were claimed
//!
//! The `ZoneManager` owns all three plus a location index, and every
//! mutation either applies completely or not at all.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardId, Deck, DECK_SIZE};
use crate::error::{Result, SetError};

/// Board position. Slot 0 is the first position on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(pub u8);

impl Slot {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Slot for a board index. Boards never exceed the deck size, so the
    /// narrowing is lossless.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

impl FromStr for Slot {
    type Err = SetError;

    /// Parses the decimal position keys clients send, e.g. `"4"`.
    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse().map(Slot).map_err(|_| SetError::Parse {
            kind: "slot",
            value: s.to_string(),
        })
    }
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Board(Slot),
    Discard,
}

/// Cards moved by a single `deal` call, with the slots they landed in.
pub type Dealt = SmallVec<[(Slot, CardId); 3]>;

/// Owns the deck / board / discard partition of the 81 cards.
///
/// ## Usage
///
/// ```
/// use set_engine::cards::Deck;
/// use set_engine::zones::{Slot, ZoneManager};
///
/// let mut zones = ZoneManager::new(Deck::standard());
/// zones.deal(12, 12);
/// assert_eq!(zones.occupied(), 12);
///
/// let taken = zones.consume([Slot(0), Slot(1), Slot(2)]).unwrap();
/// assert_eq!(taken.len(), 3);
/// assert_eq!(zones.discard().len(), 3);
/// assert!(zones.check_partition().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    deck: Deck,
    board: Vec<Option<CardId>>,
    discard: Vec<CardId>,

    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, Zone>,
}

impl ZoneManager {
    /// Start with every card in `deck` and an empty board.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let locations = deck.iter().map(|id| (id, Zone::Deck)).collect();
        Self {
            deck,
            board: Vec::new(),
            discard: Vec::new(),
            locations,
        }
    }

    /// Rebuild from explicit zone contents, verifying the partition.
    pub fn from_parts(
        deck: Vec<CardId>,
        board: Vec<Option<CardId>>,
        discard: Vec<CardId>,
    ) -> Result<Self> {
        if board.len() > DECK_SIZE {
            return Err(SetError::PartitionViolated(format!(
                "board has {} slots",
                board.len()
            )));
        }

        let mut locations = FxHashMap::default();
        for &id in &deck {
            locations.insert(id, Zone::Deck);
        }
        for (i, id) in board.iter().enumerate() {
            if let Some(id) = *id {
                locations.insert(id, Zone::Board(Slot::from_index(i)));
            }
        }
        for &id in &discard {
            locations.insert(id, Zone::Discard);
        }

        let zones = Self {
            deck: Deck::from_ids(deck),
            board,
            discard,
            locations,
        };
        zones.check_partition()?;
        Ok(zones)
    }

    /// Undealt cards.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Board slots, empty slots as `None`.
    #[must_use]
    pub fn board(&self) -> &[Option<CardId>] {
        &self.board
    }

    /// Board slots decoded into cards, the form the finder consumes.
    #[must_use]
    pub fn board_cards(&self) -> Vec<Option<Card>> {
        self.board.iter().map(|id| id.map(CardId::card)).collect()
    }

    /// Claimed cards in claim order.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    /// Number of cards face up.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.board.iter().flatten().count()
    }

    #[must_use]
    pub fn card_at(&self, slot: Slot) -> Option<CardId> {
        self.board.get(slot.index()).copied().flatten()
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn location(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Deal up to `count` cards from the front of the deck.
    ///
    /// Empty slots are filled lowest first; after that new slots are opened
    /// at the end of the board while it is shorter than `capacity`. Fewer
    /// cards than requested are dealt when the deck or the space runs out.
    pub fn deal(&mut self, count: usize, capacity: usize) -> Dealt {
        let mut dealt = Dealt::new();

        while dealt.len() < count {
            let Some(slot) = self.next_open_slot(capacity) else {
                break;
            };
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.place(slot, card);
            dealt.push((slot, card));
        }

        if dealt.len() < count {
            debug!(
                requested = count,
                dealt = dealt.len(),
                remaining = self.deck.len(),
                "deal came up short"
            );
        }
        dealt
    }

    /// Look up the cards at three slots without changing anything.
    ///
    /// Fails if a slot is off the board, empty, or repeated.
    pub fn cards_at(&self, slots: [Slot; 3]) -> Result<[CardId; 3]> {
        for (i, slot) in slots.iter().enumerate() {
            if slots[..i].contains(slot) {
                return Err(SetError::DuplicateSlot(*slot));
            }
        }

        let mut cards = [CardId(0); 3];
        for (card, &slot) in cards.iter_mut().zip(&slots) {
            *card = match self.board.get(slot.index()) {
                None => return Err(SetError::SlotOutOfRange(slot)),
                Some(None) => return Err(SetError::EmptySlot(slot)),
                Some(Some(id)) => *id,
            };
        }
        Ok(cards)
    }

    /// Move the cards at three slots to the discard.
    ///
    /// All three slots are checked before any card moves, so a rejected
    /// call leaves every zone untouched. The slots are left empty.
    pub fn consume(&mut self, slots: [Slot; 3]) -> Result<[CardId; 3]> {
        let cards = self.cards_at(slots)?;

        for (&slot, &card) in slots.iter().zip(&cards) {
            self.board[slot.index()] = None;
            self.discard.push(card);
            self.locations.insert(card, Zone::Discard);
        }

        debug!(?cards, remaining = self.deck.len(), "consumed triple");
        Ok(cards)
    }

    /// Pull cards sitting beyond `base` back into empty slots below it.
    ///
    /// Cards that find no hole keep the lowest free positions past `base`,
    /// so the board stays gap-free above its base size.
    pub fn compact(&mut self, base: usize) {
        if self.board.len() <= base {
            return;
        }

        let overflow: SmallVec<[CardId; 9]> = self.board.drain(base..).flatten().collect();
        for card in overflow {
            let index = self
                .board
                .iter()
                .position(Option::is_none)
                .unwrap_or(self.board.len());
            let slot = Slot::from_index(index);
            self.place(slot, card);
        }
    }

    /// Verify that deck, board and discard partition all 81 cards and that
    /// the location index agrees with them.
    pub fn check_partition(&self) -> Result<()> {
        let mut seen = [false; DECK_SIZE];
        let mut mark = |card: CardId, zone: Zone| -> Result<()> {
            if std::mem::replace(&mut seen[card.index()], true) {
                return Err(SetError::PartitionViolated(format!(
                    "{card} is in more than one zone"
                )));
            }
            match self.locations.get(&card) {
                Some(&indexed) if indexed == zone => Ok(()),
                other => Err(SetError::PartitionViolated(format!(
                    "{card} is in {zone:?} but indexed as {other:?}"
                ))),
            }
        };

        for card in self.deck.iter() {
            mark(card, Zone::Deck)?;
        }
        for (i, card) in self.board.iter().enumerate() {
            if let Some(card) = *card {
                mark(card, Zone::Board(Slot::from_index(i)))?;
            }
        }
        for &card in &self.discard {
            mark(card, Zone::Discard)?;
        }

        if let Some(missing) = seen.iter().position(|placed| !placed) {
            return Err(SetError::PartitionViolated(format!(
                "Card({missing}) is in no zone"
            )));
        }
        Ok(())
    }

    fn next_open_slot(&self, capacity: usize) -> Option<Slot> {
        let limit = capacity.min(DECK_SIZE);
        if let Some(hole) = self.board.iter().take(limit).position(Option::is_none) {
            return Some(Slot::from_index(hole));
        }
        (self.board.len() < limit).then(|| Slot::from_index(self.board.len()))
    }

    fn place(&mut self, slot: Slot, card: CardId) {
        let index = slot.index();
        if index >= self.board.len() {
            self.board.resize(index + 1, None);
        }
        self.board[index] = Some(card);
        self.locations.insert(card, Zone::Board(slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> CardId {
        CardId::new(raw).unwrap()
    }

    fn slots(raw: [u8; 3]) -> [Slot; 3] {
        raw.map(Slot)
    }

    #[test]
    fn test_new_holds_everything_in_deck() {
        let zones = ZoneManager::new(Deck::standard());

        assert_eq!(zones.deck().len(), DECK_SIZE);
        assert!(zones.board().is_empty());
        assert_eq!(zones.location(id(40)), Some(Zone::Deck));
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_deal_fills_from_front() {
        let mut zones = ZoneManager::new(Deck::standard());

        let dealt = zones.deal(3, 12);

        assert_eq!(
            dealt.as_slice(),
            &[(Slot(0), id(0)), (Slot(1), id(1)), (Slot(2), id(2))]
        );
        assert_eq!(zones.location(id(1)), Some(Zone::Board(Slot(1))));
        assert_eq!(zones.deck().len(), DECK_SIZE - 3);
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_deal_respects_capacity() {
        let mut zones = ZoneManager::new(Deck::standard());

        let dealt = zones.deal(20, 12);

        assert_eq!(dealt.len(), 12);
        assert_eq!(zones.board().len(), 12);
        assert!(zones.deal(3, 12).is_empty());
        assert_eq!(zones.deal(3, 15).len(), 3);
    }

    #[test]
    fn test_deal_fills_holes_first() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(12, 12);
        zones.consume(slots([1, 5, 9])).unwrap();

        let dealt = zones.deal(3, 15);

        let landed: Vec<_> = dealt.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(landed, vec![Slot(1), Slot(5), Slot(9)]);
        assert_eq!(zones.board().len(), 12);
    }

    #[test]
    fn test_deal_stops_when_deck_runs_out() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(DECK_SIZE, DECK_SIZE);
        zones.consume(slots([0, 1, 2])).unwrap();

        assert!(zones.deck().is_empty());
        assert!(zones.deal(3, DECK_SIZE).is_empty());
        assert_eq!(zones.card_at(Slot(0)), None);
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_consume_moves_to_discard() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(12, 12);

        let taken = zones.consume(slots([2, 0, 7])).unwrap();

        assert_eq!(taken, [id(2), id(0), id(7)]);
        assert_eq!(zones.discard(), &[id(2), id(0), id(7)]);
        assert_eq!(zones.card_at(Slot(0)), None);
        assert_eq!(zones.location(id(7)), Some(Zone::Discard));
        assert_eq!(zones.occupied(), 9);
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_consume_is_all_or_nothing() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(12, 12);
        zones.consume(slots([3, 4, 5])).unwrap();
        let before = zones.board().to_vec();

        assert_eq!(
            zones.consume(slots([0, 1, 4])),
            Err(SetError::EmptySlot(Slot(4)))
        );
        assert_eq!(
            zones.consume(slots([0, 1, 12])),
            Err(SetError::SlotOutOfRange(Slot(12)))
        );
        assert_eq!(
            zones.consume(slots([0, 1, 0])),
            Err(SetError::DuplicateSlot(Slot(0)))
        );

        assert_eq!(zones.board(), before.as_slice());
        assert_eq!(zones.discard().len(), 3);
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_compact_pulls_overflow_into_holes() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(15, 15);
        zones.consume(slots([4, 13, 14])).unwrap();

        zones.compact(12);

        assert_eq!(zones.board().len(), 12);
        assert_eq!(zones.card_at(Slot(4)), Some(id(12)));
        assert_eq!(zones.location(id(12)), Some(Zone::Board(Slot(4))));
        assert_eq!(zones.occupied(), 12);
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_compact_without_holes_keeps_cards() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(18, 18);
        zones.consume(slots([12, 14, 16])).unwrap();

        zones.compact(12);

        assert_eq!(zones.board().len(), 15);
        assert_eq!(zones.occupied(), 15);
        assert_eq!(zones.card_at(Slot(12)), Some(id(13)));
        assert_eq!(zones.card_at(Slot(13)), Some(id(15)));
        assert_eq!(zones.card_at(Slot(14)), Some(id(17)));
        assert!(zones.check_partition().is_ok());
    }

    #[test]
    fn test_from_parts_round_trip() {
        let mut zones = ZoneManager::new(Deck::standard());
        zones.deal(12, 12);
        zones.consume(slots([0, 1, 2])).unwrap();

        let rebuilt = ZoneManager::from_parts(
            zones.deck().iter().collect(),
            zones.board().to_vec(),
            zones.discard().to_vec(),
        )
        .unwrap();

        assert_eq!(rebuilt.board(), zones.board());
        assert_eq!(rebuilt.location(id(1)), Some(Zone::Discard));
    }

    #[test]
    fn test_from_parts_rejects_broken_partition() {
        let duplicate = ZoneManager::from_parts(
            CardId::all().collect(),
            vec![Some(id(0))],
            Vec::new(),
        );
        assert!(matches!(duplicate, Err(SetError::PartitionViolated(_))));

        let missing = ZoneManager::from_parts(CardId::all().skip(1).collect(), Vec::new(), Vec::new());
        assert!(matches!(missing, Err(SetError::PartitionViolated(_))));
    }

    #[test]
    fn test_slot_parse_and_display() {
        assert_eq!("4".parse::<Slot>(), Ok(Slot(4)));
        assert!(matches!("x".parse::<Slot>(), Err(SetError::Parse { kind: "slot", .. })));
        assert_eq!(Slot(7).to_string(), "Slot(7)");
    }
}
