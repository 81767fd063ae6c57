//! Exhaustive set search over the board.
//!
//! Boards are small (12 to 21 cards, at most a few thousand triples), so
//! the search simply walks every 3-combination of occupied slots in
//! lexicographic slot order. The order is part of the contract: the same
//! board always yields the same first set, which hints and tests rely on.

use std::ops::ControlFlow;

use smallvec::SmallVec;

use super::validator::is_valid_set;
use crate::cards::Card;
use crate::error::{Result, SetError};
use crate::zones::Slot;

/// First set on the board in lexicographic slot order, or `None`.
///
/// Empty slots are skipped. A board with fewer than three cards has no set.
///
/// ```
/// use set_engine::cards::build_deck;
/// use set_engine::rules::find_set;
/// use set_engine::zones::Slot;
///
/// let board: Vec<_> = build_deck()[..12].iter().copied().map(Some).collect();
/// assert_eq!(find_set(&board), Some([Slot(0), Slot(1), Slot(2)]));
/// ```
#[must_use]
pub fn find_set(board: &[Option<Card>]) -> Option<[Slot; 3]> {
    let mut found = None;
    for_each_set(board, |triple| {
        found = Some(triple);
        ControlFlow::Break(())
    });
    found
}

/// Like [`find_set`], but a board with fewer than three cards is reported
/// as `SetError::BoardTooSmall` instead of "no set".
pub fn find_set_strict(board: &[Option<Card>]) -> Result<Option<[Slot; 3]>> {
    let occupied = board.iter().flatten().count();
    if occupied < 3 {
        return Err(SetError::BoardTooSmall(occupied));
    }
    Ok(find_set(board))
}

/// Every set on the board, in the same order [`find_set`] visits them.
#[must_use]
pub fn find_all_sets(board: &[Option<Card>]) -> Vec<[Slot; 3]> {
    let mut sets = Vec::new();
    for_each_set(board, |triple| {
        sets.push(triple);
        ControlFlow::Continue(())
    });
    sets
}

#[must_use]
pub fn count_sets(board: &[Option<Card>]) -> usize {
    let mut count = 0;
    for_each_set(board, |_| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

#[must_use]
pub fn has_set(board: &[Option<Card>]) -> bool {
    find_set(board).is_some()
}

fn for_each_set(
    board: &[Option<Card>],
    mut visit: impl FnMut([Slot; 3]) -> ControlFlow<()>,
) {
    let cards: SmallVec<[(Slot, Card); 24]> = board
        .iter()
        .enumerate()
        .filter_map(|(i, card)| card.map(|card| (Slot::from_index(i), card)))
        .collect();

    for (i, (slot_a, a)) in cards.iter().enumerate() {
        for (j, (slot_b, b)) in cards.iter().enumerate().skip(i + 1) {
            for (slot_c, c) in cards.iter().skip(j + 1) {
                if is_valid_set(a, b, c) && visit([*slot_a, *slot_b, *slot_c]).is_break() {
                    return;
                }
            }
        }
    }
}
