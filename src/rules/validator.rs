//! The set rule.
//!
//! Three cards form a set when, for each of the four attributes, their
//! values are either all the same or all different. With exactly three
//! values per attribute that means the number of distinct values must be
//! 1 or 3; a count of 2 is the only way to fail.

use smallvec::SmallVec;

use crate::cards::{Attribute, Card};
use crate::error::{Result, SetError};

/// Whether `a`, `b` and `c` form a set.
///
/// Compares attribute values only, never card identity, and does not care
/// about argument order.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::rules::is_valid_set;
///
/// let a: Card = "1 solid red oval".parse().unwrap();
/// let b: Card = "2 solid red oval".parse().unwrap();
/// let c: Card = "3 solid red oval".parse().unwrap();
/// assert!(is_valid_set(&a, &b, &c));
/// assert!(!is_valid_set(&a, &b, &b));
/// ```
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .iter()
        .all(|&attribute| attribute_passes(attribute, a, b, c))
}

/// Arity-checked form of [`is_valid_set`] for callers holding a slice.
///
/// Anything other than exactly three cards is a contract violation.
pub fn validate_triple(cards: &[Card]) -> Result<bool> {
    match cards {
        [a, b, c] => Ok(is_valid_set(a, b, c)),
        _ => Err(SetError::WrongArity(cards.len())),
    }
}

/// Attributes that break the rule for this triple, in `Attribute::ALL` order.
///
/// Empty exactly when the triple is a set.
#[must_use]
pub fn failing_attributes(a: &Card, b: &Card, c: &Card) -> SmallVec<[Attribute; 4]> {
    Attribute::ALL
        .iter()
        .copied()
        .filter(|&attribute| !attribute_passes(attribute, a, b, c))
        .collect()
}

/// The one card that completes a set with `a` and `b`.
///
/// Per attribute: the shared value if `a` and `b` agree, otherwise the
/// value neither of them has. When `a == b` this returns the same card.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    let (x, y) = (a.indices(), b.indices());
    let mut indices = [0u8; 4];
    for (i, slot) in indices.iter_mut().enumerate() {
        *slot = if x[i] == y[i] { x[i] } else { 3 - x[i] - y[i] };
    }
    // Every index is in 0..3 by construction.
    Card::from_indices(indices).unwrap_or(*a)
}

fn attribute_passes(attribute: Attribute, a: &Card, b: &Card, c: &Card) -> bool {
    let values = [
        a.attribute(attribute),
        b.attribute(attribute),
        c.attribute(attribute),
    ];
    matches!(distinct_count(values), 1 | 3)
}

fn distinct_count(values: [u8; 3]) -> usize {
    let mut distinct: SmallVec<[u8; 3]> = SmallVec::new();
    for value in values {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    distinct.len()
}
