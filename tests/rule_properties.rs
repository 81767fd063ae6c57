//! Property tests for the set rule and the board search.
//!
//! These check the rule against its definition over randomly drawn cards
//! rather than hand-picked examples.

use proptest::prelude::*;

use set_engine::{
    count_sets, find_all_sets, find_set, is_valid_set, third_card, Attribute, Card, CardId, Slot,
};

fn any_card() -> impl Strategy<Value = Card> {
    (0u32..81).prop_map(|raw| CardId::new(raw).unwrap().card())
}

/// Distinct cards, as many as asked for, in random order.
fn any_board(max: usize) -> impl Strategy<Value = Vec<Option<Card>>> {
    proptest::sample::subsequence((0u32..81).collect::<Vec<_>>(), 0..=max)
        .prop_shuffle()
        .prop_map(|raw| {
            raw.into_iter()
                .map(|r| Some(CardId::new(r).unwrap().card()))
                .collect()
        })
}

/// Reference rule straight from the definition: each attribute all the
/// same or all different.
fn by_definition(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL.iter().all(|&attr| {
        let (x, y, z) = (a.attribute(attr), b.attribute(attr), c.attribute(attr));
        let same = x == y && y == z;
        let different = x != y && y != z && x != z;
        same || different
    })
}

proptest! {
    #[test]
    fn order_does_not_matter(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_valid_set(&a, &b, &c);
        prop_assert_eq!(is_valid_set(&b, &a, &c), expected);
        prop_assert_eq!(is_valid_set(&c, &b, &a), expected);
        prop_assert_eq!(is_valid_set(&a, &c, &b), expected);
        prop_assert_eq!(is_valid_set(&b, &c, &a), expected);
        prop_assert_eq!(is_valid_set(&c, &a, &b), expected);
    }

    #[test]
    fn matches_definition(a in any_card(), b in any_card(), c in any_card()) {
        prop_assert_eq!(is_valid_set(&a, &b, &c), by_definition(&a, &b, &c));
    }

    #[test]
    fn third_card_always_completes(a in any_card(), b in any_card()) {
        prop_assume!(a != b);
        let c = third_card(&a, &b);
        prop_assert!(is_valid_set(&a, &b, &c));
        prop_assert_ne!(c, a);
        prop_assert_ne!(c, b);
        prop_assert_eq!(third_card(&b, &a), c);
    }

    #[test]
    fn any_other_third_card_fails(a in any_card(), b in any_card(), c in any_card()) {
        prop_assume!(a != b);
        prop_assume!(c != third_card(&a, &b));
        prop_assert!(!is_valid_set(&a, &b, &c));
    }

    #[test]
    fn finder_agrees_with_validator(board in any_board(15)) {
        let all = find_all_sets(&board);
        prop_assert_eq!(all.len(), count_sets(&board));
        prop_assert_eq!(find_set(&board), all.first().copied());

        for [i, j, k] in &all {
            prop_assert!(i < j && j < k);
            let card = |slot: &Slot| board[slot.index()].unwrap();
            prop_assert!(is_valid_set(&card(i), &card(j), &card(k)));
        }
    }

    #[test]
    fn finder_is_deterministic(board in any_board(15)) {
        prop_assert_eq!(find_set(&board), find_set(&board));
    }
}
