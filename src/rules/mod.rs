//! The set rule and the board search built on it.
//!
//! Both halves are pure functions over plain card values. They hold no
//! state and never touch the deck, so any number of sessions can call them
//! concurrently.

pub mod validator;
pub mod finder;

pub use validator::{failing_attributes, is_valid_set, third_card, validate_triple};
pub use finder::{count_sets, find_all_sets, find_set, find_set_strict, has_set};
