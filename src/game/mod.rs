//! A complete game of SET built on the engine.
//!
//! - Any number of players race to claim sets from a shared board
//! - The board starts at 12 cards and grows by 3 while no set is showing
//! - Each accepted set scores a point and is replaced from the deck
//! - The game ends when no set is showing and no card is left to deal

mod session;
mod snapshot;

pub use session::{ClaimOutcome, GameResult, GameSession, GameSessionBuilder, GameStatus};
pub use snapshot::SessionSnapshot;
