//! Seats at the table and per-seat storage.
//!
//! A session seats between 1 and 255 players. `PlayerId` names a seat and
//! `PlayerMap` keeps one value per seat; sessions keep their scoreboard in
//! a `PlayerMap<u32>`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat number, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat at a table of `player_count`.
    ///
    /// ```
    /// use set_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(255) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use set_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] += 1;
/// assert_eq!(scores[PlayerId::new(1)], 1);
/// assert!(!scores.contains(PlayerId::new(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill each seat from `factory`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Same starting value for every seat.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` has a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// `None` for a player not seated here.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Seats in order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats() {
        let seats: Vec<_> = PlayerId::all(4).map(PlayerId::index).collect();

        assert_eq!(seats, vec![0, 1, 2, 3]);
        assert_eq!(PlayerId::all(0).next(), None);
        assert_eq!(PlayerId::new(3).to_string(), "Player 3");
    }

    #[test]
    fn test_scoreboard_updates() {
        let mut scores = PlayerMap::with_value(3, 0u32);
        scores[PlayerId::new(2)] += 2;
        if let Some(score) = scores.get_mut(PlayerId::new(0)) {
            *score += 1;
        }

        let table: Vec<_> = scores.iter().map(|(p, s)| (p.index(), *s)).collect();
        assert_eq!(table, vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_unseated_player() {
        let mut scores = PlayerMap::new(2, |p| p.index() as u32);

        assert!(scores.contains(PlayerId::new(1)));
        assert!(!scores.contains(PlayerId::new(2)));
        assert_eq!(scores.get(PlayerId::new(2)), None);
        assert!(scores.get_mut(PlayerId::new(9)).is_none());
        assert_eq!(scores.player_count(), 2);
    }

    #[test]
    fn test_scoreboard_json() {
        let scores = PlayerMap::with_value(2, 4u32);
        let json = serde_json::to_string(&scores).unwrap();

        assert_eq!(json, r#"{"data":[4,4]}"#);
        assert_eq!(serde_json::from_str::<PlayerMap<u32>>(&json).unwrap(), scores);
    }
}
