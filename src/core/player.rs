//! Player identification, per-player storage, and player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Seats are 0-based and fixed for the whole
//! game; turn order is seating order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`.
//!
//! ## PlayerState
//!
//! The per-player mutable record: coin balance, owned establishment counts,
//! and landmark construction flags. `PlayerState` only stores and queries;
//! affordability and legality are enforced by the rules engine.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::CardId;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use machi_engine::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<u32> = PlayerMap::new(3, |_| 3);
/// coins[PlayerId::new(1)] += 2;
/// assert_eq!(coins[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Mutable per-player record: coins, establishments, landmarks.
///
/// Establishment counts and landmark flags live in `im::OrdMap`, keyed by
/// `CardId`, so iteration order is always card-id order. The engine (and
/// only the engine) mutates these through the primitives below; the struct
/// itself enforces nothing beyond "counts are unsigned".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Coin balance. Spending is gated by the engine before it happens.
    pub coins: u32,
    establishments: OrdMap<CardId, u32>,
    landmarks: OrdMap<CardId, bool>,
}

impl PlayerState {
    /// Create an empty player with no coins, cards, or landmarks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Establishments ===

    /// How many copies of an establishment this player owns (absent = 0).
    #[must_use]
    pub fn count_of(&self, card: CardId) -> u32 {
        self.establishments.get(&card).copied().unwrap_or(0)
    }

    /// Add `count` copies of an establishment.
    pub fn add_card(&mut self, card: CardId, count: u32) {
        let total = self.count_of(card) + count;
        self.establishments.insert(card, total);
    }

    /// Iterate owned establishments as `(card, count)` in card-id order.
    pub fn establishments(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.establishments.iter().map(|(id, count)| (*id, *count))
    }

    // === Landmarks ===

    /// Register a landmark slot as not-yet-built.
    ///
    /// Called once per catalog landmark at game setup so every player has
    /// the full flag set from the start.
    pub fn register_landmark(&mut self, card: CardId) {
        if !self.landmarks.contains_key(&card) {
            self.landmarks.insert(card, false);
        }
    }

    /// Whether this player has built the given landmark.
    #[must_use]
    pub fn has_built(&self, card: CardId) -> bool {
        self.landmarks.get(&card).copied().unwrap_or(false)
    }

    /// Mark a landmark as built.
    pub fn build_landmark(&mut self, card: CardId) {
        self.landmarks.insert(card, true);
    }

    /// Reset a landmark's built flag (demolition effect).
    pub fn demolish_landmark(&mut self, card: CardId) {
        self.landmarks.insert(card, false);
    }

    /// Number of currently built landmarks.
    #[must_use]
    pub fn built_landmark_count(&self) -> u32 {
        self.landmarks.iter().filter(|(_, built)| **built).count() as u32
    }

    /// Built landmark ids in card-id order.
    #[must_use]
    pub fn built_landmarks(&self) -> Vec<CardId> {
        self.landmarks
            .iter()
            .filter(|(_, built)| **built)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Iterate all landmark slots as `(card, built)` in card-id order.
    pub fn landmarks(&self) -> impl Iterator<Item = (CardId, bool)> + '_ {
        self.landmarks.iter().map(|(id, built)| (*id, *built))
    }
}
