//! Shared market: the visible purchase window and its draw pile.
//!
//! The market shows a bounded window of *distinct* establishment types,
//! each with a visible copy count, backed by a shuffled face-down deck.
//! Buying decrements a stack; a stack that reaches zero is removed (never
//! left present-with-zero), and the window refills from the top of the
//! deck until it is `max_unique` types wide again or the deck runs dry.
//! Refill is to *width*, not to volume: a drawn card that matches a
//! visible type merges into that stack and drawing continues.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{CardCatalog, CardId, CardVersion};
use crate::core::GameRng;

/// How many copies of each establishment enter the deck, per edition tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCopies {
    pub normal: u32,
    pub plus: u32,
    pub sharp: u32,
}

impl DeckCopies {
    /// The same count for every tier.
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self {
            normal: count,
            plus: count,
            sharp: count,
        }
    }

    /// Copies for one tier.
    #[must_use]
    pub const fn for_version(&self, version: CardVersion) -> u32 {
        match version {
            CardVersion::Normal => self.normal,
            CardVersion::Plus => self.plus,
            CardVersion::Sharp => self.sharp,
        }
    }
}

impl Default for DeckCopies {
    fn default() -> Self {
        Self {
            normal: 6,
            plus: 5,
            sharp: 4,
        }
    }
}

/// Shared pool of purchasable establishments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketState {
    /// Visible window: card id -> copy count. Present implies count > 0.
    available: OrdMap<CardId, u32>,
    /// Face-down draw pile. Top of the deck is the back of the vector.
    deck: Vector<CardId>,
    /// Width bound on the visible window (distinct types).
    max_unique: usize,
}

impl MarketState {
    /// An empty market with the given window width.
    #[must_use]
    pub fn new(max_unique: usize) -> Self {
        Self {
            available: OrdMap::new(),
            deck: Vector::new(),
            max_unique,
        }
    }

    /// Build, shuffle, and deal the opening market.
    ///
    /// The deck holds every establishment of an allowed version, repeated
    /// per the tier's copy count, shuffled with the supplied RNG.
    #[must_use]
    pub fn stock(
        catalog: &CardCatalog,
        versions: &[CardVersion],
        copies: DeckCopies,
        max_unique: usize,
        rng: &mut GameRng,
    ) -> Self {
        let mut deck = Vec::new();
        for def in catalog.establishments() {
            if !versions.contains(&def.version) {
                continue;
            }
            for _ in 0..copies.for_version(def.version) {
                deck.push(def.id);
            }
        }
        rng.shuffle(&mut deck);
        debug!(deck_size = deck.len(), "market deck shuffled");

        let mut market = Self {
            available: OrdMap::new(),
            deck: Vector::from(deck),
            max_unique,
        };
        market.replenish();
        market
    }

    /// Seed the visible window directly. Test/setup helper; the window is
    /// clamped to `max_unique` by a replenish afterwards, not here.
    pub fn put(&mut self, card: CardId, count: u32) {
        if count > 0 {
            self.available.insert(card, count);
        }
    }

    /// Push one card onto the top of the deck.
    pub fn push_deck(&mut self, card: CardId) {
        self.deck.push_back(card);
    }

    /// Iterate the visible window as `(card, count)` in card-id order.
    pub fn available(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.available.iter().map(|(id, count)| (*id, *count))
    }

    /// Visible copies of one card (absent = 0).
    #[must_use]
    pub fn count_of(&self, card: CardId) -> u32 {
        self.available.get(&card).copied().unwrap_or(0)
    }

    /// Whether at least one copy of the card is visible.
    #[must_use]
    pub fn can_buy(&self, card: CardId) -> bool {
        self.count_of(card) > 0
    }

    /// Distinct visible types. Never exceeds `max_unique` after a take.
    #[must_use]
    pub fn distinct_available(&self) -> usize {
        self.available.len()
    }

    /// The window width bound.
    #[must_use]
    pub fn max_unique(&self) -> usize {
        self.max_unique
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Remove one visible copy and refill the window.
    ///
    /// Returns `false` (without mutating) if no copy is visible.
    pub fn take(&mut self, card: CardId) -> bool {
        let Some(count) = self.available.get(&card).copied() else {
            return false;
        };

        if count <= 1 {
            self.available.remove(&card);
        } else {
            self.available.insert(card, count - 1);
        }
        trace!(%card, remaining = count - 1, "market stack decremented");

        self.replenish();
        true
    }

    /// Refill the window to width from the top of the deck.
    fn replenish(&mut self) {
        while self.available.len() < self.max_unique {
            let Some(card) = self.deck.pop_back() else {
                break;
            };
            let count = self.count_of(card) + 1;
            self.available.insert(card, count);
            trace!(%card, count, "market window refilled");
        }
    }
}
