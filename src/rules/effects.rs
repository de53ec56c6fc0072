//! Special-card behavior as an effect-lookup table.
//!
//! Most establishments pay `income x copies` and need no entry here. Cards
//! that deviate register a `CardEffect`: an optional activation condition
//! plus a payout rule. Resolution looks the effect up by card id, so a new
//! special card is added by registering a descriptor, not by growing a
//! branch chain inside the resolution passes.

use rustc_hash::FxHashMap;

use crate::cards::{standard, CardCatalog, CardId};

/// Gate on whether an activated card pays at all.
///
/// "Owner" is the player collecting the payout. "Roller" is the player
/// whose turn it is: for RED cards the one paying, and the same player as
/// the owner for GREEN cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectCondition {
    /// The owner must have built the given landmark.
    OwnerHasLandmark(CardId),
    /// The owner must have at most this many built landmarks.
    OwnerLandmarksAtMost(u32),
    /// The roller must have at least this many built landmarks.
    RollerLandmarksAtLeast(u32),
}

/// How an activated card computes its payout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Payout {
    /// `income x copies`. The default for every card without an override.
    #[default]
    Flat,
    /// Per copy: `income x` owner's count of another establishment.
    PerOwned { counted: CardId },
    /// Per copy: `income x` the summed count of two other establishments.
    PerOwnedPair { first: CardId, second: CardId },
    /// Per copy: the owner's count of another establishment, income ignored.
    CountOwned { counted: CardId },
    /// Per copy: the sum of two freshly rolled d6 (trawler sub-roll).
    TwoDiceSum,
    /// Per copy: un-build one random built landmark of the owner, then pay
    /// `income`. A copy with no built landmark left is a no-op.
    DemolishLandmark,
}

/// Condition plus payout for one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardEffect {
    pub condition: Option<EffectCondition>,
    pub payout: Payout,
}

impl CardEffect {
    /// A condition-only override keeping the flat payout.
    #[must_use]
    pub const fn gated(condition: EffectCondition) -> Self {
        Self {
            condition: Some(condition),
            payout: Payout::Flat,
        }
    }

    /// A payout-only override with no condition.
    #[must_use]
    pub const fn pays(payout: Payout) -> Self {
        Self {
            condition: None,
            payout,
        }
    }

    /// Both a condition and a payout override.
    #[must_use]
    pub const fn gated_pays(condition: EffectCondition, payout: Payout) -> Self {
        Self {
            condition: Some(condition),
            payout,
        }
    }
}

/// Card id -> effect descriptor. Cards without an entry behave flat.
#[derive(Clone, Debug, Default)]
pub struct EffectTable {
    overrides: FxHashMap<CardId, CardEffect>,
}

impl EffectTable {
    /// An empty table: every card pays flat, unconditionally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a card's effect descriptor.
    pub fn register(&mut self, card: CardId, effect: CardEffect) {
        self.overrides.insert(card, effect);
    }

    /// The effect for a card; flat and unconditional when unregistered.
    #[must_use]
    pub fn effect_of(&self, card: CardId) -> CardEffect {
        self.overrides.get(&card).copied().unwrap_or_default()
    }

    /// Number of registered overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the table has no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// The evolved-ruleset effect table for a catalog.
    ///
    /// Overrides are wired by slug and silently skipped when the catalog
    /// does not carry the card: a card that cannot be owned needs no
    /// effect. A missing *referenced* card (e.g. the port gate for a
    /// present sushi bar) still registers nothing for that entry, which is
    /// equally sound: the condition could never be satisfied.
    #[must_use]
    pub fn standard(catalog: &CardCatalog) -> Self {
        let mut table = Self::new();

        let port = catalog.find(standard::PORT);

        // RED gates
        if let (Some(card), Some(port)) = (catalog.find(standard::SUSHI_BAR), port) {
            table.register(card, CardEffect::gated(EffectCondition::OwnerHasLandmark(port)));
        }
        if let Some(card) = catalog.find(standard::RESTAURANT) {
            table.register(card, CardEffect::gated(EffectCondition::RollerLandmarksAtLeast(2)));
        }
        if let Some(card) = catalog.find(standard::ELITE_BAR) {
            table.register(card, CardEffect::gated(EffectCondition::RollerLandmarksAtLeast(3)));
        }

        // GREEN specials
        if let Some(card) = catalog.find(standard::DEPARTMENT_STORE) {
            table.register(card, CardEffect::gated(EffectCondition::OwnerLandmarksAtMost(1)));
        }
        if let Some(card) = catalog.find(standard::BUILDING_DEMOLITION_COMPANY) {
            table.register(card, CardEffect::pays(Payout::DemolishLandmark));
        }
        if let (Some(card), Some(counted)) = (
            catalog.find(standard::FLOWER_SHOP),
            catalog.find(standard::CONVENIENCE_STORE),
        ) {
            table.register(card, CardEffect::pays(Payout::CountOwned { counted }));
        }
        if let (Some(card), Some(counted)) = (
            catalog.find(standard::WINERY),
            catalog.find(standard::VINEYARD),
        ) {
            table.register(card, CardEffect::pays(Payout::PerOwned { counted }));
        }
        if let (Some(card), Some(counted)) = (
            catalog.find(standard::CHEESE_FACTORY),
            catalog.find(standard::RANCH),
        ) {
            table.register(card, CardEffect::pays(Payout::PerOwned { counted }));
        }
        if let (Some(card), Some(first), Some(second)) = (
            catalog.find(standard::FURNITURE_FACTORY),
            catalog.find(standard::MINE),
            catalog.find(standard::FOREST),
        ) {
            table.register(card, CardEffect::pays(Payout::PerOwnedPair { first, second }));
        }

        // BLUE gates
        if let Some(card) = catalog.find(standard::CORNFIELD) {
            table.register(card, CardEffect::gated(EffectCondition::OwnerLandmarksAtMost(1)));
        }
        if let (Some(card), Some(port)) = (catalog.find(standard::FISHING_BOAT), port) {
            table.register(card, CardEffect::gated(EffectCondition::OwnerHasLandmark(port)));
        }
        if let (Some(card), Some(port)) = (catalog.find(standard::TRAWLER), port) {
            table.register(
                card,
                CardEffect::gated_pays(EffectCondition::OwnerHasLandmark(port), Payout::TwoDiceSum),
            );
        }

        table
    }
}
