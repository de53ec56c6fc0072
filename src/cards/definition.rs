//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: what it
//! costs, which color category it pays out under, which dice sums trigger
//! it, and which edition tier it belongs to. Runtime facts (who owns how
//! many copies, whether a landmark is built) live in `PlayerState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card definition.
///
/// Assigned by the catalog in registration order, so sorting by `CardId`
/// reproduces the definition-source order. The external identifier is the
/// slug (e.g. `"wheat_field"`); ids never leave the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card #{}", self.0)
    }
}

/// Color category: decides *when* and on *whose turn* a card pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    /// Pays the owner on anyone's roll.
    Blue,
    /// Pays the owner on their own roll only.
    Green,
    /// Pays the owner out of the roller's coins, on an opponent's roll.
    Red,
    /// Special effects; the resolution pass is a reserved extension point.
    Purple,
    /// Landmark color. Never activates.
    Yellow,
}

/// Establishment (repeat income) or landmark (one-time construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Establishment,
    Landmark,
}

/// Edition tier. Controls deck composition and unlocks advanced effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVersion {
    Normal,
    Plus,
    Sharp,
}

/// Dice sums that trigger a card. Almost always one or two entries.
pub type ActivationSet = SmallVec<[u8; 4]>;

/// Static card definition. Immutable once the catalog is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog-assigned identifier.
    pub id: CardId,
    /// External identifier from the definition source.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Color category.
    pub color: CardColor,
    /// Establishment or landmark.
    pub kind: CardKind,
    /// Coin price.
    pub cost: u32,
    /// Triggering dice sums. Empty for landmarks.
    pub activation: ActivationSet,
    /// Base per-activation coin yield. Special cards override the
    /// semantics through the effect table.
    pub income: u32,
    /// Edition tier.
    pub version: CardVersion,
    /// Optional display asset reference. Opaque to the engine.
    pub asset: Option<String>,
}

impl CardDefinition {
    /// Whether the given dice sum triggers this card.
    #[must_use]
    pub fn activates_on(&self, roll: u8) -> bool {
        self.activation.contains(&roll)
    }

    /// Convenience kind check.
    #[must_use]
    pub fn is_establishment(&self) -> bool {
        self.kind == CardKind::Establishment
    }

    /// Convenience kind check.
    #[must_use]
    pub fn is_landmark(&self) -> bool {
        self.kind == CardKind::Landmark
    }
}
