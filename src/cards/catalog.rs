//! Card catalog: the load-once registry of card definitions.
//!
//! The catalog is built from a structured definition source - a list of
//! `CardSpec` records, usually parsed from JSON - and is read-only after
//! load. Loading fails fast with a descriptive error on the first
//! unrecognized color/kind/version value or duplicate identifier.
//!
//! Lookup is by `CardId` (hot path, used throughout resolution) or by slug
//! (setup path, used to wire effect tables and victory sets).

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::definition::{
    ActivationSet, CardColor, CardDefinition, CardId, CardKind, CardVersion,
};

/// Why a catalog could not be built or a lookup failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A card's `color` field is not a known color category.
    #[error("unrecognized card color {value:?} for card {slug:?}")]
    UnknownColor { slug: String, value: String },

    /// A card's `kind` field is not a known card kind.
    #[error("unrecognized card kind {value:?} for card {slug:?}")]
    UnknownKind { slug: String, value: String },

    /// A card's `version` field is not a known edition tier.
    #[error("unrecognized card version {value:?} for card {slug:?}")]
    UnknownVersion { slug: String, value: String },

    /// Two cards in the source share an identifier.
    #[error("duplicate card identifier {slug:?}")]
    DuplicateCard { slug: String },

    /// A referenced identifier is absent from the catalog.
    #[error("card identifier {slug:?} is not in the catalog")]
    UnknownSlug { slug: String },

    /// The definition source is not valid JSON of the expected shape.
    #[error("malformed card definition source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One record of the definition source.
///
/// Color, kind, and version arrive as strings and are validated during
/// registration rather than by serde, so the error names the offending
/// card instead of a byte offset.
#[derive(Clone, Debug, Deserialize)]
pub struct CardSpec {
    /// Globally unique slug, e.g. `"wheat_field"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One of `blue`, `green`, `red`, `purple`, `yellow`.
    pub color: String,
    /// One of `establishment`, `landmark`.
    pub kind: String,
    /// Coin price.
    pub cost: u32,
    /// Triggering dice sums. Defaults to empty (landmarks).
    #[serde(default)]
    pub activation: Vec<u8>,
    /// Base per-activation income. Defaults to 0.
    #[serde(default)]
    pub income: u32,
    /// One of `normal`, `plus`, `sharp`.
    pub version: String,
    /// Optional display asset reference, passed through untouched.
    #[serde(default)]
    pub asset: Option<String>,
}

/// Registry of card definitions, read-only after load.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    /// Definitions in registration order; `CardId.0` indexes this vec.
    cards: Vec<CardDefinition>,
    by_slug: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definition records, failing on the first
    /// invalid one.
    pub fn from_specs(specs: impl IntoIterator<Item = CardSpec>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.register(spec)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from a JSON array of definition records.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let specs: Vec<CardSpec> = serde_json::from_str(source)?;
        Self::from_specs(specs)
    }

    /// Validate and register one record, assigning the next `CardId`.
    pub fn register(&mut self, spec: CardSpec) -> Result<CardId, CatalogError> {
        if self.by_slug.contains_key(&spec.id) {
            return Err(CatalogError::DuplicateCard { slug: spec.id });
        }

        let color = parse_color(&spec.id, &spec.color)?;
        let kind = parse_kind(&spec.id, &spec.kind)?;
        let version = parse_version(&spec.id, &spec.version)?;

        let id = CardId::new(self.cards.len() as u32);
        self.by_slug.insert(spec.id.clone(), id);
        self.cards.push(CardDefinition {
            id,
            slug: spec.id,
            name: spec.name,
            color,
            kind,
            cost: spec.cost,
            activation: ActivationSet::from_vec(spec.activation),
            income: spec.income,
            version,
            asset: spec.asset,
        });

        Ok(id)
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    /// Get a definition by id, panicking if absent.
    ///
    /// Use only for ids that already passed validation (e.g. ids stored in
    /// player or market state, which the engine checks on entry).
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(id.index()).expect("card not in catalog")
    }

    /// Resolve a slug to its id.
    pub fn lookup(&self, slug: &str) -> Result<CardId, CatalogError> {
        self.by_slug
            .get(slug)
            .copied()
            .ok_or_else(|| CatalogError::UnknownSlug {
                slug: slug.to_string(),
            })
    }

    /// Resolve a slug to its id, if present.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<CardId> {
        self.by_slug.get(slug).copied()
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Iterate establishment definitions in registration order.
    pub fn establishments(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(|c| c.is_establishment())
    }

    /// Iterate landmark definitions in registration order.
    pub fn landmarks(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(|c| c.is_landmark())
    }
}

impl CardId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

fn parse_color(slug: &str, value: &str) -> Result<CardColor, CatalogError> {
    match value {
        "blue" => Ok(CardColor::Blue),
        "green" => Ok(CardColor::Green),
        "red" => Ok(CardColor::Red),
        "purple" => Ok(CardColor::Purple),
        "yellow" => Ok(CardColor::Yellow),
        _ => Err(CatalogError::UnknownColor {
            slug: slug.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_kind(slug: &str, value: &str) -> Result<CardKind, CatalogError> {
    match value {
        "establishment" => Ok(CardKind::Establishment),
        "landmark" => Ok(CardKind::Landmark),
        _ => Err(CatalogError::UnknownKind {
            slug: slug.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_version(slug: &str, value: &str) -> Result<CardVersion, CatalogError> {
    match value {
        "normal" => Ok(CardVersion::Normal),
        "plus" => Ok(CardVersion::Plus),
        "sharp" => Ok(CardVersion::Sharp),
        _ => Err(CatalogError::UnknownVersion {
            slug: slug.to_string(),
            value: value.to_string(),
        }),
    }
}
