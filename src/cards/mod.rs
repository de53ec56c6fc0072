//! Card system: definitions, the load-once catalog, and the standard set.
//!
//! ## Key Types
//!
//! - `CardId`: catalog-assigned identifier for card definitions
//! - `CardDefinition`: static card data (color, kind, cost, activations)
//! - `CardCatalog`: slug-indexed definition registry, read-only after load
//! - `CardSpec`: one record of the external definition source
//!
//! The catalog is the only process-wide shared piece of the engine, and it
//! is immutable after load, so concurrent games can share one freely.

pub mod catalog;
pub mod definition;
pub mod standard;

pub use catalog::{CardCatalog, CardSpec, CatalogError};
pub use definition::{ActivationSet, CardColor, CardDefinition, CardId, CardKind, CardVersion};
pub use standard::standard_catalog;
