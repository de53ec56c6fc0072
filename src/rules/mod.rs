//! Rules: legality, application, resolution, and victory.
//!
//! - `engine`: the `Rules` entry points (`legal_actions`, `apply_action`)
//!   and the `GameBuilder` that deals new games
//! - `resolve`: the fixed RED -> GREEN -> BLUE -> PURPLE income passes
//! - `effects`: special-card behavior as an effect-lookup table

pub mod effects;
pub mod engine;
mod resolve;

pub use effects::{CardEffect, EffectCondition, EffectTable, Payout};
pub use engine::{new_game, GameBuilder, Rules};
