//! Core engine types: players, state, actions, errors, RNG.
//!
//! This module holds the data layer. Nothing here interprets game rules;
//! transitions live in `crate::rules`.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use error::RulesError;
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::{EffectStreams, GameRng, GameRngState};
pub use state::{GameState, Phase};
