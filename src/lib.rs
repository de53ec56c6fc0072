//! # machi-engine
//!
//! A deterministic rules engine for Machi Koro-style city-building games:
//! players roll dice, collect income from color-coded establishment cards,
//! buy from a shared market, and race to construct a fixed set of
//! landmarks.
//!
//! ## Design Principles
//!
//! 1. **Dice from outside**: the engine never rolls the main dice. The
//!    caller (UI, bot, test) injects the sum into `apply_action`, so every
//!    transition is a pure function of its inputs.
//!
//! 2. **Seeded everything else**: deck shuffling, demolition targets, and
//!    trawler sub-rolls draw from independent streams derived from the
//!    game seed. Same seed + same actions + same dice = same game.
//!
//! 3. **Validate, then mutate**: every action handler completes all
//!    checks before touching state. An `Err` from `apply_action` means
//!    the state is exactly as it was.
//!
//! 4. **Data-driven specials**: special-card behavior lives in an
//!    effect-lookup table (condition + payout descriptors), not in a
//!    branch chain inside the resolution passes.
//!
//! ## Driving a game
//!
//! ```
//! use machi_engine::{Action, GameBuilder, Phase, PlayerId};
//!
//! let (rules, mut state) = GameBuilder::new().player_count(2).build(42).unwrap();
//!
//! // Ask, pick, apply, repeat.
//! let actions = rules.legal_actions(&state, state.current_player);
//! assert_eq!(actions[0], Action::Roll { dice: 1 });
//! rules.apply_action(&mut state, &actions[0], Some(3)).unwrap();
//! assert_eq!(state.phase, Phase::Buy);
//!
//! // The bakery (green, 2-3) paid the roller one coin.
//! assert_eq!(state.player(PlayerId::new(0)).coins, 4);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, state, actions, errors, RNG
//! - `cards`: definitions, the load-once catalog, the standard set
//! - `market`: visible window + draw pile with refill-to-width
//! - `rules`: legality, application, dice resolution, victory
//! - `agents`: the `Agent` trait and a seeded `RandomBot`

pub mod agents;
pub mod cards;
pub mod core;
pub mod market;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, EffectStreams, GameRng, GameRngState, GameState, Phase, PlayerId, PlayerMap,
    PlayerState, RulesError,
};

pub use crate::cards::{
    standard_catalog, ActivationSet, CardCatalog, CardColor, CardDefinition, CardId, CardKind,
    CardSpec, CardVersion, CatalogError,
};

pub use crate::market::{DeckCopies, MarketState};

pub use crate::rules::{
    new_game, CardEffect, EffectCondition, EffectTable, GameBuilder, Payout, Rules,
};

pub use crate::agents::{Agent, RandomBot};
