//! The action-application error taxonomy.
//!
//! Every failure is a local, synchronous signal: the engine never retries
//! or self-corrects, and it validates before mutating, so a returned error
//! always means the state is untouched. A well-behaved caller re-queries
//! `legal_actions` instead of guessing; these errors exist to catch bad UI
//! wiring and buggy bots, and are exercised directly by tests.

use thiserror::Error;

use super::state::Phase;
use crate::cards::{CardId, CardKind};

/// Why an action could not be applied.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    /// The game has finished; nothing further is legal.
    #[error("the game is over; no further actions are legal")]
    GameOver,

    /// The action kind is not valid in the current phase.
    #[error("{action} is not legal during the {phase:?} phase")]
    IllegalPhase { action: &'static str, phase: Phase },

    /// A roll was applied without an externally supplied dice sum.
    #[error("roll requires an externally supplied dice value")]
    MissingDiceValue,

    /// The requested dice count is not available to this player.
    #[error("rolling {dice} dice is not available to this player")]
    InvalidDiceCount { dice: u8 },

    /// The supplied dice sum cannot be produced by the rolled dice.
    #[error("dice sum {sum} is impossible with {dice} dice")]
    DiceOutOfRange { dice: u8, sum: u8 },

    /// The referenced card id is not in the catalog.
    #[error("{card} is not in the catalog")]
    UnknownCard { card: CardId },

    /// The referenced card exists but has the wrong kind for this action.
    #[error("{card} is {actual:?}, expected {expected:?}")]
    WrongCardKind {
        card: CardId,
        expected: CardKind,
        actual: CardKind,
    },

    /// The market has no visible copies of the requested card.
    #[error("the market has no copies of {card}")]
    CardUnavailable { card: CardId },

    /// The player cannot afford the card or landmark.
    #[error("cannot afford {card}: costs {cost}, player has {coins}")]
    InsufficientFunds {
        card: CardId,
        cost: u32,
        coins: u32,
    },

    /// The landmark is already built.
    #[error("{card} is already built")]
    AlreadyBuilt { card: CardId },
}
