//! Player actions: the tagged sum over everything a player may do.
//!
//! An action is data, not behavior. It is produced either by the
//! legal-action generator or by an agent, and interpreted by
//! `Rules::apply_action`, which validates the payload before any mutation.
//! Actions are transient: they are never stored in game state.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A single player decision.
///
/// Kind-specific payloads are part of the variant, so a malformed action
/// (e.g. a buy without a card) is unrepresentable. What remains to check at
/// apply time is game-state legality: phase, funds, availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll `dice` dice (1 normally; 2 once the train station is built).
    /// The dice sum itself is supplied by the caller at apply time.
    Roll { dice: u8 },
    /// Buy one visible establishment from the market. Ends the turn.
    BuyCard { card: CardId },
    /// Construct a not-yet-built landmark. Ends the turn.
    BuildLandmark { card: CardId },
    /// End the buy phase without purchasing.
    EndBuy,
}

impl Action {
    /// The standard single-die roll.
    #[must_use]
    pub const fn roll_one() -> Self {
        Action::Roll { dice: 1 }
    }

    /// Short name of the action kind, used in error messages and logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Action::Roll { .. } => "roll",
            Action::BuyCard { .. } => "buy_card",
            Action::BuildLandmark { .. } => "build_landmark",
            Action::EndBuy => "end_buy",
        }
    }

    /// Whether this action spends the turn's single purchase.
    #[must_use]
    pub const fn is_purchase(&self) -> bool {
        matches!(self, Action::BuyCard { .. } | Action::BuildLandmark { .. })
    }
}
