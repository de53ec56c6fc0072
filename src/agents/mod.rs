//! Agents: policies that pick one of the engine's legal actions.
//!
//! The engine is agnostic to how a choice is made - a human UI, a scripted
//! test, or a bot all implement the same trait. An agent must return a
//! member of the engine's own legal-action list; anything else is rejected
//! by `apply_action` as misuse.

use crate::core::{Action, GameRng, GameState, PlayerId};
use crate::rules::Rules;

/// A policy selecting one legal action for a player.
pub trait Agent {
    /// Pick an action from the engine's legal-action list.
    ///
    /// Returns `None` when no action is legal (game over, or out of turn).
    fn select_action(&mut self, rules: &Rules, state: &GameState, player: PlayerId)
        -> Option<Action>;
}

/// A seeded bot: sensible priorities, random within them.
///
/// - always rolls when rolling is legal (picking the dice count at random)
/// - in the buy phase prefers building a landmark, then buying a card,
///   then ending the turn
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    /// Create a bot with its own deterministic stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomBot {
    fn select_action(
        &mut self,
        rules: &Rules,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        let actions = rules.legal_actions(state, player);
        if actions.is_empty() {
            return None;
        }

        let rolls: Vec<Action> = actions
            .iter()
            .copied()
            .filter(|a| matches!(a, Action::Roll { .. }))
            .collect();
        if !rolls.is_empty() {
            return self.rng.choose(&rolls).copied();
        }

        let builds: Vec<Action> = actions
            .iter()
            .copied()
            .filter(|a| matches!(a, Action::BuildLandmark { .. }))
            .collect();
        if !builds.is_empty() {
            return self.rng.choose(&builds).copied();
        }

        let buys: Vec<Action> = actions
            .iter()
            .copied()
            .filter(|a| matches!(a, Action::BuyCard { .. }))
            .collect();
        if !buys.is_empty() {
            return self.rng.choose(&buys).copied();
        }

        Some(Action::EndBuy)
    }
}
