//! Dice resolution: income distribution for a rolled sum.
//!
//! Passes run in a fixed order that is a game-balance contract:
//!
//! 1. **RED**: opponents collect out of the current player's coins,
//!    visited in seating order starting just after the current player.
//!    Transfers are capped by the payer's balance and the whole pass stops
//!    once the payer hits zero.
//! 2. **GREEN**: the current player collects from their own cards.
//! 3. **BLUE**: every player collects independently, in seating order.
//! 4. **PURPLE**: reserved; an intentionally empty pass.
//!
//! RED before GREEN means opponents are paid from what the current player
//! *had*, never from income earned on this same roll.

use tracing::{debug, trace};

use crate::cards::{CardColor, CardDefinition, CardId};
use crate::core::{GameState, PlayerId};

use super::effects::{EffectCondition, Payout};
use super::engine::Rules;

impl Rules {
    /// Distribute income for a rolled dice sum.
    pub(crate) fn resolve_dice(&self, state: &mut GameState, roll: u8) {
        debug!(roll, player = state.current_player.index(), "resolving dice");

        self.resolve_red(state, roll);
        self.resolve_green(state, roll);
        self.resolve_blue(state, roll);
        self.resolve_purple(state, roll);
    }

    /// RED pass: activated opponent cards drain the current player.
    fn resolve_red(&self, state: &mut GameState, roll: u8) {
        let current = state.current_player;
        let seats = state.player_count();

        for step in 1..seats {
            let opponent = PlayerId::new(((current.index() + step) % seats) as u8);
            let owned = self.activated_cards(state, opponent, roll, CardColor::Red);

            for (card, count) in owned {
                if state.player(current).coins == 0 {
                    return;
                }

                let def = self.catalog().get_unchecked(card);
                let effect = self.effects().effect_of(card);
                if !condition_met(state, opponent, current, effect.condition) {
                    continue;
                }

                let demand = def.income * count;
                let transfer = demand.min(state.player(current).coins);
                if transfer == 0 {
                    continue;
                }

                state.player_mut(current).coins -= transfer;
                state.player_mut(opponent).coins += transfer;
                trace!(
                    from = current.index(),
                    to = opponent.index(),
                    card = %def.slug,
                    transfer,
                    "red transfer"
                );
            }
        }
    }

    /// GREEN pass: the current player's own cards pay out.
    fn resolve_green(&self, state: &mut GameState, roll: u8) {
        let current = state.current_player;
        let owned = self.activated_cards(state, current, roll, CardColor::Green);

        for (card, count) in owned {
            self.collect(state, current, current, card, count);
        }
    }

    /// BLUE pass: every player's cards pay out, regardless of whose turn.
    fn resolve_blue(&self, state: &mut GameState, roll: u8) {
        let roller = state.current_player;

        for owner in state.player_ids().collect::<Vec<_>>() {
            let owned = self.activated_cards(state, owner, roll, CardColor::Blue);
            for (card, count) in owned {
                self.collect(state, owner, roller, card, count);
            }
        }
    }

    /// PURPLE pass: reserved. Kept as an explicit step so the pass order
    /// stays fixed when purple effects land.
    fn resolve_purple(&self, _state: &mut GameState, _roll: u8) {}

    /// The cards of one color a player owns that the roll activates, in
    /// card-id order.
    fn activated_cards(
        &self,
        state: &GameState,
        owner: PlayerId,
        roll: u8,
        color: CardColor,
    ) -> Vec<(CardId, u32)> {
        state
            .player(owner)
            .establishments()
            .filter(|(card, count)| {
                let def = self.catalog().get_unchecked(*card);
                *count > 0 && def.color == color && def.activates_on(roll)
            })
            .collect()
    }

    /// Pay one activated bank-funded card (GREEN/BLUE) to its owner.
    fn collect(&self, state: &mut GameState, owner: PlayerId, roller: PlayerId, card: CardId, count: u32) {
        let effect = self.effects().effect_of(card);
        if !condition_met(state, owner, roller, effect.condition) {
            return;
        }

        let def = self.catalog().get_unchecked(card);
        let gain = self.payout(state, owner, def, count, effect.payout);
        if gain == 0 {
            return;
        }

        state.player_mut(owner).coins += gain;
        trace!(to = owner.index(), card = %def.slug, gain, "bank payout");
    }

    /// Compute (and for demolition/trawler, enact) a card's payout.
    fn payout(
        &self,
        state: &mut GameState,
        owner: PlayerId,
        def: &CardDefinition,
        count: u32,
        payout: Payout,
    ) -> u32 {
        match payout {
            Payout::Flat => def.income * count,
            Payout::PerOwned { counted } => {
                def.income * state.player(owner).count_of(counted) * count
            }
            Payout::PerOwnedPair { first, second } => {
                let owned = state.player(owner).count_of(first) + state.player(owner).count_of(second);
                def.income * owned * count
            }
            Payout::CountOwned { counted } => state.player(owner).count_of(counted) * count,
            Payout::TwoDiceSum => {
                let mut total = 0;
                for _ in 0..count {
                    let pair = state.streams.trawler.roll_d6() + state.streams.trawler.roll_d6();
                    total += u32::from(pair);
                }
                total
            }
            Payout::DemolishLandmark => {
                let mut total = 0;
                for _ in 0..count {
                    let built = state.player(owner).built_landmarks();
                    let Some(target) = state.streams.demolition.choose(&built).copied() else {
                        break;
                    };
                    state.player_mut(owner).demolish_landmark(target);
                    debug!(player = owner.index(), landmark = %target, "landmark demolished");
                    total += def.income;
                }
                total
            }
        }
    }
}

/// Evaluate an effect gate for a (card owner, roller) pair.
fn condition_met(
    state: &GameState,
    owner: PlayerId,
    roller: PlayerId,
    condition: Option<EffectCondition>,
) -> bool {
    match condition {
        None => true,
        Some(EffectCondition::OwnerHasLandmark(landmark)) => state.player(owner).has_built(landmark),
        Some(EffectCondition::OwnerLandmarksAtMost(limit)) => {
            state.player(owner).built_landmark_count() <= limit
        }
        Some(EffectCondition::RollerLandmarksAtLeast(minimum)) => {
            state.player(roller).built_landmark_count() >= minimum
        }
    }
}
