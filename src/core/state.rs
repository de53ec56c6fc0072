//! Aggregate game state.
//!
//! `GameState` is pure data: players, current seat, phase, market, last
//! roll, and the done/winner flags. It carries no rules knowledge: all
//! transitions go through `Rules::apply_action`. The caller owns the value
//! exclusively between actions; concurrent games use independent instances.
//!
//! ## Invariants (maintained by the engine)
//!
//! - `done == true` iff `winner` is set and `phase == GameOver`
//! - `current_player` changes only at the end-of-turn transition
//! - `last_roll` is `Some` exactly from dice resolution until end of turn

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::EffectStreams;
use crate::market::MarketState;

/// Turn phase.
///
/// `Resolve` is reserved: dice resolution currently runs synchronously
/// inside the ROLL transition and the phase is never entered. It stays in
/// the enum so front-ends that step phases keep working if resolution ever
/// becomes interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to roll.
    Roll,
    /// Reserved; never entered.
    Resolve,
    /// Waiting for the current player's single purchase (or pass).
    Buy,
    /// Terminal. No legal actions.
    GameOver,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    players: PlayerMap<PlayerState>,
    /// Whose turn it is.
    pub current_player: PlayerId,
    /// Current phase.
    pub phase: Phase,
    /// Shared purchase pool.
    pub market: MarketState,
    /// Dice sum of the current turn's roll, if it has happened.
    pub last_roll: Option<u8>,
    /// Set when a winner is found.
    pub done: bool,
    /// Winning seat, once the game is over.
    pub winner: Option<PlayerId>,
    /// Seeded streams for in-resolution randomness.
    pub streams: EffectStreams,
}

impl GameState {
    /// Assemble a fresh state in the ROLL phase with player 0 to act.
    #[must_use]
    pub fn new(players: PlayerMap<PlayerState>, market: MarketState, streams: EffectStreams) -> Self {
        Self {
            players,
            current_player: PlayerId::new(0),
            phase: Phase::Roll,
            market,
            last_roll: None,
            done: false,
            winner: None,
            streams,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// A player's state, mutably.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// The current player's state.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// The current player's state, mutably.
    pub fn current_mut(&mut self) -> &mut PlayerState {
        let id = self.current_player;
        &mut self.players[id]
    }

    /// Iterate `(PlayerId, &PlayerState)` in seating order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players.iter()
    }

    /// Iterate all player IDs in seating order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// The seat after the current player, wrapping around.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        PlayerId::new(((self.current_player.index() + 1) % self.player_count()) as u8)
    }

    /// End-of-turn transition: pass the turn, clear the roll, back to ROLL.
    pub fn advance_turn(&mut self) {
        self.current_player = self.next_player();
        self.last_roll = None;
        self.phase = Phase::Roll;
    }

    /// Terminal transition: record the winner and close the game.
    pub fn finish(&mut self, winner: PlayerId) {
        self.done = true;
        self.winner = Some(winner);
        self.phase = Phase::GameOver;
    }
}
