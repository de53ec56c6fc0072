//! The action legality and application engine.
//!
//! `Rules` bundles the immutable per-ruleset data (catalog, effect table,
//! victory set, deck composition) and drives every state transition:
//!
//! - `legal_actions` enumerates what a player may do right now
//! - `apply_action` validates, mutates, and advances phase/turn
//! - victory is checked after every successfully applied action
//!
//! Dice sums are injected by the caller; the engine never rolls the main
//! dice itself. Validation always completes before the first mutation, so
//! an error leaves the state exactly as it was.

use tracing::debug;

use crate::cards::{
    standard, standard_catalog, CardCatalog, CardId, CardKind, CardVersion, CatalogError,
};
use crate::core::{
    Action, EffectStreams, GameRng, GameState, Phase, PlayerId, PlayerMap, PlayerState, RulesError,
};
use crate::market::{DeckCopies, MarketState};

use super::effects::EffectTable;

/// Immutable ruleset data shared by every game it deals.
#[derive(Clone, Debug)]
pub struct Rules {
    catalog: CardCatalog,
    effects: EffectTable,
    /// Landmarks required for victory, checked in this order.
    victory_landmarks: Vec<CardId>,
    /// The landmark unlocking the two-dice roll.
    two_dice_landmark: CardId,
    starting_coins: u32,
    starting_hand: Vec<CardId>,
    player_count: usize,
    versions: Vec<CardVersion>,
    copies: DeckCopies,
    max_unique: usize,
}

/// Configures and deals a new game.
///
/// ```
/// use machi_engine::{Action, GameBuilder, PlayerId};
///
/// let (rules, mut state) = GameBuilder::new().player_count(2).build(42).unwrap();
///
/// let actions = rules.legal_actions(&state, PlayerId::new(0));
/// assert_eq!(actions, vec![Action::Roll { dice: 1 }]);
///
/// // The dice sum is rolled by the caller and injected.
/// rules.apply_action(&mut state, &actions[0], Some(1)).unwrap();
/// assert_eq!(state.player(PlayerId::new(0)).coins, 4); // wheat field paid
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    versions: Vec<CardVersion>,
    copies: DeckCopies,
    max_unique: usize,
    starting_coins: u32,
    catalog: Option<CardCatalog>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            versions: vec![CardVersion::Normal],
            copies: DeckCopies::default(),
            max_unique: 10,
            starting_coins: 3,
            catalog: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats (2-8).
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Player count must be 2-8");
        self.player_count = count;
        self
    }

    /// Edition tiers whose establishments enter the deck.
    #[must_use]
    pub fn versions(mut self, versions: &[CardVersion]) -> Self {
        self.versions = versions.to_vec();
        self
    }

    /// Copies of each establishment per tier.
    #[must_use]
    pub fn copies(mut self, copies: DeckCopies) -> Self {
        self.copies = copies;
        self
    }

    /// Width of the visible market window.
    #[must_use]
    pub fn max_unique(mut self, max_unique: usize) -> Self {
        self.max_unique = max_unique;
        self
    }

    /// Coins each player starts with.
    #[must_use]
    pub fn starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Replace the standard catalog. The catalog must still carry the
    /// starting hand and the victory landmarks.
    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolve the ruleset and deal the opening state.
    pub fn build(self, seed: u64) -> Result<(Rules, GameState), CatalogError> {
        let catalog = self.catalog.unwrap_or_else(standard_catalog);
        let effects = EffectTable::standard(&catalog);

        let victory_landmarks = standard::VICTORY_LANDMARKS
            .iter()
            .map(|slug| catalog.lookup(slug))
            .collect::<Result<Vec<_>, _>>()?;
        let two_dice_landmark = catalog.lookup(standard::TRAIN_STATION)?;
        let starting_hand = vec![
            catalog.lookup(standard::WHEAT_FIELD)?,
            catalog.lookup(standard::BAKERY)?,
        ];

        let rules = Rules {
            catalog,
            effects,
            victory_landmarks,
            two_dice_landmark,
            starting_coins: self.starting_coins,
            starting_hand,
            player_count: self.player_count,
            versions: self.versions,
            copies: self.copies,
            max_unique: self.max_unique,
        };
        let state = rules.new_game(seed);
        Ok((rules, state))
    }
}

impl Rules {
    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The special-card effect table.
    #[must_use]
    pub fn effects(&self) -> &EffectTable {
        &self.effects
    }

    /// Landmarks required for victory.
    #[must_use]
    pub fn victory_landmarks(&self) -> &[CardId] {
        &self.victory_landmarks
    }

    /// Deal a fresh game from a seed, reusing this ruleset.
    ///
    /// The seed feeds three independent streams: the deck shuffle, the
    /// demolition targets, and the trawler sub-rolls.
    #[must_use]
    pub fn new_game(&self, seed: u64) -> GameState {
        let rng = GameRng::new(seed);

        let mut deck_rng = rng.for_context("deck");
        let market = MarketState::stock(
            &self.catalog,
            &self.versions,
            self.copies,
            self.max_unique,
            &mut deck_rng,
        );

        let players = PlayerMap::new(self.player_count, |_| {
            let mut player = PlayerState::new();
            player.coins = self.starting_coins;
            for &card in &self.starting_hand {
                player.add_card(card, 1);
            }
            for landmark in self.catalog.landmarks() {
                player.register_landmark(landmark.id);
            }
            player
        });

        debug!(players = self.player_count, seed, "new game dealt");
        GameState::new(players, market, EffectStreams::from_rng(&rng))
    }

    /// Enumerate the legal actions for a player.
    ///
    /// Pure: no mutation, deterministic ordering (market and landmarks in
    /// card-id order). Empty when the game is done or it is not the
    /// player's turn.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.done || player != state.current_player {
            return Vec::new();
        }

        match state.phase {
            Phase::Roll => {
                let mut actions = vec![Action::Roll { dice: 1 }];
                if state.player(player).has_built(self.two_dice_landmark) {
                    actions.push(Action::Roll { dice: 2 });
                }
                actions
            }
            Phase::Buy => {
                let coins = state.player(player).coins;
                let mut actions = Vec::new();

                for (card, _) in state.market.available() {
                    let def = self.catalog.get_unchecked(card);
                    if def.is_establishment() && coins >= def.cost {
                        actions.push(Action::BuyCard { card });
                    }
                }

                for (card, built) in state.player(player).landmarks() {
                    let def = self.catalog.get_unchecked(card);
                    if !built && coins >= def.cost {
                        actions.push(Action::BuildLandmark { card });
                    }
                }

                actions.push(Action::EndBuy);
                actions
            }
            Phase::Resolve | Phase::GameOver => Vec::new(),
        }
    }

    /// Validate and apply one action, advancing phase and turn.
    ///
    /// `dice_value` is required for (and only read by) `Action::Roll`: the
    /// externally rolled dice sum. Victory is checked after every applied
    /// action; on a win the state moves to `GameOver` atomically with the
    /// action.
    pub fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
        dice_value: Option<u8>,
    ) -> Result<(), RulesError> {
        if state.done {
            return Err(RulesError::GameOver);
        }

        match *action {
            Action::Roll { dice } => self.apply_roll(state, dice, dice_value)?,
            Action::BuyCard { card } => self.apply_buy_card(state, card)?,
            Action::BuildLandmark { card } => self.apply_build_landmark(state, card)?,
            Action::EndBuy => self.apply_end_buy(state)?,
        }

        if let Some(winner) = self.check_victory(state) {
            debug!(winner = winner.index(), "victory");
            state.finish(winner);
        }

        Ok(())
    }

    fn apply_roll(&self, state: &mut GameState, dice: u8, dice_value: Option<u8>) -> Result<(), RulesError> {
        if state.phase != Phase::Roll {
            return Err(RulesError::IllegalPhase {
                action: "roll",
                phase: state.phase,
            });
        }

        let two_dice_allowed = state.current().has_built(self.two_dice_landmark);
        if dice == 0 || dice > 2 || (dice == 2 && !two_dice_allowed) {
            return Err(RulesError::InvalidDiceCount { dice });
        }

        let sum = dice_value.ok_or(RulesError::MissingDiceValue)?;
        if sum < dice || sum > dice * 6 {
            return Err(RulesError::DiceOutOfRange { dice, sum });
        }

        state.last_roll = Some(sum);
        self.resolve_dice(state, sum);
        state.phase = Phase::Buy;
        Ok(())
    }

    fn apply_buy_card(&self, state: &mut GameState, card: CardId) -> Result<(), RulesError> {
        if state.phase != Phase::Buy {
            return Err(RulesError::IllegalPhase {
                action: "buy_card",
                phase: state.phase,
            });
        }

        let def = self
            .catalog
            .get(card)
            .ok_or(RulesError::UnknownCard { card })?;
        if !def.is_establishment() {
            return Err(RulesError::WrongCardKind {
                card,
                expected: CardKind::Establishment,
                actual: def.kind,
            });
        }
        if !state.market.can_buy(card) {
            return Err(RulesError::CardUnavailable { card });
        }
        let coins = state.current().coins;
        if coins < def.cost {
            return Err(RulesError::InsufficientFunds {
                card,
                cost: def.cost,
                coins,
            });
        }

        state.current_mut().coins -= def.cost;
        state.market.take(card);
        state.current_mut().add_card(card, 1);
        debug!(
            player = state.current_player.index(),
            card = %def.slug,
            cost = def.cost,
            "establishment bought"
        );

        // One purchase per turn: buying ends the turn.
        state.advance_turn();
        Ok(())
    }

    fn apply_build_landmark(&self, state: &mut GameState, card: CardId) -> Result<(), RulesError> {
        if state.phase != Phase::Buy {
            return Err(RulesError::IllegalPhase {
                action: "build_landmark",
                phase: state.phase,
            });
        }

        let def = self
            .catalog
            .get(card)
            .ok_or(RulesError::UnknownCard { card })?;
        if !def.is_landmark() {
            return Err(RulesError::WrongCardKind {
                card,
                expected: CardKind::Landmark,
                actual: def.kind,
            });
        }
        if state.current().has_built(card) {
            return Err(RulesError::AlreadyBuilt { card });
        }
        let coins = state.current().coins;
        if coins < def.cost {
            return Err(RulesError::InsufficientFunds {
                card,
                cost: def.cost,
                coins,
            });
        }

        state.current_mut().coins -= def.cost;
        state.current_mut().build_landmark(card);
        debug!(
            player = state.current_player.index(),
            landmark = %def.slug,
            cost = def.cost,
            "landmark built"
        );

        state.advance_turn();
        Ok(())
    }

    fn apply_end_buy(&self, state: &mut GameState) -> Result<(), RulesError> {
        if state.phase != Phase::Buy {
            return Err(RulesError::IllegalPhase {
                action: "end_buy",
                phase: state.phase,
            });
        }

        state.advance_turn();
        Ok(())
    }

    /// First player (in seating order) holding every victory landmark.
    ///
    /// The sequential scan makes the tie-break explicit: on simultaneous
    /// completion the lowest seat wins.
    #[must_use]
    pub fn check_victory(&self, state: &GameState) -> Option<PlayerId> {
        state
            .players()
            .find(|(_, player)| {
                self.victory_landmarks
                    .iter()
                    .all(|landmark| player.has_built(*landmark))
            })
            .map(|(id, _)| id)
    }
}

/// Deal a standard game: `player_count` seats, the given edition tiers,
/// all other settings at their defaults.
pub fn new_game(
    player_count: usize,
    versions: &[CardVersion],
    seed: u64,
) -> Result<(Rules, GameState), CatalogError> {
    GameBuilder::new()
        .player_count(player_count)
        .versions(versions)
        .build(seed)
}
