//! Move validation and application.
//!
//! The engine is the only code that mutates a `GameState`:
//! - `validate_move` checks bounds, hand membership, placement and capture
//! - `apply_move` validates, plays the card, refills the hand, advances the
//!   turn counter and re-runs win detection
//!
//! `apply_move` does not refuse moves after the game has been decided;
//! callers check `GameState::is_game_over` first or use
//! `apply_move_guarded`.

use thiserror::Error;
use tracing::{debug, info};

use super::win::check_winner;
use crate::board::{Coord, PlacedCard};
use crate::cards::Card;
use crate::core::{GameState, Move, MoveRecord, PlacementRule, Player, RulesConfig};

/// Why a move was rejected. The `Display` text is the reason shown to the
/// player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Coordinates out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },

    #[error("You don't have card {card} in hand")]
    CardNotInHand { card: Card },

    #[error("Cannot play {played} on cell with {occupied}")]
    IllegalCapture { played: u8, occupied: u8 },

    #[error("Cell {at} is not adjacent to any card")]
    NotAdjacent { at: Coord },

    #[error("The game is already over")]
    GameFinished,
}

/// What a valid move does to its target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Lands on an empty cell.
    Placement,
    /// Overwrites a lower card (of either owner).
    Capture { captured: PlacedCard },
}

/// Boolean + reason view of a validation result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub reason: String,
}

impl From<&Result<MoveKind, MoveError>> for Validation {
    fn from(result: &Result<MoveKind, MoveError>) -> Self {
        match result {
            Ok(MoveKind::Placement) => Self {
                valid: true,
                reason: "OK".to_string(),
            },
            Ok(MoveKind::Capture { .. }) => Self {
                valid: true,
                reason: "OK - capture".to_string(),
            },
            Err(e) => Self {
                valid: false,
                reason: e.to_string(),
            },
        }
    }
}

/// Result of a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub kind: MoveKind,
    /// Replacement card drawn into hand, if the deck had one.
    pub drew: Option<Card>,
    /// Winner after the move.
    pub winner: Option<Player>,
}

/// Punto rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Check a move without changing anything.
    pub fn validate_move(
        &self,
        state: &GameState,
        x: i32,
        y: i32,
        card: Card,
        player: Player,
    ) -> Result<MoveKind, MoveError> {
        let at = Coord::new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;

        if !state.hands[player].contains(card) {
            return Err(MoveError::CardNotInHand { card });
        }

        match state.board.get(at) {
            None => {
                if self.config.placement == PlacementRule::Adjacent
                    && !state.board.is_empty()
                    && !state.board.has_neighbor(at)
                {
                    return Err(MoveError::NotAdjacent { at });
                }
                Ok(MoveKind::Placement)
            }
            // Own cards may be captured too
            Some(occupied) if card.value > occupied.value => Ok(MoveKind::Capture { captured: occupied }),
            Some(occupied) => Err(MoveError::IllegalCapture {
                played: card.value,
                occupied: occupied.value,
            }),
        }
    }

    /// `validate_move` for an already-built `Move`.
    pub fn validate(&self, state: &GameState, mv: &Move, player: Player) -> Result<MoveKind, MoveError> {
        self.validate_move(state, i32::from(mv.at.x), i32::from(mv.at.y), mv.card, player)
    }

    /// Boolean + reason form of `validate_move`.
    #[must_use]
    pub fn check_move(&self, state: &GameState, x: i32, y: i32, card: Card, player: Player) -> Validation {
        Validation::from(&self.validate_move(state, x, y, card, player))
    }

    /// Validate and play a move.
    ///
    /// On `Err` the state is unchanged.
    pub fn apply_move(
        &self,
        state: &mut GameState,
        x: i32,
        y: i32,
        card: Card,
        player: Player,
    ) -> Result<ApplyOutcome, MoveError> {
        let kind = self.validate_move(state, x, y, card, player)?;
        let at = Coord::new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;

        state.hands[player].remove(card);
        state.board.set(at, Some(PlacedCard::new(player, card)));

        let drew = state.decks[player].draw();
        if let Some(drawn) = drew {
            state.hands[player].push(drawn);
        }

        let captured = match kind {
            MoveKind::Capture { captured } => Some(captured),
            MoveKind::Placement => None,
        };
        state.history.push_back(MoveRecord {
            turn: state.turn,
            player,
            mv: Move::new(at, card),
            captured,
        });
        state.turn += 1;

        debug!(%player, x, y, %card, ?captured, turn = state.turn, "move applied");

        if let Some(line) = check_winner(&state.board) {
            let winner = line.player();
            info!(%winner, color = %line.color, direction = %line.direction, start = %line.cells[0], "five in a line");
            state.winner = Some(winner);
            state.winning_line = Some(line);
        }

        Ok(ApplyOutcome {
            kind,
            drew,
            winner: state.winner,
        })
    }

    /// `apply_move` for an already-built `Move`.
    pub fn apply(&self, state: &mut GameState, mv: &Move, player: Player) -> Result<ApplyOutcome, MoveError> {
        self.apply_move(state, i32::from(mv.at.x), i32::from(mv.at.y), mv.card, player)
    }

    /// `apply` that refuses to play on a finished game.
    pub fn apply_move_guarded(
        &self,
        state: &mut GameState,
        mv: &Move,
        player: Player,
    ) -> Result<ApplyOutcome, MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameFinished);
        }
        self.apply(state, mv, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Hand};

    fn card(value: u8, color: Color) -> Card {
        Card::new(value, color).unwrap()
    }

    fn state_with(one: &[Card], two: &[Card]) -> GameState {
        GameState::with_hands(Hand::from_cards(one), Hand::from_cards(two))
    }

    #[test]
    fn test_out_of_bounds() {
        let state = state_with(&[card(3, Color::Red)], &[]);
        let engine = RulesEngine::default();

        for (x, y) in [(-1, 0), (6, 0), (0, 6), (0, -3)] {
            assert_eq!(
                engine.validate_move(&state, x, y, card(3, Color::Red), Player::One),
                Err(MoveError::OutOfBounds { x, y })
            );
        }
    }

    #[test]
    fn test_card_must_be_in_hand() {
        let state = state_with(&[card(3, Color::Red)], &[card(3, Color::Green)]);
        let engine = RulesEngine::default();

        // Right value, wrong color
        let err = engine
            .validate_move(&state, 0, 0, card(3, Color::Blue), Player::One)
            .unwrap_err();
        assert_eq!(err.to_string(), "You don't have card B3 in hand");

        // Opponent's card
        assert!(engine
            .validate_move(&state, 0, 0, card(3, Color::Green), Player::One)
            .is_err());
    }

    #[test]
    fn test_capture_must_be_strictly_higher() {
        let mut state = state_with(
            &[card(4, Color::Red), card(5, Color::Blue)],
            &[card(4, Color::Green), card(5, Color::Yellow)],
        );
        let engine = RulesEngine::default();
        engine.apply_move(&mut state, 2, 2, card(4, Color::Red), Player::One).unwrap();

        let equal = engine.validate_move(&state, 2, 2, card(4, Color::Green), Player::Two);
        assert_eq!(equal, Err(MoveError::IllegalCapture { played: 4, occupied: 4 }));

        let higher = engine.validate_move(&state, 2, 2, card(5, Color::Yellow), Player::Two);
        assert!(matches!(higher, Ok(MoveKind::Capture { captured }) if captured.value == 4));
    }

    #[test]
    fn test_own_card_capture_allowed() {
        let mut state = state_with(&[card(2, Color::Red), card(6, Color::Blue)], &[]);
        let engine = RulesEngine::default();
        engine.apply_move(&mut state, 1, 1, card(2, Color::Red), Player::One).unwrap();

        let outcome = engine.apply_move(&mut state, 1, 1, card(6, Color::Blue), Player::One).unwrap();
        assert!(matches!(outcome.kind, MoveKind::Capture { .. }));
        assert_eq!(state.board().color_at(Coord::new(1, 1).unwrap()), Some(Color::Blue));
    }

    #[test]
    fn test_check_move_reasons() {
        let mut state = state_with(&[card(3, Color::Red)], &[card(2, Color::Green), card(5, Color::Green)]);
        let engine = RulesEngine::default();

        let ok = engine.check_move(&state, 2, 2, card(3, Color::Red), Player::One);
        assert_eq!(ok, Validation { valid: true, reason: "OK".to_string() });

        engine.apply_move(&mut state, 2, 2, card(3, Color::Red), Player::One).unwrap();

        let rejected = engine.check_move(&state, 2, 2, card(2, Color::Green), Player::Two);
        assert!(!rejected.valid);
        assert_eq!(rejected.reason, "Cannot play 2 on cell with 3");

        let capture = engine.check_move(&state, 2, 2, card(5, Color::Green), Player::Two);
        assert_eq!(capture.reason, "OK - capture");
    }

    #[test]
    fn test_failed_apply_leaves_state_untouched() {
        let mut state = state_with(&[card(3, Color::Red)], &[]);
        let engine = RulesEngine::default();

        let result = engine.apply_move(&mut state, 9, 9, card(3, Color::Red), Player::One);
        assert!(result.is_err());
        assert_eq!(state.turn(), 0);
        assert_eq!(state.hand_size(Player::One), 1);
        assert!(state.board().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_draws_replacement() {
        let mut state = GameState::new(5);
        let engine = RulesEngine::default();
        let played = *state.hand(Player::One).iter().next().unwrap();
        let deck_before = state.deck_size(Player::One);

        let outcome = engine.apply_move(&mut state, 0, 0, played, Player::One).unwrap();

        assert!(outcome.drew.is_some());
        assert_eq!(state.hand_size(Player::One), 2);
        assert_eq!(state.deck_size(Player::One), deck_before - 1);
        assert_eq!(state.turn(), 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].player, Player::One);
    }

    #[test]
    fn test_apply_without_deck_shrinks_hand() {
        let mut state = state_with(&[card(3, Color::Red), card(4, Color::Red)], &[]);
        let engine = RulesEngine::default();

        let outcome = engine.apply_move(&mut state, 0, 0, card(3, Color::Red), Player::One).unwrap();
        assert_eq!(outcome.drew, None);
        assert_eq!(state.hand_size(Player::One), 1);
    }

    #[test]
    fn test_adjacent_rule_is_opt_in() {
        let hand = [card(1, Color::Red), card(2, Color::Red)];

        let mut state = state_with(&hand, &[]);
        let permissive = RulesEngine::default();
        permissive.apply_move(&mut state, 0, 0, card(1, Color::Red), Player::One).unwrap();
        assert!(permissive.validate_move(&state, 5, 5, card(2, Color::Red), Player::One).is_ok());

        let mut state = state_with(&hand, &[]);
        let strict = RulesEngine::new(RulesConfig::adjacent());
        // First card goes anywhere
        strict.apply_move(&mut state, 0, 0, card(1, Color::Red), Player::One).unwrap();
        assert_eq!(
            strict.validate_move(&state, 5, 5, card(2, Color::Red), Player::One),
            Err(MoveError::NotAdjacent { at: Coord::new(5, 5).unwrap() })
        );
        assert!(strict.validate_move(&state, 1, 1, card(2, Color::Red), Player::One).is_ok());
    }

    #[test]
    fn test_guarded_apply_refuses_finished_game() {
        let mut state = state_with(&[], &[]);
        let engine = RulesEngine::default();
        let mv = Move::new(Coord::new(0, 0).unwrap(), card(1, Color::Red));

        assert_eq!(
            engine.apply_move_guarded(&mut state, &mv, Player::One),
            Err(MoveError::GameFinished)
        );
    }
}
