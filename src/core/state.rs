//! Game state.
//!
//! `GameState` is the single mutable object of a match: the board, both
//! decks and hands, the turn counter, the winner and the move history. It
//! is only mutated through `RulesEngine::apply_move`; analysis code reads
//! it or works on clones.
//!
//! Cloning is a full deep copy of everything except the history, which is
//! an `im::Vector` and shares structure. Lookahead clones are fully
//! detached from the live game.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::MoveRecord;
use super::player::{Player, PlayerMap};
use super::rng::GameRng;
use crate::board::Board;
use crate::cards::{Deck, Hand};
use crate::rules::WinningLine;

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode game snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) hands: PlayerMap<Hand>,
    pub(crate) decks: PlayerMap<Deck>,
    pub(crate) turn: u32,
    pub(crate) winner: Option<Player>,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) history: Vector<MoveRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Start a new game: shuffle both decks and deal two cards each.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck_one = Deck::shuffled(Player::One, &mut rng);
        let deck_two = Deck::shuffled(Player::Two, &mut rng);
        Self::from_decks(deck_one, deck_two, rng)
    }

    /// Start a game from fixed deck orders (last card drawn first).
    #[must_use]
    pub fn with_decks(deck_one: Deck, deck_two: Deck) -> Self {
        Self::from_decks(deck_one, deck_two, GameRng::new(0))
    }

    /// Start a game with explicit hands and empty decks.
    #[must_use]
    pub fn with_hands(hand_one: Hand, hand_two: Hand) -> Self {
        let mut state = Self::with_decks(Deck::empty(), Deck::empty());
        state.hands[Player::One] = hand_one;
        state.hands[Player::Two] = hand_two;
        state
    }

    /// Replace the board, for analysing a given position.
    ///
    /// Neither winner nor history is recomputed.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    fn from_decks(mut deck_one: Deck, mut deck_two: Deck, rng: GameRng) -> Self {
        let hand_one = Hand::deal(&mut deck_one);
        let hand_two = Hand::deal(&mut deck_two);

        Self {
            board: Board::new(),
            hands: PlayerMap::from_pair(hand_one, hand_two),
            decks: PlayerMap::from_pair(deck_one, deck_two),
            turn: 0,
            winner: None,
            winning_line: None,
            history: Vector::new(),
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of a player's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> Hand {
        self.hands[player].clone()
    }

    #[must_use]
    pub fn hand_size(&self, player: Player) -> usize {
        self.hands[player].len()
    }

    #[must_use]
    pub fn deck_size(&self, player: Player) -> usize {
        self.decks[player].len()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The five cells that decided the game, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// True if a player has no cards left in hand or deck.
    #[must_use]
    pub fn is_exhausted(&self, player: Player) -> bool {
        self.hands[player].is_empty() && self.decks[player].is_empty()
    }

    /// Over when someone has won or both players have run out of cards.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || Player::ALL.iter().all(|&p| self.is_exhausted(p))
    }

    // === Snapshots ===

    /// Encode the full state (including RNG position) with bincode.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a state produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
