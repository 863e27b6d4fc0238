//! Move sources.
//!
//! A `MoveSource` turns a player's view of the game into a proposed move.
//! Human input, a remote model call or the heuristic agent all fit behind
//! it; the caller validates whatever comes back before applying it.

use std::collections::VecDeque;

use crate::board::Board;
use crate::cards::Hand;
use crate::core::{GameState, Move, Player};

/// What a move source gets to see on its turn.
#[derive(Clone, Debug)]
pub struct PlayerView<'a> {
    pub board: &'a Board,
    pub hand: Hand,
    pub opponent_hand_size: usize,
    pub player: Player,
    /// Full state, for sources that simulate ahead.
    pub state: &'a GameState,
}

impl<'a> PlayerView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, player: Player) -> Self {
        Self {
            board: state.board(),
            hand: state.hand(player),
            opponent_hand_size: state.hand_size(player.other()),
            player,
            state,
        }
    }
}

/// Anything that can propose a move.
pub trait MoveSource {
    /// Label used in logs.
    fn name(&self) -> &str;

    /// Propose a move, or `None` if the source has nothing to offer.
    fn propose(&mut self, view: &PlayerView<'_>) -> Option<Move>;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn propose(&mut self, view: &PlayerView<'_>) -> Option<Move> {
        (**self).propose(view)
    }
}

/// Replays a fixed queue of moves, then runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedSource {
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, _view: &PlayerView<'_>) -> Option<Move> {
        self.moves.pop_front()
    }
}
