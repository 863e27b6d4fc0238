//! Heuristic agent.
//!
//! ## Decision order
//!
//! 1. **Immediate win**: the first candidate that wins on a cloned state.
//! 2. **Forced block**: if any opponent candidate would win on a clone of
//!    the current state, play onto one of those cells. Among blockers the
//!    highest card wins, then the higher score.
//! 3. **Best score**: the highest `score_move`, first in enumeration order
//!    on ties.
//!
//! Lookahead always runs on clones; the caller's state is never touched.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, trace};

use super::score::score_move;
use super::source::{MoveSource, PlayerView};
use crate::analysis::{legal_moves, CandidateMove};
use crate::board::Coord;
use crate::core::{GameState, HeuristicWeights, Move, Player, RulesConfig};
use crate::rules::RulesEngine;

/// Agent failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The player has no legal move; callers treat the player as unable
    /// to continue.
    #[error("no moves available for {player}")]
    NoMovesAvailable { player: Player },
}

/// Why a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecisionReason {
    ImmediateWin,
    ForcedBlock,
    BestScore { score: f64 },
}

/// A chosen move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub mv: Move,
    pub reason: DecisionReason,
}

/// Rule-based agent. Stateless between calls.
#[derive(Clone, Debug, Default)]
pub struct HeuristicAgent {
    weights: HeuristicWeights,
    engine: RulesEngine,
}

impl HeuristicAgent {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self {
            weights,
            engine: RulesEngine::default(),
        }
    }

    /// Use these rules when simulating moves.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.engine = RulesEngine::new(rules);
        self
    }

    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Pick a move for `player`.
    pub fn choose(&self, state: &GameState, player: Player) -> Result<Decision, AgentError> {
        let moves = legal_moves(state, player);
        if moves.is_empty() {
            return Err(AgentError::NoMovesAvailable { player });
        }

        if let Some(win) = self.immediate_win(state, player, &moves) {
            debug!(%player, mv = %win.mv, "immediate win");
            return Ok(Decision {
                mv: win.mv,
                reason: DecisionReason::ImmediateWin,
            });
        }

        let threats = self.threat_cells(state, player.other());
        if !threats.is_empty() {
            let mut best: Option<(&CandidateMove, u8, f64)> = None;
            for candidate in moves.iter().filter(|m| threats.contains(&m.at())) {
                let value = candidate.mv.card.value;
                let score = score_move(state.board(), player, candidate, &self.weights);
                let better = match best {
                    None => true,
                    Some((_, v, s)) => value > v || (value == v && score > s),
                };
                if better {
                    best = Some((candidate, value, score));
                }
            }
            if let Some((blocker, _, _)) = best {
                debug!(%player, mv = %blocker.mv, threats = threats.len(), "forced block");
                return Ok(Decision {
                    mv: blocker.mv,
                    reason: DecisionReason::ForcedBlock,
                });
            }
            debug!(%player, threats = threats.len(), "threat cannot be blocked");
        }

        let mut best: Option<(&CandidateMove, f64)> = None;
        for candidate in &moves {
            let score = score_move(state.board(), player, candidate, &self.weights);
            trace!(%player, mv = %candidate.mv, score, "scored");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }

        let (chosen, score) = best.ok_or(AgentError::NoMovesAvailable { player })?;
        debug!(%player, mv = %chosen.mv, score, "best score");
        Ok(Decision {
            mv: chosen.mv,
            reason: DecisionReason::BestScore { score },
        })
    }

    /// Does `mv` win for `player` when applied to a clone of `state`?
    #[must_use]
    pub fn wins_with(&self, state: &GameState, player: Player, mv: &Move) -> bool {
        let mut sim = state.clone();
        matches!(self.engine.apply(&mut sim, mv, player), Ok(outcome) if outcome.winner == Some(player))
    }

    fn immediate_win<'m>(
        &self,
        state: &GameState,
        player: Player,
        moves: &'m [CandidateMove],
    ) -> Option<&'m CandidateMove> {
        moves.iter().find(|m| self.wins_with(state, player, &m.mv))
    }

    /// Cells where `attacker` could complete a line next move.
    #[must_use]
    pub fn threat_cells(&self, state: &GameState, attacker: Player) -> FxHashSet<Coord> {
        legal_moves(state, attacker)
            .iter()
            .filter(|m| self.wins_with(state, attacker, &m.mv))
            .map(CandidateMove::at)
            .collect()
    }
}

impl MoveSource for HeuristicAgent {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn propose(&mut self, view: &PlayerView<'_>) -> Option<Move> {
        self.choose(view.state, view.player).ok().map(|d| d.mv)
    }
}

/// Pick a move with default weights and permissive rules.
pub fn choose_heuristic_move(state: &GameState, player: Player) -> Result<Decision, AgentError> {
    HeuristicAgent::default().choose(state, player)
}

/// Cells where `attacker` could win next move, with default settings.
#[must_use]
pub fn threat_cells(state: &GameState, attacker: Player) -> FxHashSet<Coord> {
    HeuristicAgent::default().threat_cells(state, attacker)
}
