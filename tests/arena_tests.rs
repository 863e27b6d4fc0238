//! Match runner and session store tests.

use std::time::{Duration, Instant};

use punto::arena::resolve_tiebreak;
use punto::{
    run_match, EndReason, GameState, HeuristicAgent, InMemorySessionStore, MatchConfig, Move, MoveSource, Player,
    PlayerView, RulesConfig, ScriptedSource, SessionStore,
};

/// Always proposes a card the player does not hold.
struct Cheater;

impl MoveSource for Cheater {
    fn name(&self) -> &str {
        "cheater"
    }

    fn propose(&mut self, view: &PlayerView<'_>) -> Option<Move> {
        let foreign = view.player.other().colors()[0];
        let card = punto::Card::new(9, foreign)?;
        Some(Move::new(punto::Coord::new(0, 0)?, card))
    }
}

// =============================================================================
// Matches
// =============================================================================

#[test]
fn test_heuristic_matches_are_deterministic() {
    let config = MatchConfig::default().with_seed(99);

    let a = run_match(&mut HeuristicAgent::default(), &mut HeuristicAgent::default(), &config);
    let b = run_match(&mut HeuristicAgent::default(), &mut HeuristicAgent::default(), &config);

    assert_eq!(a.winner, b.winner);
    assert_eq!(a.reason, b.reason);
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.start, b.start);
    assert_eq!(a.final_state.history(), b.final_state.history());
}

#[test]
fn test_outcome_is_consistent_with_board() {
    for seed in 0..5 {
        let config = MatchConfig::default().with_seed(seed).with_rules(RulesConfig::adjacent());
        let outcome = run_match(&mut HeuristicAgent::default(), &mut HeuristicAgent::default(), &config);
        let state = &outcome.final_state;

        assert_eq!(state.history().len() as u32, outcome.turns);
        match outcome.reason {
            EndReason::FiveInLine => {
                let line = state.winning_line().unwrap();
                assert_eq!(line.player(), outcome.winner);
            }
            _ => {
                assert_eq!(state.winner(), None);
                assert_eq!(resolve_tiebreak(state.board(), outcome.start), (outcome.winner, outcome.reason));
            }
        }
    }
}

#[test]
fn test_invalid_proposals_fall_back() {
    let mut cheater = Cheater;
    let mut script = ScriptedSource::new("script", []);
    let config = MatchConfig::default().with_seed(5).with_max_turns(8);

    let outcome = run_match(&mut cheater, &mut script, &config);

    assert_eq!(outcome.turns, 8);
    for record in outcome.final_state.history() {
        assert!(record.player.owns(record.mv.card.color));
    }
}

#[test]
fn test_turn_cap_goes_to_tiebreak() {
    let config = MatchConfig::default().with_seed(1).with_max_turns(4);
    let outcome = run_match(&mut HeuristicAgent::default(), &mut HeuristicAgent::default(), &config);

    assert_eq!(outcome.turns, 4);
    assert_ne!(outcome.reason, EndReason::FiveInLine);
}

// =============================================================================
// Session store
// =============================================================================

#[test]
fn test_session_store_keeps_games_until_ttl() {
    let start = Instant::now();
    let mut rooms: InMemorySessionStore<String, GameState> = InMemorySessionStore::new(Duration::from_secs(60));

    rooms.put("room-a".to_string(), GameState::new(1), start);
    rooms.put("room-b".to_string(), GameState::new(2), start + Duration::from_secs(30));

    let reconnect = start + Duration::from_secs(45);
    let game = rooms.get(&"room-a".to_string(), reconnect).unwrap();
    assert_eq!(game.hand_size(Player::One), 2);

    let later = start + Duration::from_secs(75);
    assert_eq!(rooms.evict_expired(later), 1);
    assert!(rooms.get(&"room-a".to_string(), later).is_none());
    assert!(rooms.get(&"room-b".to_string(), later).is_some());

    assert!(rooms.remove(&"room-b".to_string()).is_some());
    assert!(rooms.is_empty());
}
