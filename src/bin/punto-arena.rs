use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use punto::arena::{run_match, InMemorySessionStore, MatchOutcome, SessionStore};
use punto::{EndReason, GameRng, HeuristicAgent, MatchConfig, Player, PlayerMap, RulesConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run heuristic-vs-heuristic Punto matches", long_about = None)]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value_t = 10)]
    games: u64,

    /// Series seed; each match gets its own stream forked from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Applied moves before the tie-break decides
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Enforce adjacency in the rules engine too
    #[arg(long)]
    adjacent: bool,

    /// Print the final board of each match
    #[arg(long)]
    show_board: bool,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rules = if args.adjacent {
        RulesConfig::adjacent()
    } else {
        RulesConfig::permissive()
    };

    let mut series = GameRng::new(args.seed);
    let mut results: InMemorySessionStore<u64, MatchOutcome> = InMemorySessionStore::new(Duration::from_secs(3600));
    for game in 0..args.games {
        let config = MatchConfig::default()
            .with_seed(series.fork().seed())
            .with_max_turns(args.max_turns)
            .with_rules(rules);

        let mut one = HeuristicAgent::default().with_rules(rules);
        let mut two = HeuristicAgent::default().with_rules(rules);
        let outcome = run_match(&mut one, &mut two, &config);

        info!(
            game,
            winner = %outcome.winner,
            reason = %outcome.reason,
            turns = outcome.turns,
            start = %outcome.start,
            "game over"
        );
        if args.show_board {
            println!("Game {game}: {} ({})", outcome.winner, outcome.reason);
            println!("{}", outcome.final_state.board());
        }
        results.put(game, outcome, Instant::now());
    }

    let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
    let mut lines = 0;
    for outcome in results.values(Instant::now()) {
        wins[outcome.winner] += 1;
        if outcome.reason == EndReason::FiveInLine {
            lines += 1;
        }
    }

    println!(
        "{} games: {} {} - {} {} ({} decided by five in a line)",
        results.len(),
        Player::One,
        wins[Player::One],
        wins[Player::Two],
        Player::Two,
        lines
    );
}
