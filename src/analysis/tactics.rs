//! Plain-text tactical hints built from a `LineReport`.

use serde::{Deserialize, Serialize};

use super::lines::{Extension, LineReport, LineRun};
use crate::cards::MAX_VALUE;
use crate::core::Player;
use crate::rules::WIN_LENGTH;

/// One observation about the position, from `player`'s point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tactic {
    /// Own run one card short of five with a playable end.
    WinningExtension { run: LineRun, targets: Vec<Extension> },
    /// Opponent run one card short of five.
    MustBlock { run: LineRun },
    /// Own run of three.
    Building { run: LineRun },
}

impl Tactic {
    #[must_use]
    pub fn run(&self) -> &LineRun {
        match self {
            Tactic::WinningExtension { run, .. } | Tactic::MustBlock { run } | Tactic::Building { run } => run,
        }
    }
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tactic::WinningExtension { run, targets } => {
                write!(f, "You have {run}, extend to win at")?;
                for (i, ext) in targets.iter().enumerate() {
                    let sep = if i == 0 { " " } else { " or " };
                    write!(f, "{sep}{ext}")?;
                }
                Ok(())
            }
            Tactic::MustBlock { run } => {
                write!(f, "Opponent has {run}, block now")?;
                for ext in run.extensions() {
                    write!(f, "; {ext}")?;
                }
                Ok(())
            }
            Tactic::Building { run } => write!(f, "You are building {run}"),
        }
    }
}

/// Hints for one player, most urgent first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticalSummary {
    pub tactics: Vec<Tactic>,
}

impl TacticalSummary {
    /// Collect winning extensions, then blocks, then builders.
    #[must_use]
    pub fn build(report: &LineReport, player: Player) -> Self {
        let threat_length = WIN_LENGTH - 1;
        let mut wins = Vec::new();
        let mut blocks = Vec::new();
        let mut building = Vec::new();

        for (color, runs) in report.iter() {
            let own = player.owns(color);
            for run in runs {
                if own && run.length >= threat_length {
                    // Any end that some card could still take
                    let targets: Vec<Extension> = run
                        .extensions()
                        .filter(|ext| match ext {
                            Extension::Empty(_) => true,
                            Extension::Occupied { value, .. } => *value < MAX_VALUE,
                        })
                        .copied()
                        .collect();
                    if !targets.is_empty() {
                        wins.push(Tactic::WinningExtension {
                            run: run.clone(),
                            targets,
                        });
                    }
                } else if !own && run.length >= threat_length {
                    blocks.push(Tactic::MustBlock { run: run.clone() });
                } else if own && run.length == threat_length - 1 {
                    building.push(Tactic::Building { run: run.clone() });
                }
            }
        }

        wins.append(&mut blocks);
        wins.append(&mut building);
        Self { tactics: wins }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }

    /// True if the opponent threatens to complete a line.
    #[must_use]
    pub fn must_block(&self) -> bool {
        self.tactics.iter().any(|t| matches!(t, Tactic::MustBlock { .. }))
    }
}

impl std::fmt::Display for TacticalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tactic in &self.tactics {
            writeln!(f, "- {tactic}")?;
        }
        Ok(())
    }
}
