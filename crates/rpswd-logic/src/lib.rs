//! Decision logic for Rock-Paper-Scissors-Water-Dynamite bots
//!
//! Every decision is a pure function of the match history so far. Resource
//! budgets, move frequencies and draw streaks are re-derived on each call.
//! This crate is compiled to:
//! - Native (for bot harnesses)
//! - WASM (for JavaScript harnesses)

mod config;
mod engine;
mod error;
mod frequency;
mod history;
mod ledger;
mod moves;
mod random;
mod selector;
mod streak;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{EngineConfig, DYNAMITE_BUDGET};
pub use engine::Engine;
pub use error::EngineError;
pub use frequency::{Distribution, FrequencyModel, FrequencyTable};
pub use history::{HistoryView, MatchHistory, Round};
pub use ledger::ResourceLedger;
pub use moves::{Move, Side};
pub use random::{RandomSource, SeededRng};
pub use selector::{random_basic, select_move, MoveSelector, PolicyState};
pub use streak::StreakDetector;
pub use strategy::{describe_strategy, execute_strategy, Strategy, StrategyBase, StrategyParams};

/// Result of one round from one side's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Outcome of `a` played against `b`
pub fn outcome(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats(b) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_table() {
        assert_eq!(outcome(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(outcome(Move::Rock, Move::Paper), Outcome::Lose);
        assert_eq!(outcome(Move::Dynamite, Move::Scissors), Outcome::Win);
        assert_eq!(outcome(Move::Water, Move::Dynamite), Outcome::Win);
        assert_eq!(outcome(Move::Water, Move::Rock), Outcome::Lose);
        assert_eq!(outcome(Move::Dynamite, Move::Dynamite), Outcome::Draw);
    }

    #[test]
    fn test_outcome_is_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                let flipped = match outcome(b, a) {
                    Outcome::Win => Outcome::Lose,
                    Outcome::Lose => Outcome::Win,
                    Outcome::Draw => Outcome::Draw,
                };
                assert_eq!(outcome(a, b), flipped);
            }
        }
    }
}
