//! Bot variants and their execution

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::history::HistoryView;
use crate::ledger::ResourceLedger;
use crate::moves::{Move, Side};
use crate::random::RandomSource;
use crate::selector::{random_basic, select_move};
use crate::streak::StreakDetector;

/// Base strategy type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyBase {
    /// Counter a frequency-weighted prediction after draws, Water against Dynamite escalation.
    Adaptive,
    /// Uniform over every legal move.
    Random,
    /// Dynamite until the budget runs out, then uniform over legal moves.
    AlwaysDynamite,
    /// After a draw, lean toward Dynamite more heavily the longer the draw run.
    DrawDynamite,
    /// Water against repeated Dynamite draws, Dynamite or Water after other draws.
    DrawEscalation,
}

impl StrategyBase {
    pub const ALL: [StrategyBase; 5] = [
        StrategyBase::Adaptive,
        StrategyBase::Random,
        StrategyBase::AlwaysDynamite,
        StrategyBase::DrawDynamite,
        StrategyBase::DrawEscalation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyBase::Adaptive => "Adaptive",
            StrategyBase::Random => "Random",
            StrategyBase::AlwaysDynamite => "AlwaysDynamite",
            StrategyBase::DrawDynamite => "DrawDynamite",
            StrategyBase::DrawEscalation => "DrawEscalation",
        }
    }
}

impl FromStr for StrategyBase {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyBase::ALL
            .into_iter()
            .find(|base| base.name() == s)
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_string()))
    }
}

/// Strategy parameters for fine-tuning behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Dynamite weight per drawn round for DrawDynamite (against 1 for Rock/Paper/Scissors)
    pub draw_dynamite_weight: u8,
    /// Percentage chance DrawEscalation answers a plain draw with Water instead of Dynamite (0-100)
    pub water_bias: u8,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            draw_dynamite_weight: 2,
            water_bias: 50,
        }
    }
}

/// Complete strategy with base type and parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub base: StrategyBase,
    #[serde(default)]
    pub params: StrategyParams,
}

impl Strategy {
    /// Create a new strategy with default parameters
    pub fn new(base: StrategyBase) -> Self {
        Self {
            base,
            params: StrategyParams::default(),
        }
    }

    pub fn with_params(base: StrategyBase, params: StrategyParams) -> Self {
        Self { base, params }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategyBase::Adaptive)
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `view` - Every completed round so far
/// * `me` - The side we are choosing for
/// * `config` - Rule parameters (Dynamite budget)
/// * `rng` - Random source for this decision
pub fn execute_strategy<R: RandomSource + ?Sized>(
    strategy: &Strategy,
    view: HistoryView<'_>,
    me: Side,
    config: &EngineConfig,
    rng: &mut R,
) -> Move {
    let ledger = ResourceLedger::from_history(&view, config);

    match strategy.base {
        StrategyBase::Adaptive => select_move(view, me, config, rng),
        StrategyBase::Random => execute_random(&ledger, me, rng),
        StrategyBase::AlwaysDynamite => {
            if ledger.available(me) {
                Move::Dynamite
            } else {
                execute_random(&ledger, me, rng)
            }
        }
        StrategyBase::DrawDynamite => {
            execute_draw_dynamite(view, &ledger, me, &strategy.params, rng)
        }
        StrategyBase::DrawEscalation => {
            execute_draw_escalation(view, &ledger, me, &strategy.params, rng)
        }
    }
}

/// Random: uniform over the full legal set
fn execute_random<R: RandomSource + ?Sized>(ledger: &ResourceLedger, me: Side, rng: &mut R) -> Move {
    rng.choose_move(&ledger.legal_moves(me))
        .unwrap_or_else(|| random_basic(rng))
}

fn dynamite_or_basic<R: RandomSource + ?Sized>(ledger: &ResourceLedger, me: Side, rng: &mut R) -> Move {
    if ledger.available(me) {
        Move::Dynamite
    } else {
        random_basic(rng)
    }
}

fn water_or_basic<R: RandomSource + ?Sized>(ledger: &ResourceLedger, me: Side, rng: &mut R) -> Move {
    if ledger.is_legal(me, Move::Water) {
        Move::Water
    } else {
        random_basic(rng)
    }
}

/// DrawDynamite: weight Dynamite by `draw_dynamite_weight * streak` against 1 for a basic move
fn execute_draw_dynamite<R: RandomSource + ?Sized>(
    view: HistoryView<'_>,
    ledger: &ResourceLedger,
    me: Side,
    params: &StrategyParams,
    rng: &mut R,
) -> Move {
    let streak = StreakDetector::new(view, me).draw_streak_length();
    if streak == 0 {
        return random_basic(rng);
    }

    let dynamite_weight = params.draw_dynamite_weight as f64 * streak as f64;
    let threshold = dynamite_weight / (dynamite_weight + 1.0);
    if rng.next_unit() < threshold {
        dynamite_or_basic(ledger, me, rng)
    } else {
        random_basic(rng)
    }
}

/// DrawEscalation: Water on escalating Dynamite draws, coin flip on other draws
fn execute_draw_escalation<R: RandomSource + ?Sized>(
    view: HistoryView<'_>,
    ledger: &ResourceLedger,
    me: Side,
    params: &StrategyParams,
    rng: &mut R,
) -> Move {
    let streak = StreakDetector::new(view, me);
    if streak.draw_streak_length() == 0 {
        return random_basic(rng);
    }
    if streak.is_escalating_dynamite_draw() {
        return water_or_basic(ledger, me, rng);
    }

    if rng.next_unit() * 100.0 < params.water_bias as f64 {
        water_or_basic(ledger, me, rng)
    } else {
        dynamite_or_basic(ledger, me, rng)
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: &Strategy) -> String {
    let base_desc = match strategy.base {
        StrategyBase::Adaptive => {
            "Predicts the opponent from its move frequencies after a draw and plays a legal counter. Answers repeated Dynamite draws with Water."
        }
        StrategyBase::Random => "Plays any legal move uniformly at random.",
        StrategyBase::AlwaysDynamite => "Plays Dynamite until it runs out, then plays randomly.",
        StrategyBase::DrawDynamite => "Plays Dynamite after draws, more likely the longer the draw run.",
        StrategyBase::DrawEscalation => {
            "Answers repeated Dynamite draws with Water and other draws with Dynamite or Water."
        }
    };

    let mut desc = base_desc.to_string();

    match strategy.base {
        StrategyBase::DrawDynamite if strategy.params.draw_dynamite_weight != 2 => {
            desc.push_str(&format!(
                " Dynamite weight {} per drawn round.",
                strategy.params.draw_dynamite_weight
            ));
        }
        StrategyBase::DrawEscalation if strategy.params.water_bias != 50 => {
            desc.push_str(&format!(
                " {}% chance of Water after a plain draw.",
                strategy.params.water_bias
            ));
        }
        _ => {}
    }

    desc
}
