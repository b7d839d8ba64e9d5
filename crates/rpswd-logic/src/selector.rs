//! Adaptive move selection
//!
//! Per decision the selector walks three states in order:
//! 1. escalation response: the opponent is locked into Dynamite draws, play Water
//! 2. draw response: predict the opponent from its move frequencies and counter it
//! 3. steady state: uniform Rock/Paper/Scissors
//!
//! Water and Dynamite are only ever chosen in the first two states.

use tracing::debug;

use crate::config::EngineConfig;
use crate::frequency::FrequencyModel;
use crate::history::HistoryView;
use crate::ledger::ResourceLedger;
use crate::moves::{Move, Side};
use crate::random::RandomSource;
use crate::streak::StreakDetector;

/// Which branch of the policy applies to a history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyState {
    EscalationResponse,
    DrawResponse,
    SteadyState,
}

/// Decision state for one side, derived fresh from a history snapshot
#[derive(Clone, Copy, Debug)]
pub struct MoveSelector<'h> {
    view: HistoryView<'h>,
    me: Side,
    ledger: ResourceLedger,
}

impl<'h> MoveSelector<'h> {
    pub fn new(view: HistoryView<'h>, me: Side, config: &EngineConfig) -> Self {
        Self {
            view,
            me,
            ledger: ResourceLedger::from_history(&view, config),
        }
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// The policy branch `select` will take
    pub fn state(&self) -> PolicyState {
        let streak = StreakDetector::new(self.view, self.me);
        if streak.is_escalating_dynamite_draw() && self.ledger.is_legal(self.me, Move::Water) {
            PolicyState::EscalationResponse
        } else if streak.draw_streak_length() > 0 {
            PolicyState::DrawResponse
        } else {
            PolicyState::SteadyState
        }
    }

    pub fn select<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Move {
        let state = self.state();
        let chosen = match state {
            PolicyState::EscalationResponse => Move::Water,
            PolicyState::DrawResponse => self.counter_predicted(rng),
            PolicyState::SteadyState => random_basic(rng),
        };
        debug!(
            side = %self.me,
            rounds = self.view.round_count(),
            streak = StreakDetector::new(self.view, self.me).draw_streak_length(),
            ?state,
            chosen = %chosen,
            "selected move"
        );
        chosen
    }

    /// Counter a move sampled from the opponent's frequency distribution
    fn counter_predicted<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Move {
        let model = FrequencyModel::new(self.view, self.ledger);
        let Some(distribution) = model.distribution(self.me.opponent()) else {
            debug!(side = %self.me, "no opponent signal, playing uniform");
            return random_basic(rng);
        };

        let predicted = distribution.sample(rng);
        let counters: Vec<Move> = predicted
            .counters()
            .iter()
            .copied()
            .filter(|m| self.ledger.is_legal(self.me, *m))
            .collect();

        match rng.choose_move(&counters) {
            Some(mv) => mv,
            None => {
                debug!(side = %self.me, predicted = %predicted, "no legal counter, playing uniform");
                random_basic(rng)
            }
        }
    }
}

/// Uniform choice over Rock, Paper and Scissors
pub fn random_basic<R: RandomSource + ?Sized>(rng: &mut R) -> Move {
    Move::BASIC[rng.next_index(Move::BASIC.len()) % Move::BASIC.len()]
}

/// Choose `me`'s next move for the given history
pub fn select_move<R: RandomSource + ?Sized>(
    view: HistoryView<'_>,
    me: Side,
    config: &EngineConfig,
    rng: &mut R,
) -> Move {
    MoveSelector::new(view, me, config).select(rng)
}
