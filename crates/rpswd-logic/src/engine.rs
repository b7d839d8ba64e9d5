//! Entry point for a match harness
//!
//! An [`Engine`] is bound to one side and is otherwise stateless: every call
//! re-derives budgets, frequencies and streaks from the history it is given.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::history::MatchHistory;
use crate::ledger::ResourceLedger;
use crate::moves::{Move, Side};
use crate::random::RandomSource;
use crate::strategy::{execute_strategy, Strategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engine {
    side: Side,
    config: EngineConfig,
    strategy: Strategy,
}

impl Engine {
    /// Bind an engine to the side tagged `side` (`"p1"` or `"p2"`).
    ///
    /// Any other tag, or an invalid config, is rejected rather than defaulted.
    pub fn new(side: &str, config: EngineConfig) -> Result<Self, EngineError> {
        let side: Side = side.parse()?;
        config.validate()?;
        debug!(%side, budget = config.dynamite_budget, "engine created");
        Ok(Self {
            side,
            config,
            strategy: Strategy::default(),
        })
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Moves this side may play after `history`
    pub fn legal_moves(&self, history: &MatchHistory) -> Vec<Move> {
        ResourceLedger::from_history(&history.view(), &self.config).legal_moves(self.side)
    }

    /// Choose the next move given every completed round so far
    pub fn make_move<R: RandomSource + ?Sized>(&self, history: &MatchHistory, rng: &mut R) -> Move {
        execute_strategy(&self.strategy, history.view(), self.side, &self.config, rng)
    }

    /// Same as [`Engine::make_move`], reading the harness game state JSON
    pub fn make_move_json<R: RandomSource + ?Sized>(
        &self,
        gamestate: &str,
        rng: &mut R,
    ) -> Result<Move, EngineError> {
        let history = MatchHistory::from_json(gamestate)?;
        Ok(self.make_move(&history, rng))
    }
}
