//! Dynamite budgets and move legality, derived from history

use crate::config::EngineConfig;
use crate::history::HistoryView;
use crate::moves::{Move, Side};

/// Remaining Dynamite per side
///
/// Always rebuilt from the full history, so replaying or rewinding a match
/// can never leave a stale count behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLedger {
    budget: u32,
    p1_used: u32,
    p2_used: u32,
}

impl ResourceLedger {
    pub fn from_history(view: &HistoryView<'_>, config: &EngineConfig) -> Self {
        let used = |side: Side| {
            view.moves_of(side)
                .filter(|m| *m == Move::Dynamite)
                .fold(0u32, |n, _| n.saturating_add(1))
        };
        Self {
            budget: config.dynamite_budget,
            p1_used: used(Side::P1),
            p2_used: used(Side::P2),
        }
    }

    /// Dynamite plays `side` has made so far
    pub fn used(&self, side: Side) -> u32 {
        match side {
            Side::P1 => self.p1_used,
            Side::P2 => self.p2_used,
        }
    }

    pub fn remaining(&self, side: Side) -> u32 {
        self.budget.saturating_sub(self.used(side))
    }

    pub fn available(&self, side: Side) -> bool {
        self.remaining(side) > 0
    }

    /// Moves `side` may choose next, in canonical order
    ///
    /// Dynamite needs budget of our own; Water is only offered while the
    /// opponent can still throw Dynamite.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| self.is_legal(side, *m))
            .collect()
    }

    pub fn is_legal(&self, side: Side, mv: Move) -> bool {
        match mv {
            Move::Rock | Move::Paper | Move::Scissors => true,
            Move::Water => self.available(side.opponent()),
            Move::Dynamite => self.available(side),
        }
    }
}
