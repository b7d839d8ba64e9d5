//! Draw streak detection

use crate::history::HistoryView;
use crate::moves::{Move, Side};

/// Reads trailing draw runs from the perspective of one side
#[derive(Clone, Copy, Debug)]
pub struct StreakDetector<'h> {
    view: HistoryView<'h>,
    opponent: Side,
}

impl<'h> StreakDetector<'h> {
    pub fn new(view: HistoryView<'h>, me: Side) -> Self {
        Self { view, opponent: me.opponent() }
    }

    /// Consecutive draws ending at the most recent round
    pub fn draw_streak_length(&self) -> usize {
        (0..self.view.round_count())
            .take_while(|&n| self.view.was_draw(n))
            .count()
    }

    /// The opponent has drawn Dynamite-for-Dynamite in each of the last two rounds.
    pub fn is_escalating_dynamite_draw(&self) -> bool {
        if self.view.round_count() < 3 {
            return false;
        }
        if self.draw_streak_length() < 2 {
            return false;
        }
        (0..2).all(|n| self.view.move_at(self.opponent, n) == Some(Move::Dynamite))
    }
}
