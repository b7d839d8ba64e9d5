//! Match history and the read-only view the engine decides from

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::moves::{Move, Side};

/// Both sides' simultaneous plays for one completed round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub p1: Move,
    pub p2: Move,
}

impl Round {
    pub fn new(p1: Move, p2: Move) -> Self {
        Self { p1, p2 }
    }

    pub fn move_of(&self, side: Side) -> Move {
        match side {
            Side::P1 => self.p1,
            Side::P2 => self.p2,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.p1 == self.p2
    }
}

/// Ordered rounds of a match, earliest first
///
/// Serializes as the harness game state: `{"rounds": [{"p1": "R", "p2": "D"}, ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    rounds: Vec<Round>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rounds(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// Parse a harness game state
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append a completed round. Earlier rounds are never touched.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn view(&self) -> HistoryView<'_> {
        HistoryView::new(&self.rounds)
    }
}

impl FromIterator<Round> for MatchHistory {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self { rounds: iter.into_iter().collect() }
    }
}

/// Read-only accessor over a history prefix ending at "now"
///
/// Offsets count backward from the most recent round (0 = latest).
#[derive(Clone, Copy, Debug)]
pub struct HistoryView<'h> {
    rounds: &'h [Round],
}

impl<'h> HistoryView<'h> {
    pub fn new(rounds: &'h [Round]) -> Self {
        Self { rounds }
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn round_from_end(&self, from_end: usize) -> Option<&'h Round> {
        let index = self.rounds.len().checked_sub(from_end)?.checked_sub(1)?;
        self.rounds.get(index)
    }

    /// Move played by `side` `from_end` rounds before the latest, if history reaches back that far.
    pub fn move_at(&self, side: Side, from_end: usize) -> Option<Move> {
        self.round_from_end(from_end).map(|round| round.move_of(side))
    }

    /// An offset past the start of history is never a draw.
    pub fn was_draw(&self, from_end: usize) -> bool {
        self.round_from_end(from_end).is_some_and(Round::is_draw)
    }

    /// Every move `side` has played, earliest first
    pub fn moves_of(&self, side: Side) -> impl Iterator<Item = Move> + 'h {
        self.rounds.iter().map(move |round| round.move_of(side))
    }
}
