//! Move frequencies and the predicted-move distribution

use tracing::trace;

use crate::history::HistoryView;
use crate::ledger::ResourceLedger;
use crate::moves::{Move, Side};
use crate::random::RandomSource;

/// How often one side has played each move across the whole history
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; 5],
}

impl FrequencyTable {
    pub fn from_history(view: &HistoryView<'_>, side: Side) -> Self {
        let mut counts = [0u32; 5];
        for mv in view.moves_of(side) {
            counts[mv.index()] = counts[mv.index()].saturating_add(1);
        }
        Self { counts }
    }

    pub fn count(&self, mv: Move) -> u32 {
        self.counts[mv.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// Probability of each currently legal move, in canonical order
///
/// Only built when the legal moves carry some historical mass, so every
/// distribution has at least one positive weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    weights: Vec<(Move, f64)>,
    last: Move,
}

impl Distribution {
    /// Normalize `table` over `domain`. `None` when the domain has no mass.
    pub fn from_counts(table: &FrequencyTable, domain: &[Move]) -> Option<Self> {
        let mut domain = domain.to_vec();
        domain.sort_unstable();
        domain.dedup();

        let mass: u64 = domain.iter().map(|&m| table.count(m) as u64).sum();
        if mass == 0 {
            return None;
        }

        let weights: Vec<(Move, f64)> = domain
            .iter()
            .map(|&m| (m, table.count(m) as f64 / mass as f64))
            .collect();
        let last = weights
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(m, _)| *m)?;

        Some(Self { weights, last })
    }

    /// Domain moves, canonical order
    pub fn domain(&self) -> impl Iterator<Item = Move> + '_ {
        self.weights.iter().map(|(m, _)| *m)
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.weights.iter().any(|(m, _)| *m == mv)
    }

    pub fn probability(&self, mv: Move) -> f64 {
        self.weights
            .iter()
            .find(|(m, _)| *m == mv)
            .map_or(0.0, |(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Move, f64)> + '_ {
        self.weights.iter().copied()
    }

    /// Walk moves in canonical order accumulating weight and return the first
    /// whose cumulative weight reaches `draw`.
    ///
    /// Zero-weight moves are never returned. If rounding leaves the total
    /// short of `draw`, the last weighted move wins.
    pub fn pick(&self, draw: f64) -> Move {
        let mut cumulative = 0.0;
        for &(mv, weight) in self.weights.iter().filter(|(_, w)| *w > 0.0) {
            cumulative += weight;
            if draw <= cumulative {
                return mv;
            }
        }
        self.last
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Move {
        let draw = rng.next_unit();
        let predicted = self.pick(draw);
        trace!(draw, ?predicted, "sampled distribution");
        predicted
    }
}

/// Frequency model over one history snapshot
#[derive(Clone, Copy, Debug)]
pub struct FrequencyModel<'h> {
    view: HistoryView<'h>,
    ledger: ResourceLedger,
}

impl<'h> FrequencyModel<'h> {
    pub fn new(view: HistoryView<'h>, ledger: ResourceLedger) -> Self {
        Self { view, ledger }
    }

    pub fn table(&self, side: Side) -> FrequencyTable {
        FrequencyTable::from_history(&self.view, side)
    }

    /// Distribution of `side`'s next move over the moves it may still play
    ///
    /// Moves that are no longer legal for `side` are dropped even if they
    /// were played earlier. `None` means no usable signal.
    pub fn distribution(&self, side: Side) -> Option<Distribution> {
        Distribution::from_counts(&self.table(side), &self.ledger.legal_moves(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::history::{MatchHistory, Round};
    use crate::random::ScriptedRng;
    use proptest::prelude::*;
    use Move::*;

    fn model(history: &MatchHistory) -> FrequencyModel<'_> {
        let view = history.view();
        FrequencyModel::new(view, ResourceLedger::from_history(&view, &EngineConfig::standard()))
    }

    fn arb_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    #[test]
    fn test_table_counts() {
        let h: MatchHistory = vec![
            Round::new(Rock, Paper),
            Round::new(Rock, Dynamite),
            Round::new(Water, Paper),
        ]
        .into_iter()
        .collect();
        let t = FrequencyTable::from_history(&h.view(), Side::P2);
        assert_eq!(t.count(Paper), 2);
        assert_eq!(t.count(Dynamite), 1);
        assert_eq!(t.count(Rock), 0);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn test_empty_history_has_no_signal() {
        let h = MatchHistory::new();
        assert!(model(&h).distribution(Side::P2).is_none());
    }

    #[test]
    fn test_distribution_normalizes() {
        let h: MatchHistory = vec![
            Round::new(Rock, Rock),
            Round::new(Rock, Rock),
            Round::new(Rock, Paper),
            Round::new(Rock, Dynamite),
        ]
        .into_iter()
        .collect();
        let d = model(&h).distribution(Side::P2).unwrap();
        assert_eq!(d.probability(Rock), 0.5);
        assert_eq!(d.probability(Paper), 0.25);
        assert_eq!(d.probability(Dynamite), 0.25);
        assert_eq!(d.probability(Scissors), 0.0);
        assert_eq!(d.domain().collect::<Vec<_>>(), Move::ALL.to_vec());
    }

    #[test]
    fn test_exhausted_dynamite_leaves_domain() {
        let mut rounds: Vec<Round> = (0..100).map(|_| Round::new(Rock, Dynamite)).collect();
        rounds.push(Round::new(Rock, Scissors));
        let h = MatchHistory::from_rounds(rounds);
        let d = model(&h).distribution(Side::P2).unwrap();
        assert!(!d.contains(Dynamite));
        assert_eq!(d.probability(Scissors), 1.0);
    }

    #[test]
    fn test_only_illegal_mass_has_no_signal() {
        // all of p2's history is Dynamite, which is now spent
        let h: MatchHistory = (0..100).map(|_| Round::new(Paper, Dynamite)).collect();
        assert!(model(&h).distribution(Side::P2).is_none());
    }

    #[test]
    fn test_pick_walks_canonical_order() {
        let mut table = FrequencyTable::default();
        table.counts[Rock.index()] = 1;
        table.counts[Scissors.index()] = 1;
        table.counts[Dynamite.index()] = 2;
        let d = Distribution::from_counts(&table, &[Dynamite, Scissors, Rock, Paper]).unwrap();

        assert_eq!(d.pick(0.0), Rock);
        assert_eq!(d.pick(0.25), Rock);
        assert_eq!(d.pick(0.26), Scissors);
        assert_eq!(d.pick(0.5), Scissors);
        assert_eq!(d.pick(0.51), Dynamite);
        assert_eq!(d.pick(0.999_999), Dynamite);
    }

    #[test]
    fn test_pick_zero_draw_skips_unplayed_moves() {
        let mut table = FrequencyTable::default();
        table.counts[Paper.index()] = 1;
        let d = Distribution::from_counts(&table, &[Rock, Paper, Scissors]).unwrap();
        assert_eq!(d.probability(Rock), 0.0);
        assert_eq!(d.pick(0.0), Paper);
    }

    #[test]
    fn test_pick_rounding_falls_back_to_last_weighted() {
        let mut table = FrequencyTable::default();
        table.counts[Paper.index()] = 3;
        let d = Distribution::from_counts(&table, &[Rock, Paper, Scissors]).unwrap();
        assert_eq!(d.pick(1.5), Paper);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let h: MatchHistory = vec![Round::new(Rock, Rock), Round::new(Rock, Water)]
            .into_iter()
            .collect();
        let d = model(&h).distribution(Side::P2).unwrap();
        let mut a = ScriptedRng::new(&[0.7], &[]);
        let mut b = ScriptedRng::new(&[0.7], &[]);
        assert_eq!(d.sample(&mut a), d.sample(&mut b));
        assert_eq!(d.sample(&mut ScriptedRng::new(&[0.2], &[])), Rock);
        assert_eq!(d.sample(&mut ScriptedRng::new(&[0.9], &[])), Water);
    }

    proptest! {
        #[test]
        fn prop_distribution_sums_to_one(
            rounds in prop::collection::vec((arb_move(), arb_move()), 0..250)
        ) {
            let h = MatchHistory::from_rounds(
                rounds.iter().map(|&(a, b)| Round::new(a, b)).collect()
            );
            let m = model(&h);
            let ledger = ResourceLedger::from_history(&h.view(), &EngineConfig::standard());
            for side in [Side::P1, Side::P2] {
                let table = m.table(side);
                prop_assert_eq!(table.total(), h.len() as u64);
                match m.distribution(side) {
                    Some(d) => {
                        let sum: f64 = d.iter().map(|(_, w)| w).sum();
                        prop_assert!((sum - 1.0).abs() < 1e-9);
                        if !ledger.available(side) {
                            prop_assert!(!d.contains(Dynamite));
                        }
                    }
                    None => {
                        let mass: u32 = ledger.legal_moves(side).iter().map(|&mv| table.count(mv)).sum();
                        prop_assert_eq!(mass, 0);
                    }
                }
            }
        }
    }
}
