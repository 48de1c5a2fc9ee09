// The draft pool: a shuffled stack of undrafted participants.

use rand::seq::SliceRandom;
use rand::Rng;

use super::registry::Participant;

/// The shrinking collection of undrafted participants.
///
/// Built once per draft as a uniform random permutation of the registered
/// participants (Fisher-Yates via `SliceRandom::shuffle`; the comparator
/// shuffle the original prototype used is biased and deliberately avoided).
/// During the draft the only mutation is `draw`, which pops from the end.
#[derive(Debug, Clone, Default)]
pub struct DraftPool {
    entries: Vec<Participant>,
}

impl DraftPool {
    /// An empty pool, used outside the Draft phase.
    pub fn empty() -> Self {
        DraftPool::default()
    }

    /// Build a shuffled pool from the registered participants.
    ///
    /// Operates on a copy; the source list is left untouched.
    pub fn shuffled(participants: &[Participant], rng: &mut impl Rng) -> Self {
        let mut entries = participants.to_vec();
        entries.shuffle(rng);
        DraftPool { entries }
    }

    /// Pop the next participant from the END of the pool, if any remain.
    pub fn draw(&mut self) -> Option<Participant> {
        self.entries.pop()
    }

    /// Number of undrafted participants remaining.
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all remaining entries (used when resetting to Setup).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
