use std::sync::atomic::{AtomicU64, Ordering};

pub type OrganismId = u64;

/// Monotonic organism id source. Ids start at 1 and are never reused.
///
/// Shared by reference between the factory, the importer and the recombinator, so
/// recombinations running on different threads never mint the same id.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `last`, e.g. when resuming from exported organisms
    pub fn starting_after(last: OrganismId) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    pub fn next_id(&self) -> OrganismId {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn last_issued(&self) -> OrganismId {
        self.last.load(Ordering::Relaxed)
    }
}
