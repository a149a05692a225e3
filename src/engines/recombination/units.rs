use super::alignment::AlignedRepresentation;
use crate::types::Symbol;

/// Half-open span `[start, stop)` of representation positions swapped as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub start: usize,
    pub stop: usize,
}

impl Unit {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }
}

/// Split the representation into units that never cut through a recognizer.
///
/// In
///
/// ```text
/// p1_0  p1_1  -     p1_2
/// p2_0  p2_0  p2_1  -
/// ```
///
/// `p2_0` overlaps both `p1_0` and `p1_1`, so the first two positions form one unit:
/// `[(0, 2), (2, 3), (3, 4)]`.
pub fn define_units(representation: &AlignedRepresentation) -> Vec<Unit> {
    let len = representation.len();
    if len == 0 {
        return Vec::new();
    }

    let row1 = representation.organism1();
    let row2 = representation.organism2();

    let mut starts = vec![0];
    for i in 1..len {
        if continues_run(row1, i) || continues_run(row2, i) {
            continue;
        }
        starts.push(i);
    }

    starts
        .iter()
        .zip(starts.iter().skip(1).chain(std::iter::once(&len)))
        .map(|(&start, &stop)| Unit::new(start, stop))
        .collect()
}

/// Position `i` holds the same recognizer as `i - 1`
fn continues_run(row: &[Symbol], i: usize) -> bool {
    !row[i].is_gap() && row[i] == row[i - 1]
}
