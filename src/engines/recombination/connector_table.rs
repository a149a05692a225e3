use super::alignment::AlignedRepresentation;
use crate::types::{NodeRef, ParentTag};

/// Which parental connectors join representation position `i` to position `j`.
///
/// In
///
/// ```text
/// p1_0  p1_1  -     p1_2
/// -     p2_0  p2_1  -
/// ```
///
/// `(0, 1)` holds `p1_0`, `(1, 3)` holds `p1_1` and `(2, 3)` holds `p2_0`, the only
/// connector of the second parent. Empty cells mean nothing parental spans that gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorTable {
    size: usize,
    cells: Vec<Vec<NodeRef>>,
}

impl ConnectorTable {
    pub fn build(representation: &AlignedRepresentation) -> Self {
        let size = representation.len();
        let mut table = Self {
            size,
            cells: vec![Vec::new(); size * size],
        };

        for tag in ParentTag::BOTH {
            let row = representation.row(tag);
            let occupied: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, s)| !s.is_gap())
                .map(|(i, _)| i)
                .collect();

            let mut connector_idx = 0;
            for pair in occupied.windows(2) {
                let (left, right) = (pair[0], pair[1]);
                // same recognizer over several positions
                if row[left] == row[right] {
                    continue;
                }
                table.cells[left * size + right].push(NodeRef::new(tag, connector_idx));
                connector_idx += 1;
            }
        }

        table
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Connectors available between `left` and `right`, empty when out of range
    pub fn get(&self, left: usize, right: usize) -> &[NodeRef] {
        if left >= self.size || right >= self.size {
            return &[];
        }
        &self.cells[left * self.size + right]
    }

    /// The connector of `parent` joining `left` to `right`, if it has one
    pub fn find(&self, parent: ParentTag, left: usize, right: usize) -> Option<NodeRef> {
        self.get(left, right).iter().copied().find(|c| c.parent == parent)
    }

    /// Non-empty cells in row-major order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &[NodeRef])> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(move |(idx, cell)| (idx / self.size, idx % self.size, cell.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    fn p1(i: usize) -> Symbol {
        Symbol::recognizer(ParentTag::P1, i)
    }

    fn p2(i: usize) -> Symbol {
        Symbol::recognizer(ParentTag::P2, i)
    }

    const GAP: Symbol = Symbol::Gap;

    #[test]
    fn test_annotates_each_parent_chain() {
        let repr = AlignedRepresentation::new(
            1,
            2,
            vec![p1(0), p1(1), GAP, p1(2)],
            vec![GAP, p2(0), p2(1), GAP],
        )
        .unwrap();
        let table = ConnectorTable::build(&repr);

        assert_eq!(table.get(0, 1), &[NodeRef::new(ParentTag::P1, 0)]);
        assert_eq!(table.get(1, 3), &[NodeRef::new(ParentTag::P1, 1)]);
        assert_eq!(table.get(1, 2), &[NodeRef::new(ParentTag::P2, 0)]);
        assert_eq!(table.entries().count(), 3);
        assert!(table.get(0, 3).is_empty());
    }

    #[test]
    fn test_both_parents_in_one_cell() {
        let repr =
            AlignedRepresentation::new(1, 2, vec![p1(0), p1(1)], vec![p2(0), p2(1)]).unwrap();
        let table = ConnectorTable::build(&repr);

        assert_eq!(
            table.get(0, 1),
            &[NodeRef::new(ParentTag::P1, 0), NodeRef::new(ParentTag::P2, 0)]
        );
        assert_eq!(table.find(ParentTag::P2, 0, 1), Some(NodeRef::new(ParentTag::P2, 0)));
    }

    #[test]
    fn test_repeated_symbol_is_not_a_connector() {
        let repr = AlignedRepresentation::new(
            1,
            2,
            vec![p1(0), p1(1), p1(2)],
            vec![p2(0), p2(0), p2(1)],
        )
        .unwrap();
        let table = ConnectorTable::build(&repr);

        assert!(table.find(ParentTag::P2, 0, 1).is_none());
        assert_eq!(table.find(ParentTag::P2, 1, 2), Some(NodeRef::new(ParentTag::P2, 0)));
        assert_eq!(table.find(ParentTag::P1, 1, 2), Some(NodeRef::new(ParentTag::P1, 1)));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let repr = AlignedRepresentation::new(1, 2, vec![p1(0)], vec![p2(0)]).unwrap();
        let table = ConnectorTable::build(&repr);
        assert!(table.get(0, 5).is_empty());
    }
}
