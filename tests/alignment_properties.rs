mod common;

use common::placement;
use motifevo::engines::recombination::{define_units, AlignedRepresentation};
use motifevo::types::{ParentTag, Symbol};
use proptest::prelude::*;
use std::collections::HashSet;

/// Non-overlapping, left-to-right intervals from (spacing, width) steps
fn spans_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..6, 1usize..6), 2..6).prop_map(|steps| {
        let mut cursor = 0;
        steps
            .into_iter()
            .map(|(spacing, width)| {
                let start = cursor + spacing;
                cursor = start + width;
                (start, cursor)
            })
            .collect()
    })
}

fn align(spans1: &[(usize, usize)], spans2: &[(usize, usize)]) -> AlignedRepresentation {
    let len = spans1.iter().chain(spans2).map(|&(_, stop)| stop).max().unwrap_or(0) + 3;
    AlignedRepresentation::from_placements(1, 2, &placement(spans1), &placement(spans2), len)
}

fn indices(row: &[Symbol]) -> Vec<usize> {
    let mut seen = Vec::new();
    for node in row.iter().filter_map(|s| s.node()) {
        if seen.last() != Some(&node.index) {
            seen.push(node.index);
        }
    }
    seen
}

proptest! {
    #[test]
    fn rows_are_valid(spans1 in spans_strategy(), spans2 in spans_strategy()) {
        let repr = align(&spans1, &spans2);

        prop_assert_eq!(repr.organism1().len(), repr.organism2().len());
        for (a, b) in repr.pairs() {
            prop_assert!(!(a.is_gap() && b.is_gap()));
            prop_assert!(a.is_gap() || a.parent() == Some(ParentTag::P1));
            prop_assert!(b.is_gap() || b.parent() == Some(ParentTag::P2));
        }
        // rebuilding from the same rows passes validation
        prop_assert!(AlignedRepresentation::new(
            1,
            2,
            repr.organism1().to_vec(),
            repr.organism2().to_vec()
        )
        .is_ok());
    }

    #[test]
    fn every_recognizer_kept_in_order(spans1 in spans_strategy(), spans2 in spans_strategy()) {
        let repr = align(&spans1, &spans2);

        prop_assert_eq!(indices(repr.organism1()), (0..spans1.len()).collect::<Vec<_>>());
        prop_assert_eq!(indices(repr.organism2()), (0..spans2.len()).collect::<Vec<_>>());
    }

    #[test]
    fn no_protrusions_remain(spans1 in spans_strategy(), spans2 in spans_strategy()) {
        let repr = align(&spans1, &spans2);

        let matched: HashSet<Symbol> = repr
            .pairs()
            .filter(|(a, b)| !a.is_gap() && !b.is_gap())
            .flat_map(|(a, b)| [a, b])
            .collect();
        for (a, b) in repr.pairs() {
            prop_assert!(!(matched.contains(&a) && b.is_gap()));
            prop_assert!(!(matched.contains(&b) && a.is_gap()));
        }
    }

    #[test]
    fn units_partition_without_cutting_runs(spans1 in spans_strategy(), spans2 in spans_strategy()) {
        let repr = align(&spans1, &spans2);
        let units = define_units(&repr);

        prop_assert_eq!(units.first().map(|u| u.start), Some(0));
        prop_assert_eq!(units.last().map(|u| u.stop), Some(repr.len()));
        for pair in units.windows(2) {
            prop_assert_eq!(pair[0].stop, pair[1].start);
        }
        for unit in &units {
            prop_assert!(!unit.is_empty());
            if unit.start == 0 {
                continue;
            }
            for row in [repr.organism1(), repr.organism2()] {
                let (before, at) = (row[unit.start - 1], row[unit.start]);
                prop_assert!(at.is_gap() || before != at);
            }
        }
    }

    #[test]
    fn alignment_is_deterministic(spans1 in spans_strategy(), spans2 in spans_strategy()) {
        prop_assert_eq!(align(&spans1, &spans2), align(&spans1, &spans2));
    }
}
