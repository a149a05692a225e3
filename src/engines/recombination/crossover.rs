use super::alignment::AlignedRepresentation;
use super::units::Unit;
use crate::model::OrganismId;
use rand::Rng;

/// Children representation: a copy of the parents' one owned by the children, with
/// every unit swapped independently with `swap_probability`
pub fn crossover<R: Rng>(
    parents: &AlignedRepresentation,
    units: &[Unit],
    child1: OrganismId,
    child2: OrganismId,
    swap_probability: f64,
    rng: &mut R,
) -> AlignedRepresentation {
    crossover_with(parents, units, child1, child2, |_| rng.gen_bool(swap_probability))
}

/// Same as [`crossover`], with the swap decision for each unit supplied by the caller.
/// Swapping a unit sends the first parent's material to the second child and the
/// second parent's material to the first.
pub fn crossover_with<F>(
    parents: &AlignedRepresentation,
    units: &[Unit],
    child1: OrganismId,
    child2: OrganismId,
    mut swap: F,
) -> AlignedRepresentation
where
    F: FnMut(Unit) -> bool,
{
    let mut children = parents.with_owners(child1, child2);
    let mut swapped = 0;

    for &unit in units {
        if swap(unit) {
            children.swap_unit(unit);
            swapped += 1;
        }
    }

    log::debug!(
        "Children {} and {}: swapped {}/{} units",
        child1,
        child2,
        swapped,
        units.len()
    );
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::recombination::units::define_units;
    use crate::types::{ParentTag, Symbol};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_parents() -> AlignedRepresentation {
        let p1 = |i| Symbol::recognizer(ParentTag::P1, i);
        let p2 = |i| Symbol::recognizer(ParentTag::P2, i);
        AlignedRepresentation::new(
            10,
            20,
            vec![p1(0), p1(1), Symbol::Gap, p1(2)],
            vec![p2(0), p2(0), p2(1), Symbol::Gap],
        )
        .unwrap()
    }

    #[test]
    fn test_no_swap_copies_parents() {
        let parents = sample_parents();
        let units = define_units(&parents);
        let children = crossover_with(&parents, &units, 30, 31, |_| false);

        assert_eq!(children.owners(), (30, 31));
        assert_eq!(children.organism1(), parents.organism1());
        assert_eq!(children.organism2(), parents.organism2());
    }

    #[test]
    fn test_swap_all_exchanges_rows() {
        let parents = sample_parents();
        let units = define_units(&parents);
        let children = crossover_with(&parents, &units, 30, 31, |_| true);

        assert_eq!(children.organism1(), parents.organism2());
        assert_eq!(children.organism2(), parents.organism1());
    }

    #[test]
    fn test_units_never_mix() {
        let parents = sample_parents();
        let units = define_units(&parents);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let children = crossover(&parents, &units, 30, 31, 0.5, &mut rng);

            for unit in &units {
                let span = unit.start..unit.stop;
                let c1 = &children.organism1()[span.clone()];
                let c2 = &children.organism2()[span.clone()];
                let p1 = &parents.organism1()[span.clone()];
                let p2 = &parents.organism2()[span];
                assert!((c1 == p1 && c2 == p2) || (c1 == p2 && c2 == p1));
            }
        }
    }

    #[test]
    fn test_certain_probabilities() {
        let parents = sample_parents();
        let units = define_units(&parents);
        let mut rng = StdRng::seed_from_u64(1);

        let kept = crossover(&parents, &units, 1, 2, 0.0, &mut rng);
        assert_eq!(kept.organism1(), parents.organism1());

        let swapped = crossover(&parents, &units, 1, 2, 1.0, &mut rng);
        assert_eq!(swapped.organism1(), parents.organism2());
    }
}
