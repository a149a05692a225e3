use super::units::Unit;
use crate::engines::placement::{Placement, PlacementProvider};
use crate::error::{MotifError, Result};
use crate::model::{Organism, OrganismId};
use crate::types::{ParentTag, Symbol};
use std::collections::HashSet;
use std::fmt;

/// Two organisms' recognizers, aligned through their placements on a shared sequence.
///
/// Row `organism1` always holds `P1`-tagged symbols of the first owner's material and
/// `organism2` the second's, until crossover swaps units between rows. Every retained
/// position describes a distinct overlap relationship, in sequence order:
///
/// ```text
/// p1_0  p1_1  -
/// -     p2_0  p2_1
/// ```
///
/// says recognizer 1 of the first parent overlaps recognizer 0 of the second, while
/// `p1_0` lies to the left of the second parent and `p2_1` to the right of the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRepresentation {
    owner1: OrganismId,
    owner2: OrganismId,
    organism1: Vec<Symbol>,
    organism2: Vec<Symbol>,
}

impl AlignedRepresentation {
    pub fn new(
        owner1: OrganismId,
        owner2: OrganismId,
        organism1: Vec<Symbol>,
        organism2: Vec<Symbol>,
    ) -> Result<Self> {
        if organism1.len() != organism2.len() {
            return Err(MotifError::InvariantViolation(format!(
                "representation rows differ in length: {} vs {}",
                organism1.len(),
                organism2.len()
            )));
        }
        if let Some(pos) = organism1
            .iter()
            .zip(&organism2)
            .position(|(a, b)| a.is_gap() && b.is_gap())
        {
            return Err(MotifError::InvariantViolation(format!(
                "representation position {} is a gap in both rows",
                pos
            )));
        }

        Ok(Self {
            owner1,
            owner2,
            organism1,
            organism2,
        })
    }

    /// Align two placements on a sequence of `sequence_len` positions
    pub fn from_placements(
        owner1: OrganismId,
        owner2: OrganismId,
        placement1: &Placement,
        placement2: &Placement,
        sequence_len: usize,
    ) -> Self {
        let occupancy1 = occupancy(placement1, ParentTag::P1, sequence_len);
        let occupancy2 = occupancy(placement2, ParentTag::P2, sequence_len);

        let mut organism1 = Vec::new();
        let mut organism2 = Vec::new();
        let mut seen: HashSet<(Symbol, Symbol)> = HashSet::new();

        for pair in occupancy1.into_iter().zip(occupancy2) {
            if pair.0.is_gap() && pair.1.is_gap() {
                continue;
            }
            // a long overlap collapses to the first position it is seen at
            if seen.insert(pair) {
                organism1.push(pair.0);
                organism2.push(pair.1);
            }
        }

        let mut representation = Self {
            owner1,
            owner2,
            organism1,
            organism2,
        };
        representation.remove_protrusions();
        representation
    }

    /// Drop positions where a recognizer that overlaps something somewhere is paired
    /// with a gap. Two recognizers sharing one position are paired, so
    ///
    /// ```text
    /// -----AAAA-------
    /// -------BBBB-----
    /// ```
    ///
    /// becomes the single column `A/B` instead of `AA-/-BB`.
    fn remove_protrusions(&mut self) {
        let matched: HashSet<Symbol> = self
            .pairs()
            .filter(|(a, b)| !a.is_gap() && !b.is_gap())
            .flat_map(|(a, b)| [a, b])
            .collect();

        let keep: Vec<bool> = self
            .pairs()
            .map(|(a, b)| {
                let protrusion1 = matched.contains(&a) && b.is_gap();
                let protrusion2 = matched.contains(&b) && a.is_gap();
                !(protrusion1 || protrusion2)
            })
            .collect();

        let mut flags = keep.iter();
        self.organism1.retain(|_| *flags.next().unwrap_or(&true));
        let mut flags = keep.iter();
        self.organism2.retain(|_| *flags.next().unwrap_or(&true));
    }

    pub fn owners(&self) -> (OrganismId, OrganismId) {
        (self.owner1, self.owner2)
    }

    pub fn organism1(&self) -> &[Symbol] {
        &self.organism1
    }

    pub fn organism2(&self) -> &[Symbol] {
        &self.organism2
    }

    /// Row holding the material of the given side (`P1` → first row)
    pub fn row(&self, side: ParentTag) -> &[Symbol] {
        match side {
            ParentTag::P1 => &self.organism1,
            ParentTag::P2 => &self.organism2,
        }
    }

    pub fn symbol(&self, side: ParentTag, position: usize) -> Symbol {
        self.row(side).get(position).copied().unwrap_or(Symbol::Gap)
    }

    pub fn len(&self) -> usize {
        self.organism1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organism1.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
        self.organism1.iter().copied().zip(self.organism2.iter().copied())
    }

    /// Same layout, stamped with new owners (used to describe the children)
    pub fn with_owners(&self, owner1: OrganismId, owner2: OrganismId) -> Self {
        Self {
            owner1,
            owner2,
            organism1: self.organism1.clone(),
            organism2: self.organism2.clone(),
        }
    }

    /// Exchange the content of `unit` between the two rows
    pub fn swap_unit(&mut self, unit: Unit) {
        let range = unit.start..unit.stop.min(self.len());
        self.organism1[range.clone()].swap_with_slice(&mut self.organism2[range]);
    }
}

impl fmt::Display for AlignedRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in [&self.organism1, &self.organism2] {
            let cells: Vec<String> = row.iter().map(|s| format!("{:<6}", s.to_string())).collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Sequence position -> recognizer covering it
fn occupancy(placement: &Placement, tag: ParentTag, sequence_len: usize) -> Vec<Symbol> {
    let mut cells = vec![Symbol::Gap; sequence_len];
    for (index, interval) in placement.intervals().iter().enumerate() {
        let stop = interval.stop.min(sequence_len);
        for cell in cells.iter_mut().take(stop).skip(interval.start) {
            *cell = Symbol::recognizer(tag, index);
        }
    }
    cells
}

/// Place both parents on `sequence` and align them
pub fn align_parents<P: PlacementProvider + ?Sized>(
    placer: &P,
    parent1: &Organism,
    parent2: &Organism,
    sequence: &str,
) -> Result<AlignedRepresentation> {
    let placement1 = placer.place(parent1, sequence)?;
    placement1.check_matches(parent1)?;
    let placement2 = placer.place(parent2, sequence)?;
    placement2.check_matches(parent2)?;

    let representation = AlignedRepresentation::from_placements(
        parent1.id(),
        parent2.id(),
        &placement1,
        &placement2,
        sequence.len(),
    );
    log::debug!(
        "Aligned organisms {} and {}:\n{}",
        parent1.id(),
        parent2.id(),
        representation
    );

    Ok(representation)
}
