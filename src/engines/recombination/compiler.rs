use super::alignment::AlignedRepresentation;
use super::connector_table::ConnectorTable;
use super::synthesis::{GapEstimator, SampledPlacements};
use crate::error::{MotifError, Result};
use crate::model::{Connector, Organism, OrganismId, Pssm};
use crate::types::{NodeRef, ParentTag, Symbol};
use std::sync::Arc;

/// How one connector slot of a child gets filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorInstruction {
    /// Share the parental connector
    Reuse(NodeRef),
    /// Estimate a new connector spanning representation positions `left..=right`
    Synthesize { left: usize, right: usize },
}

/// What a child is made of, read off its representation row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssemblyInstructions {
    recognizers: Vec<NodeRef>,
    connectors: Vec<ConnectorInstruction>,
}

impl AssemblyInstructions {
    /// Walk `row` left to right. A recognizer spanning several positions is emitted
    /// once; between two distinct recognizers the connector spans from the last
    /// position of the left one to the first position of the right one.
    pub fn from_row(row: &[Symbol], table: &ConnectorTable) -> Self {
        let mut instructions = Self::default();
        let mut previous: Option<(NodeRef, usize)> = None;

        for (position, symbol) in row.iter().enumerate() {
            let Some(node) = symbol.node() else {
                continue;
            };

            match previous {
                Some((last, _)) if last == node => {}
                Some((last, last_position)) => {
                    let reusable = if last.parent == node.parent {
                        table.find(node.parent, last_position, position)
                    } else {
                        None
                    };
                    let instruction = match reusable {
                        Some(connector) => ConnectorInstruction::Reuse(connector),
                        None => ConnectorInstruction::Synthesize {
                            left: last_position,
                            right: position,
                        },
                    };

                    instructions.connectors.push(instruction);
                    instructions.recognizers.push(node);
                }
                None => instructions.recognizers.push(node),
            }

            previous = Some((node, position));
        }

        instructions
    }

    pub fn recognizers(&self) -> &[NodeRef] {
        &self.recognizers
    }

    pub fn connectors(&self) -> &[ConnectorInstruction] {
        &self.connectors
    }

    pub fn synthesis_count(&self) -> usize {
        self.connectors
            .iter()
            .filter(|c| matches!(c, ConnectorInstruction::Synthesize { .. }))
            .count()
    }
}

/// Read access to the two parents by tag
#[derive(Debug, Clone, Copy)]
pub struct ParentPair<'a> {
    pub parent1: &'a Organism,
    pub parent2: &'a Organism,
}

impl<'a> ParentPair<'a> {
    pub fn new(parent1: &'a Organism, parent2: &'a Organism) -> Self {
        Self { parent1, parent2 }
    }

    pub fn get(&self, tag: ParentTag) -> &'a Organism {
        match tag {
            ParentTag::P1 => self.parent1,
            ParentTag::P2 => self.parent2,
        }
    }

    fn recognizer(&self, node: NodeRef) -> Result<Arc<Pssm>> {
        self.get(node.parent).recognizer(node.index).cloned().ok_or_else(|| {
            MotifError::InvariantViolation(format!(
                "recognizer {} does not exist in organism {}",
                node,
                self.get(node.parent).id()
            ))
        })
    }

    fn connector(&self, node: NodeRef) -> Result<Arc<Connector>> {
        self.get(node.parent).connector(node.index).cloned().ok_or_else(|| {
            MotifError::InvariantViolation(format!(
                "connector {} does not exist in organism {}",
                node,
                self.get(node.parent).id()
            ))
        })
    }
}

/// Everything the compiler reads besides the instructions themselves
pub struct CompileContext<'a> {
    pub parents: ParentPair<'a>,
    pub parents_repr: &'a AlignedRepresentation,
    pub sample: &'a SampledPlacements,
    pub estimator: &'a GapEstimator,
}

/// Build the child organism described by `instructions`
pub fn compile(
    child_id: OrganismId,
    instructions: &AssemblyInstructions,
    ctx: &CompileContext<'_>,
) -> Result<Organism> {
    if instructions.recognizers.len() < 2 {
        return Err(MotifError::DegenerateChild {
            id: child_id,
            recognizers: instructions.recognizers.len(),
        });
    }

    let recognizers = instructions
        .recognizers
        .iter()
        .map(|&node| ctx.parents.recognizer(node))
        .collect::<Result<Vec<_>>>()?;

    let connectors = instructions
        .connectors
        .iter()
        .map(|instruction| match *instruction {
            ConnectorInstruction::Reuse(node) => ctx.parents.connector(node),
            ConnectorInstruction::Synthesize { left, right } => {
                let (left_node, right_node) = synthesis_endpoints(ctx.parents_repr, left, right)?;
                ctx.estimator
                    .synthesize(left_node, right_node, ctx.sample)
                    .map(Arc::new)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Compiled child {}: {} recognizers, {} synthesized connectors",
        child_id,
        recognizers.len(),
        instructions.synthesis_count()
    );

    Organism::new(child_id, recognizers, connectors)
}

/// Recognizers whose observed distance estimates the gap between positions `left`
/// and `right`: both from the first parent if it covers both ends, else both from
/// the second, else the left end from whichever parent has it and the right end
/// from the other.
pub fn synthesis_endpoints(
    parents_repr: &AlignedRepresentation,
    left: usize,
    right: usize,
) -> Result<(NodeRef, NodeRef)> {
    let p1_left = parents_repr.symbol(ParentTag::P1, left).node();
    let p2_left = parents_repr.symbol(ParentTag::P2, left).node();
    let p1_right = parents_repr.symbol(ParentTag::P1, right).node();
    let p2_right = parents_repr.symbol(ParentTag::P2, right).node();

    let endpoints = match (p1_left, p1_right, p2_left, p2_right) {
        (Some(l), Some(r), _, _) => Some((l, r)),
        (_, _, Some(l), Some(r)) => Some((l, r)),
        (Some(l), None, _, Some(r)) => Some((l, r)),
        (None, Some(r), Some(l), _) => Some((l, r)),
        _ => None,
    };

    endpoints.ok_or_else(|| {
        MotifError::InvariantViolation(format!(
            "no recognizers at representation positions {} and {}",
            left, right
        ))
    })
}
