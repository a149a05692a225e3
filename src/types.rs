use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two organisms being recombined a node comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParentTag {
    P1,
    P2,
}

impl ParentTag {
    pub const BOTH: [ParentTag; 2] = [ParentTag::P1, ParentTag::P2];

    pub fn other(self) -> Self {
        match self {
            ParentTag::P1 => ParentTag::P2,
            ParentTag::P2 => ParentTag::P1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParentTag::P1 => "p1",
            ParentTag::P2 => "p2",
        }
    }
}

impl fmt::Display for ParentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognizer (or connector) addressed by owning parent and index in that parent's chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef {
    pub parent: ParentTag,
    pub index: usize,
}

impl NodeRef {
    pub fn new(parent: ParentTag, index: usize) -> Self {
        Self { parent, index }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.parent, self.index)
    }
}

/// One cell of an aligned representation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
    #[default]
    Gap,
    Recognizer(NodeRef),
}

impl Symbol {
    pub fn recognizer(parent: ParentTag, index: usize) -> Self {
        Symbol::Recognizer(NodeRef::new(parent, index))
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Symbol::Gap)
    }

    pub fn node(&self) -> Option<NodeRef> {
        match self {
            Symbol::Gap => None,
            Symbol::Recognizer(node) => Some(*node),
        }
    }

    pub fn parent(&self) -> Option<ParentTag> {
        self.node().map(|n| n.parent)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Gap => f.write_str("-"),
            Symbol::Recognizer(node) => write!(f, "{}", node),
        }
    }
}

/// Half-open `[start, stop)` span of sequence positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub stop: usize,
}

impl Interval {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    /// Last occupied position (inclusive)
    pub fn last(&self) -> i64 {
        self.stop as i64 - 1
    }

    /// Number of free positions between `self` and a following interval.
    /// Negative when the two overlap.
    pub fn gap_to(&self, right: &Interval) -> i64 {
        right.start as i64 - self.last() - 1
    }
}
