use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use smallvec::smallvec;

use crate::cost::Cost;
use crate::error::Result;
use crate::graph::Graph;
use crate::graph::Node;

/// Paths are short in practice, most never spill to the heap.
const INLINE_NODES: usize = 8;

/// A loop-free walk through a graph, with its accumulated length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<N, C>
where
    N: Node,
    C: Cost,
{
    nodes: SmallVec<[N; INLINE_NODES]>,
    cost: C,
}

impl<N, C> Path<N, C>
where
    N: Node,
    C: Cost,
{
    /// A path that stays at `start`, with cost zero.
    #[inline(always)]
    pub fn new_from_start(start: N) -> Self {
        Self {
            nodes: smallvec![start],
            cost: C::zero(),
        }
    }

    #[inline(always)]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    #[inline(always)]
    pub fn end(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    #[inline(always)]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of edges walked.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether no edge has been walked yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    #[inline(always)]
    pub fn cost(&self) -> C {
        self.cost
    }

    #[inline(always)]
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// A copy of this path walking one more edge.
    #[must_use]
    pub fn step(&self, node: N, length: C) -> Self {
        debug_assert!(!self.contains(&node), "{node} is already in {self}");
        let mut next = self.clone();
        next.nodes.push(node);
        next.cost = next.cost.saturating_add(&length);
        next
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes.into_vec()
    }
}

impl<N, C> std::fmt::Display for Path<N, C>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Path({}: ", self.cost)?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, "→")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, ")")
    }
}

/// Whether `nodes` visits some node more than once.
pub fn has_loops<N: Node>(nodes: &[N]) -> bool {
    let mut seen = FxHashSet::default();
    !nodes.iter().all(|n| seen.insert(n))
}

/// All the one-edge continuations of `path` that don't revisit a node.
///
/// Results come ascending by their new end node, which is the baseline
/// order every strategy sorts from.
pub fn extend<N, C>(graph: &Graph<N, C>, path: &Path<N, C>) -> Result<Vec<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    let extensions: Vec<Path<N, C>> = graph
        .adjacent(path.end())?
        .iter()
        .filter(|(n, _)| !path.contains(n))
        .map(|(n, length)| path.step(n.clone(), *length))
        .collect();

    debug_assert!(extensions.is_sorted_by(|l, r| l.end() < r.end()));
    Ok(extensions)
}
