//! Undirected weighted graphs with per-goal heuristic tables.
//!
//! A [Graph] is immutable once built. Searches only ever borrow it, so the
//! same graph can back any number of searches.

use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use derive_more::Display;
use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;

/// A node identifier.
///
/// The total order on nodes breaks every tie during search, which is what
/// makes results reproducible.
pub trait Node: Clone + Debug + Display + Eq + Ord + Hash {}
impl<T> Node for T where T: Clone + Debug + Display + Eq + Ord + Hash {}

/// An undirected edge.
///
/// Endpoints are stored in ascending order, so `Edge::new(a, b, l)` and
/// `Edge::new(b, a, l)` are the same edge.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("{a}-{b}:{length}")]
pub struct Edge<N, C>
where
    N: Node,
    C: Cost,
{
    a: N,
    b: N,
    length: C,
}

impl<N, C> Edge<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn new(a: N, b: N, length: C) -> Self {
        if a <= b {
            Self { a, b, length }
        } else {
            Self { a: b, b: a, length }
        }
    }

    #[inline(always)]
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.a, &self.b)
    }

    #[inline(always)]
    pub fn length(&self) -> C {
        self.length
    }

    /// The endpoint opposite to `node`, if `node` is on this edge.
    pub fn other(&self, node: &N) -> Option<&N> {
        if *node == self.a {
            Some(&self.b)
        } else if *node == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}

/// Adjacency lists, kept sorted by neighbor.
type Adjacency<N, C> = FxHashMap<N, Vec<(N, C)>>;
/// Estimates indexed by goal first, then by node.
type HeuristicTable<N, C> = FxHashMap<N, FxHashMap<N, C>>;

#[derive(Clone, Debug)]
pub struct Graph<N, C>
where
    N: Node,
    C: Cost,
{
    /// Every node, sorted.
    nodes: Vec<N>,
    adjacency: Adjacency<N, C>,
    heuristics: HeuristicTable<N, C>,
}

impl<N, C> Graph<N, C>
where
    N: Node,
    C: Cost,
{
    #[must_use]
    pub fn builder() -> GraphBuilder<N, C> {
        GraphBuilder::new()
    }

    /// Builds a graph out of `(a, b, length)` triples.
    pub fn from_edges<I>(edges: I) -> Result<Self, N>
    where
        I: IntoIterator<Item = (N, N, C)>,
    {
        let mut builder = GraphBuilder::new();
        for (a, b, length) in edges {
            builder.insert_edge(a, b, length)?;
        }
        Ok(builder.build())
    }

    #[inline(always)]
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Every node, in ascending order.
    #[inline(always)]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge, once, sorted by endpoints.
    pub fn edges(&self) -> impl Iterator<Item = Edge<N, C>> + '_ {
        self.nodes.iter().flat_map(move |a| {
            self.adjacency[a]
                .iter()
                .filter(move |(b, _)| a < b)
                .map(move |(b, length)| Edge {
                    a: a.clone(),
                    b: b.clone(),
                    length: *length,
                })
        })
    }

    /// Neighbors of `node` with the length of the edge reaching them,
    /// ascending by neighbor.
    pub fn adjacent(&self, node: &N) -> Result<&[(N, C)], N> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| SearchError::NodeNotFound(node.clone()))
    }

    /// Neighbors of `node`, ascending.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_, N> {
        Ok(self.adjacent(node)?.iter().map(|(n, _)| n))
    }

    pub fn is_neighbor(&self, a: &N, b: &N) -> Result<bool, N> {
        Ok(self.length(a, b)?.is_some())
    }

    fn length(&self, a: &N, b: &N) -> Result<Option<C>, N> {
        let adjacent = self.adjacent(a)?;
        Ok(adjacent
            .binary_search_by(|(n, _)| n.cmp(b))
            .ok()
            .map(|i| adjacent[i].1))
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn edge(&self, a: &N, b: &N) -> Result<Edge<N, C>, N> {
        match self.length(a, b)? {
            Some(length) => Ok(Edge::new(a.clone(), b.clone(), length)),
            None => Err(SearchError::EdgeNotFound(a.clone(), b.clone())),
        }
    }

    /// The estimated cost from `node` to `goal`.
    ///
    /// Missing entries are an error and never default to zero.
    pub fn heuristic(&self, node: &N, goal: &N) -> Result<C, N> {
        self.heuristics
            .get(goal)
            .and_then(|table| table.get(node))
            .copied()
            .ok_or_else(|| SearchError::MissingHeuristic {
                node: node.clone(),
                goal: goal.clone(),
            })
    }

    /// Whether there is any estimate towards `goal`.
    pub fn has_heuristic(&self, goal: &N) -> bool {
        self.heuristics.get(goal).is_some_and(|t| !t.is_empty())
    }

    /// Total length of walking `nodes` in order.
    ///
    /// Sequences of fewer than two nodes have length zero.
    pub fn path_length(&self, nodes: &[N]) -> Result<C, N> {
        let mut total = C::zero();
        for pair in nodes.windows(2) {
            total = total.saturating_add(&self.edge(&pair[0], &pair[1])?.length());
        }
        Ok(total)
    }

    /// Sorts `nodes` best-to-worst by their estimate to `goal`, breaking ties
    /// by node.
    pub fn sort_by_heuristic<I>(&self, goal: &N, nodes: I) -> Result<Vec<N>, N>
    where
        I: IntoIterator<Item = N>,
    {
        let mut ranked = nodes
            .into_iter()
            .map(|n| Ok((self.heuristic(&n, goal)?, n)))
            .collect::<Result<Vec<(C, N)>, N>>()?;
        ranked.sort();
        Ok(ranked.into_iter().map(|(_, n)| n).collect())
    }
}

#[derive(Debug)]
pub struct GraphBuilder<N, C>
where
    N: Node,
    C: Cost,
{
    adjacency: FxHashMap<N, FxHashMap<N, C>>,
    heuristics: HeuristicTable<N, C>,
}

impl<N, C> GraphBuilder<N, C>
where
    N: Node,
    C: Cost,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            heuristics: FxHashMap::default(),
        }
    }

    /// Adds an isolated node. Returns whether it was new.
    pub fn insert_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, FxHashMap::default());
        true
    }

    /// Adds an undirected edge, and its endpoints if needed.
    ///
    /// Re-inserting an existing edge keeps the shorter length.
    pub fn insert_edge(&mut self, a: N, b: N, length: C) -> Result<(), N> {
        if a == b {
            return Err(SearchError::SelfLoop(a));
        }
        if !length.valid() {
            return Err(SearchError::InvalidLength { a, b });
        }

        // Left to right
        self.adjacency
            .entry(a.clone())
            .or_default()
            .entry(b.clone())
            .and_modify(|l| *l = std::cmp::min(*l, length))
            .or_insert(length);

        // Right to left
        self.adjacency
            .entry(b)
            .or_default()
            .entry(a)
            .and_modify(|l| *l = std::cmp::min(*l, length))
            .or_insert(length);

        Ok(())
    }

    /// Records the estimated cost from `node` to `goal`.
    pub fn insert_heuristic(&mut self, goal: N, node: N, estimate: C) -> Result<(), N> {
        if !estimate.valid() {
            return Err(SearchError::InvalidEstimate { node, goal });
        }
        self.heuristics
            .entry(goal)
            .or_default()
            .insert(node, estimate);
        Ok(())
    }

    /// Records a whole table of estimates towards `goal`.
    pub fn extend_heuristic<I>(&mut self, goal: &N, estimates: I) -> Result<(), N>
    where
        I: IntoIterator<Item = (N, C)>,
    {
        for (node, estimate) in estimates {
            self.insert_heuristic(goal.clone(), node, estimate)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn build(self) -> Graph<N, C> {
        let mut nodes: Vec<N> = self.adjacency.keys().cloned().collect();
        nodes.sort();

        let adjacency = self
            .adjacency
            .into_iter()
            .map(|(node, neighbors)| {
                let mut neighbors: Vec<(N, C)> = neighbors.into_iter().collect();
                neighbors.sort_by(|(l, _), (r, _)| l.cmp(r));
                (node, neighbors)
            })
            .collect();

        Graph {
            nodes,
            adjacency,
            heuristics: self.heuristics,
        }
    }
}

impl<N, C> Default for GraphBuilder<N, C>
where
    N: Node,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}
