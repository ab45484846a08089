//! Keys used to order paths.

use crate::cost::Cost;
use crate::error::Result;
use crate::graph::Graph;
use crate::graph::Node;
use crate::path::Path;

/// A caller-provided ranking of a path heading to `goal`. Lower is better.
pub type RankFn<N, C> = fn(&Graph<N, C>, &N, &Path<N, C>) -> Result<C, N>;

/// How a batch of paths, or the whole agenda, gets sorted.
///
/// Sorting is stable and ascending on `(rank, end node)`.
pub enum Ranking<N, C>
where
    N: Node,
    C: Cost,
{
    /// Estimated cost from the path's end to the goal.
    Heuristic,
    /// Accumulated path length.
    PathCost,
    /// Accumulated path length plus the estimate to the goal.
    CostPlusHeuristic,
    Custom(RankFn<N, C>),
}

impl<N, C> Ranking<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn rank(&self, graph: &Graph<N, C>, goal: &N, path: &Path<N, C>) -> Result<C, N> {
        match self {
            Ranking::Heuristic => graph.heuristic(path.end(), goal),
            Ranking::PathCost => Ok(path.cost()),
            Ranking::CostPlusHeuristic => {
                let h = graph.heuristic(path.end(), goal)?;
                Ok(path.cost().saturating_add(&h))
            }
            Ranking::Custom(rank) => rank(graph, goal, path),
        }
    }

    /// Sorts `paths` best-to-worst.
    pub fn sort(
        &self,
        graph: &Graph<N, C>,
        goal: &N,
        paths: Vec<Path<N, C>>,
    ) -> Result<Vec<Path<N, C>>, N> {
        let mut ranked = paths
            .into_iter()
            .map(|p| Ok((self.rank(graph, goal, &p)?, p)))
            .collect::<Result<Vec<(C, Path<N, C>)>, N>>()?;
        ranked.sort_by(|(l_rank, l), (r_rank, r)| {
            l_rank.cmp(r_rank).then_with(|| l.end().cmp(r.end()))
        });
        Ok(ranked.into_iter().map(|(_, p)| p).collect())
    }
}

impl<N, C> Clone for Ranking<N, C>
where
    N: Node,
    C: Cost,
{
    fn clone(&self) -> Self {
        *self
    }
}
impl<N, C> Copy for Ranking<N, C>
where
    N: Node,
    C: Cost,
{
}

impl<N, C> std::fmt::Debug for Ranking<N, C>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::Heuristic => write!(f, "Heuristic"),
            Ranking::PathCost => write!(f, "PathCost"),
            Ranking::CostPlusHeuristic => write!(f, "CostPlusHeuristic"),
            Ranking::Custom(_) => write!(f, "Custom"),
        }
    }
}
