//! Named search strategies.
//!
//! All of them are configurations of [crate::search::GenericSearch], see
//! [Strategy::config].

use std::num::NonZeroUsize;

use derive_more::Display;

use crate::cost::Cost;
use crate::graph::Node;
use crate::search::SearchConfig;

pub mod presets;

pub use presets::a_star;
pub use presets::beam;
pub use presets::best_first;
pub use presets::bfs;
pub use presets::branch_and_bound;
pub use presets::branch_and_bound_with_extended_set;
pub use presets::branch_and_bound_with_heuristic;
pub use presets::dfs;
pub use presets::hill_climbing;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[display("DFS")]
    DepthFirst,
    #[display("BFS")]
    BreadthFirst,
    #[display("Hill climbing")]
    HillClimbing,
    #[display("Best-first")]
    BestFirst,
    #[display("B&B")]
    BranchAndBound,
    #[display("B&B+h")]
    BranchAndBoundWithHeuristic,
    #[display("B&B+ext")]
    BranchAndBoundWithExtendedSet,
    #[display("A*")]
    AStar,
    #[display("Beam({_0})")]
    Beam(NonZeroUsize),
}

impl Strategy {
    /// Every strategy without parameters.
    pub const PRESETS: [Strategy; 8] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::HillClimbing,
        Strategy::BestFirst,
        Strategy::BranchAndBound,
        Strategy::BranchAndBoundWithHeuristic,
        Strategy::BranchAndBoundWithExtendedSet,
        Strategy::AStar,
    ];

    pub fn config<N, C>(&self) -> SearchConfig<N, C>
    where
        N: Node,
        C: Cost,
    {
        match *self {
            Strategy::DepthFirst => SearchConfig::depth_first(),
            Strategy::BreadthFirst => SearchConfig::breadth_first(),
            Strategy::HillClimbing => SearchConfig::hill_climbing(),
            Strategy::BestFirst => SearchConfig::best_first(),
            Strategy::BranchAndBound => SearchConfig::branch_and_bound(),
            Strategy::BranchAndBoundWithHeuristic => {
                SearchConfig::branch_and_bound_with_heuristic()
            }
            Strategy::BranchAndBoundWithExtendedSet => {
                SearchConfig::branch_and_bound_with_extended_set()
            }
            Strategy::AStar => SearchConfig::a_star(),
            Strategy::Beam(width) => SearchConfig::beam(width),
        }
    }

    /// Whether the strategy reads the heuristic table.
    pub fn uses_heuristic(&self) -> bool {
        matches!(
            self,
            Strategy::HillClimbing
                | Strategy::BestFirst
                | Strategy::BranchAndBoundWithHeuristic
                | Strategy::AStar
                | Strategy::Beam(_)
        )
    }

    /// Whether the returned path is always a shortest one.
    ///
    /// A* and B&B+h only qualify with an admissible heuristic.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            Strategy::BranchAndBound
                | Strategy::BranchAndBoundWithHeuristic
                | Strategy::BranchAndBoundWithExtendedSet
                | Strategy::AStar
        )
    }
}
