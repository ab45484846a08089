//! Checks for heuristic tables.
//!
//! Optimal distances come from branch and bound with an extended set, which
//! never reads the table being checked.

use derive_more::Display;

use crate::algorithms::branch_and_bound_with_extended_set;
use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::graph::Node;

/// A broken promise of a heuristic table.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Violation<N, C>
where
    N: Node,
    C: Cost,
{
    /// `h(node)` is larger than the true distance from `node` to the goal.
    #[display("h({node}) = {estimate} overestimates {optimal}")]
    Overestimate { node: N, estimate: C, optimal: C },
    /// The estimates on both ends of an edge differ by more than its length.
    #[display("|h({node}) - h({neighbor})| = {difference} exceeds {length}")]
    Inconsistent {
        node: N,
        neighbor: N,
        difference: C,
        length: C,
    },
}

fn check_goal<N, C>(graph: &Graph<N, C>, goal: &N) -> Result<(), N>
where
    N: Node,
    C: Cost,
{
    if graph.contains(goal) {
        Ok(())
    } else {
        Err(SearchError::NodeNotFound(goal.clone()))
    }
}

/// Every node whose estimate to `goal` exceeds its true distance.
///
/// Nodes that can't reach `goal` are never reported.
pub fn admissibility_violations<N, C>(
    graph: &Graph<N, C>,
    goal: &N,
) -> Result<Vec<Violation<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    check_goal(graph, goal)?;

    let mut violations = vec![];
    for node in graph.nodes() {
        let estimate = graph.heuristic(node, goal)?;
        let Some(path) = branch_and_bound_with_extended_set(graph, node, goal)? else {
            log::trace!("{node} can't reach {goal}");
            continue;
        };
        if estimate > path.cost() {
            violations.push(Violation::Overestimate {
                node: node.clone(),
                estimate,
                optimal: path.cost(),
            });
        }
    }
    Ok(violations)
}

/// Whether no estimate to `goal` overestimates the true distance.
pub fn is_admissible<N, C>(graph: &Graph<N, C>, goal: &N) -> Result<bool, N>
where
    N: Node,
    C: Cost,
{
    let violations = admissibility_violations(graph, goal)?;
    for v in &violations {
        log::debug!("Not admissible: {v}");
    }
    Ok(violations.is_empty())
}

/// Every edge whose endpoint estimates to `goal` differ by more than its
/// length. Each edge is reported once, from its smaller endpoint.
pub fn consistency_violations<N, C>(
    graph: &Graph<N, C>,
    goal: &N,
) -> Result<Vec<Violation<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    check_goal(graph, goal)?;

    let mut violations = vec![];
    for node in graph.nodes() {
        let h = graph.heuristic(node, goal)?;
        for (neighbor, length) in graph.adjacent(node)? {
            if neighbor < node {
                continue;
            }
            let difference = h.abs_diff(graph.heuristic(neighbor, goal)?);
            if difference > *length {
                violations.push(Violation::Inconsistent {
                    node: node.clone(),
                    neighbor: neighbor.clone(),
                    difference,
                    length: *length,
                });
            }
        }
    }
    Ok(violations)
}

/// Whether estimates to `goal` never change across an edge by more than
/// its length.
pub fn is_consistent<N, C>(graph: &Graph<N, C>, goal: &N) -> Result<bool, N>
where
    N: Node,
    C: Cost,
{
    let violations = consistency_violations(graph, goal)?;
    for v in &violations {
        log::debug!("Not consistent: {v}");
    }
    Ok(violations.is_empty())
}
