//! One-call versions of every [Strategy](super::Strategy).

use std::num::NonZeroUsize;

use crate::cost::Cost;
use crate::error::Result;
use crate::graph::Graph;
use crate::graph::Node;
use crate::path::Path;
use crate::search::SearchConfig;
use crate::search::search;

/// Depth-first search, trying neighbors in ascending order.
pub fn dfs<N, C>(graph: &Graph<N, C>, start: &N, goal: &N) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::depth_first())
}

/// Breadth-first search. Finds a path with the fewest edges.
pub fn bfs<N, C>(graph: &Graph<N, C>, start: &N, goal: &N) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::breadth_first())
}

pub fn hill_climbing<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::hill_climbing())
}

pub fn best_first<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::best_first())
}

/// Beam search keeping the `width` most promising paths.
///
/// Unlike the other strategies it may miss a reachable goal.
pub fn beam<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
    width: NonZeroUsize,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::beam(width))
}

pub fn branch_and_bound<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::branch_and_bound())
}

pub fn branch_and_bound_with_heuristic<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::branch_and_bound_with_heuristic())
}

/// Branch and bound that never extends a node twice.
///
/// Needs no heuristic, so it's the ground truth for checking one.
pub fn branch_and_bound_with_extended_set<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(
        graph,
        start,
        goal,
        &SearchConfig::branch_and_bound_with_extended_set(),
    )
}

pub fn a_star<N, C>(graph: &Graph<N, C>, start: &N, goal: &N) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    search(graph, start, goal, &SearchConfig::a_star())
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::algorithms::Strategy;
    use crate::graph::tests::diamond;
    use crate::path::extend;
    use crate::path::has_loops;
    use crate::search::GenericSearch;

    const NUM_INSTANCES: u64 = 64;
    const NUM_NODES: u32 = 7;

    type Edges = Vec<(u32, u32, u32)>;

    fn random_edges(rng: &mut ChaCha8Rng) -> Edges {
        let mut edges = vec![];
        for a in 0..NUM_NODES {
            for b in (a + 1)..NUM_NODES {
                if rng.random_bool(0.4) {
                    edges.push((a, b, rng.random_range(1..10u32)));
                }
            }
        }
        edges
    }

    fn build(edges: &Edges) -> Graph<u32, u32> {
        let mut builder = Graph::builder();
        for n in 0..NUM_NODES {
            builder.insert_node(n);
        }
        for &(a, b, l) in edges {
            builder.insert_edge(a, b, l).unwrap();
        }
        builder.build()
    }

    /// Adds `h(n) = d(n)/2` towards `goal`, where `d` is the true distance.
    fn with_halved_heuristic(edges: &Edges, goal: u32) -> Graph<u32, u32> {
        let plain = build(edges);
        let mut builder = Graph::builder();
        for n in 0..NUM_NODES {
            builder.insert_node(n);
            let d = branch_and_bound_with_extended_set(&plain, &n, &goal)
                .unwrap()
                .map_or(0, |p| p.cost());
            builder.insert_heuristic(goal, n, d / 2).unwrap();
        }
        for &(a, b, l) in edges {
            builder.insert_edge(a, b, l).unwrap();
        }
        builder.build()
    }

    /// Cheapest cost and fewest edges over every loop-free path.
    fn brute_force(g: &Graph<u32, u32>, start: u32, goal: u32) -> Option<(u32, usize)> {
        let mut best: Option<(u32, usize)> = None;
        let mut stack = vec![Path::new_from_start(start)];
        while let Some(p) = stack.pop() {
            if *p.end() == goal {
                best = Some(match best {
                    None => (p.cost(), p.len()),
                    Some((c, l)) => (c.min(p.cost()), l.min(p.len())),
                });
                continue;
            }
            stack.extend(extend(g, &p).unwrap());
        }
        best
    }

    fn strategies() -> Vec<Strategy> {
        let mut strategies = Strategy::PRESETS.to_vec();
        strategies.push(Strategy::Beam(NonZeroUsize::new(2).unwrap()));
        strategies
    }

    #[test]
    fn diamond_scenario() {
        let g = diamond();
        let dfs = dfs(&g, &"S", &"G").unwrap().unwrap();
        assert!(!has_loops(dfs.nodes()));
        assert!(dfs.nodes() == ["S", "A", "G"] || dfs.nodes() == ["S", "B", "G"]);

        let bfs = bfs(&g, &"S", &"G").unwrap().unwrap();
        assert_eq!(bfs.nodes(), &["S", "A", "G"]);
        assert_eq!(bfs.len(), 2);

        let bab = branch_and_bound(&g, &"S", &"G").unwrap().unwrap();
        assert_eq!(bab.nodes(), &["S", "A", "G"]);
        assert_eq!(bab.cost(), 2);

        let a_star = a_star(&g, &"S", &"G").unwrap().unwrap();
        assert_eq!(a_star.nodes(), &["S", "A", "G"]);
        assert_eq!(a_star.cost(), 2);

        for path in [
            hill_climbing(&g, &"S", &"G"),
            best_first(&g, &"S", &"G"),
            branch_and_bound_with_heuristic(&g, &"S", &"G"),
            branch_and_bound_with_extended_set(&g, &"S", &"G"),
            beam(&g, &"S", &"G", NonZeroUsize::new(2).unwrap()),
        ] {
            assert_eq!(path.unwrap().unwrap().nodes(), &["S", "A", "G"]);
        }
    }

    #[test]
    fn every_strategy_returns_loop_free_paths() {
        for instance in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            let edges = random_edges(&mut rng);
            let goal = NUM_NODES - 1;
            let g = with_halved_heuristic(&edges, goal);
            let reachable = brute_force(&g, 0, goal).is_some();

            for strategy in strategies() {
                let found = search(&g, &0, &goal, &strategy.config()).unwrap();
                match found {
                    Some(p) => {
                        assert!(!has_loops(p.nodes()), "{strategy} on {instance}: {p}");
                        assert_eq!(p.start(), &0);
                        assert_eq!(p.end(), &goal);
                        assert_eq!(Ok(p.cost()), g.path_length(p.nodes()));
                    }
                    None => {
                        // Only a beam may drop every way to a reachable goal.
                        assert!(
                            !reachable || matches!(strategy, Strategy::Beam(_)),
                            "{strategy} missed the goal on {instance}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_finds_fewest_edges() {
        for instance in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            let g = build(&random_edges(&mut rng));
            let expected = brute_force(&g, 0, NUM_NODES - 1).map(|(_, edges)| edges);
            let found = bfs(&g, &0, &(NUM_NODES - 1)).unwrap().map(|p| p.len());
            assert_eq!(found, expected, "Instance {instance}");
        }
    }

    #[test]
    fn optimal_strategies_find_shortest_paths() {
        for instance in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            let goal = NUM_NODES - 1;
            let g = with_halved_heuristic(&random_edges(&mut rng), goal);
            let expected = brute_force(&g, 0, goal).map(|(cost, _)| cost);

            for strategy in Strategy::PRESETS.iter().filter(|s| s.is_optimal()) {
                let found = search(&g, &0, &goal, &strategy.config())
                    .unwrap()
                    .map(|p| p.cost());
                assert_eq!(found, expected, "{strategy} on instance {instance}");
            }
        }
    }

    #[test]
    fn a_star_extends_each_node_once() {
        for instance in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            let goal = NUM_NODES - 1;
            let g = with_halved_heuristic(&random_edges(&mut rng), goal);

            let mut search = GenericSearch::new(&g, 0, goal, SearchConfig::a_star()).unwrap();
            search.run().unwrap();
            assert!(search.stats().expanded <= g.node_count());
        }
    }

    #[test]
    fn repeated_searches_agree() {
        for instance in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            let goal = NUM_NODES - 1;
            // Unit lengths make for plenty of ties.
            let edges: Edges = random_edges(&mut rng)
                .into_iter()
                .map(|(a, b, _)| (a, b, 1))
                .collect();
            let g = with_halved_heuristic(&edges, goal);

            for strategy in strategies() {
                let config = strategy.config();
                let first = search(&g, &0, &goal, &config).unwrap();
                let second = search(&g, &0, &goal, &config).unwrap();
                assert_eq!(first, second, "{strategy} on instance {instance}");
            }
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::AStar.to_string(), "A*");
        assert_eq!(
            Strategy::Beam(NonZeroUsize::new(3).unwrap()).to_string(),
            "Beam(3)"
        );
        assert!(Strategy::AStar.uses_heuristic());
        assert!(!Strategy::BranchAndBound.uses_heuristic());
        assert!(!Strategy::DepthFirst.is_optimal());
    }
}
