#![no_main]

use libfuzzer_sys::fuzz_target;

use graph_search::Graph;
use graph_search::algorithms::Strategy;
use graph_search::path::has_loops;
use graph_search::search;

const NODES: u8 = 8;

// Bytes come in triples `(a, b, length)` over 8 nodes. The first triple
// picks start and goal instead.
fuzz_target!(|data: &[u8]| {
    let mut triples = data.chunks_exact(3);
    let Some(&[start, goal, _]) = triples.next() else {
        return;
    };
    let (start, goal) = (start % NODES, goal % NODES);

    let mut builder = Graph::builder();
    builder.insert_node(start);
    builder.insert_node(goal);
    for t in triples {
        let (a, b) = (t[0] % NODES, t[1] % NODES);
        if a == b {
            continue;
        }
        builder.insert_edge(a, b, u32::from(t[2])).unwrap();
        builder.insert_heuristic(goal, a, 0).unwrap();
        builder.insert_heuristic(goal, b, 0).unwrap();
    }
    builder.insert_heuristic(goal, start, 0).unwrap();
    builder.insert_heuristic(goal, goal, 0).unwrap();
    let graph = builder.build();

    let optimal = search(&graph, &start, &goal, &Strategy::BranchAndBound.config())
        .unwrap()
        .map(|p| p.cost());
    for strategy in Strategy::PRESETS {
        let found = search(&graph, &start, &goal, &strategy.config()).unwrap();
        assert_eq!(found.is_some(), optimal.is_some(), "{strategy}");
        if let Some(path) = found {
            assert!(!has_loops(path.nodes()), "{strategy}: {path}");
            assert_eq!(Ok(path.cost()), graph.path_length(path.nodes()));
            if strategy.is_optimal() {
                assert_eq!(Some(path.cost()), optimal, "{strategy}");
            }
        }
    }
});
