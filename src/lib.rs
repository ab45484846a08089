//! Generic search over weighted undirected graphs.
//!
//! A single engine, [search::GenericSearch], is tuned by four knobs in a
//! [search::SearchConfig]: how new paths are sorted, which end of the agenda
//! is dequeued, how the whole agenda is sorted, and whether nodes are only
//! extended once. Every classic strategy is one setting of those knobs, see
//! [algorithms::Strategy].

// Graphs and paths
// ----------------
pub mod cost;
pub mod error;
pub mod float_cost;
pub mod graph;
pub mod path;

// Search
// ------
pub mod frontier;
pub mod ranking;
pub mod search;

// Strategies and checks
// ---------------------
pub mod algorithms;
pub mod heuristic;

pub use cost::Cost;
pub use error::SearchError;
pub use graph::Graph;
pub use graph::GraphBuilder;
pub use graph::Node;
pub use path::Path;
pub use search::SearchConfig;
pub use search::search;
