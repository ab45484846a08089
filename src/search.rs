//! The generic search engine.
//!
//! Every strategy in [crate::algorithms] runs through [GenericSearch]. They
//! only differ in their [SearchConfig].

use std::cmp::max;
use std::num::NonZeroUsize;

use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;
use crate::frontier::Discipline;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::graph::Node;
use crate::path::Path;
use crate::path::extend;
use crate::ranking::Ranking;

/// The knobs that turn the generic search into a concrete strategy.
#[derive(Clone, Debug)]
pub struct SearchConfig<N, C>
where
    N: Node,
    C: Cost,
{
    /// Re-orders each freshly extended batch before it's merged.
    pub new_paths_sort: Option<Ranking<N, C>>,
    /// `true` dequeues the oldest paths first (FIFO), `false` the newest (LIFO).
    pub dequeue_from_front: bool,
    /// Re-orders the whole agenda after every merge.
    pub agenda_sort: Option<Ranking<N, C>>,
    /// Never expand the same end node twice.
    pub use_extended_set: bool,
    /// Keeps only this many paths after sorting the agenda.
    pub beam_width: Option<NonZeroUsize>,
}

impl<N, C> SearchConfig<N, C>
where
    N: Node,
    C: Cost,
{
    pub fn depth_first() -> Self {
        Self {
            new_paths_sort: None,
            dequeue_from_front: false,
            agenda_sort: None,
            use_extended_set: false,
            beam_width: None,
        }
    }

    pub fn breadth_first() -> Self {
        Self {
            dequeue_from_front: true,
            ..Self::depth_first()
        }
    }

    /// Depth-first, trying the successor closest to the goal first.
    pub fn hill_climbing() -> Self {
        Self {
            new_paths_sort: Some(Ranking::Heuristic),
            ..Self::depth_first()
        }
    }

    /// Greedy best-first, always expanding the path closest to the goal.
    pub fn best_first() -> Self {
        Self::breadth_first().with_agenda_sort(Ranking::Heuristic)
    }

    pub fn branch_and_bound() -> Self {
        Self::breadth_first().with_agenda_sort(Ranking::PathCost)
    }

    pub fn branch_and_bound_with_heuristic() -> Self {
        Self::breadth_first().with_agenda_sort(Ranking::CostPlusHeuristic)
    }

    pub fn branch_and_bound_with_extended_set() -> Self {
        Self::branch_and_bound().with_extended_set(true)
    }

    pub fn a_star() -> Self {
        Self::branch_and_bound_with_heuristic().with_extended_set(true)
    }

    /// Best-first keeping only the `width` paths closest to the goal.
    pub fn beam(width: NonZeroUsize) -> Self {
        Self::best_first().with_beam_width(width)
    }

    #[must_use]
    pub fn with_new_paths_sort(mut self, ranking: Ranking<N, C>) -> Self {
        self.new_paths_sort = Some(ranking);
        self
    }

    #[must_use]
    pub fn with_dequeue_from_front(mut self, dequeue_from_front: bool) -> Self {
        self.dequeue_from_front = dequeue_from_front;
        self
    }

    #[must_use]
    pub fn with_agenda_sort(mut self, ranking: Ranking<N, C>) -> Self {
        self.agenda_sort = Some(ranking);
        self
    }

    #[must_use]
    pub fn with_extended_set(mut self, use_extended_set: bool) -> Self {
        self.use_extended_set = use_extended_set;
        self
    }

    #[must_use]
    pub fn with_beam_width(mut self, width: NonZeroUsize) -> Self {
        self.beam_width = Some(width);
        self
    }
}

/// Counters kept while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths that were extended.
    pub expanded: usize,
    /// Extensions that made it into the agenda.
    pub generated: usize,
    /// Paths dropped because their end node was already extended.
    pub pruned: usize,
    /// Largest agenda seen.
    pub max_frontier: usize,
}

/// The outcome of a single iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep<N, C>
where
    N: Node,
    C: Cost,
{
    /// The dequeued path reaches the goal.
    Found(Path<N, C>),
    /// The dequeued path was extended into `extensions` new paths.
    Expanded { extensions: usize },
    /// The dequeued path ended in an already extended node.
    Pruned,
    /// Nothing left to explore.
    Exhausted,
}

#[derive(Debug)]
pub struct GenericSearch<'g, N, C>
where
    N: Node,
    C: Cost,
{
    graph: &'g Graph<N, C>,
    goal: N,
    config: SearchConfig<N, C>,

    /// Paths waiting to be dequeued.
    frontier: Frontier<N, C>,

    /// End nodes of every path extended so far. Only grown when
    /// `config.use_extended_set` is on.
    extended: FxHashSet<N>,

    stats: SearchStats,
}

impl<'g, N, C> GenericSearch<'g, N, C>
where
    N: Node,
    C: Cost,
{
    /// Prepares a search from `start` to `goal`. Both must be in `graph`.
    pub fn new(
        graph: &'g Graph<N, C>,
        start: N,
        goal: N,
        config: SearchConfig<N, C>,
    ) -> Result<Self, N> {
        for node in [&start, &goal] {
            if !graph.contains(node) {
                return Err(SearchError::NodeNotFound(node.clone()));
            }
        }

        let mut frontier = Frontier::new(Discipline::from_dequeue_from_front(
            config.dequeue_from_front,
        ));
        frontier.merge(vec![Path::new_from_start(start)]);

        Ok(Self {
            graph,
            goal,
            config,
            frontier,
            extended: FxHashSet::default(),
            stats: SearchStats {
                max_frontier: 1,
                ..SearchStats::default()
            },
        })
    }

    #[inline(always)]
    pub fn goal(&self) -> &N {
        &self.goal
    }

    #[inline(always)]
    pub fn config(&self) -> &SearchConfig<N, C> {
        &self.config
    }

    #[inline(always)]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether a path ending at `node` has been extended.
    ///
    /// Always false when the extended set is disabled.
    #[inline(always)]
    pub fn is_extended(&self, node: &N) -> bool {
        self.extended.contains(node)
    }

    #[cfg(feature = "inspect")]
    pub fn frontier(&self) -> &Frontier<N, C> {
        &self.frontier
    }

    /// Runs one iteration: dequeue, goal-check, extend and merge.
    pub fn step(&mut self) -> Result<SearchStep<N, C>, N> {
        let Some(path) = self.frontier.pop() else {
            log::debug!(
                "Exhausted the agenda looking for {} ({:?})",
                self.goal,
                self.stats
            );
            return Ok(SearchStep::Exhausted);
        };

        if self.config.use_extended_set {
            if self.extended.contains(path.end()) {
                log::trace!("Skipping {path}, {} was already extended", path.end());
                self.stats.pruned += 1;
                return Ok(SearchStep::Pruned);
            }
            self.extended.insert(path.end().clone());
        }

        if *path.end() == self.goal {
            log::debug!("Found {path} ({:?})", self.stats);
            return Ok(SearchStep::Found(path));
        }

        log::trace!("Extending {path} (agenda: {})", self.frontier.len());
        self.stats.expanded += 1;
        let mut batch = extend(self.graph, &path)?;

        if self.config.use_extended_set {
            let generated = batch.len();
            batch.retain(|p| !self.extended.contains(p.end()));
            self.stats.pruned += generated - batch.len();
        }

        if let Some(ranking) = self.config.new_paths_sort {
            batch = ranking.sort(self.graph, &self.goal, batch)?;
        }

        self.verify_batch(&batch);
        let extensions = batch.len();
        self.stats.generated += extensions;
        self.frontier.merge(batch);

        if let Some(ranking) = self.config.agenda_sort {
            let graph = self.graph;
            let goal = &self.goal;
            self.frontier
                .try_reorder(|paths| ranking.sort(graph, goal, paths))?;
        }
        if let Some(width) = self.config.beam_width {
            self.frontier.truncate(width.get());
        }

        self.stats.max_frontier = max(self.stats.max_frontier, self.frontier.len());
        self.verify_frontier();

        Ok(SearchStep::Expanded { extensions })
    }

    /// Steps until the goal is found or the agenda runs dry.
    pub fn run(&mut self) -> Result<Option<Path<N, C>>, N> {
        loop {
            match self.step()? {
                SearchStep::Found(path) => return Ok(Some(path)),
                SearchStep::Exhausted => return Ok(None),
                SearchStep::Expanded { .. } | SearchStep::Pruned => {}
            }
        }
    }

    #[inline(always)]
    #[cfg(not(any(test, feature = "verify")))]
    pub(crate) fn verify_frontier(&self) {
        // All good... (hopefully)
    }
    #[inline(always)]
    #[cfg(any(test, feature = "verify"))]
    pub(crate) fn verify_frontier(&self) {
        // Every path,
        for p in self.frontier.iter() {
            // - Is loop-free.
            debug_assert!(!crate::path::has_loops(p.nodes()), "{p} has loops");
            // - Carries the length of its edges.
            debug_assert_eq!(Ok(p.cost()), self.graph.path_length(p.nodes()));
        }
        // Older paths may still end in extended nodes, they are dropped once
        // dequeued.
    }

    #[inline(always)]
    #[cfg(not(any(test, feature = "verify")))]
    pub(crate) fn verify_batch(&self, _batch: &[Path<N, C>]) {}
    #[inline(always)]
    #[cfg(any(test, feature = "verify"))]
    pub(crate) fn verify_batch(&self, batch: &[Path<N, C>]) {
        if !self.config.use_extended_set {
            return;
        }
        for p in batch {
            debug_assert!(
                !self.extended.contains(p.end()),
                "{p} was generated into an extended node"
            );
        }
    }

    pub fn write_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "GenericSearch Stats:")?;
        writeln!(
            out,
            "  - Expanded:  {}",
            self.stats.expanded.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Generated: {}",
            self.stats.generated.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Pruned:    {}",
            self.stats.pruned.separate_with_commas()
        )?;

        let s = size_of::<Path<N, C>>();
        let l = self.stats.max_frontier;
        writeln!(
            out,
            "  - |Agenda|*: {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        let l = self.extended.len();
        writeln!(out, "  - |Extended|: {}", l.separate_with_commas())?;

        Ok(())
    }
}

/// Searches `graph` from `start` to `goal` with the strategy in `config`.
///
/// `Ok(None)` means the goal can't be reached from `start`.
pub fn search<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
    config: &SearchConfig<N, C>,
) -> Result<Option<Path<N, C>>, N>
where
    N: Node,
    C: Cost,
{
    GenericSearch::new(graph, start.clone(), goal.clone(), config.clone())?.run()
}
