//! The agenda of paths waiting to be expanded.

use std::collections::VecDeque;

use derive_more::Display;

use crate::cost::Cost;
use crate::graph::Node;
use crate::path::Path;

/// Where a freshly generated batch of paths lands relative to older ones.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Discipline {
    /// Older paths leave first (breadth-first).
    #[display("FIFO")]
    Fifo,
    /// Newer paths leave first (depth-first).
    #[display("LIFO")]
    Lifo,
}

impl Discipline {
    #[inline(always)]
    pub fn from_dequeue_from_front(dequeue_from_front: bool) -> Self {
        if dequeue_from_front {
            Discipline::Fifo
        } else {
            Discipline::Lifo
        }
    }
}

/// An ordered collection of candidate paths.
///
/// The deque is always kept in dequeue order: its front is the next path to
/// leave under either discipline, which keeps re-sorting and beam truncation
/// independent of the discipline.
#[derive(Clone, Debug)]
pub struct Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    paths: VecDeque<Path<N, C>>,
    discipline: Discipline,
}

impl<N, C> Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        Self {
            paths: VecDeque::new(),
            discipline,
        }
    }

    #[inline(always)]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in the order they would be dequeued.
    pub fn iter(&self) -> impl Iterator<Item = &Path<N, C>> {
        self.paths.iter()
    }

    #[inline(always)]
    #[must_use]
    pub fn pop(&mut self) -> Option<Path<N, C>> {
        self.paths.pop_front()
    }

    /// Merges a batch of new paths, keeping the batch's own order.
    ///
    /// - FIFO: the batch queues up behind every existing path.
    /// - LIFO: the batch is stacked on top, its first path leaves next.
    pub fn merge(&mut self, batch: Vec<Path<N, C>>) {
        match self.discipline {
            Discipline::Fifo => self.paths.extend(batch),
            Discipline::Lifo => {
                for path in batch.into_iter().rev() {
                    self.paths.push_front(path);
                }
            }
        }
    }

    /// Replaces the whole agenda by `reorder(agenda)`.
    ///
    /// `reorder` receives and returns paths in dequeue order. On error the
    /// frontier is left empty.
    pub fn try_reorder<E, F>(&mut self, reorder: F) -> Result<(), E>
    where
        F: FnOnce(Vec<Path<N, C>>) -> Result<Vec<Path<N, C>>, E>,
    {
        let paths: Vec<Path<N, C>> = std::mem::take(&mut self.paths).into();
        self.paths = reorder(paths)?.into();
        Ok(())
    }

    /// Keeps only the first `width` paths to be dequeued.
    pub fn truncate(&mut self, width: usize) {
        self.paths.truncate(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(nodes: &[&'static str]) -> Path<&'static str, u32> {
        let mut p = Path::new_from_start(nodes[0]);
        for n in &nodes[1..] {
            p = p.step(*n, 1);
        }
        p
    }

    fn ends(f: &Frontier<&'static str, u32>) -> Vec<&'static str> {
        f.iter().map(|p| *p.end()).collect()
    }

    #[test]
    fn fifo_queues_batches() {
        let mut f = Frontier::new(Discipline::from_dequeue_from_front(true));
        assert_eq!(f.discipline(), Discipline::Fifo);
        f.merge(vec![path(&["S", "A"]), path(&["S", "B"])]);
        f.merge(vec![path(&["S", "C"]), path(&["S", "D"])]);
        assert_eq!(ends(&f), vec!["A", "B", "C", "D"]);
        assert_eq!(f.pop().map(|p| *p.end()), Some("A"));
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn lifo_stacks_batches() {
        let mut f = Frontier::new(Discipline::from_dequeue_from_front(false));
        assert_eq!(f.discipline(), Discipline::Lifo);
        f.merge(vec![path(&["S", "A"]), path(&["S", "B"])]);
        f.merge(vec![path(&["S", "C"]), path(&["S", "D"])]);
        assert_eq!(ends(&f), vec!["C", "D", "A", "B"]);
        assert_eq!(f.pop().map(|p| *p.end()), Some("C"));
    }

    #[test]
    fn reorder_and_truncate() {
        let mut f = Frontier::new(Discipline::Fifo);
        f.merge(vec![path(&["S", "A"]), path(&["S", "B"]), path(&["S", "C"])]);
        f.try_reorder::<(), _>(|mut paths| {
            paths.reverse();
            Ok(paths)
        })
        .unwrap();
        assert_eq!(ends(&f), vec!["C", "B", "A"]);

        f.truncate(2);
        assert_eq!(ends(&f), vec!["C", "B"]);

        assert_eq!(f.try_reorder(|_| Err("nope")), Err("nope"));
        assert!(f.is_empty());
        assert!(f.pop().is_none());
    }
}
