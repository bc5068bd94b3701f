use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-ordered search frontier over `(cost, vertex)` entries
///
/// Entries are never decreased in place: an improved cost is pushed as a new
/// entry and the older one goes stale. Callers detect stale entries on pop by
/// comparing against their own best-cost table.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Total entries ever pushed, stale ones included
    pushed: usize,
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Number of pushes since creation
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Queues a vertex at the given cost
    pub fn push(&mut self, vertex: V, cost: P) {
        self.pushed += 1;
        self.heap.push(Reverse((cost, vertex)));
    }

    /// Removes the cheapest entry
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((cost, vertex))| (vertex, cost))
    }
}
