//! Binary min-heap frontier used by the cost-ordered searches.

use crate::PathError;

/// A frontier entry: a vertex name and the priority it was pushed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub name: String,
    pub cost: u32,
}

impl QueueEntry {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// Min-heap over [`QueueEntry::cost`].
///
/// Entries with equal cost come out in an unspecified order. The same name
/// may be queued several times; searches discard stale copies when they pop
/// a vertex that is already settled instead of decreasing keys in place.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: Vec<QueueEntry>,
}

const TOP: usize = 0;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The minimum-cost entry, without removing it.
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.first()
    }

    /// Insert one entry.
    pub fn push(&mut self, entry: QueueEntry) {
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the minimum-cost entry.
    pub fn pop(&mut self) -> Result<QueueEntry, PathError> {
        let bottom = self.heap.len().checked_sub(1).ok_or(PathError::EmptyQueue)?;
        self.heap.swap(TOP, bottom);
        let popped = self.heap.pop().ok_or(PathError::EmptyQueue)?;
        self.sift_down(TOP);
        Ok(popped)
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > TOP && self.heap[node].cost < self.heap[parent(node)].cost {
            self.heap.swap(node, parent(node));
            node = parent(node);
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let (l, r) = (left(node), right(node));
            if l >= len {
                break;
            }
            // Pick the smaller child first, then compare it with the parent.
            let child = if r < len && self.heap[r].cost < self.heap[l].cost {
                r
            } else {
                l
            };
            if self.heap[child].cost >= self.heap[node].cost {
                break;
            }
            self.heap.swap(node, child);
            node = child;
        }
    }
}

impl Extend<QueueEntry> for PriorityQueue {
    fn extend<I: IntoIterator<Item = QueueEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<QueueEntry> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = QueueEntry>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
