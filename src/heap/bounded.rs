//! Capacity-bounded top-k collector.

use super::binary::{Heap, HeapOrder, Reversed};
use std::cmp::Ordering;

/// Keeps the `capacity` best elements seen so far.
///
/// `better(a, b)` means "`a` ranks strictly ahead of `b`". Internally the
/// heap is arranged by the reversed ordering so the worst retained
/// element sits at the front and can be evicted in O(log k).
///
/// Elements tied under `better` are retained and ordered arbitrarily:
/// which of several tied candidates survives at the capacity boundary,
/// and their relative order in [`into_sorted_vec`](Self::into_sorted_vec),
/// follow heap structure rather than arrival order.
///
/// # Examples
///
/// ```
/// use u_skyline::heap::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(3, |a: &i32, b: &i32| a < b);
/// queue.extend([9, 2, 7, 4, 1, 8]);
/// assert_eq!(queue.into_sorted_vec(), vec![1, 2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, O> {
    capacity: usize,
    heap: Heap<T, Reversed<O>>,
}

impl<T, O: HeapOrder<T>> BoundedQueue<T, O> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn new(capacity: usize, better: O) -> Self {
        Self {
            capacity,
            heap: Heap::new(Reversed(better)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The worst element currently retained.
    pub fn worst(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns `true` if `candidate` would be retained by [`offer`](Self::offer).
    pub fn can_insert(&self, candidate: &T) -> bool {
        if self.heap.len() < self.capacity {
            return true;
        }
        match self.heap.peek() {
            Some(worst) => self.heap.order().0.before(candidate, worst),
            None => false,
        }
    }

    /// Offers a candidate. Returns `true` if it was retained.
    ///
    /// Below capacity every candidate is kept. At capacity a candidate is
    /// kept only if strictly better than the current worst, which is
    /// then evicted.
    pub fn offer(&mut self, candidate: T) -> bool {
        if !self.can_insert(&candidate) {
            return false;
        }
        self.heap.push(candidate);
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
        true
    }

    /// Retained elements in heap storage order.
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Consumes the queue, returning retained elements best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let (mut elements, Reversed(better)) = self.heap.into_parts();
        elements.sort_by(|a, b| {
            if better.before(a, b) {
                Ordering::Less
            } else if better.before(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        elements
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BoundedQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}
