//! Binary heap parameterized by an injected ordering.

/// Strict ordering used to arrange a [`Heap`].
///
/// `before(a, b)` returns `true` when `a` must sit closer to the front
/// than `b`. Implemented for every `Fn(&T, &T) -> bool` closure.
pub trait HeapOrder<T> {
    /// Strict predicate: `a` goes nearer the front than `b`.
    fn before(&self, a: &T, b: &T) -> bool;
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Inverts an ordering: `Reversed(o).before(a, b) == o.before(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<O>(pub O);

impl<T, O: HeapOrder<T>> HeapOrder<T> for Reversed<O> {
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        self.0.before(b, a)
    }
}

/// Array-backed binary heap.
///
/// The element for which no other element is `before` it sits at the
/// front and is returned by [`peek`](Heap::peek) and [`pop`](Heap::pop).
/// Elements that compare equal under the ordering have no defined
/// relative order.
///
/// # Examples
///
/// ```
/// use u_skyline::heap::Heap;
///
/// let mut heap: Heap<i32, _> = Heap::new(|a: &i32, b: &i32| a < b);
/// for x in [5, 1, 4, 2] {
///     heap.push(x);
/// }
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Heap<T, O> {
    elements: Vec<T>,
    order: O,
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    /// Creates an empty heap.
    pub fn new(order: O) -> Self {
        Self {
            elements: Vec::new(),
            order,
        }
    }

    /// Builds a heap from arbitrary elements in O(n).
    pub fn from_vec(elements: Vec<T>, order: O) -> Self {
        let mut heap = Self { elements, order };
        let n = heap.elements.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i, n);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Inserts an element in O(log n).
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        let last = self.elements.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the front element in O(log n).
    pub fn pop(&mut self) -> Option<T> {
        let n = self.elements.len();
        if n == 0 {
            return None;
        }
        self.elements.swap(0, n - 1);
        let front = self.elements.pop();
        let n = self.elements.len();
        self.sift_down(0, n);
        front
    }

    /// Removes the element stored at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let n = self.elements.len();
        if index >= n {
            return None;
        }
        let last = n - 1;
        if index != last {
            self.elements.swap(index, last);
            self.sift_down(index, last);
            self.sift_up(index);
        }
        self.elements.pop()
    }

    /// Replaces the element at `index` and restores the heap.
    ///
    /// Returns the old element, or `None` if `index` is out of range.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.elements.len() {
            return None;
        }
        let old = std::mem::replace(&mut self.elements[index], value);
        let n = self.elements.len();
        self.sift_down(index, n);
        self.sift_up(index);
        Some(old)
    }

    /// Storage order of the elements. Only the front is guaranteed.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the ordering.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Consumes the heap, returning elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Consumes the heap, returning elements and ordering.
    pub fn into_parts(self) -> (Vec<T>, O) {
        (self.elements, self.order)
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self
                .order
                .before(&self.elements[child], &self.elements[parent])
            {
                break;
            }
            self.elements.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize, heap_size: usize) {
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;

            let mut first = parent;
            if left < heap_size
                && self
                    .order
                    .before(&self.elements[left], &self.elements[first])
            {
                first = left;
            }
            if right < heap_size
                && self
                    .order
                    .before(&self.elements[right], &self.elements[first])
            {
                first = right;
            }
            if first == parent {
                return;
            }
            self.elements.swap(parent, first);
            parent = first;
        }
    }
}

impl<T: PartialEq, O: HeapOrder<T>> Heap<T, O> {
    /// Storage index of an element equal to `item`, by linear search.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == item)
    }

    /// Returns `true` if an element equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }
}
