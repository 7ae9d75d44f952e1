//! Generic binary heaps with a static min/max ordering policy.
//!
//! [`Heap`] is a complete binary tree stored in a `Vec` (0-indexed; the
//! children of slot `i` are `2i + 1` and `2i + 2`). The ordering policy is a
//! zero-sized type parameter, so [`MinHeap`] and [`MaxHeap`] share one
//! implementation with no dynamic dispatch.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Ordering policy for a [`Heap`].
///
/// Implemented by the zero-sized [`Min`] and [`Max`] markers.
pub trait HeapOrder {
    /// Whether `a` must sit at or above `b` in the heap.
    fn sorts_before<T: Ord>(a: &T, b: &T) -> bool;
}

/// Min ordering: the smallest element is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

/// Max ordering: the largest element is at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl HeapOrder for Min {
    fn sorts_before<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl HeapOrder for Max {
    fn sorts_before<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// A heap whose root is the minimum element.
pub type MinHeap<T> = Heap<T, Min>;

/// A heap whose root is the maximum element.
pub type MaxHeap<T> = Heap<T, Max>;

/// Error type for heap operations.
///
/// An empty heap signals [`HeapError::Empty`] from `peek` and `pop` instead of
/// returning a sentinel value; for most element types no sentinel is
/// distinguishable from real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// `peek` or `pop` was called on an empty heap.
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A binary heap over `T`, ordered by the policy `O`.
///
/// `push` and `pop` are O(log n), `peek` is O(1). Elements are owned by value.
#[derive(Debug, Clone)]
pub struct Heap<T, O: HeapOrder = Min> {
    elements: Vec<T>,
    order: PhantomData<O>,
}

impl<T: Ord, O: HeapOrder> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, O: HeapOrder> Heap<T, O> {
    /// Create an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            order: PhantomData,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Build a heap from an unordered collection of elements.
    ///
    /// Sorts the input by the heap's own order and adopts the sorted array,
    /// which trivially satisfies the heap invariant (every parent index
    /// precedes its children). O(n log n); the classic bottom-up construction
    /// would be O(n), but nothing in this crate is sensitive to the
    /// difference and the sort keeps the construction obviously correct.
    #[must_use]
    pub fn heapify(mut elements: Vec<T>) -> Self {
        elements.sort_unstable_by(|a, b| {
            if O::sorts_before(a, b) {
                Ordering::Less
            } else if O::sorts_before(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Self {
            elements,
            order: PhantomData,
        }
    }

    /// Number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The root element (minimum for [`Min`], maximum for [`Max`]).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::Empty)
    }

    /// Insert an element, then sift it up until the order invariant holds.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the root element.
    ///
    /// Swaps the root with the last element, shrinks the array, then sifts the
    /// new root down, at each level descending into the child that would most
    /// violate the order invariant.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop().ok_or(HeapError::Empty)?;
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// O(n) validation that every parent/child pair satisfies the order
    /// invariant. Intended for tests and debugging, not the hot path.
    #[must_use]
    pub fn check(&self) -> bool {
        (1..self.elements.len())
            .all(|i| !O::sorts_before(&self.elements[i], &self.elements[(i - 1) / 2]))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if O::sorts_before(&self.elements[i], &self.elements[parent]) {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && O::sorts_before(&self.elements[right], &self.elements[left]) {
                child = right;
            }
            if O::sorts_before(&self.elements[child], &self.elements[i]) {
                self.elements.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord, O: HeapOrder> From<Vec<T>> for Heap<T, O> {
    fn from(elements: Vec<T>) -> Self {
        Self::heapify(elements)
    }
}
