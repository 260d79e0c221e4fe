//! Index-addressable binary min-heap.
//!
//! A binary min-heap over externally numbered slots `0..capacity`. A
//! reverse-lookup table maps each slot to its current heap position, so
//! membership queries and value updates are O(1) to locate and O(log n)
//! to re-heapify. This is what turns Prim from O(E log E) into
//! O(E log V) and gives Dijkstra its O(E log V) bound: both repeatedly
//! ask "is there already a candidate for vertex v, and is mine better?"

use thiserror::Error;

/// Errors raised by [`IndexedMinHeap`] operations.
///
/// All of these signal caller misuse and are surfaced synchronously at
/// the offending call.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum HeapError {
    /// A slot index fell outside `0..capacity`.
    #[error("slot {slot} is out of bounds, capacity is {capacity}")]
    SlotOutOfBounds {
        /// The offending slot index.
        slot: usize,
        /// The heap's fixed capacity.
        capacity: usize,
    },
    /// An insert targeted a slot that already holds a value.
    #[error("slot {slot} is already occupied")]
    SlotOccupied {
        /// The occupied slot.
        slot: usize,
    },
    /// An update targeted a slot with no value.
    #[error("slot {slot} is vacant")]
    SlotVacant {
        /// The vacant slot.
        slot: usize,
    },
    /// An extraction was attempted on an empty heap.
    #[error("cannot extract from an empty heap")]
    Empty,
}

impl HeapError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HeapErrorCode {
        match self {
            Self::SlotOutOfBounds { .. } => HeapErrorCode::SlotOutOfBounds,
            Self::SlotOccupied { .. } => HeapErrorCode::SlotOccupied,
            Self::SlotVacant { .. } => HeapErrorCode::SlotVacant,
            Self::Empty => HeapErrorCode::Empty,
        }
    }
}

/// Machine-readable error codes for [`HeapError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeapErrorCode {
    /// A slot index fell outside the heap's capacity.
    SlotOutOfBounds,
    /// An insert targeted an occupied slot.
    SlotOccupied,
    /// An update targeted a vacant slot.
    SlotVacant,
    /// An extraction was attempted on an empty heap.
    Empty,
}

impl HeapErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlotOutOfBounds => "HEAP_SLOT_OUT_OF_BOUNDS",
            Self::SlotOccupied => "HEAP_SLOT_OCCUPIED",
            Self::SlotVacant => "HEAP_SLOT_VACANT",
            Self::Empty => "HEAP_EMPTY",
        }
    }
}

/// A binary min-heap whose entries are addressed by external slot ids.
///
/// Each slot in `0..capacity` is either vacant or holds exactly one
/// value. The heap-order property is maintained over occupied slots
/// only, and `positions[slot]` equals the index of `slot` within the
/// internal heap array exactly when the slot is occupied.
///
/// # Examples
/// ```
/// use spantree_core::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::with_capacity(4);
/// heap.insert(2, 30)?;
/// heap.insert(0, 10)?;
/// heap.insert(3, 20)?;
/// heap.update(2, 5)?;
/// assert_eq!(heap.extract_min()?, (2, 5));
/// assert_eq!(heap.extract_min()?, (0, 10));
/// assert_eq!(heap.value(3)?, Some(&20));
/// # Ok::<(), spantree_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<T> {
    /// Slot id to stored value.
    values: Vec<Option<T>>,
    /// Heap position to slot id.
    heap: Vec<usize>,
    /// Slot id to heap position; `None` marks a vacant slot.
    positions: Vec<Option<usize>>,
}

impl<T: Ord> IndexedMinHeap<T> {
    /// Creates an empty heap over slots `0..capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: (0..capacity).map(|_| None).collect(),
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Returns the fixed slot capacity.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.values.len() }

    /// Returns the number of occupied slots.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.heap.len() }

    /// Returns `true` when no slot is occupied.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    /// Reports whether `slot` currently holds a value, in O(1).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::SlotOutOfBounds`] when `slot` exceeds the
    /// capacity.
    pub fn contains(&self, slot: usize) -> Result<bool, HeapError> {
        self.check_slot(slot)?;
        Ok(self.positions[slot].is_some())
    }

    /// Returns the value held by `slot`, in O(1) and independent of the
    /// value's heap position. `None` marks a vacant slot.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::SlotOutOfBounds`] when `slot` exceeds the
    /// capacity.
    pub fn value(&self, slot: usize) -> Result<Option<&T>, HeapError> {
        self.check_slot(slot)?;
        Ok(self.values[slot].as_ref())
    }

    /// Places `value` into `slot` and sifts it up, in O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::SlotOutOfBounds`] for an out-of-range slot and
    /// [`HeapError::SlotOccupied`] when the slot already holds a value.
    pub fn insert(&mut self, slot: usize, value: T) -> Result<(), HeapError> {
        self.check_slot(slot)?;
        if self.positions[slot].is_some() {
            return Err(HeapError::SlotOccupied { slot });
        }
        let position = self.heap.len();
        self.values[slot] = Some(value);
        self.heap.push(slot);
        self.positions[slot] = Some(position);
        self.sift_up(position);
        Ok(())
    }

    /// Removes and returns the minimum value together with its slot, in
    /// O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] when no slot is occupied.
    pub fn extract_min(&mut self) -> Result<(usize, T), HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap_heap(0, last);
        let Some(slot) = self.heap.pop() else {
            return Err(HeapError::Empty);
        };
        self.positions[slot] = None;
        let Some(value) = self.values[slot].take() else {
            return Err(HeapError::SlotVacant { slot });
        };
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((slot, value))
    }

    /// Replaces the value held by `slot` and re-heapifies from its
    /// position, in O(log n). The entry is sifted up and then down; one
    /// of the two is always a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::SlotOutOfBounds`] for an out-of-range slot and
    /// [`HeapError::SlotVacant`] when the slot holds no value.
    pub fn update(&mut self, slot: usize, value: T) -> Result<(), HeapError> {
        self.check_slot(slot)?;
        let Some(position) = self.positions[slot] else {
            return Err(HeapError::SlotVacant { slot });
        };
        self.values[slot] = Some(value);
        self.sift_up(position);
        if let Some(position) = self.positions[slot] {
            self.sift_down(position);
        }
        Ok(())
    }

    fn check_slot(&self, slot: usize) -> Result<(), HeapError> {
        if slot >= self.values.len() {
            return Err(HeapError::SlotOutOfBounds {
                slot,
                capacity: self.values.len(),
            });
        }
        Ok(())
    }

    /// Compares the values at two heap positions.
    ///
    /// Positions in `self.heap` always reference occupied slots; a vacant
    /// slot here would mean the reverse index lost sync, so ordering the
    /// vacancy last keeps the comparison total without panicking.
    fn position_less(&self, left: usize, right: usize) -> bool {
        match (
            self.values[self.heap[left]].as_ref(),
            self.values[self.heap[right]].as_ref(),
        ) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    fn swap_heap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.position_less(position, parent) {
                break;
            }
            self.swap_heap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = position * 2 + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < self.heap.len() && self.position_less(right, left) {
                child = right;
            }
            if !self.position_less(child, position) {
                break;
            }
            self.swap_heap(position, child);
            position = child;
        }
    }
}
