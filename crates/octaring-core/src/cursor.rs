//! Generation-stamped traversal cursors.
//!
//! A [`Cursor`] sits between two positions of a [`RingDigitList`] and can move in
//! both directions, replace or remove the digit it produced last, and insert
//! digits at its position. It does not borrow the list: each call receives the
//! list it was created from, and fails with [`RingListError::ForeignCursor`]
//! when handed any other list, clones included. The cursor captures the list's
//! generation when it is created and after each of its own mutations; once the
//! list is mutated through any other path, every further call fails with
//! [`RingListError::ConcurrentModification`].
//!
//! # Examples
//!
//! ```
//! use octaring_core::{Radix, RingDigitList, RingListError};
//!
//! let mut list = RingDigitList::from_digits(Radix::OCTAL, [1, 2, 3])?;
//!
//! // Remove every even digit while walking forward.
//! let mut cursor = list.cursor();
//! while cursor.has_next(&list) {
//!     if cursor.next(&list)? % 2 == 0 {
//!         cursor.remove(&mut list)?;
//!     }
//! }
//! assert_eq!(list.to_vec(), [1, 3]);
//!
//! // Mutating the list directly invalidates the cursor.
//! let mut cursor = list.cursor();
//! list.append(7)?;
//! assert!(matches!(
//!     cursor.next(&list),
//!     Err(RingListError::ConcurrentModification { .. })
//! ));
//! # Ok::<(), RingListError>(())
//! ```

use crate::{RingDigitList, RingListError, ring_list::NodeId};

/// A bidirectional cursor over a [`RingDigitList`].
///
/// Created by [`RingDigitList::cursor`] or [`RingDigitList::cursor_at`]. A cursor
/// only operates on the list that created it.
#[derive(Debug, Clone)]
pub struct Cursor {
    list_id: u64,
    index: usize,
    node: Option<NodeId>,
    last: Option<usize>,
    generation: u64,
}

impl RingDigitList {
    /// Returns a cursor positioned before the head.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self, 0)
    }

    /// Returns a cursor whose first [`Cursor::next`] call produces the digit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index > self.len()`.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor, RingListError> {
        self.check_insert_index(index)?;
        Ok(Cursor::new(self, index))
    }
}

impl Cursor {
    fn new(list: &RingDigitList, index: usize) -> Self {
        Self {
            list_id: list.id(),
            index,
            node: list.node_at_or_end(index),
            last: None,
            generation: list.generation(),
        }
    }

    /// Returns `true` if [`next`](Self::next) would produce a digit.
    #[must_use]
    pub fn has_next(&self, list: &RingDigitList) -> bool {
        self.index < list.len()
    }

    /// Returns `true` if [`previous`](Self::previous) would produce a digit.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns the position of the digit the next call to [`next`](Self::next) produces.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.index
    }

    /// Returns the position of the digit the next call to
    /// [`previous`](Self::previous) produces, if any.
    #[must_use]
    pub const fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Produces the next digit and moves forward.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::ForeignCursor`] if `list` did not create this
    /// cursor, [`RingListError::ConcurrentModification`] if the list changed
    /// behind the cursor, or [`RingListError::NoSuchElement`] at the tail.
    pub fn next(&mut self, list: &RingDigitList) -> Result<u8, RingListError> {
        self.check_generation(list)?;
        if self.index >= list.len() {
            return Err(RingListError::NoSuchElement);
        }
        let id = match self.node {
            Some(id) => id,
            None => list.node_at(self.index),
        };
        self.last = Some(self.index);
        self.index += 1;
        // the tail links back to the head, which is not "after" it
        self.node = (self.index < list.len()).then(|| list.next_of(id));
        Ok(list.digit_of(id))
    }

    /// Produces the previous digit and moves backward.
    ///
    /// The node is re-derived by walking from the head, so each call is O(index).
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::ForeignCursor`] if `list` did not create this
    /// cursor, [`RingListError::ConcurrentModification`] if the list changed
    /// behind the cursor, or [`RingListError::NoSuchElement`] at the head.
    pub fn previous(&mut self, list: &RingDigitList) -> Result<u8, RingListError> {
        self.check_generation(list)?;
        if self.index == 0 {
            return Err(RingListError::NoSuchElement);
        }
        self.index -= 1;
        let id = list.node_at(self.index);
        self.node = Some(id);
        self.last = Some(self.index);
        Ok(list.digit_of(id))
    }

    /// Replaces the digit most recently produced by [`next`](Self::next) or
    /// [`previous`](Self::previous).
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::ForeignCursor`] if `list` did not create this
    /// cursor, [`RingListError::ConcurrentModification`] if the list changed
    /// behind the cursor, [`RingListError::NoCurrentElement`] if no digit was
    /// produced since the last removal or insertion, or
    /// [`RingListError::InvalidDigit`] if `digit` is not valid in the list's radix.
    pub fn set(&mut self, list: &mut RingDigitList, digit: u8) -> Result<(), RingListError> {
        self.check_generation(list)?;
        let last = self.last.ok_or(RingListError::NoCurrentElement)?;
        list.set(last, digit)?;
        self.resync(list);
        Ok(())
    }

    /// Removes the digit most recently produced by [`next`](Self::next) or
    /// [`previous`](Self::previous) and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::ForeignCursor`] if `list` did not create this
    /// cursor, [`RingListError::ConcurrentModification`] if the list changed
    /// behind the cursor, or [`RingListError::NoCurrentElement`] if no digit was
    /// produced since the last removal or insertion.
    pub fn remove(&mut self, list: &mut RingDigitList) -> Result<u8, RingListError> {
        self.check_generation(list)?;
        let last = self.last.ok_or(RingListError::NoCurrentElement)?;
        let digit = list.remove_at(last)?;
        if last < self.index {
            self.index -= 1;
        }
        self.last = None;
        self.resync(list);
        Ok(digit)
    }

    /// Inserts a digit at the cursor position; the cursor ends up after it.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::ForeignCursor`] if `list` did not create this
    /// cursor, [`RingListError::ConcurrentModification`] if the list changed
    /// behind the cursor, or [`RingListError::InvalidDigit`] if `digit` is not
    /// valid in the list's radix.
    pub fn insert(&mut self, list: &mut RingDigitList, digit: u8) -> Result<(), RingListError> {
        self.check_generation(list)?;
        list.insert(self.index, digit)?;
        self.index += 1;
        self.last = None;
        self.resync(list);
        Ok(())
    }

    fn check_generation(&self, list: &RingDigitList) -> Result<(), RingListError> {
        if self.list_id != list.id() {
            return Err(RingListError::ForeignCursor);
        }
        if self.generation == list.generation() {
            Ok(())
        } else {
            Err(RingListError::ConcurrentModification {
                expected: self.generation,
                actual: list.generation(),
            })
        }
    }

    fn resync(&mut self, list: &RingDigitList) {
        self.generation = list.generation();
        self.node = list.node_at_or_end(self.index);
    }
}
