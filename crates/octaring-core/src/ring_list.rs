//! Circular singly-linked list of digits.
//!
//! This module provides [`RingDigitList`], an ordered container whose elements are
//! single digits of one fixed [`Radix`]. Nodes form a ring: the successor of the
//! last node is the first node, and no link is ever absent while the list is
//! non-empty.
//!
//! Nodes live in an arena and refer to each other through slot handles, so
//! the ring closure `tail.next == head` is a plain handle comparison. Slots freed by
//! removals are recycled by later insertions.
//!
//! # Examples
//!
//! ```
//! use octaring_core::{Radix, RingDigitList};
//!
//! let mut list = RingDigitList::new(Radix::OCTAL);
//! list.append(1)?;
//! list.append(2)?;
//! list.insert(0, 7)?;
//!
//! assert_eq!(list.to_vec(), [7, 1, 2]);
//! assert!(list.is_ring_closed());
//!
//! list.rotate_left();
//! assert_eq!(list.to_vec(), [1, 2, 7]);
//! # Ok::<(), octaring_core::RingListError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{Radix, RingListError};

/// Handle to a node slot in the arena of a [`RingDigitList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone, Copy)]
struct Node {
    digit: u8,
    next: NodeId,
}

/// A circular singly-linked list of digits in a fixed radix.
///
/// Positions are 0-based and counted from the head. Indexed access walks the
/// ring from the head, so `get`, `set`, `insert` and `remove_at` cost O(index).
///
/// Every structural or value mutation increments the list's generation counter,
/// which invalidates [`Cursor`](crate::Cursor)s obtained earlier.
///
/// Two lists compare equal when they hold the same digit sequence; the radix is
/// not part of the comparison.
pub struct RingDigitList {
    id: u64,
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    radix: Radix,
    generation: u64,
}

impl RingDigitList {
    /// Creates an empty list of the given radix.
    #[must_use]
    pub fn new(radix: Radix) -> Self {
        Self {
            id: next_list_id(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            radix,
            generation: 0,
        }
    }

    /// Creates a list holding `digits`, most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::InvalidDigit`] if any digit is not valid in
    /// `radix`. No list is built in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use octaring_core::{Radix, RingDigitList};
    ///
    /// let list = RingDigitList::from_digits(Radix::OCTAL, [1, 2, 3])?;
    /// assert_eq!(list.len(), 3);
    /// assert!(RingDigitList::from_digits(Radix::OCTAL, [1, 8]).is_err());
    /// # Ok::<(), octaring_core::RingListError>(())
    /// ```
    pub fn from_digits<I>(radix: Radix, digits: I) -> Result<Self, RingListError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut list = Self::new(radix);
        list.append_all(digits)?;
        Ok(list)
    }

    /// Builds a list from digits already known to be valid in `radix`.
    pub(crate) fn from_valid_digits<I>(radix: Radix, digits: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut list = Self::new(radix);
        for digit in digits {
            debug_assert!(radix.contains(digit));
            list.push_back(digit);
        }
        list
    }

    /// Returns the radix of this list.
    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Returns the number of digits in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current generation counter.
    ///
    /// The counter changes on every mutation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the digit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<u8, RingListError> {
        self.check_index(index)?;
        Ok(self.node(self.node_at(index)).digit)
    }

    /// Replaces the digit at `index`, returning the previous digit.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index >= self.len()`, or
    /// [`RingListError::InvalidDigit`] if `digit` is not valid in the list's radix.
    pub fn set(&mut self, index: usize, digit: u8) -> Result<u8, RingListError> {
        self.check_index(index)?;
        self.radix.check(digit)?;
        let id = self.node_at(index);
        let previous = std::mem::replace(&mut self.node_mut(id).digit, digit);
        self.bump();
        Ok(previous)
    }

    /// Returns `true` if the list contains `digit`.
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.iter().any(|d| d == digit)
    }

    /// Returns `true` if the list contains every digit in `digits`.
    #[must_use]
    pub fn contains_all<I>(&self, digits: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        digits.into_iter().all(|digit| self.contains(digit))
    }

    /// Returns the position of the first occurrence of `digit`.
    #[must_use]
    pub fn index_of(&self, digit: u8) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    /// Returns the position of the last occurrence of `digit`.
    #[must_use]
    pub fn last_index_of(&self, digit: u8) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter_map(|(index, d)| (d == digit).then_some(index))
            .last()
    }

    /// Appends a digit at the tail of the ring.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::InvalidDigit`] if `digit` is not valid in the list's radix.
    pub fn append(&mut self, digit: u8) -> Result<(), RingListError> {
        self.radix.check(digit)?;
        self.push_back(digit);
        self.bump();
        Ok(())
    }

    /// Appends every digit of `digits`.
    ///
    /// All digits are validated before the first one is appended.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::InvalidDigit`] if any digit is not valid in the
    /// list's radix. The list is unchanged in that case.
    pub fn append_all<I>(&mut self, digits: I) -> Result<(), RingListError>
    where
        I: IntoIterator<Item = u8>,
    {
        let digits = self.validated(digits)?;
        if digits.is_empty() {
            return Ok(());
        }
        for digit in digits {
            self.push_back(digit);
        }
        self.bump();
        Ok(())
    }

    /// Inserts a digit so that it ends up at position `index`.
    ///
    /// `index == self.len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index > self.len()`, or
    /// [`RingListError::InvalidDigit`] if `digit` is not valid in the list's radix.
    pub fn insert(&mut self, index: usize, digit: u8) -> Result<(), RingListError> {
        self.check_insert_index(index)?;
        self.radix.check(digit)?;
        self.insert_unchecked(index, digit);
        self.bump();
        Ok(())
    }

    /// Inserts every digit of `digits`, the first one at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index > self.len()`, or
    /// [`RingListError::InvalidDigit`] if any digit is not valid in the list's radix.
    /// The list is unchanged in either case.
    pub fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<(), RingListError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.check_insert_index(index)?;
        let digits = self.validated(digits)?;
        if digits.is_empty() {
            return Ok(());
        }
        for (offset, digit) in digits.into_iter().enumerate() {
            self.insert_unchecked(index + offset, digit);
        }
        self.bump();
        Ok(())
    }

    /// Removes the digit at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `index >= self.len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<u8, RingListError> {
        self.check_index(index)?;
        let digit = self.remove_unchecked(index);
        self.bump();
        Ok(digit)
    }

    /// Removes the first occurrence of `digit`.
    ///
    /// Returns `true` if a digit was removed.
    pub fn remove_value(&mut self, digit: u8) -> bool {
        match self.index_of(digit) {
            Some(index) => {
                self.remove_unchecked(index);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Keeps only the digits for which `keep` returns `true`.
    ///
    /// Returns `true` if any digit was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(u8) -> bool,
    {
        let Some((mut head, mut tail)) = self.ends() else {
            return false;
        };
        let mut prev = tail;
        let mut current = head;
        let mut removed = 0;
        for _ in 0..self.len {
            let Node { digit, next } = *self.node(current);
            if keep(digit) {
                prev = current;
            } else {
                self.node_mut(prev).next = next;
                if current == head {
                    head = next;
                }
                if current == tail {
                    tail = prev;
                }
                self.release(current);
                removed += 1;
            }
            current = next;
        }
        if removed == 0 {
            return false;
        }
        self.len -= removed;
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        } else {
            self.head = Some(head);
            self.tail = Some(tail);
        }
        self.bump();
        true
    }

    /// Removes every digit that appears in `digits`.
    ///
    /// Returns `true` if any digit was removed.
    pub fn remove_all(&mut self, digits: &[u8]) -> bool {
        self.retain(|digit| !digits.contains(&digit))
    }

    /// Removes every digit that does not appear in `digits`.
    ///
    /// Returns `true` if any digit was removed.
    pub fn retain_all(&mut self, digits: &[u8]) -> bool {
        self.retain(|digit| digits.contains(&digit))
    }

    /// Exchanges the digits at positions `i` and `j`.
    ///
    /// Unlike the other index-based operations this never fails: it returns
    /// `false` without touching the list if either index is out of range, and
    /// `true` otherwise. `swap(i, i)` changes nothing.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        if i == j {
            return true;
        }
        let (a, b) = (self.node_at(i), self.node_at(j));
        let digit_a = self.node(a).digit;
        let digit_b = std::mem::replace(&mut self.node_mut(b).digit, digit_a);
        self.node_mut(a).digit = digit_b;
        self.bump();
        true
    }

    /// Removes every digit.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.bump();
    }

    /// Sorts the digits in ascending order.
    ///
    /// Uses adjacent-swap bubble sort; O(n²) swaps over O(n) index walks.
    pub fn sort_ascending(&mut self) {
        self.bubble_sort(|a, b| a > b);
    }

    /// Sorts the digits in descending order.
    pub fn sort_descending(&mut self) {
        self.bubble_sort(|a, b| a < b);
    }

    fn bubble_sort(&mut self, out_of_order: impl Fn(u8, u8) -> bool) {
        if self.len <= 1 {
            return;
        }
        for pass in 0..self.len - 1 {
            for j in 0..self.len - pass - 1 {
                let (a, b) = (self.digit_at(j), self.digit_at(j + 1));
                if out_of_order(a, b) {
                    self.swap(j, j + 1);
                }
            }
        }
    }

    /// Rotates the digits one position to the left.
    ///
    /// The head digit moves to the tail, so `[1, 2, 3]` becomes `[2, 3, 1]`.
    /// Both ends advance by one node along the ring; no node is relinked and no
    /// digit is rewritten. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use octaring_core::{Radix, RingDigitList};
    ///
    /// let mut list = RingDigitList::from_digits(Radix::OCTAL, [1, 2, 3])?;
    /// list.rotate_left();
    /// assert_eq!(list.to_vec(), [2, 3, 1]);
    /// # Ok::<(), octaring_core::RingListError>(())
    /// ```
    pub fn rotate_left(&mut self) {
        if self.len <= 1 {
            return;
        }
        let Some((head, _)) = self.ends() else {
            return;
        };
        self.head = Some(self.node(head).next);
        self.tail = Some(head);
        self.bump();
    }

    /// Rotates the digits one position to the right.
    ///
    /// A fresh node holding the tail digit becomes the new head and the old
    /// tail node leaves the ring; the second-to-last node, found by an O(n)
    /// walk, becomes the new tail.
    pub fn rotate_right(&mut self) {
        if self.len <= 1 {
            return;
        }
        let Some((head, tail)) = self.ends() else {
            return;
        };
        let last = self.node(tail).digit;
        let new_tail = self.node_at(self.len - 2);
        let new_head = self.alloc(last);
        self.node_mut(new_head).next = head;
        self.node_mut(new_tail).next = new_head;
        self.release(tail);
        self.head = Some(new_head);
        self.tail = Some(new_tail);
        self.bump();
    }

    /// Returns a new list of the same radix holding positions `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::OutOfRange`] if `to > self.len()` or `from > to`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self, RingListError> {
        if to > self.len {
            return Err(RingListError::OutOfRange {
                index: to,
                size: self.len,
            });
        }
        if from > to {
            return Err(RingListError::OutOfRange {
                index: from,
                size: self.len,
            });
        }
        Ok(Self::from_valid_digits(
            self.radix,
            self.iter().skip(from).take(to - from),
        ))
    }

    /// Copies the digits into a vector, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Returns an iterator over the digits, head first.
    ///
    /// Every call starts a fresh traversal at the head.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Checks the ring structure.
    ///
    /// Returns `true` if the list is empty with no head or tail, or if walking
    /// `next` from the head visits exactly `len` distinct nodes, ends at the
    /// tail, and the tail links back to the head.
    #[must_use]
    pub fn is_ring_closed(&self) -> bool {
        let Some((head, tail)) = self.ends() else {
            return self.len == 0 && self.head.is_none() && self.tail.is_none();
        };
        if self.len == 0 || self.node(tail).next != head {
            return false;
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut prev = tail;
        let mut current = head;
        for _ in 0..self.len {
            if seen[current.0] {
                return false;
            }
            seen[current.0] = true;
            prev = current;
            current = self.node(current).next;
        }
        current == head && prev == tail
    }

    /// Process-unique identity of this list; clones get a fresh one.
    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), RingListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(RingListError::OutOfRange {
                index,
                size: self.len,
            })
        }
    }

    pub(crate) fn check_insert_index(&self, index: usize) -> Result<(), RingListError> {
        if index <= self.len {
            Ok(())
        } else {
            Err(RingListError::OutOfRange {
                index,
                size: self.len,
            })
        }
    }

    /// Returns the node at `index`. Caller guarantees `index < len`.
    pub(crate) fn node_at(&self, index: usize) -> NodeId {
        debug_assert!(index < self.len);
        let mut current = self.head.unwrap_or(NodeId(0));
        for _ in 0..index {
            current = self.node(current).next;
        }
        current
    }

    /// Returns the node at `index`, or `None` if `index == len`.
    pub(crate) fn node_at_or_end(&self, index: usize) -> Option<NodeId> {
        (index < self.len).then(|| self.node_at(index))
    }

    pub(crate) fn digit_of(&self, id: NodeId) -> u8 {
        self.node(id).digit
    }

    pub(crate) fn next_of(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    fn digit_at(&self, index: usize) -> u8 {
        self.node(self.node_at(index)).digit
    }

    fn ends(&self) -> Option<(NodeId, NodeId)> {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => Some((head, tail)),
            _ => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Allocates a self-linked node.
    fn alloc(&mut self, digit: u8) -> NodeId {
        if let Some(id) = self.free.pop() {
            *self.node_mut(id) = Node { digit, next: id };
            id
        } else {
            let id = NodeId(self.nodes.len());
            self.nodes.push(Node { digit, next: id });
            id
        }
    }

    fn release(&mut self, id: NodeId) {
        self.free.push(id);
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn validated<I>(&self, digits: I) -> Result<Vec<u8>, RingListError>
    where
        I: IntoIterator<Item = u8>,
    {
        digits
            .into_iter()
            .map(|digit| self.radix.check(digit))
            .collect()
    }

    fn push_back(&mut self, digit: u8) {
        let id = self.alloc(digit);
        match self.ends() {
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
            Some((head, tail)) => {
                self.node_mut(tail).next = id;
                self.node_mut(id).next = head;
                self.tail = Some(id);
            }
        }
        self.len += 1;
    }

    /// Caller guarantees `index <= len` and a valid digit.
    fn insert_unchecked(&mut self, index: usize, digit: u8) {
        if index == self.len {
            self.push_back(digit);
            return;
        }
        let Some((head, tail)) = self.ends() else {
            self.push_back(digit);
            return;
        };
        let id = self.alloc(digit);
        if index == 0 {
            self.node_mut(id).next = head;
            self.node_mut(tail).next = id;
            self.head = Some(id);
        } else {
            let prev = self.node_at(index - 1);
            self.node_mut(id).next = self.node(prev).next;
            self.node_mut(prev).next = id;
        }
        self.len += 1;
    }

    /// Caller guarantees `index < len`.
    fn remove_unchecked(&mut self, index: usize) -> u8 {
        let Some((head, tail)) = self.ends() else {
            unreachable!("remove from empty list");
        };
        let removed = if index == 0 {
            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                let next = self.node(head).next;
                self.head = Some(next);
                self.node_mut(tail).next = next;
            }
            head
        } else {
            let prev = self.node_at(index - 1);
            let target = self.node(prev).next;
            self.node_mut(prev).next = self.node(target).next;
            if target == tail {
                self.tail = Some(prev);
            }
            target
        };
        self.release(removed);
        self.len -= 1;
        self.node(removed).digit
    }
}

fn next_list_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

impl Clone for RingDigitList {
    fn clone(&self) -> Self {
        Self {
            id: next_list_id(),
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            ..*self
        }
    }
}

impl PartialEq for RingDigitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for RingDigitList {}

impl Default for RingDigitList {
    fn default() -> Self {
        Self::new(Radix::default())
    }
}

impl fmt::Debug for RingDigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDigitList")
            .field("radix", &self.radix)
            .field("digits", &self.to_vec())
            .finish()
    }
}

/// Formats the digits head first, using `0-9a-z`. An empty list formats as `0`.
impl Display for RingDigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        for digit in self {
            let c = char::from_digit(u32::from(digit), u32::from(self.radix)).unwrap_or('?');
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RingDigitList {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`RingDigitList`], head first.
///
/// Created by [`RingDigitList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a RingDigitList,
    next: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        self.remaining -= 1;
        self.next = Some(self.list.next_of(id));
        Some(self.list.digit_of(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
