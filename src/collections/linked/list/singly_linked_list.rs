use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Delimited, Iter, IterMut, Length, Link, Node, NodePtr};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, tracking both its first and last node.
///
/// Every node is owned by the list and released exactly once: when it is popped or removed, when
/// the list is cleared, or when the list is dropped.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert_after` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `print` | `O(n)` |
///
/// There is no `pop_back`: without links back towards the head, finding the new tail would need a
/// full traversal.
///
/// # Example
/// ```
/// use linear_collections::collections::linked::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_front(10);
/// list.push_back(20);
/// list.push_front(5);
/// assert_eq!(list.to_string(), "5 10 20");
///
/// list.remove(&10);
/// assert_eq!(list.to_string(), "5 20");
///
/// list.pop_front();
/// assert_eq!(list.to_string(), "20");
/// ```
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the SinglyLinkedList. If the list was empty, the
    /// new element is also the last one.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the SinglyLinkedList. If the list was empty, the
    /// new element is also the first one.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty. Popping
    /// an empty list does nothing.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked below, either by advancing it or by emptying the
                // list, before anything else can reach it.
                let node = unsafe { head.take_node() };

                match len.decrement() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes every element from the list, front to back. Clearing an empty list does nothing.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Reverses the order of the list in place, the first element becomes the last.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut prev: Link<T> = None;
            let mut curr = Some(contents.head);

            while let Some(node) = curr {
                curr = *node.next();
                *node.next_mut() = prev;
                prev = Some(node);
            }

            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` directly after the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn insert_after(&mut self, index: usize, value: T) {
        self.try_insert_after(index, value).throw()
    }

    /// Inserts `value` directly after the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking. Inserting after the last element makes `value` the new back.
    pub fn try_insert_after(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        let prev = contents.seek(index);

        if prev == contents.tail {
            contents.push_back(value);
        } else {
            contents.len = contents.len.increment();

            let node = NodePtr::from_node(Node {
                value,
                next: *prev.next(),
            });

            *prev.next_mut() = Some(node);
        }
        Ok(())
    }

    /// Writes every element, front to back and separated by a single space, to stdout followed by
    /// a line break.
    ///
    /// # Panics
    /// Panics if writing to stdout fails, in the same way as [`println!`].
    pub fn print(&self)
    where
        T: Display,
    {
        println!("{}", self.display());
    }

    /// Writes the same line as [`print`](SinglyLinkedList::print) to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        writeln!(out, "{}", self.display())
    }

    /// Returns a lazy, borrowed rendering of the list with elements separated by a single space.
    pub const fn display(&self) -> Delimited<'_, T> {
        self.display_with(" ")
    }

    /// Returns a lazy, borrowed rendering of the list with elements separated by `delim`.
    pub const fn display_with<'a>(&'a self, delim: &'a str) -> Delimited<'a, T> {
        Delimited { list: self, delim }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first element equal to `item` and returns it. If no element matches, the list
    /// is left unchanged.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        if contents.head.value() == item {
            return self.pop_front();
        }

        let mut prev = contents.head;
        while let Some(curr) = *prev.next() {
            if curr.value() == item {
                *prev.next_mut() = *curr.next();
                if curr == contents.tail {
                    contents.tail = prev;
                }
                // SAFETY: Both the head and the matched node are in the list, so the length is at
                // least 2.
                contents.len = unsafe { contents.len.decrement().unreachable() };

                // SAFETY: The node was unlinked above and the tail no longer refers to it.
                return Some(unsafe { curr.take_node() }.value);
            }
            prev = curr;
        }
        None
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the chain from the head, asserting that it reaches the tail after exactly `len`
    /// nodes and stops there.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = *curr.next() {
                    count += 1;
                    assert!(count <= len.get(), "Chain is longer than the stored length.");
                    curr = next;
                }
                assert!(curr == tail, "The last node in the chain should be the tail.");
                assert_eq!(count, len.get(), "Chain length should match the stored length.");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index == self.len.last_index() {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index is less than the length, so there are at least index nodes after the
            // head.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.increment();

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.increment();

        let node = NodePtr::from_node(Node { value, next: None });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node { value, next: None });

        ListContents {
            len: Length::ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

// SAFETY: The list owns its nodes and values outright, nothing is shared between lists, so it can
// move between threads whenever the values can.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}

// SAFETY: Shared access only ever hands out shared references to the values.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(), f)
    }
}
