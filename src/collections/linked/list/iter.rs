use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{Link, ListContents, ListState, SinglyLinkedList};

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owning iterator over a [`SinglyLinkedList`], front to back. Elements that aren't consumed
/// are released along with the iterator.
pub struct IntoIter<T> {
    // Popping from the front already does everything needed, including the cleanup on drop.
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

const fn first_link<T>(state: &ListState<T>) -> Link<T> {
    match state {
        Empty => None,
        Full(ListContents { head, .. }) => Some(*head),
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: first_link(&self.state),
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // The nodes themselves are never modified, remaining counts down to zero so that the iterator
    // never has to look at the tail's link.
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

// SAFETY: IterMut hands out unique references to elements of a list it mutably borrows, the same as
// &mut T would.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

// SAFETY: A shared IterMut gives no access to the elements at all.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: first_link(&self.state),
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: Iter only hands out shared references to elements of a list it borrows, the same as &T
// would.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: As above, shared access to the iterator never reaches the elements mutably.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
