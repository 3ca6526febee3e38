use std::fmt::{self, Display, Formatter};

use super::SinglyLinkedList;

/// A borrowed rendering of a [`SinglyLinkedList`], created by
/// [`display`](SinglyLinkedList::display) and [`display_with`](SinglyLinkedList::display_with).
///
/// Nothing is rendered until the value is formatted, at which point each element is written front
/// to back with the delimiter between them. There is no trailing delimiter and no line break.
pub struct Delimited<'a, T> {
    pub(crate) list: &'a SinglyLinkedList<T>,
    pub(crate) delim: &'a str,
}

impl<T: Display> Display for Delimited<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.list.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for item in iter {
            write!(f, "{}{item}", self.delim)?;
        }
        Ok(())
    }
}
