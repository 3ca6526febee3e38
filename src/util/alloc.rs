use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// Counts how many [`Counted`] values created through it have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track<T>(&self, value: T) -> Counted<T> {
        Counted {
            value,
            drops: Rc::clone(&self.0),
        }
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its [`DropCounter`] exactly once when dropped. Equality only considers the
/// wrapped value, so lookups can be performed with a freshly tracked value.
pub struct Counted<T> {
    pub value: T,
    drops: Rc<Cell<usize>>,
}

impl<T> Drop for Counted<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Counted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Debug> Debug for Counted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
