use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The length of a non-empty list. An empty list has no contents at all, so zero is never stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub const ONE: Length = Length(NonZero::<usize>::MIN);

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }

    /// # Panics
    /// Panics with [`CapacityOverflow`] if the length is already [`usize::MAX`].
    pub fn increment(self) -> Length {
        Length(self.0.checked_add(1).ok_or(CapacityOverflow).throw())
    }

    /// Returns [`None`] if the list would become empty.
    pub const fn decrement(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }
}
