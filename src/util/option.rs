use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Acts like [`Option::unwrap`] but hits [`unreachable!`] in debug builds and
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// # Safety
    /// The caller must guarantee that the value is [`Some`]. Linked structures use this where a
    /// non-zero length already proves the existence of a node.
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
