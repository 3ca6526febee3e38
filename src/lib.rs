//! A small collection of classic linear data structures, written as a learning exercise.
//!
//! # Purpose
//! The centre of this crate is [`SinglyLinkedList`](collections::linked::SinglyLinkedList), a
//! hand-rolled list that manages its own nodes rather than delegating to a library container.
//! Writing it out properly means dealing with ownership, allocation and iteration directly instead
//! of hiding behind [`Vec`] or [`std::collections::LinkedList`].
//!
//! # Method
//! The list keeps a pointer to both its first and last node so that pushing to either end stays
//! `O(1)`. An empty list stores no pointers at all, its state is either `Empty` or `Full` with a
//! non-zero length, a head and a tail. This way "head is missing but tail isn't" can't be
//! represented in the first place.
//!
//! Every node is allocated once when a value is inserted and released once when it is popped,
//! removed, cleared or dropped along with the list.
//!
//! # Error Handling
//! The core operations never fail. Popping or removing from an empty list, or removing a value that
//! isn't there, simply does nothing. Index based methods come in pairs: a `try_` method returning a
//! strongly typed error (such as
//! [`IndexOutOfBounds`](collections::linked::list::IndexOutOfBounds)) and a plain method that
//! panics with that error's message.
//!
//! # Features
//! - `collections`: The base collections module.
//! - `linked`: [`SinglyLinkedList`](collections::linked::SinglyLinkedList) (default).
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
