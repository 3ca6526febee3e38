//! General-purpose linear collection types.
//!
//! # Purpose
//! These types exist to learn about each data structure itself, but also about pointers, ownership
//! and iterators. Structures that the standard library already covers well (queues, stacks,
//! priority queues and doubly linked lists) are shown in the demo binary instead of being rewritten
//! here.

#[cfg(feature = "linked")]
pub mod linked;
