//! Linked collection types. Revolves around [`SinglyLinkedList`], an owning list with O(1)
//! insertion at both ends and removal from the front.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
