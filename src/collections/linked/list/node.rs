use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, the list is then the only owner
// of the allocation. Turning the pointer back into a Box is the only way a node is released, which
// keeps allocation and release strictly paired.

/// A pointer to a live [`Node`] that belongs to exactly one list. Every method here relies on the
/// owning list to only hand out pointers to nodes that are still part of its chain, and to tie the
/// returned lifetimes to a borrow of itself.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Releases the node, moving its contents back out of the heap.
    ///
    /// # Safety
    /// The node must not be reachable from any list afterwards, and no other copy of this pointer
    /// may be used again.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and, per the caller's guarantee,
        // this is the only release of it.
        *unsafe { Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live while it is linked into its list.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(mut self) -> &'a mut T {
        // SAFETY: The node is live while it is linked into its list, which is mutably borrowed by
        // the caller.
        unsafe { &mut self.0.as_mut().value }
    }

    pub const fn next<'a>(self) -> &'a Link<T> {
        // SAFETY: The node is live while it is linked into its list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub const fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: The node is live while it is linked into its list, which is mutably borrowed by
        // the caller.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
