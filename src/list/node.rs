/*!
 * List Node
 * Link record pairing a block with ownership of the following node
 */

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};

/// Link to the next node
///
/// A non-null link owns its target: it was produced by `Node::alloc` and is
/// released exactly once through `Node::free`.
pub(super) type Link<B> = Option<NonNull<Node<B>>>;

/// Source of node serials, unique for the life of the process
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// A single link in a [`BlockList`](super::BlockList)
///
/// Nodes are created by insertion and released by removal; the list owns
/// every node in its chain exclusively.
pub struct Node<B> {
    pub(super) block: B,
    pub(super) next: Link<B>,
    serial: u64,
}

impl<B> Node<B> {
    /// Heap-allocate a node and hand back its owning pointer
    pub(super) fn alloc(block: B, next: Link<B>) -> NonNull<Node<B>> {
        let node = Box::new(Self {
            block,
            next,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        });
        NonNull::from(Box::leak(node))
    }

    /// Take back ownership of a node made by [`alloc`](Self::alloc)
    ///
    /// # Safety
    /// `node` must come from `Node::alloc`, must not have been freed, and no
    /// reference into it may outlive this call.
    pub(super) unsafe fn free(node: NonNull<Node<B>>) -> Box<Node<B>> {
        Box::from_raw(node.as_ptr())
    }

    /// Block stored in this node
    #[inline]
    pub fn block(&self) -> &B {
        &self.block
    }

    /// Following node, or `None` at the tail
    #[inline]
    pub fn next(&self) -> Option<&Node<B>> {
        // SAFETY: `next` is owned by the same list as `self`, and the list
        // cannot be mutated while `&self` is borrowed from it.
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }

    /// Identity token for this node, accepted by `BlockList::remove_node`
    #[inline]
    pub fn id(&self) -> NodeId<B> {
        NodeId {
            addr: self as *const Node<B> as usize,
            serial: self.serial,
            _block: PhantomData,
        }
    }
}

impl<B: fmt::Debug> fmt::Debug for Node<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("block", &self.block)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Node identity
///
/// Pairs the node's address with a serial assigned at allocation, so a token
/// kept past its node's removal never matches a newer node that reuses the
/// address. Never dereferenced.
pub struct NodeId<B> {
    addr: usize,
    serial: u64,
    _block: PhantomData<fn() -> B>,
}

impl<B> NodeId<B> {
    #[inline]
    pub(super) fn matches(&self, node: &Node<B>) -> bool {
        self.serial == node.serial && self.addr == node as *const Node<B> as usize
    }
}

impl<B> Clone for NodeId<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for NodeId<B> {}

impl<B> PartialEq for NodeId<B> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr && self.serial == other.serial
    }
}

impl<B> Eq for NodeId<B> {}

impl<B> fmt::Debug for NodeId<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(0x{:x}#{})", self.addr, self.serial)
    }
}
