/*!
 * Block List
 * Singly linked, indexable sequence of blocks with cached head, tail and size
 */

use super::iter::Iter;
use super::locate::Locator;
use super::node::{Link, Node, NodeId};
use super::traits::Block;
use super::types::{ListError, ListResult};
use crate::memory::MemoryBlock;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Ordered list of blocks
///
/// Insertion at either boundary is O(1); every other positional operation
/// walks the chain from the head.
///
/// Every node is reached through raw links made by `Node::alloc`: `first` and
/// each `next` own their target, `last` aliases the tail. No `Box` holds a
/// node while it is in the chain.
///
/// # Invariants
/// - `size == 0` iff `first` is `None` iff `last` is `None`
/// - walking `next` from `first` reaches `last` in `size - 1` steps, and
///   `last` has no successor
pub struct BlockList<B = MemoryBlock> {
    first: Link<B>,
    // Non-owning; only used to append after the tail
    last: Link<B>,
    size: usize,
    _owns: PhantomData<Box<Node<B>>>,
}

// SAFETY: the list owns every node it points at, `last` included, so sending
// or sharing the list is the same as sending or sharing its blocks.
unsafe impl<B: Send> Send for BlockList<B> {}
unsafe impl<B: Sync> Sync for BlockList<B> {}

impl<B> BlockList<B> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            first: None,
            last: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Head node, if any
    #[inline]
    pub fn first(&self) -> Option<&Node<B>> {
        // SAFETY: `first` is a live node owned by this list, and the list
        // cannot change while `&self` is held.
        self.first.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Tail node, if any
    #[inline]
    pub fn last(&self) -> Option<&Node<B>> {
        // SAFETY: `last` is the live tail of the chain owned by `first` and is
        // re-targeted by every mutation.
        self.last.map(|tail| unsafe { &*tail.as_ptr() })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Node at `index`
    ///
    /// Accepts `0..=size`. The position after the tail is a valid argument and
    /// yields `Ok(None)`, unlike [`get_block`](Self::get_block).
    pub fn get_node(&self, index: usize) -> ListResult<Option<&Node<B>>> {
        if index > self.size {
            debug!(index, size = self.size, "get_node rejected index");
            return Err(ListError::out_of_bounds("get_node", index, self.size));
        }
        // SAFETY: links yielded by `walk` are live nodes of this list
        Ok(self.walk(index).map(|node| unsafe { &*node.as_ptr() }))
    }

    /// Block at `index`, for `index` in `0..size`
    pub fn get_block(&self, index: usize) -> ListResult<&B> {
        if index >= self.size {
            debug!(index, size = self.size, "get_block rejected index");
            return Err(ListError::out_of_bounds("get_block", index, self.size));
        }
        self.walk(index)
            // SAFETY: links yielded by `walk` are live nodes of this list
            .map(|node| unsafe { &(*node.as_ptr()).block })
            .ok_or_else(|| ListError::out_of_bounds("get_block", index, self.size))
    }

    /// Insert `block` before the node currently at `index`
    ///
    /// `index == 0` and `index == size` take the O(1) boundary paths.
    pub fn add(&mut self, index: usize, block: B) -> ListResult<()> {
        let size = self.size;
        if index > size {
            debug!(index, size, "add rejected index");
            return Err(ListError::out_of_bounds("add", index, size));
        }
        if index == 0 {
            self.add_first(block);
            return Ok(());
        }
        if index == size {
            self.add_last(block);
            return Ok(());
        }

        // Interior: the predecessor always has a successor, so the tail stays put
        let prev = self
            .walk(index - 1)
            .ok_or_else(|| ListError::out_of_bounds("add", index, size))?;
        // SAFETY: `prev` is a live node of this list and `&mut self` rules out
        // any outstanding reference into the chain.
        unsafe {
            let prev = &mut *prev.as_ptr();
            prev.next = Some(Node::alloc(block, prev.next));
        }
        self.size += 1;

        trace!(index, size = self.size, "inserted block");
        Ok(())
    }

    /// Insert `block` at the head
    pub fn add_first(&mut self, block: B) {
        let node = Node::alloc(block, self.first);
        if self.last.is_none() {
            self.last = Some(node);
        }
        self.first = Some(node);
        self.size += 1;

        trace!(size = self.size, "inserted block at head");
    }

    /// Append `block` after the tail
    pub fn add_last(&mut self, block: B) {
        let node = Node::alloc(block, None);
        match self.last {
            // SAFETY: `last` is the live tail of our own chain and nothing else
            // borrows it while `&mut self` is held.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.size += 1;

        trace!(size = self.size, "inserted block at tail");
    }

    /// Fresh forward iterator from the current head
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(self.first(), self.size)
    }

    /// Link at `index`, or `None` past the tail
    fn walk(&self, index: usize) -> Link<B> {
        let mut current = self.first;
        for _ in 0..index {
            // SAFETY: every link reachable from `first` is a live node
            current = unsafe { (*current?.as_ptr()).next };
        }
        current
    }
}

impl<B: Block> BlockList<B> {
    /// Position of the first block equal to `block`, or `None`
    pub fn index_of(&self, block: &B) -> Option<usize> {
        self.iter().position(|candidate| candidate == block)
    }

    /// Excise the node identified by `node`
    ///
    /// Returns `Ok(false)` and leaves the list untouched when no node in this
    /// list has that identity. Ids of removed nodes never match again, even if
    /// a later node reuses the address.
    pub fn remove_node(&mut self, node: NodeId<B>) -> ListResult<bool> {
        if self.is_empty() {
            debug!("remove_node on empty list");
            return Err(ListError::EmptyList {
                operation: "remove_node",
            });
        }
        Ok(self.unlink(Locator::Node(node)).is_some())
    }

    /// Excise the node at `index` and hand back its block
    pub fn remove(&mut self, index: usize) -> ListResult<B> {
        let size = self.size;
        if index >= size {
            debug!(index, size, "remove rejected index");
            return Err(ListError::out_of_bounds("remove", index, size));
        }
        self.unlink(Locator::Index(index))
            .map(|node| node.block)
            .ok_or_else(|| ListError::out_of_bounds("remove", index, size))
    }

    /// Excise the first node whose block equals `block`
    ///
    /// Returns `Ok(false)` and leaves the list untouched when no block matches.
    pub fn remove_block(&mut self, block: &B) -> ListResult<bool> {
        if self.is_empty() {
            debug!("remove_block on empty list");
            return Err(ListError::EmptyList {
                operation: "remove_block",
            });
        }
        Ok(self.unlink(Locator::Block(block)).is_some())
    }

    /// Shared relink primitive behind every removal
    ///
    /// Walks from the head until `locator` picks a node, splices it out and
    /// re-targets `last` when the tail was taken.
    fn unlink(&mut self, locator: Locator<'_, B>) -> Option<Box<Node<B>>> {
        let mut position = 0;
        let mut prev: Link<B> = None;
        let mut current = self.first;

        while let Some(node) = current {
            // SAFETY: `node` is a live node of this list; the shared borrow
            // ends before any link is written.
            let (hit, next) = unsafe {
                let node_ref = &*node.as_ptr();
                (locator.matches(position, node_ref), node_ref.next)
            };

            if hit {
                match prev {
                    // SAFETY: `prev` is a live node distinct from `node`
                    Some(prev) => unsafe { (*prev.as_ptr()).next = next },
                    None => self.first = next,
                }
                if next.is_none() {
                    self.last = prev;
                }
                self.size -= 1;

                trace!(
                    operation = locator.operation(),
                    position,
                    size = self.size,
                    "removed block"
                );
                // SAFETY: `node` came from `Node::alloc` and no link reaches it any more
                return Some(unsafe { Node::free(node) });
            }

            prev = current;
            current = next;
            position += 1;
        }

        trace!(operation = locator.operation(), "removal target not found");
        None
    }
}

impl<B> Default for BlockList<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Drop for BlockList<B> {
    fn drop(&mut self) {
        self.last = None;
        let mut current = self.first.take();
        while let Some(node) = current {
            // SAFETY: each node is freed once, after its successor is read
            let node = unsafe { Node::free(node) };
            current = node.next;
        }
    }
}

impl<B: fmt::Display> fmt::Display for BlockList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, block) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", block)?;
        }
        f.write_str("}")
    }
}

impl<B: fmt::Debug> fmt::Debug for BlockList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, B> IntoIterator for &'a BlockList<B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> Extend<B> for BlockList<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for block in iter {
            self.add_last(block);
        }
    }
}

impl<B> FromIterator<B> for BlockList<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
