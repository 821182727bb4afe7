/*!
 * List Iterator
 * Forward cursor over the blocks of a list
 */

use super::node::Node;
use std::iter::FusedIterator;

/// Forward iterator over a [`BlockList`](super::BlockList)
///
/// Starts at the head the list had when `iter()` was called. Holding the
/// iterator borrows the list, so the chain cannot change underneath it.
pub struct Iter<'a, B> {
    next: Option<&'a Node<B>>,
    remaining: usize,
}

impl<'a, B> Iter<'a, B> {
    pub(super) fn new(first: Option<&'a Node<B>>, size: usize) -> Self {
        Self {
            next: first,
            remaining: size,
        }
    }
}

impl<'a, B> Iterator for Iter<'a, B> {
    type Item = &'a B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            self.remaining = self.remaining.saturating_sub(1);
            node.block()
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B> ExactSizeIterator for Iter<'_, B> {}

impl<B> FusedIterator for Iter<'_, B> {}

impl<B> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}
