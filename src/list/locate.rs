/*!
 * Removal Locators
 * Strategies for picking the node a removal excises
 */

use super::node::{Node, NodeId};

/// Target of a removal
pub(super) enum Locator<'a, B> {
    /// Exact node identity
    Node(NodeId<B>),
    /// Position in the chain
    Index(usize),
    /// First node whose block equals the value
    Block(&'a B),
}

impl<B: PartialEq> Locator<'_, B> {
    /// Whether `node`, found at `position`, is the target
    #[inline]
    pub(super) fn matches(&self, position: usize, node: &Node<B>) -> bool {
        match self {
            Locator::Node(id) => id.matches(node),
            Locator::Index(index) => *index == position,
            Locator::Block(block) => node.block() == *block,
        }
    }

    /// Operation name used in diagnostics
    pub(super) fn operation(&self) -> &'static str {
        match self {
            Locator::Node(_) => "remove_node",
            Locator::Index(_) => "remove",
            Locator::Block(_) => "remove_block",
        }
    }
}
