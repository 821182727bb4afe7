/*!
 * List Traits
 * The block abstraction stored by the list
 */

use std::fmt::{Debug, Display};

/// Opaque value stored in a [`BlockList`](super::BlockList)
///
/// The list never inspects a block. It compares blocks by value equality
/// (`index_of`, `remove_block`) and renders them through `Display`.
pub trait Block: PartialEq + Display + Debug {}

impl<T> Block for T where T: PartialEq + Display + Debug {}
