/*!
 * Block List Module
 * Ordered, singly linked storage for memory block descriptors
 */

mod block_list;
mod iter;
mod locate;
mod node;
pub mod traits;
pub mod types;

pub use block_list::BlockList;
pub use iter::Iter;
pub use node::{Node, NodeId};
pub use traits::Block;
pub use types::{ListError, ListResult};
