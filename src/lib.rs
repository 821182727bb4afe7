/*!
 * Block List Library
 * Ordered block lists and the memory-space simulation built on them
 */

pub mod config;
pub mod core;
pub mod list;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use config::SimulationConfig;
pub use list::{Block, BlockList, ListError, ListResult, Node, NodeId};
pub use memory::{MemoryBlock, MemoryError, MemoryResult, MemorySpace, MemoryStats};
pub use monitoring::init_tracing;
