/*!
 * Memory Traits
 * Memory management abstractions
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Memory allocator interface
pub trait Allocator {
    /// Allocate `length` bytes, returning the base address
    fn malloc(&mut self, length: Size) -> MemoryResult<Address>;

    /// Release the block starting at `address`
    fn free(&mut self, address: Address) -> MemoryResult<()>;

    /// Merge adjacent free blocks, returning the number of merges
    fn defrag(&mut self) -> MemoryResult<usize>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
