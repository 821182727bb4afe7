/*!
 * Memory Types
 * Common types for the memory-space simulation
 */

use crate::core::limits::{CRITICAL_PRESSURE_PERCENT, HIGH_PRESSURE_PERCENT};
use crate::core::types::{Address, Size};
use crate::list::ListError;
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("Invalid allocation length: 0 bytes")]
    #[diagnostic(
        code(memory::invalid_length),
        help("Request at least one byte.")
    )]
    InvalidLength,

    #[error("Out of memory: requested {requested} bytes, largest free block {largest_free} bytes ({free_total} free in total)")]
    #[diagnostic(
        code(memory::out_of_memory),
        help("Free unused blocks or run defrag() to merge adjacent free blocks.")
    )]
    OutOfMemory {
        requested: Size,
        largest_free: Size,
        free_total: Size,
    },

    #[error("Invalid memory address: 0x{0:x}")]
    #[diagnostic(
        code(memory::invalid_address),
        help("Only base addresses returned by malloc() can be freed.")
    )]
    InvalidAddress(Address),

    #[error("No blocks are allocated")]
    #[diagnostic(code(memory::nothing_allocated))]
    NothingAllocated,

    #[error(transparent)]
    #[diagnostic(transparent)]
    List(#[from] ListError),
}

/// Contiguous region of simulated memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryBlock {
    pub base_address: Address,
    pub length: Size,
}

impl MemoryBlock {
    pub const fn new(base_address: Address, length: Size) -> Self {
        Self {
            base_address,
            length,
        }
    }

    /// First address past this block
    #[inline]
    pub const fn end(&self) -> Address {
        self.base_address + self.length
    }

    /// Whether `other` begins exactly where this block ends
    #[inline]
    pub const fn is_adjacent_to(&self, other: &MemoryBlock) -> bool {
        self.end() == other.base_address
    }

    /// Block spanning this block followed by `upper`
    pub(crate) const fn merged_with(&self, upper: &MemoryBlock) -> MemoryBlock {
        MemoryBlock::new(self.base_address, self.length + upper.length)
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStats {
    pub capacity: Size,
    pub allocated_bytes: Size,
    pub free_bytes: Size,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    pub usage_percentage: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= CRITICAL_PRESSURE_PERCENT {
            MemoryPressure::Critical
        } else if self.usage_percentage >= HIGH_PRESSURE_PERCENT {
            MemoryPressure::High
        } else {
            MemoryPressure::Low
        }
    }

    /// Free blocks beyond the first are fragments
    pub fn fragmented_blocks(&self) -> usize {
        self.free_blocks.saturating_sub(1)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryPressure {
    Low,
    High,
    Critical,
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
