/*!
 * Memory Space
 * First-fit allocator simulation backed by two block lists
 */

use super::traits::{Allocator, MemoryInfo};
use super::types::{MemoryBlock, MemoryError, MemoryResult, MemoryStats};
use crate::core::limits::{DEFAULT_MEMORY_SPACE, MEMORY_SPACE_BASE};
use crate::core::types::{Address, Size};
use crate::list::BlockList;
use std::fmt;
use tracing::{debug, info, warn};

/// Simulated memory space
///
/// - `free` starts as a single block covering the whole capacity
/// - `allocated` keeps blocks in allocation order
/// - Allocation is first-fit; an oversized free block is split in place
/// - Freed blocks go to the tail of `free` until `defrag` merges them
pub struct MemorySpace {
    allocated: BlockList<MemoryBlock>,
    free: BlockList<MemoryBlock>,
    capacity: Size,
}

impl MemorySpace {
    pub fn new(capacity: Size) -> Self {
        let mut free = BlockList::new();
        if capacity > 0 {
            free.add_last(MemoryBlock::new(MEMORY_SPACE_BASE, capacity));
        }
        info!(capacity, "Memory space initialized");
        Self {
            allocated: BlockList::new(),
            free,
            capacity,
        }
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Allocated blocks, in allocation order
    pub fn allocated_list(&self) -> &BlockList<MemoryBlock> {
        &self.allocated
    }

    /// Free blocks, in release order
    pub fn free_list(&self) -> &BlockList<MemoryBlock> {
        &self.free
    }

    /// Allocate `length` bytes from the first free block large enough
    pub fn malloc(&mut self, length: Size) -> MemoryResult<Address> {
        if length == 0 {
            warn!("Rejected zero-length allocation");
            return Err(MemoryError::InvalidLength);
        }

        let fit = self
            .free
            .iter()
            .enumerate()
            .find(|(_, block)| block.length >= length)
            .map(|(index, block)| (index, *block));

        let Some((index, block)) = fit else {
            let stats = self.stats();
            warn!(
                requested = length,
                largest_free = stats.largest_free_block,
                free_total = stats.free_bytes,
                "OOM: no free block fits"
            );
            return Err(MemoryError::OutOfMemory {
                requested: length,
                largest_free: stats.largest_free_block,
                free_total: stats.free_bytes,
            });
        };

        self.free.remove(index)?;
        if block.length > length {
            let remainder = MemoryBlock::new(block.base_address + length, block.length - length);
            self.free.add(index, remainder)?;
            debug!(
                keep = length,
                remainder = remainder.length,
                at = remainder.base_address,
                "Split free block"
            );
        }
        self.allocated
            .add_last(MemoryBlock::new(block.base_address, length));

        info!(
            address = block.base_address,
            length,
            "Allocated block"
        );
        Ok(block.base_address)
    }

    /// Return the block based at `address` to the free list
    pub fn free(&mut self, address: Address) -> MemoryResult<()> {
        if self.allocated.is_empty() {
            warn!(address, "Free with no allocated blocks");
            return Err(MemoryError::NothingAllocated);
        }

        let mut current = self.allocated.first();
        let target = loop {
            match current {
                Some(node) if node.block().base_address == address => {
                    break Some((node.id(), *node.block()))
                }
                Some(node) => current = node.next(),
                None => break None,
            }
        };

        let Some((node, block)) = target else {
            warn!(address, "Free of unknown address");
            return Err(MemoryError::InvalidAddress(address));
        };

        self.allocated.remove_node(node)?;
        self.free.add_last(block);

        info!(address, length = block.length, "Freed block");
        Ok(())
    }

    /// Merge adjacent free blocks until none remain
    ///
    /// The merged block takes the list position of its lower half.
    pub fn defrag(&mut self) -> MemoryResult<usize> {
        let mut merges = 0;
        while let Some((lower, upper)) = self.adjacent_free_pair() {
            let merged = lower.merged_with(&upper);
            self.free.remove_block(&upper)?;
            let Some(index) = self.free.index_of(&lower) else {
                return Err(MemoryError::InvalidAddress(lower.base_address));
            };
            self.free.remove(index)?;
            self.free.add(index, merged)?;
            merges += 1;

            debug!(
                base = merged.base_address,
                length = merged.length,
                "Merged adjacent free blocks"
            );
        }

        if merges > 0 {
            info!(merges, free_blocks = self.free.size(), "Defragmented free list");
        }
        Ok(merges)
    }

    pub fn stats(&self) -> MemoryStats {
        let allocated_bytes: Size = self.allocated.iter().map(|b| b.length).sum();
        let free_bytes: Size = self.free.iter().map(|b| b.length).sum();
        let largest_free_block = self.free.iter().map(|b| b.length).max().unwrap_or(0);
        let usage_percentage = if self.capacity == 0 {
            0.0
        } else {
            (allocated_bytes as f64 / self.capacity as f64) * 100.0
        };

        MemoryStats {
            capacity: self.capacity,
            allocated_bytes,
            free_bytes,
            allocated_blocks: self.allocated.size(),
            free_blocks: self.free.size(),
            largest_free_block,
            usage_percentage,
        }
    }

    fn adjacent_free_pair(&self) -> Option<(MemoryBlock, MemoryBlock)> {
        self.free.iter().find_map(|lower| {
            self.free
                .iter()
                .find(|upper| lower.is_adjacent_to(upper))
                .map(|upper| (*lower, *upper))
        })
    }
}

impl Allocator for MemorySpace {
    fn malloc(&mut self, length: Size) -> MemoryResult<Address> {
        MemorySpace::malloc(self, length)
    }

    fn free(&mut self, address: Address) -> MemoryResult<()> {
        MemorySpace::free(self, address)
    }

    fn defrag(&mut self) -> MemoryResult<usize> {
        MemorySpace::defrag(self)
    }
}

impl MemoryInfo for MemorySpace {
    fn stats(&self) -> MemoryStats {
        MemorySpace::stats(self)
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SPACE)
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "free: {}", self.free)?;
        write!(f, "allocated: {}", self.allocated)
    }
}
