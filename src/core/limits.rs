/*!
 * Simulation Limits and Constants
 *
 * Centralized location for defaults used by the memory-space simulation
 * and the `blockmem` binary.
 */

// =============================================================================
// MEMORY SPACE
// =============================================================================

/// Default simulated memory space (64KB)
/// Used when `BLOCKMEM_CAPACITY` is unset or unparsable
pub const DEFAULT_MEMORY_SPACE: usize = 64 * 1024;

/// Base address of the single free block a fresh memory space starts with
pub const MEMORY_SPACE_BASE: usize = 0;

/// Usage percentage at which memory pressure is reported as high
pub const HIGH_PRESSURE_PERCENT: f64 = 80.0;

/// Usage percentage at which memory pressure is reported as critical
pub const CRITICAL_PRESSURE_PERCENT: f64 = 95.0;

// =============================================================================
// DEMO SCENARIO
// =============================================================================

/// Allocation sizes requested by the `blockmem` demo, in order
pub const DEMO_ALLOCATIONS: [usize; 5] = [1024, 4096, 512, 2048, 256];

/// Indices into `DEMO_ALLOCATIONS` freed by the demo before defragmenting
pub const DEMO_FREES: [usize; 3] = [1, 2, 4];
