/*!
 * Memory Module
 * Allocator simulation over block lists
 */

pub mod space;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use space::MemorySpace;
pub use traits::*;
pub use types::*;
