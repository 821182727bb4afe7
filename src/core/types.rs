/*!
 * Core Types
 * Common types used across the crate
 */

/// Address type for simulated memory
pub type Address = usize;

/// Size type for simulated memory
pub type Size = usize;
