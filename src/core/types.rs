/*!
 * Core Types
 * Common types used across the simulator
 */

/// Memory quantity in kilobytes
pub type Size = u64;

/// Position of a block in the partition (0-based, stable for the partition's lifetime)
pub type BlockIndex = usize;

/// User-supplied process identifier
pub type ProcessId = String;

/// Raw integer as received from the caller, before positivity checks
pub type RawSize = i64;
