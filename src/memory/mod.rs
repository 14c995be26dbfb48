/*!
 * Memory Module
 * Fixed-partition allocation with pluggable placement strategies
 */

pub mod manager;
pub mod strategy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::MemoryManager;
pub use strategy::{Strategy, StrategyDescription, UnknownStrategy};
pub use traits::*;
pub use types::*;
