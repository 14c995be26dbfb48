/*!
 * Placement Simulator Library
 * Fixed-partition memory allocation with First, Best, Worst and Next Fit placement
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use config::SimulatorConfig;
pub use core::errors::{SimResult, SimulatorError};
pub use memory::{
    Allocation, Allocator, MemoryBlock, MemoryError, MemoryInfo, MemoryManager, MemoryPressure,
    MemorySnapshot, MemoryStats, PartitionFault, PlacementPolicy, Process, Strategy,
};
pub use monitoring::init_tracing;
pub use shell::{Command, CommandError, ScriptSummary, Session};
