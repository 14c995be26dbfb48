/*!
 * Memory Types
 * Blocks, processes, errors and statistics for fixed-partition allocation
 */

use super::strategy::Strategy;
use crate::core::limits::{PRESSURE_CRITICAL_RATIO, PRESSURE_HIGH_RATIO, PRESSURE_MEDIUM_RATIO};
use crate::core::types::{BlockIndex, ProcessId, RawSize, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Why a partition definition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PartitionFault {
    /// No positive sizes remained after filtering
    Empty,
    /// Block sizes add up to more than the memory capacity
    ExceedsCapacity { total: Size, capacity: Size },
    /// Memory has not been initialized with a capacity yet
    MemoryUninitialized,
}

impl std::fmt::Display for PartitionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PartitionFault::Empty => write!(f, "no valid block sizes given"),
            PartitionFault::ExceedsCapacity { total, capacity } => write!(
                f,
                "total block size ({} KB) exceeds memory size ({} KB)",
                total, capacity
            ),
            PartitionFault::MemoryUninitialized => write!(f, "memory is not initialized"),
        }
    }
}

/// Memory errors
///
/// All variants are recoverable: the manager state is untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Invalid memory capacity: {0} KB")]
    #[diagnostic(
        code(memory::invalid_capacity),
        help("Memory capacity must be a positive number of kilobytes.")
    )]
    InvalidCapacity(RawSize),

    #[error("Invalid partition: {0}")]
    #[diagnostic(
        code(memory::invalid_partition),
        help("Give positive block sizes whose sum fits in the initialized memory.")
    )]
    InvalidPartition(PartitionFault),

    #[error("Invalid process size: {0} KB")]
    #[diagnostic(
        code(memory::invalid_size),
        help("Process size must be a positive number of kilobytes.")
    )]
    InvalidSize(RawSize),

    #[error("Invalid process ID: {0:?}")]
    #[diagnostic(
        code(memory::invalid_process_id),
        help("Process IDs must contain at least one non-whitespace character.")
    )]
    InvalidProcessId(String),

    #[error("Process with ID {0} already exists")]
    #[diagnostic(
        code(memory::duplicate_process_id),
        help("Free the existing process first or choose another ID.")
    )]
    DuplicateProcessId(ProcessId),

    #[error("No memory blocks defined")]
    #[diagnostic(
        code(memory::no_blocks_defined),
        help("Create memory blocks before allocating processes.")
    )]
    NoBlocksDefined,

    #[error("Cannot allocate process {process_id} ({size} KB) using {strategy}")]
    #[diagnostic(
        code(memory::no_suitable_block),
        help("Every free block is smaller than the request. Free a process or repartition.")
    )]
    NoSuitableBlock {
        process_id: ProcessId,
        size: Size,
        strategy: Strategy,
    },
}

/// Memory block metadata
///
/// The size is fixed when the partition is created; only the occupancy fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub index: BlockIndex,
    pub size: Size,
    pub allocated: bool,
    pub occupant: Option<ProcessId>,
    pub fragmentation: Size,
}

impl MemoryBlock {
    pub fn new(index: BlockIndex, size: Size) -> Self {
        Self {
            index,
            size,
            allocated: false,
            occupant: None,
            fragmentation: 0,
        }
    }

    /// Whether this block is free and large enough for `size`
    #[inline]
    pub fn fits(&self, size: Size) -> bool {
        !self.allocated && self.size >= size
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    pub(crate) fn occupy(&mut self, occupant: ProcessId, fragmentation: Size) {
        self.allocated = true;
        self.occupant = Some(occupant);
        self.fragmentation = fragmentation;
    }

    pub(crate) fn free(&mut self) {
        self.allocated = false;
        self.occupant = None;
        self.fragmentation = 0;
    }
}

/// A live process occupying one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub requested_size: Size,
    pub block_index: BlockIndex,
    pub strategy: Strategy,
    /// Allocation order within the current partition
    pub sequence: u64,
}

/// Outcome of a successful allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub block_index: BlockIndex,
    pub fragmentation: Size,
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= PRESSURE_CRITICAL_RATIO {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH_RATIO {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM_RATIO {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub capacity: Size,
    /// Sum of all block sizes
    pub partitioned: Size,
    /// Capacity not covered by any block
    pub unpartitioned: Size,
    /// Sum of the requested sizes of live processes
    pub used: Size,
    /// Unused space inside allocated blocks
    pub internal_fragmentation: Size,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Option<Size>,
    /// Share of partitioned memory held by allocated blocks, 0-100
    pub usage_percentage: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }
}

/// Full view of the simulator state for rendering or export
#[derive(Debug, Clone, Serialize)]
pub struct MemorySnapshot {
    pub capacity: Size,
    pub blocks: Vec<MemoryBlock>,
    pub processes: Vec<Process>,
    pub cursor: Option<BlockIndex>,
    pub stats: MemoryStats,
}
