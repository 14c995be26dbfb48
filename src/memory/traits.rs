/*!
 * Memory Traits
 * Placement, allocation and inspection interfaces
 */

use super::strategy::Strategy;
use super::types::*;
use crate::core::types::{BlockIndex, RawSize, Size};

/// Block selection over a read-only block list
pub trait PlacementPolicy {
    /// Pick a free block that can hold `size`, or `None` when nothing fits
    fn select_block(
        &self,
        blocks: &[MemoryBlock],
        size: Size,
        cursor: Option<BlockIndex>,
    ) -> Option<BlockIndex>;

    /// Whether a successful selection moves the shared cursor
    fn advances_cursor(&self) -> bool {
        false
    }
}

/// Process allocation interface
pub trait Allocator {
    /// Place a process into a block chosen by `strategy`
    fn allocate(
        &mut self,
        process_id: &str,
        size: RawSize,
        strategy: Strategy,
    ) -> MemoryResult<Allocation>;

    /// Release a process; unknown ids are ignored
    fn deallocate(&mut self, process_id: &str) -> Option<Process>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Capture the full block and process state
    fn snapshot(&self) -> MemorySnapshot;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
