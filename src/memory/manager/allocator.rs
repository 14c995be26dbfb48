/*!
 * Memory Allocator Implementation
 * Allocation and deallocation logic
 */

use super::super::strategy::Strategy;
use super::super::traits::{MemoryInfo, PlacementPolicy};
use super::super::types::{Allocation, MemoryError, MemoryPressure, MemoryResult, Process};
use super::MemoryManager;
use crate::core::types::{RawSize, Size};
use tracing::{debug, info, warn};

impl MemoryManager {
    /// Allocate a whole block to a process using the given strategy.
    ///
    /// Checks run in order: process id, duplicate id, size, block presence,
    /// then placement. Nothing changes unless every check passes. Only Next Fit
    /// moves the cursor.
    pub fn allocate(
        &mut self,
        process_id: &str,
        size: RawSize,
        strategy: Strategy,
    ) -> MemoryResult<Allocation> {
        if process_id.trim().is_empty() {
            warn!("Rejected allocation with empty process ID");
            return Err(MemoryError::InvalidProcessId(process_id.to_string()));
        }

        if self.processes.contains(process_id) {
            warn!("Rejected allocation: process {} already exists", process_id);
            return Err(MemoryError::DuplicateProcessId(process_id.to_string()));
        }

        if size <= 0 {
            warn!(
                "Rejected allocation for process {}: invalid size {}",
                process_id, size
            );
            return Err(MemoryError::InvalidSize(size));
        }
        let size = size as Size;

        if self.store.is_empty() {
            warn!(
                "Rejected allocation for process {}: no memory blocks defined",
                process_id
            );
            return Err(MemoryError::NoBlocksDefined);
        }

        let Some(index) = strategy.select_block(self.store.as_slice(), size, self.cursor) else {
            warn!(
                "Cannot allocate process {} ({} KB) using {}",
                process_id, size, strategy
            );
            return Err(MemoryError::NoSuitableBlock {
                process_id: process_id.to_string(),
                size,
                strategy,
            });
        };

        let block_size = self.store.get(index).size;
        let fragmentation = block_size - size;
        debug!(
            strategy = strategy.tag(),
            block = index,
            block_kb = block_size,
            request_kb = size,
            "Strategy selected block"
        );

        self.store.mark_allocated(index, process_id, fragmentation);

        let sequence = self.processes.next_sequence();
        self.processes.insert(Process {
            id: process_id.to_string(),
            requested_size: size,
            block_index: index,
            strategy,
            sequence,
        });

        if strategy.advances_cursor() {
            debug!(from = ?self.cursor, to = index, "Next Fit cursor moved");
            self.cursor = Some(index);
        }

        match self.check_memory_pressure() {
            Some(level) => warn!(
                "Memory pressure {}: allocated block {} ({} KB) to process {} ({} KB requested, {} KB fragmentation)",
                level, index, block_size, process_id, size, fragmentation
            ),
            None => info!(
                "Allocated block {} ({} KB) to process {} using {} ({} KB fragmentation)",
                index, block_size, process_id, strategy, fragmentation
            ),
        }

        Ok(Allocation {
            block_index: index,
            fragmentation,
        })
    }

    /// Release a process and free its block.
    ///
    /// Unknown ids are a silent no-op. The cursor is left where it is.
    pub fn deallocate(&mut self, process_id: &str) -> Option<Process> {
        let Some(process) = self.processes.remove(process_id) else {
            debug!("Deallocation of unknown process {} ignored", process_id);
            return None;
        };

        self.store.mark_free(process.block_index);
        info!(
            "Deallocated process {} ({} KB) from block {}",
            process.id, process.requested_size, process.block_index
        );

        Some(process)
    }

    /// Pressure level once allocated blocks cover at least 60% of the partition
    pub(super) fn check_memory_pressure(&self) -> Option<MemoryPressure> {
        match self.pressure() {
            MemoryPressure::Low => None,
            level => Some(level),
        }
    }
}
