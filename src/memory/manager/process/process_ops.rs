/*!
 * Process Memory Operations
 * Process lookups and memory statistics
 */

use super::super::super::types::{MemorySnapshot, MemoryStats, Process};
use super::super::MemoryManager;
use crate::core::types::Size;

impl MemoryManager {
    /// Look up a live process by id
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.get(id)
    }

    /// Live processes in allocation order
    pub fn processes(&self) -> Vec<&Process> {
        self.processes.ordered()
    }

    /// Get detailed memory statistics
    pub fn stats(&self) -> MemoryStats {
        let blocks = self.store.as_slice();
        let partitioned = self.store.total_size();

        let mut occupied: Size = 0;
        let mut internal_fragmentation: Size = 0;
        let mut allocated_blocks = 0;
        let mut largest_free_block: Option<Size> = None;

        for block in blocks {
            if block.is_allocated() {
                allocated_blocks += 1;
                occupied += block.size;
                internal_fragmentation += block.fragmentation;
            } else {
                largest_free_block =
                    Some(largest_free_block.map_or(block.size, |s| s.max(block.size)));
            }
        }

        let usage_percentage = if partitioned == 0 {
            0.0
        } else {
            (occupied as f64 / partitioned as f64) * 100.0
        };

        MemoryStats {
            capacity: self.capacity,
            partitioned,
            unpartitioned: self.capacity.saturating_sub(partitioned),
            used: self.processes.used(),
            internal_fragmentation,
            allocated_blocks,
            free_blocks: blocks.len() - allocated_blocks,
            largest_free_block,
            usage_percentage,
        }
    }

    /// Capture the full state for rendering or export
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            capacity: self.capacity,
            blocks: self.store.as_slice().to_vec(),
            processes: self.processes().into_iter().cloned().collect(),
            cursor: self.cursor,
            stats: self.stats(),
        }
    }
}
