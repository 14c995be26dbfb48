/*!
 * Memory Management
 *
 * Fixed-partition contiguous allocation over a single address space.
 *
 * ## Model
 *
 * - **Capacity**: total memory in KB, set by `initialize`
 * - **Blocks**: an ordered partition of that capacity; sizes are fixed once created
 * - **Processes**: each live process occupies exactly one whole block; the
 *   unused remainder of the block is recorded as internal fragmentation
 * - **Cursor**: the block chosen by the last Next Fit allocation
 *
 * Blocks are never split, merged or compacted. An oversized block is handed
 * out whole.
 *
 * ## Atomicity
 *
 * Every operation validates before mutating, so a rejected request leaves
 * blocks, processes and cursor exactly as they were.
 */

mod allocator;
mod process;
mod storage;

use super::strategy::Strategy;
use super::traits::{Allocator, MemoryInfo};
use super::types::*;
use crate::core::types::{BlockIndex, RawSize, Size};
use process::ProcessRegistry;
use storage::BlockStore;
use tracing::{info, warn};

/// Memory manager
///
/// Owns all simulator state: capacity, block store, process registry and the
/// Next Fit cursor. It is the only writer of that state.
#[derive(Debug)]
pub struct MemoryManager {
    capacity: Size,
    store: BlockStore,
    processes: ProcessRegistry,
    cursor: Option<BlockIndex>,
}

impl MemoryManager {
    /// Create an uninitialized manager (capacity 0, no blocks)
    pub fn new() -> Self {
        Self {
            capacity: 0,
            store: BlockStore::new(),
            processes: ProcessRegistry::new(),
            cursor: None,
        }
    }

    /// Create a manager already initialized to `capacity` KB
    pub fn with_capacity(capacity: RawSize) -> MemoryResult<Self> {
        let mut manager = Self::new();
        manager.initialize(capacity)?;
        Ok(manager)
    }

    /// Set the memory capacity, discarding blocks, processes and cursor
    pub fn initialize(&mut self, capacity: RawSize) -> MemoryResult<()> {
        if capacity <= 0 {
            warn!("Rejected memory initialization with capacity {}", capacity);
            return Err(MemoryError::InvalidCapacity(capacity));
        }

        self.capacity = capacity as Size;
        self.store.clear();
        self.processes.clear();
        self.cursor = None;

        info!("Memory initialized with size {} KB", self.capacity);
        Ok(())
    }

    /// Replace the block partition.
    ///
    /// Non-positive sizes are dropped. On success all processes are released
    /// and the cursor is unset.
    pub fn define_partition(&mut self, sizes: &[RawSize]) -> MemoryResult<&[MemoryBlock]> {
        let total = match self.store.partition(self.capacity, sizes) {
            Ok(total) => total,
            Err(e) => {
                warn!("Rejected partition {:?}: {}", sizes, e);
                return Err(e);
            }
        };

        self.processes.clear();
        self.cursor = None;

        info!(
            blocks = self.store.len(),
            total_kb = total,
            capacity_kb = self.capacity,
            "Created memory blocks"
        );
        Ok(self.store.as_slice())
    }

    /// Clear blocks, processes and cursor; capacity is kept
    pub fn reset(&mut self) {
        let released = self.processes.len();
        self.store.clear();
        self.processes.clear();
        self.cursor = None;
        info!("Cleared all blocks ({} processes released)", released);
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    pub fn is_initialized(&self) -> bool {
        self.capacity > 0
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        self.store.as_slice()
    }

    pub fn block(&self, index: BlockIndex) -> Option<&MemoryBlock> {
        self.store.as_slice().get(index)
    }

    /// Index of the last Next Fit allocation, if any
    pub fn cursor(&self) -> Option<BlockIndex> {
        self.cursor
    }
}

impl Allocator for MemoryManager {
    fn allocate(
        &mut self,
        process_id: &str,
        size: RawSize,
        strategy: Strategy,
    ) -> MemoryResult<Allocation> {
        MemoryManager::allocate(self, process_id, size, strategy)
    }

    fn deallocate(&mut self, process_id: &str) -> Option<Process> {
        MemoryManager::deallocate(self, process_id)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn snapshot(&self) -> MemorySnapshot {
        MemoryManager::snapshot(self)
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}
