/*!
 * Block Store
 * Ordered, fixed-size memory blocks and their occupancy
 */

use super::super::types::{MemoryBlock, MemoryError, MemoryResult, PartitionFault};
use crate::core::types::{BlockIndex, RawSize, Size};

/// Ordered sequence of memory blocks
///
/// Block sizes never change after `partition`; the whole list is replaced on
/// repartition or clear. Mutators trust the caller for bounds and state.
#[derive(Debug, Clone, Default)]
pub(super) struct BlockStore {
    blocks: Vec<MemoryBlock>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Replace the block list with one free block per positive size.
    ///
    /// Non-positive entries are dropped before validation. The store is left
    /// untouched when the partition is rejected.
    pub fn partition(&mut self, capacity: Size, sizes: &[RawSize]) -> MemoryResult<Size> {
        if capacity == 0 {
            return Err(MemoryError::InvalidPartition(
                PartitionFault::MemoryUninitialized,
            ));
        }

        let sizes: Vec<Size> = sizes
            .iter()
            .filter(|&&size| size > 0)
            .map(|&size| size as Size)
            .collect();

        if sizes.is_empty() {
            return Err(MemoryError::InvalidPartition(PartitionFault::Empty));
        }

        let total = sizes
            .iter()
            .fold(0 as Size, |sum, &size| sum.saturating_add(size));
        if total > capacity {
            return Err(MemoryError::InvalidPartition(
                PartitionFault::ExceedsCapacity { total, capacity },
            ));
        }

        self.blocks = sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| MemoryBlock::new(index, size))
            .collect();

        Ok(total)
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    #[inline]
    pub fn get(&self, index: BlockIndex) -> &MemoryBlock {
        &self.blocks[index]
    }

    pub fn mark_allocated(&mut self, index: BlockIndex, occupant: &str, fragmentation: Size) {
        self.blocks[index].occupy(occupant.to_string(), fragmentation);
    }

    pub fn mark_free(&mut self, index: BlockIndex) {
        self.blocks[index].free();
    }

    pub fn as_slice(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of all block sizes
    pub fn total_size(&self) -> Size {
        self.blocks.iter().map(|block| block.size).sum()
    }
}
