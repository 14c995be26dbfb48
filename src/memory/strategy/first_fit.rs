/*!
 * First Fit
 */

use crate::core::types::{BlockIndex, Size};
use crate::memory::types::MemoryBlock;

/// Lowest-index free block that can hold `size`
pub(super) fn select(blocks: &[MemoryBlock], size: Size) -> Option<BlockIndex> {
    blocks.iter().position(|block| block.fits(size))
}
