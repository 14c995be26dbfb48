/*!
 * Best Fit
 */

use crate::core::types::{BlockIndex, Size};
use crate::memory::types::MemoryBlock;

/// Smallest free block that can hold `size`; the lowest index wins a tie
pub(super) fn select(blocks: &[MemoryBlock], size: Size) -> Option<BlockIndex> {
    // min_by_key keeps the first of equal minima
    blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.fits(size))
        .min_by_key(|(_, block)| block.size)
        .map(|(index, _)| index)
}
