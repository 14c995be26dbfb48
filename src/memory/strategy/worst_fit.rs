/*!
 * Worst Fit
 */

use crate::core::types::{BlockIndex, Size};
use crate::memory::types::MemoryBlock;

/// Largest free block that can hold `size`; the lowest index wins a tie
pub(super) fn select(blocks: &[MemoryBlock], size: Size) -> Option<BlockIndex> {
    let mut worst: Option<(BlockIndex, Size)> = None;

    for (index, block) in blocks.iter().enumerate() {
        if !block.fits(size) {
            continue;
        }
        // Strictly larger only, so an equal block later in the list never replaces the first
        match worst {
            Some((_, worst_size)) if worst_size >= block.size => {}
            _ => worst = Some((index, block.size)),
        }
    }

    worst.map(|(index, _)| index)
}
