/*!
 * Next Fit
 *
 * First Fit that resumes after the block chosen by the previous Next Fit
 * allocation, wrapping around the list exactly once. The cursor block itself
 * is examined last. Blocks freed behind the cursor are only reached after
 * the scan wraps.
 */

use super::first_fit;
use crate::core::types::{BlockIndex, Size};
use crate::memory::types::MemoryBlock;

pub(super) fn select(
    blocks: &[MemoryBlock],
    size: Size,
    cursor: Option<BlockIndex>,
) -> Option<BlockIndex> {
    let len = blocks.len();
    if len == 0 {
        return None;
    }

    let Some(last) = cursor else {
        return first_fit::select(blocks, size);
    };

    let start = (last + 1) % len;
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&index| blocks[index].fits(size))
}
