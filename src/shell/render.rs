/*!
 * Text Rendering
 * Memory bar, block listing, process table and statistics as plain text
 */

use crate::core::types::Size;
use crate::memory::{
    Allocation, MemoryBlock, MemoryManager, MemoryStats, Process, Strategy, StrategyDescription,
};

const ALLOCATED_CELL: char = '#';
const FREE_CELL: char = '.';
const BOUNDARY_CELL: char = '|';
const UNPARTITIONED_CELL: char = ' ';

/// Proportional bar of the whole capacity.
///
/// Each block starts with a boundary cell and is filled with `#` when
/// allocated or `.` when free. Space past the last block stays blank.
/// Blocks too small for a single cell are not drawn.
pub fn memory_bar(capacity: Size, blocks: &[MemoryBlock], width: usize) -> String {
    if capacity == 0 || width == 0 {
        return String::from("[]");
    }

    let mut cells = vec![UNPARTITIONED_CELL; width];
    let column = |offset: Size| -> usize {
        ((offset as u128 * width as u128) / capacity as u128).min(width as u128) as usize
    };

    let mut offset: Size = 0;
    for block in blocks {
        let start = column(offset);
        let end = column(offset.saturating_add(block.size));
        let fill = if block.allocated { ALLOCATED_CELL } else { FREE_CELL };
        for (i, cell) in cells[start..end].iter_mut().enumerate() {
            *cell = if i == 0 { BOUNDARY_CELL } else { fill };
        }
        offset = offset.saturating_add(block.size);
    }

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(cells);
    bar.push(']');
    bar
}

/// One line per block
pub fn block_line(block: &MemoryBlock) -> String {
    match (&block.occupant, block.allocated) {
        (Some(occupant), true) => format!(
            "Block {}: {} ({} KB) - Fragmentation: {} KB",
            block.index, occupant, block.size, block.fragmentation
        ),
        _ => format!("Block {}: Free ({} KB)", block.index, block.size),
    }
}

/// Process table with header
pub fn process_table(processes: &[&Process]) -> String {
    if processes.is_empty() {
        return String::from("No processes allocated");
    }

    let id_width = processes
        .iter()
        .map(|p| p.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("Process ID".len());

    let mut lines = vec![format!(
        "{:<id_width$}  {:>8}  {:<8}  {}",
        "Process ID", "Size", "Block", "Algorithm"
    )];
    for process in processes {
        lines.push(format!(
            "{:<id_width$}  {:>8}  {:<8}  {}",
            process.id,
            format!("{} KB", process.requested_size),
            format!("Block {}", process.block_index),
            process.strategy
        ));
    }
    lines.join("\n")
}

/// Bar, block list and process table for the `show` command
pub fn memory_view(manager: &MemoryManager, bar_width: usize) -> String {
    if !manager.is_initialized() {
        return String::from("Memory not initialized");
    }

    let blocks = manager.blocks();
    let mut lines = vec![format!("Memory: {} KB", manager.capacity())];
    lines.push(memory_bar(manager.capacity(), blocks, bar_width));

    if blocks.is_empty() {
        lines.push(String::from("No memory blocks defined"));
    } else {
        lines.extend(blocks.iter().map(block_line));
    }

    if let Some(cursor) = manager.cursor() {
        lines.push(format!("Next Fit cursor: block {}", cursor));
    }

    lines.push(String::new());
    lines.push(process_table(&manager.processes()));
    lines.join("\n")
}

pub fn stats_view(stats: &MemoryStats) -> String {
    let largest = stats
        .largest_free_block
        .map_or_else(|| String::from("none"), |size| format!("{} KB", size));

    [
        format!("Capacity:               {} KB", stats.capacity),
        format!("Partitioned:            {} KB", stats.partitioned),
        format!("Unpartitioned:          {} KB", stats.unpartitioned),
        format!("Requested by processes: {} KB", stats.used),
        format!("Internal fragmentation: {} KB", stats.internal_fragmentation),
        format!(
            "Blocks:                 {} allocated, {} free",
            stats.allocated_blocks, stats.free_blocks
        ),
        format!("Largest free block:     {}", largest),
        format!(
            "Usage:                  {:.1}% ({})",
            stats.usage_percentage,
            stats.memory_pressure()
        ),
    ]
    .join("\n")
}

pub fn allocation_line(
    process_id: &str,
    size: Size,
    strategy: Strategy,
    allocation: &Allocation,
) -> String {
    format!(
        "Allocated process {} ({} KB) to block {} using {} - Fragmentation: {} KB",
        process_id, size, allocation.block_index, strategy, allocation.fragmentation
    )
}

pub fn explanation(strategy: Strategy) -> String {
    let description = strategy.describe();
    let mut lines = vec![
        format!("{} Algorithm", strategy),
        description.summary.to_string(),
    ];
    lines.extend(description.points.iter().map(|point| format!("  - {}", point)));
    lines.push(format!("Time Complexity: {}", StrategyDescription::COMPLEXITY));
    lines.join("\n")
}
