/*!
 * Memory Manager Tests
 * Allocation scenarios, validation order and all-or-nothing failures
 */

use placement_sim::memory::{
    Allocation, Allocator, MemoryError, MemoryInfo, MemoryManager, PartitionFault, Strategy,
};
use pretty_assertions::assert_eq;

fn partitioned(capacity: i64, sizes: &[i64]) -> MemoryManager {
    let mut mem_mgr = MemoryManager::with_capacity(capacity).unwrap();
    mem_mgr.define_partition(sizes).unwrap();
    mem_mgr
}

#[test]
fn test_memory_manager_initialization() {
    let mem_mgr = MemoryManager::with_capacity(100).unwrap();
    let stats = mem_mgr.stats();

    assert_eq!(stats.capacity, 100);
    assert_eq!(stats.partitioned, 0);
    assert_eq!(stats.used, 0);
    assert!(mem_mgr.blocks().is_empty());
}

#[test]
fn test_invalid_capacity() {
    assert_eq!(
        MemoryManager::with_capacity(0).unwrap_err(),
        MemoryError::InvalidCapacity(0)
    );
    assert_eq!(
        MemoryManager::with_capacity(-1).unwrap_err(),
        MemoryError::InvalidCapacity(-1)
    );
}

#[test]
fn test_partition_sum_never_exceeds_capacity() {
    let mut mem_mgr = MemoryManager::with_capacity(100).unwrap();

    assert_eq!(
        mem_mgr.define_partition(&[60, 41]).map(|b| b.len()),
        Err(MemoryError::InvalidPartition(
            PartitionFault::ExceedsCapacity {
                total: 101,
                capacity: 100
            }
        ))
    );

    let blocks = mem_mgr.define_partition(&[60, 40]).unwrap();
    assert_eq!(blocks.iter().map(|b| b.size).sum::<u64>(), 100);
}

#[test]
fn test_first_fit_walkthrough() {
    let mut mem_mgr = partitioned(100, &[20, 30, 50]);

    assert_eq!(
        mem_mgr.allocate("P1", 10, Strategy::FirstFit),
        Ok(Allocation {
            block_index: 0,
            fragmentation: 10
        })
    );
    assert_eq!(
        mem_mgr.allocate("P2", 25, Strategy::FirstFit),
        Ok(Allocation {
            block_index: 1,
            fragmentation: 5
        })
    );

    let block = mem_mgr.block(1).unwrap();
    assert!(block.allocated);
    assert_eq!(block.occupant.as_deref(), Some("P2"));

    let process = mem_mgr.process("P2").unwrap();
    assert_eq!(process.requested_size, 25);
    assert_eq!(process.block_index, 1);
    assert_eq!(process.strategy, Strategy::FirstFit);
}

#[test]
fn test_strategies_on_same_partition() {
    let cases = [
        (Strategy::FirstFit, 25, 1, 5),
        (Strategy::BestFit, 25, 1, 5),
        (Strategy::WorstFit, 15, 2, 35),
        (Strategy::NextFit, 25, 1, 5),
    ];

    for (strategy, size, block_index, fragmentation) in cases {
        let mut mem_mgr = partitioned(100, &[20, 30, 50]);
        let allocation = mem_mgr.allocate("P", size, strategy).unwrap();
        assert_eq!(
            allocation,
            Allocation {
                block_index,
                fragmentation
            },
            "{} with {} KB",
            strategy,
            size
        );
    }
}

#[test]
fn test_next_fit_consecutive_allocations() {
    let mut mem_mgr = partitioned(100, &[10, 10, 10]);
    assert_eq!(mem_mgr.cursor(), None);

    mem_mgr.allocate("P1", 10, Strategy::NextFit).unwrap();
    assert_eq!(mem_mgr.cursor(), Some(0));

    mem_mgr.allocate("P2", 10, Strategy::NextFit).unwrap();
    assert_eq!(mem_mgr.cursor(), Some(1));
}

#[test]
fn test_no_suitable_block_leaves_state_untouched() {
    let mut mem_mgr = partitioned(100, &[20, 30, 50]);
    mem_mgr.allocate("P1", 10, Strategy::NextFit).unwrap();
    let before = mem_mgr.snapshot();

    let result = mem_mgr.allocate("P2", 200, Strategy::WorstFit);
    assert!(matches!(result, Err(MemoryError::NoSuitableBlock { .. })));

    let after = mem_mgr.snapshot();
    assert_eq!(after.blocks, before.blocks);
    assert_eq!(after.processes, before.processes);
    assert_eq!(after.cursor, before.cursor);
}

#[test]
fn test_validation_order() {
    let mut mem_mgr = MemoryManager::with_capacity(100).unwrap();

    // No blocks yet, but the size is checked first
    assert_eq!(
        mem_mgr.allocate("P1", 0, Strategy::FirstFit),
        Err(MemoryError::InvalidSize(0))
    );
    assert_eq!(
        mem_mgr.allocate("P1", 5, Strategy::FirstFit),
        Err(MemoryError::NoBlocksDefined)
    );
}

#[test]
fn test_deallocate_unknown_process() {
    let mut mem_mgr = partitioned(100, &[20, 30, 50]);
    let before = mem_mgr.snapshot();

    assert_eq!(mem_mgr.deallocate("never-allocated"), None);

    let after = mem_mgr.snapshot();
    assert_eq!(after.blocks, before.blocks);
    assert_eq!(after.processes, before.processes);
}

#[test]
fn test_trait_interfaces() {
    fn place<A: Allocator>(allocator: &mut A) -> Allocation {
        allocator.allocate("P1", 30, Strategy::BestFit).unwrap()
    }

    let mut mem_mgr = partitioned(100, &[20, 30, 50]);
    assert_eq!(place(&mut mem_mgr).block_index, 1);

    let info: &dyn MemoryInfo = &mem_mgr;
    assert_eq!(info.stats().allocated_blocks, 1);
    assert_eq!(info.snapshot().processes.len(), 1);
}
