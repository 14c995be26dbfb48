/*!
 * Block Reuse Test
 * Verifies that freed blocks return to the pool unchanged and are reused
 */

use placement_sim::memory::{MemoryManager, Strategy};
use pretty_assertions::assert_eq;

#[test]
fn test_freed_block_is_reused_by_first_fit() {
    let mut manager = MemoryManager::with_capacity(100).unwrap();
    manager.define_partition(&[20, 30, 50]).unwrap();

    manager.allocate("P1", 20, Strategy::FirstFit).unwrap();
    manager.allocate("P2", 30, Strategy::FirstFit).unwrap();
    manager.allocate("P3", 50, Strategy::FirstFit).unwrap();

    manager.deallocate("P2");
    let block = manager.block(1).unwrap();
    assert!(!block.allocated);
    assert_eq!(block.occupant, None);
    assert_eq!(block.fragmentation, 0);

    let reused = manager.allocate("P4", 5, Strategy::FirstFit).unwrap();
    assert_eq!(reused.block_index, 1);
    assert_eq!(reused.fragmentation, 25);
}

#[test]
fn test_blocks_are_never_split() {
    let mut manager = MemoryManager::with_capacity(100).unwrap();
    manager.define_partition(&[100]).unwrap();

    manager.allocate("P1", 1, Strategy::WorstFit).unwrap();
    assert_eq!(manager.blocks().len(), 1);
    assert_eq!(manager.block(0).unwrap().fragmentation, 99);

    // The remainder is fragmentation, not a free block
    assert!(manager.allocate("P2", 1, Strategy::FirstFit).is_err());
}

#[test]
fn test_allocate_deallocate_cycle_restores_blocks() {
    let mut manager = MemoryManager::with_capacity(256).unwrap();
    let original = manager.define_partition(&[64, 32, 128, 32]).unwrap().to_vec();

    for (round, strategy) in Strategy::ALL.into_iter().enumerate() {
        let id = format!("P{}", round);
        manager.allocate(&id, 30, strategy).unwrap();
        manager.deallocate(&id).unwrap();
        assert_eq!(manager.blocks(), original.as_slice(), "{}", strategy);
    }
}
