/*!
 * Process Registry
 * Live processes keyed by their user-supplied id
 */

use crate::core::types::{ProcessId, Size};
use crate::memory::types::Process;
use ahash::RandomState;
use std::collections::HashMap;

/// Registry of live processes
///
/// Each entry references exactly one block; the block itself is owned by the store.
#[derive(Debug, Default)]
pub(in crate::memory::manager) struct ProcessRegistry {
    processes: HashMap<ProcessId, Process, RandomState>,
    next_sequence: u64,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self {
            processes: HashMap::with_hasher(RandomState::new()),
            next_sequence: 0,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.processes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.get(id)
    }

    /// Sequence number for the next registered process
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    pub fn insert(&mut self, process: Process) {
        self.processes.insert(process.id.clone(), process);
    }

    pub fn remove(&mut self, id: &str) -> Option<Process> {
        self.processes.remove(id)
    }

    pub fn clear(&mut self) {
        self.processes.clear();
        self.next_sequence = 0;
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Live processes in allocation order
    pub fn ordered(&self) -> Vec<&Process> {
        let mut processes: Vec<&Process> = self.processes.values().collect();
        processes.sort_by_key(|process| process.sequence);
        processes
    }

    /// Sum of requested sizes
    pub fn used(&self) -> Size {
        self.processes
            .values()
            .map(|process| process.requested_size)
            .sum()
    }
}
