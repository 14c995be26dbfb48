/*!
 * Process Operations
 * Process registry, lookups and statistics
 */

pub mod process_ops;
mod registry;

pub(super) use registry::ProcessRegistry;
