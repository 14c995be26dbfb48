/*!
 * System Limits and Constants
 *
 * Centralized location for simulator-wide limits, thresholds, and defaults.
 * Grouped by domain.
 */

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which pressure is reported as medium
pub const PRESSURE_MEDIUM_RATIO: f64 = 0.60;

/// Usage ratio at which pressure is reported as high
pub const PRESSURE_HIGH_RATIO: f64 = 0.80;

/// Usage ratio at which pressure is reported as critical
pub const PRESSURE_CRITICAL_RATIO: f64 = 0.95;

// =============================================================================
// RENDERING
// =============================================================================

/// Default width (in characters) of the text memory bar
pub const DEFAULT_BAR_WIDTH: usize = 60;

/// Narrowest bar that still shows block boundaries
pub const MIN_BAR_WIDTH: usize = 10;

/// Widest bar accepted from configuration
pub const MAX_BAR_WIDTH: usize = 200;

// =============================================================================
// SHELL
// =============================================================================

/// Lines starting with this marker are ignored by the command shell
pub const COMMENT_MARKER: char = '#';

/// Separator between block sizes in a partition definition
pub const BLOCK_SIZE_SEPARATOR: char = ',';
