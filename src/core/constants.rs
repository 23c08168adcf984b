//! A collection of constants.

/// Move the cursor to column 0 of the current line
pub const LINE_START: &str = "\x1b[G";
/// Clear from the cursor to the end of the line
pub const CLEAR_LINE: &str = "\x1b[K";
/// Move the cursor up one line, keeping the column
pub const CURSOR_UP: &str = "\x1b[1A";

/// Rendered line width target when the caller supplies none
pub const DEFAULT_COLUMN_COUNT: usize = 80;
/// Minimum wall-clock seconds between two renders
pub const DEFAULT_MIN_INTERVAL: f64 = 0.1;
/// Minimum accumulated units between two renders
pub const DEFAULT_MIN_INCREMENT: f64 = 1.0;
/// Weight folding a new rate sample into the running average
pub const DEFAULT_SMOOTHING: f64 = 0.3;
/// Unit label shown in rate and throughput strings
pub const DEFAULT_UNIT: &str = "it";
/// Divisor between SI magnitude prefixes
pub const DEFAULT_UNIT_DIVISOR: f64 = 1000.0;
