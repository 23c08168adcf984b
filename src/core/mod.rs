//! Aggregates the configuration / formatting layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod format;

// re-export frequently-used items for convenience
pub use color::{Color, TrueColor, colorize};
pub use config::{MeterConfig, MeterConfigBuilder};
pub use constants::{
    DEFAULT_COLUMN_COUNT, DEFAULT_MIN_INCREMENT, DEFAULT_MIN_INTERVAL, DEFAULT_SMOOTHING,
    DEFAULT_UNIT, DEFAULT_UNIT_DIVISOR,
};
pub use format::{ema, format_interval, format_sizeof, pad_float};
