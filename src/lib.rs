//! Public-facing crate root – re-exports.
//!
//! A single-line terminal progress meter in the tqdm mould: throttled
//! refresh with EMA-smoothed throughput, and sub-character bar resolution
//! via glyph ramps.
//!
//! ```no_run
//! use block_meter::{MeterConfig, MeterIterator};
//!
//! let cfg = MeterConfig::builder().description("crunch").build();
//! let sum: u64 = (0..10_000u64).metered_with(cfg).sum();
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    color::{Color, TrueColor, colorize},
    config::{MeterConfig, MeterConfigBuilder},
    format::{ema, format_interval, format_sizeof, pad_float},
};

pub use self::render::{Bar, Charset, Meter, MeterIter, MeterIterator};
