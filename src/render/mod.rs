pub mod bar;
pub mod iter;
pub mod meter;

pub use bar::{Bar, Charset};
pub use iter::{MeterIter, MeterIterator};
pub use meter::Meter;
