//! Iterator adapter driving a [`Meter`] as elements are produced.

use std::io::{self, Write};

use crate::core::config::MeterConfig;
use crate::render::meter::Meter;

/// Wraps an iterator and reports progress on every element.
///
/// The first element skips the meter update so the first rate sample spans
/// elements one and two rather than construction and element one.  On
/// exhaustion the last element is reported and the meter closed; both are
/// no-ops if the iterator is polled again.
pub struct MeterIter<I, W: Write = io::Stdout> {
    iter: I,
    meter: Meter<W>,
    first: bool,
}

impl<I: Iterator> MeterIter<I> {
    /// Wrap `iter` with a default-configured meter on stdout.
    #[must_use]
    pub fn new(iter: I) -> Self {
        Self::with_config(iter, MeterConfig::default())
    }

    /// Wrap `iter` with an explicit configuration, meter on stdout.
    #[must_use]
    pub fn with_config(iter: I, config: MeterConfig) -> Self {
        Self::with_output(iter, config, io::stdout())
    }
}

impl<I: Iterator, W: Write> MeterIter<I, W> {
    /// Wrap `iter`, writing the meter to an arbitrary sink.
    ///
    /// An unset total is seeded from the iterator's size hint when the
    /// hint is exact; a configured total always wins.
    pub fn with_output(iter: I, mut config: MeterConfig, out: W) -> Self {
        if config.total.is_none() {
            config.total = exact_size(&iter);
        }
        Self {
            meter: Meter::with_output(config, out),
            iter,
            first: true,
        }
    }

    /// Label passthrough to the underlying meter.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.meter.set_description(description);
    }

    /// The wrapped meter, for inspection.
    #[must_use]
    pub fn as_meter(&self) -> &Meter<W> {
        &self.meter
    }
}

/// `size_hint` bounds collapse to an exact length only when they agree.
fn exact_size<I: Iterator>(iter: &I) -> Option<f64> {
    let (lower, upper) = iter.size_hint();
    match upper {
        Some(upper) if upper == lower => Some(upper as f64),
        _ => None,
    }
}

impl<I: Iterator, W: Write> Iterator for MeterIter<I, W> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(element) => {
                // postpone the first update so the ETA starts from a real sample
                if self.first {
                    self.first = false;
                } else {
                    self.meter.update(1);
                }
                Some(element)
            }
            None => {
                // the final element is still unreported at this point
                self.meter.update(1);
                self.meter.close();
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension methods wrapping any iterator in a [`MeterIter`].
pub trait MeterIterator: Iterator + Sized {
    /// Progress with the default configuration.
    fn metered(self) -> MeterIter<Self>;
    /// Progress with an explicit configuration.
    fn metered_with(self, config: MeterConfig) -> MeterIter<Self>;
}

impl<I: Iterator> MeterIterator for I {
    fn metered(self) -> MeterIter<Self> {
        MeterIter::new(self)
    }

    fn metered_with(self, config: MeterConfig) -> MeterIter<Self> {
        MeterIter::with_config(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink_iter<I: Iterator>(iter: I) -> MeterIter<I, Vec<u8>> {
        MeterIter::with_output(iter, MeterConfig::default(), Vec::new())
    }

    #[test]
    fn elements_pass_through_in_order() {
        let fruits = ["apple", "pear", "banana", "orange"];
        let collected: Vec<_> = sink_iter(fruits.iter().copied()).collect();
        assert_eq!(collected, fruits);
    }

    #[test]
    fn wrapped_sum_is_unchanged() {
        let n = 100u64;
        let squares: Vec<u64> = (0..n).map(|i| i * i).collect();
        let sum: u64 = sink_iter(squares.into_iter()).sum();
        assert_eq!(sum, (n - 1) * n * (2 * n - 1) / 6);
    }

    #[test]
    fn total_is_seeded_from_exact_size_hint() {
        let wrapped = sink_iter(0..7);
        assert_eq!(wrapped.as_meter().total(), Some(7.0));

        // filtered iterators only know an upper bound
        let filtered = sink_iter((0..7).filter(|i| i % 2 == 0));
        assert_eq!(filtered.as_meter().total(), None);
    }

    #[test]
    fn configured_total_wins_over_size_hint() {
        let wrapped = MeterIter::with_output(
            0..7,
            MeterConfig::builder().total(99.0).build(),
            Vec::new(),
        );
        assert_eq!(wrapped.as_meter().total(), Some(99.0));
    }

    #[test]
    fn exhaustion_renders_once_and_closes() {
        let mut wrapped = sink_iter(0..3);
        while wrapped.next().is_some() {}
        assert!(wrapped.as_meter().is_closed());
        assert_eq!(wrapped.as_meter().count(), 3.0);
        let rendered = wrapped.as_meter().output().len();
        assert!(rendered > 0);

        // polling past the end changes nothing
        assert!(wrapped.next().is_none());
        assert!(wrapped.next().is_none());
        assert_eq!(wrapped.as_meter().output().len(), rendered);
        assert_eq!(wrapped.as_meter().count(), 3.0);
    }

    #[test]
    fn empty_iterator_still_closes() {
        let mut wrapped = sink_iter(std::iter::empty::<u8>());
        assert!(wrapped.next().is_none());
        assert!(wrapped.as_meter().is_closed());
        assert!(!wrapped.as_meter().output().is_empty());
    }

    #[test]
    fn description_passes_through() {
        let mut wrapped = sink_iter(0..3);
        wrapped.set_description(Some("loading : "));
        assert_eq!(wrapped.as_meter().description(), "loading");
    }

    #[test]
    fn extension_trait_wraps_in_method_position() {
        let sum: u32 = (1..=4).metered().sum();
        assert_eq!(sum, 10);
    }
}
