//! Demo driver: a manual update loop followed by a wrapped-iterator pass.

use std::{
    thread,
    time::{Duration, Instant},
};

use terminal_size::{Width, terminal_size};

use crate::{
    core::{color::Color, config::MeterConfig, constants::DEFAULT_COLUMN_COUNT},
    render::{iter::MeterIterator, meter::Meter},
};

use super::parse::Cli;

/// Terminal width when stdout is a tty, the default target otherwise.
fn column_count() -> usize {
    terminal_size().map_or(DEFAULT_COLUMN_COUNT, |(Width(w), _)| w as usize)
}

/// Accepts the named colors plus `#RRGGBB`; anything else means uncolored.
fn parse_color(s: &str) -> Option<Color> {
    Color::from_name(s).or_else(|| s.starts_with('#').then(|| Color::Hex(s.to_owned())))
}

pub fn demo(a: &Cli) {
    let config = MeterConfig::builder()
        .description(a.description.as_str())
        .total(a.iterations as f64)
        .column_count(column_count())
        .ascii(a.charset == "ascii")
        .smoothing(a.smoothing)
        .color_opt(parse_color(&a.color))
        .build();

    // manual updates
    let t0 = Instant::now();
    let mut meter = Meter::new(config.clone());
    for _ in 0..a.iterations {
        thread::sleep(Duration::from_millis(5));
        meter.update(1);
    }
    meter.close();

    // wrapped iteration
    let sum: u64 = (0..a.iterations).metered_with(config).sum();
    println!("Sum of the sequence : {sum}");

    if a.debug {
        eprintln!(
            "demo complete: {} iterations in {:.1} ms",
            a.iterations,
            t0.elapsed().as_secs_f64() * 1e3
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_argument_resolution() {
        assert_eq!(parse_color("green"), Some(Color::Green));
        assert_eq!(parse_color("#336699"), Some(Color::Hex("#336699".into())));
        assert_eq!(parse_color("plaid"), None);
    }
}
