//! Meter state machine: throttled updates, rate smoothing and the
//! single-line display protocol.

use std::io::{self, Write};
use std::time::Instant;

use crate::core::{
    color::{Color, colorize},
    config::MeterConfig,
    constants::{CLEAR_LINE, CURSOR_UP, LINE_START},
    format::{ema, format_interval, format_sizeof, pad_float},
};
use crate::render::bar::{Bar, Charset};

/// Stateful progress meter bound to an output sink.
///
/// The sink is written to on every render but never closed; write errors
/// are swallowed so a broken pipe can not abort the caller's iteration.
pub struct Meter<W: Write = io::Stdout> {
    out: W,

    // configuration
    description: String,
    total: Option<f64>,
    column_count: usize,
    min_interval: f64,
    min_increment: f64,
    charset: Charset,
    unit: String,
    unit_scale: bool,
    smoothing: f64,
    initial: f64,
    unit_divisor: f64,
    color: Option<(u8, u8, u8)>,

    // progress state
    n: f64,
    last_print_n: f64,
    start_time: Instant,
    last_print_time: Instant,
    avg_time: Option<f64>,
    has_rendered: bool,
    closed: bool,
}

impl Meter<io::Stdout> {
    /// Meter writing to stdout.
    #[must_use]
    pub fn new(config: MeterConfig) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Meter<W> {
    /// Meter writing to an arbitrary sink.  Nothing is rendered until the
    /// first throttle-passing [`update`](Self::update) or [`close`](Self::close).
    pub fn with_output(config: MeterConfig, out: W) -> Self {
        let now = Instant::now();
        let mut meter = Self {
            out,
            description: String::new(),
            total: config.total,
            column_count: config.column_count,
            min_interval: config.min_interval,
            min_increment: config.min_increment,
            charset: Charset::from_ascii_flag(config.ascii),
            unit: config.unit,
            unit_scale: config.unit_scale,
            smoothing: config.smoothing.clamp(0.0, 1.0),
            initial: config.initial,
            unit_divisor: config.unit_divisor,
            color: config.color.as_ref().and_then(Color::rgb),
            n: 0.0,
            last_print_n: 0.0,
            start_time: now,
            last_print_time: now,
            avg_time: None,
            has_rendered: false,
            closed: false,
        };
        meter.set_description(config.description.as_deref());
        meter
    }

    /// Set or replace the label shown before the bar.
    ///
    /// Surrounding whitespace and any trailing run of colons is stripped;
    /// `None` clears the label.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description
            .map(|d| {
                d.trim()
                    .trim_end_matches(|c: char| c.is_whitespace() || c == ':')
                    .to_owned()
            })
            .unwrap_or_default();
    }

    /// Add `delta` units of finished work, rendering once both throttle
    /// thresholds have passed.  No-op after [`close`](Self::close).
    pub fn update(&mut self, delta: i64) {
        if self.closed {
            return;
        }
        if delta < 0 {
            // decrements rewind the throttle reference too
            self.last_print_n += delta as f64;
        }
        self.n += delta as f64;
        if self.n - self.last_print_n >= self.min_increment {
            let now = Instant::now();
            let delta_t = now.duration_since(self.last_print_time).as_secs_f64();
            if delta_t >= self.min_interval {
                let delta_n = self.n - self.last_print_n;
                if self.smoothing > 0.0 && delta_t > 0.0 && delta_n > 0.0 {
                    self.avg_time = Some(ema(delta_t / delta_n, self.avg_time, self.smoothing));
                }
                self.render();
                self.last_print_n = self.n;
                self.last_print_time = now;
            }
        }
    }

    /// Render the final state and stop accepting updates.  Idempotent.
    pub fn close(&mut self) {
        if !self.closed {
            self.render();
            self.closed = true;
        }
    }

    /// Snap the count to the configured total, then close.
    pub fn complete(&mut self) {
        if let Some(total) = self.total {
            self.n = total;
        }
        self.close();
    }

    /// Print `message` on its own line above the live meter line.
    pub fn write(&mut self, message: &str) {
        let body = self.apply_color(message);
        let _ = write!(self.out, "{CURSOR_UP}{CLEAR_LINE}{body}\n\n");
        let _ = self.out.flush();
    }

    // --- Accessors ---

    /// Current label.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cumulative unit count.
    #[must_use]
    pub fn count(&self) -> f64 {
        self.n
    }

    /// Configured expected unit count, if any.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// Whether the meter has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }

    // --- Rendering ---

    fn apply_color(&self, line: &str) -> String {
        match self.color {
            Some(rgb) => colorize(rgb, line),
            None => line.to_owned(),
        }
    }

    fn render(&mut self) {
        let meter = self.format_meter();
        let line = self.apply_color(&meter);
        let up = if self.has_rendered { CURSOR_UP } else { "" };
        let _ = writeln!(self.out, "{up}{LINE_START}{CLEAR_LINE}{line}");
        let _ = self.out.flush();
        self.has_rendered = true;
    }

    /// Compose the full display line.
    ///
    /// Overshot (`n >= total + 0.5`) or non-positive totals render as
    /// indeterminate for this line only; the configured total is kept.
    fn format_meter(&self) -> String {
        let total = self.total.filter(|&t| t > 0.0 && self.n < t + 0.5);
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let elapsed_string = format_interval(elapsed);

        let (rate, inv_rate) = match self.avg_time {
            Some(avg) => (Some(1.0 / avg), Some(avg)),
            None if elapsed > 0.0 => {
                let r = (self.n - self.initial) / elapsed;
                let inv = if r > 0.0 { Some(1.0 / r) } else { None };
                (Some(r), inv)
            }
            None => (None, None),
        };

        let rate_string = match rate {
            Some(r) => format!("{}{}/s", self.scale_rate(r), self.unit),
            None => format!("?{}/s", self.unit),
        };
        let inv_rate_string = match inv_rate {
            Some(r) => format!("{}s/{}", self.scale_rate(r), self.unit),
            None => format!("?s/{}", self.unit),
        };

        let n_string = self.scale_count(self.n);
        let total_string = total.map_or_else(|| "?".to_owned(), |t| self.scale_count(t));

        let remaining_string = match (rate, total) {
            (Some(r), Some(t)) if r > 0.0 => format_interval((t - self.n) / r),
            _ => "?".to_owned(),
        };

        let mut left = if self.description.is_empty() {
            String::new()
        } else {
            format!("{}: ", self.description)
        };
        let chosen_rate = if rate.unwrap_or(0.0) > 1.0 {
            &rate_string
        } else {
            &inv_rate_string
        };
        let right =
            format!("| {n_string}/{total_string} [{elapsed_string}<{remaining_string}, {chosen_rate}]");

        match total {
            Some(t) => {
                let frac = self.n / t;
                let percentage = frac * 100.0;
                let reserved = right.chars().count() + left.chars().count();
                let bar_length = self.column_count.saturating_sub(reserved).max(1);
                let bar = Bar::new(frac, bar_length, self.charset).render();
                left.push_str(&pad_float(percentage, 3, 0, ' '));
                left.push_str("%|");
                format!("{left}{bar}{right}")
            }
            None => format!("{left}{right}"),
        }
    }

    fn scale_rate(&self, value: f64) -> String {
        if self.unit_scale {
            format_sizeof(value, self.unit_divisor)
        } else {
            pad_float(value, 5, 2, ' ')
        }
    }

    fn scale_count(&self, value: f64) -> String {
        if self.unit_scale {
            format_sizeof(value, self.unit_divisor)
        } else {
            pad_float(value, 0, 0, ' ')
        }
    }
}
