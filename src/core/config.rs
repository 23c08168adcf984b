//! Run-time meter configuration + fluent builder.

use crate::core::{
    color::Color,
    constants::{
        DEFAULT_COLUMN_COUNT, DEFAULT_MIN_INCREMENT, DEFAULT_MIN_INTERVAL, DEFAULT_SMOOTHING,
        DEFAULT_UNIT, DEFAULT_UNIT_DIVISOR,
    },
};

/// Immutable parameters handed to a [`Meter`](crate::Meter).
///
/// Every field has a default; the builder exists so call sites only name
/// what they change.
#[derive(Debug, Clone)]
pub struct MeterConfig {
    /// Label prefix shown before the bar
    pub description: Option<String>,
    /// Expected unit count; absent means indeterminate (no bar, no ETA)
    pub total: Option<f64>,
    /// Total rendered line width target
    pub column_count: usize,
    /// Minimum wall-clock seconds between renders
    pub min_interval: f64,
    /// Minimum accumulated units between renders
    pub min_increment: f64,
    /// 11-level ASCII ramp instead of the 9-level block-glyph ramp
    pub ascii: bool,
    /// Unit label in rate strings
    pub unit: String,
    /// SI-magnitude formatting of counts and rates
    pub unit_scale: bool,
    /// EMA weight for rate samples, clamped to `[0, 1]` at construction
    pub smoothing: f64,
    /// Starting count offset; feeds the elapsed-based rate fallback
    pub initial: f64,
    /// Divisor used by SI-magnitude formatting
    pub unit_divisor: f64,
    /// Wraps the whole output line in an ANSI 24-bit colour
    pub color: Option<Color>,
}

impl MeterConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> MeterConfigBuilder {
        MeterConfigBuilder::default()
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            description: None,
            total: None,
            column_count: DEFAULT_COLUMN_COUNT,
            min_interval: DEFAULT_MIN_INTERVAL,
            min_increment: DEFAULT_MIN_INCREMENT,
            ascii: false,
            unit: DEFAULT_UNIT.to_owned(),
            unit_scale: false,
            smoothing: DEFAULT_SMOOTHING,
            initial: 0.0,
            unit_divisor: DEFAULT_UNIT_DIVISOR,
            color: None,
        }
    }
}

/// Fluent builder over [`MeterConfig`]; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct MeterConfigBuilder {
    cfg: MeterConfig,
}

impl MeterConfigBuilder {
    #[inline]
    #[must_use]
    pub fn description(mut self, d: impl Into<String>) -> Self {
        self.cfg.description = Some(d.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn total(mut self, total: f64) -> Self {
        self.cfg.total = Some(total);
        self
    }
    #[inline]
    #[must_use]
    pub fn column_count(mut self, columns: usize) -> Self {
        self.cfg.column_count = columns;
        self
    }
    #[inline]
    #[must_use]
    pub fn min_interval(mut self, seconds: f64) -> Self {
        self.cfg.min_interval = seconds;
        self
    }
    #[inline]
    #[must_use]
    pub fn min_increment(mut self, units: f64) -> Self {
        self.cfg.min_increment = units;
        self
    }
    #[inline]
    #[must_use]
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.cfg.ascii = ascii;
        self
    }
    #[inline]
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.cfg.unit = unit.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn unit_scale(mut self, scale: bool) -> Self {
        self.cfg.unit_scale = scale;
        self
    }
    #[inline]
    #[must_use]
    pub fn smoothing(mut self, alpha: f64) -> Self {
        self.cfg.smoothing = alpha;
        self
    }
    #[inline]
    #[must_use]
    pub fn initial(mut self, count: f64) -> Self {
        self.cfg.initial = count;
        self
    }
    #[inline]
    #[must_use]
    pub fn unit_divisor(mut self, divisor: f64) -> Self {
        self.cfg.unit_divisor = divisor;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.cfg.color = Some(color);
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, color: Option<Color>) -> Self {
        self.cfg.color = color;
        self
    }

    /// Finalise; the smoothing weight is clamped to `[0, 1]` here.
    #[must_use]
    pub fn build(mut self) -> MeterConfig {
        self.cfg.smoothing = self.cfg.smoothing.clamp(0.0, 1.0);
        self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_defaults() {
        let cfg = MeterConfig::builder().build();
        assert_eq!(cfg.column_count, DEFAULT_COLUMN_COUNT);
        assert_eq!(cfg.unit, "it");
        assert!(cfg.total.is_none());
        assert!(cfg.color.is_none());
    }

    #[test]
    fn builder_clamps_smoothing() {
        assert_eq!(MeterConfig::builder().smoothing(2.5).build().smoothing, 1.0);
        assert_eq!(MeterConfig::builder().smoothing(-0.5).build().smoothing, 0.0);
        let cfg = MeterConfig::builder().smoothing(0.42).build();
        assert!((cfg.smoothing - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = MeterConfig::builder()
            .description("work")
            .total(128.0)
            .column_count(40)
            .ascii(true)
            .unit("B")
            .unit_scale(true)
            .unit_divisor(1024.0)
            .color(Color::Cyan)
            .build();
        assert_eq!(cfg.description.as_deref(), Some("work"));
        assert_eq!(cfg.total, Some(128.0));
        assert_eq!(cfg.column_count, 40);
        assert!(cfg.ascii);
        assert_eq!(cfg.unit, "B");
        assert!(cfg.unit_scale);
        assert_eq!(cfg.unit_divisor, 1024.0);
        assert_eq!(cfg.color, Some(Color::Cyan));
    }
}
