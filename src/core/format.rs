//! Duration, magnitude and fixed-point formatting + the rate EMA.
//! Pure functions, no external deps.

/// SI magnitude prefixes walked by [`format_sizeof`].
const SI_PREFIXES: [&str; 8] = ["", "k", "M", "G", "T", "P", "E", "Z"];

/// Fixed-point format of `value` with `frac_digits` fraction digits,
/// left-padded with `pad` to at least `min_len` characters.
///
/// ```
/// use block_meter::pad_float;
/// assert_eq!(pad_float(1.234, 6, 2, '_'), "__1.23");
/// ```
#[must_use]
pub fn pad_float(value: f64, min_len: usize, frac_digits: usize, pad: char) -> String {
    let s = format!("{value:.frac_digits$}");
    let len = s.chars().count();
    if len >= min_len {
        return s;
    }
    let mut out = String::with_capacity(min_len);
    for _ in len..min_len {
        out.push(pad);
    }
    out.push_str(&s);
    out
}

/// Formats a number of seconds as clock time, `[H:]MM:SS`.
#[must_use]
pub fn format_interval(seconds: f64) -> String {
    let total = seconds as u64;
    let (minutes, s) = (total / 60, total % 60);
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// Scales `value` down by `divisor` per SI prefix until it fits three
/// display columns, then formats with magnitude-dependent precision.
///
/// Past the last listed prefix the value keeps the `Y` suffix however
/// large it grows.
#[must_use]
pub fn format_sizeof(value: f64, divisor: f64) -> String {
    let mut num = value;
    for prefix in SI_PREFIXES {
        if num.abs() < 999.5 {
            if num.abs() < 99.95 {
                if num.abs() < 9.995 {
                    return format!("{}{prefix}", pad_float(num, 1, 2, ' '));
                }
                return format!("{}{prefix}", pad_float(num, 2, 1, ' '));
            }
            return format!("{}{prefix}", pad_float(num, 3, 0, ' '));
        }
        num /= divisor;
    }
    format!("{}Y", pad_float(num, 3, 1, ' '))
}

/// Exponential moving average: `alpha` parts of the new sample `x`, the
/// rest of the previous average `mu`.  An absent `mu` yields `x` itself.
#[must_use]
pub fn ema(x: f64, mu: Option<f64>, alpha: f64) -> f64 {
    match mu {
        Some(mu) => alpha.mul_add(x, (1.0 - alpha) * mu),
        None => x,
    }
}
