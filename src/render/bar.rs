//! Completion fraction to fixed-width glyph run.
//!
//! A bar of `length` cells drawn from a ramp of `levels` glyphs resolves
//! `length * levels` distinct fill states: whole cells use the fullest
//! glyph and the boundary cell picks the ramp index matching the leftover
//! fill units.  Everything after the boundary cell is blank.

/// ASCII ramp, 11 levels: blank, digits as fill markers, `#` full.
const ASCII_SYMBOLS: [char; 11] = [' ', '1', '2', '3', '4', '5', '6', '7', '8', '9', '#'];
/// Block-element ramp, 9 levels: blank then U+258F..=U+2588, thin to full.
const BLOCK_SYMBOLS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Ordered glyph ramp expressing partial-cell fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    /// ` 123456789#`
    Ascii,
    /// ` ▏▎▍▌▋▊▉█`
    Block,
}

impl Charset {
    /// Ramp selected by the `ascii` configuration flag.
    #[inline]
    #[must_use]
    pub fn from_ascii_flag(ascii: bool) -> Self {
        if ascii { Self::Ascii } else { Self::Block }
    }

    /// The ramp, blank first, fullest glyph last.
    #[inline]
    #[must_use]
    pub fn symbols(self) -> &'static [char] {
        match self {
            Self::Ascii => &ASCII_SYMBOLS,
            Self::Block => &BLOCK_SYMBOLS,
        }
    }

    /// Number of fill levels, blank and full included.
    #[inline]
    #[must_use]
    pub fn symbol_count(self) -> usize {
        self.symbols().len()
    }
}

/// One render's worth of bar: a completion fraction pinned to a cell width.
/// Transient, rebuilt per render.
#[derive(Clone, Copy, Debug)]
pub struct Bar {
    frac: f64,
    length: usize,
    charset: Charset,
}

impl Bar {
    #[inline]
    #[must_use]
    pub fn new(frac: f64, length: usize, charset: Charset) -> Self {
        Self {
            frac,
            length,
            charset,
        }
    }

    /// Render to exactly `length` characters.
    ///
    /// Fractions past 1.0 clamp to a fully filled bar; negative or NaN
    /// fractions render empty.
    #[must_use]
    pub fn render(&self) -> String {
        let symbols = self.charset.symbols();
        let levels = symbols.len();
        let units = (self.frac * (self.length * levels) as f64) as usize;
        let full = units / levels;
        let rem = units % levels;

        let full_glyph = symbols[levels - 1];
        let mut out = String::with_capacity(self.length * 3);
        if full >= self.length {
            for _ in 0..self.length {
                out.push(full_glyph);
            }
            return out;
        }
        for _ in 0..full {
            out.push(full_glyph);
        }
        out.push(symbols[rem]);
        for _ in 0..self.length - 1 - full {
            out.push(symbols[0]);
        }
        out
    }
}
