//! Bitmap glyph sets.
//!
//! A glyph is a `width x height` bit matrix stored row-major, most significant
//! bit first, packed across consecutive `u32` words. A set bit is a foreground
//! pixel. Rows are not padded: a row may start in the middle of a word and a
//! glyph may end in the middle of one.

const FIRST_CHAR: u32 = 32;
const LAST_CHAR: u32 = 126;
const WORD_BITS: usize = 32;

/// What to do with characters outside printable ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphFallback {
    /// Render the space glyph in their place.
    #[default]
    Space,
    /// Render nothing but still advance the cursor by one cell.
    Skip,
}

/// A fixed-size font covering ASCII 32..=126.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    width: u16,
    height: u16,
    words_per_glyph: u16,
    data: &'static [u32],
}

impl Font {
    ///
    /// Describes a packed glyph table
    ///
    /// # Arguments
    ///
    /// * `width` - glyph width in pixels
    /// * `height` - glyph height in pixels
    /// * `words_per_glyph` - words occupied by each glyph, at least `ceil(width * height / 32)`
    /// * `data` - 95 consecutive glyphs starting at the space character
    ///
    pub const fn new(width: u16, height: u16, words_per_glyph: u16, data: &'static [u32]) -> Self {
        Self {
            width,
            height,
            words_per_glyph,
            data,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn words_per_glyph(&self) -> u16 {
        self.words_per_glyph
    }

    ///
    /// Looks up the glyph for `ch`.
    ///
    /// Returns `None` when `ch` is out of range and `fallback` is
    /// [`GlyphFallback::Skip`], or when the table is too short to hold the glyph.
    ///
    pub fn glyph(&self, ch: char, fallback: GlyphFallback) -> Option<Glyph<'static>> {
        let code = match u32::from(ch) {
            code @ FIRST_CHAR..=LAST_CHAR => code,
            _ => match fallback {
                GlyphFallback::Space => FIRST_CHAR,
                GlyphFallback::Skip => return None,
            },
        };
        let words = usize::from(self.words_per_glyph);
        let start = (code - FIRST_CHAR) as usize * words;
        let data: &'static [u32] = self.data;
        let words = data.get(start..start + words)?;
        if words.len() * WORD_BITS < usize::from(self.width) * usize::from(self.height) {
            return None;
        }
        Some(Glyph {
            words,
            width: self.width,
            height: self.height,
        })
    }
}

/// The packed bitmap of a single character.
#[derive(Clone, Copy, Debug)]
pub struct Glyph<'a> {
    words: &'a [u32],
    width: u16,
    height: u16,
}

impl<'a> Glyph<'a> {
    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// All pixels, row by row.
    pub fn bits(&self) -> GlyphBits<'a> {
        GlyphBits::new(
            self.words,
            0,
            usize::from(self.width) * usize::from(self.height),
        )
    }

    /// The pixels of a single row. Rows past the bottom are empty.
    pub fn row(&self, row: u16) -> GlyphBits<'a> {
        let len = if row < self.height {
            usize::from(self.width)
        } else {
            0
        };
        GlyphBits::new(self.words, usize::from(row) * usize::from(self.width), len)
    }
}

/// Iterator over a run of glyph bits, carrying the bit position across word
/// boundaries.
#[derive(Clone, Debug)]
pub struct GlyphBits<'a> {
    words: &'a [u32],
    position: usize,
    remaining: usize,
}

impl<'a> GlyphBits<'a> {
    fn new(words: &'a [u32], position: usize, remaining: usize) -> Self {
        Self {
            words,
            position,
            remaining,
        }
    }
}

impl Iterator for GlyphBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        let word = self.words.get(self.position / WORD_BITS)?;
        let mask = 0x8000_0000u32 >> (self.position % WORD_BITS);
        self.position += 1;
        self.remaining -= 1;
        Some(word & mask != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
