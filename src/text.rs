//! Label text: outlined drawing and compact formatting
//!
//! The formatting adapters implement [`Display`] so labels can be written
//! straight into a reused `String` with `write!` instead of allocating a new
//! string per label per frame.

use crate::color::{BLACK, WHITE};
use crate::render::DrawList;
use arrayvec::ArrayString;
use glam::Vec2;
use std::fmt::{self, Display, Write};

/// Outline offsets, drawn in this order before the fill pass
const OUTLINE_OFFSETS: [(f32, f32); 8] = [
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
];

/// Draws `text` with a 1px halo: eight outline passes, then the fill at `pos`.
pub fn draw_outlined_text(draw: &mut dyn DrawList, text: &str, pos: Vec2, fill: u32, outline: u32) {
    for (dx, dy) in OUTLINE_OFFSETS {
        draw.add_text(pos + Vec2::new(dx, dy), outline, text);
    }
    draw.add_text(pos, fill, text);
}

/// White text with a black outline, the style of every HUD label
pub fn draw_label(draw: &mut dyn DrawList, text: &str, pos: Vec2) {
    draw_outlined_text(draw, text, pos, WHITE, BLACK);
}

/// Character name shortened for a plate: leading words become initials
/// ("Tank Mcgee" -> "T. Mcgee"), then the result is cut to `max_chars`.
#[derive(Debug, Clone, Copy)]
pub struct Abbreviated<'a> {
    pub name: &'a str,
    pub max_chars: usize,
}

impl<'a> Abbreviated<'a> {
    pub fn new(name: &'a str, max_chars: usize) -> Self {
        Abbreviated { name, max_chars }
    }
}

/// Writer that silently drops everything after `remaining` characters
struct Truncating<'a, W: Write> {
    inner: &'a mut W,
    remaining: usize,
}

impl<W: Write> Write for Truncating<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.remaining == 0 {
                break;
            }
            self.inner.write_char(c)?;
            self.remaining -= 1;
        }
        Ok(())
    }
}

impl Display for Abbreviated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Truncating {
            inner: f,
            remaining: self.max_chars,
        };

        let mut words = self.name.split_whitespace().peekable();
        while let Some(word) = words.next() {
            if words.peek().is_some() {
                if let Some(initial) = word.chars().next() {
                    out.write_char(initial)?;
                    out.write_str(". ")?;
                }
            } else {
                out.write_str(word)?;
            }
        }

        Ok(())
    }
}

/// Compact number for max-HP labels: `8,000`, `45K`, `123,456K`, `12M`.
///
/// Honours width and alignment flags, so `{:>6}` pads like a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KiloFormat(pub u32);

fn write_thousands<W: Write>(out: &mut W, value: u32) -> fmt::Result {
    let mut digits = ArrayString::<10>::new();
    write!(digits, "{value}")?;

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.write_char(',')?;
        }
        out.write_char(c)?;
    }
    Ok(())
}

impl Display for KiloFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        let mut buf = ArrayString::<20>::new();

        if n >= 100_000_000 {
            write_thousands(&mut buf, n / 1_000_000)?;
            buf.push('M');
        } else if n >= 10_000_000 {
            write!(buf, "{}M", n / 1_000_000)?;
        } else if n >= 100_000 {
            write_thousands(&mut buf, n / 1_000)?;
            buf.push('K');
        } else if n >= 10_000 {
            write!(buf, "{}K", n / 1_000)?;
        } else {
            write_thousands(&mut buf, n)?;
        }

        f.pad(&buf)
    }
}
