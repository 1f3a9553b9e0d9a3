//! Reference monochrome canvas
//!
//! A fixed-size square working buffer that collects one frame's primitives
//! and then rotates it into a destination buffer matching the physical
//! mounting of the display. Implements `embedded_graphics::DrawTarget`,
//! so the usual primitives and mono fonts rasterize straight into it.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::surface::{Color, DisplayError, Surface, TextAlign, CANVAS_SIZE};
use crate::symbols::{symbol_bitmap, SYMBOL_WIDTH};

const BUF_LEN: usize = (CANVAS_SIZE as usize * CANVAS_SIZE as usize + 7) / 8;

/// Horizontal advance of one regular character cell
const CHAR_ADVANCE: u16 =
    (FONT_6X10.character_size.width + FONT_6X10.character_spacing) as u16;

/// Destination orientation applied at finalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Deg0,
    /// Stock mounting: display module rotated a quarter turn
    #[default]
    Deg90,
    Deg180,
    Deg270,
}

/// Square 1-bpp working buffer plus the committed destination frame
pub struct Canvas {
    work: [u8; BUF_LEN],
    dest: [u8; BUF_LEN],
    rotation: Rotation,
}

impl Canvas {
    /// Create an empty canvas committing with the given rotation
    pub fn new(rotation: Rotation) -> Self {
        Self {
            work: [0; BUF_LEN],
            dest: [0; BUF_LEN],
            rotation,
        }
    }

    /// Rotation applied at finalize
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Read a pixel from the working buffer
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let bit = y as usize * CANVAS_SIZE as usize + x as usize;
        self.work[bit / 8] & (1 << (bit % 8)) != 0
    }

    /// The committed destination frame, valid after `finalize`
    pub fn frame(&self) -> &[u8] {
        &self.dest
    }

    /// Read a pixel from the committed destination frame
    pub fn frame_pixel(&self, x: u16, y: u16) -> bool {
        let bit = y as usize * CANVAS_SIZE as usize + x as usize;
        self.dest[bit / 8] & (1 << (bit % 8)) != 0
    }

    fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        let bit = y as usize * CANVAS_SIZE as usize + x as usize;
        if on {
            self.work[bit / 8] |= 1 << (bit % 8);
        } else {
            self.work[bit / 8] &= !(1 << (bit % 8));
        }
    }

    fn set_dest_pixel(&mut self, x: u16, y: u16, on: bool) {
        let bit = y as usize * CANVAS_SIZE as usize + x as usize;
        if on {
            self.dest[bit / 8] |= 1 << (bit % 8);
        } else {
            self.dest[bit / 8] &= !(1 << (bit % 8));
        }
    }

    /// Stamp a symbol bitmap with its top-left corner at (x, y)
    fn stamp(&mut self, x: u16, y: u16, rows: &[u8; 10]) {
        for (dy, row) in rows.iter().enumerate() {
            for dx in 0..8u16 {
                if row & (0x80 >> dx) != 0 {
                    let px = x + dx;
                    let py = y + dy as u16;
                    if px < CANVAS_SIZE && py < CANVAS_SIZE {
                        self.set_pixel(px, py, true);
                    }
                }
            }
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Rotation::default())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(CANVAS_SIZE as u32, CANVAS_SIZE as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u16) < CANVAS_SIZE
                && (point.y as u16) < CANVAS_SIZE
            {
                self.set_pixel(point.x as u16, point.y as u16, color.is_on());
            }
        }
        Ok(())
    }
}

fn binary(color: Color) -> BinaryColor {
    match color {
        Color::Background => BinaryColor::Off,
        Color::Foreground => BinaryColor::On,
    }
}

/// Horizontal advance of one glyph, symbol or regular
fn glyph_advance(ch: char) -> u16 {
    if symbol_bitmap(ch).is_some() {
        SYMBOL_WIDTH
    } else {
        CHAR_ADVANCE
    }
}

impl Surface for Canvas {
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        let _ = Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(width as u32, height as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(binary(color)))
        .draw(self);
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        let _ = Line::new(
            Point::new(x0 as i32, y0 as i32),
            Point::new(x1 as i32, y1 as i32),
        )
        .into_styled(PrimitiveStyle::with_stroke(binary(color), 1))
        .draw(self);
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        align: TextAlign,
        text: &str,
    ) -> Result<(), DisplayError> {
        let total: u16 = text.chars().map(glyph_advance).sum();
        let mut cx = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + width.saturating_sub(total) / 2,
            TextAlign::Right => x + width.saturating_sub(total),
        };

        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        for ch in text.chars() {
            if cx >= x + width {
                break;
            }
            if let Some(rows) = symbol_bitmap(ch) {
                self.stamp(cx, y, rows);
                cx += SYMBOL_WIDTH;
            } else {
                let mut utf8 = [0u8; 4];
                let glyph: &str = ch.encode_utf8(&mut utf8);
                let _ = Text::with_baseline(
                    glyph,
                    Point::new(cx as i32, y as i32),
                    style,
                    Baseline::Top,
                )
                .draw(self);
                cx += CHAR_ADVANCE;
            }
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), DisplayError> {
        let n = CANVAS_SIZE;
        for y in 0..n {
            for x in 0..n {
                let on = self.pixel(x, y);
                let (dx, dy) = match self.rotation {
                    Rotation::Deg0 => (x, y),
                    Rotation::Deg90 => (n - 1 - y, x),
                    Rotation::Deg180 => (n - 1 - x, n - 1 - y),
                    Rotation::Deg270 => (y, n - 1 - x),
                };
                self.set_dest_pixel(dx, dy, on);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Canvas {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Canvas[{}x{}, {}]", CANVAS_SIZE, CANVAS_SIZE, self.rotation);
    }
}
