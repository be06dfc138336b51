//! Bitmap text rendering.

use core::iter::repeat;

use display_interface::WriteOnlyDataCommand;
use embedded_hal::digital::v2::OutputPin;

use crate::font::{Font, Glyph};
use crate::{Error, ILI9341};

#[derive(Clone, Copy)]
enum Paint {
    /// Every cell pixel is written, unset bits in `background`.
    Opaque { color: u16, background: u16 },
    /// Only set bits are written.
    Transparent { color: u16 },
}

impl<DI, CS, RST, PinE> ILI9341<DI, CS, RST>
where
    DI: WriteOnlyDataCommand,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    ///
    /// Writes a string with the given font, painting the whole glyph cell.
    ///
    /// # Arguments
    ///
    /// * `x` - x coordinate of the first glyph's top left corner
    /// * `y` - y coordinate of the first glyph's top left corner
    /// * `text` - the string to render
    /// * `font` - the glyph set to render with
    /// * `color` - foreground Rgb565 color
    /// * `bgcolor` - background Rgb565 color
    /// * `tracking` - extra pixels between glyphs, may be negative
    ///
    pub fn write_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        color: u16,
        bgcolor: u16,
        tracking: i16,
    ) -> Result<(), Error<PinE>> {
        self.write_string_scaled(x, y, text, font, color, bgcolor, 1, tracking)
    }

    /// Like [`write_string`](Self::write_string) with every font pixel drawn as a
    /// `scale x scale` block.
    pub fn write_string_scaled(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        color: u16,
        bgcolor: u16,
        scale: u16,
        tracking: i16,
    ) -> Result<(), Error<PinE>> {
        let paint = Paint::Opaque {
            color,
            background: bgcolor,
        };
        self.render(x, y, text, font, paint, scale, tracking)
    }

    /// Writes only the set pixels of each glyph, leaving the background as is.
    pub fn write_string_transparent(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        color: u16,
        tracking: i16,
    ) -> Result<(), Error<PinE>> {
        self.write_string_transparent_scaled(x, y, text, font, color, 1, tracking)
    }

    pub fn write_string_transparent_scaled(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        color: u16,
        scale: u16,
        tracking: i16,
    ) -> Result<(), Error<PinE>> {
        self.render(x, y, text, font, Paint::Transparent { color }, scale, tracking)
    }

    // Strings that would run past the bottom edge are dropped whole. Along x,
    // drawing stops at the first glyph that does not fit.
    fn render(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        paint: Paint,
        scale: u16,
        tracking: i16,
    ) -> Result<(), Error<PinE>> {
        if scale == 0 {
            return Ok(());
        }
        let s = i32::from(scale);
        let cell_w = i32::from(font.width()) * s;
        let cell_h = i32::from(font.height()) * s;
        let y = i32::from(y);
        if y + cell_h - 1 >= i32::from(self.surface.height()) {
            return Ok(());
        }

        let fallback = self.fallback;
        let width = i32::from(self.surface.width());
        self.transaction(|d| {
            let mut cursor = i32::from(x);
            for ch in text.chars() {
                if cursor < 0 || cursor + cell_w - 1 >= width {
                    break;
                }
                if let Some(glyph) = font.glyph(ch, fallback) {
                    d.glyph_unselected(cursor, y, glyph, paint, scale)?;
                }
                cursor += cell_w + i32::from(tracking);
            }
            Ok(())
        })
    }

    fn glyph_unselected(
        &mut self,
        x: i32,
        y: i32,
        glyph: Glyph<'static>,
        paint: Paint,
        scale: u16,
    ) -> Result<(), Error<PinE>> {
        match paint {
            Paint::Opaque { color, background } => {
                let x1 = x + i32::from(glyph.width()) * i32::from(scale) - 1;
                let y1 = y + i32::from(glyph.height()) * i32::from(scale) - 1;
                self.set_address_window(x as u16, y as u16, x1 as u16, y1 as u16)?;
                let scale = usize::from(scale);
                let pixels = (0..glyph.height()).flat_map(move |row| {
                    repeat(row).take(scale).flat_map(move |row| {
                        glyph.row(row).flat_map(move |bit| {
                            repeat(if bit { color } else { background }).take(scale)
                        })
                    })
                });
                self.write_pixels(pixels)
            }
            Paint::Transparent { color } => {
                let w = usize::from(glyph.width());
                let s = i32::from(scale);
                for (i, _) in glyph.bits().enumerate().filter(|(_, bit)| *bit) {
                    let px = x + (i % w) as i32 * s;
                    let py = y + (i / w) as i32 * s;
                    if scale == 1 {
                        self.pixel_unselected(px, py, color)?;
                    } else {
                        self.fill_rect_unselected(px, py, s, s, color)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{BLACK, RED, WHITE};
    use crate::fonts::{FONT_8X16, FONT_8X8};
    use crate::instruction::Instruction;
    use crate::mock::{self, Window};
    use crate::{GlyphFallback, Orientation};

    const H_PIXELS: usize = 4 * 6 + 7;

    fn landscape() -> (crate::mock::TestDisplay, mock::Log) {
        mock::display(320, 240, Orientation::Landscape)
    }

    #[test]
    fn glyph_past_right_edge_draws_nothing() {
        let (mut display, log) = landscape();
        display.write_string(318, 0, "Hi", &FONT_8X8, WHITE, BLACK, 2).unwrap();
        assert!(!mock::commands(&log).contains(&(Instruction::RAMWR as u8)));
    }

    #[test]
    fn drawing_stops_at_first_glyph_that_does_not_fit() {
        let (mut display, log) = landscape();
        display.write_string(305, 0, "Hi", &FONT_8X8, WHITE, BLACK, 2).unwrap();
        let panel = mock::panel(&display, &log);
        assert_eq!(
            panel.windows,
            vec![Window { x0: 305, y0: 0, x1: 312, y1: 7 }]
        );
        assert_eq!(panel.count(WHITE), H_PIXELS);
        assert_eq!(panel.count(BLACK), 64 - H_PIXELS);
        assert_eq!(panel.pixel(305, 0), Some(WHITE));
        assert_eq!(panel.pixel(307, 0), Some(BLACK));
    }

    #[test]
    fn string_below_bottom_edge_is_rejected() {
        let (mut display, log) = landscape();
        display.write_string(0, 233, "A", &FONT_8X8, WHITE, BLACK, 0).unwrap();
        display.write_string(0, 230, "A", &FONT_8X16, WHITE, BLACK, 0).unwrap();
        assert!(log.borrow().is_empty());

        display.write_string(0, 232, "A", &FONT_8X8, WHITE, BLACK, 0).unwrap();
        assert_eq!(mock::panel(&display, &log).windows.len(), 1);
    }

    #[test]
    fn tracking_moves_the_cursor() {
        let (mut display, log) = landscape();
        display.write_string(10, 10, "abc", &FONT_8X8, WHITE, BLACK, 3).unwrap();
        display.write_string(10, 30, "abc", &FONT_8X8, WHITE, BLACK, -2).unwrap();
        let panel = mock::panel(&display, &log);
        let starts: Vec<u16> = panel.windows.iter().map(|w| w.x0).collect();
        assert_eq!(starts, vec![10, 21, 32, 10, 16, 22]);
    }

    #[test]
    fn fallback_space_paints_blank_cell() {
        let (mut display, log) = landscape();
        display.write_string(0, 0, "a\tb", &FONT_8X8, WHITE, BLACK, 0).unwrap();
        let panel = mock::panel(&display, &log);
        assert_eq!(panel.windows.len(), 3);
        for x in 8..16 {
            for y in 0..8 {
                assert_eq!(panel.pixel(x, y), Some(BLACK));
            }
        }
    }

    #[test]
    fn fallback_skip_leaves_a_gap() {
        let (mut display, log) = landscape();
        display.set_glyph_fallback(GlyphFallback::Skip);
        display.write_string(0, 0, "a\tb", &FONT_8X8, WHITE, BLACK, 0).unwrap();
        let panel = mock::panel(&display, &log);
        let starts: Vec<u16> = panel.windows.iter().map(|w| w.x0).collect();
        assert_eq!(starts, vec![0, 16]);
        assert_eq!(panel.pixel(10, 2), None);
    }

    #[test]
    fn scaled_glyph_uses_one_large_window() {
        let (mut display, log) = landscape();
        display
            .write_string_scaled(20, 20, "H", &FONT_8X8, WHITE, BLACK, 3, 0)
            .unwrap();
        let panel = mock::panel(&display, &log);
        assert_eq!(
            panel.windows,
            vec![Window { x0: 20, y0: 20, x1: 43, y1: 43 }]
        );
        assert_eq!(panel.count(WHITE), H_PIXELS * 9);
        // top left source pixel is set, third is not
        for (x, y) in [(20, 20), (22, 22), (25, 20)].iter() {
            assert_eq!(panel.pixel(*x, *y), Some(WHITE));
        }
        assert_eq!(panel.pixel(26, 20), Some(BLACK));
    }

    #[test]
    fn scale_zero_draws_nothing() {
        let (mut display, log) = landscape();
        display
            .write_string_scaled(0, 0, "H", &FONT_8X8, WHITE, BLACK, 0, 0)
            .unwrap();
        display
            .write_string_transparent_scaled(0, 0, "H", &FONT_8X8, WHITE, 0, 0)
            .unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn transparent_text_keeps_background() {
        let (mut display, log) = landscape();
        display.fill_rect(0, 0, 16, 8, RED).unwrap();
        display
            .write_string_transparent(0, 0, "H", &FONT_8X8, WHITE, 0)
            .unwrap();
        let panel = mock::panel(&display, &log);
        assert_eq!(panel.count(WHITE), H_PIXELS);
        assert_eq!(panel.count(RED), 128 - H_PIXELS);
        assert_eq!(panel.count(BLACK), 0);
    }

    #[test]
    fn transparent_scaled_text_fills_blocks() {
        let (mut display, log) = landscape();
        display
            .write_string_transparent_scaled(4, 4, "H", &FONT_8X8, WHITE, 2, 0)
            .unwrap();
        let panel = mock::panel(&display, &log);
        assert_eq!(panel.count(WHITE), H_PIXELS * 4);
        assert_eq!(panel.windows.len(), H_PIXELS);
        assert!(panel.windows.iter().all(|w| w.area() == 4));
        assert_eq!(panel.pixel(5, 5), Some(WHITE));
        assert_eq!(panel.pixel(8, 4), None);
    }

    #[test]
    fn whole_string_is_one_transaction() {
        let (mut display, log) = landscape();
        display.write_string(0, 0, "Hello", &FONT_8X16, WHITE, BLACK, 1).unwrap();
        let selects = log
            .borrow()
            .iter()
            .filter(|e| **e == mock::Event::Select)
            .count();
        assert_eq!(selects, 1);
        assert_eq!(mock::panel(&display, &log).windows.len(), 5);
    }
}
