//! Drawing primitives.
//!
//! Every public method here is one bus transaction. The `*_unselected`
//! variants assume the bus is already selected so composite shapes can share a
//! single select/deselect bracket. Geometry that falls partly or wholly off the
//! surface is clipped, never reported as an error.

use display_interface::WriteOnlyDataCommand;
use embedded_hal::digital::v2::OutputPin;

use crate::polygon::{edges, scanline_intersections};
use crate::{Error, ILI9341};

/// Pixels held by the solid-color buffer that rectangle fills stream from.
pub const FILL_BUFFER_PIXELS: usize = 256;

impl<DI, CS, RST, PinE> ILI9341<DI, CS, RST>
where
    DI: WriteOnlyDataCommand,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    ///
    /// Sets a pixel color at the given coords. Off-surface pixels are ignored.
    ///
    /// # Arguments
    ///
    /// * `x` - x coordinate
    /// * `y` - y coordinate
    /// * `color` - the Rgb565 color value
    ///
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.pixel_unselected(x, y, color))
    }

    ///
    /// Fills a rectangle. Negative `w`/`h` extend left/up from `x`/`y`.
    ///
    /// # Arguments
    ///
    /// * `x` - x coordinate of the anchor corner
    /// * `y` - y coordinate of the anchor corner
    /// * `w` - width in pixels, may be negative
    /// * `h` - height in pixels, may be negative
    /// * `color` - the Rgb565 color value
    ///
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.fill_rect_unselected(x, y, w, h, color))
    }

    pub fn fill_screen(&mut self, color: u16) -> Result<(), Error<PinE>> {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        self.fill_rect(0, 0, w, h, color)
    }

    /// Draws a one pixel wide line between two points, both inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u16) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.line_unselected(x0, y0, x1, y1, color))
    }

    ///
    /// Draws a line `thickness` pixels wide.
    ///
    /// # Arguments
    ///
    /// * `x0`, `y0` - start point
    /// * `x1`, `y1` - end point
    /// * `color` - the Rgb565 color value
    /// * `thickness` - line width in pixels, 0 draws nothing
    /// * `cap` - round off both ends with filled circles
    ///
    pub fn draw_line_thick(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u16,
        thickness: u16,
        cap: bool,
    ) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.line_thick_unselected(x0, y0, x1, y1, color, thickness, cap))
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) -> Result<(), Error<PinE>> {
        self.draw_rect_thick(x, y, w, h, color, 1)
    }

    /// Draws a rectangle outline whose border grows inward by `thickness`.
    pub fn draw_rect_thick(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
        thickness: u16,
    ) -> Result<(), Error<PinE>> {
        if thickness == 0 {
            return Ok(());
        }
        let t = i32::from(thickness);
        let side = h - 2 * t;
        self.transaction(|d| {
            d.fill_rect_unselected(x, y, w, t, color)?;
            d.fill_rect_unselected(x, y + h - t, w, t, color)?;
            if side > 0 {
                d.fill_rect_unselected(x, y + t, t, side, color)?;
                d.fill_rect_unselected(x + w - t, y + t, t, side, color)?;
            }
            Ok(())
        })
    }

    /// Draws a circle outline of radius `r` around (`xc`, `yc`).
    pub fn draw_circle(&mut self, xc: i32, yc: i32, r: u16, color: u16) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.circle_unselected(xc, yc, r, color))
    }

    ///
    /// Draws a ring whose outer edge has radius `r` and which extends
    /// `thickness` pixels inward. Thickness is limited to `r`.
    ///
    pub fn draw_circle_thick(
        &mut self,
        xc: i32,
        yc: i32,
        r: u16,
        color: u16,
        thickness: u16,
    ) -> Result<(), Error<PinE>> {
        match thickness.min(r) {
            0 => Ok(()),
            1 => self.draw_circle(xc, yc, r, color),
            t => self.transaction(|d| d.ring_unselected(xc, yc, r, t, color)),
        }
    }

    /// Fills a disc of radius `r` around (`xc`, `yc`).
    pub fn fill_circle(&mut self, xc: i32, yc: i32, r: u16, color: u16) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.disc_unselected(xc, yc, r, color))
    }

    /// Connects consecutive points, and the last back to the first.
    pub fn draw_polygon(&mut self, points: &[(i32, i32)], color: u16) -> Result<(), Error<PinE>> {
        if points.len() < 2 {
            return Ok(());
        }
        self.transaction(|d| {
            for (&(x0, y0), &(x1, y1)) in edges(points) {
                d.line_unselected(x0, y0, x1, y1, color)?;
            }
            Ok(())
        })
    }

    pub fn draw_polygon_thick(
        &mut self,
        points: &[(i32, i32)],
        color: u16,
        thickness: u16,
        cap: bool,
    ) -> Result<(), Error<PinE>> {
        if points.len() < 2 || thickness == 0 {
            return Ok(());
        }
        self.transaction(|d| {
            for (&(x0, y0), &(x1, y1)) in edges(points) {
                d.line_thick_unselected(x0, y0, x1, y1, color, thickness, cap)?;
            }
            Ok(())
        })
    }

    ///
    /// Fills a polygon with the even-odd rule. Concave and self-intersecting
    /// outlines are supported; at most [`MAX_INTERSECTIONS`](crate::MAX_INTERSECTIONS)
    /// edge crossings per row take part.
    ///
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: u16) -> Result<(), Error<PinE>> {
        if points.len() < 3 {
            return Ok(());
        }
        self.transaction(|d| d.polygon_unselected(points, color))
    }

    pub(crate) fn pixel_unselected(&mut self, x: i32, y: i32, color: u16) -> Result<(), Error<PinE>> {
        if !self.surface.contains(x, y) {
            return Ok(());
        }
        let (x, y) = (x as u16, y as u16);
        self.set_address_window(x, y, x, y)?;
        self.write_pixel(color)
    }

    pub(crate) fn fill_rect_unselected(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), Error<PinE>> {
        let (mut x, mut y, mut w, mut h) = (x, y, w, h);
        if w < 0 {
            w = w.saturating_neg();
            x = x.saturating_sub(w - 1);
        }
        if h < 0 {
            h = h.saturating_neg();
            y = y.saturating_sub(h - 1);
        }

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(i32::from(self.surface.width()));
        let y1 = y.saturating_add(h).min(i32::from(self.surface.height()));
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        self.set_address_window(x0 as u16, y0 as u16, (x1 - 1) as u16, (y1 - 1) as u16)?;
        self.stream_solid(color, (x1 - x0) as usize * (y1 - y0) as usize)
    }

    #[cfg(feature = "buffer")]
    fn stream_solid(&mut self, color: u16, pixels: usize) -> Result<(), Error<PinE>> {
        use display_interface::DataFormat::U8;

        let mut buffer = [0u8; FILL_BUFFER_PIXELS * 2];
        for pixel in buffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }
        let mut remaining = pixels;
        while remaining > 0 {
            let chunk = remaining.min(FILL_BUFFER_PIXELS);
            self.di
                .send_data(U8(&buffer[..chunk * 2]))
                .map_err(|_| Error::DisplayError)?;
            remaining -= chunk;
        }
        Ok(())
    }

    #[cfg(not(feature = "buffer"))]
    fn stream_solid(&mut self, color: u16, pixels: usize) -> Result<(), Error<PinE>> {
        self.write_pixels(core::iter::repeat(color).take(pixels))
    }

    // Horizontal run between two columns, in either order.
    fn span_unselected(&mut self, xa: i32, xb: i32, y: i32, color: u16) -> Result<(), Error<PinE>> {
        let x = xa.min(xb);
        self.fill_rect_unselected(x, y, (xa - xb).abs() + 1, 1, color)
    }

    pub(crate) fn line_unselected(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u16,
    ) -> Result<(), Error<PinE>> {
        if y0 == y1 {
            return self.span_unselected(x0, x1, y0, color);
        }
        if x0 == x1 {
            return self.fill_rect_unselected(x0, y0.min(y1), 1, (y1 - y0).abs() + 1, color);
        }

        // Bresenham, all octants
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.pixel_unselected(x, y, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn line_thick_unselected(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u16,
        thickness: u16,
        cap: bool,
    ) -> Result<(), Error<PinE>> {
        match thickness {
            0 => return Ok(()),
            1 => return self.line_unselected(x0, y0, x1, y1, color),
            _ => {}
        }

        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let length = libm::sqrtf(dx * dx + dy * dy);
        if length == 0.0 {
            return Ok(());
        }
        // perpendicular to the line, half a thickness long
        let half = f32::from(thickness) / 2.0;
        let px = -dy / length * half;
        let py = dx / length * half;
        let offset = |x: i32, y: i32, sign: f32| ((x as f32 + sign * px) as i32, (y as f32 + sign * py) as i32);
        let corners = [
            offset(x0, y0, 1.0),
            offset(x0, y0, -1.0),
            offset(x1, y1, -1.0),
            offset(x1, y1, 1.0),
        ];
        self.polygon_unselected(&corners, color)?;

        if cap {
            let r = thickness / 2;
            self.disc_unselected(x0, y0, r, color)?;
            self.disc_unselected(x1, y1, r, color)?;
        }
        Ok(())
    }

    fn circle_unselected(&mut self, xc: i32, yc: i32, r: u16, color: u16) -> Result<(), Error<PinE>> {
        let r = i32::from(r);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.pixel_unselected(xc, yc + r, color)?;
        self.pixel_unselected(xc, yc - r, color)?;
        self.pixel_unselected(xc + r, yc, color)?;
        self.pixel_unselected(xc - r, yc, color)?;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            for &(px, py) in &[(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                self.pixel_unselected(xc + px, yc + py, color)?;
            }
        }
        Ok(())
    }

    // Outer and inner boundaries step inward together, one row at a time.
    fn ring_unselected(&mut self, xc: i32, yc: i32, r: u16, thickness: u16, color: u16) -> Result<(), Error<PinE>> {
        let r = i32::from(r);
        let r_inner = r - i32::from(thickness);
        let mut x_outer = r;
        let mut x_inner = r_inner;

        for y in 0..=r {
            while outside(x_outer, y, r) {
                x_outer -= 1;
            }
            while x_inner >= 0 && outside(x_inner, y, r_inner) {
                x_inner -= 1;
            }

            let mirrored = [y, -y];
            let rows = if y == 0 { &mirrored[..1] } else { &mirrored[..] };
            for &row in rows {
                if x_inner < 0 {
                    // past the inner circle the ring is a full chord
                    self.span_unselected(xc - x_outer, xc + x_outer, yc + row, color)?;
                } else {
                    self.span_unselected(xc - x_outer, xc - x_inner, yc + row, color)?;
                    self.span_unselected(xc + x_inner, xc + x_outer, yc + row, color)?;
                }
            }
        }
        Ok(())
    }

    fn disc_unselected(&mut self, xc: i32, yc: i32, r: u16, color: u16) -> Result<(), Error<PinE>> {
        let r = i32::from(r);
        let mut x = r;
        for y in 0..=r {
            while outside(x, y, r) {
                x -= 1;
            }
            self.span_unselected(xc - x, xc + x, yc + y, color)?;
            if y != 0 {
                self.span_unselected(xc - x, xc + x, yc - y, color)?;
            }
        }
        Ok(())
    }

    fn polygon_unselected(&mut self, points: &[(i32, i32)], color: u16) -> Result<(), Error<PinE>> {
        let (min_y, max_y) = points
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
        let width = i32::from(self.surface.width());
        let height = i32::from(self.surface.height());
        if min_y >= height || max_y < 0 {
            return Ok(());
        }

        for row in min_y.max(0)..=max_y.min(height - 1) {
            let nodes = scanline_intersections(points, row);
            for pair in nodes.chunks_exact(2) {
                let (xa, xb) = (pair[0], pair[1]);
                if xa >= width {
                    break;
                }
                if xb < 0 {
                    continue;
                }
                self.span_unselected(xa.max(0), xb.min(width - 1), row, color)?;
            }
        }
        Ok(())
    }
}

// Squares of radii up to u16::MAX do not fit in i32.
fn outside(x: i32, y: i32, r: i32) -> bool {
    let (x, y, r) = (i64::from(x), i64::from(y), i64::from(r));
    x * x + y * y > r * r
}
