#![cfg_attr(not(test), no_std)]
// associated re-typing not supported in rust yet
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

//! This crate provides an ILI9341 driver to connect to TFT displays, a
//! software rasterizer and bitmap text compositor built on the controller's
//! address window, and a sampler for the resistive touch controller that
//! usually shares the panel's SPI bus.

pub mod color;
pub mod font;
pub mod fonts;
pub mod instruction;
mod polygon;
mod raster;
pub mod surface;
mod text;
pub mod touch;

#[cfg(feature = "graphics")]
mod graphics;

#[cfg(test)]
mod mock;

use crate::instruction::Instruction::{self, *};
use core::iter::once;

use display_interface::DataFormat::{U16BEIter, U8};
use display_interface::WriteOnlyDataCommand;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

pub use crate::font::{Font, Glyph, GlyphBits, GlyphFallback};
pub use crate::polygon::MAX_INTERSECTIONS;
pub use crate::raster::FILL_BUFFER_PIXELS;
pub use crate::surface::{Orientation, Surface};
pub use crate::touch::{Touch, TouchCalibration, TouchError};

/// Largest payload handed to the display interface in one call.
pub const MAX_TRANSFER_BYTES: usize = 32768;

///
/// ILI9341 driver to connect to TFT displays.
///
/// Every public drawing call selects the panel, streams its pixels and
/// deselects it again, so other devices on the same bus (the touch controller,
/// usually) can be used between calls.
///
pub struct ILI9341<DI, CS, RST>
where
    DI: WriteOnlyDataCommand,
    CS: OutputPin,
    RST: OutputPin,
{
    // Display interface
    di: DI,
    // Chip select, active low.
    cs: CS,
    // Reset pin.
    rst: RST,
    surface: Surface,
    fallback: GlyphFallback,
}

///
/// An error holding its source (pins or display interface)
///
#[derive(Debug)]
pub enum Error<PinE> {
    DisplayError,
    Pin(PinE),
}

impl<DI, CS, RST, PinE> ILI9341<DI, CS, RST>
where
    DI: WriteOnlyDataCommand,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    ///
    /// Creates a new ILI9341 driver instance
    ///
    /// # Arguments
    ///
    /// * `di` - a display interface for talking with the display
    /// * `cs` - chip select pin shared-bus bracket, active low
    /// * `rst` - display hard reset pin
    /// * `surface` - visible size and the orientation it applies to
    ///
    pub fn new(di: DI, cs: CS, rst: RST, surface: Surface) -> Self {
        Self {
            di,
            cs,
            rst,
            surface,
            fallback: GlyphFallback::default(),
        }
    }

    ///
    /// Runs commands to initialize the display
    ///
    /// # Arguments
    ///
    /// * `delay_source` - mutable reference to a delay provider
    ///
    pub fn init(&mut self, delay_source: &mut impl DelayUs<u32>) -> Result<(), Error<PinE>> {
        let madctl = self.surface.orientation().madctl();
        self.transaction(|d| {
            d.hard_reset(delay_source)?;
            d.write_command(SWRESET)?;
            delay_source.delay_us(120_000);
            d.command(PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02])?;
            d.command(PWCTRB, &[0x00, 0xC1, 0x30])?;
            d.command(DTCTRA, &[0x85, 0x00, 0x78])?;
            d.command(DTCTRB, &[0x00, 0x00])?;
            d.command(PWRSEQ, &[0x64, 0x03, 0x12, 0x81])?;
            d.command(PRC, &[0x20])?;
            d.command(PWCTR1, &[0x23])?; // VRH = 4.60V
            d.command(PWCTR2, &[0x10])?;
            d.command(VMCTR1, &[0x3E, 0x28])?;
            d.command(VMCTR2, &[0x86])?;
            d.command(PIXSET, &[0x55])?; // 16bpp
            d.command(FRMCTR1, &[0x00, 0x18])?; // 79Hz
            d.command(DFUNCTR, &[0x08, 0x82, 0x27])?;
            d.command(EN3G, &[0x00])?;
            d.command(GAMSET, &[0x01])?;
            d.command(
                PGAMCTRL,
                &[0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00],
            )?;
            d.command(
                NGAMCTRL,
                &[0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F],
            )?;
            d.write_command(SLPOUT)?;
            delay_source.delay_us(120_000);
            d.write_command(DISPON)?;
            d.command(MADCTL, &[madctl])
        })
    }

    ///
    /// Performs a hard reset using the RST pin sequence
    ///
    /// # Arguments
    ///
    /// * `delay_source` - mutable reference to a delay provider
    ///
    pub fn hard_reset(&mut self, delay_source: &mut impl DelayUs<u32>) -> Result<(), Error<PinE>> {
        self.rst.set_high().map_err(Error::Pin)?;
        delay_source.delay_us(10); // ensure the pin change will get registered
        self.rst.set_low().map_err(Error::Pin)?;
        delay_source.delay_us(10); // ensure the pin change will get registered
        self.rst.set_high().map_err(Error::Pin)?;
        delay_source.delay_us(5_000); // controller ignores commands for 5ms after reset

        Ok(())
    }

    ///
    /// Releases the shared bus. Call before talking to any other device on it
    /// if the chip select pin may have started out low.
    ///
    pub fn deselect(&mut self) -> Result<(), Error<PinE>> {
        self.cs.set_high().map_err(Error::Pin)
    }

    fn select(&mut self) -> Result<(), Error<PinE>> {
        self.cs.set_low().map_err(Error::Pin)
    }

    // Runs `f` with the bus selected. The bus is released even when `f` fails;
    // the first error wins.
    pub(crate) fn transaction<T, F>(&mut self, f: F) -> Result<T, Error<PinE>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<PinE>>,
    {
        self.select()?;
        let result = f(self);
        let released = self.deselect();
        let value = result?;
        released?;
        Ok(value)
    }

    ///
    /// Changes the panel rotation. Width and height swap when moving between
    /// portrait and landscape.
    ///
    /// # Arguments
    ///
    /// * `orientation` - the new rotation
    ///
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<PinE>> {
        self.transaction(|d| d.command(MADCTL, &[orientation.madctl()]))?;
        self.surface.set_orientation(orientation);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "orientation {} -> {}x{}",
            orientation,
            self.surface.width(),
            self.surface.height()
        );

        Ok(())
    }

    ///
    /// Turns color inversion on or off
    ///
    pub fn invert_colors(&mut self, invert: bool) -> Result<(), Error<PinE>> {
        let instruction = if invert { INVON } else { INVOFF };
        self.transaction(|d| d.write_command(instruction))
    }

    /// Current geometry.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn width(&self) -> u16 {
        self.surface.width()
    }

    pub fn height(&self) -> u16 {
        self.surface.height()
    }

    pub fn orientation(&self) -> Orientation {
        self.surface.orientation()
    }

    /// Chooses how text rendering treats characters outside printable ASCII.
    pub fn set_glyph_fallback(&mut self, fallback: GlyphFallback) {
        self.fallback = fallback;
    }

    pub fn glyph_fallback(&self) -> GlyphFallback {
        self.fallback
    }

    ///
    /// Sets pixel colors in given rectangle bounds.
    ///
    /// # Arguments
    ///
    /// * `sx` - x coordinate start
    /// * `sy` - y coordinate start
    /// * `ex` - x coordinate end
    /// * `ey` - y coordinate end
    /// * `colors` - anything that can provide `IntoIterator<Item = u16>` to iterate over pixel data,
    ///   exactly `(ex - sx + 1) * (ey - sy + 1)` items
    ///
    pub fn set_pixels<T>(
        &mut self,
        sx: u16,
        sy: u16,
        ex: u16,
        ey: u16,
        colors: T,
    ) -> Result<(), Error<PinE>>
    where
        T: IntoIterator<Item = u16>,
    {
        self.transaction(|d| {
            d.set_address_window(sx, sy, ex, ey)?;
            d.write_pixels(colors)
        })
    }

    ///
    /// Blits raw pixel data to the display. The burden of choosing the correct
    /// pixel format (big-endian RGB565) is completely on the caller.
    ///
    /// # Arguments
    ///
    /// * `sx` - x coordinate start
    /// * `sy` - y coordinate start
    /// * `dx` - width
    /// * `dy` - height
    /// * `data` - u8 slice containing raw pixel data
    ///
    /// Fails with `Error::DisplayError` when `data` does not hold exactly
    /// `dx * dy` pixels or the window would end past `u16::MAX`.
    ///
    pub fn blit_pixels(
        &mut self,
        sx: u16,
        sy: u16,
        dx: u16,
        dy: u16,
        data: &[u8],
    ) -> Result<(), Error<PinE>> {
        if data.len() != usize::from(dx) * usize::from(dy) * 2 {
            return Err(Error::DisplayError);
        }
        if dx == 0 || dy == 0 {
            return Ok(());
        }
        let (ex, ey) = match (sx.checked_add(dx - 1), sy.checked_add(dy - 1)) {
            (Some(ex), Some(ey)) => (ex, ey),
            _ => return Err(Error::DisplayError),
        };
        self.transaction(|d| {
            d.set_address_window(sx, sy, ex, ey)?;
            d.write_data(data)
        })
    }

    ///
    /// Draws an RGB565 image. Images that do not fit entirely on the surface
    /// are not drawn.
    ///
    /// # Arguments
    ///
    /// * `x` - left edge
    /// * `y` - top edge
    /// * `w` - image width
    /// * `h` - image height
    /// * `data` - `w * h` colors, row-major
    ///
    pub fn draw_image(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        data: &[u16],
    ) -> Result<(), Error<PinE>> {
        if data.len() != usize::from(w) * usize::from(h) {
            return Err(Error::DisplayError);
        }
        let fits = w > 0
            && h > 0
            && u32::from(x) + u32::from(w) <= u32::from(self.surface.width())
            && u32::from(y) + u32::from(h) <= u32::from(self.surface.height());
        if !fits {
            return Ok(());
        }
        self.set_pixels(x, y, x + w - 1, y + h - 1, data.iter().copied())
    }

    ///
    /// Release resources allocated to this driver back.
    /// This returns the display interface, the CS pin and the RST pin
    /// deconstructing the driver.
    ///
    pub fn release(self) -> (DI, CS, RST) {
        (self.di, self.cs, self.rst)
    }

    fn write_command(&mut self, command: Instruction) -> Result<(), Error<PinE>> {
        self.di
            .send_commands(U8(&[command as u8]))
            .map_err(|_| Error::DisplayError)?;
        Ok(())
    }

    fn command(&mut self, command: Instruction, params: &[u8]) -> Result<(), Error<PinE>> {
        self.write_command(command)?;
        self.write_data(params)
    }

    // Payloads above the interface's transfer limit go out in pieces.
    fn write_data(&mut self, data: &[u8]) -> Result<(), Error<PinE>> {
        for chunk in data.chunks(MAX_TRANSFER_BYTES) {
            self.di.send_data(U8(chunk)).map_err(|_| Error::DisplayError)?;
        }
        Ok(())
    }

    pub(crate) fn write_pixels<T>(&mut self, colors: T) -> Result<(), Error<PinE>>
    where
        T: IntoIterator<Item = u16>,
    {
        self.di
            .send_data(U16BEIter(&mut colors.into_iter()))
            .map_err(|_| Error::DisplayError)
    }

    pub(crate) fn write_pixel(&mut self, color: u16) -> Result<(), Error<PinE>> {
        self.write_pixels(once(color))
    }

    ///
    /// Sets the address window for the display. The next
    /// `(x1 - x0 + 1) * (y1 - y0 + 1)` pixels sent fill it row by row.
    ///
    pub(crate) fn set_address_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<PinE>> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(RASET, &[y0h, y0l, y1h, y1l])?;
        self.write_command(RAMWR)
    }
}
