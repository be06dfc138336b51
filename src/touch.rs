//! XPT2046-style resistive touch controller.
//!
//! The controller shares the SPI bus with the display and has its own chip
//! select. A reading averages [`SAMPLES`] raw conversions per axis and is only
//! reported when the pen stayed down for all of them.

use embedded_hal::blocking::spi::{Transfer, Write};
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::surface::{Orientation, Surface};

const READ_X: u8 = 0xD0;
const READ_Y: u8 = 0x90;

/// Conversions averaged into one reading.
pub const SAMPLES: u32 = 16;

/// Raw ADC range covering the visible area, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchCalibration {
    pub min_raw_x: u16,
    pub max_raw_x: u16,
    pub min_raw_y: u16,
    pub max_raw_y: u16,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self {
            min_raw_x: 2000,
            max_raw_x: 30750,
            min_raw_y: 2000,
            max_raw_y: 31000,
        }
    }
}

impl TouchCalibration {
    fn remap_x(&self, raw: u32, width: u16) -> u16 {
        remap(raw, self.min_raw_x, self.max_raw_x, width)
    }

    fn remap_y(&self, raw: u32, height: u16) -> u16 {
        remap(raw, self.min_raw_y, self.max_raw_y, height)
    }
}

// Clamps `raw` into `[min, max]` and scales it onto `0..dim`.
fn remap(raw: u32, min: u16, max: u16, dim: u16) -> u16 {
    let (min, max) = (u32::from(min), u32::from(max));
    if max <= min || dim == 0 {
        return 0;
    }
    let raw = raw.clamp(min, max);
    let scaled = (raw - min) * u32::from(dim) / (max - min);
    scaled.min(u32::from(dim) - 1) as u16
}

///
/// An error holding its source (SPI bus or pins)
///
#[derive(Debug)]
pub enum TouchError<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
}

///
/// Touch controller driver.
///
pub struct Touch<SPI, CS, IRQ>
where
    CS: OutputPin,
    IRQ: InputPin,
{
    spi: SPI,
    // Chip select, active low.
    cs: CS,
    // Pen interrupt, low while pressed.
    irq: IRQ,
    surface: Surface,
    calibration: TouchCalibration,
}

impl<SPI, CS, IRQ, SpiE, PinE> Touch<SPI, CS, IRQ>
where
    SPI: Write<u8, Error = SpiE> + Transfer<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    IRQ: InputPin<Error = PinE>,
{
    ///
    /// Creates a new touch driver and leaves the controller deselected
    ///
    /// # Arguments
    ///
    /// * `spi` - the SPI bus, shared with the display
    /// * `cs` - touch controller chip select, active low
    /// * `irq` - pen interrupt input
    /// * `surface` - the display geometry readings are mapped onto
    /// * `calibration` - raw range of the panel
    ///
    pub fn new(
        spi: SPI,
        cs: CS,
        irq: IRQ,
        surface: Surface,
        calibration: TouchCalibration,
    ) -> Result<Self, TouchError<SpiE, PinE>> {
        let mut touch = Self {
            spi,
            cs,
            irq,
            surface,
            calibration,
        };
        touch.deselect()?;
        Ok(touch)
    }

    pub fn deselect(&mut self) -> Result<(), TouchError<SpiE, PinE>> {
        self.cs.set_high().map_err(TouchError::Pin)
    }

    pub fn is_pressed(&self) -> Result<bool, TouchError<SpiE, PinE>> {
        self.irq.is_low().map_err(TouchError::Pin)
    }

    /// Follows a display rotation so readings stay in screen coordinates.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.surface.set_orientation(orientation);
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn calibration(&self) -> TouchCalibration {
        self.calibration
    }

    pub fn set_calibration(&mut self, calibration: TouchCalibration) {
        self.calibration = calibration;
    }

    ///
    /// Samples the touch position.
    ///
    /// Returns `Ok(None)` when the pen was lifted before all samples were
    /// taken, otherwise the averaged position in surface pixels.
    ///
    pub fn get_coordinates(&mut self) -> Result<Option<(u16, u16)>, TouchError<SpiE, PinE>> {
        self.cs.set_low().map_err(TouchError::Pin)?;
        let sampled = self.sample();
        let released = self.deselect();
        let (samples, sum_x, sum_y) = sampled?;
        released?;

        if samples < SAMPLES {
            #[cfg(feature = "defmt")]
            defmt::debug!("touch rejected after {} samples", samples);
            return Ok(None);
        }

        let raw_x = sum_x / SAMPLES;
        let raw_y = sum_y / SAMPLES;

        #[cfg(feature = "defmt")]
        defmt::trace!("touch raw x={} y={}", raw_x, raw_y);

        Ok(Some((
            self.calibration.remap_x(raw_x, self.surface.width()),
            self.calibration.remap_y(raw_y, self.surface.height()),
        )))
    }

    // Reads while the pen stays down, up to SAMPLES times.
    fn sample(&mut self) -> Result<(u32, u32, u32), TouchError<SpiE, PinE>> {
        let (mut sum_x, mut sum_y) = (0u32, 0u32);
        for taken in 0..SAMPLES {
            if !self.is_pressed()? {
                return Ok((taken, sum_x, sum_y));
            }
            sum_y += u32::from(self.read_channel(READ_Y)?);
            sum_x += u32::from(self.read_channel(READ_X)?);
        }
        Ok((SAMPLES, sum_x, sum_y))
    }

    fn read_channel(&mut self, command: u8) -> Result<u16, TouchError<SpiE, PinE>> {
        self.spi.write(&[command]).map_err(TouchError::Spi)?;
        let mut buffer = [0u8; 2];
        let raw = self.spi.transfer(&mut buffer).map_err(TouchError::Spi)?;
        Ok(u16::from_be_bytes([raw[0], raw[1]]))
    }

    pub fn release(self) -> (SPI, CS, IRQ) {
        (self.spi, self.cs, self.irq)
    }
}
