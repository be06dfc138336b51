use display_interface::WriteOnlyDataCommand;
use embedded_graphics::drawable::Pixel;
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::style::{PrimitiveStyle, Styled};
use embedded_graphics::DrawTarget;
use embedded_hal::digital::v2::OutputPin;

use crate::{Error, ILI9341};

impl<DI, CS, RST, PinE> DrawTarget<Rgb565> for ILI9341<DI, CS, RST>
where
    DI: WriteOnlyDataCommand,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    type Error = Error<PinE>;

    fn draw_pixel(&mut self, pixel: Pixel<Rgb565>) -> Result<(), Self::Error> {
        let Pixel(point, color) = pixel;
        self.draw_pixel(point.x, point.y, RawU16::from(color).into_inner())
    }

    // Solid fills without an outline go straight to a single window.
    fn draw_rectangle(
        &mut self,
        item: &Styled<Rectangle, PrimitiveStyle<Rgb565>>,
    ) -> Result<(), Self::Error> {
        let Rectangle {
            top_left,
            bottom_right,
        } = item.primitive;
        let style = item.style;
        let outlined = style.stroke_color.is_some() && style.stroke_width > 0;
        match style.fill_color {
            Some(fill) if !outlined && top_left.x <= bottom_right.x && top_left.y <= bottom_right.y => self
                .fill_rect(
                    top_left.x,
                    top_left.y,
                    bottom_right.x - top_left.x + 1,
                    bottom_right.y - top_left.y + 1,
                    RawU16::from(fill).into_inner(),
                ),
            _ => self.draw_iter(item),
        }
    }

    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.fill_screen(RawU16::from(color).into_inner())
    }
}
