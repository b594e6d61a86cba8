use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::host::TextDisplay;

/// Character cell view of a monochrome `DrawTarget`, such as an SSD1306 buffer
pub struct GraphicsTextDisplay<D> {
    target: D,
    cursor: Point,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<D: DrawTarget<Color = BinaryColor>> GraphicsTextDisplay<D> {
    pub fn new(target: D) -> Self {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();
        Self {
            target,
            cursor: Point::zero(),
            style,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    /// Size of a character cell in pixels
    pub fn cell_size(&self) -> Size {
        let font = self.style.font;
        Size::new(font.character_size.width + font.character_spacing, font.character_size.height)
    }
}

impl<D: DrawTarget<Color = BinaryColor>> TextDisplay for GraphicsTextDisplay<D> {
    type Error = D::Error;

    fn set_cursor(&mut self, col: u8, line: u8) {
        let cell = self.cell_size();
        self.cursor = Point::new(col as i32 * cell.width as i32, line as i32 * cell.height as i32);
    }

    fn write(&mut self, text: &str) -> Result<(), Self::Error> {
        self.cursor = Text::with_baseline(text, self.cursor, self.style, Baseline::Top).draw(&mut self.target)?;
        Ok(())
    }
}
