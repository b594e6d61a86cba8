//! Firmware services the keymap glue calls into.
//!
//! The firmware runtime owns the RGB effect engine, the display driver and the keylog store.
//! The glue only sees them through these traits, so every hook can be driven by mocks.

use lechiffre_types::keycode::KeyCode;
use lechiffre_types::lighting::{Hsv, RgbMatrixMode};
use rgb::RGB8;

use crate::event::KeyRecord;

/// The RGB matrix effect engine.
///
/// All setters are the non-persistent variants: nothing here is written to EEPROM.
pub trait RgbMatrix {
    /// Number of physical LEDs driven by the matrix
    const LED_COUNT: usize;

    fn is_enabled(&self) -> bool;

    fn mode(&self) -> RgbMatrixMode;

    fn hsv(&self) -> Hsv;

    /// Global effect brightness
    fn val(&self) -> u8 {
        self.hsv().v
    }

    fn speed(&self) -> u8;

    fn set_enabled_noeeprom(&mut self, enabled: bool);

    fn set_mode_noeeprom(&mut self, mode: RgbMatrixMode);

    fn set_hsv_noeeprom(&mut self, hsv: Hsv);

    fn set_speed_noeeprom(&mut self, speed: u8);

    /// Override the color of one LED for the frame being rendered
    fn set_color(&mut self, index: usize, color: RGB8);
}

/// A character cell display, as exposed by the OLED driver.
pub trait TextDisplay {
    type Error;

    /// Move the cursor to a character cell
    fn set_cursor(&mut self, col: u8, line: u8);

    /// Write text at the cursor, advancing it
    fn write(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Sink for pressed keys, rendered later on the status display.
///
/// Every press is recorded, `keycode` is `None` for keys like layer switches which send nothing.
pub trait KeyLogger {
    fn record(&mut self, keycode: Option<KeyCode>, record: &KeyRecord);
}
