#![cfg(feature = "display")]

pub mod common;

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use lechiffre::config::{DisplayConfig, KeyboardConfig};
use lechiffre::display::GraphicsTextDisplay;
use lechiffre::event::{KeyEvent, KeyRecord};
use lechiffre::keymaps::oled;
use lechiffre::types::led_indicator::LedIndicator;
use lechiffre::types::modifier::HidModifiers;

fn lit_pixels(display: &MockDisplay<BinaryColor>, x: std::ops::Range<i32>, y: std::ops::Range<i32>) -> usize {
    x.flat_map(|x| y.clone().map(move |y| Point::new(x, y)))
        .filter(|&p| display.get_pixel(p) == Some(BinaryColor::On))
        .count()
}

#[test]
fn test_status_on_graphics_display() {
    let mut target = MockDisplay::<BinaryColor>::new();
    target.set_allow_overdraw(true);

    // 10 columns of 6px and 4 lines of 10px fit the 64x64 mock
    let config = KeyboardConfig {
        display: DisplayConfig {
            columns: 10,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut keyboard = oled::keyboard(GraphicsTextDisplay::new(target), &config);
    keyboard.init();
    keyboard.process_key(KeyRecord::tapped(KeyEvent::key(0, 0, true)));
    assert!(keyboard.refresh_display(HidModifiers::new(), LedIndicator::new()));

    let display = keyboard.hooks().display().target();
    // "Base" on the first line
    assert!(lit_pixels(display, 0..24, 0..10) > 0);
    // Blank modifier and lock lines
    assert_eq!(lit_pixels(display, 0..60, 10..30), 0);
    // Keylog on the last line
    assert!(lit_pixels(display, 0..60, 30..40) > 0);
    // Nothing past the configured width
    assert_eq!(lit_pixels(display, 60..64, 0..64), 0);
}
