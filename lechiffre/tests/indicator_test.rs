pub mod common;

use common::{LED_COUNT, MockRgb};
use lechiffre::config::{IndicatorConfig, KeyboardConfig};
use lechiffre::event::{KeyEvent, KeyRecord};
use lechiffre::host::RgbMatrix;
use lechiffre::keymaps::mkalinski::{self, GAMER, LAYER_INDICATORS, LEFT_NUMSYM, RIGHT_FUNCSPEC};
use lechiffre::layer::LayerState;
use lechiffre::light::LayerIndicator;
use lechiffre::types::lighting::{Hsv, RgbMatrixMode};
use rgb::RGB8;

const TOP_LED: usize = LED_COUNT - 2;

fn hold(row: u8, col: u8) -> KeyRecord {
    KeyRecord::new(KeyEvent::key(row, col, true))
}

fn release(row: u8, col: u8) -> KeyRecord {
    KeyRecord::new(KeyEvent::key(row, col, false))
}

fn rgb_with_val(v: u8) -> MockRgb {
    MockRgb::new(RgbMatrixMode::CycleLeftRight, Hsv::new(0, 255, v))
}

#[test]
fn test_indicator_precedence() {
    let indicator = LayerIndicator::new(&LAYER_INDICATORS, &IndicatorConfig::default());
    let blue = RGB8::new(0, 0, 255);
    let green = RGB8::new(0, 255, 0);
    let red = RGB8::new(255, 0, 0);

    let all = LayerState::new().with(GAMER).with(LEFT_NUMSYM).with(RIGHT_FUNCSPEC);
    assert_eq!(indicator.color_for(all, 255), blue);
    assert_eq!(indicator.color_for(LayerState::new().with(GAMER).with(LEFT_NUMSYM), 255), green);
    assert_eq!(indicator.color_for(LayerState::new().with(RIGHT_FUNCSPEC).with(GAMER), 255), blue);
    assert_eq!(indicator.color_for(LayerState::new().with(GAMER), 255), red);
    assert_eq!(indicator.color_for(LayerState::new(), 255), RGB8::new(0, 0, 0));
    assert_eq!(indicator.color_for(LayerState::new().with(0), 255), RGB8::new(0, 0, 0));
}

#[test]
fn test_indicator_follows_brightness() {
    let indicator = LayerIndicator::new(&LAYER_INDICATORS, &IndicatorConfig::default());
    let gamer = LayerState::new().with(GAMER);

    let mut rgb = rgb_with_val(100);
    assert!(indicator.render(gamer, &mut rgb));
    assert_eq!(rgb.colors[TOP_LED], Some(RGB8::new(100, 0, 0)));

    // Never fully dark while a layer is on
    let mut rgb = rgb_with_val(0);
    indicator.render(gamer, &mut rgb);
    assert_eq!(rgb.colors[TOP_LED], Some(RGB8::new(10, 0, 0)));

    let config = IndicatorConfig {
        minimum_brightness: 64,
        ..Default::default()
    };
    let indicator = LayerIndicator::new(&LAYER_INDICATORS, &config);
    indicator.render(gamer, &mut rgb);
    assert_eq!(rgb.colors[TOP_LED], Some(RGB8::new(64, 0, 0)));
}

#[test]
fn test_only_the_top_led_is_painted() {
    let indicator = LayerIndicator::new(&LAYER_INDICATORS, &IndicatorConfig::default());
    let mut rgb = rgb_with_val(255);
    indicator.render(LayerState::new().with(LEFT_NUMSYM), &mut rgb);
    for (i, color) in rgb.colors.iter().enumerate() {
        if i == TOP_LED {
            assert_eq!(*color, Some(RGB8::new(0, 255, 0)));
        } else {
            assert_eq!(*color, None);
        }
    }
}

#[test]
fn test_indicator_tracks_keyboard_layers() {
    let mut keyboard = mkalinski::keyboard(rgb_with_val(255), &KeyboardConfig::default());
    keyboard.init();

    assert!(keyboard.refresh_indicators());
    assert_eq!(keyboard.hooks().rgb().colors[TOP_LED], Some(RGB8::new(0, 0, 0)));

    // Right thumb held: function layer
    keyboard.process_key(hold(3, 7));
    keyboard.refresh_indicators();
    assert_eq!(keyboard.hooks().rgb().colors[TOP_LED], Some(RGB8::new(0, 0, 255)));

    // Toggle the gamer layer from there, it stays on after the thumb is released
    keyboard.process_key(hold(0, 5));
    keyboard.process_key(release(0, 5));
    keyboard.process_key(release(3, 7));
    assert!(keyboard.layer_state().is_on(GAMER));
    assert!(!keyboard.layer_state().is_on(RIGHT_FUNCSPEC));
    keyboard.refresh_indicators();
    assert_eq!(keyboard.hooks().rgb().colors[TOP_LED], Some(RGB8::new(255, 0, 0)));

    // Left thumb on top of the gamer layer
    keyboard.process_key(hold(3, 3));
    keyboard.refresh_indicators();
    assert_eq!(keyboard.hooks().rgb().colors[TOP_LED], Some(RGB8::new(0, 255, 0)));
}

#[test]
fn test_indicator_stays_visible_when_lighting_is_toggled_off() {
    let mut keyboard = mkalinski::keyboard(rgb_with_val(200), &KeyboardConfig::default());
    keyboard.process_key(hold(3, 7));
    keyboard.process_key(hold(1, 0));
    assert_eq!(keyboard.hooks().rgb().val(), 0);
    keyboard.refresh_indicators();
    assert_eq!(keyboard.hooks().rgb().colors[TOP_LED], Some(RGB8::new(0, 0, 10)));
}

#[test]
fn test_zero_led_offset_paints_nothing() {
    let config = IndicatorConfig {
        led_from_end: 0,
        ..Default::default()
    };
    let indicator = LayerIndicator::new(&LAYER_INDICATORS, &config);
    let mut rgb = rgb_with_val(255);
    assert!(indicator.render(LayerState::new().with(GAMER), &mut rgb));
    assert!(rgb.colors.iter().all(Option::is_none));
}
