//! Tunable settings of the keymap glue.
//!
//! Every struct has a `Default` matching the stock firmware build, and can be deserialized
//! with missing fields falling back to those defaults, so host tooling can load partial files.

use lechiffre_types::lighting::{Hsv, RgbMatrixMode};
use serde::Deserialize;

/// The config struct for the Le Chiffre keymap glue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub rgb: RgbConfig,
    pub indicator: IndicatorConfig,
    pub display: DisplayConfig,
}

/// RGB matrix defaults and the step sizes of the lighting keys
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RgbConfig {
    /// Effect restored when the matrix is switched on with nothing saved
    pub default_mode: RgbMatrixMode,
    /// Color restored when the matrix is switched on with nothing saved
    pub default_hsv: Hsv,
    pub maximum_brightness: u8,
    pub hue_step: u8,
    pub sat_step: u8,
    pub val_step: u8,
    pub speed_step: u8,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            default_mode: RgbMatrixMode::CycleLeftRight,
            default_hsv: Hsv::new(0, 255, 255),
            maximum_brightness: 255,
            hue_step: 8,
            sat_step: 16,
            val_step: 16,
            speed_step: 16,
        }
    }
}

/// Layer indicator LED
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Position of the indicator LED, counted from the end of the LED chain
    pub led_from_end: usize,
    /// Floor applied to the matrix brightness, so the indicator stays visible when dimmed
    pub minimum_brightness: u8,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            led_from_end: 2,
            minimum_brightness: 10,
        }
    }
}

/// Layout of the status display, in character cells
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters per line, each line is padded to this width
    pub columns: u8,
    pub layer_line: u8,
    pub modifier_line: u8,
    pub lock_line: u8,
    pub keylog_line: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        // 128x32 panel with a 6x8 font
        Self {
            columns: 21,
            layer_line: 0,
            modifier_line: 1,
            lock_line: 2,
            keylog_line: 3,
        }
    }
}
