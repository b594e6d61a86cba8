use rgb::RGB8;

use crate::config::IndicatorConfig;
use crate::host::RgbMatrix;
use crate::layer::LayerState;

/// Scale one color channel by the matrix brightness.
///
/// The brightness is raised to `minimum` first, so the result stays visible on a dimmed
/// matrix. The result never exceeds `color`.
pub fn scale_color_by_val(color: u8, val: u8, minimum: u8) -> u8 {
    let val = val.max(minimum) as u16;
    (color as u16 * val / 255) as u8
}

/// Scale every channel of `color`, see [`scale_color_by_val`]
pub fn scale_rgb_by_val(color: RGB8, val: u8, minimum: u8) -> RGB8 {
    RGB8::new(
        scale_color_by_val(color.r, val, minimum),
        scale_color_by_val(color.g, val, minimum),
        scale_color_by_val(color.b, val, minimum),
    )
}

/// Color shown while `layer` is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorRule {
    pub layer: u8,
    pub color: RGB8,
}

impl IndicatorRule {
    pub const fn new(layer: u8, color: RGB8) -> Self {
        Self { layer, color }
    }
}

/// One LED showing which layer is on top, drawn over the running effect.
pub struct LayerIndicator<'a> {
    /// Checked in order, the first active layer wins
    rules: &'a [IndicatorRule],
    led_from_end: usize,
    minimum_brightness: u8,
}

impl<'a> LayerIndicator<'a> {
    pub fn new(rules: &'a [IndicatorRule], config: &IndicatorConfig) -> Self {
        Self {
            rules,
            led_from_end: config.led_from_end,
            minimum_brightness: config.minimum_brightness,
        }
    }

    /// Indicator color for the given layers and matrix brightness, black when no rule matches
    pub fn color_for(&self, layers: LayerState, val: u8) -> RGB8 {
        self.rules
            .iter()
            .find(|rule| layers.is_on(rule.layer))
            .map(|rule| scale_rgb_by_val(rule.color, val, self.minimum_brightness))
            .unwrap_or_default()
    }

    /// Index of the indicator LED on a matrix with `led_count` LEDs.
    ///
    /// `led_from_end` counts from 1, the last LED, so an offset of 0 points past the chain.
    pub fn led_index(&self, led_count: usize) -> Option<usize> {
        led_count.checked_sub(self.led_from_end).filter(|&i| i < led_count)
    }

    /// Paint the indicator LED for the current frame.
    ///
    /// Always returns `true`, leaving the rest of the indicator pipeline to run.
    pub fn render<R: RgbMatrix>(&self, layers: LayerState, rgb: &mut R) -> bool {
        let Some(index) = self.led_index(R::LED_COUNT) else {
            warn!("Indicator LED is out of range, the matrix has {} LEDs", R::LED_COUNT);
            return true;
        };
        let color = self.color_for(layers, rgb.val());
        rgb.set_color(index, color);
        true
    }
}
