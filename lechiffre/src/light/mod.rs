//! RGB matrix handling: the pseudo-toggle, the layer indicator LED and the lighting keys.

mod indicator;
mod toggle;

pub use indicator::{IndicatorRule, LayerIndicator, scale_color_by_val, scale_rgb_by_val};
pub use toggle::{LightingState, PseudoToggle};

use lechiffre_types::keycode::LightingKey;

use crate::config::RgbConfig;
use crate::host::RgbMatrix;

/// Apply a lighting key press to the matrix.
///
/// Hue wraps around, the other channels stop at their bounds. Brightness never goes above
/// `maximum_brightness`.
pub fn apply_lighting<R: RgbMatrix>(key: LightingKey, rgb: &mut R, config: &RgbConfig) {
    let mut hsv = rgb.hsv();
    match key {
        LightingKey::Toggle => {
            let enabled = !rgb.is_enabled();
            rgb.set_enabled_noeeprom(enabled);
            return;
        }
        LightingKey::ModeNext => {
            rgb.set_mode_noeeprom(rgb.mode().next());
            return;
        }
        LightingKey::ModePrevious => {
            rgb.set_mode_noeeprom(rgb.mode().previous());
            return;
        }
        LightingKey::SpeedUp => {
            rgb.set_speed_noeeprom(rgb.speed().saturating_add(config.speed_step));
            return;
        }
        LightingKey::SpeedDown => {
            rgb.set_speed_noeeprom(rgb.speed().saturating_sub(config.speed_step));
            return;
        }
        LightingKey::HueUp => hsv.h = hsv.h.wrapping_add(config.hue_step),
        LightingKey::HueDown => hsv.h = hsv.h.wrapping_sub(config.hue_step),
        LightingKey::SaturationUp => hsv.s = hsv.s.saturating_add(config.sat_step),
        LightingKey::SaturationDown => hsv.s = hsv.s.saturating_sub(config.sat_step),
        LightingKey::ValueUp => {
            hsv.v = hsv.v.saturating_add(config.val_step).min(config.maximum_brightness);
        }
        LightingKey::ValueDown => hsv.v = hsv.v.saturating_sub(config.val_step),
    }
    debug!("Lighting key {:?}, hsv is now {:?}", key, hsv);
    rgb.set_hsv_noeeprom(hsv);
}
