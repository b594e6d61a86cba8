use lechiffre_types::lighting::{Hsv, RgbMatrixMode};

use crate::config::RgbConfig;
use crate::host::RgbMatrix;

/// What a toggle did to the matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightingState {
    On,
    Off,
}

/// Switches the RGB matrix off by making it dark instead of disabling it.
///
/// The matrix keeps running, so the per-key indicator drawn on top of the effect stays visible.
/// "Off" is recognised by the brightness being `0`: toggling a matrix whose brightness was set to
/// `0` by other means brings the saved (or default) look back.
#[derive(Clone, Debug)]
pub struct PseudoToggle {
    saved_mode: RgbMatrixMode,
    saved_hsv: Hsv,
    default_mode: RgbMatrixMode,
    default_hsv: Hsv,
}

impl PseudoToggle {
    pub fn new(config: &RgbConfig) -> Self {
        Self {
            saved_mode: RgbMatrixMode::SolidColor,
            saved_hsv: Hsv::OFF,
            default_mode: config.default_mode,
            default_hsv: config.default_hsv,
        }
    }

    /// Mode and color restored by the next toggle
    pub fn saved(&self) -> (RgbMatrixMode, Hsv) {
        (self.saved_mode, self.saved_hsv)
    }

    pub fn toggle<R: RgbMatrix>(&mut self, rgb: &mut R) -> LightingState {
        if rgb.val() == 0 {
            if self.saved_hsv.is_dark() {
                // Nothing worth restoring, e.g. first toggle after boot with a dark matrix
                debug!("RGB on, restoring defaults");
                rgb.set_mode_noeeprom(self.default_mode);
                rgb.set_hsv_noeeprom(self.default_hsv);
            } else {
                debug!("RGB on, restoring saved mode");
                rgb.set_mode_noeeprom(self.saved_mode);
                rgb.set_hsv_noeeprom(self.saved_hsv);
            }
            LightingState::On
        } else {
            self.saved_mode = rgb.mode();
            self.saved_hsv = rgb.hsv();
            debug!("RGB off");
            rgb.set_mode_noeeprom(RgbMatrixMode::SolidColor);
            rgb.set_hsv_noeeprom(Hsv::OFF);
            LightingState::Off
        }
    }
}
