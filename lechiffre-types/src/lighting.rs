//! RGB matrix effect modes and colors.
use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Effects of the RGB matrix effect engine, in the engine's numbering.
///
/// `None` is never selected by stepping through the modes.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbMatrixMode {
    None = 0,
    SolidColor = 1,
    AlphasMods = 2,
    GradientUpDown = 3,
    GradientLeftRight = 4,
    Breathing = 5,
    BandSat = 6,
    BandVal = 7,
    CycleAll = 8,
    CycleLeftRight = 9,
    CycleUpDown = 10,
    RainbowMovingChevron = 11,
    CycleOutIn = 12,
    CycleSpiral = 13,
    RainbowBeacon = 14,
    RainbowPinwheels = 15,
    Raindrops = 16,
    Typing = 17,
}

impl RgbMatrixMode {
    pub const FIRST: Self = RgbMatrixMode::SolidColor;
    pub const LAST: Self = RgbMatrixMode::Typing;

    /// Next effect, wrapping around to the first one
    pub fn next(self) -> Self {
        if self >= Self::LAST {
            Self::FIRST
        } else {
            Self::from_repr(self as u8 + 1).unwrap_or(Self::FIRST)
        }
    }

    /// Previous effect, wrapping around to the last one
    pub fn previous(self) -> Self {
        if self <= Self::FIRST {
            Self::LAST
        } else {
            Self::from_repr(self as u8 - 1).unwrap_or(Self::LAST)
        }
    }
}

impl Default for RgbMatrixMode {
    fn default() -> Self {
        RgbMatrixMode::CycleLeftRight
    }
}

/// Hue/saturation/value color, every channel ranges over 0~255.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Value is the only channel that matters for the LEDs being dark
    pub fn is_dark(&self) -> bool {
        self.v == 0
    }
}
