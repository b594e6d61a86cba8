//! Home row mods, a toggled gamer layer and one layer per hand for symbols and functions.
//!
//! The RGB matrix is switched "off" by darkening it, so the top LED on the face can keep
//! showing the active layer.

use lechiffre_types::action::{EncoderAction, KeyAction};
use lechiffre_types::keycode::KeyCode;
use lechiffre_types::modifier::ModifierCombination;
use rgb::RGB8;

use super::{COL, NUM_ENCODER, ROW};
use crate::combo::{Combo, Combos};
use crate::config::{KeyboardConfig, RgbConfig};
use crate::event::KeyRecord;
use crate::hooks::UserHooks;
use crate::host::RgbMatrix;
use crate::keyboard::Keyboard;
use crate::keymap::KeyMap;
use crate::layer::LayerState;
use crate::light::{IndicatorRule, LayerIndicator, PseudoToggle, apply_lighting};
use crate::{a, encoder, k, lt, media, mt, shifted, tg, ug, user};

pub const NUM_LAYER: usize = 4;

pub const BASE: u8 = 0;
/// WASD games: the left half moves one column right, with Esc, Shift and Ctrl on the outer column
pub const GAMER: u8 = 1;
/// Numbers and symbols, held with the left thumb
pub const LEFT_NUMSYM: u8 = 2;
/// F-keys, navigation and RGB controls, held with the right thumb
pub const RIGHT_FUNCSPEC: u8 = 3;

/// Switches the RGB matrix dark and back
pub const RGB_PSEUDO_TOGGLE: KeyCode = KeyCode::User(0);

const MY_RGBT: KeyAction = user!(0);

// Thumbs
const MY_LMOD: KeyAction = lt!(LEFT_NUMSYM, Tab);
const MY_LSPC: KeyAction = mt!(Space, ModifierCombination::LALT);
const MY_RSPC: KeyAction = mt!(Enter, ModifierCombination::RALT);
const MY_RMOD: KeyAction = lt!(RIGHT_FUNCSPEC, Quote);

// Home row mods, shift on the middle finger
const MY_CS: KeyAction = mt!(S, ModifierCombination::LCTRL);
const MY_SD: KeyAction = mt!(D, ModifierCombination::LSHIFT);
const MY_GF: KeyAction = mt!(F, ModifierCombination::LGUI);
const MY_GJ: KeyAction = mt!(J, ModifierCombination::RGUI);
const MY_SK: KeyAction = mt!(K, ModifierCombination::RSHIFT);
const MY_CL: KeyAction = mt!(L, ModifierCombination::RCTRL);
const MY_CMI: KeyAction = mt!(Minus, ModifierCombination::RCTRL);

const TRNS: KeyAction = a!(Transparent);

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Layer 0: BASE
        layout!(
            k!(Q), k!(W), k!(E), k!(R), k!(T), media!(PlayPause), k!(Y), k!(U), k!(I), k!(O), k!(P),
            k!(A), MY_CS, MY_SD, MY_GF, k!(G),                    k!(H), MY_GJ, MY_SK, MY_CL, k!(Semicolon),
            k!(Z), k!(X), k!(C), k!(V), k!(B),                    k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash),
                                 MY_LMOD, MY_LSPC,                MY_RSPC, MY_RMOD
        ),
        // Layer 1: GAMER
        layout!(
            k!(Escape), k!(Q), k!(W), k!(E), k!(R), tg!(GAMER), TRNS, TRNS, TRNS, TRNS, TRNS,
            k!(LShift), k!(A), k!(S), k!(D), k!(F),             TRNS, TRNS, TRNS, TRNS, TRNS,
            k!(LCtrl),  k!(Z), k!(X), k!(C), k!(V),             TRNS, TRNS, TRNS, TRNS, TRNS,
                                      TRNS, k!(Space),          TRNS, TRNS
        ),
        // Layer 2: LEFT_NUMSYM
        layout!(
            k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), media!(Mute), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0),
            TRNS, TRNS, TRNS, TRNS, TRNS,                                TRNS, TRNS, TRNS, MY_CMI, k!(Equal),
            k!(Delete), k!(Insert), shifted!(LeftBracket), k!(LeftBracket), shifted!(Kc9),
            shifted!(Kc0), k!(RightBracket), shifted!(RightBracket), k!(Backslash), k!(Grave),
                                          TRNS, TRNS,                    TRNS, TRNS
        ),
        // Layer 3: RIGHT_FUNCSPEC
        layout!(
            k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), tg!(GAMER), k!(F6), k!(F7), k!(Up), k!(F8), k!(F9),
            MY_RGBT, TRNS, TRNS, TRNS, k!(PrintScreen),         k!(Home), k!(Left), k!(Down), k!(Right), k!(End),
            ug!(ModeNext), ug!(HueUp), ug!(SaturationUp), ug!(ValueUp), ug!(SpeedUp),
            k!(PageUp), k!(F10), k!(F11), k!(F12), k!(PageDown),
                                    TRNS, TRNS,                 k!(Space), TRNS
        ),
    ]
}

#[rustfmt::skip]
pub const fn get_default_encoder_map() -> [[EncoderAction; NUM_ENCODER]; NUM_LAYER] {
    [
        // Encoder 0: (Clockwise, Counter-Clockwise)
        [encoder!(media!(FastForward), media!(Rewind))],
        [encoder!(media!(VolumeIncrement), media!(VolumeDecrement))],
        [encoder!(media!(NextTrack), media!(PrevTrack))],
        [encoder!(media!(VolumeIncrement), media!(VolumeDecrement))],
    ]
}

pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = get_default_encoder_map();

/// Esc on W+E and Backspace on I+O, wherever the active layer puts those keys
pub fn get_combos() -> Combos {
    Combos::new([
        Combo::new([k!(W), k!(E)], k!(Escape), None),
        Combo::new([k!(I), k!(O)], k!(Backspace), None),
    ])
}

/// Indicator colors, highest priority first
pub const LAYER_INDICATORS: [IndicatorRule; 3] = [
    IndicatorRule::new(RIGHT_FUNCSPEC, RGB8::new(0, 0, 0xFF)),
    IndicatorRule::new(LEFT_NUMSYM, RGB8::new(0, 0xFF, 0)),
    IndicatorRule::new(GAMER, RGB8::new(0xFF, 0, 0)),
];

/// User hooks of this keymap, owning the RGB matrix handle
pub struct Hooks<R> {
    rgb: R,
    rgb_config: RgbConfig,
    toggle: PseudoToggle,
    indicator: LayerIndicator<'static>,
}

impl<R: RgbMatrix> Hooks<R> {
    pub fn new(rgb: R, config: &KeyboardConfig) -> Self {
        Self {
            rgb,
            rgb_config: config.rgb.clone(),
            toggle: PseudoToggle::new(&config.rgb),
            indicator: LayerIndicator::new(&LAYER_INDICATORS, &config.indicator),
        }
    }

    pub fn rgb(&self) -> &R {
        &self.rgb
    }

    pub fn rgb_mut(&mut self) -> &mut R {
        &mut self.rgb
    }

    pub fn pseudo_toggle(&self) -> &PseudoToggle {
        &self.toggle
    }
}

impl<R: RgbMatrix> UserHooks for Hooks<R> {
    fn process_record(&mut self, action: KeyAction, record: &KeyRecord) -> bool {
        match action {
            KeyAction::Single(_) if action.keycode() == Some(RGB_PSEUDO_TOGGLE) => {
                if record.pressed() {
                    let state = self.toggle.toggle(&mut self.rgb);
                    info!("RGB pseudo-toggle: {:?}", state);
                }
                false
            }
            KeyAction::Single(_) => match action.keycode() {
                Some(KeyCode::Lighting(key)) => {
                    if record.pressed() {
                        apply_lighting(key, &mut self.rgb, &self.rgb_config);
                    }
                    false
                }
                _ => true,
            },
            _ => true,
        }
    }

    fn rgb_indicators(&mut self, layers: LayerState) -> bool {
        self.indicator.render(layers, &mut self.rgb)
    }
}

/// Build the keyboard with this keymap
pub fn keyboard<R: RgbMatrix>(
    rgb: R,
    config: &KeyboardConfig,
) -> Keyboard<'static, Hooks<R>, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    let keymap = KeyMap::new(&KEYMAP, Some(&ENCODER_MAP), get_combos());
    Keyboard::new(keymap, Hooks::new(rgb, config))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::KeyPos;

    #[test]
    fn test_keymap_is_valid() {
        let keymap = KeyMap::new(&KEYMAP, Some(&ENCODER_MAP), get_combos());
        assert_eq!(keymap.validate(), Ok(()));
    }

    #[test]
    fn test_combo_keys_are_reachable() {
        let keymap = KeyMap::new(&KEYMAP, Some(&ENCODER_MAP), get_combos());
        let base: std::vec::Vec<KeyAction> = [(0, 1), (0, 2), (0, 8), (0, 9)]
            .into_iter()
            .map(|(row, col)| keymap.get_action_at(KeyPos::new(row, col), BASE as usize))
            .collect();
        assert_eq!(base, [k!(W), k!(E), k!(I), k!(O)]);
        assert_eq!(get_combos().len(), 2);
    }
}
