//! Keymap for boards fitted with the 128x32 OLED: the screen shows the active layer name,
//! modifiers, lock keys and the last pressed keys.

use lechiffre_types::action::{EncoderAction, KeyAction};
use lechiffre_types::modifier::ModifierCombination;

use super::{COL, NUM_ENCODER, ROW};
use crate::combo::Combos;
use crate::config::{DisplayConfig, KeyboardConfig};
use crate::display::{KeyLog, KeyboardStatus, LayerNameBuffer, render_status};
use crate::event::KeyRecord;
use crate::hooks::UserHooks;
use crate::host::{KeyLogger, TextDisplay};
use crate::keyboard::Keyboard;
use crate::keymap::KeyMap;
use crate::layer::LayerState;
use crate::{a, encoder, k, lt, media, mo, mt, shifted, ug};

pub const NUM_LAYER: usize = 4;

pub const BASE: u8 = 0;
pub const LOWER: u8 = 1;
pub const RAISE: u8 = 2;
/// Lighting controls, reached by holding both thumb layer keys
pub const ADJUST: u8 = 3;

pub const LAYER_NAMES: [&str; NUM_LAYER] = ["Base", "Lower", "Raise", "Adjust"];

/// Layer name buffer size, names are cut to one byte less
pub const LAYER_NAME_LEN: usize = 8;
/// Number of keys kept by the keylogger
pub const KEYLOG_LEN: usize = 12;

const TRNS: KeyAction = a!(Transparent);

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Layer 0: BASE
        layout!(
            k!(Q), k!(W), k!(E), k!(R), k!(T), media!(Mute), k!(Y), k!(U), k!(I), k!(O), k!(P),
            k!(A), k!(S), k!(D), k!(F), k!(G),               k!(H), k!(J), k!(K), k!(L), k!(Semicolon),
            k!(Z), k!(X), k!(C), k!(V), k!(B),               k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash),
                    lt!(LOWER, Tab), mt!(Space, ModifierCombination::LSHIFT),
                    mt!(Enter, ModifierCombination::RSHIFT), lt!(RAISE, Backspace)
        ),
        // Layer 1: LOWER
        layout!(
            k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), TRNS, k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0),
            k!(Escape), k!(Grave), k!(Backslash), k!(Minus), k!(Equal),
            k!(Left), k!(Down), k!(Up), k!(Right), k!(Quote),
            k!(LCtrl), k!(LGui), k!(LAlt), k!(LeftBracket), k!(RightBracket),
            k!(Home), k!(PageDown), k!(PageUp), k!(End), k!(Enter),
                                        TRNS, TRNS,            TRNS, mo!(ADJUST)
        ),
        // Layer 2: RAISE
        layout!(
            k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), TRNS, k!(F6), k!(F7), k!(F8), k!(F9), k!(F10),
            k!(F11), k!(F12), k!(PrintScreen), k!(Insert), k!(Delete),
            shifted!(Kc9), shifted!(Kc0), shifted!(LeftBracket), shifted!(RightBracket), shifted!(Backslash),
            TRNS, TRNS, TRNS, TRNS, TRNS,                      TRNS, TRNS, TRNS, TRNS, TRNS,
                                        mo!(ADJUST), TRNS,     TRNS, TRNS
        ),
        // Layer 3: ADJUST
        layout!(
            ug!(Toggle), ug!(ModeNext), ug!(HueUp), ug!(SaturationUp), ug!(ValueUp), TRNS,
            ug!(SpeedUp), TRNS, TRNS, TRNS, TRNS,
            TRNS, ug!(ModePrevious), ug!(HueDown), ug!(SaturationDown), ug!(ValueDown),
            ug!(SpeedDown), TRNS, TRNS, TRNS, TRNS,
            TRNS, TRNS, TRNS, TRNS, TRNS,                      TRNS, TRNS, TRNS, TRNS, TRNS,
                                        TRNS, TRNS,            TRNS, TRNS
        ),
    ]
}

#[rustfmt::skip]
pub const fn get_default_encoder_map() -> [[EncoderAction; NUM_ENCODER]; NUM_LAYER] {
    [
        // Encoder 0: (Clockwise, Counter-Clockwise)
        [encoder!(media!(VolumeIncrement), media!(VolumeDecrement))],
        [encoder!(media!(NextTrack), media!(PrevTrack))],
        [encoder!(k!(PageDown), k!(PageUp))],
        [encoder!(ug!(HueUp), ug!(HueDown))],
    ]
}

pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = get_default_encoder_map();

/// User hooks of this keymap, owning the display
pub struct Hooks<D> {
    display: D,
    config: DisplayConfig,
    layer_name: LayerNameBuffer<LAYER_NAME_LEN>,
    keylog: KeyLog<KEYLOG_LEN>,
}

impl<D: TextDisplay> Hooks<D> {
    pub fn new(display: D, config: &KeyboardConfig) -> Self {
        Self {
            display,
            config: config.display.clone(),
            layer_name: LayerNameBuffer::new(),
            keylog: KeyLog::new(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn layer_name(&self) -> &str {
        self.layer_name.as_str()
    }

    pub fn keylog(&self) -> &KeyLog<KEYLOG_LEN> {
        &self.keylog
    }
}

impl<D: TextDisplay> UserHooks for Hooks<D> {
    fn post_init(&mut self) {
        // Nothing has changed layers yet, fill the buffer for the first frame
        self.layer_name.update(LayerState::new(), &LAYER_NAMES, true);
    }

    fn process_record(&mut self, action: KeyAction, record: &KeyRecord) -> bool {
        if record.pressed() {
            self.keylog.record(action.keycode(), record);
        }
        true
    }

    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        self.layer_name.update(state, &LAYER_NAMES, false);
        state
    }

    fn render_display(&mut self, status: &KeyboardStatus) -> bool {
        match render_status(&mut self.display, &self.config, &self.layer_name, status, Some(&self.keylog)) {
            Ok(()) => true,
            Err(_) => {
                error!("Failed to render the status display");
                false
            }
        }
    }
}

/// Build the keyboard with this keymap
pub fn keyboard<D: TextDisplay>(
    display: D,
    config: &KeyboardConfig,
) -> Keyboard<'static, Hooks<D>, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    let keymap = KeyMap::new(&KEYMAP, Some(&ENCODER_MAP), Combos::default());
    Keyboard::new(keymap, Hooks::new(display, config))
}
