//! Keyboard actions and behaviors.
//!
//! Actions represent what happens when a key is pressed, from simple key
//! presses to tap-hold and layer switching.
//!
//! Key types:
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - Behaviors stored at each keymap position
//! - [`EncoderAction`] - Rotary encoder actions

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Both directions defer to the next active layer down
    pub const fn transparent() -> Self {
        Self::new(KeyAction::Transparent, KeyAction::Transparent)
    }

    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

impl KeyAction {
    /// The keycode the user hooks see for this action.
    ///
    /// Tap/hold keys report their tap keycode, layer and modifier actions have none.
    pub fn keycode(&self) -> Option<KeyCode> {
        match self {
            KeyAction::Single(a) | KeyAction::TapHold(a, _) => a.keycode(),
            _ => None,
        }
    }

    /// Layer referenced by this action, if any
    pub fn layer(&self) -> Option<u8> {
        match self {
            KeyAction::Single(a) => a.layer(),
            KeyAction::TapHold(t, h) => t.layer().or(h.layer()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum.
    Key(KeyCode),
    /// Modifier Combination, used as the hold action of mod-tap keys.
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
}

impl Action {
    pub fn keycode(&self) -> Option<KeyCode> {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => Some(*k),
            _ => None,
        }
    }

    pub fn layer(&self) -> Option<u8> {
        match self {
            Action::LayerOn(l) | Action::LayerOff(l) | Action::LayerToggle(l) => Some(*l),
            _ => None,
        }
    }
}
