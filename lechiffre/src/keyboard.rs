use lechiffre_types::action::{Action, KeyAction};
use lechiffre_types::led_indicator::LedIndicator;
use lechiffre_types::modifier::HidModifiers;

use crate::display::KeyboardStatus;
use crate::event::{Direction, KeyEvent, KeyRecord};
use crate::hooks::UserHooks;
use crate::keymap::KeyMap;
use crate::layer::LayerState;

/// What the firmware should do with a key event after the glue has seen it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// A user hook handled the event
    Consumed,
    /// The event switched layers, nothing left to do
    Layer,
    /// Default processing: send the key, apply the modifier or the lighting change
    Forward(Action),
    /// No action at this position
    Ignored,
}

/// Runs the keymap and the user hooks for every event the firmware reports.
pub struct Keyboard<'a, H, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>,
    hooks: H,
}

impl<'a, H: UserHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    Keyboard<'a, H, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>, hooks: H) -> Self {
        Self { keymap, hooks }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER> {
        &self.keymap
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }

    /// Run the post-init hook, once the firmware is up
    pub fn init(&mut self) {
        info!("Keyboard initialized, {} layers", NUM_LAYER);
        self.hooks.post_init();
    }

    /// Process a key event whose tap/hold outcome is already known
    pub fn process_key(&mut self, record: KeyRecord) -> KeyOutcome {
        let action = self.keymap.get_action_with_layer_cache(record.event);
        if action == KeyAction::No {
            return KeyOutcome::Ignored;
        }

        if !self.hooks.process_record(action, &record) {
            debug!("Key event consumed by user hook: {:?}", action);
            return KeyOutcome::Consumed;
        }

        match action {
            KeyAction::Single(a) => self.process_action(a, record.pressed()),
            KeyAction::TapHold(tap, hold) => {
                if record.tap_count > 0 {
                    self.process_action(tap, record.pressed())
                } else {
                    self.process_action(hold, record.pressed())
                }
            }
            KeyAction::No | KeyAction::Transparent => KeyOutcome::Ignored,
        }
    }

    /// Process one encoder detent.
    ///
    /// The resolved action is pressed and released at once, so momentary layers have no effect.
    pub fn process_encoder(&mut self, id: u8, direction: Direction) -> KeyOutcome {
        match self.keymap.get_encoder_action(id, direction) {
            KeyAction::Single(a) | KeyAction::TapHold(a, _) => {
                let outcome = self.process_action(a, true);
                self.process_action(a, false);
                outcome
            }
            KeyAction::No | KeyAction::Transparent => KeyOutcome::Ignored,
        }
    }

    /// Feed a key event to the combos.
    ///
    /// The key is resolved through the active layers first, combos match on the resulting action.
    /// The firmware buffers the keys of a pending chord and calls this for each, the output of
    /// a completed combo replaces them.
    pub fn process_combo(&mut self, event: KeyEvent) -> Option<KeyAction> {
        let layer = self.keymap.get_activated_layer();
        let action = self.keymap.resolve_action(event.pos);
        self.keymap.combos.process(action, event.pressed, layer)
    }

    /// Run the indicator hook, on every RGB frame
    pub fn refresh_indicators(&mut self) -> bool {
        self.hooks.rgb_indicators(self.keymap.layer_state())
    }

    /// Run the display hook with the current host state
    pub fn refresh_display(&mut self, modifiers: HidModifiers, locks: LedIndicator) -> bool {
        let status = KeyboardStatus {
            layers: self.keymap.layer_state(),
            modifiers,
            locks,
        };
        self.hooks.render_display(&status)
    }

    fn process_action(&mut self, action: Action, pressed: bool) -> KeyOutcome {
        let before = self.keymap.layer_state();
        match action {
            Action::LayerOn(layer) => {
                if pressed {
                    self.keymap.activate_layer(layer);
                } else {
                    self.keymap.deactivate_layer(layer);
                }
            }
            Action::LayerOff(layer) => {
                if pressed {
                    self.keymap.deactivate_layer(layer);
                }
            }
            Action::LayerToggle(layer) => {
                if pressed {
                    self.keymap.toggle_layer(layer);
                }
            }
            _ => return KeyOutcome::Forward(action),
        }

        let after = self.keymap.layer_state();
        if after != before {
            let state = self.hooks.layer_state_set(after);
            debug!("Layer state changed: {:#x}", state.bits());
            self.keymap.set_layer_state(state);
        }
        KeyOutcome::Layer
    }
}
