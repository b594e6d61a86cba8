use lechiffre_types::action::KeyAction;

use crate::display::KeyboardStatus;
use crate::event::KeyRecord;
use crate::layer::LayerState;

/// Callbacks the firmware runs at fixed points of its loop.
///
/// Every method has a pass-through default, a keymap only overrides what it needs.
pub trait UserHooks {
    /// Called once, after the firmware and its peripherals are up
    fn post_init(&mut self) {}

    /// Called for every key event before the firmware handles it.
    ///
    /// `action` is the action resolved from the keymap. Return `false` to consume the event.
    fn process_record(&mut self, _action: KeyAction, _record: &KeyRecord) -> bool {
        true
    }

    /// Called when the active layers change, the returned state is the one applied
    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        state
    }

    /// Called once per RGB frame, after the effect is rendered
    fn rgb_indicators(&mut self, _layers: LayerState) -> bool {
        true
    }

    /// Called on every display refresh. Return `false` to report a failed render.
    fn render_display(&mut self, _status: &KeyboardStatus) -> bool {
        true
    }
}

/// Keymap without hooks
impl UserHooks for () {}
