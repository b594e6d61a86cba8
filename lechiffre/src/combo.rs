use heapless::Vec;
use lechiffre_types::action::KeyAction;

// Max number of combos
pub const COMBO_MAX_NUM: usize = 8;
// Max number of keys in a combo
pub const COMBO_MAX_LENGTH: usize = 4;

/// A chord of keys that, pressed together, emits `output`.
///
/// Keys are identified by the action they resolve to on the active layers, so a combo follows
/// its keys when a layer moves them and stays silent on layers where they are something else.
#[derive(Clone, Debug)]
pub struct Combo {
    pub(crate) actions: Vec<KeyAction, COMBO_MAX_LENGTH>,
    pub(crate) output: KeyAction,
    pub(crate) layer: Option<u8>,
    state: u8,
}

impl Default for Combo {
    fn default() -> Self {
        Self::empty()
    }
}

impl Combo {
    pub fn new<I: IntoIterator<Item = KeyAction>>(actions: I, output: KeyAction, layer: Option<u8>) -> Self {
        let mut combo_actions = Vec::new();
        for action in actions {
            if combo_actions.push(action).is_err() {
                warn!("Combo has more than {} keys, extra keys are ignored", COMBO_MAX_LENGTH);
                break;
            }
        }
        Self {
            actions: combo_actions,
            output,
            layer,
            state: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new([], KeyAction::No, None)
    }

    pub fn actions(&self) -> &[KeyAction] {
        &self.actions
    }

    pub fn output(&self) -> KeyAction {
        self.output
    }

    pub fn layer(&self) -> Option<u8> {
        self.layer
    }

    /// Feed a pressed key, resolved through the keymap, into the combo.
    ///
    /// Returns `true` if the key belongs to this combo.
    pub(crate) fn update(&mut self, key_action: KeyAction, pressed: bool, active_layer: u8) -> bool {
        if !pressed || key_action.is_empty() || self.actions.is_empty() {
            return false;
        }

        if let Some(layer) = self.layer {
            if layer != active_layer {
                return false;
            }
        }

        let action_idx = self.actions.iter().position(|&a| a == key_action);
        if let Some(i) = action_idx {
            self.state |= 1 << i;
        } else if !self.done() {
            self.reset();
        }
        action_idx.is_some()
    }

    pub(crate) fn done(&self) -> bool {
        self.started() && self.keys_pressed() == self.actions.len() as u32
    }

    pub(crate) fn started(&self) -> bool {
        self.state != 0
    }

    pub(crate) fn keys_pressed(&self) -> u32 {
        self.state.count_ones()
    }

    pub(crate) fn reset(&mut self) {
        self.state = 0;
    }
}

/// The combo table, longest combos first.
#[derive(Clone, Debug, Default)]
pub struct Combos {
    combos: Vec<Combo, COMBO_MAX_NUM>,
}

impl Combos {
    pub fn new<I: IntoIterator<Item = Combo>>(combos: I) -> Self {
        let mut table = Vec::new();
        for combo in combos {
            if table.push(combo).is_err() {
                warn!("More than {} combos defined, extra combos are ignored", COMBO_MAX_NUM);
                break;
            }
        }
        reorder_combos(&mut table);
        Self { combos: table }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Feed a key event, already resolved to its action, to every combo.
    ///
    /// Returns the output of the first completed combo, all combos are reset then.
    /// Releasing a key cancels the combos it takes part in. Chord timeout is left to the firmware.
    pub fn process(&mut self, key_action: KeyAction, pressed: bool, active_layer: u8) -> Option<KeyAction> {
        if !pressed {
            self.combos
                .iter_mut()
                .filter(|c| c.actions.contains(&key_action))
                .for_each(Combo::reset);
            return None;
        }

        for combo in self.combos.iter_mut() {
            combo.update(key_action, pressed, active_layer);
        }

        let output = self.combos.iter().find(|c| c.done()).map(|c| c.output);
        if let Some(action) = output {
            debug!("Combo triggered: {:?}", action);
            self.reset();
        }
        output
    }

    pub fn reset(&mut self) {
        self.combos.iter_mut().for_each(Combo::reset);
    }
}

fn reorder_combos(combos: &mut [Combo]) {
    // Sort the combos by their length
    combos.sort_unstable_by(|c1, c2| c2.actions.len().cmp(&c1.actions.len()))
}

#[cfg(test)]
mod test {
    use lechiffre_types::keycode::HidKeyCode;

    use super::*;
    use crate::k;

    #[test]
    fn test_combo_reordering() {
        let combos = Combos::new([
            Combo::new([k!(A), k!(B)], k!(X), None),
            Combo::new([k!(A), k!(B), k!(C), k!(D)], k!(Z), None),
            Combo::new([k!(A), k!(B), k!(C)], k!(Y), None),
        ]);

        let lengths: std::vec::Vec<usize> = combos.iter().map(|c| c.actions().len()).collect();
        assert_eq!(lengths, [4, 3, 2]);
    }

    #[test]
    fn test_combo_triggers_in_any_order() {
        let mut combos = Combos::new([Combo::new([k!(W), k!(E)], k!(Escape), None)]);
        assert_eq!(combos.process(k!(E), true, 0), None);
        assert_eq!(combos.process(k!(W), true, 0), Some(k!(Escape)));
        // Everything was reset after triggering
        assert!(combos.iter().all(|c| !c.started()));
    }

    #[test]
    fn test_other_key_breaks_combo() {
        let mut combos = Combos::new([Combo::new([k!(W), k!(E)], k!(Escape), None)]);
        assert_eq!(combos.process(k!(W), true, 0), None);
        assert_eq!(combos.process(k!(S), true, 0), None);
        assert_eq!(combos.process(k!(E), true, 0), None);
    }

    #[test]
    fn test_empty_key_is_ignored() {
        let mut combos = Combos::new([Combo::new([k!(W), k!(E)], k!(Escape), None)]);
        assert_eq!(combos.process(k!(W), true, 0), None);
        assert_eq!(combos.process(KeyAction::No, true, 0), None);
        assert_eq!(combos.process(k!(E), true, 0), Some(k!(Escape)));
    }

    #[test]
    fn test_release_cancels_combo() {
        let mut combos = Combos::new([Combo::new([k!(W), k!(E)], k!(Escape), None)]);
        combos.process(k!(W), true, 0);
        combos.process(k!(W), false, 0);
        assert_eq!(combos.process(k!(E), true, 0), None);
    }

    #[test]
    fn test_combo_layer_restriction() {
        let mut combos = Combos::new([Combo::new([k!(W), k!(E)], k!(Escape), Some(0))]);
        combos.process(k!(W), true, 1);
        assert_eq!(combos.process(k!(E), true, 1), None);
        combos.process(k!(W), true, 0);
        assert_eq!(combos.process(k!(E), true, 0), Some(k!(Escape)));
    }

    #[test]
    fn test_too_many_keys_are_truncated() {
        let combo = Combo::new([k!(A), k!(B), k!(C), k!(D), k!(E), k!(F)], k!(Escape), None);
        assert_eq!(combo.actions().len(), COMBO_MAX_LENGTH);
        assert_eq!(combo.output().keycode().and_then(|k| k.as_hid()), Some(HidKeyCode::Escape));
    }
}
