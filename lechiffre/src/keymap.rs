use core::fmt;

use lechiffre_types::action::{EncoderAction, KeyAction};

use crate::combo::Combos;
use crate::event::{Direction, KeyEvent, KeyPos};
use crate::layer::LayerState;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The firmware detects hardware key strokes, uses tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    /// Layers
    pub(crate) layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Rotary encoders, each rotary encoder is represented as (Clockwise, CounterClockwise)
    pub(crate) encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    /// Current state of each layer
    layer_state: LayerState,
    /// Layer cache, the layer each pressed key was resolved from
    layer_cache: [[u8; COL]; ROW],
    /// Combos
    pub(crate) combos: Combos,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(
        action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoder_map: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
        combos: Combos,
    ) -> Self {
        KeyMap {
            layers: action_map,
            encoders: encoder_map,
            layer_state: LayerState::new(),
            layer_cache: [[0; COL]; ROW],
            combos,
        }
    }

    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    pub(crate) fn set_layer_state(&mut self, state: LayerState) {
        self.layer_state = state;
    }

    /// Highest active layer
    pub fn get_activated_layer(&self) -> u8 {
        self.layer_state.highest()
    }

    /// Fetch the action at the given layer, without resolving transparent keys
    pub fn get_action_at(&self, pos: KeyPos, layer_num: usize) -> KeyAction {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if layer_num >= NUM_LAYER || row >= ROW || col >= COL {
            warn!("No key at ({}, {}) on layer {}", pos.row, pos.col, layer_num);
            return KeyAction::No;
        }
        self.layers[layer_num][row][col]
    }

    /// Resolve the action at the given position under the current layer state.
    ///
    /// Iterate from higher layer to lower layer, skipping transparent keys. The lowest checked layer is the base layer.
    pub fn resolve_action(&self, pos: KeyPos) -> KeyAction {
        self.resolve_with_layer(pos).map(|(action, _)| action).unwrap_or(KeyAction::No)
    }

    fn resolve_with_layer(&self, pos: KeyPos) -> Option<(KeyAction, u8)> {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) is outside of the matrix", pos.row, pos.col);
            return None;
        }

        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if !self.layer_state.is_searched(layer_idx as u8) {
                continue;
            }
            let action = layer[row][col];
            if action == KeyAction::Transparent {
                continue;
            }
            return Some((action, layer_idx as u8));
        }

        None
    }

    /// Fetch the action in keymap, with layer cache
    ///
    /// A released key resolves from the layer its press was resolved from, so a layer change
    /// between press and release doesn't leave the key stuck.
    pub(crate) fn get_action_with_layer_cache(&mut self, event: KeyEvent) -> KeyAction {
        let (row, col) = (event.pos.row as usize, event.pos.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) is outside of the matrix", event.pos.row, event.pos.col);
            return KeyAction::No;
        }

        if !event.pressed {
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        match self.resolve_with_layer(event.pos) {
            Some((action, layer)) => {
                self.layer_cache[row][col] = layer;
                action
            }
            None => KeyAction::No,
        }
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = 0;
        layer
    }

    /// Resolve the encoder action for a turn, transparent entries defer to the next active layer down
    pub fn get_encoder_action(&self, id: u8, direction: Direction) -> KeyAction {
        let Some(encoders) = self.encoders else {
            return KeyAction::No;
        };
        if id as usize >= NUM_ENCODER {
            warn!("Encoder {} doesn't exist", id);
            return KeyAction::No;
        }

        for (layer_idx, layer) in encoders.iter().enumerate().rev() {
            if !self.layer_state.is_searched(layer_idx as u8) {
                continue;
            }
            let encoder = layer[id as usize];
            let action = match direction {
                Direction::Clockwise => encoder.clockwise(),
                Direction::CounterClockwise => encoder.counter_clockwise(),
            };
            if action != KeyAction::Transparent {
                return action;
            }
        }

        KeyAction::No
    }

    /// Activate given layer
    pub(crate) fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.on(layer_num);
    }

    /// Deactivate given layer
    pub(crate) fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.off(layer_num);
    }

    /// Toggle given layer
    pub(crate) fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.toggle(layer_num);
    }

    /// Check the tables for the invariants the firmware relies on.
    ///
    /// - there are at most [`LayerState::MAX_LAYERS`] layers
    /// - every layer referenced by an action or a combo exists
    /// - the base layer has a concrete action for every key and encoder
    /// - every combo key is an action some layer of the keymap can produce
    pub fn validate(&self) -> Result<(), KeymapError> {
        if NUM_LAYER == 0 || NUM_LAYER > LayerState::MAX_LAYERS as usize {
            return Err(KeymapError::LayerCount(NUM_LAYER));
        }

        for (layer_idx, layer) in self.layers.iter().enumerate() {
            for (row, keys) in layer.iter().enumerate() {
                for (col, action) in keys.iter().enumerate() {
                    let pos = KeyPos::new(row as u8, col as u8);
                    if layer_idx == 0 && *action == KeyAction::Transparent {
                        return Err(KeymapError::TransparentBaseKey(pos));
                    }
                    if let Some(target) = action.layer() {
                        if target as usize >= NUM_LAYER {
                            return Err(KeymapError::LayerOutOfRange { layer: target, pos });
                        }
                    }
                }
            }
        }

        if let Some(encoders) = self.encoders {
            for (layer_idx, layer) in encoders.iter().enumerate() {
                for (id, encoder) in layer.iter().enumerate() {
                    for action in [encoder.clockwise(), encoder.counter_clockwise()] {
                        if layer_idx == 0 && action == KeyAction::Transparent {
                            return Err(KeymapError::TransparentBaseEncoder(id as u8));
                        }
                        if let Some(target) = action.layer() {
                            if target as usize >= NUM_LAYER {
                                return Err(KeymapError::EncoderLayerOutOfRange { layer: target, id: id as u8 });
                            }
                        }
                    }
                }
            }
        }

        for (idx, combo) in self.combos.iter().enumerate() {
            if let Some(layer) = combo.layer() {
                if layer as usize >= NUM_LAYER {
                    return Err(KeymapError::ComboLayerOutOfRange { combo: idx, layer });
                }
            }
            for (key, &action) in combo.actions().iter().enumerate() {
                if !self.contains_action(action) {
                    return Err(KeymapError::ComboKeyNotInKeymap { combo: idx, key });
                }
            }
        }

        Ok(())
    }

    fn contains_action(&self, action: KeyAction) -> bool {
        if action.is_empty() || action == KeyAction::Transparent {
            return false;
        }
        self.layers.iter().flatten().flatten().any(|&a| a == action)
    }
}

/// Keymap table defects found by [`KeyMap::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Number of layers is zero or doesn't fit in the layer state
    LayerCount(usize),
    /// A layer action references a layer which doesn't exist
    LayerOutOfRange { layer: u8, pos: KeyPos },
    /// An encoder action references a layer which doesn't exist
    EncoderLayerOutOfRange { layer: u8, id: u8 },
    /// The base layer has nothing to defer to
    TransparentBaseKey(KeyPos),
    TransparentBaseEncoder(u8),
    ComboLayerOutOfRange { combo: usize, layer: u8 },
    /// The `key`-th key of a combo is not found on any layer, so the combo can never fire
    ComboKeyNotInKeymap { combo: usize, key: usize },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerCount(n) => write!(f, "unsupported number of layers: {}", n),
            KeymapError::LayerOutOfRange { layer, pos } => {
                write!(f, "key ({}, {}) references missing layer {}", pos.row, pos.col, layer)
            }
            KeymapError::EncoderLayerOutOfRange { layer, id } => {
                write!(f, "encoder {} references missing layer {}", id, layer)
            }
            KeymapError::TransparentBaseKey(pos) => {
                write!(f, "base layer key ({}, {}) is transparent", pos.row, pos.col)
            }
            KeymapError::TransparentBaseEncoder(id) => write!(f, "base layer encoder {} is transparent", id),
            KeymapError::ComboLayerOutOfRange { combo, layer } => {
                write!(f, "combo {} is restricted to missing layer {}", combo, layer)
            }
            KeymapError::ComboKeyNotInKeymap { combo, key } => {
                write!(f, "key {} of combo {} is not in the keymap", key, combo)
            }
        }
    }
}

impl core::error::Error for KeymapError {}
