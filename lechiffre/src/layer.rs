/// Active layers, one bit per layer.
///
/// The base layer (0) is the bottom of the stack and is always consulted on lookups,
/// whether its bit is set or not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Max number of layers a state can hold
    pub const MAX_LAYERS: u8 = 32;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builder variant of [`LayerState::on`], for tables and tests
    pub const fn with(self, layer: u8) -> Self {
        if layer >= Self::MAX_LAYERS {
            return self;
        }
        Self(self.0 | (1 << layer))
    }

    pub fn is_on(self, layer: u8) -> bool {
        layer < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    pub fn on(&mut self, layer: u8) {
        if layer >= Self::MAX_LAYERS {
            warn!("Layer {} is out of range", layer);
            return;
        }
        self.0 |= 1 << layer;
    }

    pub fn off(&mut self, layer: u8) {
        if layer >= Self::MAX_LAYERS {
            warn!("Layer {} is out of range", layer);
            return;
        }
        self.0 &= !(1 << layer);
    }

    pub fn toggle(&mut self, layer: u8) {
        if layer >= Self::MAX_LAYERS {
            warn!("Layer {} is out of range", layer);
            return;
        }
        self.0 ^= 1 << layer;
    }

    /// Highest active layer, `0` when no bit is set
    pub fn highest(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as u8
        }
    }

    /// Whether the layer takes part in lookups: its bit is set, or it's the base layer
    pub(crate) fn is_searched(self, layer: u8) -> bool {
        layer == 0 || self.is_on(layer)
    }
}
