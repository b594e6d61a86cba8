use core::ops::BitOr;

use bitfield_struct::bitfield;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const LCTRL: Self = CTRL;
    pub const LSHIFT: Self = SHIFT;
    pub const LALT: Self = ALT;
    pub const LGUI: Self = GUI;
    pub const RCTRL: Self = Self::new().with_ctrl(true).with_right(true);
    pub const RSHIFT: Self = Self::new().with_shift(true).with_right(true);
    pub const RALT: Self = Self::new().with_alt(true).with_right(true);
    pub const RGUI: Self = Self::new().with_gui(true).with_right(true);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    pub fn from_hid_modifiers(modifiers: HidModifiers) -> Self {
        Self::new_from(
            modifiers.right_shift() || modifiers.right_ctrl() || modifiers.right_alt() || modifiers.right_gui(),
            modifiers.left_gui() || modifiers.right_gui(),
            modifiers.left_alt() || modifiers.right_alt(),
            modifiers.left_shift() || modifiers.right_shift(),
            modifiers.left_ctrl() || modifiers.right_ctrl(),
        )
    }

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }

    pub fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }
}

/// Modifier state as it's sent in the HID report, one bit per physical modifier key.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl HidModifiers {
    pub fn any_ctrl(self) -> bool {
        self.left_ctrl() || self.right_ctrl()
    }

    pub fn any_shift(self) -> bool {
        self.left_shift() || self.right_shift()
    }

    pub fn any_alt(self) -> bool {
        self.left_alt() || self.right_alt()
    }

    pub fn any_gui(self) -> bool {
        self.left_gui() || self.right_gui()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hid_modifiers_round_trip_side() {
        let right = ModifierCombination::RALT | ModifierCombination::RSHIFT;
        let hid = right.to_hid_modifiers();
        assert!(hid.right_alt() && hid.right_shift());
        assert!(!hid.left_alt());
        assert_eq!(ModifierCombination::from_hid_modifiers(hid), right);
    }

    #[test]
    fn test_empty_combination() {
        assert!(ModifierCombination::new().is_empty());
        // Side bit alone isn't a modifier
        assert!(RIGHT.is_empty());
        assert!(!(CTRL | GUI).is_empty());
    }
}
