//! Events the firmware hands to the keymap glue.

/// Position of a key in the matrix
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A key state change reported by the matrix scan
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub pos: KeyPos,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self {
            pos: KeyPos { row, col },
            pressed,
        }
    }
}

/// The event as seen by the user hooks.
///
/// `tap_count` is filled in by the firmware's tap/hold resolution: a tap/hold
/// key with `tap_count > 0` was tapped, `0` means it's held.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub event: KeyEvent,
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn new(event: KeyEvent) -> Self {
        Self { event, tap_count: 0 }
    }

    pub const fn tapped(event: KeyEvent) -> Self {
        Self { event, tap_count: 1 }
    }

    pub fn pressed(&self) -> bool {
        self.event.pressed
    }
}

/// The encoder direction is either `Clockwise` or `CounterClockwise`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// A clockwise turn
    Clockwise,
    /// A counterclockwise turn
    CounterClockwise,
}
