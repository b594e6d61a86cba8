use core::fmt::Write;

use heapless::Deque;
use lechiffre_types::keycode::{HidKeyCode, KeyCode};

use crate::event::{KeyPos, KeyRecord};
use crate::host::KeyLogger;

/// One character label for a keycode, `' '` for keys without one
pub fn key_label(keycode: KeyCode) -> char {
    let Some(key) = keycode.as_hid() else {
        return ' ';
    };
    const A: u8 = HidKeyCode::A as u8;
    const Z: u8 = HidKeyCode::Z as u8;
    const KC1: u8 = HidKeyCode::Kc1 as u8;
    const KC9: u8 = HidKeyCode::Kc9 as u8;

    let code = key as u8;
    match code {
        A..=Z => return (b'a' + code - A) as char,
        KC1..=KC9 => return (b'1' + code - KC1) as char,
        _ => {}
    }
    match key {
        HidKeyCode::Kc0 => '0',
        HidKeyCode::Enter => 'R',
        HidKeyCode::Escape => 'E',
        HidKeyCode::Backspace => 'B',
        HidKeyCode::Tab => 'T',
        HidKeyCode::Space => '_',
        HidKeyCode::Minus => '-',
        HidKeyCode::Equal => '=',
        HidKeyCode::LeftBracket => '[',
        HidKeyCode::RightBracket => ']',
        HidKeyCode::Backslash => '\\',
        HidKeyCode::NonusHash => '#',
        HidKeyCode::Semicolon => ';',
        HidKeyCode::Quote => '\'',
        HidKeyCode::Grave => '`',
        HidKeyCode::Comma => ',',
        HidKeyCode::Dot => '.',
        HidKeyCode::Slash => '/',
        _ => ' ',
    }
}

/// The last `N` pressed keys, oldest first
#[derive(Clone, Debug, Default)]
pub struct KeyLog<const N: usize> {
    labels: Deque<char, N>,
    last: Option<(KeyPos, Option<KeyCode>)>,
}

impl<const N: usize> KeyLog<N> {
    pub const fn new() -> Self {
        Self {
            labels: Deque::new(),
            last: None,
        }
    }

    pub fn last_pos(&self) -> Option<KeyPos> {
        self.last.map(|(pos, _)| pos)
    }

    pub fn last_keycode(&self) -> Option<KeyCode> {
        self.last.and_then(|(_, keycode)| keycode)
    }

    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.labels.iter().copied()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.last = None;
    }

    /// Write the log as `<row>x<col> <labels>`, stopping silently when `out` is full
    pub fn write_to<W: Write>(&self, out: &mut W) {
        if let Some(pos) = self.last_pos() {
            if write!(out, "{}x{} ", pos.row, pos.col).is_err() {
                return;
            }
        }
        for c in self.labels() {
            if out.write_char(c).is_err() {
                return;
            }
        }
    }
}

impl<const N: usize> KeyLogger for KeyLog<N> {
    fn record(&mut self, keycode: Option<KeyCode>, record: &KeyRecord) {
        if !record.pressed() || N == 0 {
            return;
        }
        self.last = Some((record.event.pos, keycode));
        if self.labels.is_full() {
            self.labels.pop_front();
        }
        let _ = self.labels.push_back(keycode.map_or(' ', key_label));
    }
}
