//! OLED status screen: layer name, modifiers, lock keys and the keylog.

#[cfg(feature = "display")]
mod graphics;
mod keylog;

use core::fmt::Write;

#[cfg(feature = "display")]
pub use graphics::GraphicsTextDisplay;
use heapless::String;
pub use keylog::{KeyLog, key_label};
use lechiffre_types::led_indicator::LedIndicator;
use lechiffre_types::modifier::HidModifiers;

use crate::config::DisplayConfig;
use crate::host::TextDisplay;
use crate::layer::LayerState;

/// Name of the highest active layer, recomputed only when it changes.
///
/// Holds at most `N - 1` bytes of text, longer names are cut on a char boundary.
#[derive(Clone, Debug, Default)]
pub struct LayerNameBuffer<const N: usize> {
    name: String<N>,
    layer: Option<u8>,
}

impl<const N: usize> LayerNameBuffer<N> {
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            layer: None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// Layer the buffer was last filled for
    pub fn layer(&self) -> Option<u8> {
        self.layer
    }

    /// Refresh the buffer from a layer state, see [`LayerNameBuffer::update_layer`]
    pub fn update(&mut self, state: LayerState, names: &[&str], force: bool) -> bool {
        self.update_layer(state.highest(), names, force)
    }

    /// Refresh the buffer for `layer`.
    ///
    /// Layers without an entry in `names` are shown by number. Returns whether the buffer was
    /// rewritten.
    pub fn update_layer(&mut self, layer: u8, names: &[&str], force: bool) -> bool {
        if !force && self.layer == Some(layer) {
            return false;
        }
        self.layer = Some(layer);
        self.name.clear();
        match names.get(layer as usize) {
            Some(name) => push_truncated(&mut self.name, name, N.saturating_sub(1)),
            None => {
                let mut number: String<4> = String::new();
                // A u8 has at most 3 digits
                let _ = write!(number, "{}", layer);
                push_truncated(&mut self.name, &number, N.saturating_sub(1));
            }
        }
        true
    }
}

/// Append as much of `text` as fits in `max` bytes without splitting a char
fn push_truncated<const N: usize>(buf: &mut String<N>, text: &str, max: usize) {
    for c in text.chars() {
        if buf.len() + c.len_utf8() > max || buf.push(c).is_err() {
            break;
        }
    }
}

/// Everything the status screen shows besides the layer name and keylog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    pub layers: LayerState,
    pub modifiers: HidModifiers,
    pub locks: LedIndicator,
}

const BLANK: &str = "                                ";

/// Write `text` on a line, padded with spaces up to `columns` so leftovers of a longer line
/// are cleared
fn write_line<D: TextDisplay>(display: &mut D, line: u8, text: &str, columns: u8) -> Result<(), D::Error> {
    let columns = columns as usize;
    let mut end = text.len().min(columns);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    display.set_cursor(0, line);
    display.write(&text[..end])?;
    let mut padding = columns - text[..end].chars().count();
    while padding > 0 {
        let n = padding.min(BLANK.len());
        display.write(&BLANK[..n])?;
        padding -= n;
    }
    Ok(())
}

/// Render the status screen
pub fn render_status<D: TextDisplay, const N: usize, const K: usize>(
    display: &mut D,
    config: &DisplayConfig,
    layer_name: &LayerNameBuffer<N>,
    status: &KeyboardStatus,
    keylog: Option<&KeyLog<K>>,
) -> Result<(), D::Error> {
    write_line(display, config.layer_line, layer_name.as_str(), config.columns)?;

    let m = status.modifiers;
    let mut mods: String<8> = String::new();
    for (on, label) in [
        (m.any_ctrl(), 'C'),
        (m.any_shift(), 'S'),
        (m.any_alt(), 'A'),
        (m.any_gui(), 'G'),
    ] {
        let _ = mods.push(if on { label } else { ' ' });
        let _ = mods.push(' ');
    }
    write_line(display, config.modifier_line, mods.trim_end(), config.columns)?;

    let l = status.locks;
    let mut locks: String<12> = String::new();
    for (on, label) in [(l.num_lock(), "NUM "), (l.caps_lock(), "CAP "), (l.scroll_lock(), "SCR ")] {
        let _ = locks.push_str(if on { label } else { "    " });
    }
    write_line(display, config.lock_line, locks.trim_end(), config.columns)?;

    if let Some(keylog) = keylog {
        let mut text: String<32> = String::new();
        keylog.write_to(&mut text);
        write_line(display, config.keylog_line, &text, config.columns)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const NAMES: [&str; 3] = ["Base", "Lower", "Raise"];

    #[test]
    fn test_layer_name_only_recomputed_on_change() {
        let mut buf: LayerNameBuffer<8> = LayerNameBuffer::new();
        assert!(buf.update_layer(1, &NAMES, false));
        assert_eq!(buf.as_str(), "Lower");
        assert!(!buf.update_layer(1, &NAMES, false));
        assert!(buf.update_layer(1, &NAMES, true));
        assert!(buf.update_layer(0, &NAMES, false));
        assert_eq!(buf.as_str(), "Base");
    }

    #[test]
    fn test_layer_name_is_truncated() {
        let mut buf: LayerNameBuffer<4> = LayerNameBuffer::new();
        buf.update_layer(1, &NAMES, false);
        assert_eq!(buf.as_str(), "Low");

        let mut buf: LayerNameBuffer<4> = LayerNameBuffer::new();
        buf.update_layer(0, &["αβγ"], false);
        // 'β' would end at byte 4, past the 3 byte limit
        assert_eq!(buf.as_str(), "α");
    }

    #[test]
    fn test_unnamed_layer_shows_number() {
        let mut buf: LayerNameBuffer<8> = LayerNameBuffer::new();
        buf.update_layer(17, &NAMES, false);
        assert_eq!(buf.as_str(), "17");

        let mut buf: LayerNameBuffer<2> = LayerNameBuffer::new();
        buf.update_layer(17, &NAMES, false);
        assert_eq!(buf.as_str(), "1");
    }

    #[test]
    fn test_update_from_state_uses_highest_layer() {
        let mut buf: LayerNameBuffer<8> = LayerNameBuffer::new();
        assert!(buf.update(LayerState::new().with(1).with(2), &NAMES, false));
        assert_eq!(buf.as_str(), "Raise");
        assert_eq!(buf.layer(), Some(2));
        assert!(buf.update(LayerState::new(), &NAMES, false));
        assert_eq!(buf.as_str(), "Base");
    }
}
