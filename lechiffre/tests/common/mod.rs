#![allow(dead_code)]

use lechiffre::host::{RgbMatrix, TextDisplay};
use lechiffre::types::lighting::{Hsv, RgbMatrixMode};
use rgb::RGB8;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const LED_COUNT: usize = 10;

/// RGB matrix keeping its state in memory
#[derive(Debug, Clone)]
pub struct MockRgb {
    pub enabled: bool,
    pub mode: RgbMatrixMode,
    pub hsv: Hsv,
    pub speed: u8,
    pub colors: [Option<RGB8>; LED_COUNT],
}

impl MockRgb {
    pub fn new(mode: RgbMatrixMode, hsv: Hsv) -> Self {
        Self {
            enabled: true,
            mode,
            hsv,
            speed: 128,
            colors: [None; LED_COUNT],
        }
    }
}

impl Default for MockRgb {
    fn default() -> Self {
        Self::new(RgbMatrixMode::CycleLeftRight, Hsv::new(0, 255, 255))
    }
}

impl RgbMatrix for MockRgb {
    const LED_COUNT: usize = LED_COUNT;

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn mode(&self) -> RgbMatrixMode {
        self.mode
    }

    fn hsv(&self) -> Hsv {
        self.hsv
    }

    fn speed(&self) -> u8 {
        self.speed
    }

    fn set_enabled_noeeprom(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_mode_noeeprom(&mut self, mode: RgbMatrixMode) {
        self.mode = mode;
    }

    fn set_hsv_noeeprom(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    fn set_speed_noeeprom(&mut self, speed: u8) {
        self.speed = speed;
    }

    fn set_color(&mut self, index: usize, color: RGB8) {
        self.colors[index] = Some(color);
    }
}

pub const COLUMNS: usize = 21;
pub const LINES: usize = 4;

/// Character cell display backed by a text grid
#[derive(Debug, Clone)]
pub struct MockTextDisplay {
    cells: [[char; COLUMNS]; LINES],
    cursor: (usize, usize),
    pub writes: usize,
    pub fail: bool,
}

impl Default for MockTextDisplay {
    fn default() -> Self {
        Self {
            cells: [[' '; COLUMNS]; LINES],
            cursor: (0, 0),
            writes: 0,
            fail: false,
        }
    }
}

impl MockTextDisplay {
    /// Content of a line, without trailing spaces
    pub fn line(&self, line: usize) -> String {
        self.cells[line].iter().collect::<String>().trim_end().to_string()
    }
}

impl TextDisplay for MockTextDisplay {
    type Error = ();

    fn set_cursor(&mut self, col: u8, line: u8) {
        self.cursor = (col as usize, line as usize);
    }

    fn write(&mut self, text: &str) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.writes += 1;
        for c in text.chars() {
            let (col, line) = self.cursor;
            if col < COLUMNS && line < LINES {
                self.cells[line][col] = c;
            }
            self.cursor.0 += 1;
        }
        Ok(())
    }
}
