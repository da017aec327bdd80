use std::convert::TryFrom;
use std::fmt;

use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};

/// # Keys
/// Chip-8 input is generated with a hexadecimal keypad; each key is named by its hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Num0 = 0x0,
    Num1 = 0x1,
    Num2 = 0x2,
    Num3 = 0x3,
    Num4 = 0x4,
    Num5 = 0x5,
    Num6 = 0x6,
    Num7 = 0x7,
    Num8 = 0x8,
    Num9 = 0x9,
    A = 0xA,
    B = 0xB,
    C = 0xC,
    D = 0xD,
    E = 0xE,
    F = 0xF,
}

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
    ];

    /// The physical arrangement of the keypad.
    /// ```text
    /// |1|2|3|C|
    /// |4|5|6|D|
    /// |7|8|9|E|
    /// |A|0|B|F|
    /// ```
    pub const LAYOUT: [[Key; 4]; 4] = [
        [Key::Num1, Key::Num2, Key::Num3, Key::C],
        [Key::Num4, Key::Num5, Key::Num6, Key::D],
        [Key::Num7, Key::Num8, Key::Num9, Key::E],
        [Key::A, Key::Num0, Key::B, Key::F],
    ];

    pub fn from_index(index: u8) -> Result<Key> {
        Key::ALL
            .get(index as usize)
            .copied()
            .ok_or(Chip8Error::InvalidKey(index))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        const NAMES: [&str; KEY_COUNT] = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
        ];
        NAMES[self as usize]
    }
}

impl TryFrom<u8> for Key {
    type Error = Chip8Error;

    fn try_from(index: u8) -> Result<Key> {
        Key::from_index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tracks which keys are held and which key went down most recently.
///
/// `current` is what a waiting FX0A picks up; it is only cleared when that same key
/// is released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    current: Option<Key>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed[key as usize] = true;
        self.current = Some(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed[key as usize] = false;
        if self.current == Some(key) {
            self.current = None;
        }
    }

    /// Whether the key named by the low nibble of `value` is held
    pub fn is_pressed(&self, value: u8) -> bool {
        self.pressed[(value & 0xF) as usize]
    }

    pub fn current(&self) -> Option<Key> {
        self.current
    }

    pub fn pressed(&self) -> &[bool; KEY_COUNT] {
        &self.pressed
    }
}
