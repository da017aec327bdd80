use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

use chip8_core::Key;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: char) -> Option<Key> {
    match key.to_ascii_lowercase() {
        'x' => Some(Key::Num0),
        '1' => Some(Key::Num1),
        '2' => Some(Key::Num2),
        '3' => Some(Key::Num3),
        'q' => Some(Key::Num4),
        'w' => Some(Key::Num5),
        'e' => Some(Key::Num6),
        'a' => Some(Key::Num7),
        's' => Some(Key::Num8),
        'd' => Some(Key::Num9),
        'z' => Some(Key::A),
        'c' => Some(Key::B),
        '4' => Some(Key::C),
        'r' => Some(Key::D),
        'f' => Some(Key::E),
        'v' => Some(Key::F),
        _ => None,
    }
}

/// A key held down for the single frame `frame`, parsed from `FRAME:KEY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub frame: u64,
    pub key: Key,
}

impl FromStr for KeyPress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (frame, key) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected FRAME:KEY but got {:?}", s))?;
        let frame = frame
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{:?} is not a frame number", frame))?;

        let mut chars = key.trim().chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => {
                keymap(c).ok_or_else(|| anyhow!("{:?} isn't mapped to the keypad", c))?
            }
            _ => bail!("expected a single key but got {:?}", key),
        };

        Ok(KeyPress { frame, key })
    }
}
