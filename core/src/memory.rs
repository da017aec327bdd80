use crate::constants::{FONT_START, MEMORY_SIZE, SPRITE_SHEET};

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000..0x050  unused
/// 0x050..0x0A0  sprite sheet
/// 0x0A0..0x200  unused
/// 0x200..0x1000 program
/// ```
///
/// Every address wraps modulo 4096 so no access can land outside of memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet in place
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Self::wrap(addr)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[Self::wrap(addr)] = value;
    }

    /// Combines the bytes at `addr` and `addr + 1` into a big-endian word.
    /// Returns None if the word would run past the end of memory.
    pub fn word(&self, addr: u16) -> Option<u16> {
        let addr = addr as usize;
        if addr + 1 >= MEMORY_SIZE {
            return None;
        }
        Some(u16::from(self.bytes[addr]) << 8 | u16::from(self.bytes[addr + 1]))
    }

    /// Copies `data` into memory starting at `addr`, zeroing whatever follows it.
    /// Anything that doesn't fit is dropped; returns how many bytes were copied.
    pub fn load(&mut self, addr: u16, data: &[u8]) -> usize {
        let start = (addr as usize).min(MEMORY_SIZE);
        let region = &mut self.bytes[start..];
        let len = data.len().min(region.len());
        region[..len].copy_from_slice(&data[..len]);
        region[len..].iter_mut().for_each(|byte| *byte = 0);
        len
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn wrap(addr: u16) -> usize {
        addr as usize % MEMORY_SIZE
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
