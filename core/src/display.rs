use std::fmt;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const PIXEL_COUNT: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// # Frame Buffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
///
/// Pixels are stored row-major, so pixel (x, y) lives at `y * 64 + x`.
/// The buffer is only ever changed by clearing it or XOR-ing a sprite onto it.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [bool; PIXEL_COUNT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [false; PIXEL_COUNT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [false; PIXEL_COUNT];
    }

    /// Returns whether the pixel at (x, y) is lit, or None if it is off screen.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            Some(self.pixels[y * DISPLAY_WIDTH + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(DISPLAY_WIDTH)
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&pixel| !pixel)
    }

    /// XORs `sprite` onto the buffer with its top-left corner at (x, y).
    ///
    /// The origin wraps around the screen, but the sprite itself is clipped at the
    /// right and bottom edges rather than wrapping mid-sprite. Each byte is one row,
    /// most significant bit leftmost.
    ///
    /// Returns true if any lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let x0 = x as usize % DISPLAY_WIDTH;
        let y0 = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in sprite.iter().enumerate() {
            let y = y0 + row;
            if y >= DISPLAY_HEIGHT {
                break;
            }
            for bit in 0..8 {
                let x = x0 + bit;
                if x >= DISPLAY_WIDTH {
                    break;
                }
                if (byte >> (7 - bit)) & 1 == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[y * DISPLAY_WIDTH + x];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }

        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&p| if p { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
