/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every address written from an opcode literal
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded here and execution begins here
pub const ROM_START: u16 = 0x200;

/// The built-in font is loaded here, inside the reserved area below `ROM_START`
pub const FONT_START: u16 = 0x50;

/// Each font glyph is 5 rows of 8 pixels
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

pub const REGISTER_COUNT: usize = 16;

/// VF doubles as the carry, borrow and collision flag
pub const FLAG: usize = 0xF;

pub const KEY_COUNT: usize = 16;

/// Sprites are at most 15 rows tall (the N in DXYN)
pub const MAX_SPRITE_HEIGHT: usize = 15;

pub const DEFAULT_MAX_STACK_DEPTH: usize = 16;

/// Snapshots kept for rewinding
pub const DEFAULT_HISTORY_LEN: usize = 200;

/// Approximates the original instruction rate at 60 frames per second
pub const DEFAULT_INSTRUCTIONS_PER_FRAME: u32 = 10;

/// Timers tick at 60Hz, so once per frame
pub const DEFAULT_TIMER_TICKS_PER_FRAME: u32 = 1;

/// Opcodes remembered for the debugger listing
pub const PAST_OPCODES: usize = 35;

/// Opcodes after the program counter shown in the debugger listing
pub const FUTURE_OPCODES: usize = 15;

/// # Sprite Sheet
/// Hexadecimal digits 0..F, each drawn as a 4x5 glyph.
///
/// ```text
/// 0xF0  ####....
/// 0x90  #..#....
/// 0x90  #..#....
/// 0x90  #..#....
/// 0xF0  ####....
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
