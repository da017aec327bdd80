use thiserror::Error;

/// Faults the machine can report.
///
/// None of these are caused by ordinary program data; an unrecognized opcode is
/// not an error and is surfaced through `Chip8::bad_opcode` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("return at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("call at {pc:#05X} exceeds the maximum stack depth of {depth}")]
    StackOverflow { pc: u16, depth: usize },

    #[error("cannot fetch an opcode at {pc:#05X}, it runs past the end of memory")]
    PcOutOfBounds { pc: u16 },

    #[error("{0:#X} is not a keypad key")]
    InvalidKey(u8),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
