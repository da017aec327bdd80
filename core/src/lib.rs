pub use chip8::{Chip8, Frame};
pub use config::Config;
pub use display::FrameBuffer;
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use keypad::Key;
pub use opcode::Opcode;
pub use rom::Rom;

mod chip8;
mod config;
pub mod constants;
mod display;
mod error;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod rom;
mod stack;
mod state;
mod timer;
