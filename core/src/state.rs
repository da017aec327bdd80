use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{REGISTER_COUNT, ROM_START};
use crate::display::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::stack::CallStack;
use crate::timer::Timer;

/// The Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also the carry/borrow/collision flag
/// - (i) a 16-bit memory address register, kept within 12 bits
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Timers
/// - 2 8-bit timers (delay & sound), counted down by the host
///
/// ## Memory
/// - a bounded stack of return addresses
/// - 4096 bytes of addressable memory
/// - a 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F and the most recent key down
///
/// ## Bookkeeping
/// - `draw_flag` is raised whenever the frame buffer changes
/// - `bad_opcode` is raised when the last opcode couldn't be executed
/// - `rng` feeds CXNN
#[derive(Clone, Debug)]
pub struct State {
    pub memory: Memory,
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: CallStack,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub delay_timer: Timer,
    pub sound_timer: Timer,
    pub keypad: Keypad,
    pub bad_opcode: bool,
    pub rng: StdRng,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        State {
            memory: Memory::new(),
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: ROM_START,
            stack: CallStack::new(config.max_stack_depth),
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            keypad: Keypad::new(),
            bad_opcode: false,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = State::new(&Config::default());
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.i, 0x0);
        assert_eq!(state.v, [0; 16]);
        assert!(state.stack.frames().is_empty());
        assert_eq!(state.delay_timer.get(), 0);
        assert_eq!(state.sound_timer.get(), 0);
        assert!(state.frame_buffer.is_blank());
        assert!(!state.bad_opcode);
        assert_eq!(state.keypad.current(), None);
    }
}
