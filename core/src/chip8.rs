use std::collections::VecDeque;
use std::io::{self, Read};

use log::{debug, trace, warn};

use crate::config::Config;
use crate::constants::{PAST_OPCODES, REGISTER_COUNT, ROM_START};
use crate::display::FrameBuffer;
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::keypad::Key;
use crate::rom::Rom;
use crate::state::State;

/// What happened over one call to `Chip8::run_frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Instructions stepped
    pub executed: u32,
    /// The sound timer is still running, so the host should be beeping
    pub sound_active: bool,
    /// The sound timer reached zero during this frame
    pub beep_stopped: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `config` it was built with
///  - `previous_states` for rewinding
///  - `past_opcodes` for a debugger listing
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - fetching, executing, stepping and rewinding the CPU
/// - advancing its timers, one at a time or a whole frame at once
/// - inspecting its registers, memory and frame buffer
pub struct Chip8 {
    state: State,
    config: Config,
    previous_states: VecDeque<State>,
    past_opcodes: VecDeque<u16>,
}

impl Chip8 {
    pub fn new(config: Config) -> Self {
        Chip8 {
            state: State::new(&config),
            previous_states: VecDeque::new(),
            past_opcodes: VecDeque::with_capacity(PAST_OPCODES),
            config,
        }
    }

    /// Copy a ROM into program space, returning how many bytes fit.
    /// Rewind history is dropped since it belongs to whatever was loaded before.
    pub fn load(&mut self, rom: &Rom) -> usize {
        let loaded = self.state.memory.load(ROM_START, rom.bytes());
        if loaded < rom.len() {
            debug!(
                "ROM is {} bytes but only {} fit in program space, the rest was dropped",
                rom.len(),
                loaded
            );
        } else {
            debug!("loaded a {} byte ROM at {:#05X}", loaded, ROM_START);
        }
        self.previous_states.clear();
        self.past_opcodes.clear();
        loaded
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> io::Result<usize> {
        let rom = Rom::read(reader)?;
        Ok(self.load(&rom))
    }

    /// Gets the opcode currently pointed at by the pc and moves the pc past it.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&mut self) -> Result<u16> {
        let pc = self.state.pc;
        let op = self
            .state
            .memory
            .word(pc)
            .ok_or(Chip8Error::PcOutOfBounds { pc })?;
        self.state.pc = pc + 0x2;
        Ok(op)
    }

    /// Reads the opcode at `addr` without touching the machine
    pub fn peek(&self, addr: u16) -> Option<u16> {
        self.state.memory.word(addr)
    }

    /// Decodes and carries out a single opcode.
    ///
    /// A stack fault is returned as an error in strict mode and leaves the machine as it was.
    /// Otherwise the instruction is skipped and reported through `bad_opcode`.
    pub fn execute(&mut self, op: u16) -> Result<()> {
        let was_bad = self.state.bad_opcode;
        self.state.bad_opcode = false;

        let instruction = Instruction::decode(op);
        match instruction.operation()(op, &mut self.state) {
            Ok(()) => {}
            Err(err @ Chip8Error::StackUnderflow { .. })
            | Err(err @ Chip8Error::StackOverflow { .. })
                if !self.config.strict =>
            {
                warn!("{}, skipping it", err);
                self.state.bad_opcode = true;
            }
            Err(err) => {
                self.state.bad_opcode = was_bad;
                return Err(err);
            }
        }

        if instruction.is_bad() {
            warn!(
                "{:04X} ({}) can't be executed, ignoring it",
                op,
                Instruction::disassemble(op)
            );
        }
        Ok(())
    }

    /// Advances the CPU by a single cycle
    /// - saves the current state so it can be rewound to
    /// - gets and executes the next opcode
    ///
    /// On failure the pc is left pointing at the opcode that failed.
    pub fn step(&mut self) -> Result<u16> {
        let snapshot = if self.config.history_len > 0 {
            Some(self.state.clone())
        } else {
            None
        };

        let pc = self.state.pc;
        let op = self.fetch()?;
        trace!(
            "{:04X} {:<16} v{:02X?} i{:03X} pc{:03X}",
            op,
            Instruction::disassemble(op),
            self.state.v,
            self.state.i,
            pc
        );
        if let Err(err) = self.execute(op) {
            self.state.pc = pc;
            return Err(err);
        }

        if let Some(state) = snapshot {
            self.save_state(state);
        }
        if self.past_opcodes.len() == PAST_OPCODES {
            self.past_opcodes.pop_front();
        }
        self.past_opcodes.push_back(op);
        Ok(op)
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    pub fn rewind(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(state) => {
                self.state = state;
                self.past_opcodes.pop_back();
                debug!(
                    "rewound to pc {:#05X}, {} states left",
                    self.state.pc,
                    self.previous_states.len()
                );
                true
            }
            None => false,
        }
    }

    /// Puts a state in previous_states
    /// - if there are already `history_len` saved then the oldest is dropped
    fn save_state(&mut self, state: State) {
        if self.previous_states.len() == self.config.history_len {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(state);
    }

    /// Runs one frame in the conventional order: step the CPU, then count the timers down.
    /// Input should be applied by the host before calling this.
    pub fn run_frame(&mut self) -> Result<Frame> {
        let mut executed = 0;
        for _ in 0..self.config.instructions_per_frame {
            self.step()?;
            executed += 1;
        }

        let mut beep_stopped = false;
        for _ in 0..self.config.timer_ticks_per_frame {
            self.decrement_delay();
            if self.decrement_sound() && !self.state.sound_timer.is_active() {
                beep_stopped = true;
            }
        }

        Ok(Frame {
            executed,
            sound_active: self.state.sound_timer.is_active(),
            beep_stopped,
        })
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Counts the delay timer down, returning whether it was running
    pub fn decrement_delay(&mut self) -> bool {
        self.state.delay_timer.decrement()
    }

    /// Counts the sound timer down, returning whether it was running
    pub fn decrement_sound(&mut self) -> bool {
        self.state.sound_timer.decrement()
    }

    pub fn keydown(&mut self, key: Key) {
        self.state.keypad.press(key);
    }

    pub fn keyup(&mut self, key: Key) {
        self.state.keypad.release(key);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.state.keypad.is_pressed(key.index())
    }

    /// Every key currently held down
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL
            .iter()
            .copied()
            .filter(move |key| self.state.keypad.pressed()[key.index() as usize])
    }

    /// Whether the next step is an FX0A that has no key to take
    pub fn is_waiting_for_key(&self) -> bool {
        let waiting = self
            .peek(self.state.pc)
            .map(Instruction::decode)
            .map_or(false, |instruction| instruction == Instruction::WaitKey);
        waiting && self.state.keypad.current().is_none()
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    /// Register `V[reg]`, indexed by the low nibble of `reg`
    pub fn v(&self, reg: usize) -> u8 {
        self.state.v[reg % REGISTER_COUNT]
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.state.v
    }

    /// Return addresses, oldest first
    pub fn stack(&self) -> &[u16] {
        self.state.stack.frames()
    }

    pub fn display(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn delay(&self) -> u8 {
        self.state.delay_timer.get()
    }

    pub fn sound(&self) -> u8 {
        self.state.sound_timer.get()
    }

    pub fn bad_opcode(&self) -> bool {
        self.state.bad_opcode
    }

    pub fn memory(&self) -> &[u8] {
        self.state.memory.as_slice()
    }

    /// The most recently stepped opcodes, oldest first
    pub fn past_opcodes(&self) -> impl Iterator<Item = u16> + '_ {
        self.past_opcodes.iter().copied()
    }

    /// How many steps `rewind` can currently undo
    pub fn history_len(&self) -> usize {
        self.previous_states.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
