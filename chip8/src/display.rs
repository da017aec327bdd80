use std::fmt;

use chip8_core::constants::{FUTURE_OPCODES, ROM_START};
use chip8_core::{Chip8, FrameBuffer, Instruction};

/// Formats a Chip-8 FrameBuffer as text.
///
/// - Each row of the frame buffer becomes one line
/// - Lit pixels are drawn as a full block and unlit ones as a space
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .rows()
        .flat_map(|row| {
            row.iter()
                .map(|&lit| if lit { '█' } else { ' ' })
                .chain(std::iter::once('\n'))
        })
        .collect()
}

/// The registers, timers, stack and surrounding opcodes of a machine
pub struct Registers<'a>(pub &'a Chip8);

impl fmt::Display for Registers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chip8 = self.0;

        for (row, registers) in chip8.registers().chunks(8).enumerate() {
            let line: Vec<String> = registers
                .iter()
                .enumerate()
                .map(|(reg, value)| format!("V{:X}={:02X}", row * 8 + reg, value))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(
            f,
            "I={:03X} PC={:03X} DT={:02X} ST={:02X}",
            chip8.i(),
            chip8.pc(),
            chip8.delay(),
            chip8.sound()
        )?;

        let stack: Vec<String> = chip8.stack().iter().map(|a| format!("{:03X}", a)).collect();
        writeln!(f, "stack: [{}]", stack.join(", "))?;

        let keys: Vec<String> = chip8.pressed_keys().map(|key| key.to_string()).collect();
        writeln!(f, "keys: [{}]", keys.join(" "))?;
        if chip8.bad_opcode() {
            writeln!(f, "last opcode could not be executed")?;
        }

        // The machine keeps at most PAST_OPCODES
        writeln!(f, "recent:")?;
        for op in chip8.past_opcodes() {
            writeln!(f, "        {:04X}  {}", op, Instruction::disassemble(op))?;
        }

        writeln!(f, "next:")?;
        for n in 0..FUTURE_OPCODES as u16 {
            let addr = chip8.pc().wrapping_add(2 * n);
            match chip8.peek(addr) {
                Some(op) => {
                    let marker = if n == 0 { '>' } else { ' ' };
                    writeln!(
                        f,
                        "  {} {:03X} {:04X}  {}",
                        marker,
                        addr,
                        op,
                        Instruction::disassemble(op)
                    )?;
                }
                None => break,
            }
        }
        Ok(())
    }
}

/// A disassembly of the `len` bytes loaded at `ROM_START`
pub struct Listing<'a> {
    pub chip8: &'a Chip8,
    pub len: usize,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = usize::from(ROM_START) + self.len;
        for addr in (usize::from(ROM_START)..end).step_by(2) {
            let addr = addr as u16;
            match self.chip8.peek(addr) {
                Some(op) => writeln!(
                    f,
                    "{:03X}  {:04X}  {:<16} ; {}",
                    addr,
                    op,
                    Instruction::disassemble(op),
                    Instruction::decode(op).description()
                )?,
                None => break,
            }
        }
        Ok(())
    }
}
