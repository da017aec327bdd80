use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Mutates the machine according to an opcode. The pc already points past the opcode.
pub type Operation = fn(op: u16, state: &mut State) -> Result<()>;

/// # Instructions
/// Every kind of opcode the machine understands, plus `Unknown` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Sys,
    Clear,
    Return,
    Jump,
    Call,
    SkipEqImm,
    SkipNeImm,
    SkipEqReg,
    LoadImm,
    AddImm,
    Move,
    Or,
    And,
    Xor,
    AddReg,
    Sub,
    ShiftRight,
    SubNeg,
    ShiftLeft,
    SkipNeReg,
    LoadI,
    JumpOffset,
    Random,
    Draw,
    SkipKeyPressed,
    SkipKeyReleased,
    LoadDelay,
    WaitKey,
    SetDelay,
    SetSound,
    AddI,
    LoadFont,
    Bcd,
    Store,
    Read,
    Unknown,
}

impl Instruction {
    /// Every instruction the machine implements, in opcode order
    pub const ALL: [Instruction; 35] = [
        Instruction::Sys,
        Instruction::Clear,
        Instruction::Return,
        Instruction::Jump,
        Instruction::Call,
        Instruction::SkipEqImm,
        Instruction::SkipNeImm,
        Instruction::SkipEqReg,
        Instruction::LoadImm,
        Instruction::AddImm,
        Instruction::Move,
        Instruction::Or,
        Instruction::And,
        Instruction::Xor,
        Instruction::AddReg,
        Instruction::Sub,
        Instruction::ShiftRight,
        Instruction::SubNeg,
        Instruction::ShiftLeft,
        Instruction::SkipNeReg,
        Instruction::LoadI,
        Instruction::JumpOffset,
        Instruction::Random,
        Instruction::Draw,
        Instruction::SkipKeyPressed,
        Instruction::SkipKeyReleased,
        Instruction::LoadDelay,
        Instruction::WaitKey,
        Instruction::SetDelay,
        Instruction::SetSound,
        Instruction::AddI,
        Instruction::LoadFont,
        Instruction::Bcd,
        Instruction::Store,
        Instruction::Read,
    ];

    /// Selects the Instruction for a given Opcode.
    /// Total over every 16-bit value; anything unrecognized is `Unknown`.
    pub fn decode(op: u16) -> Instruction {
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x0, ..) => Instruction::Sys,
            (0x1, ..) => Instruction::Jump,
            (0x2, ..) => Instruction::Call,
            (0x3, ..) => Instruction::SkipEqImm,
            (0x4, ..) => Instruction::SkipNeImm,
            (0x5, .., 0x0) => Instruction::SkipEqReg,
            (0x6, ..) => Instruction::LoadImm,
            (0x7, ..) => Instruction::AddImm,
            (0x8, .., 0x0) => Instruction::Move,
            (0x8, .., 0x1) => Instruction::Or,
            (0x8, .., 0x2) => Instruction::And,
            (0x8, .., 0x3) => Instruction::Xor,
            (0x8, .., 0x4) => Instruction::AddReg,
            (0x8, .., 0x5) => Instruction::Sub,
            (0x8, .., 0x6) => Instruction::ShiftRight,
            (0x8, .., 0x7) => Instruction::SubNeg,
            (0x8, .., 0xE) => Instruction::ShiftLeft,
            (0x9, .., 0x0) => Instruction::SkipNeReg,
            (0xA, ..) => Instruction::LoadI,
            (0xB, ..) => Instruction::JumpOffset,
            (0xC, ..) => Instruction::Random,
            (0xD, ..) => Instruction::Draw,
            (0xE, _, 0x9, 0xE) => Instruction::SkipKeyPressed,
            (0xE, _, 0xA, 0x1) => Instruction::SkipKeyReleased,
            (0xF, _, 0x0, 0x7) => Instruction::LoadDelay,
            (0xF, _, 0x0, 0xA) => Instruction::WaitKey,
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay,
            (0xF, _, 0x1, 0x8) => Instruction::SetSound,
            (0xF, _, 0x1, 0xE) => Instruction::AddI,
            (0xF, _, 0x2, 0x9) => Instruction::LoadFont,
            (0xF, _, 0x3, 0x3) => Instruction::Bcd,
            (0xF, _, 0x5, 0x5) => Instruction::Store,
            (0xF, _, 0x6, 0x5) => Instruction::Read,
            _ => Instruction::Unknown,
        }
    }

    /// The function that carries this Instruction out
    pub fn operation(self) -> Operation {
        match self {
            Instruction::Sys => sys,
            Instruction::Clear => clr,
            Instruction::Return => rts,
            Instruction::Jump => jump,
            Instruction::Call => call,
            Instruction::SkipEqImm => ske,
            Instruction::SkipNeImm => skne,
            Instruction::SkipEqReg => skre,
            Instruction::LoadImm => load,
            Instruction::AddImm => add,
            Instruction::Move => mv,
            Instruction::Or => or,
            Instruction::And => and,
            Instruction::Xor => xor,
            Instruction::AddReg => addr,
            Instruction::Sub => sub,
            Instruction::ShiftRight => shr,
            Instruction::SubNeg => subn,
            Instruction::ShiftLeft => shl,
            Instruction::SkipNeReg => skrne,
            Instruction::LoadI => loadi,
            Instruction::JumpOffset => jumpi,
            Instruction::Random => rand,
            Instruction::Draw => draw,
            Instruction::SkipKeyPressed => skpr,
            Instruction::SkipKeyReleased => skup,
            Instruction::LoadDelay => moved,
            Instruction::WaitKey => keyd,
            Instruction::SetDelay => loads,
            Instruction::SetSound => ld,
            Instruction::AddI => addi,
            Instruction::LoadFont => ldspr,
            Instruction::Bcd => bcd,
            Instruction::Store => stor,
            Instruction::Read => read,
            Instruction::Unknown => unknown,
        }
    }

    /// Whether executing this Instruction raises `bad_opcode`
    pub fn is_bad(self) -> bool {
        matches!(self, Instruction::Sys | Instruction::Unknown)
    }

    /// The documented bit pattern
    pub fn pattern(self) -> &'static str {
        match self {
            Instruction::Sys => "0NNN",
            Instruction::Clear => "00E0",
            Instruction::Return => "00EE",
            Instruction::Jump => "1NNN",
            Instruction::Call => "2NNN",
            Instruction::SkipEqImm => "3XNN",
            Instruction::SkipNeImm => "4XNN",
            Instruction::SkipEqReg => "5XY0",
            Instruction::LoadImm => "6XNN",
            Instruction::AddImm => "7XNN",
            Instruction::Move => "8XY0",
            Instruction::Or => "8XY1",
            Instruction::And => "8XY2",
            Instruction::Xor => "8XY3",
            Instruction::AddReg => "8XY4",
            Instruction::Sub => "8XY5",
            Instruction::ShiftRight => "8XY6",
            Instruction::SubNeg => "8XY7",
            Instruction::ShiftLeft => "8XYE",
            Instruction::SkipNeReg => "9XY0",
            Instruction::LoadI => "ANNN",
            Instruction::JumpOffset => "BNNN",
            Instruction::Random => "CXNN",
            Instruction::Draw => "DXYN",
            Instruction::SkipKeyPressed => "EX9E",
            Instruction::SkipKeyReleased => "EXA1",
            Instruction::LoadDelay => "FX07",
            Instruction::WaitKey => "FX0A",
            Instruction::SetDelay => "FX15",
            Instruction::SetSound => "FX18",
            Instruction::AddI => "FX1E",
            Instruction::LoadFont => "FX29",
            Instruction::Bcd => "FX33",
            Instruction::Store => "FX55",
            Instruction::Read => "FX65",
            Instruction::Unknown => "????",
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Sys => "SYS",
            Instruction::Clear => "CLS",
            Instruction::Return => "RET",
            Instruction::Jump | Instruction::JumpOffset => "JP",
            Instruction::Call => "CALL",
            Instruction::SkipEqImm | Instruction::SkipEqReg => "SE",
            Instruction::SkipNeImm | Instruction::SkipNeReg => "SNE",
            Instruction::LoadImm
            | Instruction::Move
            | Instruction::LoadI
            | Instruction::LoadDelay
            | Instruction::WaitKey
            | Instruction::SetDelay
            | Instruction::SetSound
            | Instruction::LoadFont
            | Instruction::Bcd
            | Instruction::Store
            | Instruction::Read => "LD",
            Instruction::AddImm | Instruction::AddReg | Instruction::AddI => "ADD",
            Instruction::Or => "OR",
            Instruction::And => "AND",
            Instruction::Xor => "XOR",
            Instruction::Sub => "SUB",
            Instruction::ShiftRight => "SHR",
            Instruction::SubNeg => "SUBN",
            Instruction::ShiftLeft => "SHL",
            Instruction::Random => "RND",
            Instruction::Draw => "DRW",
            Instruction::SkipKeyPressed => "SKP",
            Instruction::SkipKeyReleased => "SKNP",
            Instruction::Unknown => "???",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Instruction::Sys => "Execute machine language subroutine at NNN (unsupported)",
            Instruction::Clear => "Clear the screen",
            Instruction::Return => "Return from a subroutine",
            Instruction::Jump => "Jump to address NNN",
            Instruction::Call => "Execute subroutine starting at address NNN",
            Instruction::SkipEqImm => "Skip the following instruction if VX equals NN",
            Instruction::SkipNeImm => "Skip the following instruction if VX does not equal NN",
            Instruction::SkipEqReg => "Skip the following instruction if VX equals VY",
            Instruction::LoadImm => "Store NN in VX",
            Instruction::AddImm => "Add NN to VX",
            Instruction::Move => "Store the value of VY in VX",
            Instruction::Or => "Set VX to VX OR VY",
            Instruction::And => "Set VX to VX AND VY",
            Instruction::Xor => "Set VX to VX XOR VY",
            Instruction::AddReg => "Add VY to VX; VF = 1 on carry, else 0",
            Instruction::Sub => "Subtract VY from VX; VF = 0 on borrow, else 1",
            Instruction::ShiftRight => "Store VY shifted right one bit in VX; VF = old lsb",
            Instruction::SubNeg => "Set VX to VY minus VX; VF = 0 on borrow, else 1",
            Instruction::ShiftLeft => "Store VY shifted left one bit in VX; VF = old msb",
            Instruction::SkipNeReg => "Skip the following instruction if VX does not equal VY",
            Instruction::LoadI => "Store address NNN in I",
            Instruction::JumpOffset => "Jump to address NNN + V0",
            Instruction::Random => "Set VX to a random number masked with NN",
            Instruction::Draw => "Draw an N-byte sprite from I at (VX, VY); VF = collision",
            Instruction::SkipKeyPressed => "Skip the following instruction if key VX is pressed",
            Instruction::SkipKeyReleased => {
                "Skip the following instruction if key VX is not pressed"
            }
            Instruction::LoadDelay => "Store the delay timer in VX",
            Instruction::WaitKey => "Wait for a keypress and store the key in VX",
            Instruction::SetDelay => "Set the delay timer to VX",
            Instruction::SetSound => "Set the sound timer to VX",
            Instruction::AddI => "Add VX to I",
            Instruction::LoadFont => "Set I to the font glyph for the digit in VX",
            Instruction::Bcd => "Store the decimal digits of VX at I, I+1 and I+2",
            Instruction::Store => "Store V0..=VX at I; I += X + 1",
            Instruction::Read => "Load V0..=VX from I; I += X + 1",
            Instruction::Unknown => "Unrecognized opcode",
        }
    }

    /// Renders an opcode as assembly, e.g. `ADD V1, V2` for `0x8124`
    pub fn disassemble(op: u16) -> String {
        let instruction = Instruction::decode(op);
        let mnemonic = instruction.mnemonic();
        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());

        match instruction {
            Instruction::Clear | Instruction::Return => mnemonic.to_string(),
            Instruction::Sys | Instruction::Jump | Instruction::Call => {
                format!("{} {:#05X}", mnemonic, nnn)
            }
            Instruction::SkipEqImm
            | Instruction::SkipNeImm
            | Instruction::LoadImm
            | Instruction::AddImm
            | Instruction::Random => format!("{} V{:X}, {:#04X}", mnemonic, x, nn),
            Instruction::SkipEqReg
            | Instruction::SkipNeReg
            | Instruction::Move
            | Instruction::Or
            | Instruction::And
            | Instruction::Xor
            | Instruction::AddReg
            | Instruction::Sub
            | Instruction::ShiftRight
            | Instruction::SubNeg
            | Instruction::ShiftLeft => format!("{} V{:X}, V{:X}", mnemonic, x, y),
            Instruction::LoadI => format!("{} I, {:#05X}", mnemonic, nnn),
            Instruction::JumpOffset => format!("{} V0, {:#05X}", mnemonic, nnn),
            Instruction::Draw => format!("{} V{:X}, V{:X}, {}", mnemonic, x, y, n),
            Instruction::SkipKeyPressed | Instruction::SkipKeyReleased => {
                format!("{} V{:X}", mnemonic, x)
            }
            Instruction::LoadDelay => format!("{} V{:X}, DT", mnemonic, x),
            Instruction::WaitKey => format!("{} V{:X}, K", mnemonic, x),
            Instruction::SetDelay => format!("{} DT, V{:X}", mnemonic, x),
            Instruction::SetSound => format!("{} ST, V{:X}", mnemonic, x),
            Instruction::AddI => format!("{} I, V{:X}", mnemonic, x),
            Instruction::LoadFont => format!("{} F, V{:X}", mnemonic, x),
            Instruction::Bcd => format!("{} B, V{:X}", mnemonic, x),
            Instruction::Store => format!("{} [I], V{:X}", mnemonic, x),
            Instruction::Read => format!("{} V{:X}, [I]", mnemonic, x),
            Instruction::Unknown => format!("{} {:#06X}", mnemonic, op),
        }
    }
}

impl From<u16> for Instruction {
    fn from(op: u16) -> Self {
        Instruction::decode(op)
    }
}
