use rand::Rng;

use crate::constants::{ADDRESS_MASK, FLAG, FONT_GLYPH_SIZE, FONT_START, MAX_SPRITE_HEIGHT};
use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;
use crate::state::State;

// The pc has already been moved past `op` by the time any of these run, so a skip is
// one more +2 and an FX0A retry is a -2.

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// 0NNN is recognized but not supported
pub fn sys(_op: u16, state: &mut State) -> Result<()> {
    state.bad_opcode = true;
    Ok(())
}

/// anything that doesn't decode
pub fn unknown(_op: u16, state: &mut State) -> Result<()> {
    state.bad_opcode = true;
    Ok(())
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Result<()> {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) -> Result<()> {
    let call_site = state.pc.wrapping_sub(0x2);
    state.pc = state
        .stack
        .pop()
        .ok_or(Chip8Error::StackUnderflow { pc: call_site })?;
    Ok(())
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Result<()> {
    state.pc = op.nnn();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Result<()> {
    state.stack.push(state.pc)?;
    state.pc = op.nnn();
    Ok(())
}

/// if Vx == nn then pc += 2
pub fn ske(op: u16, state: &mut State) -> Result<()> {
    let condition = state.v[op.x()] == op.nn();
    skip_if(state, condition);
    Ok(())
}

/// if Vx != nn then pc += 2
pub fn skne(op: u16, state: &mut State) -> Result<()> {
    let condition = state.v[op.x()] != op.nn();
    skip_if(state, condition);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Result<()> {
    let condition = state.v[op.x()] == state.v[op.y()];
    skip_if(state, condition);
    Ok(())
}

/// Vx = nn
pub fn load(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = op.nn();
    Ok(())
}

/// Vx += nn
/// Overflow wraps and VF is left alone
pub fn add(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.y()];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] |= state.v[op.y()];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] &= state.v[op.y()];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Result<()> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[FLAG] = over as u8;
    Ok(())
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut State) -> Result<()> {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[FLAG] = !under as u8;
    Ok(())
}

/// Vx = Vy >> 1; VF = lsb(Vy)
pub fn shr(op: u16, state: &mut State) -> Result<()> {
    let vy = state.v[op.y()];
    state.v[FLAG] = vy & 0x1;
    state.v[op.x()] = vy >> 1;
    Ok(())
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: u16, state: &mut State) -> Result<()> {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    state.v[op.x()] = res;
    state.v[FLAG] = !under as u8;
    Ok(())
}

/// Vx = Vy << 1; VF = msb(Vy)
pub fn shl(op: u16, state: &mut State) -> Result<()> {
    let vy = state.v[op.y()];
    state.v[FLAG] = (vy & 0x80) >> 7;
    state.v[op.x()] = vy << 1;
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Result<()> {
    let condition = state.v[op.x()] != state.v[op.y()];
    skip_if(state, condition);
    Ok(())
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Result<()> {
    state.i = op.nnn();
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) -> Result<()> {
    state.pc = u16::from(state.v[0x0]) + op.nnn();
    Ok(())
}

/// Vx = rand_byte & nn
pub fn rand(op: u16, state: &mut State) -> Result<()> {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.nn();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer.
/// Sets VF if any lit pixels are erased, clears it otherwise.
pub fn draw(op: u16, state: &mut State) -> Result<()> {
    let height = op.n() as usize;
    let mut sprite = [0u8; MAX_SPRITE_HEIGHT];
    for (row, byte) in sprite.iter_mut().enumerate().take(height) {
        *byte = state.memory.read(state.i.wrapping_add(row as u16));
    }

    let x = state.v[op.x()];
    let y = state.v[op.y()];
    state.v[FLAG] = 0x0;
    if state.frame_buffer.draw_sprite(x, y, &sprite[..height]) {
        state.v[FLAG] = 0x1;
    }
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Result<()> {
    let condition = state.keypad.is_pressed(state.v[op.x()]);
    skip_if(state, condition);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Result<()> {
    let condition = !state.keypad.is_pressed(state.v[op.x()]);
    skip_if(state, condition);
    Ok(())
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.delay_timer.get();
    Ok(())
}

/// await keypress for Vx
/// With no key down the pc is wound back so this instruction runs again next cycle.
pub fn keyd(op: u16, state: &mut State) -> Result<()> {
    match state.keypad.current() {
        Some(key) => state.v[op.x()] = key.index(),
        None => state.pc = state.pc.wrapping_sub(0x2),
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Result<()> {
    state.delay_timer.set(state.v[op.x()]);
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Result<()> {
    state.sound_timer.set(state.v[op.x()]);
    Ok(())
}

/// I += Vx
pub fn addi(op: u16, state: &mut State) -> Result<()> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()])) & ADDRESS_MASK;
    Ok(())
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: u16, state: &mut State) -> Result<()> {
    let digit = u16::from(state.v[op.x()] & 0xF);
    state.i = FONT_START + digit * FONT_GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
pub fn bcd(op: u16, state: &mut State) -> Result<()> {
    let value = state.v[op.x()];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(state.i.wrapping_add(offset as u16), *digit);
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(op: u16, state: &mut State) -> Result<()> {
    for reg in 0..=op.x() {
        state.memory.write(state.i.wrapping_add(reg as u16), state.v[reg]);
    }
    state.i = state.i.wrapping_add(op.x() as u16 + 1) & ADDRESS_MASK;
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(op: u16, state: &mut State) -> Result<()> {
    for reg in 0..=op.x() {
        state.v[reg] = state.memory.read(state.i.wrapping_add(reg as u16));
    }
    state.i = state.i.wrapping_add(op.x() as u16 + 1) & ADDRESS_MASK;
    Ok(())
}
