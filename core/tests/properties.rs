use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG, ROM_START};
use chip8_core::{Chip8, Config, Instruction, Key};
use proptest::prelude::*;

fn machine() -> Chip8 {
    Chip8::new(Config::default().with_seed(0))
}

fn lit_pixels(chip8: &Chip8) -> Vec<(usize, usize)> {
    let mut lit = Vec::new();
    for y in 0..DISPLAY_HEIGHT {
        for x in 0..DISPLAY_WIDTH {
            if chip8.display().pixel(x, y) == Some(true) {
                lit.push((x, y));
            }
        }
    }
    lit
}

proptest! {
    #[test]
    fn load_then_add_wraps(x in 0u16..16, nn in any::<u8>(), nn2 in any::<u8>()) {
        let mut chip8 = machine();
        chip8.execute(0x6000 | x << 8 | u16::from(nn)).unwrap();
        prop_assert_eq!(chip8.v(x as usize), nn);
        chip8.execute(0x7000 | x << 8 | u16::from(nn2)).unwrap();
        prop_assert_eq!(chip8.v(x as usize), nn.wrapping_add(nn2));
    }

    #[test]
    fn add_registers_sets_carry(
        x in 0u16..15,
        y in 0u16..15,
        a in any::<u8>(),
        b in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let mut chip8 = machine();
        chip8.execute(0x6000 | x << 8 | u16::from(a)).unwrap();
        chip8.execute(0x6000 | y << 8 | u16::from(b)).unwrap();
        chip8.execute(0x8004 | x << 8 | y << 4).unwrap();
        prop_assert_eq!(chip8.v(x as usize), a.wrapping_add(b));
        prop_assert_eq!(chip8.v(FLAG), (u16::from(a) + u16::from(b) > 0xFF) as u8);
        prop_assert_eq!(chip8.v(y as usize), b);
    }

    #[test]
    fn sub_registers_sets_not_borrow(
        x in 0u16..15,
        y in 0u16..15,
        a in any::<u8>(),
        b in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let mut chip8 = machine();
        chip8.execute(0x6000 | x << 8 | u16::from(a)).unwrap();
        chip8.execute(0x6000 | y << 8 | u16::from(b)).unwrap();
        chip8.execute(0x8005 | x << 8 | y << 4).unwrap();
        prop_assert_eq!(chip8.v(x as usize), a.wrapping_sub(b));
        prop_assert_eq!(chip8.v(FLAG), (a >= b) as u8);
    }

    #[test]
    fn subn_registers_sets_not_borrow(
        x in 0u16..15,
        y in 0u16..15,
        a in any::<u8>(),
        b in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let mut chip8 = machine();
        chip8.execute(0x6000 | x << 8 | u16::from(a)).unwrap();
        chip8.execute(0x6000 | y << 8 | u16::from(b)).unwrap();
        chip8.execute(0x8007 | x << 8 | y << 4).unwrap();
        prop_assert_eq!(chip8.v(x as usize), b.wrapping_sub(a));
        prop_assert_eq!(chip8.v(FLAG), (b >= a) as u8);
    }

    #[test]
    fn any_opcode_executes_leniently(op in any::<u16>()) {
        let mut chip8 = machine();
        prop_assert!(chip8.execute(op).is_ok());
        let expected = Instruction::decode(op).is_bad() || op == 0x00EE;
        prop_assert_eq!(chip8.bad_opcode(), expected);
        prop_assert!(chip8.i() <= 0xFFF);
    }

    #[test]
    fn decode_is_total_and_stable(op in any::<u16>()) {
        let instruction = Instruction::decode(op);
        prop_assert_eq!(instruction, Instruction::from(op));
        prop_assert_eq!(instruction == Instruction::Unknown, instruction.pattern() == "????");
    }

    #[test]
    fn key_gated_skips(value in 0u8..16, held in 0u8..16, high in 0u8..16) {
        let key = Key::from_index(held).unwrap();
        let register = high << 4 | value;

        let mut chip8 = machine();
        chip8.keydown(key);
        chip8.execute(0x6100 | u16::from(register)).unwrap();
        chip8.execute(0xE19E).unwrap();
        let skipped = if value == held { 0x2 } else { 0x0 };
        prop_assert_eq!(chip8.pc(), ROM_START + skipped);

        let mut chip8 = machine();
        chip8.keydown(key);
        chip8.execute(0x6100 | u16::from(register)).unwrap();
        chip8.execute(0xE1A1).unwrap();
        let skipped = if value != held { 0x2 } else { 0x0 };
        prop_assert_eq!(chip8.pc(), ROM_START + skipped);
    }

    #[test]
    fn draw_stays_within_the_sprite_and_undoes_itself(
        x in any::<u8>(),
        y in any::<u8>(),
        n in 0u16..16,
        i in 0u16..0x1000,
    ) {
        let mut chip8 = machine();
        chip8.execute(0xA000 | i).unwrap();
        chip8.execute(0x6000 | u16::from(x)).unwrap();
        chip8.execute(0x6100 | u16::from(y)).unwrap();
        chip8.execute(0xD010 | n).unwrap();
        prop_assert_eq!(chip8.v(FLAG), 0);

        let x0 = x as usize % DISPLAY_WIDTH;
        let y0 = y as usize % DISPLAY_HEIGHT;
        let lit = lit_pixels(&chip8);
        for &(px, py) in lit.iter() {
            prop_assert!(px >= x0 && px < x0 + 8);
            prop_assert!(py >= y0 && py < y0 + n as usize);
        }

        chip8.execute(0xD010 | n).unwrap();
        prop_assert!(chip8.display().is_blank());
        prop_assert_eq!(chip8.v(FLAG), !lit.is_empty() as u8);
    }
}
