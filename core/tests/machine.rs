use chip8_core::constants::{FLAG, FONT_START, ROM_START};
use chip8_core::{Chip8, Chip8Error, Config, Instruction, Key, Rom};

fn boot(config: Config, program: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::new(config.with_seed(7));
    chip8.load(&Rom::from(program));
    chip8
}

fn lit(chip8: &Chip8) -> Vec<(usize, usize)> {
    let mut lit = Vec::new();
    for (y, row) in chip8.display().rows().enumerate() {
        for (x, &pixel) in row.iter().enumerate() {
            if pixel {
                lit.push((x, y));
            }
        }
    }
    lit
}

#[test]
fn fetch_is_big_endian_and_advances_by_two() {
    let mut chip8 = boot(Config::default(), &[0x00, 0x0F, 0xA0, 0x00]);
    assert_eq!(chip8.fetch(), Ok(0x000F));
    assert_eq!(chip8.pc(), ROM_START + 2);
    assert_eq!(chip8.fetch(), Ok(0xA000));
    assert_eq!(chip8.pc(), ROM_START + 4);
}

#[test]
fn subroutine_round_trip() {
    // 0x200: call 0x206
    // 0x202: jump 0x202
    // 0x206: return
    let program = [0x22, 0x06, 0x12, 0x02, 0x00, 0x00, 0x00, 0xEE];
    let mut chip8 = boot(Config::default(), &program);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x206);
    assert_eq!(chip8.stack(), &[0x202]);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x202);
    assert!(chip8.stack().is_empty());
}

#[test]
fn nested_subroutines_return_in_lifo_order() {
    // 0x200: call 0x206
    // 0x206: call 0x20A
    // 0x208: return
    // 0x20A: return
    let program = [0x22, 0x06, 0x12, 0x02, 0x00, 0x00, 0x22, 0x0A, 0x00, 0xEE, 0x00, 0xEE];
    let mut chip8 = boot(Config::default(), &program);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x20A);
    assert_eq!(chip8.stack(), &[0x202, 0x208]);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x208);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x202);
    assert!(chip8.stack().is_empty());
}

#[test]
fn wait_for_key_spins_until_a_key_is_down() {
    // 0x200: V3 = key
    // 0x202: jump 0x202
    let mut chip8 = boot(Config::default(), &[0xF3, 0x0A, 0x12, 0x02]);
    for _ in 0..3 {
        let op = chip8.fetch().unwrap();
        chip8.execute(op).unwrap();
        assert_eq!(chip8.pc(), ROM_START);
    }
    assert!(chip8.is_waiting_for_key());

    chip8.keydown(Key::D);
    let op = chip8.fetch().unwrap();
    chip8.execute(op).unwrap();
    assert_eq!(chip8.v(0x3), 0xD);
    assert_eq!(chip8.pc(), ROM_START + 2);

    chip8.keyup(Key::D);
    chip8.step().unwrap();
    assert_eq!(chip8.v(0x3), 0xD);
}

#[test]
fn drawing_a_glyph_twice_erases_it() {
    // I = font glyph 0, draw it at (V0, V1) = (0, 0) twice
    let program = [0xA0, 0x50, 0xD0, 0x15, 0xD0, 0x15];
    let mut chip8 = boot(Config::default(), &program);
    chip8.step().unwrap();
    assert_eq!(chip8.i(), FONT_START);

    chip8.step().unwrap();
    assert_eq!(chip8.v(FLAG), 0);
    assert_eq!(lit(&chip8).len(), 14);

    chip8.step().unwrap();
    assert_eq!(chip8.v(FLAG), 1);
    assert!(chip8.display().is_blank());
}

#[test]
fn drawing_near_the_corner_clips() {
    // V0 = 59, V1 = 29, I = font glyph 0, draw
    let program = [0x60, 0x3B, 0x61, 0x1D, 0xA0, 0x50, 0xD0, 0x15];
    let mut chip8 = boot(Config::default(), &program);
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    assert_eq!(
        lit(&chip8),
        vec![
            (59, 29),
            (60, 29),
            (61, 29),
            (62, 29),
            (59, 30),
            (62, 30),
            (59, 31),
            (62, 31),
        ]
    );
    assert_eq!(chip8.v(FLAG), 0);
}

#[test]
fn lenient_underflow_carries_on() {
    // 0x200: return, 0x202: V0 = 1
    let mut chip8 = boot(Config::default(), &[0x00, 0xEE, 0x60, 0x01]);
    chip8.step().unwrap();
    assert!(chip8.bad_opcode());
    chip8.step().unwrap();
    assert!(!chip8.bad_opcode());
    assert_eq!(chip8.v(0x0), 0x1);
}

#[test]
fn strict_underflow_stops() {
    let mut chip8 = boot(Config::default().with_strict(true), &[0x00, 0xEE]);
    assert_eq!(chip8.step(), Err(Chip8Error::StackUnderflow { pc: ROM_START }));
    assert_eq!(chip8.pc(), ROM_START);
    assert!(matches!(chip8.run_frame(), Err(Chip8Error::StackUnderflow { .. })));
}

#[test]
fn lenient_overflow_drops_the_call() {
    // 0x200: call 0x200
    let config = Config::default().with_max_stack_depth(3);
    let mut chip8 = boot(config, &[0x22, 0x00]);
    for _ in 0..3 {
        chip8.step().unwrap();
        assert!(!chip8.bad_opcode());
    }
    chip8.step().unwrap();
    assert!(chip8.bad_opcode());
    assert_eq!(chip8.stack().len(), 3);
    assert_eq!(chip8.pc(), 0x202);
}

#[test]
fn fetching_past_memory_fails() {
    // 0x200: jump 0xFFF
    let mut chip8 = boot(Config::default(), &[0x1F, 0xFF]);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0xFFF);
    assert_eq!(chip8.step(), Err(Chip8Error::PcOutOfBounds { pc: 0xFFF }));
    assert_eq!(chip8.pc(), 0xFFF);
}

#[test]
fn unknown_opcodes_are_flagged_and_skipped() {
    // 0x200: unknown 8XY8, 0x202: SYS
    let mut chip8 = boot(Config::default(), &[0x81, 0x28, 0x01, 0x23]);
    chip8.step().unwrap();
    assert!(chip8.bad_opcode());
    assert_eq!(chip8.pc(), 0x202);
    chip8.step().unwrap();
    assert!(chip8.bad_opcode());
    assert_eq!(chip8.pc(), 0x204);
}

#[test]
fn frames_count_timers_down_after_stepping() {
    // V0 = 3, DT = V0, then spin reading DT into V1
    let program = [0x60, 0x03, 0xF0, 0x15, 0xF1, 0x07, 0x12, 0x04];
    let config = Config::default().with_instructions_per_frame(3);
    let mut chip8 = boot(config, &program);

    let frame = chip8.run_frame().unwrap();
    assert_eq!(frame.executed, 3);
    assert_eq!(chip8.v(0x1), 3);
    assert_eq!(chip8.delay(), 2);

    chip8.run_frame().unwrap();
    assert_eq!(chip8.v(0x1), 2);
    assert_eq!(chip8.delay(), 1);
}

#[test]
fn redraws_are_reported_once() {
    let program = [0xA0, 0x50, 0xD0, 0x15, 0x12, 0x04];
    let mut chip8 = boot(Config::default().with_instructions_per_frame(2), &program);
    chip8.run_frame().unwrap();
    let frame = chip8.take_frame().expect("the glyph was drawn");
    assert!(!frame.is_blank());
    assert!(chip8.take_frame().is_none());
}

#[test]
fn rewinding_undoes_every_step() {
    let program = [0x60, 0x05, 0x70, 0x01, 0xA3, 0x00, 0xF0, 0x55, 0x12, 0x00];
    let mut chip8 = boot(Config::default(), &program);
    for _ in 0..5 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.memory()[0x300], 0x6);
    assert_eq!(chip8.pc(), 0x200);

    for _ in 0..5 {
        assert!(chip8.rewind());
    }
    assert!(!chip8.rewind());
    assert_eq!(chip8.pc(), ROM_START);
    assert_eq!(chip8.registers(), &[0; 16]);
    assert_eq!(chip8.memory()[0x300], 0x0);
    assert_eq!(chip8.past_opcodes().count(), 0);
}

#[test]
fn seeded_machines_draw_the_same_numbers() {
    let program = [0xC0, 0xFF, 0x12, 0x00];
    let mut a = boot(Config::default(), &program);
    let mut b = boot(Config::default(), &program);
    for _ in 0..16 {
        a.step().unwrap();
        b.step().unwrap();
        assert_eq!(a.v(0x0), b.v(0x0));
    }
}

#[test]
fn rewinding_replays_the_same_random_numbers() {
    let mut chip8 = boot(Config::default(), &[0xC0, 0xFF]);
    chip8.step().unwrap();
    let first = chip8.v(0x0);
    assert!(chip8.rewind());
    chip8.step().unwrap();
    assert_eq!(chip8.v(0x0), first);
}

#[test]
fn program_can_be_listed() {
    let program = [0x00, 0xE0, 0x81, 0x24, 0xD0, 0x15];
    let chip8 = boot(Config::default(), &program);
    let listing: Vec<String> = (0..3)
        .filter_map(|n| chip8.peek(ROM_START + 2 * n))
        .map(Instruction::disassemble)
        .collect();
    assert_eq!(listing, vec!["CLS", "ADD V1, V2", "DRW V0, V1, 5"]);
}
