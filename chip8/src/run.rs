use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use log::{debug, info};

use chip8_core::{Chip8, Key};

use crate::display::{frame_to_text, Listing, Registers};
use crate::Args;

pub fn run(args: &Args) -> Result<()> {
    let mut chip8: Chip8 = Chip8::new(args.config());

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open ROM {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    let loaded = chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to read ROM {}", args.rom.display()))?;
    info!("loaded {} bytes from {}", loaded, args.rom.display());

    if args.disassemble {
        print!("{}", Listing { chip8: &chip8, len: loaded });
        return Ok(());
    }

    // Keys pressed last frame, released at the start of this one
    let mut held: Vec<Key> = Vec::new();
    // Whether the sound timer was running at the end of the last frame
    let mut beeping = false;

    for frame in 0..args.frames {
        // Handle input
        for key in held.drain(..) {
            chip8.keyup(key);
        }
        for press in args.presses.iter().filter(|press| press.frame == frame) {
            debug!("frame {}: pressing {}", frame, press.key);
            chip8.keydown(press.key);
            held.push(press.key);
        }

        // Update state
        let report = match chip8.run_frame() {
            Ok(report) => report,
            Err(err) => {
                print!("{}", Registers(&chip8));
                return Err(err).with_context(|| format!("machine stopped in frame {}", frame));
            }
        };

        if report.sound_active && !beeping {
            info!("frame {}: beep", frame);
        }
        if report.beep_stopped {
            info!("frame {}: beep stopped", frame);
        }
        beeping = report.sound_active;

        if chip8.take_frame().is_some() {
            debug!("frame {}: display updated", frame);
        }
        if chip8.is_waiting_for_key() {
            debug!("frame {}: waiting for a key", frame);
        }
    }

    print!("{}", frame_to_text(chip8.display()));
    print!("{}", Registers(&chip8));
    Ok(())
}
