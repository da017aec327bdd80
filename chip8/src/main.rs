//! Headless Chip-8 runner.
//!
//! Loads a ROM, runs it for a fixed number of frames while replaying scripted key
//! presses, then prints the display and the machine's registers.
//!
//! ```bash
//! chip8 roms/ibm-logo.ch8 --frames 120
//! chip8 roms/keypad-test.ch8 --frames 300 --press 30:q --press 90:v -vv
//! chip8 roms/ibm-logo.ch8 --disassemble
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use chip8_core::constants::{DEFAULT_INSTRUCTIONS_PER_FRAME, DEFAULT_MAX_STACK_DEPTH};
use chip8_core::Config;

use crate::keymap::KeyPress;

mod display;
mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Frames to run before dumping the machine (60 per emulated second)
    #[arg(short, long, default_value_t = 60)]
    frames: u64,

    /// Instructions executed per frame
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_FRAME)]
    ips: u32,

    /// Seed for the random number generator behind CXNN
    #[arg(long)]
    seed: Option<u64>,

    /// Deepest the call stack may grow
    #[arg(long, default_value_t = DEFAULT_MAX_STACK_DEPTH)]
    max_stack_depth: usize,

    /// Stop on stack faults instead of skipping the offending instruction
    #[arg(long)]
    strict: bool,

    /// Hold a key for one frame, as FRAME:KEY using the QWERTY keymap (e.g. 30:q)
    #[arg(short, long = "press", value_name = "FRAME:KEY")]
    presses: Vec<KeyPress>,

    /// Print a listing of the ROM instead of running it
    #[arg(short, long)]
    disassemble: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config::default()
            .with_max_stack_depth(self.max_stack_depth)
            .with_strict(self.strict)
            .with_instructions_per_frame(self.ips);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG still wins over the -v flags
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    run::run(&args)
}
