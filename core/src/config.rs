use crate::constants::{
    DEFAULT_HISTORY_LEN, DEFAULT_INSTRUCTIONS_PER_FRAME, DEFAULT_MAX_STACK_DEPTH,
    DEFAULT_TIMER_TICKS_PER_FRAME,
};

/// # Config
/// Policy knobs for a `Chip8`.
///
/// - `max_stack_depth` bounds the call stack; a deeper 2NNN is a `StackOverflow`
/// - `strict` decides what a stack fault does:
///     - strict: `execute` returns the error and leaves the machine untouched
///     - lenient: the instruction is skipped, `bad_opcode` is raised and a warning is logged
/// - `seed` makes CXNN repeatable; without one the generator is seeded from entropy
/// - `history_len` is how many steps `rewind` can undo
/// - `instructions_per_frame` and `timer_ticks_per_frame` drive `run_frame`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_stack_depth: usize,
    pub strict: bool,
    pub seed: Option<u64>,
    pub history_len: usize,
    pub instructions_per_frame: u32,
    pub timer_ticks_per_frame: u32,
}

impl Config {
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn with_instructions_per_frame(mut self, instructions: u32) -> Self {
        self.instructions_per_frame = instructions;
        self
    }

    pub fn with_timer_ticks_per_frame(mut self, ticks: u32) -> Self {
        self.timer_ticks_per_frame = ticks;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            strict: false,
            seed: None,
            history_len: DEFAULT_HISTORY_LEN,
            instructions_per_frame: DEFAULT_INSTRUCTIONS_PER_FRAME,
            timer_ticks_per_frame: DEFAULT_TIMER_TICKS_PER_FRAME,
        }
    }
}
