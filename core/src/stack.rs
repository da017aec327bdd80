use crate::error::{Chip8Error, Result};

/// # Call Stack
/// Return addresses pushed by 2NNN and popped by 00EE.
///
/// Depth is bounded by `max_depth` so a runaway ROM can't grow it without limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<u16>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Pushes the address a subroutine returns to.
    /// The call itself sits just before it, which is what an overflow reports.
    pub fn push(&mut self, return_addr: u16) -> Result<()> {
        if self.frames.len() >= self.max_depth {
            return Err(Chip8Error::StackOverflow {
                pc: return_addr.wrapping_sub(2),
                depth: self.max_depth,
            });
        }
        self.frames.push(return_addr);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u16> {
        self.frames.pop()
    }

    /// Bottom of the stack first
    pub fn frames(&self) -> &[u16] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = CallStack::new(4);
        stack.push(0x202).unwrap();
        stack.push(0x304).unwrap();
        assert_eq!(stack.frames(), &[0x202, 0x304]);
        assert_eq!(stack.pop(), Some(0x304));
        assert_eq!(stack.pop(), Some(0x202));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_past_max_depth() {
        let mut stack = CallStack::new(1);
        stack.push(0x202).unwrap();
        assert_eq!(
            stack.push(0x40A),
            Err(Chip8Error::StackOverflow {
                pc: 0x408,
                depth: 1
            })
        );
        assert_eq!(stack.frames().len(), 1);
    }

    #[test]
    fn test_huge_max_depth_grows_on_demand() {
        let mut stack = CallStack::new(usize::MAX);
        stack.push(0x202).unwrap();
        assert_eq!(stack.frames(), &[0x202]);
        assert!(stack.frames.capacity() < 1024);
    }
}
