/// An 8-bit countdown, decremented by the host at a fixed cadence (conventionally 60Hz).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    pub fn get(self) -> u8 {
        self.value
    }

    pub fn set(&mut self, value: u8) {
        self.value = value;
    }

    /// Counts down by one unless already at zero.
    /// Returns whether a decrement happened.
    pub fn decrement(&mut self) -> bool {
        if self.value > 0 {
            self.value -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_active(self) -> bool {
        self.value > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement() {
        let mut timer = Timer::default();
        timer.set(2);
        assert!(timer.decrement());
        assert_eq!(timer.get(), 1);
        assert!(timer.decrement());
        assert_eq!(timer.get(), 0);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut timer = Timer::default();
        assert!(!timer.decrement());
        assert_eq!(timer.get(), 0);
    }
}
