use crate::constants::ADDRESS_MASK;

/// # Opcodes
///
/// A 16-bit instruction word, read big-endian from memory. Written as four hex nibbles
/// the fields are named after the placeholders used in the instruction patterns:
///
/// ```text
/// |F|X|Y|N|   family, register X, register Y, 4-bit literal
/// |F|X|N N|   8-bit literal
/// |F|N N N|   12-bit address
/// ```
///
/// The family nibble alone picks most instructions; the 0, 8, E and F families also
/// look at the low nibble or byte. Which of the other fields carry data depends on the
/// instruction, so every accessor is always available and callers take what they need.
pub trait Opcode {
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `X` as an index into V0..VF
    fn x(&self) -> usize;

    /// `Y` as an index into V0..VF
    fn y(&self) -> usize;

    /// `N`, the low nibble
    fn n(&self) -> u8;

    /// `NN`, the low byte
    fn nn(&self) -> u8;

    /// `NNN`, the low 12 bits
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        let [high, low] = self.to_be_bytes();
        (high >> 4, high & 0xF, low >> 4, low & 0xF)
    }

    fn x(&self) -> usize {
        usize::from(self.to_be_bytes()[0] & 0xF)
    }

    fn y(&self) -> usize {
        usize::from(self.to_be_bytes()[1] >> 4)
    }

    fn n(&self) -> u8 {
        self.to_be_bytes()[1] & 0xF
    }

    fn nn(&self) -> u8 {
        self.to_be_bytes()[1]
    }

    fn nnn(&self) -> u16 {
        self & ADDRESS_MASK
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    const DRAW: u16 = 0xD3A7;

    #[test]
    fn test_fields() {
        assert_eq!(DRAW.nibbles(), (0xD, 0x3, 0xA, 0x7));
        assert_eq!(DRAW.x(), 0x3);
        assert_eq!(DRAW.y(), 0xA);
        assert_eq!(DRAW.n(), 0x7);
        assert_eq!(DRAW.nn(), 0xA7);
        assert_eq!(DRAW.nnn(), 0x3A7);
    }

    #[test]
    fn test_fields_of_extremes() {
        assert_eq!(0x0000u16.nibbles(), (0x0, 0x0, 0x0, 0x0));
        assert_eq!(0xFFFFu16.nibbles(), (0xF, 0xF, 0xF, 0xF));
        assert_eq!(0xFFFFu16.nnn(), 0xFFF);
        assert_eq!(0xF00Fu16.x(), 0x0);
    }
}
