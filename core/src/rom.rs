use std::io::{self, Read};

/// # ROM
/// A raw, headerless image of big-endian Chip-8 bytecode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Rom { data }
    }

    /// Reads a whole ROM from a source file
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of a ROM
    pub fn read<R: Read>(mut reader: R) -> io::Result<Rom> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Rom { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Rom {
    fn from(data: Vec<u8>) -> Self {
        Rom::new(data)
    }
}

impl From<&[u8]> for Rom {
    fn from(data: &[u8]) -> Self {
        Rom::new(data.to_vec())
    }
}
