use crate::serial::Error as SerialError;
use std::io::Read;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum BufError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("this buffer has data left")]
    DataLeftError,
}

impl From<BufError> for SerialError {
    fn from(err: BufError) -> Self {
        match err {
            BufError::IoError(e) => SerialError::IoError(e),
            BufError::DataLeftError => {
                SerialError::UnknownError(String::from("this buffer has data left"))
            }
        }
    }
}

/// Receive buffer holding one chunk read from the port. Lines are handed out
/// LF-inclusive; bytes past the last LF stay here until taken.
pub struct Buffer {
    pub(self) data: Vec<u8>,
    pub(self) start: usize,
    pub(self) end: usize,
}

impl Buffer {
    pub fn new(capacity: usize) -> Buffer {
        Buffer {
            data: vec![0u8; capacity],
            start: 0,
            end: 0,
        }
    }

    pub fn has_left(&self) -> bool {
        self.start < self.end
    }

    /// Reads one chunk. Refuses while unread bytes remain so nothing is
    /// overwritten.
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> Result<usize, BufError> {
        if self.has_left() {
            return Err(BufError::DataLeftError);
        }

        let n = reader.read(&mut self.data)?;
        self.start = 0;
        self.end = n;
        Ok(n)
    }

    pub fn take_line(&mut self) -> Option<&[u8]> {
        let pending = &self.data[self.start..self.end];
        let lf = pending.iter().position(|&b| b == b'\n')?;
        let begin = self.start;
        self.start += lf + 1;
        Some(&self.data[begin..self.start])
    }

    pub fn take_remain(&mut self) -> Option<&[u8]> {
        if !self.has_left() {
            return None;
        }
        let begin = self.start;
        self.start = self.end;
        Some(&self.data[begin..self.end])
    }
}
