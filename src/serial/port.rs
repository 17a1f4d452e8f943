use super::traits::ReadWrite;
use crate::serial::buffer::{BufError, Buffer};
use crate::serial::errors::Result;
use crate::serial::wrapper::Wrapper;
use crate::serial::Connection;
use std::io::{ErrorKind, Write};
use std::time::Duration;

const READ_BUFFER_SIZE: usize = 128;

pub(crate) struct LineConnection<T: ReadWrite> {
    stream: T,
    read_buffer: Buffer,
}

impl<T: ReadWrite> LineConnection<T> {
    pub(crate) fn new(stream: T) -> Self {
        LineConnection {
            stream,
            read_buffer: Buffer::new(READ_BUFFER_SIZE),
        }
    }

    #[cfg(test)]
    pub(crate) fn stream(&self) -> &T {
        &self.stream
    }
}

impl<T: ReadWrite> Connection for LineConnection<T> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut binary = Vec::with_capacity(line.len() + 1);
        binary.extend_from_slice(line.as_bytes());
        binary.push(b'\n');
        self.stream.write_all(&binary)?;
        self.stream.flush()?;
        log::trace!("Serial Input: {}", line);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut txt = Vec::new();
        loop {
            if !self.read_buffer.has_left() {
                match self.read_buffer.fill_from(&mut self.stream) {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(BufError::IoError(e)) if e.kind() == ErrorKind::TimedOut => {
                        log::debug!("No line terminator before timeout, {} bytes", txt.len());
                        break;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            match self.read_buffer.take_line() {
                Some(line) => {
                    txt.extend_from_slice(line);
                    break;
                }
                None => {
                    if let Some(rest) = self.read_buffer.take_remain() {
                        txt.extend_from_slice(rest);
                    }
                }
            }
        }

        let text = String::from_utf8(txt)?.trim_end().to_string();
        log::trace!("Serial Output: {}", text);
        Ok(text)
    }
}

pub fn new(path: &str, baud_rate: u32, timeout: Duration) -> Result<impl Connection> {
    let stream = Wrapper::open(path, baud_rate, timeout)?;
    Ok(LineConnection::new(stream))
}
