use crate::serial::traits::ReadWrite;
use std::io::{Error, ErrorKind, Read, Write};

/// In-memory stand-in for a serial port. Each read hands out the next
/// scripted chunk; once the script runs out, reads time out like a silent
/// device would.
pub struct MockReadWrite<'a> {
    read_chunks: Vec<&'a [u8]>,
    pub write_buf: Vec<u8>,
    pub write_calls: usize,
    pub read_calls: usize,
    broken: bool,
    pointer: usize,
}

impl<'a> MockReadWrite<'a> {
    pub fn new(read_chunks: Vec<&'a [u8]>) -> MockReadWrite<'a> {
        MockReadWrite {
            read_chunks,
            write_buf: Vec::new(),
            write_calls: 0,
            read_calls: 0,
            broken: false,
            pointer: 0,
        }
    }

    /// A port whose device has gone away: every operation fails.
    pub fn unplugged() -> MockReadWrite<'a> {
        MockReadWrite {
            broken: true,
            ..MockReadWrite::new(Vec::new())
        }
    }

    fn check_plugged(&self) -> std::io::Result<()> {
        if self.broken {
            return Err(Error::new(ErrorKind::BrokenPipe, "device unplugged"));
        }
        Ok(())
    }
}

impl<'a> Read for MockReadWrite<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.read_calls += 1;
        self.check_plugged()?;
        let chunk = match self.read_chunks.get(self.pointer) {
            Some(c) => *c,
            None => return Err(Error::new(ErrorKind::TimedOut, "Operation timed out")),
        };
        buf[..chunk.len()].copy_from_slice(chunk);
        self.pointer += 1;
        Ok(chunk.len())
    }
}

impl<'a> Write for MockReadWrite<'a> {
    fn write(&mut self, bin: &[u8]) -> std::io::Result<usize> {
        self.write_calls += 1;
        self.check_plugged()?;
        self.write_buf.extend_from_slice(bin);
        Ok(bin.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.check_plugged()
    }
}

impl<'a> ReadWrite for MockReadWrite<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    mod read_test {
        use super::*;

        #[test]
        fn times_out_when_empty() {
            let mut mock = MockReadWrite::new(Vec::new());
            let mut buf = vec![0u8; 16];
            let err = mock.read(&mut buf).unwrap_err();
            assert_eq!(ErrorKind::TimedOut, err.kind());
            assert_eq!([0; 16].to_vec(), buf);
        }

        #[test]
        fn chunks_in_order() {
            let mut mock = MockReadWrite::new(vec![b"OK", b"\n"]);
            let mut buf = vec![0u8; 4];
            assert_eq!(2, mock.read(&mut buf).unwrap());
            assert_eq!(b"OK", &buf[..2]);
            assert_eq!(1, mock.read(&mut buf).unwrap());
            assert_eq!(b"\n", &buf[..1]);
            assert_eq!(true, mock.read(&mut buf).is_err());
            assert_eq!(3, mock.read_calls);
        }
    }

    mod write_test {
        use super::*;

        #[test]
        fn records_bytes() {
            let mut mock = MockReadWrite::new(Vec::new());
            assert_eq!(2, mock.write(b"q\n").unwrap());
            assert_eq!(2, mock.write(b"m\n").unwrap());
            assert_eq!(b"q\nm\n".to_vec(), mock.write_buf);
            assert_eq!(2, mock.write_calls);
        }

        #[test]
        fn unplugged_fails() {
            let mut mock = MockReadWrite::unplugged();
            assert_eq!(ErrorKind::BrokenPipe, mock.write(b"q\n").unwrap_err().kind());
            assert_eq!(true, mock.flush().is_err());
            assert_eq!(true, mock.write_buf.is_empty());
        }
    }
}
