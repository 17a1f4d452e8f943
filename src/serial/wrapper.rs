use super::traits::ReadWrite;
use serialport::SerialPort;
use std::io::{Read, Result, Write};
use std::time::Duration;

pub struct Wrapper {
    port: Box<dyn SerialPort>,
}

impl ReadWrite for Wrapper {}

impl Read for Wrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.port.read(buf)
    }
}

impl Write for Wrapper {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.port.flush()
    }
}

impl Wrapper {
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> serialport::Result<Wrapper> {
        let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
        log::info!(
            "Opened {} at {} baud",
            port.name().unwrap_or_else(|| path.to_string()),
            baud_rate
        );
        Ok(Wrapper { port })
    }
}
