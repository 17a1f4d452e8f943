use crate::serial::errors::Result;
use std::io::{Read, Write};

pub trait ReadWrite: Read + Write {}

/// A newline-delimited text link to the robot.
pub trait Connection {
    /// Sends `line` followed by a single LF.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Returns the next line without trailing whitespace. Whatever arrived
    /// before the read timeout is returned when no LF shows up, which is an
    /// empty string for a silent device.
    fn read_line(&mut self) -> Result<String>;
}
