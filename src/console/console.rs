use crate::console::errors::{Error, Result};
use crate::console::menu::{MenuChoice, MENU};
use crate::protocol::Command;
use crate::serial::Connection;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum State {
    Running,
    Terminated,
}

/// Operator console driving one robot connection: menu in, command out,
/// one response line back.
pub struct Console<C: Connection, R: BufRead, W: Write> {
    connection: C,
    input: R,
    output: W,
}

impl<C: Connection, R: BufRead, W: Write> Console<C, R, W> {
    pub fn new(connection: C, input: R, output: W) -> Self {
        Console {
            connection,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// One pass through the menu. Only a valid command touches the
    /// connection: exactly one write, then one read.
    pub fn step(&mut self) -> Result<State> {
        writeln!(self.output, "{}", MENU)?;
        let selection = self.prompt("Enter your choice: ")?;

        let command = match MenuChoice::parse(&selection) {
            Some(MenuChoice::ClosedLoop) => {
                let x = self.prompt("Enter linear velocity x: ")?;
                let w = self.prompt("Enter angular velocity w: ")?;
                Command::ClosedLoop { x, w }
            }
            Some(MenuChoice::OpenLoop) => {
                let left = self.prompt("Enter PWM for left motor (0-255): ")?;
                let right = self.prompt("Enter PWM for right motor (0-255): ")?;
                Command::OpenLoop { left, right }
            }
            Some(MenuChoice::Odometry) => Command::Odometry,
            Some(MenuChoice::MotorStatus) => Command::MotorStatus,
            Some(MenuChoice::Exit) => {
                writeln!(self.output, "Exiting...")?;
                return Ok(State::Terminated);
            }
            None => {
                log::debug!("Rejected selection {:?}", selection);
                writeln!(self.output, "Invalid choice. Try again.")?;
                return Ok(State::Running);
            }
        };

        log::debug!("Sending '{}' command", command.opcode());
        self.connection.write_line(&command.to_string())?;
        let response = self.connection.read_line()?;
        writeln!(self.output, "Response: {}", response)?;
        Ok(State::Running)
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
