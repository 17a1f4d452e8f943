use std::fmt;

/// One line sent to the motor controller firmware. Operands are carried as
/// the operator typed them; the firmware is the one that validates them.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    /// Closed-loop velocity targets: linear `x`, angular `w`.
    ClosedLoop { x: String, w: String },
    /// Open-loop PWM duty cycles, nominally 0-255.
    OpenLoop { left: String, right: String },
    Odometry,
    MotorStatus,
}

impl Command {
    pub fn opcode(&self) -> char {
        match self {
            Command::ClosedLoop { .. } => 'c',
            Command::OpenLoop { .. } => 'o',
            Command::Odometry => 'q',
            Command::MotorStatus => 'm',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ClosedLoop { x, w } => write!(f, "{} {} {}", self.opcode(), x, w),
            Command::OpenLoop { left, right } => {
                write!(f, "{} {} {}", self.opcode(), left, right)
            }
            Command::Odometry | Command::MotorStatus => write!(f, "{}", self.opcode()),
        }
    }
}
