use crate::serial::Error as SerialError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    SerialError(#[from] SerialError),
    #[error("terminal error: {0}")]
    TerminalError(#[from] std::io::Error),
    #[error("operator input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
