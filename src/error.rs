use std::{error, fmt, io};

/// Problems with the puzzle input.
#[derive(Debug)]
pub enum InputError {
    /// input ended while `expected` was still to come
    MissingToken { expected: String },
    /// a count was not a non-negative integer
    InvalidCount { token: String, expected: String },
    /// pass through io::Error
    Io(io::Error),
}

impl error::Error for InputError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingToken { expected } => {
                write!(f, "input ended early, expected {}", expected)
            }
            InputError::InvalidCount { token, expected } => {
                write!(f, "expected {}, found {:?}", expected, token)
            }
            InputError::Io(e) => write!(f, "reading input : {}", e),
        }
    }
}
