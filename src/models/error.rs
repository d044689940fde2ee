use std::fmt;
use std::io;

/// Fatal error classes for the pipeline and the case report. Recoverable geocode
/// failures are modeled separately as `GeocodeError` and never surface here.
#[derive(Debug)]
pub enum Error {
    NetworkError(String),
    ParserError(String),
    RenderError(String),
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::RenderError(msg) => write!(f, "Render Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
            _ => Error::ParserError(message),
        }
    }
}
