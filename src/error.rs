use std::{error, fmt};

#[derive(Clone, Debug)]
pub enum Error {
    /// Request never produced a usable response.
    Transport(String),
    /// Backend answered with a non-success status.
    Status(u16),
    /// Backend answered successfully, with an error in the payload.
    Api(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(err) => f.write_str(err),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Api(err) => f.write_str(err),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Status(code),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Transport(err.to_string())
    }
}
