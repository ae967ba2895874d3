use std::error::Error as StdError;

#[derive(Debug)]
pub enum Error {
    CVError(opencv::Error),
    ConfigError(config::ConfigError),
    SourceError(String),
    WriterError(String),
    CodecError(String),
    UnknownError(Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub fn as_unknown_error<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::UnknownError(err.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CVError(err) => write!(f, "opencv error: {}", err),
            Error::ConfigError(err) => write!(f, "configuration error: {}", err),
            Error::SourceError(msg) => write!(f, "capture source error: {}", msg),
            Error::WriterError(msg) => write!(f, "video writer error: {}", msg),
            Error::CodecError(msg) => write!(f, "codec error: {}", msg),
            Error::UnknownError(err) => write!(f, "unknown error: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::CVError(err) => Some(err),
            Error::ConfigError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<opencv::Error> for Error {
    fn from(value: opencv::Error) -> Self {
        Self::CVError(value)
    }
}

impl From<config::ConfigError> for Error {
    fn from(value: config::ConfigError) -> Self {
        Self::ConfigError(value)
    }
}
