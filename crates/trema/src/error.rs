use thiserror::Error;

/// A failure reported by the host's widget backend.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("backend call {call} failed: {message}")]
pub struct BackendError {
    pub call: &'static str,
    pub message: String,
}

impl BackendError {
    pub fn new(call: &'static str, message: impl Into<String>) -> Self {
        Self {
            call,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("no event handler registered for '{0}'")]
    MissingHandler(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("a logger is already installed")]
    LoggerAlreadySet,
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}

impl From<log::SetLoggerError> for RenderError {
    fn from(_: log::SetLoggerError) -> Self {
        RenderError::LoggerAlreadySet
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
