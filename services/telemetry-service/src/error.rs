use thiserror::Error;

/// Any fault on the way from request parameters to an appended row.
///
/// The cause is not classified; only its description reaches the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppendFailure {
    message: String,
}

impl AppendFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for AppendFailure {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("sheet write failed: {err}"))
    }
}

impl From<csv::Error> for AppendFailure {
    fn from(err: csv::Error) -> Self {
        Self::new(format!("row encoding failed: {err}"))
    }
}

impl From<tokio::task::JoinError> for AppendFailure {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("append worker failed: {err}"))
    }
}
