use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// An input table could not be read or parsed.
    #[error("{what} unavailable: {reason}")]
    DataUnavailable { what: String, reason: String },

    #[error("unknown object '{0}'")]
    UnknownObject(String),

    #[error("invalid frame '{0}'. Use: ecliptic | equatorial")]
    InvalidFrame(String),
}

impl ChartError {
    pub fn data(what: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
