/// Result alias that carries the custom [`ShowcaseError`] type.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// A component was built from values it cannot operate on, such as an
    /// empty item collection or a zero autoplay interval. Fatal to the
    /// instance that reported it.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A direct navigation target lies outside the item collection.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    /// Free-form error for lookups and other recoverable failures.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Content or configuration file that is not valid JSON for its schema.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ShowcaseError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

impl From<&str> for ShowcaseError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ShowcaseError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
