//! Common error types used throughout playcaps.
//!
//! Capability probes never fail outward: a negative answer is a `false`, not an
//! error. This type covers the few places where something can genuinely go
//! wrong, such as a host platform API throwing or a fixture carrying a value
//! that cannot be interpreted.

/// Common error type for playcaps.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A browser or platform API threw while being queried.
    #[error("host query failed [{api}]: {message}")]
    HostQuery {
        /// The API that was queried (e.g. "productinfo.isUdPanelSupported").
        api: String,
        /// Human-readable error description, including any platform error code.
        message: String,
    },

    /// The requested platform API does not exist on this host.
    #[error("host API unavailable: {0}")]
    Unavailable(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new HostQuery error.
    pub fn host_query(api: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HostQuery {
            api: api.into(),
            message: message.into(),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable<S: Into<String>>(api: S) -> Self {
        Self::Unavailable(api.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::host_query("productinfo.isUdPanelSupported", "code 9");
        assert_eq!(
            err.to_string(),
            "host query failed [productinfo.isUdPanelSupported]: code 9"
        );

        let err = Error::unavailable("AudioContext");
        assert_eq!(err.to_string(), "host API unavailable: AudioContext");

        let err = Error::invalid_input("bad answer");
        assert_eq!(err.to_string(), "Invalid input: bad answer");
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<u32> {
            Err(Error::unavailable("webapis"))
        }
        assert!(matches!(fails(), Err(Error::Unavailable(_))));
    }
}
