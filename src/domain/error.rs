//! Domain error types.

/// Top-level error type for pricelog.
#[derive(Debug, thiserror::Error)]
pub enum PricelogError {
    #[error("fetch error: {reason}")]
    Fetch { reason: String },

    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("storage error: {reason}")]
    Storage { reason: String },

    #[error("trigger error: {reason}")]
    Trigger { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PricelogError> for std::process::ExitCode {
    fn from(err: &PricelogError) -> Self {
        let code: u8 = match err {
            PricelogError::Io(_) => 1,
            PricelogError::ConfigParse { .. } | PricelogError::ConfigInvalid { .. } => 2,
            PricelogError::Fetch { .. } => 3,
            PricelogError::Parse { .. } => 4,
            PricelogError::Storage { .. } => 5,
            PricelogError::Trigger { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = PricelogError::Fetch {
            reason: "HTTP 502 from ticker endpoint".into(),
        };
        assert_eq!(err.to_string(), "fetch error: HTTP 502 from ticker endpoint");
    }
}
