use thiserror::Error;

/// Errors raised by the configuration layer.
///
/// The cost models themselves are total and never fail; only loading and
/// validating the estimator configuration can go wrong.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigFile(#[from] config::ConfigError),
    /// Configuration loaded but is structurally invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::InvalidConfig("model catalog is empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: model catalog is empty"
        );
    }
}
