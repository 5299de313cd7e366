//! Application-wide error types.
//!
//! Traversal itself never fails with an error; a miss is reported through
//! [`Dug::found`](crate::Dug). These variants cover the surfaces around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error("keypath error: {0}")]
    Keypath(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("missing field".into());
        assert!(!e.to_string().is_empty());
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn keypath_error_display() {
        let e = AppError::Keypath("element 0 is a boolean".into());
        assert!(e.to_string().starts_with("keypath error"));
        assert!(e.to_string().contains("element 0"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: AppError = json_err.into();
        assert!(e.to_string().contains("json error"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        // satisfies std::error::Error trait
        let _: &dyn Error = &e;
    }
}
