//! Error types for lumen

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumenError {
    /// A required input was missing or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Component props could not be deserialized.
    #[error("Invalid props: {0}")]
    Props(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LumenError>;

impl LumenError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        LumenError::InvalidInput(msg.into())
    }
}

#[cfg(feature = "python")]
impl From<LumenError> for pyo3::PyErr {
    fn from(err: LumenError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = LumenError::invalid_input("primary source must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input: primary source must not be empty"
        );
    }

    #[test]
    fn test_props_error_from_serde() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LumenError = parse.unwrap_err().into();
        assert!(matches!(err, LumenError::Props(_)));
        assert!(err.to_string().starts_with("Invalid props:"));
    }
}
