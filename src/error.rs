pub type ClipforgeResult<T> = Result<T, ClipforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum ClipforgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipforgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ClipforgeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ClipforgeError::precondition("x")
                .to_string()
                .contains("precondition violated:")
        );
        assert!(
            ClipforgeError::gateway("x")
                .to_string()
                .contains("gateway error:")
        );
        assert!(
            ClipforgeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ClipforgeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
