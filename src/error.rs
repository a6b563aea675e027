pub type InvadersResult<T> = Result<T, InvadersError>;

#[derive(thiserror::Error, Debug)]
pub enum InvadersError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InvadersError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
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
            InvadersError::config("x")
                .to_string()
                .contains("configuration error:")
        );
        assert!(
            InvadersError::transport("x")
                .to_string()
                .contains("transport error:")
        );
        assert!(InvadersError::api("x").to_string().contains("api error:"));
        assert!(
            InvadersError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            InvadersError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = InvadersError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
