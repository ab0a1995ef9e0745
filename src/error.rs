use thiserror::Error;

/// QK統一エラー型
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote source error: {message} (status: {status})")]
    RemoteApi { status: u16, message: String },

    #[error("Malformed remote response: {0}")]
    RemoteFormat(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    /// リモート同期に起因するエラーかどうか
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            QuoteError::Network(_) | QuoteError::RemoteApi { .. } | QuoteError::RemoteFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_errors_are_classified() {
        let api = QuoteError::RemoteApi {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(api.is_remote());
        assert!(QuoteError::RemoteFormat("not an array".to_string()).is_remote());
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        assert!(!QuoteError::Storage("locked".to_string()).is_remote());
        let io = QuoteError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!io.is_remote());
    }

    #[test]
    fn test_remote_api_display() {
        let err = QuoteError::RemoteApi {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Remote source error: Not Found (status: 404)");
    }
}
