use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during one exchange with the API.
///
/// All variants are collapsed into the offline fallback at the `speak`
/// boundary; only `ChatClient::send` surfaces them.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed: {0}")]
    RequestFailed(StatusCode),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}
