//! Request Errors
//!
//! Every REST call resolves to `Result<Reply, ApiError>`. The `Display`
//! text is the part shown to the user after the operation's prefix.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),
    /// Non-2xx response
    #[error("{message}")]
    Status { code: u16, message: String },
    /// 2xx response that did not report success
    #[error("{0}")]
    Rejected(String),
    /// 2xx response whose body was not the expected JSON
    #[error("{0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("{0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
