//! Reply Interpretation
//!
//! Turns a status code and body text into one `Result`, so every caller
//! sees the same success/failure split.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Fields the panel reads from any endpoint's JSON reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Reply {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Per-entry problems reported by bulk import
    #[serde(default)]
    pub errors: Vec<String>,
    /// Id of a newly created record
    pub id: Option<u32>,
}

impl Reply {
    /// Non-empty `message`, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

pub fn interpret(status: u16, body: &str, fallback: &str, requires_success: bool) -> ApiResult<Reply> {
    let parsed = if body.trim().is_empty() {
        Ok(Reply::default())
    } else {
        serde_json::from_str::<Reply>(body)
    };

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .and_then(|reply| reply.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Status { code: status, message });
    }

    let reply = parsed.map_err(|e| ApiError::Decode(format!("{}: {}", fallback, e)))?;
    let rejected = match reply.success {
        Some(false) => true,
        None => requires_success,
        Some(true) => false,
    };
    if rejected {
        let message = reply
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Rejected(message));
    }
    Ok(reply)
}
