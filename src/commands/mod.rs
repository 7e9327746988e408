//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.
//! Every wrapper builds an `ApiCall` and hands it to a `Backend`.

mod http;
mod reply;
mod task;
mod group;
mod member;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use http::HttpBackend;
pub use reply::{interpret, Reply};
pub use task::*;
pub use group::*;
pub use member::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request to the REST backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Message used when the server gives no `error` string
    pub fallback: &'static str,
    /// The reply must carry `success: true` to count as success
    pub requires_success: bool,
}

impl ApiCall {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            fallback: "请求失败",
            requires_success: false,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn fallback(mut self, message: &'static str) -> Self {
        self.fallback = message;
        self
    }

    pub fn requiring_success(mut self) -> Self {
        self.requires_success = true;
        self
    }
}

/// Transport seam between the controller and the server
#[async_trait(?Send)]
pub trait Backend {
    async fn send(&self, call: ApiCall) -> ApiResult<Reply>;
}
