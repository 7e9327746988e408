//! Browser Fetch Backend

use async_trait::async_trait;
use reqwest::Client;

use super::{interpret, ApiCall, Backend, Method, Reply};
use crate::error::{ApiError, ApiResult};

/// Sends calls with reqwest (fetch on wasm), relative to a base URL.
/// An empty base means the page's own origin.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    client: Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if self.base.is_empty() {
            format!("{}{}", page_origin(), path)
        } else {
            format!("{}{}", self.base, path)
        }
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default()
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send(&self, call: ApiCall) -> ApiResult<Reply> {
        let url = self.url(&call.path);
        let mut request = self.client.request(call.method.into(), &url);
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("[HTTP] {} {} failed: {}", call.method.as_str(), url, e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("[HTTP] {} {} -> {}", call.method.as_str(), url, status);
        interpret(status, &text, call.fallback, call.requires_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_trailing_slash_is_dropped() {
        let backend = HttpBackend::new("https://school.example/panel/");
        assert_eq!(backend.url("/api/groups"), "https://school.example/panel/api/groups");
    }

    #[test]
    fn methods_map_onto_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
    }
}
