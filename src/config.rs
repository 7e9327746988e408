//! Panel Configuration
//!
//! Read from data attributes on the mount element.

use web_sys::Element;

/// Id of the element the panel mounts into
pub const ROOT_ID: &str = "admin-root";

const DEFAULT_EXPORT_URL: &str = "/api/export";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Prefix for REST paths, empty for same-origin
    pub api_base: String,
    pub export_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            export_url: DEFAULT_EXPORT_URL.to_string(),
        }
    }
}

impl PanelConfig {
    /// Build from optional attribute values, falling back to defaults
    pub fn from_attrs(api_base: Option<String>, export_url: Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            api_base: non_blank(api_base).unwrap_or(defaults.api_base),
            export_url: non_blank(export_url).unwrap_or(defaults.export_url),
        }
    }

    pub fn from_element(root: &Element) -> Self {
        Self::from_attrs(root.get_attribute("data-api-base"), root.get_attribute("data-export-url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_attrs_use_defaults() {
        assert_eq!(PanelConfig::from_attrs(None, Some("  ".to_string())), PanelConfig::default());
    }

    #[test]
    fn attrs_override_defaults() {
        let config = PanelConfig::from_attrs(
            Some("https://school.example/panel".to_string()),
            Some("/api/export?format=xlsx".to_string()),
        );
        assert_eq!(config.api_base, "https://school.example/panel");
        assert_eq!(config.export_url, "/api/export?format=xlsx");
    }
}
