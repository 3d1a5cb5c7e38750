//! Build-selected endpoint configuration. There is no runtime configuration: the base URL
//! is picked when the crate is compiled.

/// Local API used by debug builds.
pub const DEV_BASE_URL: &str = "http://localhost:3003";
/// Deployed API used by release builds.
pub const PROD_BASE_URL: &str = "http://38.242.243.113:4035";
/// Cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// `NEWSGRID_API_BASE` at build time wins; otherwise debug builds talk to the local API.
    pub fn for_build() -> Self {
        let base = option_env!("NEWSGRID_API_BASE").unwrap_or(if cfg!(debug_assertions) {
            DEV_BASE_URL
        } else {
            PROD_BASE_URL
        });
        Self::new(base)
    }

    pub fn news_endpoint(&self) -> String {
        format!("{}/api/news", self.base_url.trim_end_matches('/'))
    }

    /// Absolute (`http…`) media references pass through; anything else non-empty is
    /// prefixed with the base URL exactly once.
    pub fn resolve_media_url(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            None
        } else if raw.starts_with("http") {
            Some(raw.to_string())
        } else {
            Some(format!("{}{raw}", self.base_url))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_media_urls_pass_through() {
        let config = ApiConfig::new(DEV_BASE_URL);
        assert_eq!(
            config.resolve_media_url("https://cdn.example.com/a.jpg").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(
            config.resolve_media_url("http://other.host/v.mp4").as_deref(),
            Some("http://other.host/v.mp4")
        );
    }

    #[test]
    fn relative_media_urls_get_the_base_once() {
        let config = ApiConfig::new(DEV_BASE_URL);
        let resolved = config.resolve_media_url("/uploads/a.jpg").unwrap();
        assert_eq!(resolved, "http://localhost:3003/uploads/a.jpg");
        assert_eq!(resolved.matches(DEV_BASE_URL).count(), 1);
    }

    #[test]
    fn empty_media_reference_resolves_to_nothing() {
        assert_eq!(ApiConfig::new(PROD_BASE_URL).resolve_media_url(""), None);
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            ApiConfig::new("http://localhost:3003/").news_endpoint(),
            "http://localhost:3003/api/news"
        );
    }

    #[test]
    fn build_config_uses_nine_cards_per_page() {
        let config = ApiConfig::for_build();
        assert_eq!(config.page_size, 9);
        assert!(config.base_url.starts_with("http"));
    }
}
