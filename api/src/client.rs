use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::model::NewsPage;
use crate::query::NewsQuery;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
///
/// No retries, no timeouts: a failed request is reported once and the caller decides
/// what to keep on screen.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl NewsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Query for `page` using the configured page size.
    pub fn query(&self, page: u32) -> NewsQuery {
        NewsQuery::new(page, self.config.page_size)
    }

    pub fn request_url(&self, query: &NewsQuery) -> Result<Url> {
        let mut url = Url::parse(&self.config.news_endpoint())?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    /// Issue one `GET /api/news` and decode the envelope.
    ///
    /// # Errors
    /// - `FetchError::Url` when the base URL is malformed
    /// - `FetchError::Transport` on network failure or an undecodable body
    /// - `FetchError::Status` for any non-2xx response
    pub async fn fetch_page(&self, query: &NewsQuery) -> Result<NewsPage> {
        let url = self.request_url(query)?;
        debug!(query = %query.to_query_string(), "fetching news");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let page = response.json::<NewsPage>().await?;
        debug!(
            items = page.data.len(),
            pages = page.pagination.pages,
            "news response decoded"
        );
        Ok(page)
    }
}
