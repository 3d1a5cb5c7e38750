//! REST client for the news listing endpoint. Shared by every platform crate through `ui`.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;

pub use client::NewsClient;
pub use config::ApiConfig;
pub use error::FetchError;
pub use model::{Category, MediaKind, NewsItem, NewsPage, Pagination};
pub use query::NewsQuery;
