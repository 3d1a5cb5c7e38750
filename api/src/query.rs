use url::form_urlencoded;

use crate::model::Category;

/// Parameters of one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub category: Option<Category>,
}

impl NewsQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: String::new(),
            category: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Form-encoded query in the order `page, limit, search, category`.
    /// Empty filters are left out entirely.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if let Some(category) = self.category {
            serializer.append_pair("category", category.label());
        }
        serializer.finish()
    }
}
