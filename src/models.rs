use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a search page. Only `name` and `slug` are read by the
/// archiver; every other field is carried through so the collection file
/// matches the API documents verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub slug: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope returned by the search endpoint. A missing `products` object is
/// treated as an empty page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: ProductPage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub data: Vec<ProductSummary>,
    #[serde(default)]
    pub next_page_url: Option<String>,
}
