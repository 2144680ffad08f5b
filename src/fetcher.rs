use std::thread;
use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT,
};
use serde_json::Value;

use crate::models::{ProductSummary, SearchResponse};

/// Blocking client for the catalog API. One request at a time, with a fixed
/// pause between consecutive requests as self-imposed pacing.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    delay: Duration,
}

impl CatalogClient {
    pub fn new(base_url: &str, delay: Duration) -> Result<Self> {
        let http = Client::builder().default_headers(default_headers()).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            delay,
        })
    }

    /// Pages through the search endpoint starting at page 1, accumulating
    /// summaries in API page order. Stops on an empty page or a missing
    /// next-page link. A failed request stops pagination and returns whatever
    /// was gathered so far; partial results are not an error.
    pub fn fetch_collection(&self, product_type: &str, limit: u32) -> Vec<ProductSummary> {
        let mut page = 1u32;
        let mut all_products = Vec::new();

        loop {
            log::info!("Fetching page {page} for product type: {product_type}");
            let url = format!(
                "{}/search?page={}&limit={}&product_type={}",
                self.base_url, page, limit, product_type
            );

            let listing = match self.get_json::<SearchResponse>(&url) {
                Ok(response) => response.products,
                Err(e) => {
                    log::error!("Failed to fetch page {page}: {e:#}");
                    break;
                }
            };

            if listing.data.is_empty() {
                log::info!("Collection complete ({} products)", all_products.len());
                break;
            }

            log::info!("Got {} products from page {page}", listing.data.len());
            let has_next = listing.next_page_url.is_some();
            all_products.extend(listing.data);

            if !has_next {
                log::info!("Collection complete ({} products)", all_products.len());
                break;
            }

            page += 1;
            self.pause();
        }

        all_products
    }

    /// Fetches the detail record for one slug. Returns `None` on any failure;
    /// the caller skips absent records and never retries. "Not found" and
    /// transient transport errors are deliberately not distinguished.
    pub fn fetch_detail(&self, slug: &str) -> Option<Value> {
        log::info!("Fetching detail for product: {slug}");
        let url = format!("{}/products/{}?client=true", self.base_url, slug);

        match self.get_json::<Value>(&url) {
            Ok(detail) => {
                let name = detail
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown");
                log::info!("Got detail for product: {name}");
                Some(detail)
            }
            Err(e) => {
                log::error!("Failed to fetch detail for {slug}: {e:#}");
                None
            }
        }
    }

    /// Fixed inter-request pause. Pacing, not backoff.
    pub fn pause(&self) {
        thread::sleep(self.delay);
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }
}

/// Browser-style request headers the catalog API expects; no auth token.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en,en-US;q=0.9,vi;q=0.8"),
    );
    headers.insert(ORIGIN, HeaderValue::from_static("http://localhost:9000/app"));
    headers.insert(REFERER, HeaderValue::from_static("http://localhost:9000/app/"));
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(
            "\"Microsoft Edge\";v=\"135\", \"Not-A.Brand\";v=\"8\", \"Chromium\";v=\"135\"",
        ),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("sec-ch-ua-platform", HeaderValue::from_static("Windows"));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("same-site"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36 Edg/135.0.0.0",
        ),
    );
    headers
}
