use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/app/products";

/// Built-in slug set used by `--slug-detail` runs.
pub const SLUG_PRODUCTS: [&str; 10] = [
    "gildan-5000",
    "comfort-color-1717",
    "bella-3001",
    "gildan-18000",
    "gildan-18500",
    "gildan-64000",
    "gildan-5000l",
    "gildan-5000b",
    "nextlevel-6210",
    "next-level-3600",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch catalog products and split them into JSON chunk files")]
pub struct Args {
    /// Product type to archive (e.g. mugs, tshirts)
    #[arg(long)]
    pub product_type: Option<String>,

    /// Number of products per search page
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Number of products per chunk file
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_size: u32,

    /// Directory the JSON files are written to
    #[arg(long, default_value = "products_data")]
    pub output_dir: PathBuf,

    /// Fetch detail only for these slugs (e.g. gildan-64000 comfort-color-1717)
    #[arg(long, num_args = 1..)]
    pub slugs: Option<Vec<String>>,

    /// Fetch detail for every slug in the built-in slug set
    #[arg(long)]
    pub slug_detail: bool,

    /// Catalog API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

/// The three mutually exclusive run modes. `--slug-detail` wins over
/// everything; explicit slugs win over a bulk run; both slug list and bulk
/// run require a product type.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    SlugDetail,
    ExplicitSlugs {
        product_type: &'a str,
        slugs: &'a [String],
    },
    BulkByType {
        product_type: &'a str,
    },
}

impl Args {
    /// Resolves the run mode; `None` means required input is missing and the
    /// operator should be pointed at `--product-type` / `--slug-detail`.
    pub fn mode(&self) -> Option<Mode<'_>> {
        if self.slug_detail {
            return Some(Mode::SlugDetail);
        }
        let product_type = self.product_type.as_deref()?;
        match self.slugs.as_deref() {
            Some(slugs) if !slugs.is_empty() => Some(Mode::ExplicitSlugs {
                product_type,
                slugs,
            }),
            _ => Some(Mode::BulkByType { product_type }),
        }
    }
}
