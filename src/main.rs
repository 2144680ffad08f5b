mod archiver;
mod chunker;
mod cli;
mod fetcher;
mod models;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use cli::{Args, Mode, SLUG_PRODUCTS};
use fetcher::CatalogClient;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let Some(mode) = args.mode() else {
        // User error, not a crash: point at the options and exit cleanly
        // before any network call or file write.
        log::error!("Specify a product type (--product-type) or use --slug-detail");
        return Ok(());
    };

    let client = CatalogClient::new(&args.base_url, Duration::from_millis(args.delay_ms))?;
    archiver::ensure_output_dir(&args.output_dir)?;

    match mode {
        Mode::SlugDetail => run_slug_detail(&client, &args.output_dir),
        Mode::ExplicitSlugs {
            product_type,
            slugs,
        } => run_explicit_slugs(&client, &args.output_dir, product_type, slugs),
        Mode::BulkByType { product_type } => run_bulk(
            &client,
            &args.output_dir,
            product_type,
            args.limit,
            args.chunk_size as usize,
        ),
    }
}

/// Mode A: fetch detail for the built-in slug set and write the successes as
/// one array. No chunking.
fn run_slug_detail(client: &CatalogClient, output_dir: &Path) -> Result<()> {
    log::info!("Fetching detail for {} built-in slugs", SLUG_PRODUCTS.len());
    let details = fetch_details(client, SLUG_PRODUCTS.iter().copied());

    let path = output_dir.join(archiver::SLUG_DETAIL_FILE);
    archiver::save_json(&details, &path)?;
    log::info!(
        "Done: saved detail for {} products to {}",
        details.len(),
        path.display()
    );
    Ok(())
}

/// Mode B: fetch detail for a caller-supplied slug list and write the
/// successes as one array. No chunking.
fn run_explicit_slugs(
    client: &CatalogClient,
    output_dir: &Path,
    product_type: &str,
    slugs: &[String],
) -> Result<()> {
    log::info!("Fetching detail for {} requested slugs", slugs.len());
    let details = fetch_details(client, slugs.iter().map(String::as_str));

    if details.is_empty() {
        log::error!("No product detail could be fetched, stopping");
        return Ok(());
    }

    let path = archiver::detailed_path(output_dir, product_type);
    archiver::save_json(&details, &path)?;
    log::info!(
        "Done: saved {} detailed products to {}",
        details.len(),
        path.display()
    );
    Ok(())
}

/// Mode C: page through the full collection, archive it, fetch every detail
/// record, archive those, then split them into numbered chunk files.
fn run_bulk(
    client: &CatalogClient,
    output_dir: &Path,
    product_type: &str,
    limit: u32,
    chunk_size: usize,
) -> Result<()> {
    log::info!("Archiving all products of type: {product_type}");
    let products = client.fetch_collection(product_type, limit);
    if products.is_empty() {
        log::error!("No products found, stopping");
        return Ok(());
    }

    let collection_file = archiver::collection_path(output_dir, product_type);
    archiver::save_json(&products, &collection_file)?;
    log::info!(
        "Saved all {} products to {}",
        products.len(),
        collection_file.display()
    );

    let total = products.len();
    let mut details = Vec::new();
    for (index, product) in products.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", index + 1, total, product.name);
        if let Some(detail) = client.fetch_detail(&product.slug) {
            details.push(detail);
        }
        if index + 1 < total {
            client.pause();
        }
    }
    if details.is_empty() {
        log::error!("No product detail could be fetched, stopping");
        return Ok(());
    }

    let detailed_file = archiver::detailed_path(output_dir, product_type);
    archiver::save_json(&details, &detailed_file)?;
    log::info!(
        "Saved {} detailed products to {}",
        details.len(),
        detailed_file.display()
    );

    let mut chunk_count = 0;
    for (index, chunk) in chunker::split_into_chunks(&details, chunk_size).enumerate() {
        let chunk_file = archiver::chunk_path(output_dir, product_type, index + 1);
        archiver::save_json(&chunk, &chunk_file)?;
        log::info!(
            "Saved {} products to chunk file {}",
            chunk.len(),
            chunk_file.display()
        );
        chunk_count += 1;
    }

    log::info!(
        "Done: split {} products into {} chunk files in {}",
        details.len(),
        chunk_count,
        output_dir.display()
    );
    Ok(())
}

/// Shared detail loop for the slug-driven modes: failed slugs are dropped,
/// successes keep input order, and the pause runs between all but the last.
fn fetch_details<'a, I>(client: &CatalogClient, slugs: I) -> Vec<Value>
where
    I: ExactSizeIterator<Item = &'a str>,
{
    let total = slugs.len();
    let mut details = Vec::new();
    for (index, slug) in slugs.enumerate() {
        log::info!("[{}/{}] Processing slug: {slug}", index + 1, total);
        if let Some(detail) = client.fetch_detail(slug) {
            details.push(detail);
        }
        if index + 1 < total {
            client.pause();
        }
    }
    details
}
