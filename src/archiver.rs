use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Output file of a `--slug-detail` run.
pub const SLUG_DETAIL_FILE: &str = "slugdetailco.json";

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Writes a document as pretty-printed UTF-8 JSON, creating or overwriting
/// the file whole. Non-ASCII characters are kept unescaped.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn collection_path(dir: &Path, product_type: &str) -> PathBuf {
    dir.join(format!("{product_type}_all_products.json"))
}

pub fn detailed_path(dir: &Path, product_type: &str) -> PathBuf {
    dir.join(format!("{product_type}_all_detailed.json"))
}

/// Chunk files are numbered from 1.
pub fn chunk_path(dir: &Path, product_type: &str, index: usize) -> PathBuf {
    dir.join(format!("{product_type}_chunk_{index}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_json_with_unescaped_non_ascii() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        save_json(&json!([{ "name": "Cốc sứ trắng", "slug": "coc-su" }]), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Cốc sứ trắng"));
        assert!(!written.contains("\\u"));
        // two-space indentation, one field per line
        assert!(written.contains("\n    \"name\""));
    }

    #[test]
    fn overwrites_existing_file_whole() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        save_json(&json!({ "old": true, "padding": "xxxxxxxxxxxxxxxx" }), &path).unwrap();
        save_json(&json!({ "new": true }), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("new"));
        assert!(!written.contains("old"));
    }

    #[test]
    fn ensure_output_dir_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/products_data");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // idempotent when the directory already exists
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn output_paths_follow_the_naming_scheme() {
        let dir = Path::new("products_data");
        assert_eq!(
            collection_path(dir, "mugs"),
            dir.join("mugs_all_products.json")
        );
        assert_eq!(
            detailed_path(dir, "mugs"),
            dir.join("mugs_all_detailed.json")
        );
        assert_eq!(chunk_path(dir, "mugs", 3), dir.join("mugs_chunk_3.json"));
    }
}
