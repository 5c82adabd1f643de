/// Full-size images for the lightbox
/// Fetches the original file once and keeps it in the preview cache without resizing
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{cache_key, locate, read_bytes, write_atomic, Location};
use crate::error::{Error, Result};
use crate::state::library::CatalogSource;
use crate::view::ImageRef;

/// Return a path to the full-size image, downloading remote originals into the cache
pub async fn load_full_preview(
    image: ImageRef,
    source: CatalogSource,
    preview_cache_dir: PathBuf,
) -> Result<PathBuf> {
    let location = locate(&image.url, &source);

    // Local originals are already on disk
    if let Location::Local(path) = &location {
        tokio::fs::metadata(path).await?;
        return Ok(path.clone());
    }

    let preview_path = get_preview_path(&preview_cache_dir, &source, &location, &image);
    if tokio::fs::try_exists(&preview_path).await.unwrap_or(false) {
        return Ok(preview_path);
    }

    let bytes = read_bytes(&location).await?;
    let size_kb = bytes.len() / 1024;
    let path = tokio::task::spawn_blocking(move || {
        write_atomic(&preview_path, &bytes).map(|_| preview_path)
    })
    .await??;

    info!(url = %image.url, size_kb, "cached full preview");
    Ok(path)
}

/// Cached location of a full-size remote image; keeps the original's extension
pub fn get_preview_path(
    preview_cache_dir: &Path,
    source: &CatalogSource,
    location: &Location,
    image: &ImageRef,
) -> PathBuf {
    let key = cache_key(source, location, "full", "");
    match Path::new(&image.filename).extension().and_then(|e| e.to_str()) {
        Some(ext) => preview_cache_dir.join(format!("{}.{}", key, ext)),
        None => preview_cache_dir.join(key),
    }
}

/// Get the cache directory for full-size previews
pub fn get_preview_cache_dir(override_root: Option<&Path>) -> Result<PathBuf> {
    let mut path = match override_root {
        Some(root) => root.to_path_buf(),
        None => {
            let mut path = dirs::cache_dir()
                .or_else(dirs::home_dir)
                .ok_or(Error::NoCacheDir)?;
            path.push("workshop-portfolio");
            path
        }
    };
    path.push("previews");

    // Create directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }

    Ok(path)
}
