/// Image loading module
///
/// This module handles:
/// - Locating images (remote URL or local file next to the projects document)
/// - Generating resized thumbnails for cards, gallery and hero (thumbnail.rs)
/// - Fetching full-size lightbox images (preview.rs)
/// - Caching both to disk for the current session

pub mod preview;
pub mod thumbnail;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::state::library::{self, CatalogSource};

/// Where an image's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(String),
    Local(PathBuf),
}

/// Resolve an image URL against the projects document it came from.
///
/// Relative base URLs are relative to the document, just as a page
/// resolves them against its own address.
pub fn locate(url: &str, source: &CatalogSource) -> Location {
    if library::is_remote(url) {
        return Location::Remote(url.to_string());
    }

    match source {
        CatalogSource::Url(document) => reqwest::Url::parse(document)
            .and_then(|base| base.join(url))
            .map(|joined| Location::Remote(joined.to_string()))
            .unwrap_or_else(|_| Location::Local(PathBuf::from(url))),
        CatalogSource::Path(document) => {
            let path = Path::new(url);
            if path.is_absolute() {
                Location::Local(path.to_path_buf())
            } else {
                let dir = document.parent().unwrap_or_else(|| Path::new(""));
                Location::Local(dir.join(path))
            }
        }
    }
}

/// Read the original image bytes
pub async fn read_bytes(location: &Location) -> Result<Vec<u8>> {
    match location {
        Location::Remote(url) => library::fetch_bytes(url).await,
        Location::Local(path) => Ok(tokio::fs::read(path).await?),
    }
}

/// Stamp that changes whenever a local original is replaced.
///
/// Remote originals have no stamp; their cache entries live for one session.
pub async fn version_stamp(location: &Location) -> Result<String> {
    match location {
        Location::Remote(_) => Ok(String::new()),
        Location::Local(path) => {
            let metadata = tokio::fs::metadata(path).await?;
            let modified = metadata
                .modified()
                .ok()
                .and_then(|m| m.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_nanos())
                .unwrap_or_default();
            Ok(format!("{}-{}", metadata.len(), modified))
        }
    }
}

/// Cache file name for one variant of an image.
///
/// Hashes the projects document, the resolved original and its version, so
/// two catalogs (or two directories) never share an entry.
pub fn cache_key(source: &CatalogSource, location: &Location, variant: &str, version: &str) -> String {
    let original = match location {
        Location::Remote(url) => url.clone(),
        Location::Local(path) => path.to_string_lossy().into_owned(),
    };

    let mut hasher = Sha256::new();
    for part in [source.to_string().as_str(), original.as_str(), variant, version] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}

/// Write `bytes` to `path` through a temp file in the same directory, so
/// readers never see a partial file
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Empty a cache directory; entries only live for one session
pub fn clear_cache_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absolute_urls_stay_remote() {
        let source = CatalogSource::Path(PathBuf::from("site/projects.json"));
        assert_eq!(
            locate("https://cdn.example.com/a/main.jpg", &source),
            Location::Remote("https://cdn.example.com/a/main.jpg".to_string())
        );
    }

    #[test]
    fn test_relative_to_remote_document() {
        let source = CatalogSource::Url("https://example.com/site/projects.json".to_string());
        assert_eq!(
            locate("images/a/main.jpg", &source),
            Location::Remote("https://example.com/site/images/a/main.jpg".to_string())
        );
    }

    #[test]
    fn test_relative_to_local_document() {
        let source = CatalogSource::Path(PathBuf::from("site/projects.json"));
        assert_eq!(
            locate("images/a/main.jpg", &source),
            Location::Local(PathBuf::from("site/images/a/main.jpg"))
        );
    }

    #[test]
    fn test_cache_key_separates_catalogs_and_directories() {
        let site_a = CatalogSource::Path(PathBuf::from("a/projects.json"));
        let site_b = CatalogSource::Path(PathBuf::from("b/projects.json"));
        let left = locate("left/1.jpg", &site_a);
        let right = locate("right/1.jpg", &site_a);

        let key = cache_key(&site_a, &left, "700", "10-1");
        assert_eq!(key, cache_key(&site_a, &left, "700", "10-1"));
        assert_ne!(key, cache_key(&site_a, &right, "700", "10-1"));
        assert_ne!(key, cache_key(&site_b, &left, "700", "10-1"));
        assert_ne!(key, cache_key(&site_a, &left, "1200", "10-1"));
        assert_ne!(key, cache_key(&site_a, &left, "700", "11-2"));
        assert_eq!(key.len(), 64);
    }

    #[test]
    fn test_write_atomic_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("entry.jpg");

        write_atomic(&path, b"first version").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        // Only the final file is left behind
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_clear_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("thumbnails");
        std::fs::create_dir_all(cache.join("700")).unwrap();
        std::fs::write(cache.join("700").join("old.jpg"), b"x").unwrap();

        clear_cache_dir(&cache).unwrap();

        assert!(cache.is_dir());
        assert_eq!(std::fs::read_dir(&cache).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_version_stamp_tracks_replacement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.jpg");
        std::fs::write(&path, b"short").unwrap();
        let location = Location::Local(path.clone());

        let before = version_stamp(&location).await.unwrap();
        std::fs::write(&path, b"a longer replacement").unwrap();
        let after = version_stamp(&location).await.unwrap();

        assert_ne!(before, after);
        assert_eq!(version_stamp(&Location::Remote("https://x/1.jpg".to_string())).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_read_local_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let bytes = read_bytes(&Location::Local(path)).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}
