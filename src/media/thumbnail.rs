use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{cache_key, locate, read_bytes, version_stamp, write_atomic, Location};
use crate::error::{Error, Result};
use crate::state::library::CatalogSource;
use crate::view::ImageRef;

/// Resized image sizes, matching the width/height the site lays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Listing page card (700x525)
    Card,
    /// Detail page gallery thumbnail (700x525)
    Gallery,
    /// Detail page hero image (1200x800)
    Hero,
}

impl Tier {
    /// Bounding box the image is resized into
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Tier::Card | Tier::Gallery => (700, 525),
            Tier::Hero => (1200, 800),
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            Tier::Card | Tier::Gallery => "700",
            Tier::Hero => "1200",
        }
    }
}

/// Get the thumbnail cache directory
/// Returns ~/.cache/workshop-portfolio/thumbnails on Linux
pub fn get_thumbnail_cache_dir(override_root: Option<&Path>) -> Result<PathBuf> {
    let mut path = match override_root {
        Some(root) => root.to_path_buf(),
        None => {
            let mut path = dirs_next::cache_dir()
                .or_else(dirs_next::home_dir)
                .ok_or(Error::NoCacheDir)?;
            path.push("workshop-portfolio");
            path
        }
    };
    path.push("thumbnails");

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Where the resized copy of an original lives (doesn't generate, just returns the expected path)
pub fn get_thumbnail_path(
    cache_dir: &Path,
    source: &CatalogSource,
    location: &Location,
    version: &str,
    tier: Tier,
) -> PathBuf {
    let key = cache_key(source, location, tier.dir_name(), version);
    cache_dir.join(tier.dir_name()).join(format!("{}.jpg", key))
}

/// Return a cached resized copy of `image`, generating it on first use
pub async fn load_thumbnail(
    image: ImageRef,
    tier: Tier,
    source: CatalogSource,
    cache_dir: PathBuf,
) -> Result<PathBuf> {
    let location = locate(&image.url, &source);
    let version = version_stamp(&location).await?;
    let thumbnail_path = get_thumbnail_path(&cache_dir, &source, &location, &version, tier);
    if tokio::fs::try_exists(&thumbnail_path).await.unwrap_or(false) {
        debug!(url = %image.url, "thumbnail cache hit");
        return Ok(thumbnail_path);
    }

    let bytes = read_bytes(&location).await?;

    // Decoding and resizing are CPU-bound
    let path = tokio::task::spawn_blocking(move || {
        save_thumbnail(&bytes, tier, &thumbnail_path).map(|_| thumbnail_path)
    })
    .await??;

    info!(url = %image.url, path = %path.display(), "generated thumbnail");
    Ok(path)
}

/// Decode, resize to the tier's bounds and save as JPEG
fn save_thumbnail(data: &[u8], tier: Tier, thumbnail_path: &Path) -> Result<()> {
    let img = image::load_from_memory(data)?;
    let thumbnail = resize(&img, tier);

    // JPEG has no alpha channel
    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(thumbnail.to_rgb8()).write_to(&mut encoded, ImageFormat::Jpeg)?;

    write_atomic(thumbnail_path, &encoded.into_inner())
}

/// Fit inside the tier's bounds, keeping the aspect ratio; never upscale
fn resize(img: &DynamicImage, tier: Tier) -> DynamicImage {
    let (width, height) = tier.bounds();
    if img.width() <= width && img.height() <= height {
        return img.clone();
    }
    img.resize(width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use pretty_assertions::assert_eq;

    fn image_ref(slug: &str, filename: &str, url: String) -> ImageRef {
        ImageRef {
            url,
            slug: slug.to_string(),
            filename: filename.to_string(),
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_thumbnail_path_layout() {
        let source = CatalogSource::Path(PathBuf::from("site/projects.json"));
        let location = locate("images/oak-table/main.png", &source);
        let path = get_thumbnail_path(Path::new("/cache"), &source, &location, "1-1", Tier::Hero);

        assert_eq!(path.parent(), Some(Path::new("/cache/1200")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
        assert_eq!(path, get_thumbnail_path(Path::new("/cache"), &source, &location, "1-1", Tier::Hero));
    }

    #[test]
    fn test_same_file_name_in_other_directory_gets_own_entry() {
        let source = CatalogSource::Path(PathBuf::from("site/projects.json"));
        let left = get_thumbnail_path(
            Path::new("/cache"),
            &source,
            &locate("left/1.jpg", &source),
            "1-1",
            Tier::Gallery,
        );
        let right = get_thumbnail_path(
            Path::new("/cache"),
            &source,
            &locate("right/1.jpg", &source),
            "1-1",
            Tier::Gallery,
        );
        assert_ne!(left, right);
    }

    #[test]
    fn test_resize_keeps_aspect_and_never_upscales() {
        let big = DynamicImage::ImageRgba8(RgbaImage::new(1400, 1050));
        let card = resize(&big, Tier::Card);
        assert_eq!((card.width(), card.height()), (700, 525));

        let small = DynamicImage::ImageRgba8(RgbaImage::new(100, 80));
        let hero = resize(&small, Tier::Hero);
        assert_eq!((hero.width(), hero.height()), (100, 80));
    }

    #[tokio::test]
    async fn test_load_thumbnail_generates_then_reuses() {
        let site = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();

        let image_dir = site.path().join("images").join("box");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::write(image_dir.join("main.png"), png_bytes(1400, 700)).unwrap();

        let source = CatalogSource::Path(site.path().join("projects.json"));
        let image = image_ref("box", "main.png", "images/box/main.png".to_string());

        let path = load_thumbnail(image.clone(), Tier::Card, source.clone(), cache.path().to_path_buf())
            .await
            .unwrap();
        let generated = image::open(&path).unwrap();
        assert_eq!((generated.width(), generated.height()), (700, 350));

        let again = load_thumbnail(image, Tier::Card, source, cache.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(again, path);
        // Only the finished file is in the tier directory
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_two_catalogs_with_same_slug_and_file_name() {
        let first_site = tempfile::tempdir().unwrap();
        let second_site = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();

        for (site, (width, height)) in [(&first_site, (1400, 700)), (&second_site, (800, 800))] {
            let image_dir = site.path().join("images").join("box");
            std::fs::create_dir_all(&image_dir).unwrap();
            std::fs::write(image_dir.join("main.png"), png_bytes(width, height)).unwrap();
        }
        let image = image_ref("box", "main.png", "images/box/main.png".to_string());

        let first = load_thumbnail(
            image.clone(),
            Tier::Card,
            CatalogSource::Path(first_site.path().join("projects.json")),
            cache.path().to_path_buf(),
        )
        .await
        .unwrap();
        let second = load_thumbnail(
            image,
            Tier::Card,
            CatalogSource::Path(second_site.path().join("projects.json")),
            cache.path().to_path_buf(),
        )
        .await
        .unwrap();

        assert_ne!(first, second);
        let first = image::open(&first).unwrap();
        let second = image::open(&second).unwrap();
        assert_eq!((first.width(), first.height()), (700, 350));
        assert_eq!((second.width(), second.height()), (525, 525));
    }

    #[tokio::test]
    async fn test_replaced_original_is_regenerated() {
        let site = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let original = site.path().join("main.png");
        std::fs::write(&original, png_bytes(1400, 700)).unwrap();

        let source = CatalogSource::Path(site.path().join("projects.json"));
        let image = image_ref("box", "main.png", "main.png".to_string());

        let before = load_thumbnail(image.clone(), Tier::Card, source.clone(), cache.path().to_path_buf())
            .await
            .unwrap();
        std::fs::write(&original, png_bytes(400, 1200)).unwrap();
        let after = load_thumbnail(image, Tier::Card, source, cache.path().to_path_buf())
            .await
            .unwrap();

        assert_ne!(before, after);
        let regenerated = image::open(&after).unwrap();
        assert_eq!((regenerated.width(), regenerated.height()), (175, 525));
    }

    #[tokio::test]
    async fn test_undecodable_image_fails() {
        let site = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        std::fs::write(site.path().join("broken.jpg"), b"not an image").unwrap();

        let source = CatalogSource::Path(site.path().join("projects.json"));
        let image = image_ref("x", "broken.jpg", "broken.jpg".to_string());

        let result = load_thumbnail(image, Tier::Gallery, source, cache.path().to_path_buf()).await;
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
