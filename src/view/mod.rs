/// View projections
///
/// Pure functions that turn the catalog into what each page region shows.
/// The iced layer in `ui` draws these; nothing here touches the toolkit.
///
/// - Listing page cards (grid.rs)
/// - Detail page hero, info, gallery and navigation (detail.rs)
/// - Shared header and footer (chrome.rs)

pub mod chrome;
pub mod detail;
pub mod grid;

use crate::state::data::Catalog;
use crate::state::library;

/// Named regions of a page that views are rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    TagFilters,
    ProjectGrid,
    ProjectHero,
    ProjectInfo,
    Gallery,
    ProjectNav,
    Lightbox,
}

impl MountPoint {
    /// Stable name of the region
    pub fn name(self) -> &'static str {
        match self {
            MountPoint::TagFilters => "tag-filters",
            MountPoint::ProjectGrid => "project-grid",
            MountPoint::ProjectHero => "project-hero",
            MountPoint::ProjectInfo => "project-info",
            MountPoint::Gallery => "gallery",
            MountPoint::ProjectNav => "project-nav",
            MountPoint::Lightbox => "lightbox",
        }
    }
}

/// A page region and the items rendered into it, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Region<T> {
    pub mount: MountPoint,
    pub items: Vec<T>,
}

impl<T> Region<T> {
    pub fn new(mount: MountPoint) -> Self {
        Self {
            mount,
            items: Vec::new(),
        }
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }
}

/// An image reference resolved against the catalog's base URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    /// `{imageBaseUrl}/{slug}/{filename}`
    pub url: String,
    pub slug: String,
    pub filename: String,
}

impl ImageRef {
    pub fn resolve(catalog: &Catalog, slug: &str, filename: &str) -> Self {
        Self {
            url: library::image_url(catalog, slug, filename),
            slug: slug.to_string(),
            filename: filename.to_string(),
        }
    }
}

/// Separator used wherever a tag list is shown as text
pub const TAG_SEPARATOR: &str = " / ";
