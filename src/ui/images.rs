use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use iced::widget::image::Handle;
use iced::Task;
use tracing::warn;

use crate::media::{self, preview, thumbnail, thumbnail::Tier};
use crate::state::library::CatalogSource;
use crate::view::ImageRef;
use crate::Message;

/// Identifies one loaded image: the URL plus the size it was loaded at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub url: String,
    /// `None` is the full-size lightbox image
    pub tier: Option<Tier>,
}

/// Image handles for the current session, filled in as background loads finish
#[derive(Debug)]
pub struct ImageStore {
    handles: HashMap<ImageKey, Handle>,
    requested: HashSet<ImageKey>,
    thumbnail_dir: PathBuf,
    preview_dir: PathBuf,
}

impl ImageStore {
    /// Start a session with empty caches
    pub fn new(thumbnail_dir: PathBuf, preview_dir: PathBuf) -> Self {
        let store = Self {
            handles: HashMap::new(),
            requested: HashSet::new(),
            thumbnail_dir,
            preview_dir,
        };
        store.clear_disk();
        store
    }

    pub fn get(&self, url: &str, tier: Option<Tier>) -> Option<&Handle> {
        self.handles.get(&ImageKey {
            url: url.to_string(),
            tier,
        })
    }

    /// Start loading `image` unless it is already loaded or in flight
    pub fn request(&mut self, image: &ImageRef, tier: Option<Tier>, source: &CatalogSource) -> Task<Message> {
        let key = ImageKey {
            url: image.url.clone(),
            tier,
        };
        if !self.requested.insert(key.clone()) {
            return Task::none();
        }

        let image = image.clone();
        let source = source.clone();
        match tier {
            Some(tier) => Task::perform(
                thumbnail::load_thumbnail(image, tier, source, self.thumbnail_dir.clone()),
                move |result| Message::ImageLoaded(key.clone(), result.map_err(|e| e.to_string())),
            ),
            None => Task::perform(
                preview::load_full_preview(image, source, self.preview_dir.clone()),
                move |result| Message::ImageLoaded(key.clone(), result.map_err(|e| e.to_string())),
            ),
        }
    }

    /// Record a finished load; failures keep the placeholder
    pub fn finish(&mut self, key: ImageKey, result: Result<PathBuf, String>) {
        match result {
            Ok(path) => {
                self.handles.insert(key, Handle::from_path(path));
            }
            Err(e) => warn!(url = %key.url, error = %e, "image unavailable"),
        }
    }

    /// Forget everything, e.g. after switching to another projects document
    pub fn clear(&mut self) {
        self.handles.clear();
        self.requested.clear();
        self.clear_disk();
    }

    fn clear_disk(&self) {
        for dir in [&self.thumbnail_dir, &self.preview_dir] {
            if let Err(e) = media::clear_cache_dir(dir) {
                warn!(dir = %dir.display(), error = %e, "could not clear image cache");
            }
        }
    }
}
