use chrono::NaiveDate;
use tracing::debug;

use super::{ImageRef, MountPoint, TAG_SEPARATOR};
use crate::route::PageRef;
use crate::state::data::Catalog;
use crate::state::library;
use crate::state::lightbox::Lightbox;

pub const NOT_FOUND_MESSAGE: &str = "Project not found.";
pub const BACK_TO_PROJECTS: &str = "Back to projects";

/// Everything the detail page shows for one project
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Window title: "{title} — {site name}"
    pub page_title: String,
    pub hero: HeroView,
    pub info: InfoView,
    /// Absent when the project has no gallery images
    pub gallery: Option<GalleryView>,
    pub nav: NavView,
    /// Built over the gallery URLs; absent with the gallery
    pub lightbox: Option<Lightbox>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub image: ImageRef,
    pub alt: String,
}

impl HeroView {
    pub const MOUNT: MountPoint = MountPoint::ProjectHero;
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoView {
    pub title: String,
    /// e.g. "August 2024"
    pub date: String,
    pub tag_line: String,
    /// Trusted content, shown verbatim
    pub description: String,
}

impl InfoView {
    pub const MOUNT: MountPoint = MountPoint::ProjectInfo;

    /// "{date} · {tags}"
    pub fn meta_line(&self) -> String {
        format!("{} \u{b7} {}", self.date, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub thumbnails: Vec<Thumbnail>,
}

impl GalleryView {
    pub const MOUNT: MountPoint = MountPoint::Gallery;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Zero-based position in the gallery
    pub index: usize,
    pub image: ImageRef,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: PageRef,
    pub title: String,
}

/// Left-hand side of the prev/next bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousSlot {
    Link(NavLink),
    /// Keeps "next" on the right when there is no previous project
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub previous: PreviousSlot,
    pub next: Option<NavLink>,
}

impl NavView {
    pub const MOUNT: MountPoint = MountPoint::ProjectNav;
}

/// Shown in `project-info` instead of the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub mount: MountPoint,
    pub message: &'static str,
    pub back_label: &'static str,
    pub back: PageRef,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            mount: InfoView::MOUNT,
            message: NOT_FOUND_MESSAGE,
            back_label: BACK_TO_PROJECTS,
            back: PageRef::Projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPage {
    Found(Box<DetailView>),
    NotFound(NotFoundView),
}

/// Format a project date as "{Month name} {Year}" (en-GB style)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Render the detail page for `slug`.
///
/// A missing slug or one that matches nothing renders only the
/// not-found view.
pub fn render_detail(catalog: &Catalog, slug: Option<&str>, site_name: &str) -> DetailPage {
    let Some((project, position)) = slug.and_then(|slug| library::find_by_slug(catalog, slug))
    else {
        debug!(?slug, "rendering not-found view");
        return DetailPage::NotFound(NotFoundView::default());
    };

    let hero = HeroView {
        image: ImageRef::resolve(catalog, &project.slug, &project.main_image),
        alt: project.title.clone(),
    };

    let info = InfoView {
        title: project.title.clone(),
        date: format_date(project.date),
        tag_line: project.tags.join(TAG_SEPARATOR),
        description: project.description.clone(),
    };

    let (gallery, lightbox) = if project.gallery.is_empty() {
        (None, None)
    } else {
        let thumbnails: Vec<Thumbnail> = project
            .gallery
            .iter()
            .enumerate()
            .map(|(index, filename)| Thumbnail {
                index,
                image: ImageRef::resolve(catalog, &project.slug, filename),
                alt: format!("{} \u{2014} photo {}", project.title, index + 1),
            })
            .collect();
        let urls = thumbnails.iter().map(|t| t.image.url.clone()).collect();

        (Some(GalleryView { thumbnails }), Some(Lightbox::new(urls)))
    };

    let (previous, next) = library::neighbors(catalog, position);
    let link = |p: &crate::state::data::ProjectRecord| NavLink {
        target: PageRef::project(&p.slug),
        title: p.title.clone(),
    };
    let nav = NavView {
        previous: previous.map_or(PreviousSlot::Placeholder, |p| PreviousSlot::Link(link(p))),
        next: next.map(link),
    };

    DetailPage::Found(Box::new(DetailView {
        page_title: format!("{} \u{2014} {}", project.title, site_name),
        hero,
        info,
        gallery,
        nav,
        lightbox,
    }))
}
