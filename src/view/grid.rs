use super::{ImageRef, MountPoint, Region, TAG_SEPARATOR};
use crate::route::PageRef;
use crate::state::data::Catalog;
use crate::state::facets::derive_tags;
use crate::state::filter::{FilterController, TagMembership};

/// A project card on the listing page
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Detail page for this project
    pub link: PageRef,
    /// `{base}/{slug}/{mainImage}`
    pub image: ImageRef,
    pub title: String,
    /// Tags in their original order, joined for display
    pub tag_line: String,
    /// Tags for the filter controller; order does not matter
    pub membership: TagMembership,
}

/// One card per project, in catalog order
pub fn render_grid(catalog: &Catalog) -> Vec<CardView> {
    catalog
        .projects
        .iter()
        .map(|project| CardView {
            link: PageRef::project(&project.slug),
            image: ImageRef::resolve(catalog, &project.slug, &project.main_image),
            title: project.title.clone(),
            tag_line: project.tags.join(TAG_SEPARATOR),
            membership: project.tags.iter().cloned().collect(),
        })
        .collect()
}

/// Render the cards into the `project-grid` region
pub fn render_into(region: &mut Region<CardView>, catalog: &Catalog) {
    debug_assert_eq!(region.mount, MountPoint::ProjectGrid);
    for card in render_grid(catalog) {
        region.append(card);
    }
}

/// The listing page: filter buttons over the project grid
#[derive(Debug, Clone)]
pub struct ListingView {
    pub grid: Region<CardView>,
    /// Owns the `tag-filters` buttons and per-card visibility
    pub filter: FilterController,
}

impl ListingView {
    /// Region holding the filter buttons
    pub const FILTERS_MOUNT: MountPoint = MountPoint::TagFilters;

    pub fn render(catalog: &Catalog) -> Self {
        let mut grid = Region::new(MountPoint::ProjectGrid);
        render_into(&mut grid, catalog);

        let tags = derive_tags(catalog);
        let memberships = grid.items.iter().map(|card| card.membership.clone()).collect();

        Self {
            filter: FilterController::new(&tags, memberships),
            grid,
        }
    }

    /// Cards that pass the current filter, in grid order
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardView> {
        self.grid
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| self.filter.is_visible(*i))
            .map(|(_, card)| card)
    }

    /// "3 projects tagged walnut" while a tag is selected
    pub fn filter_summary(&self) -> Option<String> {
        let tag = self.filter.state().active_tag.as_deref()?;
        let count = self.filter.visible_count();
        let noun = if count == 1 { "project" } else { "projects" };
        Some(format!("{} {} tagged {}", count, noun, tag))
    }
}
