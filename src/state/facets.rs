use std::collections::BTreeSet;

use super::data::Catalog;

/// Every distinct tag in the catalog, sorted ascending.
///
/// This is the set of filter buttons offered on the listing page.
pub fn derive_tags(catalog: &Catalog) -> Vec<String> {
    catalog
        .projects
        .iter()
        .flat_map(|project| project.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
