/// State management module
///
/// This module handles all page state, including:
/// - The projects document and its records (data.rs)
/// - Loading and querying the catalog (library.rs)
/// - Deriving the tag facets (facets.rs)
/// - The listing page tag filter (filter.rs)
/// - The detail page lightbox state machine (lightbox.rs)

pub mod library;
pub mod data;
pub mod facets;
pub mod filter;
pub mod lightbox;
