use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use super::data::{Catalog, ProjectRecord};
use crate::error::{Error, Result};

/// Where the projects document lives.
///
/// Local paths are read with `tokio::fs`, `http(s)` URLs are fetched
/// with `reqwest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a user-supplied location (CLI flag, env var, file picker)
    pub fn parse(location: &str) -> Self {
        if is_remote(location) {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// True for locations that must be fetched over the network
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load and validate the projects document.
///
/// Single attempt: any I/O, HTTP or parse failure is returned to the
/// caller, which decides what the user sees.
pub async fn load(source: CatalogSource) -> Result<Catalog> {
    info!(%source, "loading projects document");

    let bytes = match &source {
        CatalogSource::Path(path) => tokio::fs::read(path).await?,
        CatalogSource::Url(url) => fetch_bytes(url).await?,
    };

    let catalog = parse(&bytes)?;
    info!(
        projects = catalog.projects.len(),
        base = %catalog.image_base_url,
        "projects document loaded"
    );
    Ok(catalog)
}

/// GET a URL and return the body, treating non-2xx answers as errors
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

/// Parse a projects document and check the slug uniqueness invariant
pub fn parse(bytes: &[u8]) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::new();
    for project in &catalog.projects {
        if !seen.insert(project.slug.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate slug {:?}",
                project.slug
            )));
        }
    }

    Ok(catalog)
}

/// Find a project and its position in the catalog
pub fn find_by_slug<'a>(catalog: &'a Catalog, slug: &str) -> Option<(&'a ProjectRecord, usize)> {
    let found = catalog
        .projects
        .iter()
        .enumerate()
        .find(|(_, project)| project.slug == slug)
        .map(|(position, project)| (project, position));

    if found.is_none() {
        debug!(slug, "no project with this slug");
    }
    found
}

/// The projects either side of `position`.
///
/// Previous is absent at the first position, next at the last.
pub fn neighbors(
    catalog: &Catalog,
    position: usize,
) -> (Option<&ProjectRecord>, Option<&ProjectRecord>) {
    if position >= catalog.projects.len() {
        return (None, None);
    }

    let previous = position
        .checked_sub(1)
        .and_then(|p| catalog.projects.get(p));
    let next = catalog.projects.get(position + 1);

    (previous, next)
}

/// Resolve `{imageBaseUrl}/{slug}/{filename}`
pub fn image_url(catalog: &Catalog, slug: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}",
        catalog.image_base_url.trim_end_matches('/'),
        slug,
        filename
    )
}
