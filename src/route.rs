/// Page addressing
///
/// Views are addressed the way the published site addresses its pages:
/// `index.html`, `projects.html`, `about.html` and `project.html?slug=<slug>`.

use std::fmt;

/// A page the viewer can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRef {
    /// Site root; shows the listing without highlighting any nav item
    Home,
    Projects,
    About,
    /// Detail page; `slug` is `None` when the query parameter is missing
    Project { slug: Option<String> },
}

impl PageRef {
    pub fn project(slug: &str) -> Self {
        PageRef::Project {
            slug: Some(slug.to_string()),
        }
    }

    /// Parse an address such as `project.html?slug=oak-coffee-table`.
    ///
    /// Unknown paths fall back to the site root.
    pub fn parse(address: &str) -> Self {
        let (path, query) = match address.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (address, None),
        };
        let file = path.rsplit('/').next().unwrap_or_default();

        match file {
            "project.html" => PageRef::Project {
                slug: query.and_then(|q| query_param(q, "slug")),
            },
            "projects.html" => PageRef::Projects,
            "about.html" => PageRef::About,
            _ => PageRef::Home,
        }
    }

    pub fn href(&self) -> String {
        match self {
            PageRef::Home => "index.html".to_string(),
            PageRef::Projects => "projects.html".to_string(),
            PageRef::About => "about.html".to_string(),
            PageRef::Project { slug: Some(slug) } => {
                format!("project.html?slug={}", urlencoding::encode(slug))
            }
            PageRef::Project { slug: None } => "project.html".to_string(),
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// First value of `name` in a query string, percent-decoded.
///
/// Empty values count as absent.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .filter(|value| !value.is_empty())
}
