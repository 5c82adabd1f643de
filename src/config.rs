/// Command line and environment configuration

use std::path::PathBuf;

use clap::Parser;

use crate::route::PageRef;
use crate::state::library::CatalogSource;

#[derive(Parser, Debug)]
#[command(name = "workshop-portfolio")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Projects document: a local path or an http(s) URL
    #[arg(long, env = "PORTFOLIO_DATA", default_value = "projects.json")]
    pub data: String,

    /// Page to open first, e.g. "project.html?slug=oak-coffee-table"
    #[arg(long, env = "PORTFOLIO_OPEN", default_value = "index.html")]
    pub open: String,

    /// Name shown as the wordmark and in the footer
    #[arg(long, env = "PORTFOLIO_OWNER", default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Suffix of every detail page title
    #[arg(long, env = "PORTFOLIO_SITE_NAME", default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// One-line description shown in the footer and on the about page
    #[arg(long, env = "PORTFOLIO_TAGLINE", default_value = DEFAULT_TAGLINE)]
    pub tagline: String,

    /// Contact address shown in the footer
    #[arg(long, env = "PORTFOLIO_EMAIL", default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Where resized images are cached (default: the user cache directory)
    #[arg(long, env = "PORTFOLIO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

const DEFAULT_OWNER: &str = "Matt Bedford";
const DEFAULT_SITE_NAME: &str = "Matt Bedford Woodwork";
const DEFAULT_TAGLINE: &str = "Handmade woodwork from a small workshop in the UK.";
const DEFAULT_EMAIL: &str = "matt@mattbedford.work";

/// Who the portfolio belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub owner: String,
    pub site_name: String,
    pub tagline: String,
    pub email: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CatalogSource,
    pub start_page: PageRef,
    pub identity: SiteIdentity,
    pub cache_dir: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            source: CatalogSource::parse(&args.data),
            start_page: PageRef::parse(&args.open),
            identity: SiteIdentity {
                owner: args.owner,
                site_name: args.site_name,
                tagline: args.tagline,
                email: args.email,
            },
            cache_dir: args.cache_dir,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Args::parse().into()
    }
}
