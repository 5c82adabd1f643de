use iced::widget::{column, container, opaque, scrollable, stack, text};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

mod config;
mod error;
mod logging;
mod media;
mod route;
mod state;
mod ui;
mod view;

use config::Config;
use route::PageRef;
use state::data::Catalog;
use state::library::{self, CatalogSource};
use state::lightbox::LightboxInput;
use ui::images::{ImageKey, ImageStore};
use view::detail::{self as detail_view, DetailPage, NotFoundView};
use view::grid::ListingView;

/// What the current page shows
#[derive(Debug)]
enum PageView {
    /// Waiting for the projects document
    Loading,
    Listing(ListingView),
    Detail(DetailPage),
    About,
    /// The listing could not be built because the document failed to load
    Unavailable,
}

/// Main application state
struct Portfolio {
    config: Config,
    /// Page being shown
    page: PageRef,
    view: PageView,
    /// Bumped on every page load; results for older loads are dropped
    generation: u64,
    images: ImageStore,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Follow a link to another page
    Navigate(PageRef),
    /// The projects document for page load `generation` finished loading
    CatalogLoaded(u64, Result<Arc<Catalog>, String>),
    /// User clicked a filter button (`None` is "All")
    SelectTag(Option<String>),
    /// Pointer or keyboard input for the lightbox
    Lightbox(LightboxInput),
    /// Background image load completed
    ImageLoaded(ImageKey, Result<PathBuf, String>),
    /// User clicked "Open catalog…"
    OpenCatalog,
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let cache_root = config.cache_dir.as_deref();
        let fallback = std::env::temp_dir().join("workshop-portfolio");
        let thumbnail_dir = media::thumbnail::get_thumbnail_cache_dir(cache_root)
            .unwrap_or_else(|e| {
                warn!(error = %e, "using temporary thumbnail cache");
                fallback.join("thumbnails")
            });
        let preview_dir = media::preview::get_preview_cache_dir(cache_root).unwrap_or_else(|e| {
            warn!(error = %e, "using temporary preview cache");
            fallback.join("previews")
        });

        info!(source = %config.source, "portfolio viewer initialized");

        let start = config.start_page.clone();
        let mut portfolio = Portfolio {
            config,
            page: start.clone(),
            view: PageView::Loading,
            generation: 0,
            images: ImageStore::new(thumbnail_dir, preview_dir),
        };
        let task = portfolio.navigate(start);
        (portfolio, task)
    }

    /// Start a fresh page session for `page`
    fn navigate(&mut self, page: PageRef) -> Task<Message> {
        info!(page = %page, "navigating");
        self.generation += 1;
        self.page = page;

        match &self.page {
            PageRef::About => {
                self.view = PageView::About;
                Task::none()
            }
            // No slug means nothing to look up
            PageRef::Project { slug: None } => {
                self.view = PageView::Detail(DetailPage::NotFound(NotFoundView::default()));
                Task::none()
            }
            PageRef::Home | PageRef::Projects | PageRef::Project { .. } => {
                self.view = PageView::Loading;
                let generation = self.generation;
                Task::perform(library::load(self.config.source.clone()), move |result| {
                    Message::CatalogLoaded(generation, result.map(Arc::new).map_err(|e| e.to_string()))
                })
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => self.navigate(page),
            Message::CatalogLoaded(generation, result) => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping stale catalog load");
                    return Task::none();
                }
                match result {
                    Ok(catalog) => self.render(&catalog),
                    Err(e) => {
                        warn!(error = %e, "projects document unavailable");
                        self.view = match self.page {
                            PageRef::Home | PageRef::Projects => PageView::Unavailable,
                            _ => PageView::Detail(DetailPage::NotFound(NotFoundView::default())),
                        };
                        Task::none()
                    }
                }
            }
            Message::SelectTag(tag) => {
                if let PageView::Listing(listing) = &mut self.view {
                    if let Err(e) = listing.filter.select_tag(tag.as_deref()) {
                        warn!(error = %e, "filter not applied");
                    }
                }
                Task::none()
            }
            Message::Lightbox(input) => self.lightbox_input(input),
            Message::ImageLoaded(key, result) => {
                self.images.finish(key, result);
                Task::none()
            }
            Message::OpenCatalog => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Open Projects Document")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                match file {
                    Some(path) => {
                        info!(path = %path.display(), "switching projects document");
                        self.config.source = CatalogSource::Path(path);
                        self.images.clear();
                        self.navigate(PageRef::Projects)
                    }
                    None => Task::none(),
                }
            }
        }
    }

    /// Build the page from a freshly loaded catalog and queue its images
    fn render(&mut self, catalog: &Catalog) -> Task<Message> {
        let source = self.config.source.clone();
        let mut tasks = Vec::new();

        match &self.page {
            PageRef::Project { slug } => {
                let page = detail_view::render_detail(
                    catalog,
                    slug.as_deref(),
                    &self.config.identity.site_name,
                );
                if let DetailPage::Found(detail) = &page {
                    tasks.push(self.images.request(
                        &detail.hero.image,
                        Some(media::thumbnail::Tier::Hero),
                        &source,
                    ));
                    for thumb in detail.gallery.iter().flat_map(|g| &g.thumbnails) {
                        tasks.push(self.images.request(
                            &thumb.image,
                            Some(media::thumbnail::Tier::Gallery),
                            &source,
                        ));
                    }
                }
                self.view = PageView::Detail(page);
            }
            _ => {
                let listing = ListingView::render(catalog);
                for card in &listing.grid.items {
                    tasks.push(self.images.request(
                        &card.image,
                        Some(media::thumbnail::Tier::Card),
                        &source,
                    ));
                }
                self.view = PageView::Listing(listing);
            }
        }

        Task::batch(tasks)
    }

    /// Feed input to the detail page's lightbox and fetch the image it now shows
    fn lightbox_input(&mut self, input: LightboxInput) -> Task<Message> {
        let PageView::Detail(DetailPage::Found(detail)) = &mut self.view else {
            return Task::none();
        };
        let Some(lightbox) = detail.lightbox.as_mut() else {
            return Task::none();
        };

        lightbox.handle(input);

        let state::lightbox::LightboxState::Open(index) = lightbox.state() else {
            return Task::none();
        };
        match detail.gallery.as_ref().and_then(|g| g.thumbnails.get(index)) {
            Some(thumb) => {
                let image = thumb.image.clone();
                self.images.request(&image, None, &self.config.source)
            }
            None => Task::none(),
        }
    }

    /// Window title for the current page
    fn title(&self) -> String {
        let site = &self.config.identity.site_name;
        match (&self.page, &self.view) {
            (_, PageView::Detail(DetailPage::Found(detail))) => detail.page_title.clone(),
            (PageRef::About, _) => format!("About \u{2014} {}", site),
            (PageRef::Projects, _) => format!("Projects \u{2014} {}", site),
            _ => site.clone(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let identity = &self.config.identity;

        let body: Element<'_, Message> = match &self.view {
            PageView::Loading => text("Loading\u{2026}").into(),
            PageView::Listing(listing) => ui::listing::view(listing, &self.images),
            PageView::Detail(page) => ui::detail::view(page, &self.images),
            PageView::About => column![
                text(identity.owner.as_str()).size(40),
                text(identity.tagline.as_str()),
            ]
            .spacing(16)
            .into(),
            PageView::Unavailable => text("Projects could not be loaded.").into(),
        };

        let header = view::chrome::header(identity, &self.page);
        let footer = view::chrome::footer(identity);

        let page = column![
            ui::chrome::header(&header),
            scrollable(
                column![container(body).padding([24, 32]), ui::chrome::footer(&footer)]
                    .width(Length::Fill)
            )
            .height(Length::Fill),
        ];

        let frame = match &self.view {
            PageView::Detail(DetailPage::Found(detail)) => {
                detail
                    .lightbox
                    .as_ref()
                    .filter(|lightbox| lightbox.scroll_locked())
                    .and_then(|lightbox| lightbox.frame())
            }
            _ => None,
        };

        match frame {
            // The opaque overlay swallows wheel events while scrolling is locked
            Some(frame) => stack![page, opaque(ui::lightbox::overlay(frame, &self.images))].into(),
            None => page.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(ui::input::on_key_press)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    logging::init();
    let config = Config::from_env();

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(config))
}
