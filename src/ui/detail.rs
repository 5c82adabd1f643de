use iced::widget::{column, horizontal_space, image, mouse_area, row, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{images::ImageStore, link, placeholder, region};
use crate::media::thumbnail::Tier;
use crate::route::PageRef;
use crate::state::lightbox::LightboxInput;
use crate::view::detail::{
    DetailPage, DetailView, GalleryView, HeroView, InfoView, NavView, NotFoundView, PreviousSlot,
};
use crate::Message;

const HERO_WIDTH: f32 = 1200.0;
const HERO_HEIGHT: f32 = 800.0;
const THUMB_WIDTH: f32 = 350.0;
const THUMB_HEIGHT: f32 = 262.0;

pub fn view<'a>(page: &'a DetailPage, images: &'a ImageStore) -> Element<'a, Message> {
    match page {
        DetailPage::Found(detail) => found(detail, images),
        DetailPage::NotFound(not_found) => self::not_found(not_found),
    }
}

/// "Project not found." with a way back to the listing
pub fn not_found<'a>(view: &NotFoundView) -> Element<'a, Message> {
    region(
        view.mount,
        row![
            text(view.message),
            link(text(view.back_label), view.back.clone()),
        ]
        .spacing(8),
    )
}

fn found<'a>(detail: &'a DetailView, images: &'a ImageStore) -> Element<'a, Message> {
    let hero: Element<'a, Message> = match images.get(&detail.hero.image.url, Some(Tier::Hero)) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .into(),
        None => placeholder(HERO_WIDTH, HERO_HEIGHT),
    };

    let info = column![
        text(detail.info.title.as_str()).size(40),
        text(detail.info.meta_line()).size(14),
        text(detail.info.description.as_str()),
    ]
    .spacing(12);

    let mut content = column![region(HeroView::MOUNT, hero), region(InfoView::MOUNT, info)].spacing(32);

    if let Some(gallery) = &detail.gallery {
        let thumbnails: Vec<Element<'a, Message>> = gallery
            .thumbnails
            .iter()
            .map(|thumb| {
                let picture: Element<'a, Message> =
                    match images.get(&thumb.image.url, Some(Tier::Gallery)) {
                        Some(handle) => image(handle.clone())
                            .width(Length::Fixed(THUMB_WIDTH))
                            .height(Length::Fixed(THUMB_HEIGHT))
                            .into(),
                        None => placeholder(THUMB_WIDTH, THUMB_HEIGHT),
                    };
                mouse_area(picture)
                    .on_press(Message::Lightbox(LightboxInput::ThumbnailClicked(thumb.index)))
                    .into()
            })
            .collect();

        content = content.push(region(
            GalleryView::MOUNT,
            column![
                text("Gallery").size(28),
                Wrap::with_elements(thumbnails).spacing(16.0).line_spacing(16.0),
            ]
            .spacing(16),
        ));
    }

    content.push(nav(detail)).into()
}

fn nav<'a>(detail: &'a DetailView) -> Element<'a, Message> {
    let nav_link = |arrow: &'static str, target: &PageRef, title: &'a str| {
        link(
            column![text(arrow).size(14), text(title).size(18)].spacing(4),
            target.clone(),
        )
    };

    let previous: Element<'a, Message> = match &detail.nav.previous {
        PreviousSlot::Link(prev) => nav_link("\u{2190} Previous", &prev.target, prev.title.as_str()),
        PreviousSlot::Placeholder => horizontal_space().width(Length::Shrink).into(),
    };

    let mut bar = row![previous, horizontal_space()];
    if let Some(next) = &detail.nav.next {
        bar = bar.push(nav_link("Next \u{2192}", &next.target, next.title.as_str()));
    }
    region(NavView::MOUNT, bar.width(Length::Fill))
}
