use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::{images::ImageStore, placeholder, region};
use crate::media::thumbnail::Tier;
use crate::view::grid::{CardView, ListingView};
use crate::Message;

const CARD_WIDTH: f32 = 350.0;
const CARD_IMAGE_HEIGHT: f32 = 262.0;

/// Filter buttons above the project grid
pub fn view<'a>(listing: &'a ListingView, images: &'a ImageStore) -> Element<'a, Message> {
    let filters = listing.filter.buttons().iter().fold(row![].spacing(8), |row, b| {
        let style = if b.active { button::primary } else { button::secondary };
        row.push(
            button(text(b.label.as_str()))
                .on_press(Message::SelectTag(b.tag.clone()))
                .style(style),
        )
    });

    let cards: Vec<Element<'a, Message>> = listing
        .visible_cards()
        .map(|card_view| card(card_view, images))
        .collect();

    let mut content = column![
        text("Projects").size(40),
        region(ListingView::FILTERS_MOUNT, filters),
    ]
    .spacing(24);
    if let Some(summary) = listing.filter_summary() {
        content = content.push(text(summary).size(14));
    }

    content
        .push(region(
            listing.grid.mount,
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ))
        .into()
}

fn card<'a>(card: &'a CardView, images: &'a ImageStore) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match images.get(&card.image.url, Some(Tier::Card)) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
        None => placeholder(CARD_WIDTH, CARD_IMAGE_HEIGHT),
    };

    let body: Column<'a, Message> = column![
        picture,
        text(card.title.as_str()).size(20),
        text(card.tag_line.as_str()).size(14),
    ]
    .spacing(8)
    .width(Length::Fixed(CARD_WIDTH));

    button(container(body))
        .on_press(Message::Navigate(card.link.clone()))
        .style(button::text)
        .padding(0)
        .into()
}
