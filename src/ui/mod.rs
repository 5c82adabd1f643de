/// iced widgets for each page region
///
/// These functions only draw the view projections from `view` and
/// emit `Message`s; all state changes happen in `Portfolio::update`.

pub mod chrome;
pub mod detail;
pub mod images;
pub mod input;
pub mod lightbox;
pub mod listing;

use iced::widget::{button, container, text};
use iced::{Element, Length};

use crate::route::PageRef;
use crate::view::MountPoint;
use crate::Message;

/// Wrap a page region so it can be addressed by its mount point's name
pub fn region<'a>(mount: MountPoint, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).id(container::Id::new(mount.name())).into()
}

/// Clickable content that navigates to another page
pub fn link<'a>(content: impl Into<Element<'a, Message>>, target: PageRef) -> Element<'a, Message> {
    button(content)
        .on_press(Message::Navigate(target))
        .style(button::text)
        .padding(0)
        .into()
}

/// Box shown while an image is still loading (or failed to load)
pub fn placeholder<'a>(width: f32, height: f32) -> Element<'a, Message> {
    container(text("\u{2026}"))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}
