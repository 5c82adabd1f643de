use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::link;
use crate::view::chrome::{FooterView, HeaderView};
use crate::Message;

pub fn header<'a>(header: &HeaderView) -> Element<'a, Message> {
    let mut nav = row![].spacing(24).align_y(Alignment::Center);
    for item in &header.items {
        let style = if item.active { button::primary } else { button::text };
        nav = nav.push(
            button(text(item.label))
                .on_press(Message::Navigate(item.target.clone()))
                .style(style),
        );
    }

    let open = button(text("Open catalog\u{2026}").size(14))
        .on_press(Message::OpenCatalog)
        .style(button::secondary);

    container(
        row![
            link(text(header.wordmark.clone()).size(22), header.home.clone()),
            horizontal_space(),
            nav,
            open,
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .padding([16, 32])
    .width(Length::Fill)
    .into()
}

pub fn footer<'a>(footer: &FooterView) -> Element<'a, Message> {
    container(
        column![
            text(footer.name.clone()).size(18),
            text(footer.tagline.clone()).size(14),
            text(footer.email.clone()).size(14),
        ]
        .spacing(6),
    )
    .padding(32)
    .width(Length::Fill)
    .into()
}
