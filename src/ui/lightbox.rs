/// Full-screen overlay for the lightbox
use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, row, text};
use iced::{Alignment, Background, Color, Element, Length};

use super::{images::ImageStore, region};
use crate::state::lightbox::{LightboxFrame, LightboxInput};
use crate::view::MountPoint;
use crate::Message;

fn input(input: LightboxInput) -> Message {
    Message::Lightbox(input)
}

pub fn overlay<'a>(frame: LightboxFrame, images: &'a ImageStore) -> Element<'a, Message> {
    // Clicks on the picture must not reach the backdrop
    let picture: Element<'a, Message> = match images.get(&frame.url, None) {
        Some(handle) => mouse_area(image(handle.clone()).width(Length::Shrink))
            .on_press(input(LightboxInput::ImageClicked))
            .into(),
        None => text(frame.alt.clone()).size(18).into(),
    };

    let control = |label: &'static str, visible: bool, message: LightboxInput| -> Element<'a, Message> {
        if visible {
            button(text(label).size(32))
                .on_press(input(message))
                .style(button::text)
                .into()
        } else {
            horizontal_space().width(Length::Fixed(48.0)).into()
        }
    };

    let close = button(text("\u{d7}").size(32))
        .on_press(input(LightboxInput::CloseClicked))
        .style(button::text);

    let body = column![
        row![horizontal_space(), close],
        row![
            control("\u{2039}", frame.show_previous, LightboxInput::PreviousClicked),
            center(picture),
            control("\u{203a}", frame.show_next, LightboxInput::NextClicked),
        ]
        .align_y(Alignment::Center)
        .height(Length::Fill),
        text(frame.alt).size(14),
    ]
    .align_x(Alignment::Center)
    .padding(24);

    let backdrop = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.92))),
            ..container::Style::default()
        });

    region(
        MountPoint::Lightbox,
        mouse_area(backdrop).on_press(input(LightboxInput::BackdropClicked)),
    )
}
