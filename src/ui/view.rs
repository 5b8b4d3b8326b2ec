//! Widgets for the admin panel
//! Pure functions from state to elements, no side effects

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::media::DataUrl;
use crate::state::{BannerStaging, CardStaging, HomeSection, SelectedFile};

/// Edge length of preview tiles in the forms
const TILE_SIZE: f32 = 120.0;

fn preview_tile<'a>(preview: &DataUrl) -> Element<'a, Message> {
    image(Handle::from_bytes(preview.bytes().clone()))
        .width(Length::Fixed(TILE_SIZE))
        .height(Length::Fixed(TILE_SIZE))
        .into()
}

/// Multi-banner upload form
pub fn banner_form(staging: &BannerStaging) -> Element<'_, Message> {
    let previews: Element<'_, Message> = Row::with_children(staging.files().iter().map(|staged| {
        column![
            preview_tile(&staged.preview),
            text(staged.file.name()).size(12),
            button("Remove").on_press(Message::RemoveBannerFile(staged.id)),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
    }))
    .spacing(10)
    .wrap()
    .into();

    column![
        text("Add Banners").size(24),
        button("Select Images").on_press(Message::PickBannerFiles),
        previews,
        text_input("Banner title", &staging.title).on_input(Message::BannerTitleChanged),
        text_input("Description (optional)", &staging.description)
            .on_input(Message::BannerDescriptionChanged),
        button("Add Banners").on_press(Message::SubmitBanners).padding(10),
    ]
    .spacing(10)
    .into()
}

/// Single card upload form
pub fn card_form(card: &CardStaging) -> Element<'_, Message> {
    let preview: Element<'_, Message> = match card.preview() {
        Some(preview) => preview_tile(preview),
        None => text("No image selected").size(12).into(),
    };

    column![
        text("Add Card").size(24),
        text_input("Card title", &card.title).on_input(Message::CardTitleChanged),
        text_input("Description (optional)", &card.description)
            .on_input(Message::CardDescriptionChanged),
        row![button("Select Image").on_press(Message::PickCardFile), preview]
            .spacing(10)
            .align_y(Alignment::Center),
        button("Add Card").on_press(Message::SubmitCard).padding(10),
    ]
    .spacing(10)
    .into()
}

/// One editable row per existing section
pub fn section_list<'a>(
    sections: &'a [HomeSection],
    pending_image: impl Fn(i64) -> Option<&'a SelectedFile>,
) -> Element<'a, Message> {
    let header = row![
        text(format!("Sections ({})", sections.len())).size(24),
        button("Refresh").on_press(Message::Refresh),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let rows = sections
        .iter()
        .map(|section| section_row(section, pending_image(section.id)));

    Column::new()
        .push(header)
        .extend(rows)
        .spacing(16)
        .into()
}

fn section_row<'a>(section: &'a HomeSection, pending: Option<&'a SelectedFile>) -> Element<'a, Message> {
    let id = section.id;

    let mut images = Column::new().spacing(2);
    if let Some(url) = &section.image_url {
        images = images.push(text(url.as_str()).size(12));
    }
    for url in &section.image_urls {
        images = images.push(text(url.as_str()).size(12));
    }

    let replacement = match pending {
        Some(file) => text(format!("New image: {}", file.name())).size(12),
        None => text("").size(12),
    };

    let body = column![
        text(format!("#{} {} · {}", id, section.section_type, section.title)).size(18),
        images,
        text_input("Description", section.description.as_deref().unwrap_or(""))
            .on_input(move |value| Message::DescriptionChanged(id, value)),
        text_input("Route", section.route.as_deref().unwrap_or(""))
            .on_input(move |value| Message::RouteChanged(id, value)),
        row![
            button("Replace Image").on_press(Message::PickReplacementImage(id)),
            replacement,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        row![
            button("Update").on_press(Message::UpdateSection(id)),
            button("Delete")
                .style(button::danger)
                .on_press(Message::DeleteSection(id)),
        ]
        .spacing(10),
    ]
    .spacing(6);

    container(body).padding(12).width(Length::Fill).into()
}
