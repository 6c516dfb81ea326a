// SPDX-License-Identifier: MPL-2.0
//! Page shells for the two panels.
//!
//! Both pages put the header on top and a centered, width-capped content
//! column below it. The components are rendered by the caller and passed
//! in already mapped to the parent message type.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Admin page: title, subtitle, the "Banners" tab and the list or form.
pub fn admin<'a, Message: 'a>(
    i18n: &I18n,
    header: Element<'a, Message>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let tab = Container::new(
        Text::new(i18n.tr("banners"))
            .size(typography::BODY)
            .style(styles::text::brand),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::active_tab);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(intro(i18n.tr("admin-panel"), i18n.tr("admin-subtitle")))
        .push(Row::new().push(tab))
        .push(body);

    shell(header, content)
}

/// User page: welcome text, the slider and three placeholder sections.
pub fn user<'a, Message: 'a>(
    i18n: &I18n,
    header: Element<'a, Message>,
    slider: Element<'a, Message>,
) -> Element<'a, Message> {
    let sections = (1..=3).fold(Row::new().spacing(spacing::MD), |row, n| {
        row.push(section(
            i18n.tr(&format!("section-{n}-title")),
            i18n.tr(&format!("section-{n}-body")),
        ))
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .push(intro(i18n.tr("welcome"), i18n.tr("welcome-subtitle")))
        .push(slider)
        .push(sections);

    shell(header, content)
}

fn intro<'a, Message: 'a>(title: String, subtitle: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .style(styles::text::primary),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
        )
        .into()
}

fn section<'a, Message: 'a>(title: String, body: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary),
            )
            .push(
                Text::new(body)
                    .size(typography::BODY)
                    .style(styles::text::secondary),
            ),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn shell<'a, Message: 'a>(
    header: Element<'a, Message>,
    content: Column<'a, Message>,
) -> Element<'a, Message> {
    let centered = Container::new(
        content
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(spacing::XL),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    Container::new(
        Column::new()
            .push(header)
            .push(scrollable(centered).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}
