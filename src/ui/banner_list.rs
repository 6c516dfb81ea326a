// SPDX-License-Identifier: MPL-2.0
//! Admin list of every banner with per-row actions.
//!
//! The list never talks to the store itself. [`State::update`] returns an
//! [`Action`] describing the remote work to start, and the results come
//! back as [`Message`]s. While a row's write is pending its toggle and
//! delete buttons stay disabled.

use crate::application::port::StoreError;
use crate::domain::{Banner, BannerId, MediaType};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::dialog::Confirm;
use crate::ui::media_cache::{MediaCache, MediaSlot};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Image, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Banner>, StoreError>),
    ToggleActive(BannerId),
    ToggleFinished {
        id: BannerId,
        result: Result<Banner, StoreError>,
    },
    RequestDelete(BannerId),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished {
        id: BannerId,
        result: Result<(), StoreError>,
    },
    Edit(BannerId),
    Add,
}

/// Work the parent must perform on behalf of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// List every banner and send the result back as [`Message::Loaded`].
    Fetch,
    SetActive {
        id: BannerId,
        is_active: bool,
    },
    Delete(BannerId),
    /// A delete went through; announce it and refetch.
    Deleted,
    Edit(Banner),
    Add,
    /// A remote call failed; the list keeps its last good rows.
    Failed(StoreError),
}

#[derive(Debug, Default)]
pub struct State {
    banners: Vec<Banner>,
    loading: bool,
    refresh_token: Option<u64>,
    in_flight: HashSet<BannerId>,
    pending_delete: Option<BannerId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_busy(&self, id: &BannerId) -> bool {
        self.in_flight.contains(id)
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&BannerId> {
        self.pending_delete.as_ref()
    }

    /// Requests a fetch the first time and whenever `token` changes.
    pub fn refresh(&mut self, token: u64) -> Action {
        if self.refresh_token == Some(token) {
            return Action::None;
        }
        self.refresh_token = Some(token);
        self.loading = true;
        Action::Fetch
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(banners) => {
                        self.banners = banners;
                        Action::None
                    }
                    Err(err) => Action::Failed(err),
                }
            }
            Message::ToggleActive(id) => {
                if self.in_flight.contains(&id) {
                    return Action::None;
                }
                let Some(banner) = self.banners.iter().find(|b| b.id == id) else {
                    return Action::None;
                };
                let is_active = !banner.is_active;
                self.in_flight.insert(id.clone());
                Action::SetActive { id, is_active }
            }
            Message::ToggleFinished { id, result } => {
                self.in_flight.remove(&id);
                match result {
                    Ok(_) => {
                        self.loading = true;
                        Action::Fetch
                    }
                    Err(err) => Action::Failed(err),
                }
            }
            Message::RequestDelete(id) => {
                if !self.in_flight.contains(&id) {
                    self.pending_delete = Some(id);
                }
                Action::None
            }
            Message::CancelDelete => {
                self.pending_delete = None;
                Action::None
            }
            Message::ConfirmDelete => match self.pending_delete.take() {
                Some(id) if !self.in_flight.contains(&id) => {
                    self.in_flight.insert(id.clone());
                    Action::Delete(id)
                }
                _ => Action::None,
            },
            Message::DeleteFinished { id, result } => {
                self.in_flight.remove(&id);
                match result {
                    Ok(()) => {
                        self.loading = true;
                        Action::Deleted
                    }
                    Err(err) => Action::Failed(err),
                }
            }
            Message::Edit(id) => self
                .banners
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .map_or(Action::None, Action::Edit),
            Message::Add => Action::Add,
        }
    }

    /// Confirmation dialog for the pending delete, if any.
    pub fn delete_dialog(&self, i18n: &I18n) -> Option<Confirm<Message>> {
        self.pending_delete.as_ref().map(|_| Confirm {
            title: i18n.tr("delete-confirm"),
            body: i18n.tr("delete-message"),
            cancel_label: i18n.tr("cancel"),
            confirm_label: i18n.tr("delete"),
            destructive: true,
            on_confirm: Message::ConfirmDelete,
            on_cancel: Message::CancelDelete,
        })
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let add_button =
            button(Text::new(format!("+ {}", i18n.tr("add-banner"))).size(typography::BODY))
                .on_press(Message::Add)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary);

        if self.banners.is_empty() {
            let label = if self.loading { "loading" } else { "no-banners" };
            let mut empty = Column::new()
                .spacing(spacing::MD)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(i18n.tr(label))
                        .size(typography::BODY_LG)
                        .style(styles::text::secondary),
                );
            if !self.loading {
                empty = empty.push(add_button);
            }
            return Container::new(empty)
                .width(Length::Fill)
                .padding(spacing::XXL)
                .align_x(Horizontal::Center)
                .style(styles::container::card)
                .into();
        }

        let toolbar = Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(format!("{} ({})", i18n.tr("banners"), self.banners.len()))
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary),
            )
            .push(Space::new().width(Length::Fill))
            .push(add_button);

        let rows = self
            .banners
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, banner| {
                column.push(self.row(banner, &ctx))
            });

        Column::new()
            .spacing(spacing::MD)
            .push(toolbar)
            .push(rows)
            .into()
    }

    fn row<'a>(&self, banner: &'a Banner, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let busy = self.is_busy(&banner.id);

        let title = banner
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .map_or_else(|| i18n.tr("untitled"), String::from);
        let description = banner
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map_or_else(|| i18n.tr("no-description"), String::from);

        let status_key = if banner.is_active { "active" } else { "inactive" };
        let badges = Row::new()
            .spacing(spacing::XS)
            .push(
                Container::new(Text::new(i18n.tr(status_key)).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(banner.is_active)),
            )
            .push(
                Text::new(i18n.tr(banner.media_type.i18n_key()))
                    .size(typography::CAPTION)
                    .style(styles::text::secondary),
            );

        let details = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(title)
                    .size(typography::BODY_LG)
                    .style(styles::text::primary),
            )
            .push(
                Text::new(description)
                    .size(typography::BODY_SM)
                    .style(styles::text::secondary),
            )
            .push(badges);

        let toggle_key = if banner.is_active { "deactivate" } else { "activate" };
        let mut toggle_button = button(Text::new(i18n.tr(toggle_key)).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost(palette::PRIMARY_500));
        let mut delete_button = button(Text::new(i18n.tr("delete")).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost(palette::ERROR_500));
        // Disabled until the row's pending write settles.
        if !busy {
            toggle_button = toggle_button.on_press(Message::ToggleActive(banner.id.clone()));
            delete_button = delete_button.on_press(Message::RequestDelete(banner.id.clone()));
        }
        let edit_button = button(Text::new(i18n.tr("edit")).size(typography::BODY_SM))
            .on_press(Message::Edit(banner.id.clone()))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost(palette::GRAY_500));

        let actions = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(toggle_button)
            .push(edit_button)
            .push(delete_button);

        let content = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(thumbnail(banner, ctx))
            .push(details)
            .push(actions);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::card)
            .into()
    }
}

fn thumbnail<'a>(banner: &'a Banner, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let width = Length::Fixed(sizing::THUMBNAIL_WIDTH);
    let height = Length::Fixed(sizing::THUMBNAIL_HEIGHT);

    if let Some(MediaSlot::Ready(handle)) = ctx.media.get(&banner.media_url) {
        return Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into();
    }

    let glyph = match banner.media_type {
        MediaType::Video => "▶",
        MediaType::Image => "▣",
    };
    Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(width)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
