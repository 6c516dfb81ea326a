// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current panel,
//! then layers the open confirmation dialog and the toasts above it.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::banner_form::{self, State as BannerFormState};
use crate::ui::banner_list::{self, State as BannerListState};
use crate::ui::dialog;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::media_cache::MediaCache;
use crate::ui::notifications::{self, Toast};
use crate::ui::pages;
use crate::ui::slider::{self, State as SliderState};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Space, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub logout_dialog_open: bool,
    pub banner_list: Option<&'a BannerListState>,
    pub banner_form: Option<&'a BannerFormState>,
    pub slider: Option<&'a SliderState>,
    pub media: &'a MediaCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current panel with its dialogs and toasts.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header_view = header::view(HeaderViewContext {
        i18n,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let mut current_view = match ctx.screen {
        Screen::Admin => pages::admin(i18n, header_view, view_admin_body(&ctx)),
        Screen::User => pages::user(i18n, header_view, view_slider(&ctx)),
    };

    if let Some(confirm) = ctx.banner_list.and_then(|list| list.delete_dialog(i18n)) {
        current_view = dialog::overlay(current_view, confirm.map(Message::BannerList));
    }
    if ctx.logout_dialog_open {
        current_view = dialog::overlay(
            current_view,
            header::logout_dialog(i18n).map(Message::Header),
        );
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}

fn view_admin_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(form) = ctx.banner_form {
        return form
            .view(banner_form::ViewContext { i18n: ctx.i18n })
            .map(Message::BannerForm);
    }

    match ctx.banner_list {
        Some(list) => list
            .view(banner_list::ViewContext {
                i18n: ctx.i18n,
                media: ctx.media,
            })
            .map(Message::BannerList),
        None => Space::new().into(),
    }
}

fn view_slider<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.slider {
        Some(slider) => slider
            .view(slider::ViewContext {
                i18n: ctx.i18n,
                media: ctx.media,
            })
            .map(Message::Slider),
        None => Space::new().into(),
    }
}
