// SPDX-License-Identifier: MPL-2.0
//! Application header shared by both panels.
//!
//! Holds the panel switch, the language picker, the theme toggle and the
//! logout button. Logging out goes through a confirmation dialog; confirming
//! only closes it, there is no session to tear down.

use crate::app::Screen;
use crate::i18n::{I18n, Language};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dialog::Confirm;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePanel,
    SelectLanguage(Language),
    ToggleTheme,
    RequestLogout,
    CancelLogout,
    ConfirmLogout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    TogglePanel,
    LanguageSelected(Language),
    ToggleTheme,
    LoggedOut,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, logout_dialog_open: &mut bool) -> Event {
    match message {
        Message::TogglePanel => Event::TogglePanel,
        Message::SelectLanguage(language) => Event::LanguageSelected(language),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::RequestLogout => {
            *logout_dialog_open = true;
            Event::None
        }
        Message::CancelLogout => {
            *logout_dialog_open = false;
            Event::None
        }
        Message::ConfirmLogout => {
            *logout_dialog_open = false;
            Event::LoggedOut
        }
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr(ctx.screen.i18n_key()))
        .size(typography::TITLE_SM)
        .style(styles::text::brand);

    let switch_key = match ctx.screen {
        Screen::Admin => "switch-to-user",
        Screen::User => "switch-to-admin",
    };
    let panel_button = button(Text::new(i18n.tr(switch_key)).size(typography::BODY))
        .on_press(Message::TogglePanel)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::header(false));

    let language_picker = pick_list(
        Language::ALL,
        Some(i18n.language()),
        Message::SelectLanguage,
    )
    .placeholder(i18n.tr("language-label"))
    .text_size(typography::BODY)
    .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH));

    let (theme_glyph, theme_key) = if ctx.theme_mode.is_dark() {
        ("☀", "theme-light")
    } else {
        ("☾", "theme-dark")
    };
    let theme_button = button(
        Text::new(format!("{theme_glyph} {}", i18n.tr(theme_key))).size(typography::BODY),
    )
    .on_press(Message::ToggleTheme)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::header(false));

    let logout_button = button(Text::new(i18n.tr("logout")).size(typography::BODY))
        .on_press(Message::RequestLogout)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(panel_button)
        .push(language_picker)
        .push(theme_button)
        .push(logout_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header)
        .into()
}

/// Labels and callbacks of the logout confirmation dialog.
pub fn logout_dialog(i18n: &I18n) -> Confirm<Message> {
    Confirm {
        title: i18n.tr("logout-confirm"),
        body: i18n.tr("logout-message"),
        cancel_label: i18n.tr("cancel"),
        confirm_label: i18n.tr("confirm"),
        destructive: false,
        on_confirm: Message::ConfirmLogout,
        on_cancel: Message::CancelLogout,
    }
}
