// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog.
//!
//! The dialog is drawn above `base` on a dimmed backdrop. Clicking the
//! backdrop counts as cancelling.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length, Theme};

/// Labels and callbacks of a confirmation dialog, already translated.
pub struct Confirm<Message> {
    pub title: String,
    pub body: String,
    pub cancel_label: String,
    pub confirm_label: String,
    /// Draws the confirm button in the danger style.
    pub destructive: bool,
    pub on_confirm: Message,
    pub on_cancel: Message,
}

impl<Message> Confirm<Message> {
    /// Converts the callbacks into a parent message type.
    pub fn map<Parent>(self, f: impl Fn(Message) -> Parent) -> Confirm<Parent> {
        Confirm {
            title: self.title,
            body: self.body,
            cancel_label: self.cancel_label,
            confirm_label: self.confirm_label,
            destructive: self.destructive,
            on_confirm: f(self.on_confirm),
            on_cancel: f(self.on_cancel),
        }
    }
}

/// Renders `base` with the confirmation dialog stacked on top.
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    confirm: Confirm<Message>,
) -> Element<'a, Message> {
    let on_cancel = confirm.on_cancel.clone();
    modal(base, card(confirm), on_cancel)
}

fn card<'a, Message: Clone + 'a>(confirm: Confirm<Message>) -> Element<'a, Message> {
    let confirm_style: fn(&Theme, button::Status) -> button::Style = if confirm.destructive {
        styles::button::danger
    } else {
        styles::button::primary
    };

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(confirm.cancel_label).size(typography::BODY))
                .on_press(confirm.on_cancel)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(confirm.confirm_label).size(typography::BODY))
                .on_press(confirm.on_confirm)
                .padding([spacing::XS, spacing::MD])
                .style(confirm_style),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .push(
            Text::new(confirm.title)
                .size(typography::TITLE_SM)
                .style(styles::text::primary),
        )
        .push(
            Text::new(confirm.body)
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .push(buttons);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

/// Stacks `content` over `base`, blocking interaction with `base`.
fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(center(opaque(content)).style(styles::container::backdrop))
                .on_press(on_blur),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Child {
        Yes,
        No,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Parent {
        Child(Child),
    }

    #[test]
    fn map_wraps_both_callbacks_and_keeps_labels() {
        let confirm = Confirm {
            title: "Delete".into(),
            body: "Sure?".into(),
            cancel_label: "No".into(),
            confirm_label: "Yes".into(),
            destructive: true,
            on_confirm: Child::Yes,
            on_cancel: Child::No,
        }
        .map(Parent::Child);

        assert_eq!(confirm.on_confirm, Parent::Child(Child::Yes));
        assert_eq!(confirm.on_cancel, Parent::Child(Child::No));
        assert_eq!(confirm.title, "Delete");
        assert!(confirm.destructive);
    }
}
