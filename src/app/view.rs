// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The request buttons sit in the main column; the snackbar surface is
//! stacked on top as an overlay layer.

use super::{Message, Request};
use crate::i18n::I18n;
use crate::snackbar::Snackbars;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::snackbar::{self, Surface};
use iced::widget::{button, stack, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snackbars: &'a Snackbars<Surface>,
    pub dismiss_label: &'a str,
}

const REQUESTS: [(Request, &str); 6] = [
    (Request::Success, "demo-button-success"),
    (Request::Error, "demo-button-error"),
    (Request::Warning, "demo-button-warning"),
    (Request::Neutral, "demo-button-neutral"),
    (Request::Important, "demo-button-important"),
    (Request::Burst, "demo-button-burst"),
];

/// Renders the demo screen with the snackbar overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let buttons = REQUESTS
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, (request, key)| {
            row.push(button(text(ctx.i18n.tr(key))).on_press(Message::Show(*request)))
        });

    let pending = ctx.i18n.tr_with_args(
        "demo-pending",
        &[("count", &ctx.snackbars.pending_len().to_string())],
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(ctx.i18n.tr("demo-heading")).size(typography::TITLE_SM))
        .push(text(ctx.i18n.tr("demo-description")).size(typography::BODY))
        .push(buttons)
        .push(text(pending).size(typography::CAPTION));

    let main = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    let overlay = snackbar::view(ctx.snackbars.surface(), ctx.dismiss_label).map(Message::Snackbar);

    stack![main, overlay].into()
}
