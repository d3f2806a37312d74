// SPDX-License-Identifier: MPL-2.0
//! Snackbar widget.
//!
//! The visible snackbar is drawn as a bar at the bottom center of the
//! window with its text, an optional action button, and a dismiss button.

use super::{Message, Surface};
use crate::snackbar::{ActionState, ActionTextColor, Descriptor};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the surface's snackbar as a full-window overlay layer.
pub fn view<'a>(surface: &'a Surface, dismiss_label: &'a str) -> Element<'a, Message> {
    let Some(descriptor) = surface.current() else {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    Container::new(snackbar(descriptor, dismiss_label))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn snackbar<'a>(descriptor: &'a Descriptor, dismiss_label: &'a str) -> Element<'a, Message> {
    let id = descriptor.id();
    let foreground = descriptor.text_color();

    let mut message = text(visible_lines(descriptor.text(), descriptor.max_lines()))
        .size(typography::BODY)
        .color(foreground)
        .width(Length::Fill);
    if descriptor.max_lines() == 1 {
        message = message.wrapping(text::Wrapping::None);
    }

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(message);

    if let Some(action) = descriptor.action() {
        let action_color = action.text_color();
        content = content.push(
            button(text(action.label()).size(typography::BODY))
                .on_press(Message::ActionPressed(id))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| {
                    action_button_style(theme, status, action_color)
                }),
        );
    }

    content = content.push(
        button(text(dismiss_label).size(typography::CAPTION))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| dismiss_button_style(status, foreground)),
    );

    let background = descriptor.background_color();
    Container::new(content)
        .max_width(sizing::SNACKBAR_MAX_WIDTH)
        .width(Length::Shrink)
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme| snackbar_container_style(background, foreground))
        .into()
}

/// Keeps at most `max_lines` lines. Values below 1 keep the whole text.
fn visible_lines(text: &str, max_lines: i32) -> String {
    let Ok(limit) = usize::try_from(max_lines) else {
        return text.to_string();
    };
    if limit == 0 || text.lines().count() <= limit {
        return text.to_string();
    }
    let mut kept = text.lines().take(limit).collect::<Vec<_>>().join("\n");
    kept.push('…');
    kept
}

fn to_action_state(status: button::Status) -> ActionState {
    match status {
        button::Status::Active => ActionState::Active,
        button::Status::Hovered => ActionState::Hovered,
        button::Status::Pressed => ActionState::Pressed,
        button::Status::Disabled => ActionState::Disabled,
    }
}

/// Style function for the snackbar container.
fn snackbar_container_style(background: Color, foreground: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(foreground),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    color: ActionTextColor,
) -> button::Style {
    let text_color = color
        .color_for(to_action_state(status))
        .unwrap_or_else(|| theme.extended_palette().primary.weak.color);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(status: button::Status, foreground: Color) -> button::Style {
    let alpha = match status {
        button::Status::Active => opacity::OVERLAY_MEDIUM,
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: None,
        text_color: Color {
            a: alpha,
            ..foreground
        },
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
