// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notification elements.
//!
//! Toasts are drawn as small cards with a kind-colored accent border. The
//! element's opacity style is applied to every color of the card, so a faded
//! toast is invisible while it waits for removal.

use crate::notifications::{Container as Region, Element as Node};
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color for the element's kind class.
#[must_use]
pub fn accent_color(node: &Node) -> Color {
    if node.has_class("success") {
        palette::SUCCESS_500
    } else if node.has_class("warning") {
        palette::WARNING_500
    } else if node.has_class("error") || node.has_class("danger") {
        palette::ERROR_500
    } else if node.has_class("info") {
        palette::INFO_500
    } else {
        palette::GRAY_400
    }
}

/// Renders a single toast.
///
/// The text goes into a plain `Text` widget; it is never parsed.
pub fn view<'a, Message: 'a>(node: &'a Node) -> Element<'a, Message> {
    let accent = accent_color(node);
    let alpha = node.effective_opacity();

    let message_widget = Text::new(node.text())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, alpha)),
        });

    Container::new(message_widget)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

/// Renders every child of the container, stacked in the bottom-right corner.
pub fn view_overlay<'a, Message: 'a>(region: &'a Region) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = region.children().iter().map(view).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: faded(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}
