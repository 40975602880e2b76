use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Vector};

use super::theme::{SchemeColors, accents};

const CARD_RADIUS: f32 = 12.0;
const ROUND_BUTTON_RADIUS: f32 = 20.0;

/// Scrollable style with hidden rails, used for horizontal strips.
pub(crate) fn hidden_scroll_style()
-> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let transparent = Background::Color(Color::TRANSPARENT);

        style.vertical_rail.background = None;
        style.vertical_rail.scroller.background = transparent;
        style.horizontal_rail.background = None;
        style.horizontal_rail.scroller.background = transparent;

        style
    }
}

/// Full-screen backdrop of a screen body.
pub(crate) fn surface_style(
    colors: SchemeColors,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(colors.surface.into()),
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Raised rounded card.
pub(crate) fn card_style(
    colors: SchemeColors,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(colors.card.into()),
        text_color: Some(colors.text),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.1,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Small solid badge, e.g. "New Chapter".
pub(crate) fn badge_style()
-> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(accents::BADGE.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Round white button with a soft drop shadow, used for the header menu
/// button and the drawer close button.
pub(crate) fn round_button_style()
-> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let mut background = accents::BUTTON_SURFACE;
        if matches!(status, button::Status::Pressed) {
            background.a = 0.7;
        }

        button::Style {
            background: Some(background.into()),
            border: Border {
                radius: ROUND_BUTTON_RADIUS.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color {
                    a: 0.2,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        }
    }
}

/// Transparent button that dims while pressed.
pub(crate) fn plain_button_style(
    text_color: Color,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let mut color = text_color;
        if matches!(status, button::Status::Pressed) {
            color.a = 0.5;
        }

        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            ..Default::default()
        }
    }
}
