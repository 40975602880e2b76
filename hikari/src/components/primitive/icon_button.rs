use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::shared::ui::style::{plain_button_style, round_button_style};
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    /// Bare glyph tinted with the scheme's text color.
    Plain,
    /// Glyph on a round white surface tinted with the scheme's tint color.
    Round,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const ROUND_BUTTON_PADDING: f32 = 8.0;

/// Render a square icon button.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let colors = props.theme.colors();
    let glyph_color = resolve_glyph_color(
        props.variant,
        colors.text,
        colors.tint,
        props.theme.overrides,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, _| svg::Style {
            color: Some(glyph_color),
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let base = button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size));

    match props.variant {
        IconButtonVariant::Plain => {
            base.padding(0).style(plain_button_style(glyph_color)).into()
        },
        IconButtonVariant::Round => base
            .padding(ROUND_BUTTON_PADDING)
            .style(round_button_style())
            .into(),
    }
}

fn resolve_glyph_color(
    variant: IconButtonVariant,
    text: iced::Color,
    tint: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    if let Some(color) = overrides.and_then(|o| o.foreground) {
        return color;
    }

    match variant {
        IconButtonVariant::Plain => text,
        IconButtonVariant::Round => tint,
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_glyph_color};
    use crate::shared::ui::theme::StyleOverrides;

    #[test]
    fn given_plain_variant_when_resolving_without_override_then_text_color_is_used()
     {
        let text = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let tint = iced::Color::from_rgb(0.4, 0.5, 0.6);

        let color =
            resolve_glyph_color(IconButtonVariant::Plain, text, tint, None);

        assert_eq!(color, text);
    }

    #[test]
    fn given_round_variant_when_resolving_without_override_then_tint_is_used() {
        let text = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let tint = iced::Color::from_rgb(0.4, 0.5, 0.6);

        let color =
            resolve_glyph_color(IconButtonVariant::Round, text, tint, None);

        assert_eq!(color, tint);
    }

    #[test]
    fn given_foreground_override_when_resolving_then_override_wins() {
        let text = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let tint = iced::Color::from_rgb(0.4, 0.5, 0.6);
        let override_color = iced::Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            foreground: Some(override_color),
        });

        let color = resolve_glyph_color(
            IconButtonVariant::Round,
            text,
            tint,
            overrides,
        );

        assert_eq!(color, override_color);
    }
}
