use iced::widget::{Row, Space, container, text};
use iced::{Element, Length, Theme, alignment};

use super::super::event::ChromeIntent;
use super::super::model::ChromeViewModel;
use crate::components::primitive::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
    view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{IconResolver, ids};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const HEADER_HEIGHT: f32 = 56.0;
const HEADER_PADDING_X: f32 = 15.0;
const HEADER_SPACING: f32 = 12.0;
const MENU_BUTTON_SIZE: f32 = 40.0;
const BACK_BUTTON_SIZE: f32 = 32.0;
const ICON_SIZE: f32 = 24.0;

/// Props for rendering the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: ChromeViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a dyn IconResolver,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header: menu button, optional back button and title.
pub(crate) fn view(
    props: HeaderProps<'_>,
) -> Element<'_, ChromeIntent, Theme, iced::Renderer> {
    let menu_button = icon_button(
        props.icons.resolve(ids::MENU),
        MENU_BUTTON_SIZE,
        IconButtonVariant::Round,
        props.theme,
    )
    .map(|_| ChromeIntent::MenuPressed);

    let mut content = Row::new()
        .push(menu_button)
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center);

    if props.vm.can_go_back {
        content = content.push(
            icon_button(
                props.icons.resolve(ids::BACK),
                BACK_BUTTON_SIZE,
                IconButtonVariant::Plain,
                props.theme,
            )
            .map(|_| ChromeIntent::BackPressed),
        );
    }

    if let Some(title) = props.vm.title {
        content = content.push(
            text(title)
                .size(props.fonts.subtitle_size())
                .font(props.fonts.semibold()),
        );
    }

    content = content.push(Space::new().width(Length::Fill));

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn icon_button<'a>(
    icon: &'static [u8],
    size: f32,
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button_view(IconButtonProps {
        icon,
        theme,
        size,
        icon_size: ICON_SIZE,
        variant,
    })
}
