use iced::widget::{
    Space, button, column, container, mouse_area, opaque, pin, row, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use super::super::event::SidebarIntent;
use super::super::model::{MenuEntry, PANEL_WIDTH, SidebarViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{IconResolver, ids};
use crate::shared::ui::style::plain_button_style;
use crate::shared::ui::theme::{StyleOverrides, ThemeProps, accents};

const HEADER_HEIGHT: f32 = 60.0;
const HEADER_PADDING_X: f32 = 20.0;
const CLOSE_BUTTON_SIZE: f32 = 40.0;
const CLOSE_ICON_SIZE: f32 = 24.0;
const ENTRY_PADDING_Y: f32 = 15.0;
const ENTRY_PADDING_X: f32 = 20.0;
const ENTRY_ICON_SIZE: f32 = 24.0;
const ENTRY_SPACING: f32 = 15.0;
const DIVIDER_HEIGHT: f32 = 1.0;

/// Props for the drawer view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawerPanelProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a dyn IconResolver,
    pub(crate) fonts: &'a FontsConfig,
    /// Rendered panel width; the animated offset is scaled onto it.
    pub(crate) panel_width: f32,
}

/// Render the drawer overlay: scrim, dismiss target and sliding panel.
///
/// Returns `None` while the drawer is unmounted so nothing is layered over
/// the screen.
pub(crate) fn view(
    props: DrawerPanelProps<'_>,
) -> Option<Element<'_, SidebarIntent, Theme, iced::Renderer>> {
    if !props.vm.is_mounted {
        return None;
    }

    let opacity = props.vm.overlay_opacity;
    let scrim = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(
                Color {
                    a: opacity,
                    ..accents::SCRIM
                }
                .into(),
            ),
            ..Default::default()
        });
    let dismiss_layer =
        mouse_area(scrim).on_press(SidebarIntent::OverlayPressed);

    // The panel absorbs presses so only the scrim dismisses.
    let panel = pin(opaque(view_panel(props)))
        .x(panel_x(props.vm.offset, props.panel_width))
        .width(Length::Fill)
        .height(Length::Fill);

    Some(
        iced::widget::stack!(dismiss_layer, panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}

/// Scale the logical offset onto the rendered panel width.
pub(crate) fn panel_x(offset: f32, panel_width: f32) -> f32 {
    offset / PANEL_WIDTH * panel_width
}

fn view_panel(
    props: DrawerPanelProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let colors = props.theme.colors();

    let close_button = icon_button::view(IconButtonProps {
        icon: props.icons.resolve(ids::CLOSE),
        theme: props.theme.with_overrides(StyleOverrides {
            foreground: Some(colors.icon),
        }),
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Round,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => SidebarIntent::ClosePressed,
    });

    let header = container(
        row![Space::new().width(Length::Fill), close_button]
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center);

    let entries = props.vm.entries.iter().enumerate().fold(
        iced::widget::Column::new(),
        |column, (index, entry)| column.push(view_entry(index, entry, props)),
    );

    let content = column![header, divider(colors.divider), entries]
        .width(Length::Fill)
        .height(Length::Fill);

    let background = colors.background;
    let text_color = colors.text;
    container(content)
        .width(Length::Fixed(props.panel_width))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            border: Border::default(),
            ..Default::default()
        })
        .into()
}

fn view_entry<'a>(
    index: usize,
    entry: &'a MenuEntry,
    props: DrawerPanelProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let colors = props.theme.colors();
    let icon_color = colors.tint;

    let icon = svg::Svg::new(svg::Handle::from_memory(
        props.icons.resolve(entry.icon_id),
    ))
    .width(Length::Fixed(ENTRY_ICON_SIZE))
    .height(Length::Fixed(ENTRY_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    let label = text(entry.label).size(props.fonts.ui.size);

    let content = row![icon, label]
        .spacing(ENTRY_SPACING)
        .align_y(alignment::Vertical::Center);

    let entry_button = button(content)
        .on_press(SidebarIntent::EntrySelected { index })
        .width(Length::Fill)
        .padding([ENTRY_PADDING_Y, ENTRY_PADDING_X])
        .style(plain_button_style(colors.text));

    column![entry_button, divider(colors.divider)]
        .width(Length::Fill)
        .into()
}

fn divider<'a>(
    color: Color,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
