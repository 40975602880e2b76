use iced::widget::{Column, Row, button, column, container, svg, text};
use iced::{Border, Element, Length, Theme, alignment};

use super::super::event::TabsIntent;
use super::super::model::TabsViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::IconResolver;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::TabRoute;

pub(crate) const TAB_BAR_HEIGHT: f32 = 64.0;
const TAB_ICON_SIZE: f32 = 24.0;
const TAB_LABEL_SCALE: f32 = 0.7;
const TAB_SPACING: f32 = 4.0;
const TOP_BORDER_WIDTH: f32 = 1.0;

/// Props for rendering the bottom tab bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabBarProps<'a> {
    pub(crate) vm: TabsViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a dyn IconResolver,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the tab bar with one evenly sized button per tab.
pub(crate) fn view(
    props: TabBarProps<'_>,
) -> Element<'_, TabsIntent, Theme, iced::Renderer> {
    let colors = props.theme.colors();
    let buttons = props
        .vm
        .tabs
        .iter()
        .fold(Row::new(), |row, tab| {
            row.push(tab_button(*tab, *tab == props.vm.active, props))
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let background = colors.background;
    let divider = colors.divider;
    container(buttons)
        .width(Length::Fill)
        .height(Length::Fixed(TAB_BAR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                width: TOP_BORDER_WIDTH,
                color: divider,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn tab_button(
    tab: TabRoute,
    is_active: bool,
    props: TabBarProps<'_>,
) -> Element<'_, TabsIntent, Theme, iced::Renderer> {
    let color = tab_color(is_active, props.theme);

    let icon = svg::Svg::new(svg::Handle::from_memory(
        props.icons.resolve(tab.icon_id()),
    ))
    .width(Length::Fixed(TAB_ICON_SIZE))
    .height(Length::Fixed(TAB_ICON_SIZE))
    .style(move |_, _| svg::Style { color: Some(color) });

    let label = text(tab.title())
        .size(props.fonts.ui.size * TAB_LABEL_SCALE)
        .color(color);

    let content: Column<'_, TabsIntent, Theme, iced::Renderer> =
        column![icon, label]
            .spacing(TAB_SPACING)
            .align_x(alignment::Horizontal::Center);

    button(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(TabsIntent::Select(tab))
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .padding(0)
    .style(|_, _| button::Style::default())
    .into()
}

fn tab_color(is_active: bool, theme: ThemeProps<'_>) -> iced::Color {
    let colors = theme.colors();
    if is_active {
        colors.tab_icon_selected
    } else {
        colors.tab_icon_default
    }
}

#[cfg(test)]
mod tests {
    use super::tab_color;
    use crate::shared::ui::theme::{ColorScheme, ThemeManager, ThemeProps};

    #[test]
    fn given_light_scheme_when_coloring_tabs_then_active_uses_selected_color() {
        let manager = ThemeManager::new(ColorScheme::Light);
        let props = ThemeProps::new(manager.current());
        let colors = props.colors();

        assert_eq!(tab_color(true, props), colors.tab_icon_selected);
        assert_eq!(tab_color(false, props), colors.tab_icon_default);
        assert_ne!(tab_color(true, props), tab_color(false, props));
    }
}
