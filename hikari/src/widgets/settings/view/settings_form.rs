use iced::widget::{Space, column, container, row, text, toggler};
use iced::{Element, Length, Theme, alignment};

use super::super::event::SettingsIntent;
use super::super::model::SettingsViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style::card_style;
use crate::shared::ui::theme::ThemeProps;

const FORM_PADDING: f32 = 16.0;
const FORM_SPACING: f32 = 16.0;
const ROW_PADDING: f32 = 16.0;
const ROW_SPACING: f32 = 4.0;

/// Props for the settings form view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsFormProps<'a> {
    pub(crate) vm: SettingsViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the appearance preferences.
pub(crate) fn view(
    props: SettingsFormProps<'_>,
) -> Element<'_, SettingsIntent, Theme, iced::Renderer> {
    let colors = props.theme.colors();

    let title = text("Configurações")
        .size(props.fonts.title_size())
        .font(props.fonts.bold());

    let description = column![
        text("Modo escuro").size(props.fonts.ui.size),
        text("Usa cores escuras em todas as telas.")
            .size(props.fonts.caption_size())
            .color(colors.muted_text),
    ]
    .spacing(ROW_SPACING);

    let dark_mode = toggler(props.vm.is_dark)
        .on_toggle(SettingsIntent::DarkModeToggled);

    let dark_mode_row = container(
        row![description, Space::new().width(Length::Fill), dark_mode]
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(ROW_PADDING)
    .style(card_style(*colors));

    column![title, dark_mode_row]
        .spacing(FORM_SPACING)
        .padding(FORM_PADDING)
        .width(Length::Fill)
        .into()
}
