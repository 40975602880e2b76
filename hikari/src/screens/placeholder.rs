use iced::widget::{column, container, svg, text};
use iced::{Color, Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{IconResolver, ids};
use crate::shared::ui::style::surface_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::{Route, TabRoute};

const HERO_ICON_SIZE: f32 = 120.0;
const HERO_ICON_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);
const CONTENT_SPACING: f32 = 8.0;
const CONTENT_PADDING: f32 = 24.0;

/// Props for a screen that only shows a heading and a short message.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaceholderProps<'a> {
    pub(crate) route: &'a Route,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a dyn IconResolver,
    pub(crate) fonts: &'a FontsConfig,
}

/// Heading, hero glyph and message of a placeholder screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderCopy {
    pub(crate) title: String,
    pub(crate) icon_id: &'static str,
    pub(crate) message: String,
}

pub(crate) fn placeholder_copy(route: &Route) -> PlaceholderCopy {
    let (icon_id, message) = match route {
        Route::Tab(TabRoute::Library) => (
            ids::LIBRARY,
            String::from("Sua biblioteca aparecerá aqui."),
        ),
        Route::Tab(TabRoute::Updates) => (
            ids::UPDATES,
            String::from("Novos capítulos das suas séries aparecerão aqui."),
        ),
        Route::Tab(TabRoute::History) => (
            ids::HISTORY,
            String::from("Seu histórico de leitura aparecerá aqui."),
        ),
        Route::Tab(TabRoute::Search) => (
            ids::SEARCH,
            String::from("Pesquise títulos, autores e gêneros."),
        ),
        Route::Profile => (
            ids::PERSON,
            String::from("Sua conta e preferências de leitura."),
        ),
        Route::Settings => (
            ids::GEAR,
            String::from("Ajuste o aplicativo ao seu gosto."),
        ),
        Route::About => (
            ids::INFO,
            format!("Hikari Reader {}", env!("CARGO_PKG_VERSION")),
        ),
        Route::NotFound(destination) => (
            "questionmark",
            format!("Esta tela não existe: {destination}"),
        ),
    };

    PlaceholderCopy {
        title: route.title().to_string(),
        icon_id,
        message,
    }
}

/// Render a centered hero glyph with the route's heading and message.
pub(crate) fn view<'a, Message: 'a>(
    props: PlaceholderProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let copy = placeholder_copy(props.route);
    let colors = *props.theme.colors();

    let hero = svg::Svg::new(svg::Handle::from_memory(
        props.icons.resolve(copy.icon_id),
    ))
    .width(Length::Fixed(HERO_ICON_SIZE))
    .height(Length::Fixed(HERO_ICON_SIZE))
    .style(|_, _| svg::Style {
        color: Some(HERO_ICON_COLOR),
    });

    let content = column![
        hero,
        text(copy.title)
            .size(props.fonts.title_size())
            .font(props.fonts.bold()),
        text(copy.message).color(colors.muted_text),
    ]
    .spacing(CONTENT_SPACING)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(surface_style(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::placeholder_copy;
    use crate::shared::ui::icons::ids;
    use crate::widgets::navigation::{Route, TabRoute};

    #[test]
    fn given_history_tab_when_rendered_then_reading_history_message_is_shown() {
        let copy = placeholder_copy(&Route::Tab(TabRoute::History));

        assert_eq!(copy.title, "Histórico");
        assert_eq!(copy.icon_id, ids::HISTORY);
        assert_eq!(copy.message, "Seu histórico de leitura aparecerá aqui.");
    }

    #[test]
    fn given_unknown_route_when_rendered_then_offending_identifier_is_shown() {
        let copy =
            placeholder_copy(&Route::NotFound(String::from("/manga/42")));

        assert_eq!(copy.title, "Oops!");
        assert!(copy.message.ends_with("/manga/42"));
    }

    #[test]
    fn given_about_route_when_rendered_then_package_version_is_shown() {
        let copy = placeholder_copy(&Route::About);

        assert!(copy.message.contains(env!("CARGO_PKG_VERSION")));
    }
}
