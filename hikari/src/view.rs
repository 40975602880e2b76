use iced::widget::{Column, Stack, container};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::catalog::CatalogSource;
use crate::layout;
use crate::screens::{library, placeholder};
use crate::shared::ui::style::surface_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::view::header;
use crate::widgets::chrome::{ChromeEvent, ChromeViewModel};
use crate::widgets::navigation::{Route, TabRoute};
use crate::widgets::settings::SettingsEvent;
use crate::widgets::settings::view::settings_form;
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::drawer_panel;
use crate::widgets::tabs::TabsEvent;
use crate::widgets::tabs::view::tab_bar;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let nav_vm = app.widgets.navigation.vm();

    let header = header::view(header::HeaderProps {
        vm: ChromeViewModel {
            title: header_title(nav_vm.current),
            can_go_back: nav_vm.can_go_back,
        },
        theme: theme_props,
        icons: &app.icons,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Chrome(ChromeEvent::Intent(intent)));

    let mut body = Column::new()
        .push(header)
        .push(view_screen(app, nav_vm.current, theme_props))
        .width(Length::Fill)
        .height(Length::Fill);

    if nav_vm.current.as_tab().is_some() {
        let tab_bar = tab_bar::view(tab_bar::TabBarProps {
            vm: app.widgets.tabs.vm(),
            theme: theme_props,
            icons: &app.icons,
            fonts: &app.fonts,
        })
        .map(|intent| AppEvent::Tabs(TabsEvent::Intent(intent)));
        body = body.push(tab_bar);
    }

    let body = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface_style(*theme_props.colors()));

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![body.into()];

    // Drawer overlay, present only while mounted
    if let Some(drawer) = drawer_panel::view(drawer_panel::DrawerPanelProps {
        vm: app.widgets.sidebar.vm(),
        theme: theme_props,
        icons: &app.icons,
        fonts: &app.fonts,
        panel_width: layout::drawer_panel_width(app.state.window_size.width),
    }) {
        layers.push(
            drawer
                .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent))),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Header title for `route`. The library screen draws its own heading.
pub(crate) fn header_title(route: &Route) -> Option<&str> {
    match route {
        Route::Tab(TabRoute::Library) => None,
        other => Some(other.title()),
    }
}

/// Render the screen for the current route.
fn view_screen<'a>(
    app: &'a App,
    route: &'a Route,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let screen = match route {
        Route::Tab(TabRoute::Library) => {
            library::view(library::LibraryProps {
                catalog: app.catalog.snapshot(),
                theme: theme_props,
                icons: &app.icons,
                fonts: &app.fonts,
            })
        },
        Route::Settings => {
            settings_form::view(settings_form::SettingsFormProps {
                vm: app.widgets.settings.vm(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(|intent| AppEvent::Settings(SettingsEvent::Intent(intent)))
        },
        other => placeholder::view(placeholder::PlaceholderProps {
            route: other,
            theme: theme_props,
            icons: &app.icons,
            fonts: &app.fonts,
        }),
    };

    container(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::header_title;
    use crate::widgets::navigation::{Route, TabRoute};

    #[test]
    fn given_library_route_when_titling_header_then_no_title_is_drawn() {
        assert_eq!(header_title(&Route::Tab(TabRoute::Library)), None);
    }

    #[test]
    fn given_stack_and_tab_routes_when_titling_header_then_route_title_is_used()
    {
        assert_eq!(header_title(&Route::Profile), Some("Perfil"));
        assert_eq!(
            header_title(&Route::Tab(TabRoute::Search)),
            Some("Pesquisar")
        );
    }
}
