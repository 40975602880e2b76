use super::errors::RouteError;
use crate::shared::ui::icons::ids;

/// Screens reachable from the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TabRoute {
    Library,
    Updates,
    History,
    Search,
}

impl TabRoute {
    /// Tab bar order.
    pub(crate) const ALL: [TabRoute; 4] = [
        TabRoute::Library,
        TabRoute::Updates,
        TabRoute::History,
        TabRoute::Search,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            TabRoute::Library => "Biblioteca",
            TabRoute::Updates => "Atualizações",
            TabRoute::History => "Histórico",
            TabRoute::Search => "Pesquisar",
        }
    }

    pub(crate) fn icon_id(self) -> &'static str {
        match self {
            TabRoute::Library => ids::LIBRARY,
            TabRoute::Updates => ids::UPDATES,
            TabRoute::History => ids::HISTORY,
            TabRoute::Search => ids::SEARCH,
        }
    }

    /// Canonical route identifier of the tab.
    pub(crate) fn path(self) -> &'static str {
        match self {
            TabRoute::Library => "/(tabs)",
            TabRoute::Updates => "/(tabs)/atualizacoes",
            TabRoute::History => "/(tabs)/historico",
            TabRoute::Search => "/(tabs)/pesquisar",
        }
    }
}

/// A resolved screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Tab(TabRoute),
    Profile,
    Settings,
    About,
    /// Fallback for identifiers with no registered screen.
    NotFound(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::Tab(TabRoute::Library)
    }
}

impl Route {
    /// Resolve a route identifier such as `/(tabs)/profile`.
    ///
    /// Trailing slashes are ignored; `/`, `/(tabs)` and `/(tabs)/index`
    /// all name the library tab.
    pub(crate) fn parse(destination: &str) -> Result<Self, RouteError> {
        let trimmed = destination.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };

        let route = match normalized {
            "/" | "/(tabs)" | "/(tabs)/index" => Route::Tab(TabRoute::Library),
            "/(tabs)/atualizacoes" => Route::Tab(TabRoute::Updates),
            "/(tabs)/historico" => Route::Tab(TabRoute::History),
            "/(tabs)/pesquisar" => Route::Tab(TabRoute::Search),
            "/(tabs)/profile" => Route::Profile,
            "/(tabs)/settings" => Route::Settings,
            "/(tabs)/about" => Route::About,
            _ => {
                return Err(RouteError::Unmatched {
                    destination: destination.to_string(),
                });
            },
        };

        Ok(route)
    }

    /// Resolve an identifier, mapping failures onto [`Route::NotFound`].
    pub(crate) fn resolve(destination: &str) -> Self {
        Self::parse(destination).unwrap_or_else(|err| match err {
            RouteError::Unmatched { destination } => {
                Route::NotFound(destination)
            },
        })
    }

    pub(crate) fn title(&self) -> &str {
        match self {
            Route::Tab(tab) => tab.title(),
            Route::Profile => "Perfil",
            Route::Settings => "Configurações",
            Route::About => "Sobre",
            Route::NotFound(_) => "Oops!",
        }
    }

    pub(crate) fn as_tab(&self) -> Option<TabRoute> {
        match self {
            Route::Tab(tab) => Some(*tab),
            _ => None,
        }
    }
}

/// Read-only snapshot for the screen host and header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel<'a> {
    pub(crate) current: &'a Route,
    pub(crate) active_tab: TabRoute,
    pub(crate) can_go_back: bool,
}

#[cfg(test)]
mod tests {
    use super::{Route, TabRoute};
    use crate::widgets::navigation::errors::RouteError;

    #[test]
    fn given_library_aliases_when_parsed_then_library_tab_is_resolved() {
        for destination in ["/", "/(tabs)", "/(tabs)/", "/(tabs)/index"] {
            assert_eq!(
                Route::parse(destination),
                Ok(Route::Tab(TabRoute::Library)),
                "{destination}"
            );
        }
    }

    #[test]
    fn given_drawer_destinations_when_parsed_then_stack_screens_are_resolved() {
        assert_eq!(Route::parse("/(tabs)/profile"), Ok(Route::Profile));
        assert_eq!(Route::parse("/(tabs)/settings"), Ok(Route::Settings));
        assert_eq!(Route::parse("/(tabs)/about/"), Ok(Route::About));
    }

    #[test]
    fn given_tab_paths_when_parsed_then_they_round_trip_to_their_tab() {
        for tab in TabRoute::ALL {
            assert_eq!(Route::parse(tab.path()), Ok(Route::Tab(tab)));
        }
    }

    #[test]
    fn given_unknown_destination_when_parsed_then_unmatched_error_is_returned()
    {
        assert_eq!(
            Route::parse("/(tabs)/downloads"),
            Err(RouteError::Unmatched {
                destination: String::from("/(tabs)/downloads"),
            })
        );
        assert_eq!(
            Route::resolve(""),
            Route::NotFound(String::new()),
        );
    }

    #[test]
    fn given_unknown_destination_when_resolved_then_not_found_keeps_identifier()
    {
        assert_eq!(
            Route::resolve("/manga/42"),
            Route::NotFound(String::from("/manga/42"))
        );
    }
}
