#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::time::Instant;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::catalog::MockCatalog;
use crate::config::{self, AppConfig};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::EmbeddedIcons;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::settings::{SettingsEvent, SettingsWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::tabs::{TabsEvent, TabsWidget};

/// Phone-sized initial window.
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 390.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 844.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 568.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Chrome widget
    Chrome(ChromeEvent),
    // Tabs widget
    Tabs(TabsEvent),
    // Navigation widget
    Navigation(NavigationEvent),
    // Settings widget
    Settings(SettingsEvent),
    // Direct operations
    AnimationFrame(Instant),
    ConfigSaved(Result<(), String>),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
#[derive(Debug)]
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) chrome: ChromeWidget,
    pub(crate) tabs: TabsWidget,
    pub(crate) navigation: NavigationWidget,
    pub(crate) settings: SettingsWidget,
}

/// Root application state.
#[derive(Debug)]
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) icons: EmbeddedIcons,
    pub(crate) catalog: MockCatalog,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_initial_config();
        let app = Self::with_parts(config, MockCatalog::load_or_empty());
        log::info!(
            "hikari started with {:?} color scheme",
            app.config.color_scheme
        );

        (app, Task::none())
    }

    /// Build the application around an already loaded config and catalog.
    pub(crate) fn with_parts(config: AppConfig, catalog: MockCatalog) -> Self {
        let theme_manager = ThemeManager::new(config.color_scheme);
        let fonts = FontsConfig::with_size(config.ui_font_size);
        let state =
            State::new(Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        let widgets = Widgets {
            sidebar: SidebarWidget::new(),
            chrome: ChromeWidget::new(),
            tabs: TabsWidget::new(),
            navigation: NavigationWidget::new(),
            settings: SettingsWidget::new(config.color_scheme),
        };

        App {
            config,
            theme_manager,
            fonts,
            icons: EmbeddedIcons,
            catalog,
            state,
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Hikari Reader")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
