use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::navigation;
use crate::widgets::navigation::TabRoute;
use crate::widgets::tabs::{TabsEffect, TabsEvent, TabsIntent};

/// Route a tabs event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: TabsEvent) -> Task<AppEvent> {
    match event {
        TabsEvent::Intent(intent) => {
            app.widgets.tabs.reduce(intent).map(AppEvent::Tabs)
        },
        TabsEvent::Effect(TabsEffect::Navigate { destination }) => {
            navigation::navigate(app, destination)
        },
    }
}

/// Highlight `tab` without navigating.
pub(crate) fn sync_active(app: &mut App, tab: TabRoute) -> Task<AppEvent> {
    route(app, TabsEvent::Intent(TabsIntent::SyncActive(tab)))
}
