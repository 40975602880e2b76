use iced::Task;
use iced::time::Instant;

use crate::app::{App, AppEvent};
use crate::routers::navigation;
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => {
            route_intent(app, intent, Instant::now())
        },
        SidebarEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Advance the drawer animation to the frame timestamp.
pub(crate) fn tick(app: &mut App, now: Instant) -> Task<AppEvent> {
    route_intent(app, SidebarIntent::Tick, now)
}

/// Push the shell's open flag into the drawer widget.
pub(crate) fn sync_open(app: &mut App) -> Task<AppEvent> {
    let is_open = app.state.sidebar_visible;
    let task =
        route_intent(app, SidebarIntent::SetOpen(is_open), Instant::now());
    log::debug!(
        "sidebar open flag set to {is_open}, drawer is {:?}",
        app.widgets.sidebar.phase()
    );
    task
}

fn route_intent(
    app: &mut App,
    intent: SidebarIntent,
    now: Instant,
) -> Task<AppEvent> {
    app.widgets
        .sidebar
        .reduce(intent, &SidebarCtx { now })
        .map(AppEvent::Sidebar)
}

fn route_effect(app: &mut App, effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::CloseRequested => {
            app.state.close_sidebar();
            sync_open(app)
        },
        SidebarEffect::Navigate { destination } => {
            navigation::navigate(app, destination)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::route;
    use crate::routers::test_support;
    use crate::widgets::sidebar::{
        SidebarEffect, SidebarEvent, SidebarIntent, SidebarPhase,
    };

    #[test]
    fn given_open_drawer_when_close_is_requested_then_shell_flag_and_drawer_close()
     {
        let mut app = test_support::app();
        app.state.sidebar_visible = true;
        let _task = route(
            &mut app,
            SidebarEvent::Intent(SidebarIntent::SetOpen(true)),
        );

        let _task = route(
            &mut app,
            SidebarEvent::Effect(SidebarEffect::CloseRequested),
        );

        assert!(!app.state.sidebar_visible);
        assert_eq!(app.widgets.sidebar.phase(), SidebarPhase::Closing);
    }

    #[test]
    fn given_closed_drawer_when_close_is_requested_again_then_it_stays_hidden()
    {
        let mut app = test_support::app();

        let _task = route(
            &mut app,
            SidebarEvent::Effect(SidebarEffect::CloseRequested),
        );

        assert!(!app.state.sidebar_visible);
        assert_eq!(app.widgets.sidebar.phase(), SidebarPhase::Hidden);
    }
}
