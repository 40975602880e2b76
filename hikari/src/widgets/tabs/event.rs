use crate::widgets::navigation::TabRoute;

/// Intent events handled by the tab bar.
#[derive(Debug, Clone)]
pub(crate) enum TabsIntent {
    /// Tap on a tab button.
    Select(TabRoute),
    /// The navigation root changed elsewhere, e.g. from the drawer.
    SyncActive(TabRoute),
}

/// Effect events produced by the tabs reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TabsEffect {
    /// Ask the router to show the tab's screen.
    Navigate { destination: &'static str },
}

/// Tabs event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TabsEvent {
    /// Intent event reduced by the tabs widget.
    Intent(TabsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(TabsEffect),
}
