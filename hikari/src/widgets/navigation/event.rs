use super::model::Route;

/// Intent events handled by the navigation widget.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    /// Show the screen registered under a route identifier.
    Navigate { destination: String },
    /// Return to the previous screen.
    Back,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    /// The visible screen changed.
    RouteChanged { route: Route },
    /// A destination did not resolve; the not-found screen is shown.
    Unmatched { destination: String },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
