/// Intent events handled by the sidebar drawer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// The shell's open flag changed.
    SetOpen(bool),
    /// Animation frame.
    Tick,
    /// Tap on the dimming overlay.
    OverlayPressed,
    /// Tap on the close button in the panel header.
    ClosePressed,
    /// Tap on a menu entry.
    EntrySelected { index: usize },
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// The drawer asks its owner to close it.
    CloseRequested,
    /// A menu entry asks the router to show its destination.
    Navigate { destination: &'static str },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
