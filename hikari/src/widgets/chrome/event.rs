/// Intent events handled by the header bar.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    MenuPressed,
    BackPressed,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeEffect {
    /// Flip the shell's drawer flag.
    ToggleSidebar,
    /// Pop the navigation stack.
    NavigateBack,
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
