use iced::Size;

/// Shell-level state shared across widgets.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    /// Open flag of the sidebar drawer. The drawer widget follows it.
    pub(crate) sidebar_visible: bool,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            sidebar_visible: false,
        }
    }

    /// Flip the drawer flag and return the new value.
    pub(crate) fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_visible = !self.sidebar_visible;
        self.sidebar_visible
    }

    /// Clear the drawer flag. Closing twice is the same as closing once.
    pub(crate) fn close_sidebar(&mut self) {
        self.sidebar_visible = false;
    }
}
