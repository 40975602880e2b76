use crate::widgets::navigation::TabRoute;

/// Highlighted tab.
#[derive(Debug)]
pub(crate) struct TabsState {
    active: TabRoute,
}

impl Default for TabsState {
    fn default() -> Self {
        Self {
            active: TabRoute::Library,
        }
    }
}

impl TabsState {
    pub(crate) fn active(&self) -> TabRoute {
        self.active
    }

    pub(crate) fn set_active(&mut self, tab: TabRoute) {
        self.active = tab;
    }
}
