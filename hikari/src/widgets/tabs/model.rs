use crate::widgets::navigation::TabRoute;

/// Read-only snapshot for the tab bar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabsViewModel {
    pub(crate) tabs: &'static [TabRoute],
    pub(crate) active: TabRoute,
}
