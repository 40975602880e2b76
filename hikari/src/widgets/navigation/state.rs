use super::model::{Route, TabRoute};

/// Screen stack: a root tab with stack screens pushed on top.
#[derive(Debug)]
pub(crate) struct NavigationState {
    root: Route,
    pushed: Vec<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            root: Route::default(),
            pushed: Vec::new(),
        }
    }
}

impl NavigationState {
    pub(crate) fn current(&self) -> &Route {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Tab at the root of the stack.
    pub(crate) fn active_tab(&self) -> TabRoute {
        self.root.as_tab().unwrap_or(TabRoute::Library)
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Show `route`. Tabs reset the stack; other screens are pushed unless
    /// they are already on top. Returns whether the visible screen changed.
    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if let Route::Tab(tab) = route {
            if self.pushed.is_empty() && self.active_tab() == tab {
                return false;
            }
            self.pushed.clear();
            self.root = Route::Tab(tab);
            return true;
        }

        if self.current() == &route {
            return false;
        }
        self.pushed.push(route);
        true
    }

    /// Pop the top screen. Returns whether the visible screen changed.
    pub(crate) fn back(&mut self) -> bool {
        self.pushed.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationState;
    use crate::widgets::navigation::model::{Route, TabRoute};

    #[test]
    fn given_new_stack_when_created_then_library_is_shown_without_back() {
        let state = NavigationState::default();

        assert_eq!(state.current(), &Route::Tab(TabRoute::Library));
        assert_eq!(state.active_tab(), TabRoute::Library);
        assert!(!state.can_go_back());
    }

    #[test]
    fn given_stack_screen_when_navigated_then_it_is_pushed_over_the_tab() {
        let mut state = NavigationState::default();

        assert!(state.navigate(Route::Profile));

        assert_eq!(state.current(), &Route::Profile);
        assert_eq!(state.active_tab(), TabRoute::Library);
        assert!(state.can_go_back());
    }

    #[test]
    fn given_same_screen_on_top_when_navigated_again_then_stack_is_unchanged()
    {
        let mut state = NavigationState::default();
        state.navigate(Route::Settings);

        assert!(!state.navigate(Route::Settings));
        assert!(state.back());
        assert!(!state.can_go_back());
    }

    #[test]
    fn given_pushed_screens_when_tab_navigated_then_stack_resets_to_tab() {
        let mut state = NavigationState::default();
        state.navigate(Route::Profile);
        state.navigate(Route::About);

        assert!(state.navigate(Route::Tab(TabRoute::History)));

        assert!(!state.can_go_back());
        assert_eq!(state.current(), &Route::Tab(TabRoute::History));
        assert_eq!(state.active_tab(), TabRoute::History);
    }

    #[test]
    fn given_active_tab_only_when_same_tab_navigated_then_nothing_changes() {
        let mut state = NavigationState::default();
        assert!(!state.navigate(Route::Tab(TabRoute::Library)));
    }

    #[test]
    fn given_pushed_screen_when_back_then_previous_screen_is_restored() {
        let mut state = NavigationState::default();
        state.navigate(Route::Tab(TabRoute::Search));
        state.navigate(Route::About);

        assert!(state.back());
        assert_eq!(state.current(), &Route::Tab(TabRoute::Search));
        assert!(!state.back());
        assert!(!state.can_go_back());
    }
}
