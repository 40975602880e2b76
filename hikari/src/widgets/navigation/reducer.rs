use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::model::Route;
use super::state::NavigationState;

/// Reduce a navigation intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavigationState,
    intent: NavigationIntent,
) -> Task<NavigationEvent> {
    Task::batch(
        apply(state, intent)
            .into_iter()
            .map(|effect| Task::done(NavigationEvent::Effect(effect))),
    )
}

/// Apply an intent to the stack and return the effects it produces.
pub(crate) fn apply(
    state: &mut NavigationState,
    intent: NavigationIntent,
) -> Vec<NavigationEffect> {
    match intent {
        NavigationIntent::Navigate { destination } => {
            let mut effects = Vec::new();
            let route = Route::resolve(&destination);
            if matches!(route, Route::NotFound(_)) {
                effects.push(NavigationEffect::Unmatched { destination });
            }
            if state.navigate(route) {
                effects.push(NavigationEffect::RouteChanged {
                    route: state.current().clone(),
                });
            }
            effects
        },
        NavigationIntent::Back => {
            if !state.back() {
                return Vec::new();
            }
            vec![NavigationEffect::RouteChanged {
                route: state.current().clone(),
            }]
        },
    }
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::widgets::navigation::event::{
        NavigationEffect, NavigationIntent,
    };
    use crate::widgets::navigation::model::{Route, TabRoute};
    use crate::widgets::navigation::state::NavigationState;

    fn navigate(destination: &str) -> NavigationIntent {
        NavigationIntent::Navigate {
            destination: destination.to_string(),
        }
    }

    #[test]
    fn given_profile_destination_when_navigated_then_route_change_is_emitted() {
        let mut state = NavigationState::default();

        let effects = apply(&mut state, navigate("/(tabs)/profile"));

        assert_eq!(
            effects,
            vec![NavigationEffect::RouteChanged {
                route: Route::Profile,
            }]
        );
    }

    #[test]
    fn given_unknown_destination_when_navigated_then_not_found_is_pushed_and_reported()
     {
        let mut state = NavigationState::default();

        let effects = apply(&mut state, navigate("/(tabs)/downloads"));

        assert_eq!(
            effects,
            vec![
                NavigationEffect::Unmatched {
                    destination: String::from("/(tabs)/downloads"),
                },
                NavigationEffect::RouteChanged {
                    route: Route::NotFound(String::from("/(tabs)/downloads")),
                },
            ]
        );
        assert!(state.can_go_back());
    }

    #[test]
    fn given_current_tab_when_navigated_again_then_nothing_is_emitted() {
        let mut state = NavigationState::default();

        assert!(apply(&mut state, navigate("/(tabs)")).is_empty());
    }

    #[test]
    fn given_pushed_screen_when_back_then_root_tab_change_is_emitted() {
        let mut state = NavigationState::default();
        apply(&mut state, navigate("/(tabs)/pesquisar"));
        apply(&mut state, navigate("/(tabs)/about"));

        let effects = apply(&mut state, NavigationIntent::Back);

        assert_eq!(
            effects,
            vec![NavigationEffect::RouteChanged {
                route: Route::Tab(TabRoute::Search),
            }]
        );
    }

    #[test]
    fn given_root_screen_when_back_then_nothing_is_emitted() {
        let mut state = NavigationState::default();

        assert!(apply(&mut state, NavigationIntent::Back).is_empty());
    }
}
