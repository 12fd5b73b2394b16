use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use super::game_view::build_game_view;
use super::records::build_records_view;
use super::settings::build_settings_view;
use super::state::{AppState, Route};

/// Switches the window to `route`.
///
/// Home is built once at startup. Every other page is rebuilt on entry and
/// removed on exit, so a game always starts fresh and leaving it drops its
/// pending timer.
pub fn navigate(state: &Rc<RefCell<AppState>>, route: Route) {
    let (stack, previous) = {
        let mut st = state.borrow_mut();
        let Some(stack) = st.view_stack.clone() else {
            return;
        };
        let previous = st.route;
        if previous == Route::Game && route != Route::Game {
            st.game = None;
        }
        st.route = route;
        (stack, previous)
    };
    tracing::debug!(from = previous.name(), to = route.name(), "navigate");

    if route != Route::Home
        && let Some(stale) = stack.child_by_name(route.name())
    {
        stack.remove(&stale);
    }
    let page: Option<gtk::Widget> = match route {
        Route::Home => None,
        Route::Game => Some(build_game_view(state).upcast()),
        Route::Settings => Some(build_settings_view(state).upcast()),
        Route::Records => Some(build_records_view(state).upcast()),
    };
    if let Some(page) = page {
        stack.add_named(&page, Some(route.name()));
    }

    stack.set_transition_type(if route == Route::Home {
        gtk::StackTransitionType::SlideRight
    } else {
        gtk::StackTransitionType::SlideLeft
    });
    stack.set_visible_child_name(route.name());

    if previous != route
        && previous != Route::Home
        && let Some(old_page) = stack.child_by_name(previous.name())
    {
        stack.remove(&old_page);
    }

    let st = state.borrow();
    if let Some(title) = &st.window_title {
        title.set_title(&gettext(route.title()));
    }
}
