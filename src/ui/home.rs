use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use super::scene::navigate;
use super::state::{AppState, Route};

/// Pill button that navigates to `route` when clicked.
pub(super) fn route_button(
    state: &Rc<RefCell<AppState>>,
    label: &str,
    route: Route,
) -> gtk::Button {
    let button = gtk::Button::with_label(label);
    button.add_css_class("memory-button");
    button.add_css_class("pill");
    button.set_halign(gtk::Align::Center);
    let state = Rc::downgrade(state);
    button.connect_clicked(move |_| {
        if let Some(state) = state.upgrade() {
            navigate(&state, route);
        }
    });
    button
}

pub fn build_home_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("memory-view");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 16);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.set_vexpand(true);

    let title = gtk::Label::new(Some(gettext("Memory Game").as_str()));
    title.add_css_class("home-title");

    let start = route_button(state, &gettext("Start Game"), Route::Game);
    start.add_css_class("suggested-action");

    content.append(&title);
    content.append(&start);
    content.append(&route_button(state, &gettext("Settings"), Route::Settings));
    content.append(&route_button(state, &gettext("Records"), Route::Records));

    root.append(&content);
    root
}
