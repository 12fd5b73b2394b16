use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use memory_match::color::Rgb;

use super::home::route_button;
use super::state::{AppState, Route};

pub fn build_settings_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("memory-view");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 16);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);
    content.set_vexpand(true);

    let title = gtk::Label::new(Some(gettext("Settings").as_str()));
    title.add_css_class("view-title");

    let color_button = gtk::Button::with_label(&gettext("Change Background Color"));
    color_button.add_css_class("memory-button");
    color_button.add_css_class("pill");
    color_button.connect_clicked({
        let state = Rc::downgrade(state);
        move |_| {
            if let Some(state) = state.upgrade() {
                let color = Rgb::random(&mut rand::rng());
                let mut st = state.borrow_mut();
                let previous = st.preferences.background();
                st.preferences.set_background(color);
                tracing::debug!(%previous, %color, "background color changed");
            }
        }
    });

    // Only the built-in face set exists.
    let image_set_button = gtk::Button::with_label(&gettext("Change Image Set"));
    image_set_button.add_css_class("memory-button");
    image_set_button.add_css_class("pill");
    image_set_button.connect_clicked(|_| {
        tracing::debug!("image set change requested; only the built-in set is available");
    });

    content.append(&title);
    content.append(&color_button);
    content.append(&image_set_button);
    content.append(&route_button(state, &gettext("Back to Home"), Route::Home));

    root.append(&content);
    root
}
