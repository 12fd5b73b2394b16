use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

use super::game_view::play_again;
use super::scene::navigate;
use super::state::{AppState, Route};

const RESPONSE_HOME: &str = "home";
const RESPONSE_AGAIN: &str = "again";

/// Shown once the last pair is found. It can only be left through one of
/// its two buttons.
pub fn show_finish_dialog(state: &Rc<RefCell<AppState>>, moves: u32) -> adw::AlertDialog {
    let heading = gettext("Congratulations!");
    let body = gettext("Game finished in {moves} moves!").replace("{moves}", &moves.to_string());
    let dialog = adw::AlertDialog::new(Some(heading.as_str()), Some(body.as_str()));
    dialog.add_response(RESPONSE_HOME, &gettext("Back to Home"));
    dialog.add_response(RESPONSE_AGAIN, &gettext("Play Again"));
    dialog.set_response_appearance(RESPONSE_AGAIN, adw::ResponseAppearance::Suggested);
    dialog.set_default_response(Some(RESPONSE_AGAIN));
    dialog.set_can_close(false);

    let state_response = Rc::downgrade(state);
    dialog.connect_response(None, move |_, response| {
        let Some(state) = state_response.upgrade() else {
            return;
        };
        match response {
            RESPONSE_AGAIN => play_again(&state),
            _ => navigate(&state, Route::Home),
        }
    });

    let parent = state.borrow().window.clone();
    dialog.present(parent.as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Memory Match")
        .application_icon(super::app::APP_ID)
        .version(env!("CARGO_PKG_VERSION"))
        .comments(gettext("Flip two cards at a time and find every pair."))
        .build();
    dialog.add_legal_section("Memory Match", None, gtk::License::MitX11, None);
    dialog.present(app.active_window().as_ref());
    dialog
}
