use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use memory_match::game::{DEFAULT_FACES, MISMATCH_HIDE_DELAY, SelectOutcome, Session};

use super::board::{BOARD_COLUMNS, apply_tile_status, board_rows, build_board_grid};
use super::dialogs::show_finish_dialog;
use super::home::route_button;
use super::state::{AppState, Route};
use super::timer::HideTimer;

/// Widgets and rules of the game page. Dropping it cancels a pending hide.
pub struct GameView {
    pub session: Session,
    pub grid_buttons: Vec<gtk::Button>,
    pub moves_label: gtk::Label,
    pub hide_timer: Option<HideTimer>,
}

impl GameView {
    pub fn refresh_tile(&self, index: usize) {
        if let Some(button) = self.grid_buttons.get(index) {
            apply_tile_status(button, self.session.board().status(index));
        }
    }

    pub fn refresh_all(&self) {
        for index in 0..self.grid_buttons.len() {
            self.refresh_tile(index);
        }
        self.update_moves_label();
    }

    pub fn update_moves_label(&self) {
        self.moves_label.set_text(
            &gettext("Moves: {moves}").replace("{moves}", &self.session.moves().to_string()),
        );
    }
}

/// Deals a new game and builds the page for it.
///
/// The page is returned for the view stack; the view itself is stored in
/// `AppState::game` so the page lives exactly as long as the game does.
pub fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let session = Session::new(&DEFAULT_FACES, &mut rand::rng());
    let tile_count = session.board().len();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("memory-view");

    let moves_label = gtk::Label::new(None);
    moves_label.add_css_class("moves-label");
    moves_label.set_halign(gtk::Align::Center);
    moves_label.set_margin_top(16);

    let (grid, grid_buttons) = build_board_grid(state, tile_count);
    let rows = board_rows(tile_count).max(1);
    let grid_frame = gtk::AspectFrame::new(0.5, 0.5, BOARD_COLUMNS as f32 / rows as f32, false);
    grid_frame.set_halign(gtk::Align::Fill);
    grid_frame.set_valign(gtk::Align::Fill);
    grid_frame.set_hexpand(true);
    grid_frame.set_vexpand(true);
    grid_frame.set_margin_start(16);
    grid_frame.set_margin_end(16);
    grid_frame.set_child(Some(&grid));

    let home_button = route_button(state, &gettext("Back to Home"), Route::Home);
    home_button.set_margin_bottom(16);

    root.append(&moves_label);
    root.append(&grid_frame);
    root.append(&home_button);

    let view = GameView {
        session,
        grid_buttons,
        moves_label,
        hide_timer: None,
    };
    view.refresh_all();
    tracing::debug!(cards = tile_count, "dealt new game");
    state.borrow_mut().game = Some(view);

    root
}

pub fn handle_tile_click(state: &Rc<RefCell<AppState>>, index: usize) {
    let finished = {
        let mut guard = state.borrow_mut();
        let st = &mut *guard;
        let Some(game) = st.game.as_mut() else {
            return;
        };

        let outcome = game.session.select(index);
        tracing::debug!(index, ?outcome, moves = game.session.moves(), "card selected");
        match outcome {
            SelectOutcome::Ignored => return,
            SelectOutcome::Revealed { position } => game.refresh_tile(position),
            SelectOutcome::Matched { first, second } => {
                game.refresh_tile(first);
                game.refresh_tile(second);
            }
            SelectOutcome::Mismatched { first, second } => {
                game.refresh_tile(first);
                game.refresh_tile(second);
                game.hide_timer = Some(schedule_mismatch_hide(state, game.session.game_id()));
            }
        }
        game.update_moves_label();
        game.session.record_if_won(&mut st.records)
    };

    if let Some(record) = finished {
        tracing::info!(moves = record.moves, "game finished");
        show_finish_dialog(state, record.moves);
    }
}

fn schedule_mismatch_hide(state: &Rc<RefCell<AppState>>, game_id: u64) -> HideTimer {
    let state_weak = Rc::downgrade(state);
    HideTimer::schedule(MISMATCH_HIDE_DELAY, move || {
        let Some(state) = state_weak.upgrade() else {
            return;
        };
        let mut st = state.borrow_mut();
        let Some(game) = st.game.as_mut() else {
            return;
        };
        if game.session.game_id() != game_id {
            return;
        }
        if let Some(timer) = game.hide_timer.take() {
            timer.disarm();
        }
        if game.session.finish_mismatch() {
            game.refresh_all();
        }
    })
}

pub fn play_again(state: &Rc<RefCell<AppState>>) {
    let mut st = state.borrow_mut();
    let Some(game) = st.game.as_mut() else {
        return;
    };
    game.hide_timer = None;
    game.session.play_again(&mut rand::rng());
    game.refresh_all();
    tracing::debug!(game_id = game.session.game_id(), "dealt again");
}
