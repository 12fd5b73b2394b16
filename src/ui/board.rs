use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::pango;
use gtk4::prelude::*;

use memory_match::game::TileStatus;

use super::game_view::handle_tile_click;
use super::state::AppState;

pub const BOARD_COLUMNS: usize = 6;
pub const TILE_GAP: i32 = 6;
const HIDDEN_FACE: &str = "?";

pub fn board_rows(tile_count: usize) -> usize {
    tile_count.div_ceil(BOARD_COLUMNS)
}

/// Lays out `tile_count` card buttons, six to a row.
pub fn build_board_grid(
    state: &Rc<RefCell<AppState>>,
    tile_count: usize,
) -> (gtk::Grid, Vec<gtk::Button>) {
    let grid = gtk::Grid::new();
    grid.add_css_class("memory-board");
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_row_homogeneous(true);
    grid.set_column_homogeneous(true);
    grid.set_halign(gtk::Align::Fill);
    grid.set_valign(gtk::Align::Fill);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let mut buttons = Vec::with_capacity(tile_count);

    for index in 0..tile_count {
        let aspect_frame = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(true)
            .vexpand(true)
            .build();

        let button = gtk::Button::builder()
            .css_classes(vec!["memory-card"])
            .build();
        button.set_hexpand(true);
        button.set_vexpand(true);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let state_draw = Rc::downgrade(state);
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let Some(state) = state_draw.upgrade() else {
                return;
            };
            let st = state.borrow();
            let Some(game) = st.game.as_ref() else {
                return;
            };
            let tiles = game.session.board().tiles();
            if index >= tiles.len() {
                return;
            }
            let tile = &tiles[index];
            let is_hidden = tile.status == TileStatus::Hidden;
            let text = if is_hidden { HIDDEN_FACE } else { tile.face.as_str() };

            let min_dim = width.min(height) as f64;
            let font_size = if is_hidden {
                min_dim * 0.34
            } else {
                min_dim * 0.42
            };

            cr.set_antialias(cairo::Antialias::Best);

            let layout = pangocairo::functions::create_layout(cr);
            let mut font_desc = pango::FontDescription::new();
            if is_hidden {
                font_desc.set_family("Cantarell, Noto Sans, sans");
                font_desc.set_weight(pango::Weight::Bold);
            } else {
                font_desc.set_family("Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans");
            }
            font_desc.set_size((font_size * pango::SCALE as f64) as i32);
            layout.set_font_description(Some(&font_desc));
            layout.set_text(text);

            let fg = area.style_context().color();
            cr.set_source_rgba(
                fg.red() as f64,
                fg.green() as f64,
                fg.blue() as f64,
                fg.alpha() as f64,
            );

            let (text_width, text_height) = layout.pixel_size();
            cr.move_to(
                (width as f64 - text_width as f64) / 2.0,
                (height as f64 - text_height as f64) / 2.0,
            );

            pangocairo::functions::show_layout(cr, &layout);
        });

        button.set_child(Some(&drawing_area));

        let state_click = Rc::downgrade(state);
        button.connect_clicked(move |_| {
            if let Some(state) = state_click.upgrade() {
                handle_tile_click(&state, index);
            }
        });

        aspect_frame.set_child(Some(&button));

        let x = (index % BOARD_COLUMNS) as i32;
        let y = (index / BOARD_COLUMNS) as i32;
        grid.attach(&aspect_frame, x, y, 1, 1);
        buttons.push(button);
    }

    (grid, buttons)
}

/// Syncs a card button's style classes with its tile.
pub fn apply_tile_status(button: &gtk::Button, status: TileStatus) {
    button.remove_css_class("active");
    button.remove_css_class("matched");
    match status {
        TileStatus::Hidden => {}
        TileStatus::Flipped => button.add_css_class("active"),
        TileStatus::Matched => button.add_css_class("matched"),
    }
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}
