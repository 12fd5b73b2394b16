use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use memory_match::game::RecordsStore;

use super::home::route_button;
use super::state::{AppState, Route};

fn record_rows(records: &RecordsStore) -> Vec<String> {
    records
        .iter_numbered()
        .map(|(number, record)| record.label(number))
        .collect()
}

fn build_record_list(records: &RecordsStore) -> gtk::Box {
    let list = gtk::Box::new(gtk::Orientation::Vertical, 6);
    list.set_halign(gtk::Align::Center);

    if records.is_empty() {
        let empty = gtk::Label::new(Some(gettext("No records available").as_str()));
        empty.add_css_class("records-empty");
        list.append(&empty);
        return list;
    }

    for row in record_rows(records) {
        let label = gtk::Label::new(Some(row.as_str()));
        label.add_css_class("records-row");
        label.set_halign(gtk::Align::Start);
        list.append(&label);
    }
    list
}

/// Read-only list of finished games, oldest first.
pub fn build_records_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 16);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("memory-view");

    let title = gtk::Label::new(Some(gettext("Records").as_str()));
    title.add_css_class("view-title");
    title.set_margin_top(16);

    let list = build_record_list(&state.borrow().records);
    let scroller = gtk::ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vexpand(true)
        .child(&list)
        .build();

    let home_button = route_button(state, &gettext("Back to Home"), Route::Home);
    home_button.set_margin_bottom(16);

    root.append(&title);
    root.append(&scroller);
    root.append(&home_button);
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_match::game::GameRecord;

    #[test]
    fn rows_are_numbered_in_completion_order() {
        let mut records = RecordsStore::new();
        records.push(GameRecord { moves: 10 });
        records.push(GameRecord { moves: 7 });
        assert_eq!(
            record_rows(&records),
            vec!["Game 1: 10 moves".to_string(), "Game 2: 7 moves".to_string()]
        );
    }

    #[test]
    fn no_rows_without_records() {
        assert!(record_rows(&RecordsStore::new()).is_empty());
    }
}
