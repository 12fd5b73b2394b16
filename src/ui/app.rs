use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use adw::prelude::*;
use gettextrs::gettext;
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;

use memory_match::config::AppConfig;

use super::dialogs::show_about_dialog;
use super::home::build_home_view;
use super::preferences::Preferences;
use super::scene::navigate;
use super::state::{AppState, Route};

pub const APP_ID: &str = "io.github.MemoryMatch";
const RESOURCE_PREFIX: &str = "/io/github/MemoryMatch";

pub fn run(config: AppConfig) -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }
        build_window(app, &config);
    });

    app.run()
}

fn build_window(app: &adw::Application, config: &AppConfig) {
    load_css();

    let state = Rc::new(RefCell::new(AppState::new(Preferences::new(config.background))));

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);

    let window_title = adw::WindowTitle::new(&gettext(Route::Home.title()), "");

    let menu_model = gio::Menu::new();
    menu_model.append(Some(gettext("About Memory Match").as_str()), Some("app.about"));
    menu_model.append(Some(gettext("Quit").as_str()), Some("app.quit"));
    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu_model)
        .build();

    let header = adw::HeaderBar::builder()
        .title_widget(&window_title)
        .build();
    header.add_css_class("flat");
    header.pack_end(&menu_button);

    let view_stack = gtk::Stack::new();
    view_stack.set_hexpand(true);
    view_stack.set_vexpand(true);
    view_stack.set_transition_duration(250);
    view_stack.add_named(&build_home_view(&state), Some(Route::Home.name()));
    view_stack.set_visible_child_name(Route::Home.name());

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&view_stack));

    let win = adw::ApplicationWindow::builder()
        .application(app)
        .title(gettext("Memory Match"))
        .default_width(config.window.width)
        .default_height(config.window.height)
        .content(&toolbar)
        .build();
    win.set_size_request(360, 520);

    {
        let mut st = state.borrow_mut();
        st.window = Some(win.clone());
        st.view_stack = Some(view_stack);
        st.window_title = Some(window_title);
    }

    let key_controller = gtk::EventControllerKey::new();
    key_controller.connect_key_pressed({
        let state = Rc::downgrade(&state);
        move |_, key, _, _| {
            let Some(state) = state.upgrade() else {
                return glib::Propagation::Proceed;
            };
            if key != gdk::Key::Escape {
                return glib::Propagation::Proceed;
            }
            let leave = {
                let st = state.borrow();
                let dialog_open = st
                    .window
                    .as_ref()
                    .is_some_and(|win| win.visible_dialog().is_some());
                st.route != Route::Home && !dialog_open
            };
            if leave {
                navigate(&state, Route::Home);
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        }
    });
    win.add_controller(key_controller);

    tracing::info!(background = %config.background, "window ready");
    win.present();
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("memory-match.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gdk::Display::default() else {
        tracing::warn!("no default display; skipping stylesheet");
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource(&format!("{RESOURCE_PREFIX}/style.css"));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
