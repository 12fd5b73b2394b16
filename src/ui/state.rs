use gtk4 as gtk;
use libadwaita as adw;

use memory_match::game::RecordsStore;

use super::game_view::GameView;
use super::preferences::Preferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Game,
    Settings,
    Records,
}

impl Route {
    /// Page name inside the view stack.
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Game => "game",
            Route::Settings => "settings",
            Route::Records => "records",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Memory Match",
            Route::Game => "Game",
            Route::Settings => "Settings",
            Route::Records => "Records",
        }
    }
}

pub struct AppState {
    pub window: Option<adw::ApplicationWindow>,
    pub view_stack: Option<gtk::Stack>,
    pub window_title: Option<adw::WindowTitle>,
    pub route: Route,
    pub preferences: Preferences,
    pub records: RecordsStore,
    /// Present only while the game page is on screen.
    pub game: Option<GameView>,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        AppState {
            window: None,
            view_stack: None,
            window_title: None,
            route: Route::Home,
            preferences,
            records: RecordsStore::new(),
            game: None,
        }
    }
}
