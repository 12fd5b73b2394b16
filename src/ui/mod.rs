pub mod app;
mod board;
mod dialogs;
mod game_view;
mod home;
mod preferences;
mod records;
mod scene;
mod settings;
mod state;
mod timer;
