//! Core of the memory matching game: rules, records and startup settings.
//!
//! The GTK front end lives in the binary and only drives these types.

pub mod color;
pub mod config;
pub mod game;
