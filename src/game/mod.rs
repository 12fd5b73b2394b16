//! Rules of the matching game, free of any widget code.

pub mod board;
pub mod deck;
pub mod records;
pub mod session;
pub mod turn;

pub use board::TileStatus;
pub use deck::DEFAULT_FACES;
pub use records::{GameRecord, RecordsStore};
pub use session::Session;
pub use turn::{MISMATCH_HIDE_DELAY, SelectOutcome};
