use std::time::Duration;

use super::board::Board;

/// How long a mismatched pair stays face-up before it is hidden again.
pub const MISMATCH_HIDE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    OneSelected {
        first: usize,
    },
    Resolving {
        first: usize,
        second: usize,
    },
    MismatchPause {
        first: usize,
        second: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: the card was already up, or the turn is busy.
    Ignored,
    /// First card of the turn is now face-up.
    Revealed { position: usize },
    Matched { first: usize, second: usize },
    /// Both cards stay face-up until the hide delay elapses.
    Mismatched { first: usize, second: usize },
}

impl SelectOutcome {
    pub fn completes_move(self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. }
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct TurnResolver {
    state: TurnState,
}

impl TurnResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        self.state == TurnState::Idle
    }

    pub fn reset(&mut self) {
        self.state = TurnState::Idle;
    }

    pub fn select(&mut self, board: &mut Board, position: usize) -> SelectOutcome {
        match self.state {
            TurnState::Idle => {
                if board.is_revealed(position) {
                    return SelectOutcome::Ignored;
                }
                board.reveal(position);
                self.state = TurnState::OneSelected { first: position };
                SelectOutcome::Revealed { position }
            }
            TurnState::OneSelected { first } => {
                if position == first || board.is_revealed(position) {
                    return SelectOutcome::Ignored;
                }
                board.reveal(position);
                self.state = TurnState::Resolving {
                    first,
                    second: position,
                };
                self.resolve(board)
            }
            TurnState::Resolving { .. } | TurnState::MismatchPause { .. } => {
                SelectOutcome::Ignored
            }
        }
    }

    fn resolve(&mut self, board: &mut Board) -> SelectOutcome {
        let TurnState::Resolving { first, second } = self.state else {
            return SelectOutcome::Ignored;
        };

        if board.face(first) == board.face(second) {
            board.mark_matched(first);
            board.mark_matched(second);
            self.state = TurnState::Idle;
            SelectOutcome::Matched { first, second }
        } else {
            self.state = TurnState::MismatchPause { first, second };
            SelectOutcome::Mismatched { first, second }
        }
    }

    /// Ends a mismatch pause by turning both cards back over.
    ///
    /// Returns `false` when there was no pause to end.
    pub fn elapse(&mut self, board: &mut Board) -> bool {
        let TurnState::MismatchPause { first, second } = self.state else {
            return false;
        };
        board.hide(first);
        board.hide(second);
        self.state = TurnState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::TileStatus;
    use crate::game::deck::Deck;

    fn board() -> Board {
        Board::new(Deck::from_faces(&["A", "B", "A", "B"]))
    }

    #[test]
    fn first_pick_moves_to_one_selected() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        assert_eq!(turn.select(&mut board, 0), SelectOutcome::Revealed { position: 0 });
        assert_eq!(turn.state(), TurnState::OneSelected { first: 0 });
        assert!(board.is_revealed(0));
    }

    #[test]
    fn picking_the_same_card_twice_is_ignored() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut board, 0);
        assert_eq!(turn.select(&mut board, 0), SelectOutcome::Ignored);
        assert_eq!(turn.state(), TurnState::OneSelected { first: 0 });
    }

    #[test]
    fn equal_faces_match_and_return_to_idle() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut board, 0);
        let outcome = turn.select(&mut board, 2);
        assert_eq!(outcome, SelectOutcome::Matched { first: 0, second: 2 });
        assert!(outcome.completes_move());
        assert!(turn.is_idle());
        assert_eq!(board.status(0), TileStatus::Matched);
        assert_eq!(board.status(2), TileStatus::Matched);
    }

    #[test]
    fn different_faces_pause_until_elapsed() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut board, 0);
        let outcome = turn.select(&mut board, 1);
        assert_eq!(outcome, SelectOutcome::Mismatched { first: 0, second: 1 });
        assert_eq!(turn.state(), TurnState::MismatchPause { first: 0, second: 1 });
        assert_eq!(board.revealed_count(), 2);

        assert!(turn.elapse(&mut board));
        assert!(turn.is_idle());
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn input_during_pause_is_ignored() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut board, 0);
        turn.select(&mut board, 1);
        assert_eq!(turn.select(&mut board, 2), SelectOutcome::Ignored);
        assert!(!board.is_revealed(2));
    }

    #[test]
    fn input_while_resolving_is_ignored() {
        let mut board = board();
        board.reveal(0);
        board.reveal(1);
        let mut turn = TurnResolver {
            state: TurnState::Resolving { first: 0, second: 1 },
        };
        assert_eq!(turn.select(&mut board, 2), SelectOutcome::Ignored);
        assert_eq!(turn.state(), TurnState::Resolving { first: 0, second: 1 });
        assert!(!board.is_revealed(2));
        assert_eq!(board.revealed_count(), 2);
    }

    #[test]
    fn matched_cards_cannot_be_picked_again() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut board, 0);
        turn.select(&mut board, 2);
        assert_eq!(turn.select(&mut board, 0), SelectOutcome::Ignored);
        turn.select(&mut board, 1);
        assert_eq!(turn.select(&mut board, 2), SelectOutcome::Ignored);
    }

    #[test]
    fn elapse_without_pause_does_nothing() {
        let mut board = board();
        let mut turn = TurnResolver::new();
        assert!(!turn.elapse(&mut board));
        turn.select(&mut board, 0);
        assert!(!turn.elapse(&mut board));
        assert!(board.is_revealed(0));
    }

    #[test]
    fn hide_delay_is_one_second() {
        assert_eq!(MISMATCH_HIDE_DELAY, Duration::from_secs(1));
    }
}
