use rand::Rng;

use super::board::Board;
use super::deck::Deck;
use super::records::{GameRecord, RecordsStore};
use super::turn::{SelectOutcome, TurnResolver, TurnState};

/// One game from first pick to win, plus any "Play Again" rounds after it.
#[derive(Clone, Debug)]
pub struct Session {
    faces: Vec<String>,
    board: Board,
    turn: TurnResolver,
    moves: u32,
    recorded: bool,
    game_id: u64,
}

impl Session {
    pub fn new<S, R>(faces: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let faces: Vec<String> = faces.iter().map(|f| f.as_ref().to_string()).collect();
        let board = Board::new(Deck::shuffled(&faces, rng));
        Session {
            faces,
            board,
            turn: TurnResolver::new(),
            moves: 0,
            recorded: false,
            game_id: 1,
        }
    }

    /// Starts from a deck that is already dealt. Play Again reshuffles the
    /// deck's distinct faces.
    pub fn with_deck(deck: Deck) -> Self {
        let cards = deck.into_faces();
        let mut faces: Vec<String> = Vec::with_capacity(cards.len() / 2);
        for face in &cards {
            if !faces.contains(face) {
                faces.push(face.clone());
            }
        }
        Session {
            faces,
            board: Board::new(Deck::from_faces(&cards)),
            turn: TurnResolver::new(),
            moves: 0,
            recorded: false,
            game_id: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    /// Bumped on every new deal so stale timers can tell they are late.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn is_won(&self) -> bool {
        self.board.all_revealed()
    }

    pub fn select(&mut self, position: usize) -> SelectOutcome {
        if self.is_won() {
            return SelectOutcome::Ignored;
        }
        let outcome = self.turn.select(&mut self.board, position);
        if outcome.completes_move() {
            self.moves = self.moves.saturating_add(1);
        }
        outcome
    }

    pub fn finish_mismatch(&mut self) -> bool {
        self.turn.elapse(&mut self.board)
    }

    /// Appends this game's move count once the board is cleared.
    ///
    /// Safe to call after every selection; only the first call after a win
    /// writes a record.
    pub fn record_if_won(&mut self, records: &mut RecordsStore) -> Option<GameRecord> {
        if !self.is_won() || self.recorded {
            return None;
        }
        self.recorded = true;
        let record = GameRecord { moves: self.moves };
        records.push(record);
        Some(record)
    }

    pub fn play_again<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.game_id = self.game_id.wrapping_add(1);
        self.board = Board::new(Deck::shuffled(&self.faces, rng));
        self.turn.reset();
        self.moves = 0;
        self.recorded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // A at 0 and 3, B at 1 and 5, C at 2 and 4.
    fn session() -> Session {
        Session::with_deck(Deck::from_faces(&["A", "B", "C", "A", "C", "B"]))
    }

    fn solve(session: &mut Session) {
        for (first, second) in [(0, 3), (1, 5), (2, 4)] {
            session.select(first);
            session.select(second);
        }
    }

    fn sorted_faces(session: &Session) -> Vec<String> {
        let mut faces: Vec<String> = session
            .board()
            .tiles()
            .iter()
            .map(|t| t.face.clone())
            .collect();
        faces.sort();
        faces
    }

    #[test]
    fn new_session_is_idle_with_nothing_revealed() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = Session::new(&["A", "B", "C"], &mut rng);
        assert_eq!(session.board().len(), 6);
        assert_eq!(session.board().revealed_count(), 0);
        assert_eq!(session.turn_state(), TurnState::Idle);
        assert_eq!(session.moves(), 0);
        assert_eq!(sorted_faces(&session), vec!["A", "A", "B", "B", "C", "C"]);
    }

    #[test]
    fn with_deck_keeps_the_dealt_order() {
        let session = session();
        let faces: Vec<&str> = session
            .board()
            .tiles()
            .iter()
            .map(|t| t.face.as_str())
            .collect();
        assert_eq!(faces, vec!["A", "B", "C", "A", "C", "B"]);
        assert_eq!(session.faces, vec!["A", "B", "C"]);
        assert_eq!(session.turn_state(), TurnState::Idle);
        assert_eq!(session.board().revealed_count(), 0);
    }

    #[test]
    fn match_then_mismatch_walkthrough() {
        let mut session = session();

        session.select(0);
        assert_eq!(session.moves(), 0);
        session.select(3);
        assert_eq!(session.moves(), 1);
        assert_eq!(session.turn_state(), TurnState::Idle);
        assert_eq!(session.board().revealed_positions(), vec![0, 3]);

        session.select(2);
        session.select(1);
        assert_eq!(session.moves(), 2);
        assert_eq!(
            session.turn_state(),
            TurnState::MismatchPause {
                first: 2,
                second: 1
            }
        );

        assert!(session.finish_mismatch());
        assert_eq!(session.moves(), 2);
        assert_eq!(session.turn_state(), TurnState::Idle);
        assert_eq!(session.board().revealed_positions(), vec![0, 3]);
    }

    #[test]
    fn win_records_exactly_once() {
        let mut session = session();
        let mut records = RecordsStore::new();
        solve(&mut session);

        assert!(session.is_won());
        assert_eq!(session.moves(), 3);
        assert_eq!(session.record_if_won(&mut records), Some(GameRecord { moves: 3 }));
        assert_eq!(session.record_if_won(&mut records), None);
        assert_eq!(session.record_if_won(&mut records), None);
        assert_eq!(records.entries(), &[GameRecord { moves: 3 }]);
    }

    #[test]
    fn nothing_recorded_before_win() {
        let mut session = session();
        let mut records = RecordsStore::new();
        session.select(0);
        session.select(3);
        assert_eq!(session.record_if_won(&mut records), None);
        assert!(records.is_empty());
    }

    #[test]
    fn selections_after_win_are_ignored() {
        let mut session = session();
        solve(&mut session);
        assert_eq!(session.select(0), SelectOutcome::Ignored);
        assert_eq!(session.moves(), 3);
    }

    #[test]
    fn play_again_resets_the_game() {
        let mut session = session();
        let mut records = RecordsStore::new();
        solve(&mut session);
        session.record_if_won(&mut records);
        let old_id = session.game_id();

        let mut rng = StdRng::seed_from_u64(99);
        session.play_again(&mut rng);

        assert_eq!(session.moves(), 0);
        assert_eq!(session.turn_state(), TurnState::Idle);
        assert_eq!(session.board().revealed_count(), 0);
        assert_ne!(session.game_id(), old_id);
        assert_eq!(sorted_faces(&session), vec!["A", "A", "B", "B", "C", "C"]);
    }

    #[test]
    fn play_again_mid_pause_clears_pending_turn() {
        let mut session = session();
        session.select(0);
        session.select(1);

        let mut rng = StdRng::seed_from_u64(5);
        session.play_again(&mut rng);
        assert!(!session.finish_mismatch());
        assert_eq!(session.board().revealed_count(), 0);
    }
}
