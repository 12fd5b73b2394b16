use super::deck::Deck;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileStatus {
    Hidden,
    Flipped,
    Matched,
}

#[derive(Clone, Debug)]
pub struct Tile {
    pub face: String,
    pub status: TileStatus,
}

impl Tile {
    pub fn is_revealed(&self) -> bool {
        self.status != TileStatus::Hidden
    }
}

/// Cards laid out for one game.
///
/// Positions are indices into the deck. Passing a position outside the
/// board panics: the view only ever hands out positions it rendered.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new(deck: Deck) -> Self {
        let tiles = deck
            .into_faces()
            .into_iter()
            .map(|face| Tile {
                face,
                status: TileStatus::Hidden,
            })
            .collect();
        Board { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn face(&self, position: usize) -> &str {
        &self.tiles[position].face
    }

    pub fn status(&self, position: usize) -> TileStatus {
        self.tiles[position].status
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        self.tiles[position].is_revealed()
    }

    /// Turns a hidden card face-up. Already revealed cards are left alone.
    pub fn reveal(&mut self, position: usize) {
        let tile = &mut self.tiles[position];
        if tile.status == TileStatus::Hidden {
            tile.status = TileStatus::Flipped;
        }
    }

    pub fn hide(&mut self, position: usize) {
        self.tiles[position].status = TileStatus::Hidden;
    }

    pub fn mark_matched(&mut self, position: usize) {
        self.tiles[position].status = TileStatus::Matched;
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_revealed()).count()
    }

    #[cfg(test)]
    pub(crate) fn revealed_positions(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(idx, tile)| tile.is_revealed().then_some(idx))
            .collect()
    }

    pub fn all_revealed(&self) -> bool {
        !self.tiles.is_empty() && self.revealed_count() == self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(Deck::from_faces(&["A", "B", "A", "B"]))
    }

    #[test]
    fn new_board_starts_face_down() {
        let board = board();
        assert_eq!(board.len(), 4);
        assert_eq!(board.revealed_count(), 0);
        assert!(board.tiles().iter().all(|t| t.status == TileStatus::Hidden));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = board();
        board.reveal(1);
        board.reveal(1);
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.status(1), TileStatus::Flipped);
    }

    #[test]
    fn reveal_does_not_downgrade_a_match() {
        let mut board = board();
        board.mark_matched(0);
        board.reveal(0);
        assert_eq!(board.status(0), TileStatus::Matched);
    }

    #[test]
    fn hide_removes_from_revealed_set() {
        let mut board = board();
        board.reveal(2);
        board.reveal(3);
        board.hide(2);
        assert_eq!(board.revealed_positions(), vec![3]);
    }

    #[test]
    fn all_revealed_once_every_card_is_up() {
        let mut board = board();
        for idx in 0..board.len() {
            assert!(!board.all_revealed());
            board.mark_matched(idx);
        }
        assert!(board.all_revealed());
    }

    #[test]
    #[should_panic]
    fn out_of_range_position_panics() {
        let mut board = board();
        board.reveal(4);
    }
}
