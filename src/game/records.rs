/// Move count of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: u32,
}

impl GameRecord {
    /// Row text shown in the records list. `number` is 1-based.
    pub fn label(&self, number: usize) -> String {
        format!("Game {}: {} moves", number, self.moves)
    }
}

/// Finished games in completion order. Lives as long as the process.
#[derive(Clone, Debug, Default)]
pub struct RecordsStore {
    entries: Vec<GameRecord>,
}

impl RecordsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GameRecord) {
        self.entries.push(record);
    }

    pub fn entries(&self) -> &[GameRecord] {
        &self.entries
    }

    pub fn iter_numbered(&self) -> impl Iterator<Item = (usize, &GameRecord)> + '_ {
        self.entries.iter().enumerate().map(|(idx, record)| (idx + 1, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_completion_order_and_duplicates() {
        let mut store = RecordsStore::new();
        store.push(GameRecord { moves: 12 });
        store.push(GameRecord { moves: 9 });
        store.push(GameRecord { moves: 12 });

        let rows: Vec<(usize, u32)> = store.iter_numbered().map(|(n, r)| (n, r.moves)).collect();
        assert_eq!(rows, vec![(1, 12), (2, 9), (3, 12)]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn label_reads_game_number_and_moves() {
        assert_eq!(GameRecord { moves: 15 }.label(2), "Game 2: 15 moves");
    }

    #[test]
    fn new_store_is_empty() {
        let store = RecordsStore::new();
        assert!(store.is_empty());
        assert_eq!(store.iter_numbered().count(), 0);
    }
}
