use rand::Rng;
use rand::seq::SliceRandom;

/// Faces dealt when no other set is given. Every face ends up on two cards.
pub const DEFAULT_FACES: [&str; 7] = ["🐶", "🐱", "🦊", "🐼", "🐨", "🐯", "🦁"];

/// A shuffled sequence of card faces. Fixed for the lifetime of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    faces: Vec<String>,
}

impl Deck {
    /// Deals `faces` twice and shuffles the result.
    ///
    /// `faces` must be non-empty and hold no duplicates, otherwise a face
    /// would show up on more than two cards.
    pub fn shuffled<S, R>(faces: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        debug_assert!(!faces.is_empty(), "face set must not be empty");
        debug_assert!(
            faces
                .iter()
                .enumerate()
                .all(|(i, a)| faces[i + 1..].iter().all(|b| a.as_ref() != b.as_ref())),
            "face set must not contain duplicates"
        );

        let mut values: Vec<String> = faces
            .iter()
            .chain(faces.iter())
            .map(|face| face.as_ref().to_string())
            .collect();
        values.shuffle(rng);
        Deck { faces: values }
    }

    /// Builds a deck in the given order, skipping the shuffle.
    pub fn from_faces<S: AsRef<str>>(faces: &[S]) -> Self {
        Deck {
            faces: faces.iter().map(|face| face.as_ref().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn into_faces(self) -> Vec<String> {
        self.faces
    }
}
