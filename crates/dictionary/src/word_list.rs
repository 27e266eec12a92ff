use rand::Rng;

use crate::DictionaryError;

const BUNDLED_WORDS: &str = include_str!("../assets/words.json");

/// Fallback words for when the random word service is unreachable or a word
/// turned out to have too few definitions.
#[derive(Debug, Clone)]
pub struct LocalWordList {
    words: Vec<String>,
}

impl LocalWordList {
    /// The 1000 words shipped inside the binary.
    pub fn bundled() -> Result<Self, DictionaryError> {
        Self::from_json(BUNDLED_WORDS)
    }

    /// Reads a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let words: Vec<String> = serde_json::from_str(json)?;
        if words.is_empty() {
            return Err(DictionaryError::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|word| &word[..])
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn bundled_list_has_a_thousand_plain_words() {
        let list = LocalWordList::bundled().unwrap();
        assert_eq!(list.len(), 1000);
        for index in 0..list.len() {
            let word = list.word_at(index).unwrap();
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "{word:?} at {index}"
            );
        }
    }

    #[test]
    fn word_at_is_bounds_checked() {
        let list = LocalWordList::from_json(r#"["alpha", "bravo", "charlie"]"#).unwrap();
        assert_eq!(list.word_at(0), Some("alpha"));
        assert_eq!(list.word_at(2), Some("charlie"));
        assert_eq!(list.word_at(3), None);

        let bundled = LocalWordList::bundled().unwrap();
        assert!(bundled.word_at(999).is_some());
        assert_eq!(bundled.word_at(1000), None);
    }

    #[test]
    fn random_word_comes_from_the_list() {
        let list = LocalWordList::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = list.random_word(&mut rng);
            assert!(list.words.iter().any(|w| w == word));
        }
    }

    #[test]
    fn rejects_empty_or_malformed_lists() {
        assert!(matches!(
            LocalWordList::from_json("[]"),
            Err(DictionaryError::EmptyWordList)
        ));
        assert!(matches!(
            LocalWordList::from_json("[1, 2]"),
            Err(DictionaryError::WordList(_))
        ));
    }
}
