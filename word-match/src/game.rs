use std::time::Duration;

use dictionary::{DefinitionSet, DefinitionSource, DictionaryError, NotFoundError, WordSource};
use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};

use crate::scoring::{Target, Verdict};

/// Bounds the search for a playable word.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub min_definitions: usize,
    /// Wait after the first transport failure, doubled after each further one
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            min_definitions: dictionary::DEFAULT_MIN_DEFINITIONS,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no playable word after {attempts} attempts, last error: {last_error}")]
    Exhausted {
        attempts: usize,
        #[source]
        last_error: DictionaryError,
    },
}

/// A definition picked at random, with the part of speech it was filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionPick<'a> {
    pub definition: &'a str,
    pub part_of_speech: &'a str,
}

/// One round of the game: a word and its definitions.
#[derive(Debug, Clone)]
pub struct GameState {
    word: String,
    definitions: DefinitionSet,
}

impl GameState {
    pub fn new(word: String, definitions: DefinitionSet) -> Self {
        Self { word, definitions }
    }

    /// Looks for a word with at least `policy.min_definitions` definitions.
    ///
    /// The first attempt asks the remote word service, every later attempt
    /// (and a first attempt whose remote call failed) draws from the local
    /// list. Transport failures back off before the next attempt; words that
    /// are unknown or too poorly defined are replaced immediately.
    pub async fn initialize<W, D>(
        words: &W,
        definitions: &D,
        policy: &RetryPolicy,
    ) -> Result<Self, GameError>
    where
        W: WordSource + ?Sized,
        D: DefinitionSource + ?Sized,
    {
        let max_attempts = policy.max_attempts.max(1);
        let mut backoff = policy.initial_backoff;
        let mut attempt = 1;
        loop {
            let error = match Self::attempt(words, definitions, attempt == 1, policy).await {
                Ok(state) => {
                    tracing::info!(
                        word = %state.word,
                        definitions = state.definitions.total(),
                        attempt,
                        "round ready"
                    );
                    return Ok(state);
                }
                Err(error) => error,
            };

            if attempt >= max_attempts {
                tracing::error!(attempts = attempt, %error, "giving up on finding a word");
                return Err(GameError::Exhausted {
                    attempts: attempt,
                    last_error: error,
                });
            }
            tracing::warn!(attempt, %error, "word rejected, trying another");
            if matches!(error, DictionaryError::Fetch(_)) {
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(policy.max_backoff);
            }
            attempt += 1;
        }
    }

    async fn attempt<W, D>(
        words: &W,
        definitions: &D,
        remote: bool,
        policy: &RetryPolicy,
    ) -> Result<Self, DictionaryError>
    where
        W: WordSource + ?Sized,
        D: DefinitionSource + ?Sized,
    {
        let word = if remote {
            match words.fetch_random().await {
                Ok(word) => word,
                Err(error) => {
                    tracing::warn!(%error, "random word service failed, using the local list");
                    words.fetch_from_local_list().await?
                }
            }
        } else {
            words.fetch_from_local_list().await?
        };
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(DictionaryError::NotFound(NotFoundError::new(
                "the word source returned a blank word",
            )));
        }

        let found = definitions.fetch_definitions(&word).await?;
        // is_empty matters when the minimum is configured as 0
        if found.total() < policy.min_definitions || found.is_empty() {
            return Err(DictionaryError::InsufficientDefinitions {
                found: found.total(),
                word,
                required: policy.min_definitions,
            });
        }
        Ok(Self::new(word, found))
    }

    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn all_definitions(&self) -> &DefinitionSet {
        &self.definitions
    }

    pub fn flattened_definitions(&self) -> Vec<&str> {
        self.definitions.flatten()
    }

    /// Picks a part of speech, then one of its definitions, both uniformly.
    /// Returns `None` when the word has no definitions.
    pub fn random_definition<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<DefinitionPick<'_>> {
        let part_of_speech = self.definitions.parts_of_speech().choose(rng)?;
        let definition = self.definitions.get(part_of_speech)?.choose(rng)?;
        tracing::debug!(part_of_speech, "served a random definition");
        Some(DefinitionPick {
            definition: definition.as_str(),
            part_of_speech,
        })
    }

    /// Up to `count` definitions in random order, each position drawn once.
    pub fn deal<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&str> {
        self.flattened_definitions()
            .choose_multiple(rng, count)
            .copied()
            .collect()
    }

    pub fn classify(&self, definition: &str, target: Target) -> Verdict {
        match target {
            Target::Other => Verdict::Skipped,
            Target::Category(part_of_speech) => {
                if self.definitions.contains(part_of_speech.label(), definition) {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                }
            }
        }
    }
}
