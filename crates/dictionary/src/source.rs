use async_trait::async_trait;

use crate::{DefinitionSet, Dictionary, DictionaryError};

/// Supplies candidate words for a round.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// A word from the remote random word service.
    async fn fetch_random(&self) -> Result<String, DictionaryError>;

    /// A word from the bundled fallback list.
    async fn fetch_from_local_list(&self) -> Result<String, DictionaryError>;
}

/// Looks up the definitions of a word.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn fetch_definitions(&self, word: &str) -> Result<DefinitionSet, DictionaryError>;
}

#[async_trait]
impl WordSource for Dictionary {
    async fn fetch_random(&self) -> Result<String, DictionaryError> {
        self.get_random_word().await
    }

    async fn fetch_from_local_list(&self) -> Result<String, DictionaryError> {
        let word = self.local_words().random_word(&mut rand::thread_rng());
        Ok(word.to_owned())
    }
}

#[async_trait]
impl DefinitionSource for Dictionary {
    async fn fetch_definitions(&self, word: &str) -> Result<DefinitionSet, DictionaryError> {
        self.get_definitions(word).await
    }
}
