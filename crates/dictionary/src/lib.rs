use std::time::Duration;

use dictionary_api::get_definitions;
use random_word_api::get_random_words;

mod dictionary;
mod dictionary_api;
mod random_word_api;
mod source;
mod word_list;

pub use dictionary::{DefinitionSet, PartOfSpeech, UnknownPartOfSpeech};
pub use dictionary_api::parse_definitions;
pub use source::{DefinitionSource, WordSource};
pub use word_list::LocalWordList;

pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
pub const DEFAULT_MIN_DEFINITIONS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("malformed dictionary entry: {0}")]
    Parse(String),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("'{word}' has {found} definitions, at least {required} are needed")]
    InsufficientDefinitions {
        word: String,
        found: usize,
        required: usize,
    },
    #[error("invalid word list: {0}")]
    WordList(#[from] serde_json::Error),
    #[error("the word list is empty")]
    EmptyWordList,
}

impl DictionaryError {
    /// True when the word was found but has too few definitions to play.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, DictionaryError::InsufficientDefinitions { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Endpoints and limits used by [`Dictionary`].
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub word_api_url: String,
    /// Base url, the word is appended as the last path segment.
    pub dictionary_api_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub min_definitions: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_api_url: DEFAULT_WORD_API_URL.to_owned(),
            dictionary_api_url: DEFAULT_DICTIONARY_API_URL.to_owned(),
            connect_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(2),
            min_definitions: DEFAULT_MIN_DEFINITIONS,
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
    words: LocalWordList,
}

impl Dictionary {
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()
            .map_err(DictionaryError::Fetch)?;
        Ok(Self {
            client,
            config,
            words: LocalWordList::bundled()?,
        })
    }

    pub fn local_words(&self) -> &LocalWordList {
        &self.words
    }

    pub async fn get_definitions(&self, word: &str) -> Result<DefinitionSet, DictionaryError> {
        get_definitions(
            &self.client,
            &self.config.dictionary_api_url,
            word,
            self.config.min_definitions,
        )
        .await
    }

    pub async fn get_random_words(
        &self,
        max: usize,
        length: Option<usize>,
    ) -> Result<Vec<String>, DictionaryError> {
        get_random_words(&self.client, &self.config.word_api_url, max, length).await
    }

    pub async fn get_random_word(&self) -> Result<String, DictionaryError> {
        self.get_random_words(1, None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DictionaryError::NotFound(NotFoundError::new(
                    "the random word service returned no words",
                ))
            })
    }
}
