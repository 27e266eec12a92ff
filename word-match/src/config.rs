use std::env;
use std::str::FromStr;
use std::time::Duration;

use dictionary::{DictionaryConfig, DEFAULT_DICTIONARY_API_URL, DEFAULT_WORD_API_URL};

use crate::game::RetryPolicy;

pub struct Config {
    pub dictionary: DictionaryConfig,
    /// Words tried before a round gives up
    pub max_attempts: usize,
    /// Definitions the player sorts each round
    pub definitions_per_round: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str, default: usize| parse_or(lookup(key), default);

        let dictionary = DictionaryConfig {
            word_api_url: lookup("WORD_API_URL").unwrap_or_else(|| DEFAULT_WORD_API_URL.to_string()),
            dictionary_api_url: lookup("DICTIONARY_API_URL")
                .unwrap_or_else(|| DEFAULT_DICTIONARY_API_URL.to_string()),
            connect_timeout: Duration::from_millis(parsed("CONNECT_TIMEOUT_MS", 2000) as u64),
            read_timeout: Duration::from_millis(parsed("READ_TIMEOUT_MS", 2000) as u64),
            min_definitions: parsed("MIN_DEFINITIONS", 3),
        };

        Config {
            dictionary,
            max_attempts: parsed("MAX_ATTEMPTS", 10),
            definitions_per_round: parsed("DEFINITIONS_PER_ROUND", 3),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            min_definitions: self.dictionary.min_definitions,
            ..RetryPolicy::default()
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.dictionary.word_api_url, DEFAULT_WORD_API_URL);
        assert_eq!(config.dictionary.dictionary_api_url, DEFAULT_DICTIONARY_API_URL);
        assert_eq!(config.dictionary.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.dictionary.read_timeout, Duration::from_secs(2));
        assert_eq!(config.dictionary.min_definitions, 3);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.definitions_per_round, 3);
    }

    #[test]
    fn environment_overrides() {
        let config = config_from(&[
            ("WORD_API_URL", "http://localhost:9000/word"),
            ("MIN_DEFINITIONS", "5"),
            ("MAX_ATTEMPTS", " 4 "),
            ("READ_TIMEOUT_MS", "500"),
        ]);
        assert_eq!(config.dictionary.word_api_url, "http://localhost:9000/word");
        assert_eq!(config.dictionary.read_timeout, Duration::from_millis(500));

        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 4);
        assert_eq!(policy.min_definitions, 5);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = config_from(&[("MAX_ATTEMPTS", "many"), ("MIN_DEFINITIONS", "-1")]);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.dictionary.min_definitions, 3);
    }
}
