use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Definitions of a single word, grouped by the part of speech label the
/// dictionary service reported.
///
/// Buckets are only created by [`DefinitionSet::insert`], so a label never
/// maps to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSet {
    buckets: BTreeMap<String, Vec<String>>,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, part_of_speech: &str, definition: String) {
        self.buckets
            .entry(part_of_speech.to_owned())
            .or_default()
            .push(definition);
    }

    /// Total number of definitions across every part of speech.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, part_of_speech: &str) -> Option<&[String]> {
        self.buckets.get(part_of_speech).map(Vec::as_slice)
    }

    pub fn contains(&self, part_of_speech: &str, definition: &str) -> bool {
        self.get(part_of_speech)
            .is_some_and(|definitions| definitions.iter().any(|d| d == definition))
    }

    pub fn parts_of_speech(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(|key| &key[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(key, definitions)| (&key[..], definitions.as_slice()))
    }

    pub fn flatten(&self) -> Vec<&str> {
        self.buckets
            .values()
            .flat_map(|definitions| definitions.iter().map(|d| &d[..]))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
    ];

    /// The label the dictionary service uses for this part of speech.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech {0:?}")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        PartOfSpeech::ALL
            .into_iter()
            .find(|part_of_speech| part_of_speech.label() == label)
            .ok_or_else(|| UnknownPartOfSpeech(s.to_owned()))
    }
}
