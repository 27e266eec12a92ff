use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{DefinitionSet, DictionaryError, NotFoundError};

#[derive(Debug, Deserialize)]
struct Entry {
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    part_of_speech: String,
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    definition: String,
}

/// Body of the service's 404 answer.
#[derive(Debug, Deserialize)]
struct NotFoundBody {
    title: Option<String>,
    message: Option<String>,
}

pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
    min_definitions: usize,
) -> Result<DefinitionSet, DictionaryError> {
    let url = definition_url(base_url, word)?;
    tracing::debug!(%url, "searching for definitions");
    let res = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;

    if res.status() == StatusCode::NOT_FOUND {
        let body = res.json::<NotFoundBody>().await.ok();
        let message = body
            .and_then(|body| body.message.or(body.title))
            .unwrap_or_else(|| format!("no definitions found for '{word}'"));
        return Err(DictionaryError::NotFound(NotFoundError::new(message)));
    }

    let body = res
        .error_for_status()
        .map_err(DictionaryError::Fetch)?
        .text()
        .await
        .map_err(DictionaryError::Fetch)?;
    parse_definitions(word, &body, min_definitions)
}

/// Appends `word` to `base_url` as one percent-encoded path segment.
fn definition_url(base_url: &str, word: &str) -> Result<Url, DictionaryError> {
    let mut url = Url::parse(base_url).map_err(|error| DictionaryError::Url(error.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| DictionaryError::Url(format!("{base_url} cannot take a path")))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

/// Groups the definitions of the first entry in a dictionary response by part
/// of speech.
///
/// Fails with [`DictionaryError::Parse`] when the body does not have the
/// expected shape and with [`DictionaryError::InsufficientDefinitions`] when
/// fewer than `min_definitions` definitions were found.
pub fn parse_definitions(
    word: &str,
    body: &str,
    min_definitions: usize,
) -> Result<DefinitionSet, DictionaryError> {
    let entries: Vec<Entry> =
        serde_json::from_str(body).map_err(|error| DictionaryError::Parse(error.to_string()))?;
    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::Parse("the response contains no entries".to_owned()))?;

    let mut definitions = DefinitionSet::new();
    for meaning in entry.meanings {
        let part_of_speech = meaning.part_of_speech.trim();
        if part_of_speech.is_empty() {
            tracing::debug!(word, "skipping a meaning without a part of speech");
            continue;
        }
        for definition in meaning.definitions {
            definitions.insert(part_of_speech, definition.definition);
        }
    }

    let found = definitions.total();
    if found < min_definitions {
        return Err(DictionaryError::InsufficientDefinitions {
            word: word.to_owned(),
            found,
            required: min_definitions,
        });
    }
    tracing::debug!(word, found, "parsed definitions");
    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOUN_AND_VERB: &str = r#"[
        {
            "word": "act",
            "phonetic": "/ækt/",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [{ "definition": "a thing", "synonyms": [], "antonyms": [] }]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        { "definition": "to act", "example": "act now" },
                        { "definition": "to do" }
                    ]
                }
            ]
        },
        {
            "word": "act",
            "meanings": [
                { "partOfSpeech": "noun", "definitions": [{ "definition": "ignored" }] }
            ]
        }
    ]"#;

    #[test]
    fn word_becomes_one_encoded_path_segment() {
        let base = "https://api.dictionaryapi.dev/api/v2/entries/en/";
        assert_eq!(
            definition_url(base, "act").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/act"
        );
        assert_eq!(
            definition_url(base.trim_end_matches('/'), "act").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/act"
        );
        assert_eq!(
            definition_url(base, "ice cream?#/x").unwrap().path(),
            "/api/v2/entries/en/ice%20cream%3F%23%2Fx"
        );
        assert!(matches!(
            definition_url("not a url", "act"),
            Err(DictionaryError::Url(_))
        ));
    }

    #[test]
    fn groups_first_entry_by_part_of_speech() {
        let definitions = parse_definitions("act", NOUN_AND_VERB, 3).unwrap();
        assert_eq!(definitions.total(), 3);
        assert_eq!(definitions.get("noun"), Some(&["a thing".to_owned()][..]));
        assert_eq!(
            definitions.get("verb"),
            Some(&["to act".to_owned(), "to do".to_owned()][..])
        );
        assert_eq!(definitions.parts_of_speech().count(), 2);
    }

    #[test]
    fn too_few_definitions_is_insufficient() {
        let body = r#"[{"meanings": [
            {"partOfSpeech": "noun", "definitions": [{"definition": "one"}, {"definition": "two"}]}
        ]}]"#;
        match parse_definitions("pair", body, 3) {
            Err(DictionaryError::InsufficientDefinitions {
                word,
                found,
                required,
            }) => {
                assert_eq!(word, "pair");
                assert_eq!(found, 2);
                assert_eq!(required, 3);
            }
            other => panic!("expected insufficient definitions, got {other:?}"),
        }
        assert_eq!(parse_definitions("pair", body, 2).unwrap().total(), 2);
    }

    #[test]
    fn unparsable_body_is_an_error() {
        for body in ["<html>oops</html>", "", "{}", "[]", r#"[{"word": "x"}]"#] {
            let result = parse_definitions("x", body, 3);
            assert!(
                matches!(result, Err(DictionaryError::Parse(_))),
                "{body:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn missing_fields_are_parse_errors() {
        let no_part_of_speech = r#"[{"meanings": [{"definitions": [{"definition": "a"}]}]}]"#;
        let no_definition = r#"[{"meanings": [{"partOfSpeech": "noun", "definitions": [{"example": "a"}]}]}]"#;
        let no_definitions = r#"[{"meanings": [{"partOfSpeech": "noun"}]}]"#;
        for body in [no_part_of_speech, no_definition, no_definitions] {
            assert!(matches!(
                parse_definitions("x", body, 0),
                Err(DictionaryError::Parse(_))
            ));
        }
    }

    #[test]
    fn meanings_without_definitions_leave_no_empty_bucket() {
        let body = r#"[{"meanings": [
            {"partOfSpeech": "adverb", "definitions": []},
            {"partOfSpeech": " ", "definitions": [{"definition": "unlabelled"}]},
            {"partOfSpeech": "noun", "definitions": [{"definition": "a"}, {"definition": "b"}, {"definition": "c"}]}
        ]}]"#;
        let definitions = parse_definitions("x", body, 3).unwrap();
        assert_eq!(definitions.get("adverb"), None);
        assert_eq!(definitions.parts_of_speech().collect::<Vec<_>>(), ["noun"]);
        assert!(definitions.iter().all(|(_, bucket)| !bucket.is_empty()));
    }
}
