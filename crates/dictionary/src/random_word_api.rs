// https://random-word-api.herokuapp.com/home - number, length
// https://random-word-api.vercel.app/ - words, length, first letter // same word pool, different query names

use crate::DictionaryError;

pub(crate) async fn get_random_words(
    client: &reqwest::Client,
    url: &str,
    max: usize,
    length: Option<usize>,
) -> Result<Vec<String>, DictionaryError> {
    let mut req = client.get(url).query(&[("number", max)]);
    if let Some(length) = length {
        req = req.query(&[("length", length)]);
    }
    let res: reqwest::Response = req
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(DictionaryError::Fetch)?;
    let words = res
        .json::<Vec<String>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    tracing::debug!(count = words.len(), "fetched random words");
    Ok(words)
}
