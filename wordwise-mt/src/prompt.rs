//! Prompt construction for batch word translation

/// Marker preceding the JSON-encoded word array in the prompt
const WORDS_MARKER: &str = "Words: ";

/// Build the prompt asking the service to translate `words`
///
/// The word list is embedded as a JSON array so list boundaries stay
/// unambiguous even for words containing commas or spaces. The service is
/// told to answer with nothing but
/// `{"translations": [{"source": ..., "target": ...}]}`.
pub fn build_translation_prompt(
    words: &[String],
    source_language: &str,
    target_language: &str,
) -> String {
    // Serializing a slice of strings cannot fail
    let word_array = serde_json::to_string(words).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Translate each of the following {source} words into {target}.\n\
         Return ONLY a JSON object of the form \
         {{\"translations\": [{{\"source\": \"<{source} word>\", \"target\": \"<{target} translation>\"}}]}} \
         with one entry per word, using each word exactly as given for \"source\".\n\
         Do not use markdown, code fences, or any commentary.\n\
         {marker}{words}\n",
        source = source_language,
        target = target_language,
        marker = WORDS_MARKER,
        words = word_array,
    )
}

/// Recover the word array embedded by [`build_translation_prompt`]
pub(crate) fn words_from_prompt(prompt: &str) -> Option<Vec<String>> {
    prompt
        .lines()
        .find_map(|line| line.strip_prefix(WORDS_MARKER))
        .and_then(|array| serde_json::from_str(array).ok())
}
