//! Prompt construction for the narration agent.

/// Upper bound on scraped characters embedded in a single prompt.
pub const MAX_CONTENT_CHARS: usize = 100_000;

const USER_PREAMBLE: &str = "You are given the following article content. \
Summarize it to a podcast script under 3000 characters, engaging and conversational, \
then convert to audio.";

/// Wraps scraped article text in the narration instruction.
pub fn build_user_prompt(content: &str) -> String {
    let content = match truncate_chars(content, MAX_CONTENT_CHARS) {
        Some(truncated) => {
            tracing::warn!(
                limit = MAX_CONTENT_CHARS,
                "Scraped content exceeds prompt budget, truncating"
            );
            truncated
        }
        None => content,
    };

    format!("{USER_PREAMBLE}\n\n<content>\n{content}\n</content>")
}

/// Shortens `script` to at most `max_chars` characters.
///
/// Cuts after the last sentence terminator that fits; falls back to a plain
/// character cut when the first sentence alone is too long.
pub fn clamp_script(script: &str, max_chars: usize) -> &str {
    let Some(head) = truncate_chars(script, max_chars) else {
        return script;
    };

    head.rfind(['.', '!', '?'])
        .map(|idx| &head[..=idx])
        .unwrap_or(head)
}

/// `Some(prefix)` of `max_chars` characters if `text` is longer, else `None`.
fn truncate_chars(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_idx, _)| &text[..byte_idx])
}
