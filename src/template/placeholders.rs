//! Placeholder detection and prompt context.

use super::token::Token;
use crate::layout::unwrap;
use tracing::debug;

/// Marker shown in place of the blank being asked about.
pub const DEFAULT_BLANK_MARKER: &str = "______";

/// Number of tokens shown on each side of a blank.
pub const DEFAULT_CONTEXT_TOKENS: usize = 10;

/// Marker bracketing a context snippet.
const ELLIPSIS: &str = "...";

/// Indices of the placeholder tokens in `tokens`, in order of appearance.
pub fn find_placeholders(tokens: &[Token]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_placeholder())
        .map(|(index, token)| {
            debug!(index, text = token.text(), "found placeholder");
            index
        })
        .collect()
}

/// Render the text around the token at `target` for a prompt.
///
/// The target token is replaced by `blank`, up to `radius` tokens are kept
/// on each side, and the result is bracketed by `...` and flattened onto
/// one line.
pub fn context_snippet(tokens: &[Token], target: usize, radius: usize, blank: &str) -> String {
    let first = target.saturating_sub(radius);
    let last = target.saturating_add(radius);

    let mut snippet = String::from(ELLIPSIS);
    for (index, token) in tokens.iter().enumerate() {
        if index < first || index > last {
            continue;
        }
        if index == target {
            snippet.push_str(blank);
        } else {
            snippet.push_str(token.text());
        }
    }
    snippet.push_str(ELLIPSIS);

    unwrap(&snippet)
}

/// Copy `tokens`, replacing each placeholder in `indices` with the answer at
/// the same position. Answers beyond `indices.len()` are ignored.
pub fn substitute(tokens: &[Token], indices: &[usize], answers: &[String]) -> Vec<Token> {
    let mut filled = tokens.to_vec();
    for (&index, answer) in indices.iter().zip(answers) {
        if let Some(slot) = filled.get_mut(index) {
            *slot = slot.substituted(answer.as_str());
        }
    }
    filled
}
