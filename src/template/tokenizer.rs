//! Parenthesis-aware tokenizer.
//!
//! Splits template text into tokens. Space, tab and newline are delimiters
//! and become single-character tokens of their own. A `(` opens a group in
//! which delimiters are ordinary text; the group ends at the next `)`. Groups
//! are always split from their neighbours, even without surrounding
//! whitespace, so `a(b)c` yields `a`, `(b)`, `c`.
//!
//! Concatenating the token texts reproduces the input exactly.

use super::token::{Token, is_delimiter};
use crate::error::{GroupError, MadlibError, Result};
use tracing::trace;

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not inside a group.
    Outside,
    /// Inside a group opened at byte offset `open`.
    InGroup { open: usize },
}

/// Split `text` into tokens.
///
/// # Errors
///
/// Returns `MadlibError::UnbalancedGroup` on the first nested `(`, the first
/// `)` without an open group, or when the input ends inside a group. No
/// partial token list is returned.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut state = State::Outside;
    // Start of the token currently being accumulated.
    let mut pending = 0;

    for (offset, c) in text.char_indices() {
        match (state, c) {
            (State::InGroup { .. }, '(') => {
                return Err(unbalanced(GroupError::Nested, offset));
            }
            (State::Outside, '(') => {
                push_span(&mut tokens, text, pending, offset);
                pending = offset;
                state = State::InGroup { open: offset };
            }
            (State::Outside, ')') => {
                return Err(unbalanced(GroupError::UnmatchedClose, offset));
            }
            (State::InGroup { open }, ')') => {
                let end = offset + c.len_utf8();
                push_span(&mut tokens, text, open, end);
                pending = end;
                state = State::Outside;
            }
            (State::Outside, c) if is_delimiter(c) => {
                let end = offset + c.len_utf8();
                push_span(&mut tokens, text, pending, offset);
                push_span(&mut tokens, text, offset, end);
                pending = end;
            }
            _ => {}
        }
    }

    if let State::InGroup { open } = state {
        return Err(unbalanced(GroupError::Unterminated, open));
    }
    push_span(&mut tokens, text, pending, text.len());

    trace!(tokens = tokens.len(), bytes = text.len(), "tokenized template");
    Ok(tokens)
}

/// Emit `text[start..end]` as a token if it is non-empty.
fn push_span(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    if start < end {
        tokens.push(Token::new(&text[start..end], start));
    }
}

fn unbalanced(reason: GroupError, offset: usize) -> MadlibError {
    MadlibError::UnbalancedGroup { reason, offset }
}
