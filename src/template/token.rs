//! Token data model.

use serde::Serialize;
use std::fmt;

/// Characters that separate tokens outside of a group.
pub const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

/// Prefix that marks a group token as a placeholder.
pub const PLACEHOLDER_PREFIX: &str = "(@";

/// Returns true for space, tab and newline.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Classification of a token, derived once from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A single space, tab or newline.
    Delimiter,
    /// Text bounded by `(` and `)`.
    Group,
    /// A group whose text starts with `(@`; a blank to fill in.
    Placeholder,
    /// Anything else, including substituted answers.
    Plain,
}

impl TokenKind {
    /// Classify a token by inspecting its text.
    pub fn classify(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_delimiter(c) => TokenKind::Delimiter,
            _ if text.starts_with(PLACEHOLDER_PREFIX) => TokenKind::Placeholder,
            (Some('('), _) => TokenKind::Group,
            _ => TokenKind::Plain,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Delimiter => write!(f, "delimiter"),
            TokenKind::Group => write!(f, "group"),
            TokenKind::Placeholder => write!(f, "placeholder"),
            TokenKind::Plain => write!(f, "plain"),
        }
    }
}

/// A contiguous piece of template text.
///
/// Tokens are immutable; substitution builds a new token with
/// [`Token::substituted`] instead of editing the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    start: usize,
    kind: TokenKind,
}

impl Token {
    /// Create a token starting at byte offset `start` of its source,
    /// classifying it from its text.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let kind = TokenKind::classify(&text);
        Self { text, start, kind }
    }

    /// Build the token that replaces this one when a blank is filled.
    ///
    /// The answer is user text, so it is always [`TokenKind::Plain`]
    /// regardless of what it looks like.
    pub fn substituted(&self, answer: impl Into<String>) -> Self {
        Self {
            text: answer.into(),
            start: self.start,
            kind: TokenKind::Plain,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of this token in the source it was tokenized from.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == TokenKind::Placeholder
    }

    /// The description inside a placeholder, e.g. `plural noun` for
    /// `(@plural noun)`. Returns `None` for any other kind of token.
    pub fn placeholder_description(&self) -> Option<&str> {
        if !self.is_placeholder() {
            return None;
        }
        let inner = &self.text[PLACEHOLDER_PREFIX.len()..];
        Some(inner.strip_suffix(')').unwrap_or(inner))
    }
}

/// Concatenate token texts in order.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
