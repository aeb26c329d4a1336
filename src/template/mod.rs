//! Template parsing for madlib.
//!
//! A template is plain text with blanks written as `(@description)`:
//!
//! ```text
//! They called him (@proper noun) after his father.
//! ```
//!
//! - **token.rs**: `Token` and its `TokenKind` classification
//! - **tokenizer.rs**: parenthesis-aware splitting of template text
//! - **placeholders.rs**: finding blanks, prompt context, substitution

mod placeholders;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use placeholders::{
    DEFAULT_BLANK_MARKER, DEFAULT_CONTEXT_TOKENS, context_snippet, find_placeholders, substitute,
};
pub use token::{Token, TokenKind, concat};
pub use tokenizer::tokenize;
