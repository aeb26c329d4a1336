//! Parsed templates and substitution.

use crate::config::OutputMode;
use crate::error::{MadlibError, Result};
use crate::layout::{unwrap, wrap};
use crate::template::{Token, concat, context_snippet, find_placeholders, substitute, tokenize};
use serde::Serialize;

/// One blank in a template, as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blank<'a> {
    /// 1-based position among the template's blanks.
    pub number: usize,
    /// Index of the placeholder in the token sequence.
    pub token_index: usize,
    /// Byte offset of the placeholder in the template text.
    pub offset: usize,
    /// What the user is asked for, e.g. `plural noun`.
    pub description: &'a str,
}

/// A tokenized template with its blanks located.
#[derive(Debug, Clone)]
pub struct Madlib {
    source: String,
    tokens: Vec<Token>,
    blanks: Vec<usize>,
}

impl Madlib {
    /// Tokenize `template` and find its blanks.
    pub fn parse(template: &str) -> Result<Self> {
        let tokens = tokenize(template)?;
        let blanks = find_placeholders(&tokens);
        Ok(Self {
            source: template.to_string(),
            tokens,
            blanks,
        })
    }

    /// The template text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn blank_count(&self) -> usize {
        self.blanks.len()
    }

    /// The template's blanks in order of appearance.
    pub fn blanks(&self) -> Vec<Blank<'_>> {
        self.blanks
            .iter()
            .enumerate()
            .map(|(i, &token_index)| {
                let token = &self.tokens[token_index];
                Blank {
                    number: i + 1,
                    token_index,
                    offset: token.start(),
                    description: token.placeholder_description().unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Text around a blank for its prompt, with the blank itself masked.
    pub fn context(&self, blank: &Blank<'_>, radius: usize, marker: &str) -> String {
        context_snippet(&self.tokens, blank.token_index, radius, marker)
    }

    /// Substitute one answer per blank into a copy of the tokens.
    ///
    /// # Errors
    ///
    /// Returns `MadlibError::UserError` unless exactly one answer is given
    /// for each blank.
    pub fn fill(&self, answers: &[String]) -> Result<Vec<Token>> {
        self.check_answer_count(answers.len())?;
        Ok(substitute(&self.tokens, &self.blanks, answers))
    }

    /// Fail unless `count` answers would fill every blank exactly once.
    pub fn check_answer_count(&self, count: usize) -> Result<()> {
        if count != self.blanks.len() {
            return Err(MadlibError::UserError(format!(
                "template has {} blank(s) but {} answer(s) were given",
                self.blanks.len(),
                count
            )));
        }
        Ok(())
    }
}

/// Lay out filled tokens for display.
pub fn render(tokens: &[Token], mode: OutputMode, width: usize) -> String {
    let text = concat(tokens);
    match mode {
        OutputMode::Wrapped => wrap(&text, width),
        OutputMode::Unwrapped => unwrap(&text),
    }
}
