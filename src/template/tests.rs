//! Tests for template tokenizing and placeholder handling.

use super::*;
use crate::error::{GroupError, MadlibError};
use crate::test_support::{EXAMPLE_DESCRIPTIONS, EXAMPLE_TEMPLATE, answers};
use proptest::prelude::*;

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::text).collect()
}

fn group_error(input: &str) -> (GroupError, usize) {
    match tokenize(input) {
        Err(MadlibError::UnbalancedGroup { reason, offset }) => (reason, offset),
        other => panic!("expected UnbalancedGroup for {:?}, got {:?}", input, other),
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

#[test]
fn test_group_keeps_interior_whitespace() {
    let tokens = tokenize("abc (d e f) ghi").unwrap();
    assert_eq!(texts(&tokens), vec!["abc", " ", "(d e f)", " ", "ghi"]);
}

#[test]
fn test_group_forces_split_without_whitespace() {
    let tokens = tokenize("a(b)c").unwrap();
    assert_eq!(texts(&tokens), vec!["a", "(b)", "c"]);
}

#[test]
fn test_each_delimiter_is_its_own_token() {
    let tokens = tokenize("a  b\t\nc").unwrap();
    assert_eq!(texts(&tokens), vec!["a", " ", " ", "b", "\t", "\n", "c"]);
    assert_eq!(tokens[1].kind(), TokenKind::Delimiter);
    assert_eq!(tokens[4].kind(), TokenKind::Delimiter);
    assert_eq!(tokens[5].kind(), TokenKind::Delimiter);
}

#[test]
fn test_group_spans_newlines_and_tabs() {
    let tokens = tokenize("x (a\tb\nc) y").unwrap();
    assert_eq!(texts(&tokens), vec!["x", " ", "(a\tb\nc)", " ", "y"]);
    assert_eq!(tokens[2].kind(), TokenKind::Group);
}

#[test]
fn test_adjacent_groups() {
    let tokens = tokenize("(a)(b)").unwrap();
    assert_eq!(texts(&tokens), vec!["(a)", "(b)"]);
}

#[test]
fn test_empty_group() {
    let tokens = tokenize("()").unwrap();
    assert_eq!(texts(&tokens), vec!["()"]);
    assert_eq!(tokens[0].kind(), TokenKind::Group);
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn test_token_kinds() {
    let tokens = tokenize("hi (aside) (@noun)").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plain,
            TokenKind::Delimiter,
            TokenKind::Group,
            TokenKind::Delimiter,
            TokenKind::Placeholder,
        ]
    );
}

#[test]
fn test_token_offsets_point_into_source() {
    let tokens = tokenize(EXAMPLE_TEMPLATE).unwrap();
    for token in &tokens {
        assert_eq!(
            &EXAMPLE_TEMPLATE[token.start()..token.start() + token.text().len()],
            token.text()
        );
    }
}

#[test]
fn test_concat_reproduces_template() {
    let tokens = tokenize(EXAMPLE_TEMPLATE).unwrap();
    assert_eq!(concat(&tokens), EXAMPLE_TEMPLATE);
}

#[test]
fn test_nested_group_is_rejected() {
    assert_eq!(group_error("a(b(c)d"), (GroupError::Nested, 3));
}

#[test]
fn test_unmatched_close_is_rejected() {
    assert_eq!(group_error("a)b"), (GroupError::UnmatchedClose, 1));
}

#[test]
fn test_close_after_group_is_rejected() {
    assert_eq!(group_error("(a))"), (GroupError::UnmatchedClose, 3));
}

#[test]
fn test_unterminated_group_is_rejected() {
    // Reported at the opening parenthesis.
    assert_eq!(group_error("a(b"), (GroupError::Unterminated, 1));
    assert_eq!(group_error("("), (GroupError::Unterminated, 0));
}

#[test]
fn test_offsets_are_bytes_not_chars() {
    assert_eq!(group_error("é)"), (GroupError::UnmatchedClose, 2));
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn test_find_single_placeholder() {
    let tokens = tokenize("they called him (@ proper noun) after his father").unwrap();
    assert_eq!(tokens[6].text(), "(@ proper noun)");
    assert_eq!(find_placeholders(&tokens), vec![6]);
}

#[test]
fn test_plain_groups_are_not_placeholders() {
    let tokens = tokenize("a (note) b (@noun) c").unwrap();
    assert_eq!(find_placeholders(&tokens), vec![6]);
}

#[test]
fn test_find_placeholders_in_order() {
    let tokens = tokenize(EXAMPLE_TEMPLATE).unwrap();
    let indices = find_placeholders(&tokens);
    assert_eq!(indices.len(), EXAMPLE_DESCRIPTIONS.len());
    assert!(indices.windows(2).all(|w| w[0] < w[1]));

    let descriptions: Vec<&str> = indices
        .iter()
        .filter_map(|&i| tokens[i].placeholder_description())
        .collect();
    assert_eq!(descriptions, EXAMPLE_DESCRIPTIONS);
}

#[test]
fn test_no_placeholders() {
    let tokens = tokenize("nothing to fill").unwrap();
    assert!(find_placeholders(&tokens).is_empty());
}

#[test]
fn test_context_snippet_replaces_target() {
    let tokens = tokenize("a b (@x) c d").unwrap();
    let snippet = context_snippet(&tokens, 4, 10, DEFAULT_BLANK_MARKER);
    assert_eq!(snippet, "...a b ______ c d...");
}

#[test]
fn test_context_snippet_limits_radius() {
    let tokens = tokenize("one two three (@x) four five six").unwrap();
    // Two tokens on each side of the blank.
    let snippet = context_snippet(&tokens, 6, 2, "__");
    assert_eq!(snippet, "...three __ four...");
}

#[test]
fn test_context_snippet_flattens_newlines() {
    let tokens = tokenize("line one\n(@x)\nline two").unwrap();
    let snippet = context_snippet(&tokens, 4, 10, "___");
    assert_eq!(snippet, "...line one ___ line two...");
}

#[test]
fn test_substitute_copies_tokens() {
    let tokens = tokenize("I (@verb) and (@verb) again").unwrap();
    let indices = find_placeholders(&tokens);
    let filled = substitute(&tokens, &indices, &answers(&["run", "jump"]));

    assert_eq!(concat(&filled), "I run and jump again");
    assert_eq!(concat(&tokens), "I (@verb) and (@verb) again");
    assert!(find_placeholders(&filled).is_empty());
}

proptest! {
    #[test]
    fn prop_tokens_reproduce_paren_free_input(s in "[a-z \t\n.,!]{0,64}") {
        let tokens = tokenize(&s).unwrap();
        prop_assert_eq!(concat(&tokens), s);
    }

    #[test]
    fn prop_delimiters_are_single_chars(s in "[a-z \t\n]{0,64}") {
        for token in tokenize(&s).unwrap() {
            if token.text().contains([' ', '\t', '\n']) {
                prop_assert_eq!(token.text().chars().count(), 1);
                prop_assert_eq!(token.kind(), TokenKind::Delimiter);
            }
        }
    }

    #[test]
    fn prop_balanced_groups_round_trip(
        words in prop::collection::vec("[a-z]{1,5}|\\(@?[a-z ]{0,5}\\)", 0..10),
    ) {
        let text = words.join(" ");
        let tokens = tokenize(&text).unwrap();
        prop_assert_eq!(concat(&tokens), text);
    }
}
