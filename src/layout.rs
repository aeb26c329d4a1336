//! Line layout transforms for rendered text.
//!
//! Two independent rendering strategies:
//! - [`wrap`] inserts line breaks at existing spaces/tabs once a line has
//!   reached the wrap width.
//! - [`unwrap`] flattens text onto one line, ideal for copy/paste.
//!
//! `unwrap` is not the inverse of `wrap`. A tab consumed at a break point
//! comes back as a space, and newlines that were in the original text are
//! flattened too.

/// Break `text` into lines of roughly `width` characters.
///
/// Scans left to right counting non-newline characters since the last line
/// break. When the count has reached `width` and the current character is a
/// space or tab, that character is replaced by a newline and the count
/// restarts. Newlines already in the text restart the count as well.
///
/// Words are never split, so a line runs past `width` when no whitespace
/// arrives in time. A `width` of 0 breaks at every space and tab.
pub fn wrap(text: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        match c {
            '\n' => {
                run = 0;
                wrapped.push(c);
            }
            ' ' | '\t' if run >= width => {
                run = 0;
                wrapped.push('\n');
            }
            _ => {
                run += 1;
                wrapped.push(c);
            }
        }
    }

    wrapped
}

/// Replace every newline in `text` with a single space.
pub fn unwrap(text: &str) -> String {
    text.replace('\n', " ")
}
