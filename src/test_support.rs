//! Shared fixtures for unit tests.

/// A complete template with six blanks.
pub(crate) const EXAMPLE_TEMPLATE: &str = "This time every year I (@verb) all the time because I get \
     really exciting thinking about holiday (@plural noun)! That’s why I was sitting at the \
     (@room of house): I was really hoping (@a relative) would come by and give me at least \
     (@a number) pieces of holiday (@food item)!";

/// Descriptions of the blanks in [`EXAMPLE_TEMPLATE`], in order.
pub(crate) const EXAMPLE_DESCRIPTIONS: [&str; 6] = [
    "verb",
    "plural noun",
    "room of house",
    "a relative",
    "a number",
    "food item",
];

/// Convert string literals into owned answers.
pub(crate) fn answers(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
