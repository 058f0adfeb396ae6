//! Text expectations for node assertions
//!
//! Plaintext of multi-line paragraphs keeps the source's soft breaks, so besides exact and
//! partial matches there is [`TextMatch::Flowed`], which compares with every whitespace run
//! collapsed to one space.

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
    /// Equal once whitespace runs (line breaks included) are collapsed.
    Flowed(String),
}

impl TextMatch {
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(actual, expected, "{}: text is {:?}", context, actual);
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix.as_str()),
                    "{}: expected text starting with {:?}, got {:?}",
                    context,
                    prefix,
                    actual
                );
            }
            TextMatch::Contains(needle) => {
                assert!(
                    actual.contains(needle.as_str()),
                    "{}: expected text containing {:?}, got {:?}",
                    context,
                    needle,
                    actual
                );
            }
            TextMatch::Flowed(expected) => {
                assert_eq!(
                    flow(actual),
                    flow(expected),
                    "{}: text is {:?}",
                    context,
                    actual
                );
            }
        }
    }
}

fn flow(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl From<&str> for TextMatch {
    fn from(expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(expected: String) -> Self {
        TextMatch::Exact(expected)
    }
}
