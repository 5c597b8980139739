//! Parsing of the slash-command parameters.

use crate::github::IssueNumber;

/// Parameters sent by the chat platform. Absent parameters read as empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashParams {
    /// Shared secret configured for the repository.
    pub token: String,
    /// Space-separated issue numbers, each optionally prefixed with `#`.
    pub text: String,
}

/// One user-supplied issue reference with any leading `#` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueToken(String);

impl IssueToken {
    /// Wraps a raw token, stripping a single leading `#`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.strip_prefix('#').unwrap_or(raw).to_owned())
    }

    /// The token as shown back to the user.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Parses the token as an issue number.
    #[must_use]
    pub fn number(&self) -> Option<IssueNumber> {
        self.0.parse::<u64>().ok().map(IssueNumber::new)
    }
}

/// Splits the command text on single spaces into issue tokens, in order.
///
/// Empty segments left by leading, trailing, or repeated spaces are
/// skipped, so text made only of spaces yields no tokens.
#[must_use]
pub fn parse_issue_tokens(text: &str) -> Vec<IssueToken> {
    text.split(' ')
        .filter(|segment| !segment.is_empty())
        .map(IssueToken::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{IssueToken, parse_issue_tokens};
    use crate::github::IssueNumber;

    fn tokens(text: &str) -> Vec<String> {
        parse_issue_tokens(text)
            .iter()
            .map(|token| token.as_str().to_owned())
            .collect()
    }

    #[rstest]
    #[case::single("42", &["42"])]
    #[case::hashes("#1 #2 3", &["1", "2", "3"])]
    #[case::extra_spaces(" 1  2 ", &["1", "2"])]
    #[case::keeps_garbage("abc #7", &["abc", "7"])]
    fn splits_on_spaces_in_order(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(text), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    fn blank_text_has_no_tokens(#[case] text: &str) {
        assert!(parse_issue_tokens(text).is_empty(), "expected no tokens");
    }

    #[rstest]
    fn strips_only_one_hash() {
        let token = IssueToken::new("##5");
        assert_eq!(token.as_str(), "#5");
        assert!(token.number().is_none(), "##5 should not parse");
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("0", Some(0))]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn parses_non_negative_numbers(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(IssueToken::new(raw).number(), expected.map(IssueNumber::new));
    }
}
