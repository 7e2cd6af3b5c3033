//! Watermark text is split into tokens so that word-wrapping can be done
//! without slicing strings mid-word.

use std::fmt;

/// The type of a [StringToken].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-whitespace characters.
    Text,
    /// A maximal run of whitespace characters (no line breaks).
    Whitespace,
    /// A single line break.
    LineBreak,
}

impl TokenKind {
    fn of_char(c: char) -> TokenKind {
        if c == '\n' {
            TokenKind::LineBreak
        } else if c.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Text
        }
    }
}

/// One token of watermark text.
#[derive(Debug, Clone, PartialEq)]
pub struct StringToken {
    text: String,
    kind: TokenKind,
}

impl StringToken {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// A normalized sequence of [StringToken]s.
///
/// Invariant: no whitespace token sits at the very start or end of the
/// collection, or adjacent to a line break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringTokenCollection {
    tokens: Vec<StringToken>,
}

impl StringTokenCollection {
    /// Tokenizes a string. Windows line endings are normalized to `\n`
    /// first, so line breaks are always single-character tokens.
    pub fn new(text: &str) -> StringTokenCollection {
        let text = text.replace("\r\n", "\n");
        let mut tokens: Vec<StringToken> = Vec::new();
        let mut current = String::new();
        let mut current_kind: Option<TokenKind> = None;

        for c in text.chars() {
            let kind = TokenKind::of_char(c);
            // Line breaks never coalesce; everything else groups into
            // maximal runs.
            if Some(kind) != current_kind || kind == TokenKind::LineBreak {
                if let Some(kind) = current_kind.take() {
                    if !current.is_empty() {
                        tokens.push(StringToken {
                            text: std::mem::take(&mut current),
                            kind,
                        });
                    }
                }
            }
            current.push(c);
            current_kind = Some(kind);
        }
        if let Some(kind) = current_kind {
            if !current.is_empty() {
                tokens.push(StringToken {
                    text: current,
                    kind,
                });
            }
        }

        StringTokenCollection::from_tokens(tokens)
    }

    /// Builds a collection from already-created tokens, re-establishing the
    /// normalization invariant.
    pub(crate) fn from_tokens(tokens: Vec<StringToken>) -> StringTokenCollection {
        let last = tokens.len().wrapping_sub(1);
        let tokens = tokens
            .iter()
            .enumerate()
            .filter(|(index, token)| {
                if token.kind != TokenKind::Whitespace {
                    return true;
                }
                if *index == 0 || *index == last {
                    return false;
                }
                tokens[index - 1].kind != TokenKind::LineBreak
                    && tokens[index + 1].kind != TokenKind::LineBreak
            })
            .map(|(_, token)| token.clone())
            .collect();
        StringTokenCollection { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[StringToken] {
        &self.tokens
    }

    /// How many non-whitespace text tokens the collection holds. Text with
    /// only one is a single word and cannot be wrapped any further.
    pub(crate) fn content_token_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Text)
            .count()
    }

    /// Drops any leading whitespace tokens.
    pub fn strip_leading_whitespace(&self) -> StringTokenCollection {
        let start = self
            .tokens
            .iter()
            .position(|token| token.kind != TokenKind::Whitespace)
            .unwrap_or(self.tokens.len());
        StringTokenCollection {
            tokens: self.tokens[start..].to_vec(),
        }
    }

    /// Splits off the next run of "content": everything up to and
    /// including the first non-whitespace token. Returns the content and
    /// the remainder, or `None` if no content token remains.
    pub fn next_content(&self) -> Option<(StringTokenCollection, StringTokenCollection)> {
        let first_content = self
            .tokens
            .iter()
            .position(|token| token.kind != TokenKind::Whitespace)?;
        let (content, remainder) = self.tokens.split_at(first_content + 1);
        Some((
            StringTokenCollection {
                tokens: content.to_vec(),
            },
            StringTokenCollection {
                tokens: remainder.to_vec(),
            },
        ))
    }

    /// Reassembles the tokens into display lines, splitting on line break
    /// tokens.
    pub fn strings(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for token in &self.tokens {
            if token.kind == TokenKind::LineBreak {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push_str(&token.text);
            }
        }
        lines.push(current);
        lines
    }
}

impl fmt::Display for StringTokenCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CONFIDENTIAL")]
    #[case("DO NOT COPY")]
    #[case("draft\nwatermark")]
    #[case("a  b\tc")]
    fn concatenation_round_trips(#[case] text: &str) {
        assert_eq!(StringTokenCollection::new(text).to_string(), text);
    }

    #[test]
    fn windows_line_endings_are_normalized() {
        let tokens = StringTokenCollection::new("one\r\ntwo");
        assert_eq!(tokens.to_string(), "one\ntwo");
        assert_eq!(tokens.strings(), vec!["one", "two"]);
    }

    #[test]
    fn whitespace_near_breaks_and_edges_is_stripped() {
        let tokens = StringTokenCollection::new("  one \n two  ");
        assert_eq!(tokens.to_string(), "one\ntwo");
    }

    #[test]
    fn token_runs_are_maximal() {
        let tokens = StringTokenCollection::new("ab  cd");
        let kinds: Vec<TokenKind> = tokens.tokens().iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Text, TokenKind::Whitespace, TokenKind::Text]
        );
        assert_eq!(tokens.tokens()[1].text(), "  ");
    }

    #[test]
    fn consecutive_line_breaks_stay_separate() {
        let tokens = StringTokenCollection::new("a\n\nb");
        let kinds: Vec<TokenKind> = tokens.tokens().iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Text,
                TokenKind::LineBreak,
                TokenKind::LineBreak,
                TokenKind::Text
            ]
        );
        assert_eq!(tokens.strings(), vec!["a", "", "b"]);
    }

    #[test]
    fn next_content_peels_one_word_at_a_time() {
        let tokens = StringTokenCollection::new("one two three");
        let (content, remainder) = tokens.next_content().unwrap();
        assert_eq!(content.to_string(), "one");
        let (content, remainder) = remainder.next_content().unwrap();
        assert_eq!(content.to_string(), " two");
        let (content, remainder) = remainder.next_content().unwrap();
        assert_eq!(content.to_string(), " three");
        assert!(remainder.next_content().is_none());
    }

    #[test]
    fn splittability() {
        assert_eq!(
            StringTokenCollection::new("single").content_token_count(),
            1
        );
        assert_eq!(
            StringTokenCollection::new("two words").content_token_count(),
            2
        );
    }

    #[test]
    fn strip_leading_whitespace_from_sliced_tokens() {
        let tokens = StringTokenCollection::new("one two");
        let (_, remainder) = tokens.next_content().unwrap();
        assert_eq!(remainder.to_string(), " two");
        assert_eq!(remainder.strip_leading_whitespace().to_string(), "two");
    }
}
