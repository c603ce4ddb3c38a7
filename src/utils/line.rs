use crate::error::DecodeError;
use crate::utils::convert::{parse_float, parse_int};
use std::str::FromStr;

/// Substrings that start a trailing comment
pub const COMMENT_MARKERS: [&str; 3] = [";", "#", "//"];

/// First token of an aircraft roster line extending the previous record
pub const CONTINUATION_MARK: &str = "+";

/// Cut a line at the earliest comment marker and trim surrounding whitespace
pub fn strip_comments(line: &str) -> &str {
    let end = COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .unwrap_or(line.len());

    line[..end].trim()
}

/// Extract the section name from a header line like `[MAIN]`
///
/// Expects an already stripped line. Returns `None` for body lines.
pub fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Split a key/value line on the first whitespace
///
/// The value keeps its internal whitespace, so file names like
/// `$13.JG52_Bf 109E-4_white1.bmp` survive intact.
pub fn split_key_value(line: &str) -> Result<(&str, &str), DecodeError> {
    match line.trim().split_once(char::is_whitespace) {
        Some((key, value)) => Ok((key, value.trim_start())),
        None => Err(DecodeError::MissingValue(line.trim().to_string())),
    }
}

/// Whitespace-separated tokens of a record line with positional accessors
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
        }
    }

    /// Wrap tokens that were already split, e.g. a tail from [`Fields::rest`]
    pub fn from_tokens(tokens: &[&'a str]) -> Self {
        Self {
            tokens: tokens.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or an error naming how many tokens were expected
    pub fn get(&self, index: usize) -> Result<&'a str, DecodeError> {
        self.tokens
            .get(index)
            .copied()
            .ok_or(DecodeError::NotEnoughFields {
                expected: index + 1,
                found: self.tokens.len(),
            })
    }

    pub fn int<T: FromStr>(&self, index: usize) -> Result<T, DecodeError> {
        parse_int(self.get(index)?)
    }

    pub fn float(&self, index: usize) -> Result<f64, DecodeError> {
        parse_float(self.get(index)?)
    }

    /// Tokens from `start` to the end, empty if the line is shorter
    pub fn rest(&self, start: usize) -> &[&'a str] {
        self.tokens.get(start..).unwrap_or_default()
    }

    /// Fail unless the line has at least `count` tokens
    pub fn require(&self, count: usize) -> Result<(), DecodeError> {
        if self.tokens.len() < count {
            return Err(DecodeError::NotEnoughFields {
                expected: count,
                found: self.tokens.len(),
            });
        }
        Ok(())
    }

    /// Fail unless the line has exactly `count` tokens
    pub fn require_exactly(&self, count: usize) -> Result<(), DecodeError> {
        if self.tokens.len() != count {
            return Err(DecodeError::UnexpectedFieldCount {
                expected: count.to_string(),
                found: self.tokens.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok_eq, assert_some_eq};

    #[test]
    fn strip_comments_without_markers() {
        assert_eq!(strip_comments("  MAP Moscow/load.ini  "), "MAP Moscow/load.ini");
    }

    #[test]
    fn strip_comments_uses_earliest_marker() {
        assert_eq!(strip_comments("foo ; bar # baz // qux"), "foo");
        assert_eq!(strip_comments("foo // bar ; baz"), "foo");
        assert_eq!(strip_comments("foo # bar // baz"), "foo");
    }

    #[test]
    fn strip_comments_whole_line() {
        assert_eq!(strip_comments("; just a comment"), "");
        assert_eq!(strip_comments("   "), "");
    }

    #[test]
    fn section_name_of_header() {
        assert_some_eq!(section_name("[MAIN]"), "MAIN");
        assert_some_eq!(section_name("[0_Chief_Road]"), "0_Chief_Road");
        assert_some_eq!(section_name("[]"), "");
    }

    #[test]
    fn section_name_of_body_line() {
        assert_none!(section_name("MAP Moscow/load.ini"));
        assert_none!(section_name("[MAIN"));
        assert_none!(section_name("MAIN]"));
        assert_none!(section_name("["));
    }

    #[test]
    fn split_key_value_keeps_spaces_in_value() {
        assert_ok_eq!(
            split_key_value("skin0 $13.JG52_Bf 109E-4_white1.bmp"),
            ("skin0", "$13.JG52_Bf 109E-4_white1.bmp")
        );
        assert_ok_eq!(split_key_value("TIME   11.75"), ("TIME", "11.75"));
    }

    #[test]
    fn split_key_value_without_value() {
        assert_eq!(
            split_key_value("foo"),
            Err(DecodeError::MissingValue("foo".to_string()))
        );
    }

    #[test]
    fn fields_positional_access() {
        let fields = Fields::new("3_Chief  Ships.G5 1 60");
        assert_eq!(fields.len(), 4);
        assert_ok_eq!(fields.get(1), "Ships.G5");
        assert_ok_eq!(fields.int::<i32>(3), 60);
        assert_eq!(fields.rest(2), ["1", "60"]);
        assert!(fields.rest(10).is_empty());
    }

    #[test]
    fn fields_missing_token() {
        let fields = Fields::new("a b");
        assert_eq!(
            fields.get(2),
            Err(DecodeError::NotEnoughFields {
                expected: 3,
                found: 2
            })
        );
        assert_err!(fields.require(3));
        assert_err!(fields.require_exactly(1));
    }
}
