//! Extraction of exponent candidates from free text.

use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// An optional `M` and either 4 or more digits, or 1 to 3 digits followed by groups of
/// exactly 3 digits separated by a comma or whitespace. Group 1 holds the digits.
///
/// Word boundaries are ASCII only, so a non-ASCII letter or digit next to the number does not
/// hide it ("é127" yields 127).
static EXPONENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)M?([0-9]{4,}|[0-9]{1,3}(?:(?:,|\s+)[0-9]{3})*)(?-u:\b)")
        .expect("exponent pattern should compile")
});

/// A number found in text, with the literal it was spelled as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    text: &'a str,
    value: BigUint,
}

impl<'a> Candidate<'a> {
    /// The matched substring, including the `M` prefix and separators if present
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> BigUint {
        self.value
    }
}

/// Iterate over every candidate in the text in order of appearance, duplicates included.
pub fn find_candidates<'a>(text: &'a str) -> impl Iterator<Item = Candidate<'a>> + 'a {
    EXPONENT_PATTERN.captures_iter(text).filter_map(|caps| {
        let literal = caps.get(0)?.as_str();
        let digits: String = caps
            .get(1)?
            .as_str()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        match digits.parse::<BigUint>() {
            Ok(value) => Some(Candidate {
                text: literal,
                value,
            }),
            Err(e) => {
                debug!("dropping candidate {:?}: {}", literal, e);
                None
            }
        }
    })
}

/// Return the candidates in the text, deduplicated by value. The first spelling of each value
/// is kept and values are ordered by their first appearance.
pub fn extract_candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut seen = HashSet::new();
    find_candidates(text)
        .filter(|c| seen.insert(c.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<(&str, u64)> {
        extract_candidates(text)
            .into_iter()
            .map(|c| (c.text(), num_traits::ToPrimitive::to_u64(c.value()).unwrap()))
            .collect()
    }

    #[test]
    fn pattern_test() {
        assert_eq!(values("M127"), [("M127", 127)]);
        assert_eq!(values("see M127 now"), [("M127", 127)]);
        assert_eq!(values("2"), [("2", 2)]);
        assert_eq!(values("M136279841"), [("M136279841", 136279841)]);
        assert_eq!(values("136,279,841"), [("136,279,841", 136279841)]);
        assert_eq!(values("1 234 567"), [("1 234 567", 1234567)]);
        assert_eq!(values("M1\t234"), [("M1\t234", 1234)]);

        // groups must have exactly 3 digits
        assert_eq!(values("12,34"), [("12", 12), ("34", 34)]);
        assert_eq!(values("1234,567"), [("1234", 1234), ("567", 567)]);
        assert_eq!(values("1,2345"), [("1", 1), ("2345", 2345)]);
    }

    #[test]
    fn word_boundary_test() {
        assert!(extract_candidates("xM127x").is_empty());
        assert!(extract_candidates("M127x").is_empty());
        assert!(extract_candidates("MM127").is_empty());
        assert!(extract_candidates("no numbers here").is_empty());
        assert!(extract_candidates("").is_empty());
        assert_eq!(values("(M127)"), [("M127", 127)]);
        assert_eq!(values("M127, M521."), [("M127", 127), ("M521", 521)]);

        // boundaries only consider ASCII word characters
        assert_eq!(values("é127"), [("127", 127)]);
        assert_eq!(values("M127é"), [("M127", 127)]);
        assert_eq!(values("\u{663}4"), [("4", 4)]);
        assert!(extract_candidates("_M127").is_empty());
    }

    #[test]
    fn dedup_test() {
        assert_eq!(
            values("M136279841 is 136,279,841"),
            [("M136279841", 136279841)]
        );
        assert_eq!(
            values("M31, M7 and M31 again, then 127 and 7"),
            [("M31", 31), ("M7", 7), ("127", 127)]
        );
        assert_eq!(find_candidates("M31 31 M31").count(), 3);
    }

    #[test]
    fn big_value_test() {
        let c = extract_candidates("M123456789012345678901234567890");
        assert_eq!(c.len(), 1);
        assert_eq!(
            c[0].value().to_string(),
            "123456789012345678901234567890"
        );
    }
}
