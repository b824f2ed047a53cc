//! Static language definition consulted by the tokenizer.
//!
//! Three fixed alphabets drive the scanner: the reserved-word set, the
//! identifier character class, and the feature-delimiter codepoint families
//! used as in-source coloring toggles.

/// Number of feature slots available for in-source coloring marks.
pub const FEATURE_COUNT: usize = 6;

/// First codepoint of the positive-mark delimiter family (➀). Slot `k` opens
/// positively with `POSITIVE_BASE + k`.
pub const POSITIVE_BASE: char = '\u{2780}';

/// First codepoint of the negative-mark delimiter family (➊). Slot `k` opens
/// negatively with `NEGATIVE_BASE + k`.
pub const NEGATIVE_BASE: char = '\u{278A}';

/// Which delimiter family a feature delimiter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// The reserved keyword set, including the temporal operators.
///
/// Keywords are matched case-sensitively against complete identifier runs.
/// All entries are between 2 and 12 characters, which `is_keyword` uses for
/// cheap rejection.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "var",
    "all",
    "and",
    "as",
    "assert",
    "but",
    "check",
    "disj",
    "disjoint",
    "else",
    "enum",
    "exactly",
    "exh",
    "exhaustive",
    "expect",
    "extends",
    "fact",
    "for",
    "fun",
    "iden",
    "iff",
    "implies",
    "in",
    "Int",
    "int",
    "let",
    "lone",
    "module",
    "no",
    "none",
    "not",
    "one",
    "open",
    "or",
    "part",
    "partition",
    "pred",
    "private",
    "run",
    "seq",
    "set",
    "sig",
    "some",
    "String",
    "sum",
    "this",
    "univ",
    "eventually",
    "always",
    "after",
    "once",
    "historically",
    "since",
    "trigger",
    "previous",
    "until",
    "release",
    "Time",
];

/// Returns true if `word` exactly matches a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    let len = word.len();
    if !(2..=12).contains(&len) {
        return false;
    }
    KEYWORDS.iter().any(|kw| *kw == word)
}

/// Returns true if `c` can appear at the start, middle, or end of an
/// identifier run.
///
/// The double quote is deliberately part of the continuation class; a `"` can
/// only *begin* a string because the string check precedes identifier
/// classification in the scanner.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c == '$'
        || c == '_'
        || c == '"'
}

/// Classifies `c` as a feature delimiter, returning the slot it toggles and
/// the mark family it opens with.
pub fn feature_delimiter(c: char) -> Option<(usize, Polarity)> {
    let code = c as u32;
    let pos = POSITIVE_BASE as u32;
    let neg = NEGATIVE_BASE as u32;
    let count = FEATURE_COUNT as u32;
    if (pos..pos + count).contains(&code) {
        Some(((code - pos) as usize, Polarity::Positive))
    } else if (neg..neg + count).contains(&code) {
        Some(((code - neg) as usize, Polarity::Negative))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_exact_match_only() {
        assert!(is_keyword("int"));
        assert!(is_keyword("sig"));
        assert!(is_keyword("historically")); // the 12-char entry
        assert!(!is_keyword("integers")); // keyword prefix, not a keyword
        assert!(!is_keyword("Sig")); // case-sensitive
    }

    #[test]
    fn test_keyword_length_filter() {
        assert!(!is_keyword("a"));
        assert!(!is_keyword(""));
        assert!(!is_keyword("averyverylongidentifier"));
    }

    #[test]
    fn test_all_keywords_within_length_bounds() {
        for kw in KEYWORDS {
            assert!(
                (2..=12).contains(&kw.len()),
                "keyword {:?} outside the 2..=12 filter",
                kw
            );
        }
    }

    #[test]
    fn test_identifier_class() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('Z'));
        assert!(is_identifier_char('7'));
        assert!(is_identifier_char('$'));
        assert!(is_identifier_char('_'));
        assert!(is_identifier_char('"'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('-'));
        assert!(!is_identifier_char('\u{2780}'));
    }

    #[test]
    fn test_feature_delimiter_families() {
        assert_eq!(feature_delimiter('\u{2780}'), Some((0, Polarity::Positive)));
        assert_eq!(feature_delimiter('\u{2785}'), Some((5, Polarity::Positive)));
        assert_eq!(feature_delimiter('\u{278A}'), Some((0, Polarity::Negative)));
        assert_eq!(feature_delimiter('\u{278F}'), Some((5, Polarity::Negative)));
        // One past each family
        assert_eq!(feature_delimiter('\u{2786}'), None);
        assert_eq!(feature_delimiter('\u{2790}'), None);
        assert_eq!(feature_delimiter('x'), None);
    }
}
