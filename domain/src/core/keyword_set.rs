//! Keyword matching anchored at word starts

use regex::RegexSet;

/// Case-insensitive keyword set where every entry must begin a word.
///
/// Entries are regex fragments with an implicit leading `\b`, so a stem
/// such as `základ` or `calculat` still catches its inflected forms while
/// `span` no longer fires inside `lifespan`. Entries that must not run on
/// into a longer word end with their own `\b` (`norm[aěyu]?\b` keeps
/// `normal` out).
///
/// ```
/// use council_domain::core::keyword_set::KeywordSet;
///
/// let set = KeywordSet::new(&["základ", r"desk(?:a|y|u)?\b"]);
/// assert!(set.is_match("základová deska"));
/// assert!(!set.is_match("desktop"));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSet {
    set: RegexSet,
}

impl KeywordSet {
    /// Compile a keyword table.
    ///
    /// Tables are static source literals; a malformed entry is a programming
    /// error and panics on first use.
    pub fn new(keywords: &[&str]) -> Self {
        let patterns = keywords.iter().map(|kw| format!(r"(?i)\b(?:{})", kw));
        Self {
            set: RegexSet::new(patterns).expect("valid keyword table"),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    /// Number of distinct entries found in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        self.set.matches(text).iter().count()
    }

    /// Source fragments, one per entry
    pub fn patterns(&self) -> &[String] {
        self.set.patterns()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.patterns() == other.patterns()
    }
}
