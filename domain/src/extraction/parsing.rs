//! Pattern-based extraction.
//!
//! | Function | Looks for |
//! |----------|-----------|
//! | [`parse_confidence`] | `Confidence: 0.85`, `confidence 85%`, `Jistota: 70 %` |
//! | [`parse_warnings`] | lines starting with `⚠`, or `WARNING:` / `Varování:` / `Upozornění:` |
//! | [`parse_critical_issues`] | lines starting with `🚨`, `❌`, or `CRITICAL:` / `Kritické:` |
//!
//! A marked line whose body only says there is nothing to report (`None`,
//! `N/A`, `žádné`) is not a finding.

use super::{Extraction, OutputExtractor};
use regex::Regex;
use std::sync::LazyLock;

static CONFIDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:confidence|jistota|spolehlivost)(?:\s+(?:level|score|úroveň))?\W{0,4}(\d+(?:[.,]\d+)?)\s*(%)?")
        .expect("valid confidence regex")
});

/// Word markers must be followed by a colon ("WARNING:", "Critical issues:").
static WARNING_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:warnings?|varování|upozornění)(?:\s+\p{L}+)?\s*\**\s*:")
        .expect("valid warning marker regex")
});

static CRITICAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:critical|kritick[éáý])(?:\s+\p{L}+)?\s*\**\s*:")
        .expect("valid critical marker regex")
});

/// Bodies that report an empty list rather than a finding
static NOTHING_TO_REPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:none|n/?a|nothing|nic|žádn[éáý])(?:\s+(?:identified|found|noted|reported|beyond the above|zjištěn[oay]?|nalezen[oay]?))?[\s.!]*$",
    )
    .expect("valid empty-report regex")
});

struct Markers {
    symbols: &'static [&'static str],
    word: &'static LazyLock<Regex>,
}

static WARNING_MARKERS: Markers = Markers {
    symbols: &["⚠"],
    word: &WARNING_WORD,
};

static CRITICAL_MARKERS: Markers = Markers {
    symbols: &["🚨", "❌"],
    word: &CRITICAL_WORD,
};

/// Parse a confidence value, normalised to `[0, 1]`.
///
/// Values carrying `%` or greater than 1 are read as percentages.
///
/// ```
/// use council_domain::extraction::parse_confidence;
///
/// assert_eq!(parse_confidence("Confidence: 0.85"), Some(0.85));
/// assert_eq!(parse_confidence("confidence 90%"), Some(0.9));
/// assert_eq!(parse_confidence("no score given"), None);
/// ```
pub fn parse_confidence(text: &str) -> Option<f64> {
    let caps = CONFIDENCE.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    let value = if caps.get(2).is_some() || value > 1.0 {
        value / 100.0
    } else {
        value
    };
    Some(value.clamp(0.0, 1.0))
}

/// Warning lines, marker removed, in order of appearance without duplicates
pub fn parse_warnings(text: &str) -> Vec<String> {
    marked_lines(text, &WARNING_MARKERS)
}

/// Critical-issue lines, marker removed, in order of appearance without duplicates
pub fn parse_critical_issues(text: &str) -> Vec<String> {
    marked_lines(text, &CRITICAL_MARKERS)
}

fn marked_lines(text: &str, markers: &Markers) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for line in text.lines() {
        let Some(body) = strip_marker(line, markers) else {
            continue;
        };
        if body.is_empty() || NOTHING_TO_REPORT.is_match(&body) {
            continue;
        }
        if !found.iter().any(|f| f == &body) {
            found.push(body);
        }
    }
    found
}

/// The line's content after a leading marker, or `None` if it has none.
fn strip_marker(line: &str, markers: &Markers) -> Option<String> {
    let trimmed = line
        .trim()
        .trim_start_matches(['-', '*', '•', '>', '#'])
        .trim_start();

    let rest = match markers.symbols.iter().find(|m| trimmed.starts_with(**m)) {
        Some(symbol) => {
            let rest = trimmed[symbol.len()..].trim_start_matches(['\u{fe0f}', ' ']);
            // "⚠️ WARNING: ..." carries both markers
            match markers.word.find(rest) {
                Some(m) => &rest[m.end()..],
                None => rest,
            }
        }
        None => &trimmed[markers.word.find(trimmed)?.end()..],
    };

    let rest = rest
        .trim_start_matches(['*', ':', '-', '–', ' '])
        .trim_end_matches("**")
        .trim();
    Some(rest.to_string())
}

/// Default [`OutputExtractor`] backed by the pattern functions above
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl OutputExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> Extraction {
        Extraction {
            confidence: parse_confidence(text),
            warnings: parse_warnings(text),
            critical_issues: parse_critical_issues(text),
        }
    }
}
