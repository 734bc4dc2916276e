//! Nominal concrete cover conflicts

use super::entities::ConflictType;
use super::strategy::{Claim, ConflictStrategy};
use regex::Regex;
use std::sync::LazyLock;

static COVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:cover|krytí)[^0-9\n]{0,30}?(\d{2,3})\s*mm").expect("valid cover regex")
});

/// Compares the largest concrete cover each role asks for
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCoverStrategy;

impl ConflictStrategy for ConcreteCoverStrategy {
    fn conflict_type(&self) -> ConflictType {
        ConflictType::ConcreteCover
    }

    fn extract(&self, text: &str) -> Option<Claim> {
        COVER
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse::<u64>().ok())
            .max()
            .map(|mm| Claim::new(format!("{} mm", mm), mm))
    }
}
