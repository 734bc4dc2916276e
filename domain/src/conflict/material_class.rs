//! Concrete strength class conflicts (EN 206 `C<fck>/<fck,cube>`)

use super::entities::ConflictType;
use super::strategy::{Claim, ConflictStrategy};
use regex::Regex;
use std::sync::LazyLock;

static STRENGTH_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bC\s?(\d{2,3})/(\d{2,3})\b").expect("valid strength class regex")
});

/// Compares the strongest concrete class each role asks for
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialClassStrategy;

impl ConflictStrategy for MaterialClassStrategy {
    fn conflict_type(&self) -> ConflictType {
        ConflictType::MaterialClass
    }

    fn extract(&self, text: &str) -> Option<Claim> {
        STRENGTH_CLASS
            .captures_iter(text)
            .filter_map(|caps| {
                let cylinder: u64 = caps[1].parse().ok()?;
                let cube: u64 = caps[2].parse().ok()?;
                Some(Claim::new(
                    format!("C{}/{}", cylinder, cube),
                    cylinder * 1000 + cube,
                ))
            })
            .max_by_key(|claim| claim.rank)
    }
}
