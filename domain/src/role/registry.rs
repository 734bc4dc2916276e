//! Role Capability Registry
//!
//! Static, read-only catalogue of what each role needs to be invoked:
//! base temperature, prompt template id and the keywords that attract it
//! during classification. Built once on first access and shared by every
//! concurrent run.

use super::Role;
use crate::classification::keywords::{DESK, NORM, PRICE_CZ};
use crate::core::keyword_set::KeywordSet;
use std::sync::LazyLock;

/// Capability row for one role
#[derive(Debug, Clone, PartialEq)]
pub struct RoleCapability {
    pub role: Role,
    /// Sampling temperature before complexity adjustment
    pub base_temperature: f64,
    /// Identifier handed to the template loader
    pub template_id: &'static str,
    /// Lower-cased keywords (English + Czech); each distinct match scores +1
    pub keywords: KeywordSet,
}

static REGISTRY: LazyLock<Vec<RoleCapability>> = LazyLock::new(|| {
    vec![
        RoleCapability {
            role: Role::DocumentValidator,
            base_temperature: 0.2,
            template_id: Role::DocumentValidator.as_str(),
            keywords: KeywordSet::new(&[
                "check", "validate", "verify", "error", "mistake", "document", "drawing",
                "review", "kontrol", "zkontrol", "ověř", "chyb", "výkres", "dokument", "zpráv",
            ]),
        },
        RoleCapability {
            role: Role::StructuralEngineer,
            base_temperature: 0.3,
            template_id: Role::StructuralEngineer.as_str(),
            keywords: KeywordSet::new(&[
                "load", "beam", "column", "slab", "foundation", "footing", "span", "moment",
                "reinforcement", "structural", "bearing", "thickness", "deflection",
                "zatížení", "nosník", "sloup", DESK, "základ", "rozpětí", "výztuž",
                "statik", "únosnost", "tloušťk", "průhyb",
            ]),
        },
        RoleCapability {
            role: Role::ConcreteSpecialist,
            base_temperature: 0.3,
            template_id: Role::ConcreteSpecialist.as_str(),
            keywords: KeywordSet::new(&[
                "concrete", "cement", "mix", "exposure", "durability", "curing", "aggregate",
                "w/c", "beton", "směs", "expozi", "trvanlivost", "ošetřov", "kamenivo",
            ]),
        },
        RoleCapability {
            role: Role::StandardsChecker,
            base_temperature: 0.1,
            template_id: Role::StandardsChecker.as_str(),
            keywords: KeywordSet::new(&[
                "čsn", "csn", "en 206", "en 1992", "eurocode", "eurokód", "standard", NORM,
                "compliance", "requirement", "regulation", "soulad", "požadav", "předpis",
            ]),
        },
        RoleCapability {
            role: Role::CostEstimator,
            base_temperature: 0.2,
            template_id: Role::CostEstimator.as_str(),
            keywords: KeywordSet::new(&[
                "cost", "price", "budget", "otskp", "kros", "úrs", "quantity", "estimate",
                "code", PRICE_CZ, "náklad", "rozpočet", "rozpočt", "množství", "výkaz", "odhad",
                "kód",
            ]),
        },
    ]
});

/// All capability rows in canonical role order
pub fn capabilities() -> &'static [RoleCapability] {
    &REGISTRY
}

/// Capability row for a role
pub fn capability(role: Role) -> &'static RoleCapability {
    // Every Role variant has a row; index follows declaration order.
    &REGISTRY[role as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_row_in_order() {
        let rows = capabilities();
        assert_eq!(rows.len(), Role::ALL.len());
        for (row, role) in rows.iter().zip(Role::ALL) {
            assert_eq!(row.role, role);
            assert_eq!(capability(role).role, role);
        }
    }

    #[test]
    fn test_template_id_matches_role_id() {
        for role in Role::ALL {
            assert_eq!(capability(role).template_id, role.as_str());
        }
    }

    #[test]
    fn test_base_temperatures_leave_room_for_adjustment() {
        for row in capabilities() {
            assert!((0.0..=0.6).contains(&row.base_temperature), "{:?}", row.role);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for row in capabilities() {
            for kw in row.keywords.patterns() {
                assert_eq!(*kw, kw.to_lowercase(), "{:?}", row.role);
            }
        }
    }
}
