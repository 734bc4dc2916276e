//! Pluggable conflict category

use super::entities::ConflictType;
use crate::role::Role;

/// A comparable value a role committed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Normalised display form, e.g. `C30/37` or `45 mm`
    pub value: String,
    /// Strictness; higher is stricter
    pub rank: u64,
}

impl Claim {
    pub fn new(value: impl Into<String>, rank: u64) -> Self {
        Self {
            value: value.into(),
            rank,
        }
    }
}

/// Outcome handed to [`ConflictStrategy::rationale`]
#[derive(Debug, Clone)]
pub struct Decision<'a> {
    pub winner: Role,
    pub claim: &'a Claim,
    /// Roles whose claim differs from the adopted one
    pub overruled: Vec<(Role, &'a Claim)>,
    /// True when the winner's authority, not strictness, decided
    pub by_authority: bool,
}

/// One conflict category: extractor, authority policy and rationale template
pub trait ConflictStrategy: Send + Sync {
    fn conflict_type(&self) -> ConflictType;

    /// The claim an output makes on this decision point, if any
    fn extract(&self, text: &str) -> Option<Claim>;

    /// Role whose claim overrides strictness ordering
    fn authority(&self) -> Option<Role> {
        Some(Role::StandardsChecker)
    }

    /// Resolution text recorded on the conflict
    fn rationale(&self, decision: &Decision<'_>) -> String {
        let overruled = decision
            .overruled
            .iter()
            .map(|(role, claim)| format!("{} ({})", claim.value, role))
            .collect::<Vec<_>>()
            .join(", ");
        if decision.by_authority {
            format!(
                "{} requires {}; regulatory authority overrides {}",
                decision.winner, decision.claim.value, overruled
            )
        } else {
            format!(
                "Stricter requirement {} ({}) adopted over {}",
                decision.claim.value, decision.winner, overruled
            )
        }
    }
}
