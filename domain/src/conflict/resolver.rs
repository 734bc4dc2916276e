//! Runs every conflict strategy over a set of role outputs

use super::concrete_cover::ConcreteCoverStrategy;
use super::entities::Conflict;
use super::material_class::MaterialClassStrategy;
use super::strategy::{Claim, ConflictStrategy, Decision};
use crate::orchestration::RoleOutput;
use crate::role::Role;
use tracing::debug;

/// Detects and resolves disagreements between roles
pub struct ConflictResolver {
    strategies: Vec<Box<dyn ConflictStrategy>>,
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::empty()
            .with_strategy(MaterialClassStrategy)
            .with_strategy(ConcreteCoverStrategy)
    }
}

impl ConflictResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with no categories registered
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl ConflictStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Detect conflicts in `outputs`, in strategy registration order.
    ///
    /// A conflict needs two or more roles with a claim and at least two
    /// distinct claimed values. Outputs are considered in the order given.
    pub fn resolve(&self, outputs: &[RoleOutput]) -> Vec<Conflict> {
        self.strategies
            .iter()
            .filter_map(|strategy| Self::resolve_one(strategy.as_ref(), outputs))
            .collect()
    }

    fn resolve_one(strategy: &dyn ConflictStrategy, outputs: &[RoleOutput]) -> Option<Conflict> {
        let claims: Vec<(Role, Claim)> = outputs
            .iter()
            .filter_map(|output| strategy.extract(&output.text).map(|c| (output.role, c)))
            .collect();

        if claims.len() < 2 {
            return None;
        }
        let first = &claims[0].1.value;
        if claims.iter().all(|(_, claim)| &claim.value == first) {
            return None;
        }

        let authority = strategy
            .authority()
            .and_then(|role| claims.iter().find(|(r, _)| *r == role));
        let by_authority = authority.is_some();
        let (winner, claim) = match authority {
            Some(found) => found,
            // max_by_key keeps the last maximum; fold keeps the earliest
            None => claims.iter().fold(&claims[0], |best, candidate| {
                if candidate.1.rank > best.1.rank {
                    candidate
                } else {
                    best
                }
            }),
        };

        let overruled = claims
            .iter()
            .filter(|(_, c)| c.value != claim.value)
            .map(|(role, c)| (*role, c))
            .collect();
        let decision = Decision {
            winner: *winner,
            claim,
            overruled,
            by_authority,
        };
        let resolution = strategy.rationale(&decision);

        debug!(
            conflict = strategy.conflict_type().as_str(),
            winner = winner.as_str(),
            value = %claim.value,
            "Resolved conflict"
        );

        Some(Conflict {
            conflict_type: strategy.conflict_type(),
            roles_involved: claims.iter().map(|(role, _)| *role).collect(),
            descriptions: claims
                .iter()
                .map(|(role, c)| format!("{}: {}", role, c.value))
                .collect(),
            resolution,
            winner: Some(*winner),
            resolved_value: Some(claim.value.clone()),
        })
    }
}

impl std::fmt::Debug for ConflictResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConflictResolver")
            .field(
                "strategies",
                &self
                    .strategies
                    .iter()
                    .map(|s| s.conflict_type().as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
