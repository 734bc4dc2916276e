//! Classification domain entities

use crate::role::{Role, RoleInvocation};
use serde::{Deserialize, Serialize};

/// How demanding a question is; drives temperature and role selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskComplexity {
    Simple,
    Standard,
    Complex,
    Creative,
}

impl TaskComplexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskComplexity::Simple => "simple",
            TaskComplexity::Standard => "standard",
            TaskComplexity::Complex => "complex",
            TaskComplexity::Creative => "creative",
        }
    }

    /// Temperature offset applied on top of a role's base temperature
    pub fn temperature_adjustment(&self) -> f64 {
        match self {
            TaskComplexity::Simple => -0.1,
            TaskComplexity::Standard => 0.0,
            TaskComplexity::Complex => 0.1,
            TaskComplexity::Creative => 0.3,
        }
    }

    /// Whether a final compliance check by the Standards Checker is mandatory
    pub fn requires_compliance_review(&self) -> bool {
        matches!(self, TaskComplexity::Complex | TaskComplexity::Creative)
    }
}

impl std::fmt::Display for TaskComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Knowledge domain touched by a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    Materials,
    Calculation,
    Design,
    Validation,
    Standards,
    Codes,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Materials,
        Domain::Calculation,
        Domain::Design,
        Domain::Validation,
        Domain::Standards,
        Domain::Codes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Materials => "materials",
            Domain::Calculation => "calculation",
            Domain::Design => "design",
            Domain::Validation => "validation",
            Domain::Standards => "standards",
            Domain::Codes => "codes",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a question (Entity, run-scoped)
///
/// Invariants upheld by [`TaskClassifier`](super::TaskClassifier):
/// - `domains` and `roles` are non-empty, roles are unique
/// - `requires_rfi` holds exactly when `missing_data` is non-empty
/// - `confidence` lies in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskClassification {
    pub complexity: TaskComplexity,
    pub domains: Vec<Domain>,
    pub roles: Vec<RoleInvocation>,
    pub requires_rfi: bool,
    pub missing_data: Vec<String>,
    pub confidence: f64,
}

impl TaskClassification {
    /// Invocations sorted by ascending priority; ties keep insertion order.
    pub fn roles_ordered(&self) -> Vec<RoleInvocation> {
        let mut ordered = self.roles.clone();
        // sort_by_key is stable
        ordered.sort_by_key(|inv| inv.priority());
        ordered
    }

    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|inv| inv.role() == role)
    }

    pub fn invocation(&self, role: Role) -> Option<&RoleInvocation> {
        self.roles.iter().find(|inv| inv.role() == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(roles: Vec<RoleInvocation>) -> TaskClassification {
        TaskClassification {
            complexity: TaskComplexity::Standard,
            domains: vec![Domain::Calculation],
            roles,
            requires_rfi: false,
            missing_data: vec![],
            confidence: 1.0,
        }
    }

    #[test]
    fn test_roles_ordered_by_priority() {
        let c = classification(vec![
            RoleInvocation::new(Role::StandardsChecker, 0.1, 3),
            RoleInvocation::new(Role::DocumentValidator, 0.2, 0),
            RoleInvocation::new(Role::StructuralEngineer, 0.3, 1),
        ]);
        let roles: Vec<Role> = c.roles_ordered().iter().map(|i| i.role()).collect();
        assert_eq!(
            roles,
            vec![
                Role::DocumentValidator,
                Role::StructuralEngineer,
                Role::StandardsChecker
            ]
        );
    }

    #[test]
    fn test_priority_ties_keep_insertion_order() {
        let c = classification(vec![
            RoleInvocation::new(Role::CostEstimator, 0.2, 1),
            RoleInvocation::new(Role::ConcreteSpecialist, 0.3, 1),
            RoleInvocation::new(Role::StructuralEngineer, 0.3, 0),
        ]);
        let roles: Vec<Role> = c.roles_ordered().iter().map(|i| i.role()).collect();
        assert_eq!(
            roles,
            vec![
                Role::StructuralEngineer,
                Role::CostEstimator,
                Role::ConcreteSpecialist
            ]
        );
    }

    #[test]
    fn test_complexity_serializes_upper_case() {
        let json = serde_json::to_string(&TaskComplexity::Creative).unwrap();
        assert_eq!(json, "\"CREATIVE\"");
        let json = serde_json::to_string(&Domain::Codes).unwrap();
        assert_eq!(json, "\"CODES\"");
    }

    #[test]
    fn test_compliance_review_only_for_demanding_tasks() {
        assert!(TaskComplexity::Complex.requires_compliance_review());
        assert!(TaskComplexity::Creative.requires_compliance_review());
        assert!(!TaskComplexity::Standard.requires_compliance_review());
        assert!(!TaskComplexity::Simple.requires_compliance_review());
    }
}
