//! Role value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Specialist identities that can be consulted for a question
///
/// Declaration order is the canonical order: it breaks ties between equally
/// scored roles during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    DocumentValidator,
    StructuralEngineer,
    ConcreteSpecialist,
    StandardsChecker,
    CostEstimator,
}

impl Role {
    /// All roles in canonical order
    pub const ALL: [Role; 5] = [
        Role::DocumentValidator,
        Role::StructuralEngineer,
        Role::ConcreteSpecialist,
        Role::StandardsChecker,
        Role::CostEstimator,
    ];

    /// Stable identifier, also used as the prompt template id
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::DocumentValidator => "document_validator",
            Role::StructuralEngineer => "structural_engineer",
            Role::ConcreteSpecialist => "concrete_specialist",
            Role::StandardsChecker => "standards_checker",
            Role::CostEstimator => "cost_estimator",
        }
    }

    /// Human-readable name used in transcripts and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::DocumentValidator => "Document Validator",
            Role::StructuralEngineer => "Structural Engineer",
            Role::ConcreteSpecialist => "Concrete Specialist",
            Role::StandardsChecker => "Standards Checker",
            Role::CostEstimator => "Cost Estimator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
