//! Conflict entities

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Known disagreement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Concrete strength class, e.g. C25/30 vs C30/37
    MaterialClass,
    /// Nominal concrete cover to reinforcement
    ConcreteCover,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::MaterialClass => "material_class",
            ConflictType::ConcreteCover => "concrete_cover",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConflictType::MaterialClass => "Concrete strength class",
            ConflictType::ConcreteCover => "Concrete cover",
        }
    }
}

impl std::fmt::Display for ConflictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A detected and resolved disagreement between roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub conflict_type: ConflictType,
    /// At least two roles, all of which produced output in this run
    pub roles_involved: Vec<Role>,
    /// One `"<Role>: <claim>"` line per involved role
    pub descriptions: Vec<String>,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Role>,
    /// Claim adopted by the resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
}

impl Conflict {
    pub fn involves(&self, role: Role) -> bool {
        self.roles_involved.contains(&role)
    }
}
