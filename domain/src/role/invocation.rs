//! RoleInvocation value object

use super::Role;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A planned call to one role
///
/// `priority` orders execution: 0 runs first. Equal priorities keep their
/// insertion order (see
/// [`TaskClassification::roles_ordered`](crate::classification::TaskClassification::roles_ordered)).
///
/// # Example
///
/// ```
/// use council_domain::{Role, RoleInvocation};
///
/// let inv = RoleInvocation::new(Role::CostEstimator, 0.1, 0);
/// assert_eq!(inv.temperature(), 0.1);
/// assert!(RoleInvocation::try_new(Role::CostEstimator, 1.2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoleInvocation")]
pub struct RoleInvocation {
    role: Role,
    temperature: f64,
    priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

/// Unchecked wire form; deserialization goes through [`RoleInvocation::try_new`]
#[derive(Deserialize)]
struct RawRoleInvocation {
    role: Role,
    temperature: f64,
    priority: u32,
    #[serde(default)]
    context: Option<String>,
}

impl TryFrom<RawRoleInvocation> for RoleInvocation {
    type Error = DomainError;

    fn try_from(raw: RawRoleInvocation) -> Result<Self, Self::Error> {
        let inv = Self::try_new(raw.role, raw.temperature, raw.priority)?;
        Ok(match raw.context {
            Some(context) => inv.with_context(context),
            None => inv,
        })
    }
}

impl RoleInvocation {
    /// Create a new invocation
    ///
    /// # Panics
    /// Panics if `temperature` is outside `[0.0, 1.0]`. An out-of-range
    /// temperature is an internal invariant violation, never an input error.
    pub fn new(role: Role, temperature: f64, priority: u32) -> Self {
        match Self::try_new(role, temperature, priority) {
            Ok(inv) => inv,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a new invocation, rejecting out-of-range temperatures
    pub fn try_new(role: Role, temperature: f64, priority: u32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::InvalidTemperature(temperature));
        }
        Ok(Self {
            role,
            temperature,
            priority,
            context: None,
        })
    }

    /// Attach an invocation-specific context note
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}
