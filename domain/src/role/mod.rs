//! Specialist roles
//!
//! A role is a specialist persona invoked with a tailored prompt template and
//! sampling temperature. Roles form a closed set; the static
//! [`registry`] holds one capability row per role.
//!
//! Extending the catalogue means adding an enum variant and a registry row.

pub mod invocation;
pub mod registry;
mod entities;

pub use invocation::RoleInvocation;
pub use registry::{RoleCapability, capability, capabilities};
pub use entities::Role;
