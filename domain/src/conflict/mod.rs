//! Conflict detection and resolution
//!
//! A conflict is a disagreement between two or more roles on the same
//! decision point, e.g. the concrete strength class. Each category is a
//! [`ConflictStrategy`]: it extracts a comparable claim from a role output,
//! names the role with regulatory authority, and words the rationale.
//! [`ConflictResolver`] runs every registered strategy over a run's outputs.
//!
//! Resolution policy:
//!
//! ```text
//! authority role holds a claim? ──yes──► authority wins
//!          │ no
//!          ▼
//! strictest claim wins (ties: earliest output)
//! ```

mod concrete_cover;
mod entities;
mod material_class;
mod resolver;
mod strategy;

pub use concrete_cover::ConcreteCoverStrategy;
pub use entities::{Conflict, ConflictType};
pub use material_class::MaterialClassStrategy;
pub use resolver::ConflictResolver;
pub use strategy::{Claim, ConflictStrategy, Decision};
