//! Task classification
//!
//! Rule-based routing of a question to complexity, domains and an ordered
//! list of tuned role invocations. No reasoning-agent call is involved, so
//! classification is cheap, deterministic and auditable.
//!
//! ```text
//! question ─► domains ─► complexity ─► roles ─► temperatures ─► RFI ─► confidence
//! ```

pub mod classifier;
pub mod entities;
pub(crate) mod keywords;
pub mod rfi;

pub use classifier::{MAX_EMITTED_TEMPERATURE, TaskClassifier};
pub use entities::{Domain, TaskClassification, TaskComplexity};
