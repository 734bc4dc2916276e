//! Prompt domain
//!
//! Assembles the single prompt sent to the reasoning agent for one role.

mod template;

pub use template::RolePrompt;
