//! Role template port

use council_domain::Role;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("No prompt template for role '{0}'")]
    NotFound(Role),

    #[error("Failed to read template for role '{role}': {message}")]
    Unreadable { role: Role, message: String },
}

/// Source of role prompt templates, keyed by the role's template id
pub trait RoleTemplateLoader: Send + Sync {
    fn load_role_template(&self, role: Role) -> Result<String, TemplateError>;
}
