//! Role template configuration from TOML (`[templates]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw template configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTemplatesConfig {
    /// Directory of `<role_id>.md` files
    pub dir: Option<PathBuf>,
    /// Fail roles whose file is missing instead of using the built-in template
    pub strict: bool,
}
