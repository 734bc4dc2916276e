//! Role templates read from a directory of markdown files

use super::builtin::BuiltinTemplateLoader;
use council_application::{RoleTemplateLoader, TemplateError};
use council_domain::{Role, capability};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Loads `<dir>/<template_id>.md` for each role
///
/// Roles without a file fall back to the built-in template unless the
/// loader is strict, in which case the role fails with
/// [`TemplateError::NotFound`].
#[derive(Debug, Clone)]
pub struct DirectoryTemplateLoader {
    dir: PathBuf,
    strict: bool,
}

impl DirectoryTemplateLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn template_path(&self, role: Role) -> PathBuf {
        self.dir
            .join(format!("{}.md", capability(role).template_id))
    }
}

impl RoleTemplateLoader for DirectoryTemplateLoader {
    fn load_role_template(&self, role: Role) -> Result<String, TemplateError> {
        let path = self.template_path(role);
        match fs::read_to_string(&path) {
            Ok(content) if !content.trim().is_empty() => {
                debug!("Loaded template: {:?}", path);
                Ok(content)
            }
            Ok(_) => Err(TemplateError::Unreadable {
                role,
                message: format!("{} is empty", path.display()),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if self.strict {
                    Err(TemplateError::NotFound(role))
                } else {
                    debug!("No template at {:?}, using built-in", path);
                    Ok(BuiltinTemplateLoader::template(role))
                }
            }
            Err(e) => Err(TemplateError::Unreadable {
                role,
                message: format!("{}: {}", path.display(), e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reads_role_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cost_estimator.md"), "Custom estimator").unwrap();

        let loader = DirectoryTemplateLoader::new(dir.path());

        assert_eq!(
            loader.load_role_template(Role::CostEstimator).unwrap(),
            "Custom estimator"
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let loader = DirectoryTemplateLoader::new(dir.path());

        let template = loader.load_role_template(Role::StandardsChecker).unwrap();

        assert_eq!(template, BuiltinTemplateLoader::template(Role::StandardsChecker));
    }

    #[test]
    fn test_strict_missing_file_fails() {
        let dir = tempdir().unwrap();
        let loader = DirectoryTemplateLoader::new(dir.path()).strict(true);

        let err = loader.load_role_template(Role::StandardsChecker).unwrap_err();

        assert!(matches!(err, TemplateError::NotFound(Role::StandardsChecker)));
    }

    #[test]
    fn test_empty_file_is_unreadable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("structural_engineer.md"), "  \n").unwrap();
        let loader = DirectoryTemplateLoader::new(dir.path());

        let err = loader.load_role_template(Role::StructuralEngineer).unwrap_err();

        assert!(matches!(err, TemplateError::Unreadable { .. }));
    }
}
