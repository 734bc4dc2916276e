//! Role prompt template adapters

mod builtin;
mod directory;

pub use builtin::BuiltinTemplateLoader;
pub use directory::DirectoryTemplateLoader;
