//! Command implementations for the Unfurl CLI

pub mod completions;
pub mod imports;
pub mod recover;
pub mod resolve;

use std::path::Path;

use crate::error::Result;
use crate::registry::Registry;

/// The registry a command runs against: the built-in table, optionally
/// layered with pins from a user-supplied YAML file.
pub(crate) fn load_registry(path: Option<&Path>) -> Result<Registry> {
    match path {
        Some(path) => Registry::from_file(path),
        None => Ok(Registry::builtin().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry_default_is_builtin() {
        let registry = load_registry(None).unwrap();
        assert_eq!(registry.len(), Registry::builtin().len());
    }

    #[test]
    fn test_load_registry_missing_file_fails() {
        let result = load_registry(Some(Path::new("/nonexistent/pins.yaml")));
        assert!(result.is_err());
    }
}
