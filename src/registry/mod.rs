//! Package registry
//!
//! An insertion-ordered, immutable mapping from module specifier to the
//! coordinates needed to build a CDN URL for it. The curated built-in table
//! ([`Registry::builtin`]) is constructed once at process start and shared;
//! callers that need different pins load overrides from a YAML file in the
//! shape:
//!
//! ```yaml
//! packages:
//!   - specifier: lucide-react
//!     package: lucide-react
//!     version: "0.469.0"
//!     external: [react]
//! ```
//!
//! The registry is an explicit dependency of resolution rather than a global:
//! tests inject small tables, the CLI injects the built-in one.

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, Result};

/// How to build a CDN URL for one logical package.
///
/// Many specifiers may map to the same `package` (alias specifiers such as
/// `react-dom/client` and `react-dom` both point at the `react-dom` package).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// npm package name, including scope if any.
    pub package: String,

    /// Pinned version; omitted means the CDN's latest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Subpath inside the package, `/`-prefixed (e.g. `/client`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpath: Option<String>,

    /// Peer dependencies the host supplies, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<String>,
}

/// Insertion-ordered, immutable specifier lookup table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, PackageConfig)>,
    index: HashMap<String, usize>,
}

/// One row of a YAML registry file.
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    specifier: String,
    #[serde(flatten)]
    config: PackageConfig,
}

/// Top-level shape of a YAML registry file.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    packages: Vec<RegistryEntry>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| Registry::new(builtin::entries()));

impl Registry {
    /// Build a registry from specifier/config pairs.
    ///
    /// Later entries for the same specifier override earlier ones, which is
    /// what lets a user file extend the built-in table.
    pub fn new(entries: Vec<(String, PackageConfig)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, (specifier, _)) in entries.iter().enumerate() {
            index.insert(specifier.clone(), position);
        }
        Registry { entries, index }
    }

    /// The curated built-in table, constructed once and shared.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Exact-match lookup.
    pub fn get(&self, specifier: &str) -> Option<&PackageConfig> {
        self.index
            .get(specifier)
            .map(|&position| &self.entries[position].1)
    }

    /// Number of registered specifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageConfig)> {
        self.entries
            .iter()
            .map(|(specifier, config)| (specifier.as_str(), config))
    }

    /// Parse a YAML registry document layered over the built-in table.
    pub fn from_yaml(text: &str) -> Result<Registry> {
        let file: RegistryFile = serde_yaml::from_str(text)?;
        let mut entries = Self::builtin().entries.clone();
        entries.extend(
            file.packages
                .into_iter()
                .map(|entry| (entry.specifier, entry.config)),
        );
        Ok(Registry::new(entries))
    }

    /// Load a YAML registry file layered over the built-in table.
    pub fn from_file(path: &Path) -> Result<Registry> {
        if !path.is_file() {
            return Err(RecoveryError::RegistryNotFound {
                path: path.display().to_string(),
            });
        }
        let text =
            std::fs::read_to_string(path).map_err(|err| RecoveryError::FileReadFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        Self::from_yaml(&text).map_err(|err| match err {
            RecoveryError::RegistryParseFailed { reason, .. } => {
                RecoveryError::RegistryParseFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }
}
