//! Rewrite configuration, read from `lllrw.toml`.
//!
//! ```toml
//! [rewrite]
//! hygiene_prefix = "_"
//!
//! [storage]
//! self_ident = "self"
//! attr_prefix = "--"
//! ```

use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;
use crate::metadata::Metadata;

pub const CONFIG_FILE_NAME: &str = "lllrw.toml";

/// Names the storage-path flattener treats specially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Identifier that roots a storage access chain.
    pub self_ident: String,
    /// Prefix that tags attribute-name components and the root.
    pub attr_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            self_ident: "self".to_string(),
            attr_prefix: "--".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Prefix for binders a rewrite template introduces itself.
    pub hygiene_prefix: String,
    pub storage: StorageConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            hygiene_prefix: "_".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl RewriteConfig {
    pub fn load(path: &Path) -> Result<Self, Diagnostic> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Diagnostic::error(
                format!("cannot read config '{}': {}", path.display(), e),
                Metadata::unset(),
            )
        })?;
        Self::parse_toml(&content, path)
    }

    /// Search `start` and its ancestors for `lllrw.toml`.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    pub(crate) fn parse_toml(content: &str, path: &Path) -> Result<Self, Diagnostic> {
        let mut config = Self::default();
        let mut section = String::new();

        for (index, line) in content.lines().enumerate() {
            let meta = Metadata::new(0, index as i32 + 1, 1);
            let err = |msg: String| {
                Diagnostic::error(format!("{}: {}", path.display(), msg), meta)
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(err(format!("expected 'key = value', found '{}'", trimmed)));
            };
            let key = key.trim();
            let value = parse_string(value.trim())
                .ok_or_else(|| err(format!("{}.{} must be a quoted string", section, key)))?;

            match (section.as_str(), key) {
                ("rewrite", "hygiene_prefix") => config.hygiene_prefix = value,
                ("storage", "self_ident") => {
                    if value.is_empty() {
                        return Err(err("storage.self_ident must not be empty".to_string()));
                    }
                    config.storage.self_ident = value;
                }
                ("storage", "attr_prefix") => config.storage.attr_prefix = value,
                _ => {
                    return Err(err(format!("unknown key '{}.{}'", section, key))
                        .with_help(
                            "known keys: rewrite.hygiene_prefix, storage.self_ident, storage.attr_prefix"
                                .to_string(),
                        ));
                }
            }
        }

        Ok(config)
    }
}

fn parse_string(value: &str) -> Option<String> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('"') {
        return None;
    }
    Some(inner.to_string())
}
