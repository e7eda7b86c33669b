//! @ai:module:intent Resolve CLI paths into labeled simulation result files
//! @ai:module:layer infrastructure
//! @ai:module:public_api InputResolver, ResolvedInput
//! @ai:module:stateless true

use crate::error::{ReportError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// @ai:intent A result file that exists on disk, labeled with its algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub path: PathBuf,
    pub algorithm: String,
}

/// @ai:intent Trait for resolving input file paths
pub trait InputResolverTrait: Send + Sync {
    /// @ai:intent Filter supplied paths to existing files with derived labels
    fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<ResolvedInput>>;
}

/// @ai:intent Filters CLI paths and derives algorithm names from filenames
pub struct InputResolver;

impl InputResolver {
    /// @ai:intent Create a new input resolver
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Derive an algorithm label from a result filename
    /// @ai:effects pure
    ///
    /// Filenames follow the simulator's export convention
    /// `<algo>_results_<timestamp>.csv`; the label is the upper-cased `<algo>`
    /// prefix. Files that do not match keep their raw stem as the label.
    pub fn algorithm_name(path: &Path) -> String {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let re = Regex::new(r"^([^_]+)_results_").expect("Invalid regex");

        match re.captures(stem) {
            Some(caps) => caps[1].to_uppercase(),
            None => stem.to_string(),
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InputResolverTrait for InputResolver {
    /// @ai:intent Filter supplied paths to existing files with derived labels
    /// @ai:effects fs:read
    ///
    /// Missing files are skipped with a warning; an empty supplied or resolved
    /// set is fatal.
    fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<ResolvedInput>> {
        if paths.is_empty() {
            return Err(ReportError::NoInputFiles);
        }

        let mut resolved = Vec::with_capacity(paths.len());

        for path in paths {
            if !path.is_file() {
                tracing::warn!("File '{}' not found! Skipping...", path.display());
                continue;
            }

            resolved.push(ResolvedInput {
                algorithm: Self::algorithm_name(path),
                path: path.clone(),
            });
        }

        if resolved.is_empty() {
            return Err(ReportError::EmptyInputSet);
        }

        Ok(resolved)
    }
}
