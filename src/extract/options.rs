//! Extraction options.
//!
//! All fields have defaults, so an empty TOML document (or no config file
//! at all) yields strict, sequential extraction.
//!
//! ```toml
//! type-errors = "lenient"
//! attribute-collision = "last-wins"
//! parallel = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// What to do when a feature's type cannot be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeErrorPolicy {
    /// Abort the whole run.
    #[default]
    Strict,
    /// Skip the offending feature, log it, and report it in the result.
    Lenient,
}

/// What to do when two entries of one node share a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeCollision {
    /// Keep both; later keys get ` (2)`, ` (3)`, ... appended.
    #[default]
    Suffix,
    /// Later entry overwrites the earlier one in place.
    LastWins,
    /// Abort with `ExtractError::DuplicateAttribute`.
    Error,
}

/// Options controlling one extraction run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExtractOptions {
    pub type_errors: TypeErrorPolicy,
    pub attribute_collision: AttributeCollision,
    /// Process the classifiers of each package on the rayon pool.
    ///
    /// Output order does not change. When several classifiers fail under
    /// [`TypeErrorPolicy::Strict`], the reported error may be any one of
    /// them rather than the first in traversal order.
    pub parallel: bool,
}

/// Failure to load options from TOML.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ExtractOptions {
    /// Strict, sequential defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lenient(mut self) -> Self {
        self.type_errors = TypeErrorPolicy::Lenient;
        self
    }

    pub fn with_collision(mut self, policy: AttributeCollision) -> Self {
        self.attribute_collision = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.type_errors == TypeErrorPolicy::Lenient
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(input)?)
    }

    /// Read options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
