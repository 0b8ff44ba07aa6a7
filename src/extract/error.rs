//! Error types for graph extraction.

use std::fmt;

use thiserror::Error;

use crate::model::ShapeError;

/// The role of a feature whose type could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureRole {
    Attribute,
    Reference,
    SuperType,
    Parameter,
}

impl fmt::Display for FeatureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attribute => "attribute",
            Self::Reference => "reference",
            Self::SuperType => "supertype",
            Self::Parameter => "parameter",
        })
    }
}

/// Errors that abort (or, in lenient mode, skip part of) an extraction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Neither a direct `eType` nor a generic wrapper yields a type name.
    #[error("unable to resolve the type of {role} `{name}` in `{owner}`")]
    TypeResolution {
        role: FeatureRole,
        /// The feature's own name.
        name: String,
        /// The owning classifier, or `Class.operation` for parameters.
        owner: String,
    },

    /// A feature value is present but has the wrong shape.
    #[error("malformed model: {0}")]
    MalformedModel(#[from] ShapeError),

    /// Two classifiers produced the same node id.
    #[error("duplicate node id `{0}`: two classifiers share this name")]
    DuplicateNode(String),

    /// The edge id generator produced the same id twice.
    #[error("duplicate edge id `{0}`")]
    DuplicateEdge(String),

    /// Two entries of one node share a key (only with `AttributeCollision::Error`).
    #[error("attribute key `{key}` appears twice on node `{node}`")]
    DuplicateAttribute { node: String, key: String },
}

impl ExtractError {
    /// Create a type resolution error.
    pub fn type_resolution(
        role: FeatureRole,
        name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self::TypeResolution {
            role,
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Whether lenient mode may skip the offending feature and continue.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::TypeResolution { .. })
    }
}
