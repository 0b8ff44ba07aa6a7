//! Typed, borrowed navigation over a [`Model`].
//!
//! Every accessor distinguishes three outcomes: the feature is absent
//! (`Ok(None)` / empty), present with the expected shape, or present with
//! the wrong shape ([`ShapeError`]). Coercions are total: a string scalar
//! is accepted where a number or boolean is expected only if it parses.

use std::fmt;

use thiserror::Error;

use super::kind::ObjectKind;
use super::object::{FeatureValue, Model, ModelObject, ObjectId, Scalar};

/// The shape a feature value has (or was expected to have).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueShape {
    Absent,
    Text,
    Integer,
    Boolean,
    Object,
    Sequence,
}

impl ValueShape {
    fn of(value: Option<&FeatureValue>) -> Self {
        match value {
            None => Self::Absent,
            Some(FeatureValue::Scalar(Scalar::String(_))) => Self::Text,
            Some(FeatureValue::Scalar(Scalar::Integer(_))) => Self::Integer,
            Some(FeatureValue::Scalar(Scalar::Boolean(_))) => Self::Boolean,
            Some(FeatureValue::Object(_)) => Self::Object,
            Some(FeatureValue::Many(_)) => Self::Sequence,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "nothing",
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::Object => "an object",
            Self::Sequence => "an object sequence",
        })
    }
}

/// A feature value is present but has the wrong shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("feature `{feature}` of {owner} should hold {expected}, found {found}")]
pub struct ShapeError {
    /// Human-readable description of the owning object.
    pub owner: String,
    pub feature: String,
    pub expected: ValueShape,
    pub found: ValueShape,
}

/// A borrowed view over one object with typed feature accessors.
#[derive(Clone, Copy)]
pub struct ObjectView<'m> {
    pub object: &'m ModelObject,
    pub model: &'m Model,
}

impl fmt::Debug for ObjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectView")
            .field("id", &self.object.id)
            .field("kind", &self.object.kind)
            .field("name", &self.object.name())
            .finish()
    }
}

impl<'m> ObjectView<'m> {
    /// Create a new view over an object.
    pub fn new(object: &'m ModelObject, model: &'m Model) -> Self {
        Self { object, model }
    }

    // ── Identity ────────────────────────────────────────────────────

    pub fn id(&self) -> ObjectId {
        self.object.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.object.kind
    }

    /// The declared name, if it is a string.
    pub fn name(&self) -> Option<&'m str> {
        self.object.name()
    }

    pub fn is_proxy(&self) -> bool {
        self.object.proxy
    }

    /// The containing object (None for roots and proxies).
    pub fn container(&self) -> Option<ObjectView<'m>> {
        self.object.container.and_then(|id| self.model.view(id))
    }

    /// Short description for diagnostics, e.g. ``EClass `Dog` ``.
    pub fn describe(&self) -> String {
        match self.name() {
            Some(name) => format!("{} `{}`", self.kind(), name),
            None => format!("unnamed {}", self.kind()),
        }
    }

    // ── Raw access ──────────────────────────────────────────────────

    /// The raw value of a feature.
    pub fn feature(&self, name: &str) -> Option<&'m FeatureValue> {
        self.object.feature(name)
    }

    fn shape_error(&self, feature: &str, expected: ValueShape) -> ShapeError {
        ShapeError {
            owner: self.describe(),
            feature: feature.to_string(),
            expected,
            found: ValueShape::of(self.feature(feature)),
        }
    }

    // ── Scalars ─────────────────────────────────────────────────────

    /// Any scalar value.
    pub fn scalar(&self, feature: &str) -> Result<Option<&'m Scalar>, ShapeError> {
        match self.feature(feature) {
            None => Ok(None),
            Some(FeatureValue::Scalar(value)) => Ok(Some(value)),
            Some(_) => Err(self.shape_error(feature, ValueShape::Text)),
        }
    }

    /// A string value.
    pub fn text(&self, feature: &str) -> Result<Option<&'m str>, ShapeError> {
        match self.feature(feature) {
            None => Ok(None),
            Some(FeatureValue::Scalar(Scalar::String(s))) => Ok(Some(s)),
            Some(_) => Err(self.shape_error(feature, ValueShape::Text)),
        }
    }

    /// An integer value; numeric strings are parsed.
    pub fn integer(&self, feature: &str) -> Result<Option<i64>, ShapeError> {
        match self.feature(feature) {
            None => Ok(None),
            Some(FeatureValue::Scalar(Scalar::Integer(v))) => Ok(Some(*v)),
            Some(FeatureValue::Scalar(Scalar::String(s))) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.shape_error(feature, ValueShape::Integer)),
            Some(_) => Err(self.shape_error(feature, ValueShape::Integer)),
        }
    }

    /// A boolean value; `"true"` / `"false"` strings are parsed.
    pub fn boolean(&self, feature: &str) -> Result<Option<bool>, ShapeError> {
        match self.feature(feature) {
            None => Ok(None),
            Some(FeatureValue::Scalar(Scalar::Boolean(v))) => Ok(Some(*v)),
            Some(FeatureValue::Scalar(Scalar::String(s))) => match s.trim() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(self.shape_error(feature, ValueShape::Boolean)),
            },
            Some(_) => Err(self.shape_error(feature, ValueShape::Boolean)),
        }
    }

    /// A boolean flag, absent meaning `false`.
    pub fn flag(&self, feature: &str) -> Result<bool, ShapeError> {
        Ok(self.boolean(feature)?.unwrap_or(false))
    }

    /// The `name` feature, which must be a non-empty string.
    pub fn required_name(&self) -> Result<&'m str, ShapeError> {
        match self.text("name")? {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(self.shape_error("name", ValueShape::Text)),
        }
    }

    // ── Objects ─────────────────────────────────────────────────────

    /// A single-valued object feature.
    pub fn object(&self, feature: &str) -> Result<Option<ObjectView<'m>>, ShapeError> {
        match self.feature(feature) {
            None => Ok(None),
            Some(FeatureValue::Object(id)) => Ok(self.model.view(*id)),
            Some(_) => Err(self.shape_error(feature, ValueShape::Object)),
        }
    }

    /// A multi-valued object feature, in declared order. Absent means empty.
    pub fn objects(&self, feature: &str) -> Result<Vec<ObjectView<'m>>, ShapeError> {
        match self.feature(feature) {
            None => Ok(Vec::new()),
            Some(FeatureValue::Many(ids)) => {
                Ok(ids.iter().filter_map(|id| self.model.view(*id)).collect())
            }
            Some(_) => Err(self.shape_error(feature, ValueShape::Sequence)),
        }
    }
}
