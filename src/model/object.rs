//! Arena-backed object graph.
//!
//! ```text
//! Model
//! ├── objects: Vec<ModelObject>   (ObjectId = index, insertion order)
//! └── roots: Vec<ObjectId>        (top-level packages, in document order)
//! ```
//!
//! Object-valued features hold [`ObjectId`]s, so containment and cross
//! references (`eType`, `eSuperTypes`) share one representation. Objects
//! are never removed.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use super::kind::ObjectKind;
use super::view::ObjectView;

// ============================================================================
// IDS
// ============================================================================

/// Index of an object inside its [`Model`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// VALUES
// ============================================================================

/// A scalar feature value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(Arc<str>),
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

/// The value of one named feature.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureValue {
    /// String, number or boolean.
    Scalar(Scalar),
    /// A single nested or referenced object.
    Object(ObjectId),
    /// An ordered sequence of nested or referenced objects.
    Many(Vec<ObjectId>),
}

macro_rules! scalar_feature_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FeatureValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_feature_value!(&str, String, i64, bool);

impl From<Scalar> for FeatureValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// One typed object: a metaclass kind plus named feature values.
#[derive(Clone, Debug)]
pub struct ModelObject {
    /// Position in the owning model. Assigned on insertion.
    pub id: ObjectId,
    /// The metaclass.
    pub kind: ObjectKind,
    /// Feature values in declaration order.
    pub features: IndexMap<Arc<str>, FeatureValue>,
    /// The containing object (None for roots and proxies).
    pub container: Option<ObjectId>,
    /// Synthesized for a reference that points outside the document.
    pub proxy: bool,
}

impl ModelObject {
    /// Create a detached object of the given kind.
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: ObjectId(usize::MAX),
            kind,
            features: IndexMap::new(),
            container: None,
            proxy: false,
        }
    }

    /// Create a proxy standing in for an unresolvable reference.
    pub fn proxy(kind: ObjectKind, name: impl Into<Arc<str>>) -> Self {
        let mut object = Self::new(kind).with_feature("name", Scalar::String(name.into()));
        object.proxy = true;
        object
    }

    /// Set the `name` feature.
    pub fn with_name(self, name: &str) -> Self {
        self.with_feature("name", name)
    }

    /// Set an arbitrary feature.
    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(Arc::from(name), value.into());
        self
    }

    /// Look up a feature value.
    pub fn feature(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    /// The `name` feature if it holds a string.
    pub fn name(&self) -> Option<&str> {
        match self.features.get("name") {
            Some(FeatureValue::Scalar(Scalar::String(s))) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// A complete typed object graph produced by a model source.
#[derive(Clone, Debug, Default)]
pub struct Model {
    objects: Vec<ModelObject>,
    roots: Vec<ObjectId>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, mut object: ModelObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        object.id = id;
        self.objects.push(object);
        id
    }

    /// Add a top-level object.
    pub fn add_root(&mut self, mut object: ModelObject) -> ObjectId {
        object.container = None;
        let id = self.insert(object);
        self.roots.push(id);
        id
    }

    /// Add an object that is neither a root nor contained (e.g. a proxy).
    pub fn add_detached(&mut self, object: ModelObject) -> ObjectId {
        self.insert(object)
    }

    /// Add `object` to the multi-valued containment `feature` of `parent`.
    pub fn add_contained(
        &mut self,
        parent: ObjectId,
        feature: &str,
        mut object: ModelObject,
    ) -> ObjectId {
        object.container = Some(parent);
        let id = self.insert(object);
        self.push_reference(parent, feature, id);
        id
    }

    /// Set `object` as the single-valued containment `feature` of `parent`.
    pub fn set_contained(
        &mut self,
        parent: ObjectId,
        feature: &str,
        mut object: ModelObject,
    ) -> ObjectId {
        object.container = Some(parent);
        let id = self.insert(object);
        self.set_reference(parent, feature, id);
        id
    }

    /// Point the single-valued `feature` of `owner` at `target`.
    pub fn set_reference(&mut self, owner: ObjectId, feature: &str, target: ObjectId) {
        if let Some(object) = self.objects.get_mut(owner.0) {
            object
                .features
                .insert(Arc::from(feature), FeatureValue::Object(target));
        }
    }

    /// Append `target` to the multi-valued `feature` of `owner`.
    ///
    /// A feature that currently holds anything other than a sequence is
    /// replaced by a one-element sequence.
    pub fn push_reference(&mut self, owner: ObjectId, feature: &str, target: ObjectId) {
        let Some(object) = self.objects.get_mut(owner.0) else {
            return;
        };
        match object.features.get_mut(feature) {
            Some(FeatureValue::Many(ids)) => ids.push(target),
            _ => {
                object
                    .features
                    .insert(Arc::from(feature), FeatureValue::Many(vec![target]));
            }
        }
    }

    /// Get an object by ID.
    pub fn get(&self, id: ObjectId) -> Option<&ModelObject> {
        self.objects.get(id.0)
    }

    /// Borrowed view over an object.
    pub fn view(&self, id: ObjectId) -> Option<ObjectView<'_>> {
        self.get(id).map(|object| ObjectView::new(object, self))
    }

    /// Root object IDs in document order.
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Views over the root objects.
    pub fn root_views(&self) -> Vec<ObjectView<'_>> {
        self.roots.iter().filter_map(|id| self.view(*id)).collect()
    }

    /// Iterate over all objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
