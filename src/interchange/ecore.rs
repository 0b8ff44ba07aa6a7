//! Semantic Ecore/XMI reader.
//!
//! Builds a typed [`Model`] from an `.ecore` document in two passes:
//!
//! 1. Walk the element tree. Child elements become contained objects under
//!    the feature named by their tag; plain attributes become scalars;
//!    reference attributes (and `href` children) are queued.
//! 2. Resolve the queued references once every object exists, so forward
//!    references work. Anything that cannot be found inside the document
//!    becomes a named proxy.
//!
//! Reference syntax understood by the resolver:
//!
//! ```text
//! #//Animal/name                          name path from the first root
//! #//@eClassifiers.1                      index path
//! /1/Animal                               name path from the second root
//! _k3jf8                                  bare xmi:id
//! ecore:EDataType http://...Ecore#//EString   type hint + external URI (proxy)
//! other.ecore#//Base                      another document (proxy)
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use super::xml::{XmlElement, parse_document};
use super::{InterchangeError, ModelSource};
use crate::model::{FeatureValue, Model, ModelObject, ObjectId, ObjectKind, Scalar};

/// Containment features that hold an ordered sequence of objects.
const MANY_FEATURES: &[&str] = &[
    "eClassifiers",
    "eSubpackages",
    "eStructuralFeatures",
    "eOperations",
    "eParameters",
    "eLiterals",
    "eAnnotations",
    "eTypeArguments",
    "eGenericSuperTypes",
    "eTypeParameters",
    "eGenericExceptions",
    "eBounds",
    "details",
    "contents",
];

/// Attributes that hold references to other objects rather than scalars.
const REFERENCE_FEATURES: &[&str] = &[
    "eType",
    "eClassifier",
    "eSuperTypes",
    "eOpposite",
    "eExceptions",
    "eTypeParameter",
    "eKeys",
];

/// Reference features holding several targets.
const MANY_REFERENCES: &[&str] = &["eSuperTypes", "eExceptions", "eKeys"];

const BOOLEAN_FEATURES: &[&str] = &[
    "abstract",
    "interface",
    "containment",
    "ordered",
    "unique",
    "changeable",
    "volatile",
    "transient",
    "unsettable",
    "derived",
    "resolveProxies",
    "iD",
    "serializable",
];

const INTEGER_FEATURES: &[&str] = &["lowerBound", "upperBound", "value"];

/// Reads `.ecore` / `.xmi` documents into a [`Model`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EcoreXmi;

impl ModelSource for EcoreXmi {
    fn name(&self) -> &'static str {
        "Ecore XMI"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ecore", "xmi"]
    }

    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let document = parse_document(input)?;
        EcoreReader::default().read(&document)
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::xml(format!("Invalid UTF-8: {e}")))?;

        if !content.contains("EPackage") && !content.contains("XMI") {
            return Err(InterchangeError::xml("Missing EPackage or XMI root element"));
        }
        Ok(())
    }
}

/// The kind of a child object without an explicit `xsi:type`.
fn implied_kind(feature: &str) -> ObjectKind {
    match feature {
        "eSubpackages" => ObjectKind::Package,
        "eOperations" => ObjectKind::Operation,
        "eParameters" => ObjectKind::Parameter,
        "eLiterals" => ObjectKind::EnumLiteral,
        "eGenericType" | "eGenericSuperTypes" | "eTypeArguments" | "eGenericExceptions"
        | "eBounds" | "eUpperBound" | "eLowerBound" => ObjectKind::GenericType,
        "eTypeParameters" => ObjectKind::TypeParameter,
        "eAnnotations" => ObjectKind::Annotation,
        _ => ObjectKind::Other,
    }
}

/// Typed scalar for a plain attribute. Unparseable values stay strings.
fn scalar(feature: &str, value: &str) -> Scalar {
    if BOOLEAN_FEATURES.contains(&feature) {
        match value {
            "true" => return Scalar::Boolean(true),
            "false" => return Scalar::Boolean(false),
            _ => {}
        }
    }
    if INTEGER_FEATURES.contains(&feature) {
        if let Ok(v) = value.trim().parse::<i64>() {
            return Scalar::Integer(v);
        }
    }
    Scalar::from(value)
}

/// Whether any root is something the extractor walks.
fn has_metamodel_roots(model: &Model) -> bool {
    model
        .roots()
        .iter()
        .filter_map(|id| model.get(*id))
        .any(|root| root.kind == ObjectKind::Package || root.kind.is_classifier())
}

/// Attributes that carry document plumbing, not model features.
fn is_plumbing(key: &str) -> bool {
    key.starts_with("xmlns")
        || matches!(
            key,
            "xmi:version" | "xmi:id" | "xsi:type" | "xmi:type" | "xsi:schemaLocation" | "href"
        )
}

/// `ecore:EDataType` style tokens that precede an external URI.
fn is_type_hint(token: &str) -> bool {
    token.contains(':') && !token.contains('/') && !token.contains('#')
}

/// Name for a proxy: the last non-empty segment of the URI fragment.
fn proxy_name(uri: &str) -> &str {
    let fragment = uri.rsplit_once('#').map_or(uri, |(_, fragment)| fragment);
    fragment
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(uri)
}

/// A reference queued for the second pass.
#[derive(Debug)]
struct PendingReference {
    owner: ObjectId,
    feature: String,
    value: String,
    type_hint: Option<String>,
}

impl PendingReference {
    fn is_many(&self) -> bool {
        MANY_REFERENCES.contains(&self.feature.as_str())
    }
}

#[derive(Default)]
struct EcoreReader {
    model: Model,
    xmi_ids: FxHashMap<String, ObjectId>,
    pending: Vec<PendingReference>,
    /// Proxies by URI, so repeated external references share one object.
    proxies: FxHashMap<String, ObjectId>,
}

enum Placement<'a> {
    Root,
    Contained { parent: ObjectId, feature: &'a str },
}

impl EcoreReader {
    fn read(mut self, document: &XmlElement) -> Result<Model, InterchangeError> {
        if document.is_xmi_wrapper() {
            for child in &document.children {
                let kind = ObjectKind::from_type_name(child.type_attr().unwrap_or(&child.tag));
                self.insert(child, kind, Placement::Root);
            }
        } else {
            let kind = ObjectKind::from_type_name(document.type_attr().unwrap_or(&document.tag));
            if kind == ObjectKind::Other {
                return Err(InterchangeError::invalid_element(format!(
                    "`{}` is not an Ecore element",
                    document.tag
                )));
            }
            self.insert(document, kind, Placement::Root);
        }

        let pending = std::mem::take(&mut self.pending);
        for reference in &pending {
            self.resolve_pending(reference);
        }

        debug!(
            objects = self.model.len(),
            roots = self.model.roots().len(),
            references = pending.len(),
            proxies = self.proxies.len(),
            "read Ecore document"
        );
        if !has_metamodel_roots(&self.model) {
            warn!(
                roots = self.model.roots().len(),
                "no EPackage or classifier roots; nothing will be extracted (try `--backend scan`)"
            );
        }
        Ok(self.model)
    }

    // ── First pass ──────────────────────────────────────────────────

    fn insert(&mut self, element: &XmlElement, kind: ObjectKind, placement: Placement<'_>) -> ObjectId {
        let mut object = ModelObject::new(kind);
        let mut references = Vec::new();
        for (key, value) in &element.attributes {
            if is_plumbing(key) {
                continue;
            }
            if REFERENCE_FEATURES.contains(&key.as_str()) {
                references.push((key.clone(), value.clone()));
            } else {
                object = object.with_feature(key, scalar(key, value));
            }
        }

        let id = match placement {
            Placement::Root => self.model.add_root(object),
            Placement::Contained { parent, feature } if MANY_FEATURES.contains(&feature) => {
                self.model.add_contained(parent, feature, object)
            }
            Placement::Contained { parent, feature } => {
                self.model.set_contained(parent, feature, object)
            }
        };

        if let Some(xmi_id) = element.attr("xmi:id") {
            self.xmi_ids.insert(xmi_id.to_string(), id);
        }
        for (feature, value) in references {
            self.pending.push(PendingReference {
                owner: id,
                feature,
                value,
                type_hint: None,
            });
        }
        for child in &element.children {
            self.child(id, child);
        }
        id
    }

    fn child(&mut self, parent: ObjectId, child: &XmlElement) {
        let feature = child.tag.as_str();
        if let Some(href) = child.attr("href") {
            self.pending.push(PendingReference {
                owner: parent,
                feature: feature.to_string(),
                value: href.to_string(),
                type_hint: child.type_attr().map(str::to_string),
            });
            return;
        }

        let kind = match child.type_attr() {
            Some(type_name) => ObjectKind::from_type_name(type_name),
            None => implied_kind(feature),
        };
        self.insert(child, kind, Placement::Contained { parent, feature });
    }

    // ── Second pass ─────────────────────────────────────────────────

    fn resolve_pending(&mut self, reference: &PendingReference) {
        let mut hint = reference.type_hint.clone();
        let mut targets = Vec::new();
        for token in reference.value.split_whitespace() {
            if !self.xmi_ids.contains_key(token) && is_type_hint(token) {
                hint = Some(token.to_string());
                continue;
            }
            targets.push(self.resolve_uri(token, hint.take().as_deref()));
        }

        if reference.is_many() {
            for target in targets {
                self.model.push_reference(reference.owner, &reference.feature, target);
            }
        } else if let Some(target) = targets.first() {
            self.model.set_reference(reference.owner, &reference.feature, *target);
        }
    }

    fn resolve_uri(&mut self, uri: &str, hint: Option<&str>) -> ObjectId {
        let found = match uri.split_once('#') {
            Some(("", fragment)) => self.resolve_fragment(fragment),
            // Another document
            Some(_) => None,
            None if uri.starts_with('/') => self.resolve_fragment(uri),
            None => self.xmi_ids.get(uri).copied(),
        };
        match found {
            Some(id) => {
                trace!(uri, target = %id, "resolved reference");
                id
            }
            None => self.proxy(uri, hint),
        }
    }

    /// Resolve a document-local fragment: an xmi:id or a `/root/segment/...` path.
    fn resolve_fragment(&self, fragment: &str) -> Option<ObjectId> {
        if let Some(id) = self.xmi_ids.get(fragment) {
            return Some(*id);
        }
        let path = fragment.strip_prefix('/')?;
        let mut segments = path.split('/');
        let root_index = match segments.next()? {
            "" => 0,
            index => index.parse::<usize>().ok()?,
        };
        let mut current = *self.model.roots().get(root_index)?;
        for segment in segments {
            current = self.step(current, segment)?;
        }
        Some(current)
    }

    /// One path segment: `@feature.index`, `@feature`, or a contained object's name.
    fn step(&self, current: ObjectId, segment: &str) -> Option<ObjectId> {
        let object = self.model.get(current)?;

        if let Some(feature_ref) = segment.strip_prefix('@') {
            let (feature, index) = match feature_ref.rsplit_once('.') {
                Some((feature, index)) => (feature, index.parse::<usize>().ok()?),
                None => (feature_ref, 0),
            };
            return match object.feature(feature)? {
                FeatureValue::Many(ids) => ids.get(index).copied(),
                FeatureValue::Object(id) => Some(*id),
                FeatureValue::Scalar(_) => None,
            };
        }

        object
            .features
            .values()
            .flat_map(|value| match value {
                FeatureValue::Object(id) => std::slice::from_ref(id),
                FeatureValue::Many(ids) => ids.as_slice(),
                FeatureValue::Scalar(_) => &[][..],
            })
            .copied()
            .find(|id| {
                self.model
                    .get(*id)
                    .is_some_and(|child| child.container == Some(current) && child.name() == Some(segment))
            })
    }

    fn proxy(&mut self, uri: &str, hint: Option<&str>) -> ObjectId {
        if let Some(id) = self.proxies.get(uri) {
            return *id;
        }
        let name = proxy_name(uri);
        let kind = hint.map_or(ObjectKind::Other, ObjectKind::from_type_name);
        trace!(uri, name, %kind, "creating proxy for unresolved reference");

        let id = self.model.add_detached(ModelObject::proxy(kind, name));
        self.proxies.insert(uri.to_string(), id);
        id
    }
}
