//! Feature handlers.
//!
//! Each handler turns one feature of a classifier into attribute entries on
//! the owning node and/or edges. None of them ever creates a node.

use tracing::trace;

use super::Extractor;
use super::attributes::AttributeMap;
use super::error::{ExtractError, FeatureRole};
use super::fragment::Fragment;
use super::resolve::{generic_type_name, resolve_type, try_resolve_type};
use crate::graph::{Edge, EdgeKind};
use crate::model::{ObjectKind, ObjectView};

/// Return type recorded for operations without one.
pub const VOID: &str = "void";

/// Value recorded for enum literals without an explicit value.
pub const AUTO: &str = "auto";

/// Render `[lower..upper] ` for a reference, or nothing if both bounds are absent.
///
/// A missing lower bound is 0; a missing upper bound equals the lower
/// bound. `-1` is unbounded (`*`) and `-2` is Ecore's "unspecified" (`?`).
pub fn cardinality_prefix(lower: Option<i64>, upper: Option<i64>) -> String {
    if lower.is_none() && upper.is_none() {
        return String::new();
    }
    let lower = lower.unwrap_or(0);
    let upper = match upper.unwrap_or(lower) {
        -1 => "*".to_string(),
        -2 => "?".to_string(),
        n => n.to_string(),
    };
    format!("[{lower}..{upper}] ")
}

impl Extractor<'_> {
    /// Dispatch one entry of `eStructuralFeatures`.
    pub(super) fn structural_feature(
        &self,
        owner: &str,
        feature: ObjectView<'_>,
        attrs: &mut AttributeMap,
    ) -> Result<Fragment, ExtractError> {
        match feature.kind() {
            ObjectKind::Attribute => {
                self.attribute(owner, feature, attrs)?;
                Ok(Fragment::empty())
            }
            ObjectKind::Reference => self.reference(owner, feature).map(Fragment::from_edge),
            ObjectKind::Package
            | ObjectKind::Class
            | ObjectKind::Enum
            | ObjectKind::DataType
            | ObjectKind::Operation
            | ObjectKind::Parameter
            | ObjectKind::EnumLiteral
            | ObjectKind::GenericType
            | ObjectKind::TypeParameter
            | ObjectKind::Annotation
            | ObjectKind::Other => {
                trace!(owner, feature = %feature.describe(), "ignoring structural feature");
                Ok(Fragment::empty())
            }
        }
    }

    /// `name → typeName`.
    pub(super) fn attribute(
        &self,
        owner: &str,
        attribute: ObjectView<'_>,
        attrs: &mut AttributeMap,
    ) -> Result<(), ExtractError> {
        let name = attribute.required_name()?;
        let type_name = resolve_type(&attribute, FeatureRole::Attribute, owner)?;
        attrs.insert(name, type_name)
    }

    /// One `reference` edge from `owner` to the referenced classifier.
    pub(super) fn reference(
        &self,
        owner: &str,
        reference: ObjectView<'_>,
    ) -> Result<Edge, ExtractError> {
        let name = reference.required_name()?;
        let target = resolve_type(&reference, FeatureRole::Reference, owner)?;
        let prefix = cardinality_prefix(
            reference.integer("lowerBound")?,
            reference.integer("upperBound")?,
        );
        let containment = reference.flag("containment")?;

        Ok(Edge::new(
            self.ids.next_id(),
            EdgeKind::Reference { containment },
            owner,
            target,
        )
        .with_label(format!("{prefix}{name}")))
    }

    /// One `supertype` edge per declared supertype.
    ///
    /// `eSuperTypes` wins; `eGenericSuperTypes` is only consulted when a
    /// class has no plain supertypes, since Ecore serializes one or the other.
    pub(super) fn supertypes(
        &self,
        owner: &str,
        class: ObjectView<'_>,
    ) -> Result<Fragment, ExtractError> {
        let plain = class.objects("eSuperTypes")?;
        let mut targets = Vec::with_capacity(plain.len());

        if plain.is_empty() {
            for (index, generic) in class.objects("eGenericSuperTypes")?.iter().enumerate() {
                let name = generic_type_name(generic)?.ok_or_else(|| {
                    ExtractError::type_resolution(
                        FeatureRole::SuperType,
                        format!("eGenericSuperTypes[{index}]"),
                        owner,
                    )
                })?;
                targets.push(name);
            }
        } else {
            for supertype in &plain {
                targets.push(supertype.required_name()?);
            }
        }

        Ok(targets
            .into_iter()
            .map(|target| {
                Fragment::from_edge(Edge::new(
                    self.ids.next_id(),
                    EdgeKind::Supertype,
                    owner,
                    target,
                ))
            })
            .collect())
    }

    /// `"name(p1 T1, p2 T2)" → " ReturnType"`.
    pub(super) fn operation(
        &self,
        owner: &str,
        operation: ObjectView<'_>,
        attrs: &mut AttributeMap,
    ) -> Result<(), ExtractError> {
        let name = operation.required_name()?;
        let return_type = try_resolve_type(&operation)?.unwrap_or(VOID);
        let context = format!("{owner}.{name}");

        let parameters = operation
            .objects("eParameters")?
            .iter()
            .map(|parameter| {
                let param_name = parameter.required_name()?;
                let type_name = resolve_type(parameter, FeatureRole::Parameter, &context)?;
                Ok(format!("{param_name} {type_name}"))
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;

        attrs.insert(
            format!("{name}({})", parameters.join(", ")),
            format!(" {return_type}"),
        )
    }

    /// `literalName → value`, or `→ "auto"` when no value is declared.
    pub(super) fn enum_literal(
        &self,
        literal: ObjectView<'_>,
        attrs: &mut AttributeMap,
    ) -> Result<(), ExtractError> {
        let name = literal.required_name()?;
        let value = match literal.scalar("value")? {
            Some(value) => value.to_string(),
            None => AUTO.to_string(),
        };
        attrs.insert(name, value)
    }
}
