//! Type resolution for typed elements.
//!
//! A typed element names its type either directly through `eType`, or
//! indirectly through an `eGenericType` wrapper whose `eClassifier` (or
//! `eTypeParameter`, for type variables) is the real type.

use super::error::{ExtractError, FeatureRole};
use crate::model::ObjectView;

/// Resolve the type name of `feature`, failing if neither path yields one.
///
/// `owner` names the context reported in the error: the owning classifier,
/// or `Class.operation` for parameters.
pub fn resolve_type<'m>(
    feature: &ObjectView<'m>,
    role: FeatureRole,
    owner: &str,
) -> Result<&'m str, ExtractError> {
    try_resolve_type(feature)?.ok_or_else(|| {
        ExtractError::type_resolution(role, feature.name().unwrap_or_default(), owner)
    })
}

/// Resolve the type name of `feature`, if it has one.
pub fn try_resolve_type<'m>(feature: &ObjectView<'m>) -> Result<Option<&'m str>, ExtractError> {
    if let Some(name) = feature.object("eType")?.and_then(|ty| ty.name()) {
        return Ok(Some(name));
    }
    match feature.object("eGenericType")? {
        Some(generic) => generic_type_name(&generic),
        None => Ok(None),
    }
}

/// The name behind one generic-type wrapper.
pub fn generic_type_name<'m>(generic: &ObjectView<'m>) -> Result<Option<&'m str>, ExtractError> {
    if let Some(name) = generic.object("eClassifier")?.and_then(|c| c.name()) {
        return Ok(Some(name));
    }
    Ok(generic.object("eTypeParameter")?.and_then(|p| p.name()))
}
