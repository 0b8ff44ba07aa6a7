//! Package traversal.
//!
//! Order: root objects in document order; within a package its classifiers
//! (in declared order) before its sub-packages. Parallel mode changes how
//! classifiers are processed, never the order they are merged in.

use rayon::prelude::*;
use tracing::trace;

use super::Extractor;
use super::error::ExtractError;
use super::fragment::Fragment;
use crate::model::{ObjectKind, ObjectView};

impl Extractor<'_> {
    /// Visit one top-level object.
    pub(super) fn root(&self, root: ObjectView<'_>) -> Result<Fragment, ExtractError> {
        match root.kind() {
            ObjectKind::Package => self.package(root),
            ObjectKind::Class | ObjectKind::Enum => self.classifier(root),
            ObjectKind::DataType
            | ObjectKind::Attribute
            | ObjectKind::Reference
            | ObjectKind::Operation
            | ObjectKind::Parameter
            | ObjectKind::EnumLiteral
            | ObjectKind::GenericType
            | ObjectKind::TypeParameter
            | ObjectKind::Annotation
            | ObjectKind::Other => {
                trace!(root = %root.describe(), "ignoring root object");
                Ok(Fragment::empty())
            }
        }
    }

    /// Classifiers of `package`, then its sub-packages, recursively.
    pub(super) fn package(&self, package: ObjectView<'_>) -> Result<Fragment, ExtractError> {
        trace!(package = %package.describe(), "visiting package");
        let classifiers = package.objects("eClassifiers")?;

        let mut fragment = if self.options.parallel {
            classifiers
                .par_iter()
                .map(|classifier| self.classifier(*classifier))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .collect()
        } else {
            classifiers
                .iter()
                .map(|classifier| self.classifier(*classifier))
                .collect::<Result<Fragment, _>>()?
        };

        for subpackage in package.objects("eSubpackages")? {
            fragment.append(self.package(subpackage)?);
        }
        Ok(fragment)
    }
}
