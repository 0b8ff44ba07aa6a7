//! Classifier handlers: one node per class or enum, plus its features.

use tracing::trace;

use super::Extractor;
use super::attributes::AttributeMap;
use super::error::ExtractError;
use super::fragment::Fragment;
use crate::graph::{Node, NodeKind};
use crate::model::{ObjectKind, ObjectView};

impl Extractor<'_> {
    /// Dispatch one entry of `eClassifiers`.
    pub(super) fn classifier(&self, classifier: ObjectView<'_>) -> Result<Fragment, ExtractError> {
        match classifier.kind() {
            ObjectKind::Class => self.class(classifier),
            ObjectKind::Enum => self.enumeration(classifier),
            ObjectKind::DataType
            | ObjectKind::Package
            | ObjectKind::Attribute
            | ObjectKind::Reference
            | ObjectKind::Operation
            | ObjectKind::Parameter
            | ObjectKind::EnumLiteral
            | ObjectKind::GenericType
            | ObjectKind::TypeParameter
            | ObjectKind::Annotation
            | ObjectKind::Other => {
                trace!(classifier = %classifier.describe(), "ignoring classifier");
                Ok(Fragment::empty())
            }
        }
    }

    /// Class node, then structural features, supertypes and operations.
    pub(super) fn class(&self, class: ObjectView<'_>) -> Result<Fragment, ExtractError> {
        let name = class.required_name()?;
        let mut attrs = AttributeMap::new(name, self.options.attribute_collision);

        if class.flag("abstract")? {
            attrs.insert("abstract", "true")?;
        }
        if class.flag("interface")? {
            attrs.insert("interface", "true")?;
        }

        let mut features = Fragment::empty();
        for feature in class.objects("eStructuralFeatures")? {
            features.append(self.lenient(self.structural_feature(name, feature, &mut attrs))?);
        }
        features.append(self.lenient(self.supertypes(name, class))?);
        for operation in class.objects("eOperations")? {
            let result = self
                .operation(name, operation, &mut attrs)
                .map(|()| Fragment::empty());
            features.append(self.lenient(result)?);
        }

        let mut node = Node::new(NodeKind::Class, name);
        node.attributes = attrs.into_entries();
        Ok(Fragment::from_node(node).merge(features))
    }

    /// Enum node with one entry per literal.
    pub(super) fn enumeration(&self, enumeration: ObjectView<'_>) -> Result<Fragment, ExtractError> {
        let name = enumeration.required_name()?;
        let mut attrs = AttributeMap::new(name, self.options.attribute_collision);

        for literal in enumeration.objects("eLiterals")? {
            self.enum_literal(literal, &mut attrs)?;
        }

        let mut node = Node::new(NodeKind::Enum, name);
        node.attributes = attrs.into_entries();
        Ok(Fragment::from_node(node))
    }

    /// Under the lenient policy, turn a skippable failure into a recorded skip.
    fn lenient(&self, result: Result<Fragment, ExtractError>) -> Result<Fragment, ExtractError> {
        match result {
            Err(error) if self.options.is_lenient() && error.is_skippable() => {
                tracing::warn!(%error, "skipping feature");
                Ok(Fragment::from_skipped(error))
            }
            other => other,
        }
    }
}
