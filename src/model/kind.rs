//! Metaclass kinds of typed model objects.

use std::fmt;

/// The metaclass of a model object.
///
/// Closed on purpose: everything the extraction engine does not care about
/// lands in [`ObjectKind::Other`] so `match` arms stay exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    // Containers
    Package,

    // Classifiers
    Class,
    Enum,
    DataType,

    // Structural and behavioral features
    Attribute,
    Reference,
    Operation,
    Parameter,
    EnumLiteral,

    // Typing helpers
    GenericType,
    TypeParameter,

    // Annotations
    Annotation,

    // Anything else (string-to-string entries, foreign metaclasses, ...)
    Other,
}

impl ObjectKind {
    /// Map an `xsi:type` / `xmi:type` value or a tag name to a kind.
    ///
    /// Namespace prefixes are ignored, so `ecore:EClass` and `EClass` are
    /// the same.
    pub fn from_type_name(type_name: &str) -> Self {
        let local = type_name.rsplit(':').next().unwrap_or(type_name);
        match local {
            "EPackage" => Self::Package,
            "EClass" => Self::Class,
            "EEnum" => Self::Enum,
            "EDataType" => Self::DataType,
            "EAttribute" => Self::Attribute,
            "EReference" => Self::Reference,
            "EOperation" => Self::Operation,
            "EParameter" => Self::Parameter,
            "EEnumLiteral" => Self::EnumLiteral,
            "EGenericType" => Self::GenericType,
            "ETypeParameter" => Self::TypeParameter,
            "EAnnotation" => Self::Annotation,
            _ => Self::Other,
        }
    }

    /// The Ecore metaclass name for this kind.
    pub fn ecore_name(&self) -> &'static str {
        match self {
            Self::Package => "EPackage",
            Self::Class => "EClass",
            Self::Enum => "EEnum",
            Self::DataType => "EDataType",
            Self::Attribute => "EAttribute",
            Self::Reference => "EReference",
            Self::Operation => "EOperation",
            Self::Parameter => "EParameter",
            Self::EnumLiteral => "EEnumLiteral",
            Self::GenericType => "EGenericType",
            Self::TypeParameter => "ETypeParameter",
            Self::Annotation => "EAnnotation",
            Self::Other => "EObject",
        }
    }

    /// Returns true for named type declarations (classes, enums, data types).
    pub fn is_classifier(&self) -> bool {
        matches!(self, Self::Class | Self::Enum | Self::DataType)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ecore_name())
    }
}
