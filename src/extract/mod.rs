//! Metamodel graph extraction.
//!
//! Reduces a typed [`Model`] to a flat [`Graph`]: one node per class or
//! enum, attribute entries for attributes, literals and operations, and
//! synthesized edges for references and supertypes.
//!
//! ```text
//! Extractor::extract(model)
//!   └─ root()            Package | Class | Enum | ignored
//!       └─ package()     eClassifiers (optionally on rayon), eSubpackages
//!           └─ class() / enumeration()
//!               └─ attribute / reference / supertypes / operation / enum_literal
//!                   └─ resolve_type()
//!   └─ Fragment::finalize()   node/edge id uniqueness barrier
//! ```
//!
//! ## Usage
//!
//! ```
//! use ecore_graph::extract::{ExtractOptions, Extractor};
//! use ecore_graph::graph::SequentialEdgeIds;
//! use ecore_graph::model::{Model, ModelObject, ObjectKind};
//!
//! let mut model = Model::new();
//! let pkg = model.add_root(ModelObject::new(ObjectKind::Package).with_name("zoo"));
//! model.add_contained(pkg, "eClassifiers", ModelObject::new(ObjectKind::Class).with_name("Animal"));
//!
//! let ids = SequentialEdgeIds::new();
//! let extraction = Extractor::new(&ids)
//!     .with_options(ExtractOptions::default())
//!     .extract(&model)?;
//! assert!(extraction.graph.node("Animal").is_some());
//! # Ok::<(), ecore_graph::extract::ExtractError>(())
//! ```

mod attributes;
mod classifiers;
mod error;
mod features;
mod fragment;
mod options;
mod resolve;
mod traverse;

pub use attributes::AttributeMap;
pub use error::{ExtractError, FeatureRole};
pub use features::{AUTO, VOID, cardinality_prefix};
pub use fragment::Fragment;
pub use options::{AttributeCollision, ExtractOptions, OptionsError, TypeErrorPolicy};
pub use resolve::{resolve_type, try_resolve_type};

use crate::graph::{EdgeIdGenerator, Graph, UuidEdgeIds};
use crate::model::{Model, ObjectView};

/// The result of a successful run.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub graph: Graph,
    /// Features skipped under [`TypeErrorPolicy::Lenient`], in traversal order.
    /// Always empty in strict mode.
    pub skipped: Vec<ExtractError>,
}

/// Runs the extraction with an injected edge id generator.
pub struct Extractor<'a> {
    ids: &'a dyn EdgeIdGenerator,
    options: ExtractOptions,
}

impl<'a> Extractor<'a> {
    pub fn new(ids: &'a dyn EdgeIdGenerator) -> Self {
        Self {
            ids,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the graph of every root object of `model`.
    pub fn extract(&self, model: &Model) -> Result<Extraction, ExtractError> {
        self.extract_roots(&model.root_views())
    }

    /// Extract the graph of the given top-level objects, merged in order.
    pub fn extract_roots(&self, roots: &[ObjectView<'_>]) -> Result<Extraction, ExtractError> {
        let fragment = roots
            .iter()
            .map(|root| self.root(*root))
            .collect::<Result<Fragment, _>>()?;
        let (graph, skipped) = fragment.finalize()?;

        tracing::debug!(
            roots = roots.len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            skipped = skipped.len(),
            parallel = self.options.parallel,
            "extracted metamodel graph"
        );
        Ok(Extraction { graph, skipped })
    }
}

/// Strict extraction with random edge ids.
pub fn extract_graph(model: &Model) -> Result<Graph, ExtractError> {
    Extractor::new(&UuidEdgeIds)
        .extract(model)
        .map(|extraction| extraction.graph)
}
