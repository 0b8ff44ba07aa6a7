//! # ecore-graph
//!
//! Reduces Ecore/XMI metamodels to a flat, renderer-agnostic graph of
//! classifier nodes and reference/supertype edges.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → Backends: Ecore XMI reader, id/idref scanner
//!   ↓
//! extract     → Extraction engine: traversal, handlers, type resolution
//!   ↓
//! graph       → Output nodes/edges, edge id generators, JSON/YAML
//!   ↓
//! model       → Typed object arena and borrowed views
//! ```
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "interchange")]
//! # {
//! use ecore_graph::extract::Extractor;
//! use ecore_graph::graph::SequentialEdgeIds;
//! use ecore_graph::interchange::{EcoreXmi, ModelSource};
//!
//! let model = EcoreXmi.read(br##"
//!     <ecore:EPackage xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore" name="zoo">
//!       <eClassifiers xsi:type="ecore:EClass" name="Animal"/>
//!       <eClassifiers xsi:type="ecore:EClass" name="Dog" eSuperTypes="#//Animal"/>
//!     </ecore:EPackage>"##).unwrap();
//!
//! let ids = SequentialEdgeIds::new();
//! let graph = Extractor::new(&ids).extract(&model).unwrap().graph;
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges[0].target, "Animal");
//! # }
//! ```

// ============================================================================
// MODULES (dependency order: model → graph → extract → interchange)
// ============================================================================

/// Typed model access: object arena, kinds, views
pub mod model;

/// Output graph and edge id generation
pub mod graph;

/// Metamodel graph extraction engine
pub mod extract;

/// Document backends: Ecore XMI, id/idref scanner
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the types most callers need
pub use extract::{ExtractError, ExtractOptions, Extraction, Extractor, extract_graph};
pub use graph::{Edge, EdgeIdGenerator, EdgeKind, Graph, Node, NodeKind};
pub use model::{Model, ObjectKind, ObjectView};
