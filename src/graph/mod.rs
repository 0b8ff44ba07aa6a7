//! Renderer-agnostic output graph.
//!
//! A [`Graph`] is what a diagramming layer consumes: nodes keyed by
//! classifier name and synthesized edges between them. Edge targets are
//! plain id strings and may dangle (e.g. a reference to a classifier in
//! another document).

mod ids;

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

pub use ids::{EdgeIdGenerator, SequentialEdgeIds, UuidEdgeIds};

// ============================================================================
// NODES
// ============================================================================

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Class,
    Enum,
    /// Any id-carrying element (structural scanner only).
    Element,
}

impl NodeKind {
    /// Fixed glyph shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Class => "◼",
            Self::Enum => "☰",
            Self::Element => "◇",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Element => "element",
        })
    }
}

/// One classifier in the output graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    pub icon: &'static str,
    /// Attribute, literal and operation entries in insertion order.
    pub attributes: IndexMap<String, String>,
}

impl Node {
    /// A node whose id and label are both `name`.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            id: name,
            kind,
            icon: kind.icon(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

// ============================================================================
// EDGES
// ============================================================================

/// What an edge stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeKind {
    /// A structural reference; `containment` marks owned targets.
    Reference { containment: bool },
    /// Source specializes target.
    Supertype,
    /// Raw id/idref link (structural scanner only).
    IdRef,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference { .. } => "reference",
            Self::Supertype => "supertype",
            Self::IdRef => "idref",
        })
    }
}

/// A synthesized relationship between two node ids.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        kind: EdgeKind,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Containment flag; `None` for non-reference edges.
    pub fn containment(&self) -> Option<bool> {
        match self.kind {
            EdgeKind::Reference { containment } => Some(containment),
            _ => None,
        }
    }
}

// ============================================================================
// GRAPH
// ============================================================================

/// The finished `{nodes, edges}` pair of one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Assemble a graph whose id uniqueness has already been checked.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == source)
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
