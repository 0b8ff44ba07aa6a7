//! Structural id/idref scanner.
//!
//! A type-blind alternative to [`EcoreXmi`](super::EcoreXmi) for arbitrary
//! XMI: every element that carries an id becomes an `element` node, and
//! every attribute token or descendant reference naming a known id becomes
//! an `idref` edge. The result is a [`Graph`] directly; the extraction
//! engine is not involved.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::InterchangeError;
use super::xml::{XmlElement, parse_document};
use crate::graph::{Edge, EdgeKind, Graph, Node, NodeKind};

/// Attributes that give an element its id, in priority order.
const ID_ATTRIBUTES: &[&str] = &["xmi:id", "id"];

/// Attributes that give a node its display name, in priority order.
const NAME_ATTRIBUTES: &[&str] = &["name", "label", "simpleName"];

/// Attributes through which a descendant element points at an id.
const REF_ATTRIBUTES: &[&str] = &["xmi:idref", "href", "ref"];

/// Scans any id-carrying XML document into an id/idref graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdRefScanner;

impl IdRefScanner {
    pub fn name(&self) -> &'static str {
        "id/idref scanner"
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        &["xmi", "xml", "ecore"]
    }

    /// Parse `input` and scan it.
    pub fn scan(&self, input: &[u8]) -> Result<Graph, InterchangeError> {
        let document = parse_document(input)?;
        Ok(self.scan_document(&document))
    }

    /// Scan an already parsed document.
    pub fn scan_document(&self, document: &XmlElement) -> Graph {
        // A repeated id keeps its first position but the last element.
        let mut elements: IndexMap<&str, (&str, &XmlElement)> = IndexMap::new();
        for element in std::iter::once(document).chain(document.descendants()) {
            if let Some((key, id)) = element_id(element) {
                elements.insert(id, (key, element));
            }
        }

        let nodes = elements
            .iter()
            .map(|(id, (_, element))| Node::new(NodeKind::Element, *id).with_label(label(element)))
            .collect();

        let mut seen = FxHashSet::default();
        let mut edges = Vec::new();
        let mut push = |edge: Edge| {
            if seen.insert(edge.id.clone()) {
                edges.push(edge);
            }
        };

        for (id, (id_key, element)) in &elements {
            for (attr, value) in &element.attributes {
                // Skip only the attribute that supplied the id; the other one may be a reference
                if attr.as_str() == *id_key {
                    continue;
                }
                for target in reference_tokens(value).filter(|t| elements.contains_key(t)) {
                    push(
                        Edge::new(format!("{id}-{target}-{attr}"), EdgeKind::IdRef, *id, target)
                            .with_label(attr.as_str()),
                    );
                }
            }

            for child in element.descendants() {
                if let Some(target) = child.first_attr(REF_ATTRIBUTES) {
                    if elements.contains_key(target) {
                        push(Edge::new(
                            format!("{id}-{target}-child"),
                            EdgeKind::IdRef,
                            *id,
                            target,
                        ));
                    }
                }
            }
        }

        let graph = Graph::from_parts(nodes, edges);
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "scanned id/idref graph"
        );
        graph
    }
}

/// The attribute that supplies an element's id, with its value.
fn element_id(element: &XmlElement) -> Option<(&'static str, &str)> {
    ID_ATTRIBUTES.iter().find_map(|key| {
        element
            .attr(key)
            .filter(|value| !value.is_empty())
            .map(|value| (*key, value))
    })
}

/// `"{name} ({type})"`, with the type standing in for a missing name.
fn label(element: &XmlElement) -> String {
    let type_name = element.first_attr(&["xsi:type"]).unwrap_or(&element.tag);
    let name = element.first_attr(NAME_ATTRIBUTES).unwrap_or(type_name);
    format!("{name} ({type_name})")
}

/// Candidate id tokens of an attribute value.
fn reference_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
