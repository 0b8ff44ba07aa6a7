//! Mergeable partial results.
//!
//! [`Fragment::merge`] is the only way partial results are combined. It is
//! plain ordered concatenation, so it is associative with
//! [`Fragment::empty`] as identity, and a parallel traversal only has to
//! concatenate branch results in their original order.
//!
//! Id uniqueness is not checked while fragments are produced. It is checked
//! once, by [`Fragment::finalize`], after the last merge.

use rustc_hash::FxHashSet;

use super::error::ExtractError;
use crate::graph::{Edge, Graph, Node};

/// Nodes, edges and skipped-feature diagnostics from one piece of traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Features dropped under the lenient type-error policy.
    pub skipped: Vec<ExtractError>,
}

impl Fragment {
    /// The identity element of [`Fragment::merge`].
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_node(node: Node) -> Self {
        Self {
            nodes: vec![node],
            ..Self::default()
        }
    }

    pub fn from_edge(edge: Edge) -> Self {
        Self {
            edges: vec![edge],
            ..Self::default()
        }
    }

    pub fn from_skipped(error: ExtractError) -> Self {
        Self {
            skipped: vec![error],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.skipped.is_empty()
    }

    /// `self` followed by `other`.
    pub fn merge(mut self, other: Fragment) -> Self {
        self.append(other);
        self
    }

    /// In-place form of [`Fragment::merge`].
    pub fn append(&mut self, other: Fragment) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
        self.skipped.extend(other.skipped);
    }

    /// Check global id uniqueness and seal the result into a [`Graph`].
    ///
    /// Returns the graph together with the skipped-feature diagnostics.
    pub fn finalize(self) -> Result<(Graph, Vec<ExtractError>), ExtractError> {
        let mut node_ids = FxHashSet::default();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(ExtractError::DuplicateNode(node.id.clone()));
            }
        }

        let mut edge_ids = FxHashSet::default();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(ExtractError::DuplicateEdge(edge.id.clone()));
            }
        }

        Ok((Graph::from_parts(self.nodes, self.edges), self.skipped))
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        iter.into_iter().fold(Fragment::empty(), Fragment::merge)
    }
}

impl Extend<Fragment> for Fragment {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.append(fragment);
        }
    }
}
