//! Subgraph containers.

use super::GraphItem;

/// A named container for nodes and further subgraphs.
///
/// Subgraph ids live in the chart-wide subgraph namespace, and the entities
/// nested inside one are stored on the owning [`Flowchart`]; a subgraph
/// only keeps their render order. Use [`Flowchart::add_node_in`] and
/// [`Flowchart::add_subgraph_in`] to populate it.
///
/// [`Flowchart`]: super::Flowchart
/// [`Flowchart::add_node_in`]: super::Flowchart::add_node_in
/// [`Flowchart::add_subgraph_in`]: super::Flowchart::add_subgraph_in
#[derive(Debug, Clone)]
pub struct Subgraph {
    id: String,
    pub(crate) items: Vec<GraphItem>,
}

impl Subgraph {
    pub(crate) fn new(id: &str) -> Self {
        Subgraph {
            id: id.to_string(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render order of the entities directly inside this subgraph.
    pub fn items(&self) -> &[GraphItem] {
        &self.items
    }
}
