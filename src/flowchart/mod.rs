//! Flowchart builder: nodes, edges, subgraphs and their styles, plus the
//! deterministic renderer for the `graph` dialect.
//!
//! The aggregate follows a map-plus-order layout: lookups go through
//! identifier maps while render order is kept in separate insertion-ordered
//! lists, so the two never have to agree on iteration order.

mod edge;
mod node;
mod subgraph;

pub use edge::{Edge, EdgeShape, EdgeStyle};
pub use node::{Node, NodeShape, NodeStyle};
pub use subgraph::Subgraph;

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::live;

/// Direction of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom (`TB`), the default.
    #[default]
    TopDown,
    /// Bottom to top (`BT`).
    BottomUp,
    /// Right to left (`RL`).
    RightLeft,
    /// Left to right (`LR`).
    LeftRight,
}

impl Direction {
    fn token(&self) -> &'static str {
        match self {
            Direction::TopDown => "TB",
            Direction::BottomUp => "BT",
            Direction::RightLeft => "RL",
            Direction::LeftRight => "LR",
        }
    }
}

/// A reference to a renderable top-level entity.
///
/// Node and subgraph structs live in the chart's lookup maps; item lists
/// hold ids so that render order and lookup stay independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphItem {
    Node(String),
    Subgraph(String),
}

/// Aggregate owning every entity and style of one flowchart.
///
/// All nodes share one flat namespace across the whole chart, and so do all
/// subgraphs, regardless of nesting; only render order is scoped. The model
/// is append-only: entities are added through the chart and never removed.
#[derive(Debug, Clone, Default)]
pub struct Flowchart {
    nodes: HashMap<String, Node>,
    subgraphs: HashMap<String, Subgraph>,
    edges: Vec<Edge>,
    items: Vec<GraphItem>,
    node_styles: HashMap<String, NodeStyle>,
    node_style_order: Vec<String>,
    edge_styles: HashMap<String, EdgeStyle>,
    default_edge_style: Option<String>,
    /// Direction used for the header line.
    pub direction: Direction,
}

impl Flowchart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node with the default rectangle shape.
    ///
    /// Returns `None` without mutating anything if the id is already taken.
    pub fn add_node(&mut self, id: &str) -> Option<&mut Node> {
        if self.nodes.contains_key(id) {
            return None;
        }
        self.items.push(GraphItem::Node(id.to_string()));
        Some(
            self.nodes
                .entry(id.to_string())
                .or_insert_with(|| Node::new(id)),
        )
    }

    /// Add a node inside an existing subgraph.
    ///
    /// Returns `None` if the subgraph is unknown or the id is already taken
    /// anywhere in the chart.
    pub fn add_node_in(&mut self, subgraph: &str, id: &str) -> Option<&mut Node> {
        if self.nodes.contains_key(id) {
            return None;
        }
        let parent = self.subgraphs.get_mut(subgraph)?;
        parent.items.push(GraphItem::Node(id.to_string()));
        Some(
            self.nodes
                .entry(id.to_string())
                .or_insert_with(|| Node::new(id)),
        )
    }

    /// Add a top-level subgraph.
    ///
    /// Returns `None` without mutating anything if the id is already taken.
    pub fn add_subgraph(&mut self, id: &str) -> Option<&mut Subgraph> {
        if self.subgraphs.contains_key(id) {
            return None;
        }
        self.items.push(GraphItem::Subgraph(id.to_string()));
        Some(
            self.subgraphs
                .entry(id.to_string())
                .or_insert_with(|| Subgraph::new(id)),
        )
    }

    /// Add a subgraph nested inside an existing one.
    ///
    /// Returns `None` if the parent is unknown or the id is already taken.
    pub fn add_subgraph_in(&mut self, parent: &str, id: &str) -> Option<&mut Subgraph> {
        if self.subgraphs.contains_key(id) {
            return None;
        }
        let outer = self.subgraphs.get_mut(parent)?;
        outer.items.push(GraphItem::Subgraph(id.to_string()));
        Some(
            self.subgraphs
                .entry(id.to_string())
                .or_insert_with(|| Subgraph::new(id)),
        )
    }

    /// Add an edge between two existing nodes.
    ///
    /// Edges have no id; the returned edge's [`Edge::index`] is its position
    /// in add order and the target of any `linkStyle` line. Returns `None`
    /// if either endpoint is unknown.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Option<&mut Edge> {
        if !self.nodes.contains_key(from) || !self.nodes.contains_key(to) {
            return None;
        }
        let index = self.edges.len();
        self.edges.push(Edge::new(index, from, to));
        self.edges.last_mut()
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn get_subgraph(&self, id: &str) -> Option<&Subgraph> {
        self.subgraphs.get(id)
    }

    pub fn get_subgraph_mut(&mut self, id: &str) -> Option<&mut Subgraph> {
        self.subgraphs.get_mut(id)
    }

    /// Look up an edge by its sequence index.
    pub fn get_edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn get_edge_mut(&mut self, index: usize) -> Option<&mut Edge> {
        self.edges.get_mut(index)
    }

    /// All nodes, in no particular order.
    pub fn list_nodes(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    /// All subgraphs, in no particular order.
    pub fn list_subgraphs(&self) -> Vec<&Subgraph> {
        self.subgraphs.values().collect()
    }

    /// All edges, in add order.
    pub fn list_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node style by id, creating it on first use.
    pub fn node_style(&mut self, id: &str) -> &mut NodeStyle {
        if !self.node_styles.contains_key(id) {
            self.node_style_order.push(id.to_string());
        }
        self.node_styles
            .entry(id.to_string())
            .or_insert_with(|| NodeStyle::new(id))
    }

    /// Look up an edge style by id, creating it on first use.
    pub fn edge_style(&mut self, id: &str) -> &mut EdgeStyle {
        self.edge_styles
            .entry(id.to_string())
            .or_insert_with(|| EdgeStyle::new(id))
    }

    /// Make a style the chart-wide default, rendered as one
    /// `linkStyle default` line. The style is created if it doesn't exist.
    pub fn set_default_edge_style(&mut self, id: &str) -> &mut EdgeStyle {
        self.default_edge_style = Some(id.to_string());
        self.edge_style(id)
    }

    pub fn default_edge_style(&self) -> Option<&EdgeStyle> {
        self.edge_styles.get(self.default_edge_style.as_deref()?)
    }

    /// Render the whole chart to `graph` dialect text.
    ///
    /// Pure and deterministic: header, optional default `linkStyle`, one
    /// `classDef` line per registered node style, a blank separator, the
    /// top-level items in insertion order (recursing into subgraphs),
    /// another separator, then the edges in index order. An empty chart
    /// still renders the header and both separators.
    pub fn render(&self) -> String {
        let mut text = format!("graph {}\n", self.direction.token());
        if let Some(style) = self.default_edge_style() {
            text.push_str(&style.render_for("default"));
        }
        for id in &self.node_style_order {
            if let Some(style) = self.node_styles.get(id) {
                text.push_str(&style.render());
            }
        }
        text.push('\n');
        self.render_items(&self.items, &mut text);
        text.push('\n');
        for edge in &self.edges {
            text.push_str(&edge.render());
            if let Some(style) = edge.style.as_ref().and_then(|id| self.edge_styles.get(id)) {
                text.push_str(&style.render_for(&edge.index().to_string()));
            }
        }
        text
    }

    fn render_items(&self, items: &[GraphItem], out: &mut String) {
        for item in items {
            match item {
                GraphItem::Node(id) => {
                    if let Some(node) = self.nodes.get(id) {
                        out.push_str(&node.render());
                    }
                }
                GraphItem::Subgraph(id) => {
                    if let Some(subgraph) = self.subgraphs.get(id) {
                        out.push_str(&format!("subgraph {}\n", subgraph.id()));
                        self.render_items(&subgraph.items, out);
                        out.push_str("end\n");
                    }
                }
            }
        }
    }

    /// Render the chart and encode it as a mermaid.live view URL.
    pub fn live_url(&self) -> Result<String> {
        live::live_url(&self.render())
    }

    /// Open the chart's live-editor URL in the OS default browser.
    pub fn view_in_browser(&self) -> Result<()> {
        live::open_in_browser(&self.live_url()?)
    }
}

impl fmt::Display for Flowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
