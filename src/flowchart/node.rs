//! Nodes, node shapes and `classDef` styles.

/// Bracket pairs that select a node's outline in the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Rectangle,    // [text]
    Rounded,      // (text)
    Stadium,      // ([text])
    Circle,       // ((text))
    Rhombus,      // {text}
    Hexagon,      // {{text}}
    Subroutine,   // [[text]]
    Cylinder,     // [(text)]
    Asymmetric,   // >text]
    Trapezoid,    // [/text\]
    TrapezoidAlt, // [\text/]
}

impl NodeShape {
    /// Opening and closing delimiters for this shape.
    pub fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rectangle => ("[", "]"),
            NodeShape::Rounded => ("(", ")"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Circle => ("((", "))"),
            NodeShape::Rhombus => ("{", "}"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Subroutine => ("[[", "]]"),
            NodeShape::Cylinder => ("[(", ")]"),
            NodeShape::Asymmetric => (">", "]"),
            NodeShape::Trapezoid => ("[/", "\\]"),
            NodeShape::TrapezoidAlt => ("[\\", "/]"),
        }
    }
}

/// A single node of a flowchart.
///
/// Nodes are created through [`Flowchart::add_node`] or
/// [`Flowchart::add_node_in`] and live in the chart's flat node namespace.
///
/// [`Flowchart::add_node`]: super::Flowchart::add_node
/// [`Flowchart::add_node_in`]: super::Flowchart::add_node_in
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    /// Text shown inside the node. Falls back to the id when unset.
    pub label: Option<String>,
    pub shape: NodeShape,
    /// Id of a [`NodeStyle`] registered on the owning chart.
    pub style: Option<String>,
    /// Hyperlink attached to the node via a `click` statement.
    pub link: Option<String>,
    /// Tooltip for the hyperlink. Falls back to the link itself.
    pub link_text: Option<String>,
}

impl Node {
    pub(crate) fn new(id: &str) -> Self {
        Node {
            id: id.to_string(),
            label: None,
            shape: NodeShape::Rectangle,
            style: None,
            link: None,
            link_text: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// One `id<open>"label"<close>` line, plus `class` and `click`
    /// statements when a style or link is attached.
    pub(crate) fn render(&self) -> String {
        let (open, close) = self.shape.brackets();
        let label = self.label.as_deref().unwrap_or(&self.id);
        let mut text = format!("{}{}\"{}\"{}\n", self.id, open, label, close);
        if let Some(style) = &self.style {
            text.push_str(&format!("class {} {}\n", self.id, style));
        }
        if let Some(link) = &self.link {
            let tooltip = self.link_text.as_deref().unwrap_or(link);
            text.push_str(&format!("click {} \"{}\" \"{}\"\n", self.id, link, tooltip));
        }
        text
    }
}

/// A reusable `classDef` style.
///
/// Obtained via [`Flowchart::node_style`], which creates the style on first
/// use; assign its id to any number of nodes through [`Node::style`].
///
/// [`Flowchart::node_style`]: super::Flowchart::node_style
#[derive(Debug, Clone)]
pub struct NodeStyle {
    id: String,
    /// Fill color, e.g. `#f9f`.
    pub fill: Option<String>,
    /// Stroke (border) color.
    pub stroke: Option<String>,
    /// Stroke width in pixels. Defaults to 1.
    pub stroke_width: u32,
    /// `stroke-dasharray` value, e.g. `5 5`.
    pub stroke_dash: Option<String>,
    /// Extra CSS appended verbatim after the generated attributes.
    pub more: Option<String>,
}

impl NodeStyle {
    pub(crate) fn new(id: &str) -> Self {
        NodeStyle {
            id: id.to_string(),
            fill: None,
            stroke: None,
            stroke_width: 1,
            stroke_dash: None,
            more: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// One `classDef` line defining this style.
    pub(crate) fn render(&self) -> String {
        format!("classDef {} {}\n", self.id, self.attributes())
    }

    fn attributes(&self) -> String {
        let mut attrs = Vec::new();
        if let Some(fill) = &self.fill {
            attrs.push(format!("fill:{}", fill));
        }
        if let Some(stroke) = &self.stroke {
            attrs.push(format!("stroke:{}", stroke));
        }
        attrs.push(format!("stroke-width:{}px", self.stroke_width));
        if let Some(dash) = &self.stroke_dash {
            attrs.push(format!("stroke-dasharray:{}", dash));
        }
        if let Some(more) = &self.more {
            attrs.push(more.clone());
        }
        attrs.join(",")
    }
}
