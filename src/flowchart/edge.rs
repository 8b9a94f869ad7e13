//! Edges, connector shapes and `linkStyle` styles.

/// Connector tokens between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    Line,        // ---
    Arrow,       // -->
    DottedLine,  // -.-
    DottedArrow, // -.->
    ThickLine,   // ===
    ThickArrow,  // ==>
}

impl EdgeShape {
    pub fn connector(&self) -> &'static str {
        match self {
            EdgeShape::Line => "---",
            EdgeShape::Arrow => "-->",
            EdgeShape::DottedLine => "-.-",
            EdgeShape::DottedArrow => "-.->",
            EdgeShape::ThickLine => "===",
            EdgeShape::ThickArrow => "==>",
        }
    }
}

/// A directed connection between two nodes.
///
/// Edges carry no identifier of their own; they are addressed by the
/// 0-based index assigned when they are added, which is also the index
/// `linkStyle` lines target.
#[derive(Debug, Clone)]
pub struct Edge {
    index: usize,
    from: String,
    to: String,
    /// Text placed on the connector.
    pub label: Option<String>,
    pub shape: EdgeShape,
    /// Id of an [`EdgeStyle`] registered on the owning chart.
    pub style: Option<String>,
}

impl Edge {
    pub(crate) fn new(index: usize, from: &str, to: &str) -> Self {
        Edge {
            index,
            from: from.to_string(),
            to: to.to_string(),
            label: None,
            shape: EdgeShape::Arrow,
            style: None,
        }
    }

    /// Position in the chart's edge sequence, fixed at creation time.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn from_id(&self) -> &str {
        &self.from
    }

    pub fn to_id(&self) -> &str {
        &self.to
    }

    /// The connector line. Any `linkStyle` line is appended by the chart,
    /// which resolves the style id through its registry.
    pub(crate) fn render(&self) -> String {
        match &self.label {
            Some(label) => format!(
                "{}{}|{}|{}\n",
                self.from,
                self.shape.connector(),
                label,
                self.to
            ),
            None => format!("{}{}{}\n", self.from, self.shape.connector(), self.to),
        }
    }
}

/// A reusable `linkStyle` style.
///
/// Obtained via [`Flowchart::edge_style`], which creates the style on first
/// use. Note that a style overrides the stroke appearance an edge gets from
/// its shape: a [`EdgeShape::DottedArrow`] edge loses its dotted pattern
/// unless the style sets [`EdgeStyle::stroke_dash`] itself.
///
/// [`Flowchart::edge_style`]: super::Flowchart::edge_style
#[derive(Debug, Clone)]
pub struct EdgeStyle {
    id: String,
    /// Stroke color.
    pub stroke: Option<String>,
    /// Stroke width in pixels. Defaults to 1.
    pub stroke_width: u32,
    /// `stroke-dasharray` value, e.g. `3`.
    pub stroke_dash: Option<String>,
    /// Extra CSS appended verbatim after the generated attributes.
    pub more: Option<String>,
}

impl EdgeStyle {
    pub(crate) fn new(id: &str) -> Self {
        EdgeStyle {
            id: id.to_string(),
            stroke: None,
            stroke_width: 1,
            stroke_dash: None,
            more: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// One `linkStyle` line targeting an edge index or the literal
    /// `default`.
    pub(crate) fn render_for(&self, target: &str) -> String {
        format!("linkStyle {} {}\n", target, self.attributes())
    }

    fn attributes(&self) -> String {
        let mut attrs = Vec::new();
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
