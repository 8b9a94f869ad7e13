//! mermaid-gen - Build Mermaid diagrams in code and share them online
//!
//! The crate models two Mermaid dialects - flowcharts (`graph`) and Gantt
//! charts (`gantt`) - as plain owned data, renders them deterministically
//! to Mermaid source text, and encodes that text into a mermaid.live view
//! URL.
//!
//! # Example
//!
//! ```rust
//! use mermaid_gen::Flowchart;
//!
//! let mut chart = Flowchart::new();
//! chart.add_node("A");
//! chart.add_node("B");
//! if let Some(edge) = chart.add_edge("A", "B") {
//!     edge.label = Some("then".to_string());
//! }
//! println!("{}", chart.render());
//! println!("{}", chart.live_url().unwrap());
//! ```
//!
//! Generation is one-way: the crate never parses Mermaid text back into a
//! model. Diagrams are single-threaded builders with no interior
//! mutability; wrap one in a lock yourself if you must share it.

pub mod error;
pub mod flowchart;
pub mod gantt;
pub mod live;

pub use error::{Error, Result};
pub use flowchart::{
    Direction, Edge, EdgeShape, EdgeStyle, Flowchart, GraphItem, Node, NodeShape, NodeStyle,
    Subgraph,
};
pub use gantt::{AxisFormat, Gantt, Section, Task, TaskConfig};
pub use live::{live_url, open_in_browser, LIVE_URL_BASE};
