//! EEG-HRV directed graph.
//!
//! A directed graph over a fixed set of 15 nodes: 14 EEG scalp electrodes
//! laid out on the unit circle and one heart-rate-variability node at the
//! center. Provides:
//! - Construction from a 0/1 adjacency matrix, an edge list, or JSON
//! - The non-neighbor query between two mutually connected nodes
//! - Region-based coloring and drawing through a narrow [`Surface`] trait
//!
//! # Example
//!
//! ```
//! use eeg_hrv_graph::{EegHrvDiGraph, Node};
//!
//! let graph = EegHrvDiGraph::from_edges([
//!     (Node::F3, Node::F4),
//!     (Node::F4, Node::F3),
//!     (Node::F3, Node::C3),
//!     (Node::F4, Node::C4),
//! ]);
//! let sub = graph.non_neighbors(Node::F3, Node::F4).unwrap();
//! assert_eq!(sub.edge_count(), 2);
//! ```

mod digraph;
mod draw;
mod error;
pub mod nodes;
#[cfg(feature = "canvas")]
mod render;
pub mod theme;
mod types;

pub use digraph::EegHrvDiGraph;
pub use draw::{Scene, SceneEdge, SceneNode, Surface};
pub use error::{GraphError, Result};
pub use nodes::{NODE_COUNT, Node, NodeInfo, Region, node_table, position_from_index};
#[cfg(feature = "canvas")]
pub use render::CanvasSurface;
pub use theme::{Color, DrawStyle, Palette};
pub use types::GraphInput;
