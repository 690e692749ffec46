//! Drawing seam between a graph and whatever renders it.
//!
//! A graph never talks to a plotting library directly. It lays itself out
//! into a [`Scene`] and hands that to a [`Surface`], which only has to know
//! how to draw a positioned, colored graph and how to place a line of text.

use log::debug;

use super::digraph::EegHrvDiGraph;
use super::nodes::{Node, node_table};
use super::theme::{Color, DrawStyle};

/// Something a graph can be drawn onto.
pub trait Surface {
	/// Failure raised by the backend. Passed through to the caller unchanged.
	type Error;

	/// Draw all nodes and edges of `scene`.
	fn draw_graph(&mut self, scene: &Scene) -> Result<(), Self::Error>;

	/// Place `text` at `(x, y)` in layout coordinates.
	fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f64) -> Result<(), Self::Error>;
}

/// A node ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	/// Which node this is.
	pub node: Node,
	/// Text drawn on the node.
	pub label: &'static str,
	/// Layout position in unit-circle coordinates.
	pub position: (f64, f64),
	/// Fill color.
	pub color: Color,
}

/// An edge ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	/// Tail of the edge.
	pub source: Node,
	/// Head of the edge.
	pub target: Node,
	/// Line color.
	pub color: Color,
}

/// Fully resolved drawing input: positions, labels and colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Every node, in table order.
	pub nodes: Vec<SceneNode>,
	/// Every edge, in insertion order.
	pub edges: Vec<SceneEdge>,
	/// Node marker area.
	pub node_size: f64,
	/// Font size of node labels.
	pub label_font_size: f64,
}

impl Scene {
	/// Look up the drawn form of `node`.
	pub fn node(&self, node: Node) -> Option<&SceneNode> {
		self.nodes.iter().find(|n| n.node == node)
	}
}

impl EegHrvDiGraph {
	/// Lay the graph out with the given style.
	pub fn scene(&self, style: &DrawStyle) -> Scene {
		let nodes = node_table()
			.iter()
			.map(|info| SceneNode {
				node: info.node,
				label: info.node.label(),
				position: info.position,
				color: style.palette.region(info.region),
			})
			.collect();
		let edges = self
			.edges()
			.map(|(source, target)| SceneEdge {
				source,
				target,
				color: style.palette.edge(source, target),
			})
			.collect();

		Scene {
			nodes,
			edges,
			node_size: style.node_size,
			label_font_size: style.label_font_size,
		}
	}

	/// Draw the graph with the default style and put `title` at the title
	/// anchor in `font_size`.
	pub fn draw<S: Surface>(&self, surface: &mut S, title: &str, font_size: f64) -> Result<(), S::Error> {
		let style = DrawStyle {
			title_font_size: font_size,
			..DrawStyle::default()
		};
		self.draw_styled(surface, &style, title)
	}

	/// Draw with a custom style. The title uses [`DrawStyle::title_font_size`].
	pub fn draw_styled<S: Surface>(
		&self,
		surface: &mut S,
		style: &DrawStyle,
		title: &str,
	) -> Result<(), S::Error> {
		debug!("eeg-hrv-graph: drawing {} edges, title {:?}", self.edge_count(), title);
		surface.draw_graph(&self.scene(style))?;
		let (x, y) = style.title_position;
		surface.draw_text(x, y, title, style.title_font_size)
	}
}
