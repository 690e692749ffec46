//! The EEG-HRV directed graph and its non-neighbor query.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, warn};

use super::error::{GraphError, Result};
use super::nodes::{NODE_COUNT, Node};
use super::types::GraphInput;

/// Directed graph over the fixed 15-node EEG-HRV table.
///
/// The node set is always the whole table; only the edges vary between
/// instances. Edges are fixed once construction returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EegHrvDiGraph {
	/// Out-neighbors per node, in insertion order. This order drives
	/// breadth-first tie-breaking.
	successors: [Vec<Node>; NODE_COUNT],
	/// Every edge once, in insertion order.
	edges: Vec<(Node, Node)>,
}

impl EegHrvDiGraph {
	/// Build from whichever input is present. The adjacency matrix takes
	/// precedence; with neither input construction fails.
	pub fn new(adjacency: Option<&[Vec<f64>]>, edges: Option<&[(Node, Node)]>) -> Result<Self> {
		match (adjacency, edges) {
			(Some(matrix), ignored) => {
				if ignored.is_some() {
					warn!("eeg-hrv-graph: both adjacency and edge list given, ignoring edge list");
				}
				Self::from_adjacency(matrix)
			}
			(None, Some(edges)) => Ok(Self::from_edges(edges.iter().copied())),
			(None, None) => Err(GraphError::NoInput),
		}
	}

	/// Build from a 15x15 0/1 matrix whose rows and columns follow the node
	/// table order. `matrix[i][j] == 1.0` adds the edge `node[i] -> node[j]`.
	pub fn from_adjacency(matrix: &[Vec<f64>]) -> Result<Self> {
		let shape_error = |cols| GraphError::ShapeMismatch {
			rows: matrix.len(),
			cols,
		};
		if matrix.len() != NODE_COUNT {
			return Err(shape_error(matrix.first().map_or(0, Vec::len)));
		}
		if let Some(row) = matrix.iter().find(|row| row.len() != NODE_COUNT) {
			return Err(shape_error(row.len()));
		}

		let mut graph = Self::empty();
		for (row, (source, values)) in Node::ALL.into_iter().zip(matrix).enumerate() {
			for (col, (target, &value)) in Node::ALL.into_iter().zip(values).enumerate() {
				if value == 1.0 {
					graph.add_edge(source, target);
				} else if value != 0.0 {
					return Err(GraphError::InvalidEntry { row, col, value });
				}
			}
		}
		debug!("eeg-hrv-graph: built {} edges from adjacency", graph.edge_count());
		Ok(graph)
	}

	/// Build from explicit edges. Duplicates collapse into one edge.
	pub fn from_edges<I>(edges: I) -> Self
	where
		I: IntoIterator<Item = (Node, Node)>,
	{
		let mut graph = Self::empty();
		for (source, target) in edges {
			graph.add_edge(source, target);
		}
		debug!("eeg-hrv-graph: built {} edges from edge list", graph.edge_count());
		graph
	}

	/// Build from label pairs, rejecting labels outside the node table.
	pub fn from_labeled_edges<I, S>(edges: I) -> Result<Self>
	where
		I: IntoIterator<Item = (S, S)>,
		S: AsRef<str>,
	{
		let edges = edges
			.into_iter()
			.map(|(source, target)| -> Result<(Node, Node)> {
				Ok((source.as_ref().parse()?, target.as_ref().parse()?))
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self::from_edges(edges))
	}

	/// Build from deserialized input, with the same precedence as [`Self::new`].
	pub fn from_input(input: &GraphInput) -> Result<Self> {
		match (&input.adjacency, &input.edges) {
			(Some(matrix), ignored) => {
				if ignored.is_some() {
					warn!("eeg-hrv-graph: both adjacency and edge list given, ignoring edge list");
				}
				Self::from_adjacency(matrix)
			}
			(None, Some(edges)) => Self::from_labeled_edges(edges.iter().map(|(s, t)| (s, t))),
			(None, None) => Err(GraphError::NoInput),
		}
	}

	/// Build from a JSON [`GraphInput`] document.
	pub fn from_json(json: &str) -> Result<Self> {
		Self::from_input(&GraphInput::from_json(json)?)
	}

	/// The edge list form of this graph.
	pub fn to_input(&self) -> GraphInput {
		GraphInput {
			adjacency: None,
			edges: Some(
				self.edges
					.iter()
					.map(|&(s, t)| (s.label().to_string(), t.label().to_string()))
					.collect(),
			),
		}
	}

	/// The edge list form of this graph as JSON.
	pub fn to_json(&self) -> Result<String> {
		self.to_input().to_json()
	}

	/// No edges yet. Only reachable through the builders, which always
	/// start from some input.
	fn empty() -> Self {
		Self {
			successors: Default::default(),
			edges: Vec::new(),
		}
	}

	fn add_edge(&mut self, source: Node, target: Node) {
		let successors = &mut self.successors[source.index()];
		if !successors.contains(&target) {
			successors.push(target);
			self.edges.push((source, target));
		}
	}

	/// All nodes in table order. Always the full table.
	pub fn nodes(&self) -> impl Iterator<Item = Node> {
		Node::ALL.into_iter()
	}

	/// Always [`NODE_COUNT`].
	pub fn node_count(&self) -> usize {
		NODE_COUNT
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
		self.edges.iter().copied()
	}

	/// Number of distinct edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether the edge `source -> target` exists.
	pub fn has_edge(&self, source: Node, target: Node) -> bool {
		self.successors[source.index()].contains(&target)
	}

	/// Out-neighbors of `node`, in insertion order.
	pub fn successors(&self, node: Node) -> &[Node] {
		&self.successors[node.index()]
	}

	/// Whether edges exist in both directions between `a` and `b`.
	pub fn is_mutual(&self, a: Node, b: Node) -> bool {
		self.has_edge(a, b) && self.has_edge(b, a)
	}

	/// Edges of the breadth-first tree rooted at `root`, in discovery order.
	/// Each reachable node other than the root appears as a target exactly once.
	pub fn bfs_tree(&self, root: Node) -> Vec<(Node, Node)> {
		let mut visited = [false; NODE_COUNT];
		visited[root.index()] = true;
		let mut queue = VecDeque::from([root]);
		let mut tree = Vec::new();

		while let Some(node) = queue.pop_front() {
			for &next in self.successors(node) {
				if !visited[next.index()] {
					visited[next.index()] = true;
					tree.push((node, next));
					queue.push_back(next);
				}
			}
		}
		tree
	}

	/// Subgraph of first-hop edges from `a` and `b` whose targets are not
	/// shared by both.
	///
	/// When `a` and `b` are mutually connected, the result holds every
	/// first-hop edge `a -> x` of the breadth-first tree rooted at `a` such
	/// that `b -> x` is not in the tree rooted at `b`, plus the same with the
	/// roles swapped. The edges between `a` and `b` themselves are left out,
	/// although the set rule alone would keep `a -> b` and `b -> a` (a root
	/// is never a tree target).
	/// When they are not mutually connected the result has no edges.
	pub fn non_neighbors(&self, a: Node, b: Node) -> Result<Self> {
		if a == b {
			return Err(GraphError::SameNode(a));
		}
		if !self.is_mutual(a, b) {
			debug!("eeg-hrv-graph: {a} and {b} are not mutually connected");
			return Ok(Self::empty());
		}

		let tree_a = self.bfs_tree(a);
		let tree_b = self.bfs_tree(b);
		let exclusive = |root: Node, other: Node, tree: &[(Node, Node)], other_tree: &[(Node, Node)]| {
			tree.iter()
				.copied()
				.filter(move |&(source, target)| {
					source == root && target != other && !other_tree.contains(&(other, target))
				})
				.collect::<Vec<_>>()
		};

		let mut edges = exclusive(a, b, &tree_a, &tree_b);
		edges.extend(exclusive(b, a, &tree_b, &tree_a));
		Ok(Self::from_edges(edges))
	}
}

impl fmt::Display for EegHrvDiGraph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"EegHrvDiGraph with {} nodes and {} edges",
			self.node_count(),
			self.edge_count()
		)
	}
}
