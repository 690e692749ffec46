//! The fixed node table: 14 EEG scalp electrodes plus the HRV node.
//!
//! Electrodes sit on the unit circle at a counter-clockwise index counted
//! from P4; the HRV node is pinned at the origin. The table order below is
//! also the row/column order of adjacency matrices.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::GraphError;

/// Number of nodes in every EEG-HRV graph.
pub const NODE_COUNT: usize = 15;

/// Number of electrode slots on the layout circle.
const CIRCLE_SLOTS: usize = 14;

/// A node label. Variants are declared in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Node {
	/// Left frontal pole.
	Fp1,
	/// Right frontal pole.
	Fp2,
	/// Left frontal.
	F3,
	/// Frontal midline.
	Fz,
	/// Right frontal.
	F4,
	/// Left central.
	C3,
	/// Central midline.
	Cz,
	/// Right central.
	C4,
	/// Left parietal.
	P3,
	/// Parietal midline.
	Pz,
	/// Right parietal.
	P4,
	/// Left occipital.
	O1,
	/// Occipital midline.
	Oz,
	/// Right occipital.
	O2,
	/// Heart-rate variability.
	Hrv,
}

/// Which side of the scalp a node belongs to, used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
	/// Odd-numbered electrodes.
	LeftHemisphere,
	/// Even-numbered electrodes.
	RightHemisphere,
	/// Midline `z` electrodes.
	Central,
	/// The HRV node.
	Hrv,
}

impl Node {
	/// All nodes in table order.
	pub const ALL: [Node; NODE_COUNT] = [
		Node::Fp1,
		Node::Fp2,
		Node::F3,
		Node::Fz,
		Node::F4,
		Node::C3,
		Node::Cz,
		Node::C4,
		Node::P3,
		Node::Pz,
		Node::P4,
		Node::O1,
		Node::Oz,
		Node::O2,
		Node::Hrv,
	];

	/// Display label, e.g. `"Fp1"` or `"HRV"`.
	pub const fn label(self) -> &'static str {
		match self {
			Node::Fp1 => "Fp1",
			Node::Fp2 => "Fp2",
			Node::F3 => "F3",
			Node::Fz => "Fz",
			Node::F4 => "F4",
			Node::C3 => "C3",
			Node::Cz => "Cz",
			Node::C4 => "C4",
			Node::P3 => "P3",
			Node::Pz => "Pz",
			Node::P4 => "P4",
			Node::O1 => "O1",
			Node::Oz => "Oz",
			Node::O2 => "O2",
			Node::Hrv => "HRV",
		}
	}

	/// Position in the node table (and adjacency matrix).
	pub const fn index(self) -> usize {
		self as usize
	}

	/// The node at `index` in table order.
	pub fn from_index(index: usize) -> Option<Node> {
		Self::ALL.get(index).copied()
	}

	/// Counter-clockwise slot on the layout circle, counted from P4.
	/// `None` for the HRV node, which sits at the center.
	pub const fn circle_slot(self) -> Option<usize> {
		match self {
			Node::P4 => Some(0),
			Node::C4 => Some(1),
			Node::F4 => Some(2),
			Node::Fp2 => Some(3),
			Node::Fp1 => Some(4),
			Node::F3 => Some(5),
			Node::C3 => Some(6),
			Node::P3 => Some(7),
			Node::O1 => Some(8),
			Node::Fz => Some(9),
			Node::Cz => Some(10),
			Node::Pz => Some(11),
			Node::Oz => Some(12),
			Node::O2 => Some(13),
			Node::Hrv => None,
		}
	}

	/// Scalp region, which picks the node color.
	pub const fn region(self) -> Region {
		match self {
			Node::Fp1 | Node::F3 | Node::C3 | Node::P3 | Node::O1 => Region::LeftHemisphere,
			Node::Fp2 | Node::F4 | Node::C4 | Node::P4 | Node::O2 => Region::RightHemisphere,
			Node::Fz | Node::Cz | Node::Pz | Node::Oz => Region::Central,
			Node::Hrv => Region::Hrv,
		}
	}

	/// Layout position, read from the cached node table.
	pub fn position(self) -> (f64, f64) {
		node_table()[self.index()].position
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Node {
	type Err = GraphError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|node| node.label() == s)
			.ok_or_else(|| GraphError::InvalidLabel(s.to_string()))
	}
}

impl TryFrom<String> for Node {
	type Error = GraphError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Node> for String {
	fn from(node: Node) -> Self {
		node.label().to_string()
	}
}

/// One row of the node table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeInfo {
	/// The node this row describes.
	pub node: Node,
	/// Layout position in unit-circle coordinates.
	pub position: (f64, f64),
	/// Coloring region.
	pub region: Region,
}

/// Position on the unit circle for a counter-clockwise slot index.
pub fn position_from_index(index: usize) -> (f64, f64) {
	let angle = 2.0 * PI * index as f64 / CIRCLE_SLOTS as f64;
	(angle.cos(), angle.sin())
}

static NODE_TABLE: LazyLock<[NodeInfo; NODE_COUNT]> = LazyLock::new(|| {
	Node::ALL.map(|node| NodeInfo {
		node,
		position: node.circle_slot().map_or((0.0, 0.0), position_from_index),
		region: node.region(),
	})
});

/// The shared, immutable node table in table order.
pub fn node_table() -> &'static [NodeInfo; NODE_COUNT] {
	&NODE_TABLE
}
