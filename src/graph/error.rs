//! Errors raised while building or querying an EEG-HRV graph.

use thiserror::Error;

use super::nodes::Node;

/// Failure modes of graph construction and queries.
///
/// Drawing failures are not listed here: they are the drawing surface's own
/// error type and reach the caller unchanged.
#[derive(Debug, Error)]
pub enum GraphError {
	/// Neither an adjacency matrix nor an edge list was supplied.
	#[error("graph needs an adjacency matrix or an edge list")]
	NoInput,

	/// An edge referenced a label outside the fixed node table.
	#[error("unknown node label `{0}`")]
	InvalidLabel(String),

	/// The adjacency matrix is not square with one row per node.
	#[error("adjacency matrix must be 15x15, got {rows}x{cols}")]
	ShapeMismatch {
		/// Rows supplied.
		rows: usize,
		/// Columns in the offending row.
		cols: usize,
	},

	/// An adjacency entry is neither 0.0 nor 1.0.
	#[error("adjacency entry [{row}][{col}] = {value} is not 0 or 1")]
	InvalidEntry {
		/// Row of the entry.
		row: usize,
		/// Column of the entry.
		col: usize,
		/// The rejected value.
		value: f64,
	},

	/// Both query nodes are the same node.
	#[error("non-neighbor query needs two distinct nodes, got {0} twice")]
	SameNode(Node),

	/// The serialized input could not be parsed.
	#[error("malformed graph input: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
