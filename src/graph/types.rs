//! Serialized graph input and output.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Graph input as it arrives over JSON: an adjacency matrix, an edge list,
/// or both (the matrix wins).
///
/// ```json
/// { "adjacency": [[0.0, 1.0, ...], ...] }
/// { "edges": [["Fp1", "Cz"], ["Cz", "HRV"]] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GraphInput {
	/// Row-major 0/1 matrix in node table order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub adjacency: Option<Vec<Vec<f64>>>,
	/// `(source, target)` label pairs.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub edges: Option<Vec<(String, String)>>,
}

impl GraphInput {
	/// Parse input from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Write input as JSON, leaving out missing fields.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}
