//! Construction paths and the non-neighbor query through the public API.

use std::collections::BTreeSet;

use eeg_hrv_graph::{EegHrvDiGraph, GraphError, GraphInput, NODE_COUNT, Node};

fn edge_set(graph: &EegHrvDiGraph) -> BTreeSet<(Node, Node)> {
	graph.edges().collect()
}

/// Deterministic 0/1 matrices with varied densities.
fn matrices() -> impl Iterator<Item = Vec<Vec<f64>>> {
	(0u64..40).map(|seed| {
		let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
		(0..NODE_COUNT)
			.map(|_| {
				(0..NODE_COUNT)
					.map(|_| {
						state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
						if (state >> 33) % 4 < seed % 4 { 1.0 } else { 0.0 }
					})
					.collect()
			})
			.collect()
	})
}

#[test]
fn adjacency_edges_match_ones() {
	for matrix in matrices() {
		let graph = EegHrvDiGraph::from_adjacency(&matrix).unwrap();
		let expected: BTreeSet<_> = (0..NODE_COUNT)
			.flat_map(|i| (0..NODE_COUNT).map(move |j| (i, j)))
			.filter(|&(i, j)| matrix[i][j] == 1.0)
			.map(|(i, j)| (Node::ALL[i], Node::ALL[j]))
			.collect();
		assert_eq!(edge_set(&graph), expected);
		assert_eq!(graph.nodes().count(), NODE_COUNT);
	}
}

#[test]
fn edge_list_round_trips_through_json() {
	let graph = EegHrvDiGraph::from_edges([(Node::Fp1, Node::Hrv), (Node::Hrv, Node::O2)]);
	let json = graph.to_json().unwrap();
	assert_eq!(json, r#"{"edges":[["Fp1","HRV"],["HRV","O2"]]}"#);
	assert_eq!(EegHrvDiGraph::from_json(&json).unwrap(), graph);
}

#[test]
fn json_input_follows_construction_rules() {
	assert!(matches!(EegHrvDiGraph::from_json("{}"), Err(GraphError::NoInput)));
	assert!(matches!(
		EegHrvDiGraph::from_json(r#"{"edges": [["Fp1", "Fpz"]]}"#),
		Err(GraphError::InvalidLabel(label)) if label == "Fpz"
	));
	assert!(matches!(EegHrvDiGraph::from_json("not json"), Err(GraphError::Json(_))));

	let mut adjacency = vec![vec![0.0; NODE_COUNT]; NODE_COUNT];
	adjacency[10][0] = 1.0;
	let input = GraphInput {
		adjacency: Some(adjacency),
		edges: Some(vec![("O1".into(), "O2".into())]),
	};
	let graph = EegHrvDiGraph::from_input(&input).unwrap();
	assert_eq!(edge_set(&graph), BTreeSet::from([(Node::P4, Node::Fp1)]));
}

#[test]
fn node_labels_serialize_as_strings() {
	assert_eq!(serde_json::to_string(&Node::Hrv).unwrap(), r#""HRV""#);
	assert_eq!(serde_json::from_str::<Node>(r#""Oz""#).unwrap(), Node::Oz);
	assert!(serde_json::from_str::<Node>(r#""Oz1""#).is_err());
}

#[test]
fn non_neighbors_small_example() {
	let (a, b, c, d) = (Node::Fz, Node::Cz, Node::F3, Node::C4);
	let graph = EegHrvDiGraph::from_edges([(a, b), (b, a), (a, c), (b, d)]);

	let ab = graph.non_neighbors(a, b).unwrap();
	let ba = graph.non_neighbors(b, a).unwrap();
	assert_eq!(edge_set(&ab), BTreeSet::from([(a, c), (b, d)]));
	assert_eq!(edge_set(&ab), edge_set(&ba));

	let one_way = EegHrvDiGraph::from_edges([(a, b), (a, c), (b, d)]);
	assert_eq!(one_way.non_neighbors(a, b).unwrap().edge_count(), 0);
}

#[test]
fn non_neighbors_is_symmetric_on_dense_graphs() {
	for matrix in matrices() {
		let graph = EegHrvDiGraph::from_adjacency(&matrix).unwrap();
		for a in Node::ALL {
			for b in Node::ALL.into_iter().filter(|&b| b != a) {
				let ab = graph.non_neighbors(a, b).unwrap();
				let ba = graph.non_neighbors(b, a).unwrap();
				assert_eq!(edge_set(&ab), edge_set(&ba), "{a} {b}");
				assert!(ab.edges().all(|(s, t)| (s == a || s == b) && t != a && t != b));
			}
		}
	}
}
