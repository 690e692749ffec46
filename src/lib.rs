//! eeg-hrv-graph: fixed-topology EEG-HRV directed graphs.
//!
//! This crate models the 15-node graph used to study coupling between EEG
//! scalp electrodes and heart-rate variability, answers the non-neighbor
//! subgraph query, and draws the graph through any [`Surface`] backend. With
//! the `canvas` feature it ships an HTML canvas backend for WASM builds.

pub mod graph;

pub use graph::{
	Color, DrawStyle, EegHrvDiGraph, GraphError, GraphInput, NODE_COUNT, Node, Palette, Region,
	Scene, SceneEdge, SceneNode, Surface,
};
#[cfg(feature = "canvas")]
pub use graph::CanvasSurface;

/// Initialize logging and panic hooks for the WASM target.
#[cfg(feature = "canvas")]
pub fn init_logging() {
	let _ = console_log::init_with_level(log::Level::Debug);
	console_error_panic_hook::set_once();
	log::info!("eeg-hrv-graph: logging initialized");
}
