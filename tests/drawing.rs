//! Drawing through recording and failing surfaces.

use eeg_hrv_graph::{DrawStyle, EegHrvDiGraph, Node, Palette, Scene, Surface};

#[derive(Default)]
struct Recorder {
	scenes: Vec<Scene>,
	texts: Vec<(f64, f64, String, f64)>,
}

impl Surface for Recorder {
	type Error = std::convert::Infallible;

	fn draw_graph(&mut self, scene: &Scene) -> Result<(), Self::Error> {
		self.scenes.push(scene.clone());
		Ok(())
	}

	fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f64) -> Result<(), Self::Error> {
		self.texts.push((x, y, text.to_string(), font_size));
		Ok(())
	}
}

#[derive(Debug, PartialEq)]
struct SurfaceGone;

struct Broken {
	texts: usize,
}

impl Surface for Broken {
	type Error = SurfaceGone;

	fn draw_graph(&mut self, _scene: &Scene) -> Result<(), SurfaceGone> {
		Err(SurfaceGone)
	}

	fn draw_text(&mut self, _: f64, _: f64, _: &str, _: f64) -> Result<(), SurfaceGone> {
		self.texts += 1;
		Ok(())
	}
}

#[test]
fn draw_sends_graph_then_title() {
	let graph = EegHrvDiGraph::from_edges([(Node::Hrv, Node::Fz), (Node::Fz, Node::Cz)]);
	let mut surface = Recorder::default();
	graph.draw(&mut surface, "rest", 20.0).unwrap();

	assert_eq!(surface.scenes.len(), 1);
	let scene = &surface.scenes[0];
	assert_eq!(scene.nodes.len(), 15);
	assert_eq!(scene.edges.len(), 2);

	let palette = Palette::default();
	assert_eq!(scene.edges[0].color, palette.hrv);
	assert_eq!(scene.edges[1].color, palette.edge);

	assert_eq!(surface.texts, vec![(0.9, 0.9, "rest".to_string(), 20.0)]);
}

#[test]
fn labels_and_positions_come_from_node_table() {
	let mut surface = Recorder::default();
	EegHrvDiGraph::from_edges([]).draw(&mut surface, "", 12.0).unwrap();

	let scene = &surface.scenes[0];
	let labels: Vec<_> = scene.nodes.iter().map(|n| n.label).collect();
	assert_eq!(
		labels,
		vec![
			"Fp1", "Fp2", "F3", "Fz", "F4", "C3", "Cz", "C4", "P3", "Pz", "P4", "O1", "Oz", "O2",
			"HRV"
		]
	);
	for node in &scene.nodes {
		assert_eq!(node.position, node.node.position());
	}
}

#[test]
fn custom_style_moves_title() {
	let style = DrawStyle {
		title_position: (-1.0, 1.0),
		..DrawStyle::default()
	};
	let mut surface = Recorder::default();
	EegHrvDiGraph::from_edges([])
		.draw_styled(&mut surface, &style, "eyes open")
		.unwrap();
	assert_eq!(surface.texts[0].0, -1.0);
	assert_eq!(surface.texts[0].1, 1.0);
}

#[test]
fn title_font_size_reaches_surface() {
	let graph = EegHrvDiGraph::from_edges([(Node::Pz, Node::Oz)]);

	let style = DrawStyle {
		title_font_size: 42.0,
		..DrawStyle::default()
	};
	let mut styled = Recorder::default();
	graph.draw_styled(&mut styled, &style, "task").unwrap();
	assert_eq!(styled.texts[0].3, 42.0);

	let mut plain = Recorder::default();
	graph.draw(&mut plain, "task", 7.0).unwrap();
	assert_eq!(plain.texts[0].3, 7.0);
}

#[test]
fn surface_errors_propagate_unchanged() {
	let graph = EegHrvDiGraph::from_edges([(Node::O1, Node::O2)]);
	let mut surface = Broken { texts: 0 };
	assert_eq!(graph.draw(&mut surface, "t", 20.0), Err(SurfaceGone));
	assert_eq!(surface.texts, 0);
}
