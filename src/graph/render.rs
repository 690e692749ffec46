//! HTML canvas backend for [`Surface`].
//!
//! Maps the unit-circle layout onto the canvas (y pointing up, centered,
//! with a margin), then draws in two passes so nodes sit on top of edges:
//! 1. Edge lines with arrowheads
//! 2. Nodes with a soft radial gradient, then their labels

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::draw::{Scene, SceneNode, Surface};
use super::theme::Color;

/// Label and title text color.
const TEXT_COLOR: Color = Color::rgb(20, 20, 20);

/// A [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
	/// Fraction of the half-extent kept free around the layout circle.
	margin: f64,
}

impl CanvasSurface {
	/// Wrap a context whose canvas is `width` by `height` pixels.
	pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self {
			ctx,
			width,
			height,
			margin: 0.15,
		}
	}

	/// Grab the 2D context of `canvas`, sized to the canvas.
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(JsValue::from)?;
		Ok(Self::new(ctx, canvas.width() as f64, canvas.height() as f64))
	}

	/// Change the margin around the layout circle.
	pub fn with_margin(self, margin: f64) -> Self {
		Self {
			margin: margin.clamp(0.0, 0.9),
			..self
		}
	}

	fn to_screen(&self, (x, y): (f64, f64)) -> (f64, f64) {
		let scale = self.width.min(self.height) / 2.0 * (1.0 - self.margin);
		(self.width / 2.0 + x * scale, self.height / 2.0 - y * scale)
	}

	fn draw_edge(
		&self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		node_radius: f64,
	) -> Result<(), JsValue> {
		let ((x1, y1), (x2, y2)) = (self.to_screen(from), self.to_screen(to));
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return Ok(());
		}

		let arrow_size = node_radius * 0.6;
		let (ux, uy) = (dx / dist, dy / dist);
		let ctx = &self.ctx;

		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(1.5);
		ctx.begin_path();
		ctx.move_to(x1 + ux * node_radius, y1 + uy * node_radius);
		ctx.line_to(
			x2 - ux * (node_radius + arrow_size),
			y2 - uy * (node_radius + arrow_size),
		);
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * node_radius, y2 - uy * node_radius);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);

		ctx.set_fill_style_str(&color.to_css());
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
		Ok(())
	}

	fn draw_node(&self, node: &SceneNode, radius: f64, font_size: f64) -> Result<(), JsValue> {
		let (x, y) = self.to_screen(node.position);
		let ctx = &self.ctx;

		let gradient =
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)?;
		gradient.add_color_stop(0.0, &node.color.lighten(0.4).to_css())?;
		gradient.add_color_stop(1.0, &node.color.to_css())?;

		ctx.begin_path();
		ctx.arc(x, y, radius, 0.0, 2.0 * PI)?;
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();

		ctx.set_fill_style_str(&TEXT_COLOR.to_css());
		ctx.set_font(&format!("{font_size}px sans-serif"));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.fill_text(node.label, x, y)
	}
}

impl Surface for CanvasSurface {
	type Error = JsValue;

	fn draw_graph(&mut self, scene: &Scene) -> Result<(), JsValue> {
		// Node size is a marker area, as in most plotting libraries.
		let radius = scene.node_size.sqrt() / 2.0;

		for edge in &scene.edges {
			let (Some(from), Some(to)) = (scene.node(edge.source), scene.node(edge.target)) else {
				continue;
			};
			self.draw_edge(from.position, to.position, edge.color, radius)?;
		}
		for node in &scene.nodes {
			self.draw_node(node, radius, scene.label_font_size)?;
		}
		Ok(())
	}

	fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f64) -> Result<(), JsValue> {
		let (sx, sy) = self.to_screen((x, y));
		self.ctx.set_fill_style_str(&TEXT_COLOR.to_css());
		self.ctx.set_font(&format!("{font_size}px sans-serif"));
		self.ctx.set_text_align("left");
		self.ctx.set_text_baseline("alphabetic");
		self.ctx.fill_text(text, sx, sy)
	}
}
