//! Visual theming for EEG-HRV graphs.
//!
//! Node colors follow the scalp region of each node; edges touching the HRV
//! node take the HRV color, all others a muted translucent gray.

use super::nodes::{Node, Region};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with opacity `a`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Channels as fractions in `0.0..=1.0`, the form most plotting backends take.
	pub fn to_unit(self) -> [f64; 4] {
		[
			self.r as f64 / 255.0,
			self.g as f64 / 255.0,
			self.b as f64 / 255.0,
			self.a,
		]
	}

	/// CSS color string, `#rrggbb` when opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Node and edge colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Left hemisphere electrodes.
	pub left_hemisphere: Color,
	/// Right hemisphere electrodes.
	pub right_hemisphere: Color,
	/// Midline electrodes.
	pub central: Color,
	/// The HRV node and edges touching it.
	pub hrv: Color,
	/// Color of edges that do not touch the HRV node.
	pub edge: Color,
}

impl Palette {
	/// Color of nodes in `region`.
	pub fn region(&self, region: Region) -> Color {
		match region {
			Region::LeftHemisphere => self.left_hemisphere,
			Region::RightHemisphere => self.right_hemisphere,
			Region::Central => self.central,
			Region::Hrv => self.hrv,
		}
	}

	/// Color of the edge `source -> target`.
	pub fn edge(&self, source: Node, target: Node) -> Color {
		if source == Node::Hrv || target == Node::Hrv {
			self.hrv
		} else {
			self.edge
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			left_hemisphere: Color::rgb(255, 102, 102),
			right_hemisphere: Color::rgb(153, 255, 153),
			central: Color::rgb(153, 255, 255),
			hrv: Color::rgb(204, 204, 0),
			edge: Color::rgba(153, 153, 153, 0.3),
		}
	}
}

/// Sizes and placement used when drawing a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawStyle {
	/// Node and edge colors.
	pub palette: Palette,
	/// Node marker area, in the backend's marker units.
	pub node_size: f64,
	/// Font size of node labels.
	pub label_font_size: f64,
	/// Where the title is anchored, in layout coordinates.
	pub title_position: (f64, f64),
	/// Font size of the title.
	pub title_font_size: f64,
}

impl Default for DrawStyle {
	fn default() -> Self {
		Self {
			palette: Palette::default(),
			node_size: 600.0,
			label_font_size: 10.0,
			title_position: (0.9, 0.9),
			title_font_size: 20.0,
		}
	}
}
