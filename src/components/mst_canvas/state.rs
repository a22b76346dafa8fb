use std::f64::consts::PI;

use log::debug;

use crate::graph::{GraphEditor, Point, Result, SpanningTree};

pub const VERTEX_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 10.0;
pub const LAYOUT_MARGIN: f64 = 50.0;

/// Place `count` vertices evenly on a circle centred on the canvas.
pub fn circle_layout(count: usize, width: f64, height: f64) -> Vec<Point> {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let radius = cx.min(cy) - LAYOUT_MARGIN;
	(0..count)
		.map(|i| {
			let angle = (i as f64 / count as f64) * 2.0 * PI;
			Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
		})
		.collect()
}

pub struct CanvasState {
	pub editor: GraphEditor,
	/// Vertex being dragged, if any.
	pub drag: Option<usize>,
	pub mst: Option<SpanningTree>,
	pub width: f64,
	pub height: f64,
	pub needs_redraw: bool,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			editor: GraphEditor::new(),
			drag: None,
			mst: None,
			width,
			height,
			needs_redraw: true,
		}
	}

	/// Vertex under the pointer. When several overlap the highest index wins.
	pub fn vertex_at_position(&self, x: f64, y: f64) -> Option<usize> {
		self.editor
			.vertices()
			.iter()
			.enumerate()
			.filter(|(_, v)| (v.x - x).hypot(v.y - y) < HIT_RADIUS)
			.map(|(i, _)| i)
			.last()
	}

	fn invalidate(&mut self) {
		self.mst = None;
		self.needs_redraw = true;
	}

	pub fn generate(&mut self, count: usize) -> Result<()> {
		self.editor
			.reset_with_count(count, &circle_layout(count, self.width, self.height))?;
		self.invalidate();
		Ok(())
	}

	pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
		self.editor.insert_edge(from, to, weight)?;
		self.invalidate();
		Ok(())
	}

	pub fn undo(&mut self) -> Result<()> {
		self.editor.undo()?;
		self.invalidate();
		Ok(())
	}

	pub fn compute_mst(&mut self) -> Result<f64> {
		let tree = self.editor.compute_mst()?;
		let total = tree.total_weight;
		self.mst = Some(tree);
		self.needs_redraw = true;
		Ok(total)
	}

	pub fn begin_drag(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.vertex_at_position(x, y) {
			debug!("dragging vertex {}", idx + 1);
			self.drag = Some(idx);
		}
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.drag {
			if self.editor.move_vertex(idx, x, y).is_ok() {
				self.invalidate();
			}
		}
	}

	pub fn end_drag(&mut self) {
		self.drag = None;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.needs_redraw = true;
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::graph::GraphError;

	#[rstest]
	#[case(1)]
	#[case(4)]
	#[case(7)]
	fn circle_layout_keeps_vertices_on_radius(#[case] count: usize) {
		let points = circle_layout(count, 800.0, 600.0);
		assert_eq!(points.len(), count);
		for p in &points {
			let r = (p.x - 400.0).hypot(p.y - 300.0);
			assert!((r - 250.0).abs() < 1e-9);
		}
		assert!((points[0].x - 650.0).abs() < 1e-9);
		assert!((points[0].y - 300.0).abs() < 1e-9);
	}

	#[test]
	fn drag_moves_the_hit_vertex_and_clears_overlay() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.generate(2).unwrap();
		state.add_edge(0, 1, 5.0).unwrap();
		state.compute_mst().unwrap();
		assert!(state.mst.is_some());

		let v = state.editor.vertices()[1];
		state.begin_drag(v.x + 3.0, v.y - 3.0);
		assert_eq!(state.drag, Some(1));
		state.drag_to(120.0, 80.0);
		state.end_drag();

		assert_eq!(state.editor.vertices()[1], Point::new(120.0, 80.0));
		assert!(state.mst.is_none());
		assert_eq!(state.drag, None);
	}

	#[test]
	fn pointer_on_empty_canvas_does_not_drag() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.generate(3).unwrap();
		state.begin_drag(400.0, 300.0);
		state.drag_to(10.0, 10.0);
		assert_eq!(state.drag, None);
		assert!(state.editor.vertices().iter().all(|v| *v != Point::new(10.0, 10.0)));
	}

	#[test]
	fn disconnected_mst_keeps_previous_state() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.generate(2).unwrap();
		assert!(matches!(
			state.compute_mst(),
			Err(GraphError::DisconnectedGraph { .. })
		));
		assert!(state.mst.is_none());
	}
}
