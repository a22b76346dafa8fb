use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, VERTEX_RADIUS};
use crate::graph::{Edge, Vertex, pixel_distance, to_pixels};

// Edges whose drawn length drifts further than this from their weight are
// drawn dashed.
const DRIFT_TOLERANCE: f64 = 0.01;

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.set_font("16px Arial");
	draw_edges(state, ctx);
	draw_mst(state, ctx);
	draw_vertices(state, ctx);
}

fn endpoints(vertices: &[Vertex], edge: &Edge) -> Option<(Vertex, Vertex)> {
	Some((*vertices.get(edge.from)?, *vertices.get(edge.to)?))
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, a: Vertex, b: Vertex) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let vertices = state.editor.vertices();
	let solid = js_sys::Array::new();
	let dashed = js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0));

	ctx.set_stroke_style_str("black");
	ctx.set_line_width(2.0);
	for edge in state.editor.edges() {
		let Some((a, b)) = endpoints(vertices, edge) else {
			continue;
		};
		let expected = to_pixels(edge.weight);
		let drift = (pixel_distance(a, b) - expected).abs() / expected;
		let _ = ctx.set_line_dash(if drift > DRIFT_TOLERANCE {
			&dashed
		} else {
			&solid
		});
		stroke_segment(ctx, a, b);

		ctx.set_fill_style_str("black");
		let (mid_x, mid_y) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
		let _ = ctx.fill_text(&format!("{:.2}m", edge.weight), mid_x, mid_y);
	}
	let _ = ctx.set_line_dash(&solid);
}

fn draw_mst(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let Some(tree) = &state.mst else {
		return;
	};
	let vertices = state.editor.vertices();
	ctx.set_stroke_style_str("green");
	ctx.set_line_width(4.0);
	for edge in &tree.edges {
		if let Some((a, b)) = endpoints(vertices, edge) {
			stroke_segment(ctx, a, b);
		}
	}
}

fn draw_vertices(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	for (index, v) in state.editor.vertices().iter().enumerate() {
		let dragged = state.drag == Some(index);
		ctx.begin_path();
		let _ = ctx.arc(v.x, v.y, VERTEX_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if dragged { "#d62728" } else { "blue" });
		ctx.fill();

		ctx.set_fill_style_str("blue");
		let _ = ctx.fill_text(&(index + 1).to_string(), v.x + 10.0, v.y + 10.0);
	}
}
