//! The authoritative graph and the rules enforced when it is mutated.

use super::error::{GraphError, Result};
use super::geometry::{Point, pixel_distance, to_pixels};
use super::types::{Edge, Graph, Vertex};

// Relative error allowed between the drawn length of a new edge and its weight.
const PLACEMENT_TOLERANCE: f64 = 1e-6;

/// Point at `distance` from `anchor` on the ray through `toward`, or along the
/// positive x axis when the two coincide. Halving the offsets keeps the
/// direction finite for coordinates near the `f64` limit.
fn place_at_distance(anchor: Point, toward: Point, distance: f64) -> Point {
	let (dx, dy) = (toward.x / 2.0 - anchor.x / 2.0, toward.y / 2.0 - anchor.y / 2.0);
	let len = dx.hypot(dy);
	let (ux, uy) = if len == 0.0 {
		(1.0, 0.0)
	} else {
		(dx / len, dy / len)
	};
	Point::new(anchor.x + ux * distance, anchor.y + uy * distance)
}

/// Owns the live graph.
///
/// Edge insertion ties geometry to weight by moving the `to` vertex; dragging
/// a vertex afterwards is allowed to break that relation and nothing restores
/// it. Only the stored edge weight is authoritative for the spanning tree.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	graph: Graph,
}

impl GraphStore {
	/// An empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// The live graph.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Vertex positions in index order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.graph.vertices
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.graph.edges
	}

	/// Replace every vertex with `positions` and drop all edges.
	pub fn reset<I, P>(&mut self, positions: I) -> Result<()>
	where
		I: IntoIterator<Item = P>,
		P: Into<Point>,
	{
		let vertices: Vec<Vertex> = positions.into_iter().map(Into::into).collect();
		if vertices.is_empty() {
			return Err(GraphError::invalid("vertex count must be a positive integer"));
		}
		if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
			return Err(GraphError::invalid(format!(
				"vertex {i} has a non-finite position"
			)));
		}
		self.graph = Graph {
			vertices,
			edges: Vec::new(),
		};
		Ok(())
	}

	/// [`reset`](Self::reset) with an explicit vertex count that must match
	/// the number of positions supplied.
	pub fn reset_with_count(&mut self, count: usize, positions: &[Point]) -> Result<()> {
		if count != positions.len() {
			return Err(GraphError::invalid(format!(
				"vertex count {count} does not match {} positions",
				positions.len()
			)));
		}
		self.reset(positions.iter().copied())
	}

	/// Append a vertex and return its index.
	pub fn add_vertex(&mut self, position: Point) -> Result<usize> {
		if !position.is_finite() {
			return Err(GraphError::invalid("vertex position must be finite"));
		}
		self.graph.vertices.push(position);
		Ok(self.graph.vertices.len() - 1)
	}

	/// Connect `from` and `to` with an edge of `weight` metres.
	///
	/// The `to` vertex is moved along the ray from `from` through its current
	/// position so that their distance equals `to_pixels(weight)`. When the two
	/// vertices coincide the ray is taken along the positive x axis. Fails with
	/// [`GraphError::InvalidArgument`] when that position cannot be represented
	/// at the requested distance, leaving the graph unchanged.
	pub fn insert_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<Edge> {
		let anchor = self.graph.vertex(from)?;
		let moving = self.graph.vertex(to)?;
		if !weight.is_finite() || weight <= 0.0 {
			return Err(GraphError::invalid(format!(
				"edge weight must be a positive distance, got {weight}"
			)));
		}
		if from == to {
			return Err(GraphError::invalid(format!(
				"edge endpoints must differ, got {from} twice"
			)));
		}

		let target = to_pixels(weight);
		if !target.is_finite() {
			return Err(GraphError::invalid(format!(
				"edge weight {weight} is too large to draw"
			)));
		}
		let placed = place_at_distance(anchor, moving, target);
		let drawn = pixel_distance(anchor, placed);
		if !placed.is_finite() || (drawn - target).abs() > PLACEMENT_TOLERANCE * target {
			return Err(GraphError::invalid(format!(
				"cannot place vertex {to} at {weight} m from vertex {from}"
			)));
		}
		self.graph.vertices[to] = placed;

		let edge = Edge::new(from, to, weight);
		self.graph.edges.push(edge);
		Ok(edge)
	}

	/// Overwrite the position of the vertex at `index`. Edges are untouched.
	pub fn move_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
		self.graph.check_index(index)?;
		self.graph.vertices[index] = Point::new(x, y);
		Ok(())
	}

	/// An independent copy of the live graph.
	pub fn snapshot(&self) -> Graph {
		self.graph.clone()
	}

	/// Make `graph` the live graph.
	pub fn restore(&mut self, graph: Graph) {
		self.graph = graph;
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::{fixture, rstest};

	use super::*;
	use crate::graph::geometry::to_weight;

	#[fixture]
	fn triangle() -> GraphStore {
		let mut store = GraphStore::new();
		store.reset([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]).unwrap();
		store
	}

	#[test]
	fn reset_rejects_empty_vertex_list() {
		let mut store = GraphStore::new();
		let err = store.reset(Vec::<Point>::new()).unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
	}

	#[rstest]
	fn reset_clears_edges(mut triangle: GraphStore) {
		triangle.insert_edge(0, 1, 5.0).unwrap();
		triangle.reset([(1.0, 1.0)]).unwrap();
		assert_eq!(triangle.vertices(), &[Point::new(1.0, 1.0)]);
		assert!(triangle.edges().is_empty());
	}

	#[rstest]
	fn reset_with_count_checks_length(mut triangle: GraphStore) {
		let before = triangle.snapshot();
		let err = triangle
			.reset_with_count(3, &[Point::new(0.0, 0.0)])
			.unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
		assert_eq!(triangle.graph(), &before);
	}

	#[rstest]
	fn reset_rejects_non_finite_positions(mut triangle: GraphStore) {
		let before = triangle.snapshot();
		assert!(triangle.reset([(0.0, f64::NAN)]).is_err());
		assert_eq!(triangle.graph(), &before);
	}

	#[rstest]
	fn insert_edge_moves_target_to_weight_distance(mut triangle: GraphStore) {
		let edge = triangle.insert_edge(0, 1, 5.0).unwrap();
		assert_eq!(edge, Edge::new(0, 1, 5.0));
		assert_eq!(triangle.vertices()[0], Point::new(0.0, 0.0));
		assert!((triangle.vertices()[1].x - 100.0).abs() < 1e-9);
		assert!(triangle.vertices()[1].y.abs() < 1e-9);
	}

	#[rstest]
	#[case(0.0)]
	#[case(-1.0)]
	#[case(f64::NAN)]
	#[case(f64::INFINITY)]
	fn insert_edge_rejects_bad_weight(mut triangle: GraphStore, #[case] weight: f64) {
		let before = triangle.snapshot();
		let err = triangle.insert_edge(0, 1, weight).unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
		assert_eq!(triangle.graph(), &before);
	}

	#[rstest]
	#[case(3, 0)]
	#[case(0, 3)]
	fn insert_edge_rejects_unknown_vertex(
		mut triangle: GraphStore,
		#[case] from: usize,
		#[case] to: usize,
	) {
		let err = triangle.insert_edge(from, to, 1.0).unwrap_err();
		assert_eq!(err, GraphError::OutOfRange { index: 3, len: 3 });
		assert!(triangle.edges().is_empty());
	}

	#[rstest]
	fn insert_edge_rejects_self_loop(mut triangle: GraphStore) {
		let err = triangle.insert_edge(2, 2, 1.0).unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
	}

	#[test]
	fn coincident_vertices_are_separated_along_x() {
		let mut store = GraphStore::new();
		store.reset([(4.0, 4.0), (4.0, 4.0)]).unwrap();
		store.insert_edge(0, 1, 2.0).unwrap();
		assert_eq!(store.vertices()[1], Point::new(44.0, 4.0));
	}

	#[rstest]
	#[case(1e308)]
	#[case(f64::MAX)]
	fn insert_edge_rejects_weight_beyond_canvas_range(
		mut triangle: GraphStore,
		#[case] weight: f64,
	) {
		let before = triangle.snapshot();
		let err = triangle.insert_edge(0, 1, weight).unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
		assert_eq!(triangle.graph(), &before);
	}

	#[test]
	fn insert_edge_rejects_unrepresentable_placement() {
		let mut store = GraphStore::new();
		store.reset([(-1e308, 0.0), (1e308, 0.0)]).unwrap();
		let before = store.snapshot();
		let err = store.insert_edge(0, 1, 5.0).unwrap_err();
		assert!(matches!(err, GraphError::InvalidArgument { .. }));
		assert_eq!(store.graph(), &before);
		assert!(store.vertices().iter().all(Point::is_finite));
	}

	#[test]
	fn insert_edge_handles_far_apart_vertices() {
		let mut store = GraphStore::new();
		store.reset([(0.0, 0.0), (1e308, 1e308)]).unwrap();
		store.insert_edge(0, 1, 5.0).unwrap();
		let v = store.vertices();
		assert!((to_weight(pixel_distance(v[0], v[1])) - 5.0).abs() < 1e-9);
	}

	#[rstest]
	fn move_vertex_keeps_edges(mut triangle: GraphStore) {
		triangle.insert_edge(0, 1, 5.0).unwrap();
		let edges = triangle.edges().to_vec();
		triangle.move_vertex(1, 300.0, 250.0).unwrap();
		assert_eq!(triangle.edges(), edges.as_slice());
		assert_eq!(triangle.vertices()[1], Point::new(300.0, 250.0));
	}

	#[rstest]
	fn move_vertex_rejects_unknown_vertex(mut triangle: GraphStore) {
		assert_eq!(
			triangle.move_vertex(7, 0.0, 0.0),
			Err(GraphError::OutOfRange { index: 7, len: 3 })
		);
	}

	#[test]
	fn add_vertex_returns_new_index() {
		let mut store = GraphStore::new();
		assert_eq!(store.add_vertex(Point::new(1.0, 2.0)), Ok(0));
		assert_eq!(store.add_vertex(Point::new(3.0, 4.0)), Ok(1));
		assert!(store.add_vertex(Point::new(f64::INFINITY, 0.0)).is_err());
		assert_eq!(store.graph().vertex_count(), 2);
	}

	#[rstest]
	fn snapshot_survives_later_mutation(mut triangle: GraphStore) {
		let snap = triangle.snapshot();
		triangle.insert_edge(0, 2, 3.0).unwrap();
		triangle.move_vertex(0, 50.0, 50.0).unwrap();
		assert_eq!(snap.vertices[0], Point::new(0.0, 0.0));
		assert!(snap.edges.is_empty());
		triangle.restore(snap.clone());
		assert_eq!(triangle.graph(), &snap);
	}

	fn coord() -> impl Strategy<Value = f64> {
		-1e6..1e6f64
	}

	proptest! {
		#[test]
		fn inserted_edge_matches_geometry(
			ax in coord(), ay in coord(), bx in coord(), by in coord(),
			weight in 0.01..1e4f64,
		) {
			let mut store = GraphStore::new();
			store.reset([(ax, ay), (bx, by)]).unwrap();
			store.insert_edge(0, 1, weight).unwrap();
			let v = store.vertices();
			let measured = to_weight(pixel_distance(v[0], v[1]));
			prop_assert!((measured - weight).abs() <= 1e-6 * weight.max(1.0));
		}

		#[test]
		fn moving_never_touches_edges(
			index in 0usize..3, x in coord(), y in coord(),
		) {
			let mut store = GraphStore::new();
			store.reset([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]).unwrap();
			store.insert_edge(0, 1, 5.0).unwrap();
			store.insert_edge(1, 2, 7.5).unwrap();
			let edges = store.edges().to_vec();
			store.move_vertex(index, x, y).unwrap();
			prop_assert_eq!(store.edges(), edges.as_slice());
		}
	}
}
