//! Vertex, edge and graph value types.

use super::error::{GraphError, Result};
use super::geometry::Point;

/// A vertex is identified by its position in the vertex sequence.
pub type Vertex = Point;

/// An undirected weighted edge, stored in the orientation it was inserted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Index of the anchoring endpoint.
	pub from: usize,
	/// Index of the endpoint that was repositioned on insertion.
	pub to: usize,
	/// Real-world length in metres.
	pub weight: f64,
}

impl Edge {
	/// Build an edge from its endpoints and weight.
	pub const fn new(from: usize, to: usize, weight: f64) -> Self {
		Self { from, to, weight }
	}
}

/// Vertices and edges of the editable graph.
///
/// `Clone` is a full structural copy: a cloned graph shares no storage with
/// its source, which is what history snapshots rely on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	/// Vertex positions; the index is the vertex identity.
	pub vertices: Vec<Vertex>,
	/// Edges in insertion order.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Fail with [`GraphError::OutOfRange`] unless `index` names a vertex.
	pub fn check_index(&self, index: usize) -> Result<()> {
		if index < self.vertices.len() {
			Ok(())
		} else {
			Err(GraphError::OutOfRange {
				index,
				len: self.vertices.len(),
			})
		}
	}

	/// Position of the vertex at `index`.
	pub fn vertex(&self, index: usize) -> Result<Vertex> {
		self.check_index(index)?;
		Ok(self.vertices[index])
	}
}
