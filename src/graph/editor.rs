//! The operations the presentation layer calls.
//!
//! Every top-level mutation except dragging records the previous graph on the
//! history first, so one undo reverts exactly one reset, vertex addition or
//! edge insertion. A call that fails records nothing and changes nothing.

use log::{debug, warn};

use super::error::Result;
use super::geometry::Point;
use super::history::HistoryStack;
use super::mst::{SpanningTree, prim_mst};
use super::store::GraphStore;
use super::types::{Edge, Graph, Vertex};

/// Live graph plus its undo history.
#[derive(Clone, Debug, Default)]
pub struct GraphEditor {
	store: GraphStore,
	history: HistoryStack,
}

impl GraphEditor {
	/// An editor over an empty graph with no history.
	pub fn new() -> Self {
		Self::default()
	}

	/// The live graph.
	pub fn graph(&self) -> &Graph {
		self.store.graph()
	}

	/// Vertex positions in index order.
	pub fn vertices(&self) -> &[Vertex] {
		self.store.vertices()
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		self.store.edges()
	}

	/// Number of snapshots available to undo.
	pub fn history_len(&self) -> usize {
		self.history.len()
	}

	/// Whether [`undo`](Self::undo) would succeed.
	pub fn can_undo(&self) -> bool {
		!self.history.is_empty()
	}

	/// Replace the graph with unconnected vertices at `positions`.
	pub fn reset<I, P>(&mut self, positions: I) -> Result<()>
	where
		I: IntoIterator<Item = P>,
		P: Into<Point>,
	{
		let before = self.store.snapshot();
		self.store.reset(positions)?;
		self.history.record(before);
		debug!("reset graph to {} vertices", self.store.graph().vertex_count());
		Ok(())
	}

	/// Like [`reset`](Self::reset), checking `count` against the positions.
	pub fn reset_with_count(&mut self, count: usize, positions: &[Point]) -> Result<()> {
		let before = self.store.snapshot();
		self.store.reset_with_count(count, positions)?;
		self.history.record(before);
		debug!("reset graph to {count} vertices");
		Ok(())
	}

	/// Append a vertex at `position` and return its index.
	pub fn add_vertex(&mut self, position: Point) -> Result<usize> {
		let before = self.store.snapshot();
		let index = self.store.add_vertex(position)?;
		self.history.record(before);
		debug!("added vertex {index} at ({:.1}, {:.1})", position.x, position.y);
		Ok(index)
	}

	/// Connect two vertices; see [`GraphStore::insert_edge`].
	pub fn insert_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<Edge> {
		let before = self.store.snapshot();
		let edge = self.store.insert_edge(from, to, weight)?;
		self.history.record(before);
		debug!(
			"inserted edge {from} -> {to} ({weight} m), {} edges",
			self.store.graph().edge_count()
		);
		Ok(edge)
	}

	/// Drag a vertex. Not recorded on the history.
	pub fn move_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
		self.store.move_vertex(index, x, y)
	}

	/// Restore the graph as it was before the last recorded mutation.
	pub fn undo(&mut self) -> Result<()> {
		let previous = self.history.pop().inspect_err(|e| warn!("undo: {e}"))?;
		self.store.restore(previous);
		debug!("undo, {} snapshots left", self.history.len());
		Ok(())
	}

	/// Minimum spanning tree of the live graph.
	pub fn compute_mst(&self) -> Result<SpanningTree> {
		prim_mst(self.store.graph())
	}
}
