//! Whole-graph undo history.

use super::error::{GraphError, Result};
use super::types::Graph;

/// Stack of graph snapshots, most recent on top. Unbounded, no redo.
#[derive(Clone, Debug, Default)]
pub struct HistoryStack {
	snapshots: Vec<Graph>,
}

impl HistoryStack {
	/// An empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Push an independent copy of `graph`.
	pub fn push(&mut self, graph: &Graph) {
		self.record(graph.clone());
	}

	/// Push a snapshot the caller already owns, such as one taken with
	/// [`GraphStore::snapshot`](super::store::GraphStore::snapshot).
	pub fn record(&mut self, snapshot: Graph) {
		self.snapshots.push(snapshot);
	}

	/// Remove and return the most recent snapshot.
	pub fn pop(&mut self) -> Result<Graph> {
		self.snapshots.pop().ok_or(GraphError::EmptyStack)
	}

	/// Number of stored snapshots.
	pub fn len(&self) -> usize {
		self.snapshots.len()
	}

	/// Whether there is nothing to undo.
	pub fn is_empty(&self) -> bool {
		self.snapshots.is_empty()
	}
}
