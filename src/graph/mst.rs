//! Minimum spanning tree via Prim's algorithm.
//!
//! The tree grows from vertex 0. Each round scans the whole edge list for the
//! lightest edge with exactly one endpoint in the tree; the first edge seen
//! wins ties. O(n * m), which is fine for hand-built graphs.

use log::info;

use super::error::{GraphError, Result};
use super::types::{Edge, Graph};

/// Edges of a spanning tree and their summed weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
	/// Tree edges in the order they were added, each oriented from the vertex
	/// already in the tree towards the vertex it brought in.
	pub edges: Vec<Edge>,
	/// Sum of the edge weights, in metres.
	pub total_weight: f64,
}

/// Compute the minimum spanning tree of `graph` rooted at vertex 0.
///
/// Fails with [`GraphError::DisconnectedGraph`] when some vertex cannot be
/// reached from vertex 0.
pub fn prim_mst(graph: &Graph) -> Result<SpanningTree> {
	let n = graph.vertex_count();
	if n == 0 {
		return Ok(SpanningTree::default());
	}

	let mut selected = vec![false; n];
	selected[0] = true;
	let mut tree = SpanningTree {
		edges: Vec::with_capacity(n - 1),
		total_weight: 0.0,
	};

	for reached in 1..n {
		let mut best: Option<Edge> = None;
		for edge in &graph.edges {
			let (Some(&from_in), Some(&to_in)) = (selected.get(edge.from), selected.get(edge.to))
			else {
				continue;
			};
			let oriented = match (from_in, to_in) {
				(true, false) => Edge::new(edge.from, edge.to, edge.weight),
				(false, true) => Edge::new(edge.to, edge.from, edge.weight),
				_ => continue,
			};
			if best.is_none_or(|b| oriented.weight < b.weight) {
				best = Some(oriented);
			}
		}

		let Some(edge) = best else {
			return Err(GraphError::DisconnectedGraph { reached, total: n });
		};
		selected[edge.to] = true;
		tree.total_weight += edge.weight;
		tree.edges.push(edge);
	}

	info!(
		"spanning tree over {n} vertices: {} edges, {:.2} m",
		tree.edges.len(),
		tree.total_weight
	);
	Ok(tree)
}
