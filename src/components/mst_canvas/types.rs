use crate::graph::{GraphError, Result};

/// Raw text of the edge form. Vertex numbers are 1-based as displayed.
#[derive(Clone, Debug, Default)]
pub struct EdgeInput {
	pub from: String,
	pub to: String,
	pub weight: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedEdge {
	pub from: usize,
	pub to: usize,
	pub weight: f64,
}

pub fn parse_vertex_count(raw: &str) -> Result<usize> {
	match raw.trim().parse::<usize>() {
		Ok(n) if n > 0 => Ok(n),
		_ => Err(GraphError::InvalidArgument {
			reason: "Please enter a valid number of vertices.".into(),
		}),
	}
}

impl EdgeInput {
	/// Parse the form, converting vertex numbers to 0-based indices.
	///
	/// Range checks against the live graph are left to the graph itself.
	pub fn parse(&self) -> Result<ParsedEdge> {
		let vertex = |raw: &str| {
			raw.trim()
				.parse::<usize>()
				.ok()
				.and_then(|n| n.checked_sub(1))
				.ok_or_else(|| GraphError::InvalidArgument {
					reason: "Please enter valid vertex indices.".into(),
				})
		};
		let from = vertex(&self.from)?;
		let to = vertex(&self.to)?;
		let weight = self
			.weight
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|w| w.is_finite() && *w > 0.0)
			.ok_or_else(|| GraphError::InvalidArgument {
				reason: "Please enter a valid weight (distance in meters).".into(),
			})?;
		Ok(ParsedEdge { from, to, weight })
	}
}
