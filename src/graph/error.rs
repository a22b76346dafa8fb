//! Error taxonomy for the graph core.
//!
//! Every variant is recoverable. A failed operation leaves the store and the
//! history exactly as they were before the call.

use thiserror::Error;

/// An error produced by a graph core operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
	/// A count, weight or coordinate was malformed.
	#[error("invalid argument: {reason}")]
	InvalidArgument {
		/// Human readable description of the rejected value.
		reason: String,
	},
	/// A vertex index was outside the current vertex sequence.
	#[error("vertex index {index} is out of range for {len} vertices")]
	OutOfRange {
		/// The rejected index.
		index: usize,
		/// Number of vertices at the time of the call.
		len: usize,
	},
	/// Undo was requested with no snapshot on the history stack.
	#[error("nothing to undo")]
	EmptyStack,
	/// The spanning tree could not reach every vertex from vertex 0.
	#[error("graph is disconnected: reached {reached} of {total} vertices")]
	DisconnectedGraph {
		/// Vertices connected to the starting vertex when the search stalled.
		reached: usize,
		/// Total number of vertices in the graph.
		total: usize,
	},
}

impl GraphError {
	pub(crate) fn invalid(reason: impl Into<String>) -> Self {
		Self::InvalidArgument {
			reason: reason.into(),
		}
	}
}

/// Result alias used throughout the graph core.
pub type Result<T> = std::result::Result<T, GraphError>;
