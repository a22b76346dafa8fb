//! Graph model, undo history and spanning tree computation.
//!
//! Nothing in here touches the browser; the canvas component drives a
//! [`GraphEditor`] and redraws from its state.

pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod mst;
pub mod store;
pub mod types;

pub use editor::GraphEditor;
pub use error::{GraphError, Result};
pub use geometry::{METER_TO_PIXEL_RATIO, Point, pixel_distance, to_pixels, to_weight};
pub use history::HistoryStack;
pub use mst::{SpanningTree, prim_mst};
pub use store::GraphStore;
pub use types::{Edge, Graph, Vertex};
