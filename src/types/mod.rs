//! Shared types: errors, weights and algorithm outcomes.

pub mod error;
pub mod outcome;
pub mod weight;

pub use error::{GraphError, GraphResult};
pub use outcome::{BellmanFordOutcome, PathFrom, PathOutcome, ShortestPaths, TopoOutcome};
pub use weight::{Cost, Weight};
