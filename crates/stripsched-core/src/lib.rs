//! Exact branch-and-bound solver for the two-dimensional strip packing
//! problem, framed as job scheduling: item width is a job's resource
//! footprint, item height its runtime, and the strip width a machine's
//! resource capacity. Minimises the makespan (the strip's used height).

pub mod bounds;
pub mod corners;
pub mod generator;
pub mod ordering;
pub mod solver;
pub mod types;

pub use ordering::Strategy;
pub use solver::{SolveOutcome, Solver, SolverConfig};
pub use types::{Instance, Item, PlacedItem, Result, SolverError};
