//! Shortest-ladder search
//!
//! Three interchangeable strategies over the implicit word graph. All of them
//! return a shortest ladder when one exists and `None` when the graph (possibly
//! cut by obstacles) does not connect the two words.

mod astar;
mod bfs;
mod frontier;
mod path;
mod strategy;
mod ucs;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use path::{SearchOutcome, SearchPath};
pub use strategy::{Algorithm, SearchStrategy};
pub use ucs::UniformCost;
