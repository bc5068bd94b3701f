pub mod traits;
pub mod connectivity;
pub mod dijkstra;
pub mod exhaustive;

pub use traits::{CostMode, Route, RouteSearch};
