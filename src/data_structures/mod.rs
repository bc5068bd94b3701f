pub mod priority_queue;
pub mod trail;

pub use priority_queue::Frontier;
pub use trail::{count_interchanges, Trail, LINE_MARKER, TRAIL_SEPARATOR};
