//! Metro Route - shortest distance and travel-time queries over a metro network
//!
//! Stations are named vertices of a weighted undirected graph whose edge weights are
//! distances in kilometres. The crate answers two kinds of queries:
//!
//! - the minimum cost between two stations, by distance or by travel time
//!   ([`Dijkstra::shortest_cost`]);
//! - a concrete station-by-station trail achieving that minimum, with line
//!   interchanges penalised in time mode ([`ExhaustiveSearch`]).
//!
//! [`RoutePlanner`] bundles both behind a single facade.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod planner;

pub use algorithm::{
    connectivity::has_path, dijkstra::Dijkstra, exhaustive::ExhaustiveSearch, CostMode, Route,
    RouteSearch,
};
pub use config::{Config, SearchSettings, TravelModel};
pub use data_structures::Trail;
/// Re-export main types for convenient use
pub use graph::undirected::MetroGraph;
pub use planner::{RoutePlanner, SearchMode};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Station not found: {0}")]
    StationNotFound(String),

    #[error("Station already exists: {0}")]
    StationExists(String),

    #[error("Connection already exists: {0} <-> {1}")]
    ConnectionExists(String, String),

    #[error("Connection not found: {0} <-> {1}")]
    ConnectionNotFound(String, String),

    #[error("A station cannot be connected to itself: {0}")]
    SelfLoop(String),

    #[error("Connection weight must be positive: {0} <-> {1}")]
    InvalidWeight(String, String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
