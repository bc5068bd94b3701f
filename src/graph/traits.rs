use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Integer edge weight (distance in kilometres) and the cost type derived from it
pub trait Weight: PrimInt + Unsigned + Debug + Display {
    /// Converts a small configuration constant into this weight type,
    /// saturating at the type's maximum if it does not fit
    fn from_constant(value: u32) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::max_value)
    }
}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display {}

/// Trait representing a weighted undirected graph of named stations
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, each undirected edge counted once
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all station names
    fn stations(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns an iterator over the neighbours of a station and the connecting weights
    fn neighbors(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &str) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &str, b: &str) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: &str, b: &str) -> Option<W>;

    /// Number of connections at a station, `None` if the station is absent
    fn degree(&self, vertex: &str) -> Option<usize>;
}

/// Trait for mutable graph operations
///
/// Every rejected mutation leaves the graph untouched and reports why.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds an isolated station
    fn add_vertex(&mut self, name: &str) -> Result<()>;

    /// Removes a station and every connection touching it
    fn remove_vertex(&mut self, name: &str) -> Result<()>;

    /// Adds an undirected edge between two existing stations
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()>;

    /// Removes an undirected edge
    fn remove_edge(&mut self, a: &str, b: &str) -> Result<()>;
}
