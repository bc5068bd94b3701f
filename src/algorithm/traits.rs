use std::fmt;
use serde::{Deserialize, Serialize};

use crate::data_structures::Trail;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Which quantity a query minimises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// Sum of connection distances in km
    Distance,
    /// Travel time in minutes
    Time,
}

impl CostMode {
    /// Unit suffix used when printing a cost
    pub fn unit(&self) -> &'static str {
        match self {
            CostMode::Distance => "km",
            CostMode::Time => "minutes",
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMode::Distance => write!(f, "distance"),
            CostMode::Time => write!(f, "time"),
        }
    }
}

/// A concrete route between two stations and what it costs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<W>
where
    W: Weight,
{
    pub trail: Trail,
    pub cost: W,
    pub mode: CostMode,
    /// Line changes counted along the trail
    pub interchanges: usize,
}

impl<W> Route<W>
where
    W: Weight,
{
    pub fn new(trail: Trail, cost: W, mode: CostMode) -> Self {
        let interchanges = trail.interchanges();
        Route {
            trail,
            cost,
            mode,
            interchanges,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.trail.first()
    }

    pub fn destination(&self) -> Option<&str> {
        self.trail.last()
    }
}

impl<W> fmt::Display for Route<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.mode {
            CostMode::Distance => "Distance",
            CostMode::Time => "Time",
        };
        write!(f, "{}\n{}: {} {}", self.trail, label, self.cost, self.mode.unit())
    }
}

/// Trait for algorithms that produce a concrete route
pub trait RouteSearch<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Find the cheapest route from `source` to `destination` under `mode`
    ///
    /// Returns `Ok(None)` when the destination is unreachable and
    /// `Err(Error::StationNotFound)` when either station is unknown.
    fn find_route(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<Route<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with `StationNotFound` naming the first of `stations` missing from `graph`
pub(crate) fn require_stations<W, G>(graph: &G, stations: &[&str]) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    match stations.iter().find(|s| !graph.has_vertex(s)) {
        Some(missing) => Err(crate::Error::StationNotFound(missing.to_string())),
        None => Ok(()),
    }
}
