use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::connectivity;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::exhaustive::ExhaustiveSearch;
use crate::algorithm::{CostMode, Route, RouteSearch};
use crate::config::{Config, SearchSettings, TravelModel};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Route strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exhaustive search on small networks, Dijkstra on large ones
    Auto,
    /// Always enumerate simple paths
    Exhaustive,
    /// Always rebuild the route from Dijkstra's predecessor links
    Labelled,
}

/// Query facade over a metro network
///
/// Answers minimum-cost queries with the cost engine and route queries with
/// whichever strategy the [`SearchMode`] picks for the network at hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutePlanner {
    settings: SearchSettings,
    model: TravelModel,
}

impl RoutePlanner {
    /// Create a planner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        RoutePlanner {
            settings: config.search,
            model: config.travel,
        }
    }

    /// Set the route strategy
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.settings.mode = mode;
        self
    }

    /// Set the largest network that `SearchMode::Auto` searches exhaustively
    pub fn with_exhaustive_vertex_limit(mut self, limit: usize) -> Self {
        self.settings.exhaustive_vertex_limit = limit;
        self
    }

    /// Set the travel model used for time queries
    pub fn with_travel_model(mut self, model: TravelModel) -> Self {
        self.model = model;
        self
    }

    /// Minimum cost between two stations, `None` if unreachable
    pub fn shortest_cost<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        Dijkstra::with_model(self.model).shortest_cost(graph, source, destination, mode)
    }

    /// Route with the smallest total distance
    pub fn shortest_path_distance<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.find_route(graph, source, destination, CostMode::Distance)
    }

    /// Route with the smallest riding time plus interchange penalties
    pub fn shortest_path_time<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.find_route(graph, source, destination, CostMode::Time)
    }

    /// Whether `destination` is reachable from `source`
    pub fn has_path<W, G>(&self, graph: &G, source: &str, destination: &str) -> Result<bool>
    where
        W: Weight,
        G: Graph<W>,
    {
        connectivity::has_path(graph, source, destination)
    }

    /// True if route queries on `graph` will enumerate paths exhaustively
    pub fn uses_exhaustive<W, G>(&self, graph: &G) -> bool
    where
        W: Weight,
        G: Graph<W>,
    {
        match self.settings.mode {
            SearchMode::Exhaustive => true,
            SearchMode::Labelled => false,
            SearchMode::Auto => graph.vertex_count() <= self.settings.exhaustive_vertex_limit,
        }
    }

    /// Dijkstra over riding time only, with interchange penalties added afterwards
    ///
    /// The penalty depends on the whole trail, so the result approximates the
    /// exhaustive optimum when line markers are present and matches it otherwise.
    fn labelled_time_route<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let model = self.model;
        let route = Dijkstra::with_model(model).route_with(
            graph,
            source,
            destination,
            CostMode::Time,
            |km| model.travel_minutes(km),
        )?;

        Ok(route.map(|route| {
            let penalty: W = model.interchange_penalty(route.interchanges);
            let cost = route.cost.saturating_add(penalty);
            Route::new(route.trail, cost, CostMode::Time)
        }))
    }
}

impl<W, G> RouteSearch<W, G> for RoutePlanner
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "RoutePlanner"
    }

    fn find_route(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<Route<W>>> {
        if self.uses_exhaustive(graph) {
            debug!(
                "{} stations, using exhaustive search for {} route",
                graph.vertex_count(),
                mode
            );
            return ExhaustiveSearch::with_model(self.model)
                .find_route(graph, source, destination, mode);
        }

        debug!(
            "{} stations, using Dijkstra predecessors for {} route",
            graph.vertex_count(),
            mode
        );
        match mode {
            CostMode::Distance => {
                Dijkstra::with_model(self.model).shortest_route(graph, source, destination, mode)
            }
            CostMode::Time => self.labelled_time_route(graph, source, destination),
        }
    }
}
