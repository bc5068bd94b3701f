use std::collections::HashMap;
use log::{debug, trace, warn};

use crate::algorithm::traits::require_stations;
use crate::algorithm::{CostMode, Route, RouteSearch};
use crate::config::TravelModel;
use crate::data_structures::{Frontier, Trail};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Cost engine: Dijkstra's algorithm from one station to another
///
/// The search stops as soon as the destination is settled. In
/// [`CostMode::Time`] each connection costs the model's boarding time plus its
/// riding time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    model: TravelModel,
}

/// Outcome of a search that reached its destination
struct Settled<'g, W> {
    cost: W,
    predecessors: HashMap<&'g str, &'g str>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with the default travel model
    pub fn new() -> Self {
        Dijkstra {
            model: TravelModel::default(),
        }
    }

    /// Creates an instance that converts distances with `model`
    pub fn with_model(model: TravelModel) -> Self {
        Dijkstra { model }
    }

    /// Cost of travelling one connection of `km` kilometres under `mode`
    pub fn edge_cost<W: Weight>(&self, km: W, mode: CostMode) -> W {
        match mode {
            CostMode::Distance => km,
            CostMode::Time => self.model.connection_minutes(km),
        }
    }

    /// Minimum cost from `source` to `destination`, without the path
    ///
    /// `Ok(Some(0))` when both are the same station, `Ok(None)` when the
    /// destination cannot be reached.
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
        require_stations(graph, &[source, destination])?;
        let settled = Self::search(graph, source, destination, |km| self.edge_cost(km, mode));
        Ok(settled.map(|s| s.cost))
    }

    /// Minimum-cost route from `source` to `destination`, rebuilt from predecessor links
    pub fn shortest_route<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.route_with(graph, source, destination, mode, |km| self.edge_cost(km, mode))
    }

    /// Route search with a caller-supplied per-connection cost
    pub(crate) fn route_with<W, G, F>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
        edge_cost: F,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
        F: Fn(W) -> W,
    {
        require_stations(graph, &[source, destination])?;

        let settled = match Self::search(graph, source, destination, edge_cost) {
            Some(settled) => settled,
            None => return Ok(None),
        };

        Ok(Self::rebuild_trail(&settled.predecessors, source, destination)
            .map(|trail| Route::new(trail, settled.cost, mode)))
    }

    fn search<'g, W, G, F>(
        graph: &'g G,
        source: &'g str,
        destination: &str,
        edge_cost: F,
    ) -> Option<Settled<'g, W>>
    where
        W: Weight,
        G: Graph<W>,
        F: Fn(W) -> W,
    {
        // Authoritative best-known cost per vertex; frontier entries that disagree are stale
        let mut best: HashMap<&'g str, W> = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors: HashMap<&'g str, &'g str> = HashMap::new();
        let mut frontier = Frontier::new();

        best.insert(source, W::zero());
        frontier.push(source, W::zero());

        while let Some((u, cost_u)) = frontier.pop() {
            if best.get(u) != Some(&cost_u) {
                trace!("skipping stale entry {} at {}", u, cost_u);
                continue;
            }

            if u == destination {
                debug!(
                    "settled {} -> {} at {} after {} pushes",
                    source,
                    destination,
                    cost_u,
                    frontier.pushed()
                );
                return Some(Settled {
                    cost: cost_u,
                    predecessors,
                });
            }

            // Relax all connections
            for (v, km) in graph.neighbors(u) {
                let candidate = cost_u.saturating_add(edge_cost(km));

                let improves = match best.get(v) {
                    None => true,
                    Some(current) => candidate < *current,
                };

                if improves {
                    best.insert(v, candidate);
                    predecessors.insert(v, u);
                    frontier.push(v, candidate);
                }
            }
        }

        debug!("{} is unreachable from {}", destination, source);
        None
    }

    fn rebuild_trail(
        predecessors: &HashMap<&str, &str>,
        source: &str,
        destination: &str,
    ) -> Option<Trail> {
        let mut stations = vec![destination];
        let mut current = destination;

        while current != source {
            match predecessors.get(current) {
                Some(pred) => {
                    current = *pred;
                    stations.push(current);
                }
                None => {
                    warn!("broken predecessor chain at {}", current);
                    return None;
                }
            }

            if stations.len() > predecessors.len() + 1 {
                warn!("predecessor chain longer than the search tree, likely a cycle");
                return None;
            }
        }

        stations.reverse();
        Some(Trail::from_stations(stations))
    }
}

impl<W, G> RouteSearch<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_route(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<Route<W>>> {
        self.shortest_route(graph, source, destination, mode)
    }
}
