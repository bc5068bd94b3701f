use log::debug;

use crate::algorithm::traits::require_stations;
use crate::algorithm::{CostMode, Route, RouteSearch};
use crate::config::TravelModel;
use crate::data_structures::Trail;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Path reconstructor: depth-first enumeration of simple paths
///
/// Every simple path from the source is a candidate; the cheapest one that
/// ends at the destination wins, ties going to the first found. Partial paths
/// that already cost as much as the best complete route are abandoned.
///
/// The number of simple paths grows exponentially with network density, so this
/// is meant for small networks. [`crate::RoutePlanner`] switches to
/// [`crate::Dijkstra`] above a configurable size.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch {
    model: TravelModel,
}

/// Stack entry: where we are, how we got here, what it cost so far
#[derive(Debug)]
struct Pair<'g, W> {
    station: &'g str,
    trail: Vec<&'g str>,
    cost: W,
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        ExhaustiveSearch {
            model: TravelModel::default(),
        }
    }

    pub fn with_model(model: TravelModel) -> Self {
        ExhaustiveSearch { model }
    }

    /// Route with the smallest total distance in km
    pub fn min_distance_route<W, G>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.explore(graph, source, destination, CostMode::Distance, |km| km, |_| W::zero())
    }

    /// Route with the smallest riding time plus interchange penalties, in minutes
    ///
    /// Unlike [`crate::Dijkstra`] in time mode, no boarding time is charged per
    /// connection; instead every line change along the final trail costs the
    /// model's interchange penalty.
    pub fn min_time_route<W, G>(
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
        self.explore(
            graph,
            source,
            destination,
            CostMode::Time,
            |km| model.travel_minutes(km),
            |trail| model.interchange_penalty(trail.interchanges()),
        )
    }

    fn explore<W, G, S, P>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
        step_cost: S,
        trail_penalty: P,
    ) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: Graph<W>,
        S: Fn(W) -> W,
        P: Fn(&Trail) -> W,
    {
        require_stations(graph, &[source, destination])?;

        let mut best: Option<(Trail, W)> = None;
        let mut candidates = 0usize;
        let mut stack = vec![Pair {
            station: source,
            trail: vec![source],
            cost: W::zero(),
        }];

        while let Some(pair) = stack.pop() {
            if let Some((_, best_cost)) = &best {
                if pair.cost >= *best_cost {
                    continue;
                }
            }

            if pair.station == destination {
                candidates += 1;
                let trail = Trail::from_stations(pair.trail.iter().copied());
                let total = pair.cost.saturating_add(trail_penalty(&trail));

                let improves = match &best {
                    None => true,
                    Some((_, best_cost)) => total < *best_cost,
                };
                if improves {
                    best = Some((trail, total));
                }
                continue;
            }

            for (nbr, km) in graph.neighbors(pair.station) {
                if pair.trail.contains(&nbr) {
                    continue;
                }
                let mut trail = pair.trail.clone();
                trail.push(nbr);
                stack.push(Pair {
                    station: nbr,
                    trail,
                    cost: pair.cost.saturating_add(step_cost(km)),
                });
            }
        }

        debug!(
            "{} search {} -> {} evaluated {} candidate routes",
            mode, source, destination, candidates
        );

        Ok(best.map(|(trail, cost)| Route::new(trail, cost, mode)))
    }
}

impl<W, G> RouteSearch<W, G> for ExhaustiveSearch
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Exhaustive DFS"
    }

    fn find_route(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
        mode: CostMode,
    ) -> Result<Option<Route<W>>> {
        match mode {
            CostMode::Distance => self.min_distance_route(graph, source, destination),
            CostMode::Time => self.min_time_route(graph, source, destination),
        }
    }
}
