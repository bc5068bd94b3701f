use metro_route::graph::generators::{sample_network, SAMPLE_STATIONS};
use metro_route::graph::{Graph, MetroGraph, MutableGraph};
use metro_route::{CostMode, Dijkstra, Error, ExhaustiveSearch, TravelModel};

const SADAR_ROUTE: [&str; 7] = [
    "Anarkali",
    "Girja Chowk",
    "Railway Station",
    "Sadar",
    "Nadirabad",
    "PAF Market",
    "Cavalry Ground",
];

#[test]
fn test_sample_shortest_distance() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();

    let km = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Distance)
        .unwrap();
    assert_eq!(km, Some(41));

    let km = dijkstra
        .shortest_cost(&graph, "Jinnah Camp", "Girja Chowk", CostMode::Distance)
        .unwrap();
    assert_eq!(km, Some(19));
}

#[test]
fn test_sample_shortest_time() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();

    // Six connections at 120 minutes boarding each, plus 61 minutes riding
    let minutes = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Time)
        .unwrap();
    assert_eq!(minutes, Some(781));

    let minutes = dijkstra
        .shortest_cost(&graph, "Afsha Chowk", "Anarkali", CostMode::Time)
        .unwrap();
    assert_eq!(minutes, Some(646));
}

#[test]
fn test_connection_time_formula() {
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.edge_cost(8u32, CostMode::Distance), 8);
    assert_eq!(dijkstra.edge_cost(8u32, CostMode::Time), 132);
    // 3 km * 60 / 40 = 4.5, truncated
    assert_eq!(dijkstra.edge_cost(3u32, CostMode::Time), 124);
    assert_eq!(dijkstra.edge_cost(1u64, CostMode::Time), 121);
}

#[test]
fn test_custom_travel_model() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::with_model(TravelModel::new().with_boarding_minutes(0));

    let minutes = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Time)
        .unwrap();
    assert_eq!(minutes, Some(61));
}

#[test]
fn test_cost_to_self_is_zero() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();

    for station in SAMPLE_STATIONS {
        for mode in [CostMode::Distance, CostMode::Time] {
            assert_eq!(
                dijkstra.shortest_cost(&graph, station, station, mode).unwrap(),
                Some(0)
            );
        }
    }
}

#[test]
fn test_unreachable_is_not_zero() {
    let mut graph = sample_network().unwrap();
    graph.add_vertex("Depot").unwrap();
    let dijkstra = Dijkstra::new();

    assert_eq!(
        dijkstra
            .shortest_cost(&graph, "Anarkali", "Depot", CostMode::Distance)
            .unwrap(),
        None
    );
    assert_eq!(
        dijkstra.shortest_cost(&graph, "Depot", "Depot", CostMode::Distance).unwrap(),
        Some(0)
    );
    assert!(dijkstra
        .shortest_route(&graph, "Depot", "Sadar", CostMode::Time)
        .unwrap()
        .is_none());
}

#[test]
fn test_unknown_station_is_an_error() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.shortest_cost(&graph, "Anarkali", "Atlantis", CostMode::Distance);
    assert!(matches!(result, Err(Error::StationNotFound(ref name)) if name == "Atlantis"));

    let result = dijkstra.shortest_route(&graph, "Atlantis", "Anarkali", CostMode::Time);
    assert!(matches!(result, Err(Error::StationNotFound(_))));
}

#[test]
fn test_stale_entries_are_skipped() {
    // The direct connection is pushed first but the two-hop route is cheaper
    let mut graph: MetroGraph = MetroGraph::with_stations(["A", "B", "X", "Y"]);
    graph.add_edge("A", "X", 10).unwrap();
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "X", 1).unwrap();
    graph.add_edge("X", "Y", 1).unwrap();

    let dijkstra = Dijkstra::new();
    assert_eq!(
        dijkstra.shortest_cost(&graph, "A", "Y", CostMode::Distance).unwrap(),
        Some(3)
    );

    let route = dijkstra
        .shortest_route(&graph, "A", "Y", CostMode::Distance)
        .unwrap()
        .unwrap();
    assert_eq!(route.trail.stations(), ["A", "B", "X", "Y"]);
}

#[test]
fn test_predecessor_route_matches_cost() {
    let graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();

    let route = dijkstra
        .shortest_route(&graph, "Anarkali", "Cavalry Ground", CostMode::Distance)
        .unwrap()
        .unwrap();

    assert_eq!(route.trail.stations(), SADAR_ROUTE);
    assert_eq!(route.cost, 41);
    let summed: u32 = route
        .trail
        .legs()
        .map(|(a, b)| graph.edge_weight(a, b).unwrap())
        .sum();
    assert_eq!(summed, route.cost);

    let route = dijkstra
        .shortest_route(&graph, "Anarkali", "Cavalry Ground", CostMode::Time)
        .unwrap()
        .unwrap();
    assert_eq!(route.trail.stations(), SADAR_ROUTE);
    assert_eq!(route.cost, 781);
}

#[test]
fn test_adding_edges_never_increases_cost() {
    let mut graph = sample_network().unwrap();
    let dijkstra = Dijkstra::new();
    let before = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Distance)
        .unwrap();

    // A connection that is not on any cheaper route changes nothing
    graph.add_edge("Anarkali", "Club Road", 50).unwrap();
    let after = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Distance)
        .unwrap();
    assert_eq!(after, before);

    // A shortcut lowers it
    graph.add_edge("Girja Chowk", "PAF Market", 5).unwrap();
    let after = dijkstra
        .shortest_cost(&graph, "Anarkali", "Cavalry Ground", CostMode::Distance)
        .unwrap();
    assert_eq!(after, Some(19));

    for a in SAMPLE_STATIONS {
        for b in SAMPLE_STATIONS {
            let with_shortcut = dijkstra.shortest_cost(&graph, a, b, CostMode::Distance).unwrap();
            let original = dijkstra
                .shortest_cost(&sample_network().unwrap(), a, b, CostMode::Distance)
                .unwrap();
            assert!(with_shortcut <= original, "{} -> {} got more expensive", a, b);
        }
    }
}

#[test]
fn test_time_conversion_on_narrow_weights() {
    let model = TravelModel::default();

    // 5 km * 60 overflows u8, the 7 minute answer does not
    assert_eq!(model.travel_minutes(5u8), 7);
    assert_eq!(model.travel_minutes(170u8), 255);
    assert_eq!(model.travel_minutes(171u8), u8::MAX, "quotient overflow saturates");
    assert_eq!(model.travel_minutes(1100u16), 1650);
    assert_eq!(model.travel_minutes(1100u32), 1650);

    let mut small: MetroGraph<u8> = MetroGraph::with_stations(["A", "B", "C"]);
    small.add_edge("A", "B", 5).unwrap();
    small.add_edge("B", "C", 10).unwrap();
    let dijkstra = Dijkstra::new();
    assert_eq!(
        dijkstra.shortest_cost(&small, "A", "B", CostMode::Time).unwrap(),
        Some(127)
    );
    // 127 + 135 does not fit in u8
    assert_eq!(
        dijkstra.shortest_cost(&small, "A", "C", CostMode::Time).unwrap(),
        Some(u8::MAX)
    );

    let mut wide: MetroGraph<u16> = MetroGraph::with_stations(["Far", "Away"]);
    wide.add_edge("Far", "Away", 1100).unwrap();
    assert_eq!(
        dijkstra.shortest_cost(&wide, "Far", "Away", CostMode::Time).unwrap(),
        Some(1770)
    );
    let route = ExhaustiveSearch::new()
        .min_time_route(&wide, "Far", "Away")
        .unwrap()
        .unwrap();
    assert_eq!(route.cost, 1650);
}
