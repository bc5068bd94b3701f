use metro_route::data_structures::count_interchanges;
use metro_route::graph::generators::{extend_line, line_network, sample_network};
use metro_route::graph::{Graph, MetroGraph, MutableGraph};
use metro_route::{CostMode, Dijkstra, Error, ExhaustiveSearch, RouteSearch, Trail, TravelModel};

// Two ways from X to Z: straight along line 1, or a shorter hop over to line 2 and back
fn two_line_network() -> MetroGraph {
    let mut graph: MetroGraph = MetroGraph::with_stations(["X~1", "Y~1", "Z~1", "W~2"]);
    graph.add_edge("X~1", "Y~1", 4).unwrap();
    graph.add_edge("Y~1", "Z~1", 4).unwrap();
    graph.add_edge("X~1", "W~2", 2).unwrap();
    graph.add_edge("W~2", "Z~1", 2).unwrap();
    graph
}

#[test]
fn test_min_distance_route_on_sample() {
    let graph = sample_network().unwrap();
    let search = ExhaustiveSearch::new();

    let route = search
        .min_distance_route(&graph, "Anarkali", "Cavalry Ground")
        .unwrap()
        .unwrap();

    assert_eq!(
        route.trail.to_string(),
        concat!(
            "Anarkali -> Girja Chowk -> Railway Station -> Sadar -> ",
            "Nadirabad -> PAF Market -> Cavalry Ground"
        )
    );
    assert_eq!(route.cost, 41);
    assert_eq!(route.mode, CostMode::Distance);
    assert_eq!(route.interchanges, 0);
    assert_eq!(route.source(), Some("Anarkali"));
    assert_eq!(route.destination(), Some("Cavalry Ground"));
    assert_eq!(
        route.to_string(),
        concat!(
            "Anarkali -> Girja Chowk -> Railway Station -> Sadar -> ",
            "Nadirabad -> PAF Market -> Cavalry Ground\n",
            "Distance: 41 km"
        )
    );
}

#[test]
fn test_min_time_route_on_sample() {
    let graph = sample_network().unwrap();
    let search = ExhaustiveSearch::new();

    let route = search
        .min_time_route(&graph, "Club Road", "Dhandi Sarak")
        .unwrap()
        .unwrap();

    assert_eq!(
        route.trail.stations(),
        [
            "Club Road",
            "Nishat Colony",
            "Nasir Bagh",
            "Tufail Road",
            "Sports Complex",
            "Dhandi Sarak"
        ]
    );
    // 9 + 10 + 1 + 3 + 10 minutes riding, no boarding charge, no interchanges
    assert_eq!(route.cost, 33);
    assert!(route.to_string().ends_with("\nTime: 33 minutes"));
}

#[test]
fn test_distance_route_agrees_with_cost_engine() {
    let graph = sample_network().unwrap();
    let search = ExhaustiveSearch::new();
    let dijkstra = Dijkstra::new();
    let stations: Vec<&str> = graph.stations().collect();

    for &a in &stations {
        for &b in &stations {
            let route = search.min_distance_route(&graph, a, b).unwrap().unwrap();
            let summed: u32 = route
                .trail
                .legs()
                .map(|(x, y)| graph.edge_weight(x, y).unwrap())
                .sum();
            assert_eq!(summed, route.cost, "{} -> {}", a, b);

            let cost = dijkstra.shortest_cost(&graph, a, b, CostMode::Distance).unwrap();
            assert_eq!(cost, Some(route.cost), "{} -> {}", a, b);
        }
    }
}

#[test]
fn test_route_to_self() {
    let graph = sample_network().unwrap();
    let route = ExhaustiveSearch::new()
        .min_time_route(&graph, "Sadar", "Sadar")
        .unwrap()
        .unwrap();

    assert_eq!(route.trail, Trail::new("Sadar"));
    assert_eq!(route.trail.hops(), 0);
    assert_eq!(route.cost, 0);
}

#[test]
fn test_invalid_stations() {
    let graph = sample_network().unwrap();
    let search = ExhaustiveSearch::new();

    assert!(matches!(
        search.min_distance_route(&graph, "Nowhere", "Sadar"),
        Err(Error::StationNotFound(ref name)) if name == "Nowhere"
    ));
    assert!(matches!(
        search.min_time_route(&graph, "Sadar", "Nowhere"),
        Err(Error::StationNotFound(_))
    ));
}

#[test]
fn test_unreachable_destination() {
    let mut graph = sample_network().unwrap();
    graph.add_vertex("Depot").unwrap();

    let route = ExhaustiveSearch::new()
        .min_distance_route(&graph, "Anarkali", "Depot")
        .unwrap();
    assert!(route.is_none());
}

#[test]
fn test_ties_keep_first_found() {
    let mut graph: MetroGraph = MetroGraph::with_stations(["A", "B", "C", "D"]);
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "D", 1).unwrap();
    graph.add_edge("A", "C", 1).unwrap();
    graph.add_edge("C", "D", 1).unwrap();

    // Neighbours are pushed in name order, so C is explored first
    let route = ExhaustiveSearch::new()
        .min_distance_route(&graph, "A", "D")
        .unwrap()
        .unwrap();
    assert_eq!(route.trail.stations(), ["A", "C", "D"]);
    assert_eq!(route.cost, 2);
}

#[test]
fn test_interchange_penalty_changes_the_winner() {
    let graph = two_line_network();
    let search = ExhaustiveSearch::new();

    let by_distance = search.min_distance_route(&graph, "X~1", "Z~1").unwrap().unwrap();
    assert_eq!(by_distance.trail.stations(), ["X~1", "W~2", "Z~1"]);
    assert_eq!(by_distance.cost, 4);
    assert_eq!(by_distance.interchanges, 2);

    // Via W~2: 3 + 3 minutes riding + 2 * 120 interchange, versus 6 + 6 staying on line 1
    let by_time = search.min_time_route(&graph, "X~1", "Z~1").unwrap().unwrap();
    assert_eq!(by_time.trail.stations(), ["X~1", "Y~1", "Z~1"]);
    assert_eq!(by_time.cost, 12);
    assert_eq!(by_time.interchanges, 0);

    let cheap_changes =
        ExhaustiveSearch::with_model(TravelModel::new().with_interchange_minutes(2));
    let by_time = cheap_changes.min_time_route(&graph, "X~1", "Z~1").unwrap().unwrap();
    assert_eq!(by_time.trail.stations(), ["X~1", "W~2", "Z~1"]);
    assert_eq!(by_time.cost, 10);
}

#[test]
fn test_interchange_on_crossing_lines() {
    // Two lines joined by a short transfer link between A1~a and B0~b
    let mut graph = line_network("A", 'a', 4, 4).unwrap();
    extend_line(&mut graph, "B", 'b', 3, 4).unwrap();
    graph.add_edge("A1~a", "B0~b", 1).unwrap();

    let route = ExhaustiveSearch::new()
        .min_time_route(&graph, "A0~a", "B2~b")
        .unwrap()
        .unwrap();
    assert_eq!(route.trail.stations(), ["A0~a", "A1~a", "B0~b", "B1~b", "B2~b"]);
    assert_eq!(route.interchanges, 1);
    // 6 + 1 + 6 + 6 riding, one interchange
    assert_eq!(route.cost, 139);
}

#[test]
fn test_route_search_trait_dispatch() {
    let graph = sample_network().unwrap();
    let searches: [&dyn RouteSearch<u32, MetroGraph>; 2] =
        [&ExhaustiveSearch::new(), &Dijkstra::new()];

    for search in searches {
        let route = search
            .find_route(&graph, "Afsha Chowk", "Anarkali", CostMode::Distance)
            .unwrap()
            .unwrap();
        assert_eq!(route.cost, 31, "{}", search.name());
        assert_eq!(
            route.trail.stations(),
            ["Afsha Chowk", "Malir Cantt", "Sadar", "Railway Station", "Girja Chowk", "Anarkali"],
            "{}",
            search.name()
        );
    }
}

#[test]
fn test_count_interchanges() {
    assert_eq!(count_interchanges(""), 0);
    assert_eq!(count_interchanges("Anarkali -> Sadar"), 0);
    assert_eq!(count_interchanges("A~1 -> B~1 -> C~2"), 1);
    assert_eq!(count_interchanges("A~1 -> B~2 -> C~1"), 2);
    assert_eq!(count_interchanges("A~1 -> B -> C~1"), 0);
    assert_eq!(count_interchanges("Depot~"), 0);
    assert_eq!(Trail::from_stations(["P~r", "Q~g", "R~g"]).interchanges(), 1);
}
