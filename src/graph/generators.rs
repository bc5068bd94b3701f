use crate::graph::{Graph, MetroGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;

/// Stations of the built-in sample network
pub const SAMPLE_STATIONS: [&str; 16] = [
    "Anarkali",
    "Girja Chowk",
    "Railway Station",
    "Nasir Bagh",
    "Sadar",
    "Nadirabad",
    "PAF Market",
    "Cavalry Ground",
    "Afsha Chowk",
    "Club Road",
    "Malir Cantt",
    "Jinnah Camp",
    "Tufail Road",
    "Nishat Colony",
    "Sports Complex",
    "Dhandi Sarak",
];

/// Connections of the built-in sample network, distances in km
pub const SAMPLE_CONNECTIONS: [(&str, &str, u32); 19] = [
    ("Anarkali", "Girja Chowk", 8),
    ("Girja Chowk", "Railway Station", 10),
    ("Railway Station", "Sadar", 8),
    ("Railway Station", "Nasir Bagh", 6),
    ("Nasir Bagh", "Nadirabad", 9),
    ("Nadirabad", "PAF Market", 7),
    ("PAF Market", "Cavalry Ground", 6),
    ("Afsha Chowk", "Club Road", 15),
    ("Club Road", "Nishat Colony", 6),
    ("Nishat Colony", "Nasir Bagh", 7),
    ("Nasir Bagh", "Tufail Road", 1),
    ("Tufail Road", "Jinnah Camp", 2),
    ("Jinnah Camp", "Malir Cantt", 5),
    ("Tufail Road", "Sports Complex", 2),
    ("Sports Complex", "Dhandi Sarak", 7),
    ("Dhandi Sarak", "Cavalry Ground", 8),
    ("Nadirabad", "Sadar", 2),
    ("Malir Cantt", "Sadar", 2),
    ("Malir Cantt", "Afsha Chowk", 3),
];

/// Builds the 16-station sample network
pub fn sample_network() -> Result<MetroGraph<u32>> {
    let mut graph = MetroGraph::new();

    for station in SAMPLE_STATIONS {
        graph.add_vertex(station)?;
    }
    for (a, b, km) in SAMPLE_CONNECTIONS {
        graph.add_edge(a, b, km)?;
    }

    Ok(graph)
}

/// Builds a single line of `count` stations named `"{prefix}{i}~{line}"`,
/// consecutive stations `km` apart
///
/// The `~{line}` suffix is the marker the interchange counter looks for.
pub fn line_network(prefix: &str, line: char, count: usize, km: u32) -> Result<MetroGraph<u32>> {
    let mut graph = MetroGraph::new();
    extend_line(&mut graph, prefix, line, count, km)?;
    Ok(graph)
}

/// Appends a line to an existing network, reusing stations that already exist
pub fn extend_line(
    graph: &mut MetroGraph<u32>,
    prefix: &str,
    line: char,
    count: usize,
    km: u32,
) -> Result<()> {
    let names: Vec<String> = (0..count).map(|i| format!("{}{}~{}", prefix, i, line)).collect();

    for name in &names {
        if !graph.has_vertex(name) {
            graph.add_vertex(name)?;
        }
    }
    for pair in names.windows(2) {
        if !graph.has_edge(&pair[0], &pair[1]) {
            graph.add_edge(&pair[0], &pair[1], km)?;
        }
    }

    Ok(())
}

/// Generates a connected random network of `stations` stations named `S0..S{n-1}`
///
/// A random spanning tree guarantees connectivity, then up to `extra_edges`
/// additional connections are sprinkled in. Distances fall in `1..=max_km`.
pub fn random_network<R: Rng>(
    rng: &mut R,
    stations: usize,
    extra_edges: usize,
    max_km: u32,
) -> MetroGraph<u32> {
    let names: Vec<String> = (0..stations).map(|i| format!("S{}", i)).collect();
    let mut graph = MetroGraph::with_stations(names.iter().cloned());
    let max_km = max_km.max(1);

    // Spanning tree: attach every station to a random earlier one
    for i in 1..stations {
        let parent = rng.gen_range(0..i);
        let km = rng.gen_range(1..=max_km);
        connect_fresh(&mut graph, &names[i], &names[parent], km);
    }

    if stations < 2 {
        return graph;
    }

    // Extra connections, skipping self-loops and duplicates
    let mut attempts = 0;
    let mut added = 0;
    while added < extra_edges && attempts < extra_edges * 10 {
        attempts += 1;
        let a = rng.gen_range(0..stations);
        let b = rng.gen_range(0..stations);
        if a == b || graph.has_edge(&names[a], &names[b]) {
            continue;
        }
        let km = rng.gen_range(1..=max_km);
        connect_fresh(&mut graph, &names[a], &names[b], km);
        added += 1;
    }

    graph
}

fn connect_fresh(graph: &mut MetroGraph<u32>, a: &str, b: &str, km: u32) {
    // Both stations exist, differ and are unconnected here, so the insert cannot be rejected
    if let Err(err) = graph.add_edge(a, b, km) {
        log::warn!("random network skipped {} <-> {}: {}", a, b, err);
    }
}
