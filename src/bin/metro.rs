use metro_route::algorithm::CostMode;
use metro_route::graph::generators::sample_network;
use metro_route::graph::{Graph, MetroGraph};
use metro_route::{Config, Route, RoutePlanner};
use serde_json::json;
use std::env;
use std::process;

const USAGE: &str = "\
Usage: metro [--json] [--config <file>] <command> [args]

Commands:
  stations                       list every station
  map                            show every station with its connections
  distance <source> <dest>       shortest distance in km
  time <source> <dest>           shortest travel time in minutes
  route-distance <source> <dest> station-by-station route, distance wise
  route-time <source> <dest>     station-by-station route, time wise
  connected <source> <dest>      whether the two stations are connected";

/// Parsed command line
struct Options {
    json: bool,
    config: Option<String>,
    command: String,
    args: Vec<String>,
}

fn parse_args() -> Option<Options> {
    let mut json = false;
    let mut config = None;
    let mut rest = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => config = Some(args.next()?),
            "-h" | "--help" => return None,
            _ => rest.push(arg),
        }
    }

    if rest.is_empty() {
        return None;
    }
    let command = rest.remove(0);
    Some(Options {
        json,
        config,
        command,
        args: rest,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let options = match parse_args() {
        Some(options) => options,
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let planner = RoutePlanner::from_config(&config);
    let graph = sample_network()?;

    match (options.command.as_str(), options.args.as_slice()) {
        ("stations", []) => print_stations(&graph, options.json)?,
        ("map", []) => print_map(&graph, options.json)?,
        ("distance", [src, dst]) => {
            print_cost(&planner, &graph, src, dst, CostMode::Distance, options.json)?
        }
        ("time", [src, dst]) => {
            print_cost(&planner, &graph, src, dst, CostMode::Time, options.json)?
        }
        ("route-distance", [src, dst]) => {
            let route = planner.shortest_path_distance(&graph, src, dst)?;
            print_route(route, src, dst, options.json)?;
        }
        ("route-time", [src, dst]) => {
            let route = planner.shortest_path_time(&graph, src, dst)?;
            print_route(route, src, dst, options.json)?;
        }
        ("connected", [src, dst]) => {
            let connected = planner.has_path(&graph, src, dst)?;
            if options.json {
                let report = json!({ "source": src, "destination": dst, "connected": connected });
                println!("{}", report);
            } else {
                println!("{}", if connected { "yes" } else { "no" });
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }

    Ok(())
}

fn print_stations(graph: &MetroGraph, json: bool) -> Result<(), serde_json::Error> {
    let stations: Vec<&str> = graph.stations().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    for (i, station) in stations.iter().enumerate() {
        println!("{}. {}", i + 1, station);
    }
    Ok(())
}

fn print_map(graph: &MetroGraph, json: bool) -> Result<(), serde_json::Error> {
    if json {
        let connections: Vec<_> = graph
            .connections()
            .map(|(a, b, km)| json!({ "a": a, "b": b, "km": km }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&connections)?);
        return Ok(());
    }

    println!("Metro Map ({} stations, {} connections)", graph.vertex_count(), graph.edge_count());
    for station in graph.stations() {
        println!("{} =>", station);
        for (nbr, km) in graph.neighbors(station) {
            println!("\t{:<24}{} km", nbr, km);
        }
        println!();
    }
    Ok(())
}

fn print_cost(
    planner: &RoutePlanner,
    graph: &MetroGraph,
    src: &str,
    dst: &str,
    mode: CostMode,
    json: bool,
) -> metro_route::Result<()> {
    let cost: Option<u32> = planner.shortest_cost(graph, src, dst, mode)?;
    if json {
        println!(
            "{}",
            json!({ "source": src, "destination": dst, "mode": mode, "cost": cost })
        );
        return Ok(());
    }

    match (cost, mode) {
        (Some(km), CostMode::Distance) => println!("Shortest distance: {} km", km),
        (Some(minutes), CostMode::Time) => println!("Minimum time: {} minutes", minutes),
        (None, _) => println!("No route from {} to {}", src, dst),
    }
    Ok(())
}

fn print_route(
    route: Option<Route<u32>>,
    src: &str,
    dst: &str,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    match route {
        Some(route) => {
            println!("{}", route);
            if route.interchanges > 0 {
                println!("Interchanges: {}", route.interchanges);
            }
        }
        None => println!("No route from {} to {}", src, dst),
    }
    Ok(())
}
