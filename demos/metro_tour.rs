use colored::*;
use metro_route::graph::generators::{extend_line, line_network, sample_network};
use metro_route::graph::{Graph, MutableGraph};
use metro_route::{CostMode, Route, RoutePlanner};

fn print_route(title: &str, route: Option<Route<u32>>) {
    println!("\n{}", title.bright_white().bold());
    let route = match route {
        Some(route) => route,
        None => {
            println!("  {}", "no route".bright_red());
            return;
        }
    };

    let last = route.trail.hops();
    for (i, station) in route.trail.stations().iter().enumerate() {
        let marker = if i == 0 {
            "●".bright_green().bold()
        } else if i == last {
            "●".bright_red().bold()
        } else {
            "○".bright_yellow()
        };
        println!("  {} {}", marker, station);
    }

    println!(
        "  {} {} {}",
        "→".bright_cyan(),
        route.cost.to_string().bright_cyan().bold(),
        route.mode.unit()
    );
    if route.interchanges > 0 {
        println!("  {} {} interchange(s)", "⇄".yellow(), route.interchanges);
    }
}

fn main() -> metro_route::Result<()> {
    let graph = sample_network()?;
    let planner = RoutePlanner::new();

    println!("{}", "🚇  METRO ROUTE TOUR  🚇".bright_cyan().bold());
    println!(
        "{} stations, {} connections",
        graph.vertex_count().to_string().bright_white(),
        graph.edge_count().to_string().bright_white()
    );

    let (src, dst) = ("Anarkali", "Cavalry Ground");
    for mode in [CostMode::Distance, CostMode::Time] {
        if let Some(cost) = planner.shortest_cost(&graph, src, dst, mode)? {
            println!(
                "Cheapest {} from {} to {}: {} {}",
                mode,
                src,
                dst,
                cost.to_string().bold(),
                mode.unit()
            );
        }
    }

    print_route("Shortest path, distance wise", planner.shortest_path_distance(&graph, src, dst)?);
    print_route("Shortest path, time wise", planner.shortest_path_time(&graph, src, dst)?);

    // Two marked lines joined by a transfer, so interchanges show up
    let mut lines = line_network("Red ", 'r', 5, 3)?;
    extend_line(&mut lines, "Blue ", 'b', 4, 2)?;
    lines.add_edge("Red 2~r", "Blue 0~b", 1)?;
    print_route(
        "Across two lines, time wise",
        planner.shortest_path_time(&lines, "Red 0~r", "Blue 3~b")?,
    );

    Ok(())
}
