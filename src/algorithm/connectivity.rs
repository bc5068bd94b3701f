use std::collections::HashSet;

use crate::algorithm::traits::require_stations;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Returns true if `b` can be reached from `a`
///
/// A station always reaches itself. Unknown stations are an error.
pub fn has_path<W, G>(graph: &G, a: &str, b: &str) -> Result<bool>
where
    W: Weight,
    G: Graph<W>,
{
    require_stations(graph, &[a, b])?;
    if a == b {
        return Ok(true);
    }

    let mut visited = HashSet::new();
    Ok(has_path_with(graph, a, b, &mut visited))
}

/// Depth-first reachability from `a` to `b`, skipping vertices in `visited`
///
/// `a` and every vertex expanded along the way are added to `visited`.
pub fn has_path_with<'g, W, G>(
    graph: &'g G,
    a: &'g str,
    b: &str,
    visited: &mut HashSet<&'g str>,
) -> bool
where
    W: Weight,
    G: Graph<W>,
{
    // A direct connection settles it without recursing
    if graph.has_edge(a, b) {
        return true;
    }

    visited.insert(a);

    for (nbr, _) in graph.neighbors(a) {
        if !visited.contains(nbr) && has_path_with(graph, nbr, b, visited) {
            return true;
        }
    }
    false
}
