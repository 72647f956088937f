use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Find the route between `source` and `destination` with the fewest
/// connections, using breadth-first search.
///
/// Neighbours are expanded in adjacency-list order and the first discovery of
/// a place fixes its parent, so among several shortest routes the one returned
/// is determined entirely by the order of the configuration data.
pub fn find_path(graph: &Graph, source: &str, destination: &str) -> Result<Vec<String>> {
    let start = endpoint_index(graph, source)?;
    let goal = endpoint_index(graph, destination)?;

    let route = find_route_bfs(graph, start, goal).ok_or_else(|| Error::NoPath {
        start: source.to_string(),
        goal: destination.to_string(),
    })?;

    debug!(
        source,
        destination,
        hops = route.len().saturating_sub(1),
        "path found"
    );

    Ok(route
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect())
}

fn endpoint_index(graph: &Graph, place: &str) -> Result<usize> {
    graph.index_of(place).ok_or_else(|| Error::InvalidEndpoint {
        place: place.to_string(),
    })
}

/// Breadth-first search over place indices.
fn find_route_bfs(graph: &Graph, start: usize, goal: usize) -> Option<Vec<usize>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: Vec<Option<usize>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbour_indices(current) {
            if visited[next] {
                continue;
            }

            visited[next] = true;
            parents[next] = Some(current);
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct_path(parents: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}
