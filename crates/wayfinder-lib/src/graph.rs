use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};

/// Connectivity graph of a facility.
///
/// Places keep the order in which they were supplied and so do each place's
/// neighbours; both orders are observable through resolution and path
/// selection. The storage is shared behind an [`Arc`], so clones are cheap
/// and a graph can be handed to any number of concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

#[derive(Debug, Default)]
struct GraphInner {
    places: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from ordered `(place, neighbours)` entries.
    ///
    /// Duplicate place identifiers are rejected. Neighbour references to
    /// places that have no entry of their own are dropped (and reported once
    /// as a warning) so later lookups never fail on a dangling edge.
    pub fn from_adjacency<I, S, N, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        N: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut places = Vec::new();
        let mut index = HashMap::new();
        let mut pending = Vec::new();

        for (place, neighbours) in entries {
            let place = place.into();
            if index.contains_key(&place) {
                return Err(Error::InvalidFacility {
                    message: format!("duplicate place identifier '{place}'"),
                });
            }
            index.insert(place.clone(), places.len());
            places.push(place);
            pending.push(neighbours.into_iter().map(Into::into).collect::<Vec<String>>());
        }

        let mut skipped_edges = 0usize;
        let adjacency = pending
            .into_iter()
            .map(|neighbours| {
                neighbours
                    .iter()
                    .filter_map(|neighbour| {
                        let target = index.get(neighbour).copied();
                        if target.is_none() {
                            skipped_edges += 1;
                        }
                        target
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        if skipped_edges > 0 {
            warn!(
                skipped_edges,
                "ignored neighbour references to unknown places"
            );
        }

        Ok(Self {
            inner: Arc::new(GraphInner {
                places,
                index,
                adjacency,
            }),
        })
    }

    /// Place identifiers in configuration order.
    pub fn places(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.places.iter().map(String::as_str)
    }

    /// Whether `place` is a key of the graph.
    pub fn contains(&self, place: &str) -> bool {
        self.inner.index.contains_key(place)
    }

    /// Neighbours of `place` in adjacency-list order. Unknown places have none.
    pub fn neighbours(&self, place: &str) -> impl Iterator<Item = &str> + '_ {
        let indices = self
            .index_of(place)
            .map(|idx| self.neighbour_indices(idx))
            .unwrap_or(&[]);
        indices.iter().map(move |&idx| self.name(idx))
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.inner.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.places.is_empty()
    }

    /// Number of adjacency entries across all places (each undirected
    /// connection counts once per direction).
    pub fn edge_count(&self) -> usize {
        self.inner.adjacency.iter().map(Vec::len).sum()
    }

    /// Connections listed in one direction only, as `(from, to)` pairs where
    /// `to` does not list `from` back.
    pub fn asymmetric_links(&self) -> Vec<(&str, &str)> {
        let mut links = Vec::new();
        for (from, neighbours) in self.inner.adjacency.iter().enumerate() {
            for &to in neighbours {
                if !self.inner.adjacency[to].contains(&from) {
                    links.push((self.name(from), self.name(to)));
                }
            }
        }
        links
    }

    pub(crate) fn index_of(&self, place: &str) -> Option<usize> {
        self.inner.index.get(place).copied()
    }

    pub(crate) fn name(&self, idx: usize) -> &str {
        &self.inner.places[idx]
    }

    pub(crate) fn neighbour_indices(&self, idx: usize) -> &[usize] {
        &self.inner.adjacency[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_adjacency([
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "C"]),
            ("C", vec!["B", "A"]),
        ])
        .expect("valid graph")
    }

    #[test]
    fn preserves_place_and_neighbour_order() {
        let graph = triangle();
        assert_eq!(graph.places().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(graph.neighbours("C").collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn unknown_place_has_no_neighbours() {
        let graph = triangle();
        assert!(!graph.contains("D"));
        assert_eq!(graph.neighbours("D").count(), 0);
    }

    #[test]
    fn duplicate_place_is_rejected() {
        let err = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"]), ("A", vec![])])
            .expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate place identifier 'A'"));
    }

    #[test]
    fn dangling_neighbours_are_dropped() {
        let graph =
            Graph::from_adjacency([("A", vec!["B", "Ghost"]), ("B", vec!["A"])]).expect("graph");
        assert_eq!(graph.neighbours("A").collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn reports_one_way_links() {
        let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", Vec::<&str>::new())])
            .expect("graph");
        assert_eq!(graph.asymmetric_links(), vec![("A", "B")]);
        assert!(triangle().asymmetric_links().is_empty());
    }

    #[test]
    fn clones_share_storage() {
        let graph = triangle();
        let clone = graph.clone();
        assert!(Arc::ptr_eq(&graph.inner, &clone.inner));
    }
}
