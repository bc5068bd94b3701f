use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// An undirected metro network keyed by station name
///
/// Adjacency is stored in both directions with the same weight. `BTreeMap` keeps
/// station and neighbour iteration in name order, so searches are deterministic.
#[derive(Debug, Clone)]
pub struct MetroGraph<W = u32>
where
    W: Weight,
{
    /// station -> (neighbour -> distance)
    adjacency: BTreeMap<String, BTreeMap<String, W>>,
}

impl<W> Default for MetroGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> MetroGraph<W>
where
    W: Weight,
{
    /// Creates a new empty network
    pub fn new() -> Self {
        MetroGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates a network with the given isolated stations, skipping duplicates
    pub fn with_stations<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = MetroGraph::new();
        for station in stations {
            graph.adjacency.entry(station.into()).or_default();
        }
        graph
    }

    /// Validate that every adjacency entry has a reciprocal entry with the same weight
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(station, nbrs)| {
            nbrs.iter().all(|(nbr, weight)| {
                self.adjacency
                    .get(nbr)
                    .and_then(|back| back.get(station))
                    .map_or(false, |back_weight| back_weight == weight)
            })
        })
    }

    /// Sum of adjacency list sizes over all stations (twice the edge count)
    pub fn adjacency_size(&self) -> usize {
        self.adjacency.values().map(|nbrs| nbrs.len()).sum()
    }

    /// All connections, each reported once with the lexically smaller station first
    pub fn connections(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.adjacency.iter().flat_map(|(station, nbrs)| {
            nbrs.iter()
                .filter(move |(nbr, _)| station.as_str() < nbr.as_str())
                .map(move |(nbr, weight)| (station.as_str(), nbr.as_str(), *weight))
        })
    }

    fn require(&self, station: &str) -> Result<()> {
        if self.adjacency.contains_key(station) {
            Ok(())
        } else {
            Err(Error::StationNotFound(station.to_string()))
        }
    }
}

impl<W> Graph<W> for MetroGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency_size() / 2
    }

    fn stations(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.keys().map(String::as_str))
    }

    fn neighbors(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(nbrs) = self.adjacency.get(vertex) {
            Box::new(nbrs.iter().map(|(nbr, weight)| (nbr.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    fn edge_weight(&self, a: &str, b: &str) -> Option<W> {
        self.adjacency.get(a).and_then(|nbrs| nbrs.get(b)).copied()
    }

    fn degree(&self, vertex: &str) -> Option<usize> {
        self.adjacency.get(vertex).map(|nbrs| nbrs.len())
    }
}

impl<W> MutableGraph<W> for MetroGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, name: &str) -> Result<()> {
        if self.has_vertex(name) {
            debug!("ignoring duplicate station {:?}", name);
            return Err(Error::StationExists(name.to_string()));
        }
        self.adjacency.insert(name.to_string(), BTreeMap::new());
        Ok(())
    }

    fn remove_vertex(&mut self, name: &str) -> Result<()> {
        let nbrs = self
            .adjacency
            .remove(name)
            .ok_or_else(|| Error::StationNotFound(name.to_string()))?;

        // Drop the reciprocal entry at every neighbour
        for nbr in nbrs.keys() {
            if let Some(back) = self.adjacency.get_mut(nbr) {
                back.remove(name);
            }
        }
        Ok(())
    }

    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(Error::SelfLoop(a.to_string()));
        }
        if weight.is_zero() {
            return Err(Error::InvalidWeight(a.to_string(), b.to_string()));
        }
        if self.has_edge(a, b) {
            debug!("connection {:?} <-> {:?} already present, weight kept", a, b);
            return Err(Error::ConnectionExists(a.to_string(), b.to_string()));
        }

        if let Some(nbrs) = self.adjacency.get_mut(a) {
            nbrs.insert(b.to_string(), weight);
        }
        if let Some(nbrs) = self.adjacency.get_mut(b) {
            nbrs.insert(a.to_string(), weight);
        }
        Ok(())
    }

    fn remove_edge(&mut self, a: &str, b: &str) -> Result<()> {
        if !self.has_edge(a, b) {
            return Err(Error::ConnectionNotFound(a.to_string(), b.to_string()));
        }

        if let Some(nbrs) = self.adjacency.get_mut(a) {
            nbrs.remove(b);
        }
        if let Some(nbrs) = self.adjacency.get_mut(b) {
            nbrs.remove(a);
        }
        Ok(())
    }
}
