//! `Graph` — an owning, append-only directed graph with stable vertex storage.
//!
//! Vertices live in a [`VertexStore`], whose chunks are never reallocated, so
//! adding a vertex never moves an existing one. Edges are stored in their
//! source vertex's outgoing list and refer to both endpoints by branded
//! [`VertexId`]. The graph consumes a [`GhostToken`], making it the only
//! graph of its brand: ids from any other graph fail to type-check.
//!
//! The graph is move-only. It deliberately does not implement `Clone`.
//!
//! ```compile_fail
//! use unitgraph::{units, Graph};
//!
//! Graph::scope(|mut g| {
//!     g.add_vertex("A", units![]);
//!     let copy = g.clone();
//! });
//! ```
//!
//! Ids cannot cross graphs:
//!
//! ```compile_fail
//! use unitgraph::{units, Graph};
//!
//! Graph::scope(|mut g1| {
//!     Graph::scope(|mut g2| {
//!         let a = g1.add_vertex("A", units![]).id();
//!         let b = g2.add_vertex("B", units![]).id();
//!         g1.add_edge(a, b, 1, units![]);
//!     });
//! });
//! ```
//!
//! # Performance
//! - `add_vertex`: O(1) amortized (one chunk allocation every `CHUNK` vertexes)
//! - `add_edge`: O(1) amortized (append to the source's list)
//! - `vertex` / `edge`: O(1)
//! - `num_edges`: O(V)

use core::fmt;

use super::edge::{Edge, EdgeId};
use super::store::{StoreIter, VertexStore};
use super::types::{Cost, Units};
use super::vertex::{Vertex, VertexId, VertexMut};
use crate::error::{GraphError, Result};
use crate::token::GhostToken;

/// Number of vertexes per storage chunk.
pub const VERTEX_CHUNK: usize = 64;

/// A directed graph whose vertexes own their outgoing edges.
pub struct Graph<'brand> {
    vertexes: VertexStore<Vertex<'brand>, VERTEX_CHUNK>,
    _token: GhostToken<'brand>,
}

/// Iterator over the vertexes of a graph, in insertion order.
pub type Vertexes<'a, 'brand> = StoreIter<'a, Vertex<'brand>>;

impl<'brand> Graph<'brand> {
    /// Creates an empty graph, consuming the token that brands it.
    pub fn new(token: GhostToken<'brand>) -> Self {
        Self {
            vertexes: VertexStore::new(),
            _token: token,
        }
    }

    /// Opens a fresh brand, builds an empty graph for it and runs `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unitgraph::{units, Graph};
    ///
    /// let degree = Graph::scope(|mut graph| {
    ///     let a = graph.add_vertex("A", units![1]).id();
    ///     let b = graph.add_vertex("B", units![2]).id();
    ///     graph.add_edge(a, b, 5, units![1]);
    ///     graph.vertex(a).out_degree()
    /// });
    /// assert_eq!(degree, 1);
    /// ```
    pub fn scope<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(Graph<'new_brand>) -> R,
    {
        GhostToken::new(|token| f(Graph::new(token)))
    }

    /// Returns the number of vertexes added so far.
    #[inline]
    pub fn num_vertexes(&self) -> usize {
        self.vertexes.len()
    }

    /// Returns `true` if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertexes.is_empty()
    }

    /// Returns the vertexes in insertion order.
    #[inline]
    pub fn vertexes(&self) -> Vertexes<'_, 'brand> {
        self.vertexes.iter()
    }

    /// Returns the total number of edges.
    pub fn num_edges(&self) -> usize {
        self.vertexes.iter().map(Vertex::out_degree).sum()
    }

    /// Returns every edge, grouped by source in vertex order, each group in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<'brand>> + '_ {
        self.vertexes.iter().flat_map(Vertex::edges)
    }

    /// Adds a vertex and returns a live handle to it.
    ///
    /// The vertex's index is the vertex count before the call. Existing
    /// vertexes are never moved, so addresses and ids obtained earlier stay
    /// valid.
    pub fn add_vertex(&mut self, name: impl Into<String>, units: Units) -> VertexMut<'_, 'brand> {
        let index = self.vertexes.len();
        let vertex = Vertex::new(VertexId::new(index), name.into(), units);
        trace_event!(index, name = vertex.name(), "vertex added");
        let idx = self.vertexes.push(vertex);
        VertexMut::new(&mut self.vertexes[idx])
    }

    /// Appends an edge `source -> target` to `source`'s outgoing list.
    ///
    /// Only `source`'s storage is touched.
    pub fn add_edge(
        &mut self,
        source: VertexId<'brand>,
        target: VertexId<'brand>,
        cost: Cost,
        units: Units,
    ) -> EdgeId<'brand> {
        self.vertex_mut(source).add_edge(target, cost, units)
    }

    /// Adds the two directed edges `a -> b` and `b -> a`, both with `cost` and
    /// `units`, modelling an undirected connection.
    ///
    /// Returns the ids of the `a -> b` and `b -> a` edges, in that order.
    pub fn add_edge_pair(
        &mut self,
        a: VertexId<'brand>,
        b: VertexId<'brand>,
        cost: Cost,
        units: Units,
    ) -> (EdgeId<'brand>, EdgeId<'brand>) {
        trace_event!(a = a.index(), b = b.index(), cost, "edge pair added");
        let forward = self.add_edge(a, b, cost, units.clone());
        let backward = self.add_edge(b, a, cost, units);
        (forward, backward)
    }

    /// Returns the vertex behind a branded id.
    #[inline]
    pub fn vertex(&self, id: VertexId<'brand>) -> &Vertex<'brand> {
        &self.vertexes[id.index()]
    }

    /// Returns a live handle to the vertex behind a branded id.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId<'brand>) -> VertexMut<'_, 'brand> {
        VertexMut::new(&mut self.vertexes[id.index()])
    }

    /// Converts a raw insertion index into a branded id.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `index >= num_vertexes()`.
    pub fn vertex_at(&self, index: usize) -> Result<VertexId<'brand>> {
        let len = self.vertexes.len();
        if index < len {
            Ok(VertexId::new(index))
        } else {
            Err(GraphError::VertexOutOfRange { index, len })
        }
    }

    /// Returns the stored edge behind an id.
    #[inline]
    pub fn edge(&self, id: EdgeId<'brand>) -> &Edge<'brand> {
        &self.vertex(id.source()).edges()[id.slot()]
    }

    /// Converts a raw outgoing-list position of `source` into an edge id.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfRange`] if `slot` is not below the
    /// out-degree of `source`.
    pub fn edge_at(&self, source: VertexId<'brand>, slot: usize) -> Result<EdgeId<'brand>> {
        let vertex = self.vertex(source);
        match vertex.edges().get(slot) {
            Some(edge) => Ok(edge.id()),
            None => Err(GraphError::EdgeOutOfRange {
                vertex: source.index(),
                slot,
                len: vertex.out_degree(),
            }),
        }
    }

    /// Resolves the source endpoint of an edge.
    #[inline]
    pub fn source_of(&self, edge: &Edge<'brand>) -> &Vertex<'brand> {
        self.vertex(edge.source())
    }

    /// Resolves the target endpoint of an edge.
    #[inline]
    pub fn target_of(&self, edge: &Edge<'brand>) -> &Vertex<'brand> {
        self.vertex(edge.target())
    }
}

impl fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("num_vertexes", &self.num_vertexes())
            .field("vertexes", &self.vertexes.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn test_example_scenario() {
        Graph::scope(|mut g| {
            let v0 = g.add_vertex("A", units![1]).id();
            let v1 = g.add_vertex("B", units![2]).id();
            g.add_edge(v0, v1, 5, units![1]);

            assert_eq!(g.num_vertexes(), 2);
            assert_eq!(g.vertex(v0).index(), 0);
            assert_eq!(g.vertex(v1).index(), 1);
            assert_eq!(g.vertex(v0).edges().len(), 1);
            assert_eq!(g.vertex(v0).edges()[0].target(), v1);
            assert_eq!(g.vertex(v0).edges()[0].cost(), 5);

            g.add_edge_pair(v0, v1, 3, units![]);
            assert_eq!(g.vertex(v0).edges().len(), 2);
            assert_eq!(g.vertex(v1).edges().len(), 1);
            assert_eq!(g.vertex(v1).edges()[0].target(), v0);
            assert_eq!(g.vertex(v1).edges()[0].cost(), 3);
        });
    }

    #[test]
    fn test_add_vertex_handle_adds_edges_immediately() {
        Graph::scope(|mut g| {
            let hub = g.add_vertex("hub", units![]).id();
            let mut spoke = g.add_vertex("spoke", units![4]);
            let e = spoke.add_edge(hub, 2, units![4]);
            assert_eq!(spoke.index(), 1);
            assert_eq!(spoke.out_degree(), 1);

            let edge = g.edge(e);
            assert_eq!(edge.source().index(), 1);
            assert_eq!(g.target_of(edge).name(), "hub");
            assert_eq!(g.source_of(edge).name(), "spoke");
        });
    }

    #[test]
    fn test_vertex_at_checks_range() {
        Graph::scope(|mut g| {
            assert_eq!(g.vertex_at(0), Err(GraphError::VertexOutOfRange { index: 0, len: 0 }));
            let a = g.add_vertex("a", units![]).id();
            assert_eq!(g.vertex_at(0), Ok(a));
            assert!(g.vertex_at(1).is_err());
        });
    }

    #[test]
    fn test_edge_at_checks_range() {
        Graph::scope(|mut g| {
            let a = g.add_vertex("a", units![]).id();
            let b = g.add_vertex("b", units![]).id();
            let e = g.add_edge(a, b, 1, units![]);
            assert_eq!(g.edge_at(a, 0), Ok(e));
            assert_eq!(
                g.edge_at(a, 1),
                Err(GraphError::EdgeOutOfRange { vertex: 0, slot: 1, len: 1 })
            );
            assert!(g.edge_at(b, 0).is_err());
        });
    }

    #[test]
    fn test_self_loop() {
        Graph::scope(|mut g| {
            let a = g.add_vertex("a", units![]).id();
            g.add_edge(a, a, 0, units![]);
            let e = &g.vertex(a).edges()[0];
            assert_eq!(e.source(), e.target());
        });
    }

    #[test]
    fn test_edges_and_num_edges() {
        Graph::scope(|mut g| {
            let a = g.add_vertex("a", units![]).id();
            let b = g.add_vertex("b", units![]).id();
            let c = g.add_vertex("c", units![]).id();
            g.add_edge(b, c, 1, units![]);
            g.add_edge_pair(a, c, 2, units![9]);

            assert_eq!(g.num_edges(), 3);
            let pairs: Vec<_> = g
                .edges()
                .map(|e| (e.source().index(), e.target().index()))
                .collect();
            assert_eq!(pairs, vec![(0, 2), (1, 2), (2, 0)]);
        });
    }

    #[test]
    fn test_debug_lists_vertexes() {
        Graph::scope(|mut g| {
            g.add_vertex("alpha", units![]);
            let dbg = format!("{g:?}");
            assert!(dbg.contains("num_vertexes: 1"));
            assert!(dbg.contains("alpha"));
        });
    }
}
