//! Uniform read-only access to graph entities.
//!
//! Algorithms that consume a graph (path search, optimisation, reporting)
//! are written against these traits rather than against [`Graph`],
//! [`Vertex`] and [`Edge`] directly. Every accessor is a pure field
//! projection and is total over a live entity.
//!
//! The free functions mirror the trait methods so generic code can read as
//! `get_cost(edge)` without naming the trait.

use num_traits::Unsigned;

use super::digraph::Graph;
use super::edge::Edge;
use super::types::{Cost, Units};
use super::vertex::{Vertex, VertexId};

/// Read access to an edge.
pub trait EdgeAccess {
    /// How the edge refers to its endpoints.
    type VertexRef: Copy + Eq;
    /// The edge weight.
    type Cost: Unsigned + Copy + Ord;

    /// Returns the source endpoint.
    fn source(&self) -> Self::VertexRef;
    /// Returns the target endpoint.
    fn target(&self) -> Self::VertexRef;
    /// Returns the cost of taking the edge.
    fn cost(&self) -> Self::Cost;
    /// Returns the units required to take the edge.
    fn units(&self) -> &Units;
}

/// Read access to a vertex.
pub trait VertexAccess {
    /// The insertion index type.
    type Index: Copy + Ord;
    /// The outgoing edge type.
    type Edge: EdgeAccess;

    /// Returns the insertion index.
    fn index(&self) -> Self::Index;
    /// Returns the display name.
    fn name(&self) -> &str;
    /// Returns the offered units.
    fn units(&self) -> &Units;
    /// Returns the outgoing edges.
    fn edges(&self) -> &[Self::Edge];
}

/// Read access to a whole graph.
pub trait GraphAccess {
    /// The vertex type.
    type Vertex: VertexAccess<Edge = Self::Edge>;
    /// The edge type.
    type Edge: EdgeAccess;

    /// Returns the number of vertexes.
    fn num_vertexes(&self) -> usize;
    /// Returns the vertexes in insertion order.
    fn vertexes(&self) -> impl Iterator<Item = &Self::Vertex>;
    /// Resolves an edge endpoint to its vertex.
    fn resolve(&self, vertex: <Self::Edge as EdgeAccess>::VertexRef) -> &Self::Vertex;
}

/// The vertex type of a graph.
pub type VertexOf<G> = <G as GraphAccess>::Vertex;
/// The edge type of a graph.
pub type EdgeOf<G> = <G as GraphAccess>::Edge;
/// The cost type of an edge.
pub type CostOf<E> = <E as EdgeAccess>::Cost;
/// The index type of a vertex.
pub type IndexOf<V> = <V as VertexAccess>::Index;

impl<'brand> EdgeAccess for Edge<'brand> {
    type VertexRef = VertexId<'brand>;
    type Cost = Cost;

    #[inline]
    fn source(&self) -> VertexId<'brand> {
        Edge::source(self)
    }

    #[inline]
    fn target(&self) -> VertexId<'brand> {
        Edge::target(self)
    }

    #[inline]
    fn cost(&self) -> Cost {
        Edge::cost(self)
    }

    #[inline]
    fn units(&self) -> &Units {
        Edge::units(self)
    }
}

impl<'brand> VertexAccess for Vertex<'brand> {
    type Index = usize;
    type Edge = Edge<'brand>;

    #[inline]
    fn index(&self) -> usize {
        Vertex::index(self)
    }

    #[inline]
    fn name(&self) -> &str {
        Vertex::name(self)
    }

    #[inline]
    fn units(&self) -> &Units {
        Vertex::units(self)
    }

    #[inline]
    fn edges(&self) -> &[Edge<'brand>] {
        Vertex::edges(self)
    }
}

impl<'brand> GraphAccess for Graph<'brand> {
    type Vertex = Vertex<'brand>;
    type Edge = Edge<'brand>;

    #[inline]
    fn num_vertexes(&self) -> usize {
        Graph::num_vertexes(self)
    }

    fn vertexes(&self) -> impl Iterator<Item = &Vertex<'brand>> {
        Graph::vertexes(self)
    }

    #[inline]
    fn resolve(&self, vertex: VertexId<'brand>) -> &Vertex<'brand> {
        self.vertex(vertex)
    }
}

/// Returns the number of vertexes of `g`.
pub fn num_vertexes<G: GraphAccess>(g: &G) -> usize {
    g.num_vertexes()
}

/// Returns the vertexes of `g` in insertion order.
pub fn vertexes<G: GraphAccess>(g: &G) -> impl Iterator<Item = &G::Vertex> {
    g.vertexes()
}

/// Returns the insertion index of `v`.
pub fn get_index<V: VertexAccess>(v: &V) -> V::Index {
    v.index()
}

/// Returns the name of `v`.
pub fn get_name<V: VertexAccess>(v: &V) -> &str {
    v.name()
}

/// Returns the outgoing edges of `v`.
pub fn get_edges<V: VertexAccess>(v: &V) -> &[V::Edge] {
    v.edges()
}

/// Returns the source endpoint of `e`.
pub fn get_source<E: EdgeAccess>(e: &E) -> E::VertexRef {
    e.source()
}

/// Returns the target endpoint of `e`.
pub fn get_target<E: EdgeAccess>(e: &E) -> E::VertexRef {
    e.target()
}

/// Returns the cost of `e`.
pub fn get_cost<E: EdgeAccess>(e: &E) -> E::Cost {
    e.cost()
}

/// Returns the units required by `e`.
pub fn get_edge_units<E: EdgeAccess>(e: &E) -> &Units {
    e.units()
}

/// Returns the units offered by `v`.
pub fn get_vertex_units<V: VertexAccess>(v: &V) -> &Units {
    v.units()
}
