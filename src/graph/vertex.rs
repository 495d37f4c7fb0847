//! Vertices and their branded ids.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use super::edge::{Edge, EdgeId};
use super::types::{Cost, Unit, Units};
use crate::token::InvariantLifetime;

/// A strongly-typed, non-owning reference to a vertex of one branded graph.
///
/// The wrapped value is the vertex's insertion index. Ids are only minted by
/// [`Graph::add_vertex`](crate::Graph::add_vertex) and
/// [`Graph::vertex_at`](crate::Graph::vertex_at), and vertices are never
/// removed, so every `VertexId<'brand>` resolves for the life of its graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand>(usize, InvariantLifetime<'brand>);

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx, InvariantLifetime::new())
    }

    /// Returns the insertion index of the vertex.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph vertex: a name, the units it offers, and its outgoing edges.
///
/// Equality and hashing are by identity: two vertices are equal only if they
/// are the same stored vertex.
#[derive(Debug)]
pub struct Vertex<'brand> {
    id: VertexId<'brand>,
    name: String,
    units: Units,
    edges: Vec<Edge<'brand>>,
}

impl<'brand> Vertex<'brand> {
    pub(crate) fn new(id: VertexId<'brand>, name: String, units: Units) -> Self {
        Self {
            id,
            name,
            units,
            edges: Vec::new(),
        }
    }

    /// Returns the branded id of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId<'brand> {
        self.id
    }

    /// Returns the insertion index assigned when the vertex was added.
    #[inline]
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the units offered by this vertex.
    #[inline]
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Returns the outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge<'brand>] {
        &self.edges
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if this vertex offers `unit`.
    #[inline]
    pub fn offers(&self, unit: Unit) -> bool {
        self.units.contains(&unit)
    }

    /// Appends an outgoing edge. Only this vertex's storage is touched.
    pub(crate) fn push_edge(
        &mut self,
        target: VertexId<'brand>,
        cost: Cost,
        units: Units,
    ) -> EdgeId<'brand> {
        let id = EdgeId::new(self.id, self.edges.len());
        self.edges.push(Edge::new(id, target, cost, units));
        id
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex<'_> {}

impl Hash for Vertex<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A live, mutable handle to a vertex, returned by
/// [`Graph::add_vertex`](crate::Graph::add_vertex) and
/// [`Graph::vertex_mut`](crate::Graph::vertex_mut).
///
/// The handle can only grow the vertex's outgoing edge list; the vertex's
/// fields are read through `Deref`.
pub struct VertexMut<'g, 'brand> {
    vertex: &'g mut Vertex<'brand>,
}

impl<'g, 'brand> VertexMut<'g, 'brand> {
    pub(crate) fn new(vertex: &'g mut Vertex<'brand>) -> Self {
        Self { vertex }
    }

    /// Appends an outgoing edge from this vertex to `target`.
    ///
    /// Equivalent to [`Graph::add_edge`](crate::Graph::add_edge) with this
    /// vertex as source.
    pub fn add_edge(
        &mut self,
        target: VertexId<'brand>,
        cost: Cost,
        units: Units,
    ) -> EdgeId<'brand> {
        let id = self.vertex.push_edge(target, cost, units);
        trace_event!(from = self.vertex.index(), to = target.index(), cost, "edge added");
        id
    }

    /// Returns a shared reference to the underlying vertex, keeping the
    /// full `'g` lifetime.
    pub fn into_ref(self) -> &'g Vertex<'brand> {
        self.vertex
    }
}

impl<'brand> Deref for VertexMut<'_, 'brand> {
    type Target = Vertex<'brand>;

    fn deref(&self) -> &Self::Target {
        self.vertex
    }
}

impl fmt::Debug for VertexMut<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.vertex, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn test_new_vertex_has_no_edges() {
        let v = Vertex::new(VertexId::new(3), "depot".to_string(), units![1, 2]);
        assert_eq!(v.index(), 3);
        assert_eq!(v.name(), "depot");
        assert!(v.offers(2));
        assert!(!v.offers(5));
        assert!(v.edges().is_empty());
    }

    #[test]
    fn test_push_edge_assigns_consecutive_slots() {
        let mut v = Vertex::new(VertexId::new(0), String::new(), units![]);
        let e0 = v.push_edge(VertexId::new(1), 4, units![]);
        let e1 = v.push_edge(VertexId::new(1), 4, units![]);
        assert_eq!(e0.slot(), 0);
        assert_eq!(e1.slot(), 1);
        assert_eq!(v.out_degree(), 2);
        assert_eq!(v.edges()[1].source(), v.id());
    }

    #[test]
    fn test_vertex_equality_is_identity() {
        let a = Vertex::new(VertexId::new(0), "same".to_string(), units![1]);
        let b = Vertex::new(VertexId::new(1), "same".to_string(), units![1]);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let id: VertexId<'_> = VertexId::new(12);
        assert_eq!(id.to_string(), "v12");
        assert_eq!(format!("{id:?}"), "VertexId(12)");
    }
}
