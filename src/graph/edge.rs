//! Directed edges and their identity keys.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::types::{Cost, Unit, Units};
use super::vertex::VertexId;

/// The identity of one stored edge: its source vertex and its position in
/// that vertex's outgoing list.
///
/// Outgoing lists are append-only, so the position never changes. The
/// derived `Ord` (source first, then position) gives a strict total order
/// over edges that does not depend on their field values, which is what a
/// consumer needs to key sets or maps by edge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId<'brand> {
    source: VertexId<'brand>,
    slot: usize,
}

impl<'brand> EdgeId<'brand> {
    #[inline(always)]
    pub(crate) const fn new(source: VertexId<'brand>, slot: usize) -> Self {
        Self { source, slot }
    }

    /// Returns the vertex whose outgoing list stores this edge.
    #[inline(always)]
    pub const fn source(self) -> VertexId<'brand> {
        self.source
    }

    /// Returns the position of the edge in its source's outgoing list.
    #[inline(always)]
    pub const fn slot(self) -> usize {
        self.slot
    }
}

impl fmt::Debug for EdgeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}#{})", self.source, self.slot)
    }
}

/// A directed edge from `source` to `target`.
///
/// `PartialEq`/`Eq`/`Hash` compare by value: `(source, target, cost, units)`.
/// Use [`Edge::is_same`] or [`Edge::id`] for identity.
#[derive(Debug)]
pub struct Edge<'brand> {
    id: EdgeId<'brand>,
    target: VertexId<'brand>,
    cost: Cost,
    units: Units,
}

impl<'brand> Edge<'brand> {
    pub(crate) fn new(
        id: EdgeId<'brand>,
        target: VertexId<'brand>,
        cost: Cost,
        units: Units,
    ) -> Self {
        Self {
            id,
            target,
            cost,
            units,
        }
    }

    /// Returns the identity of this stored edge.
    #[inline]
    pub fn id(&self) -> EdgeId<'brand> {
        self.id
    }

    /// Returns the source vertex.
    #[inline]
    pub fn source(&self) -> VertexId<'brand> {
        self.id.source()
    }

    /// Returns the target vertex.
    #[inline]
    pub fn target(&self) -> VertexId<'brand> {
        self.target
    }

    /// Returns the cost of taking the edge.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the units required to take the edge.
    #[inline]
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Returns `true` if taking the edge requires `unit`.
    #[inline]
    pub fn requires(&self, unit: Unit) -> bool {
        self.units.contains(&unit)
    }

    /// Identity equality: `true` only if both refer to the same stored edge.
    #[inline]
    pub fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Edge<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
            && self.target == other.target
            && self.cost == other.cost
            && self.units == other.units
    }
}

impl Eq for Edge<'_> {}

impl Hash for Edge<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
        self.target.hash(state);
        self.cost.hash(state);
        self.units.hash(state);
    }
}
