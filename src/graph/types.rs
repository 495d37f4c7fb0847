//! Scalar and tag types shared by vertices and edges.

use std::collections::BTreeSet;

/// A single capability tag carried by a vertex or required by an edge.
pub type Unit = u32;

/// A duplicate-free set of unit tags.
///
/// A vertex's units are the capabilities it offers; an edge's units are the
/// capabilities a traveller must carry to take it. No meaning beyond set
/// membership is attached here.
pub type Units = BTreeSet<Unit>;

/// The unsigned weight of an edge.
pub type Cost = u32;
