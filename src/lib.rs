//! # `unitgraph` - Branded directed graph with stable vertex storage
//!
//! A directed graph whose vertexes own their outgoing edges. Every edge
//! carries a cost and a set of *units*: tags a traveller must carry to take
//! it. Vertexes carry the units they offer.
//!
//! This is a building block, not a path-finding engine. Callers build a graph
//! by adding vertexes and then edges, and algorithms read it through the
//! accessor traits in [`graph::access`].
//!
//! ## Safety Guarantees
//!
//! - **Stable storage**: vertexes are written into fixed-capacity chunks that
//!   are never reallocated. Adding a vertex never moves an existing one, and
//!   moving a [`Graph`] moves only its chunk table.
//! - **Branded ids**: a graph consumes a linear [`GhostToken`]; the ids it
//!   hands out carry the token's brand. Passing an id to a different graph
//!   is a compile error rather than a runtime check.
//! - **No copies**: `Graph` is move-only. Duplicating it would need every
//!   edge endpoint rewritten, so no `Clone` is provided.
//! - **No unsafe code.**
//!
//! ## Example
//!
//! ```rust
//! use unitgraph::{units, Graph};
//!
//! Graph::scope(|mut graph| {
//!     let a = graph.add_vertex("A", units![1]).id();
//!     let b = graph.add_vertex("B", units![2]).id();
//!     graph.add_edge(a, b, 5, units![1]);
//!     graph.add_edge_pair(a, b, 3, units![]);
//!
//!     assert_eq!(graph.num_vertexes(), 2);
//!     assert_eq!(graph.vertex(a).edges().len(), 2);
//!     assert_eq!(graph.vertex(b).edges()[0].target(), a);
//! });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod graph;
pub mod token;

pub use error::{GraphError, Result};
pub use graph::{
    Cost, Edge, EdgeAccess, EdgeId, Graph, GraphAccess, Unit, Units, Vertex, VertexAccess, VertexId,
    VertexMut,
};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::InvariantLifetime<'static>>() == 0);

    // Branded ids are as small as the raw indices they wrap.
    assert!(mem::size_of::<VertexId<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId<'static>>() == mem::size_of::<usize>() * 2);
};
