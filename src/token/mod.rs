//! `GhostToken` - the brand that ties ids to exactly one graph.
//!
//! A token is a zero-sized value created inside a rank-2 closure, so every
//! call to [`GhostToken::new`] produces a fresh, unnameable `'brand`. A
//! [`Graph`](crate::Graph) consumes its token on construction; every
//! [`VertexId`](crate::VertexId) and [`EdgeId`](crate::EdgeId) it hands out
//! carries the same brand and is rejected by the type checker anywhere else.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`. Since
//! `Graph::new` takes the token by value, at most one graph can ever exist
//! for a given brand.

/// Invariant lifetime definitions for branding.
pub mod invariant;
/// Macros for convenient scope and unit-set construction.
pub mod macros;

pub use invariant::InvariantLifetime;

/// A zero-sized token that brands one graph.
///
/// The token uses a phantom lifetime to create branded types, ensuring
/// type-level separation between different graphs.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unitgraph::{units, GhostToken, Graph};
    ///
    /// let count = GhostToken::new(|token| {
    ///     let mut graph = Graph::new(token);
    ///     graph.add_vertex("A", units![1]);
    ///     graph.num_vertexes()
    /// });
    /// assert_eq!(count, 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}

// NOTE:
// `GhostToken` is intentionally NOT `Copy`/`Clone`.
//
// Duplicating it would allow two graphs to share one brand, and a `VertexId`
// minted by the first could then index into the second.
