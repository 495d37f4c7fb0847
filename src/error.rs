//! Error types for checked graph lookups.
//!
//! Mutation never fails: foreign vertex ids are rejected at compile time by
//! the brand. The only runtime failures come from turning raw, unbranded
//! indices (for example read back from an external algorithm's output) into
//! branded ids.

use thiserror::Error;

/// Errors raised by checked graph lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The raw vertex index is not below the vertex count.
    #[error("vertex index {index} out of range (graph has {len} vertexes)")]
    VertexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The vertex count at the time of the lookup.
        len: usize,
    },

    /// The raw edge position is not below the source's out-degree.
    #[error("edge slot {slot} out of range (vertex {vertex} has {len} outgoing edges)")]
    EdgeOutOfRange {
        /// Index of the source vertex.
        vertex: usize,
        /// The rejected position.
        slot: usize,
        /// The out-degree at the time of the lookup.
        len: usize,
    },
}

/// Result type for checked graph lookups.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = GraphError::VertexOutOfRange { index: 4, len: 2 };
        assert_eq!(e.to_string(), "vertex index 4 out of range (graph has 2 vertexes)");

        let e = GraphError::EdgeOutOfRange { vertex: 1, slot: 3, len: 0 };
        assert_eq!(e.to_string(), "edge slot 3 out of range (vertex 1 has 0 outgoing edges)");
    }
}
