//! The directed graph, its entities and the accessor layer.
//!
//! - `digraph`: the owning container and its mutation API
//! - `vertex` / `edge`: the entity records and their branded ids
//! - `store`: the append-only, address-stable vertex storage
//! - `access`: read-only traits for algorithms generic over the storage

pub mod access;
mod digraph;
mod edge;
pub mod store;
mod types;
mod vertex;

pub use access::{EdgeAccess, GraphAccess, VertexAccess};
pub use digraph::{Graph, Vertexes, VERTEX_CHUNK};
pub use edge::{Edge, EdgeId};
pub use types::{Cost, Unit, Units};
pub use vertex::{Vertex, VertexId, VertexMut};
