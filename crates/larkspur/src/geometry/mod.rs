//! Geometry description and upload.
//!
//! [`VertexLayout`] computes the byte layout of a vertex from its ordered
//! attribute list; [`Mesh`] validates and uploads vertex + index data. The
//! layout is the single source of truth binding the buffer contents to the
//! shader's `@location` declarations.

mod layout;
mod mesh;

pub use layout::VertexLayout;
pub use mesh::{GeometryError, Mesh, validate_indices};
