//! MeshCursorError: unified error type for mesh-cursor-bench public APIs.
//!
//! Validation happens once, when a [`Mesh`](crate::mesh::Mesh) or a
//! [`BenchConfig`](crate::driver::BenchConfig) is built. The per-cell hot
//! loops never return `Result`.

use std::io;

use thiserror::Error;

/// Unified error type for mesh-cursor-bench operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshCursorError {
    /// Cells were requested but there is no vertex for them to reference.
    #[error("cannot generate {cells} cells over an empty vertex set")]
    NoVerticesForCells { cells: usize },
    /// The vertex count does not fit the `u32` connectivity index type.
    #[error("vertex count {vertex_count} exceeds the u32 index range")]
    IndexOverflow { vertex_count: usize },
    /// A connectivity entry points past the end of the coordinate table.
    #[error("cell {cell} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        cell: usize,
        index: u32,
        vertex_count: usize,
    },
    /// A strategy name did not match any known strategy.
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),
    /// Relative tolerance must be finite and non-negative.
    #[error("invalid tolerance {0}")]
    InvalidTolerance(String),
    /// Writing benchmark output failed.
    #[error("output error: {0}")]
    Io(String),
    /// Serializing the report failed.
    #[error("report serialization error: {0}")]
    Report(String),
}

impl From<io::Error> for MeshCursorError {
    fn from(err: io::Error) -> Self {
        MeshCursorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MeshCursorError {
    fn from(err: serde_json::Error) -> Self {
        MeshCursorError::Report(err.to_string())
    }
}
