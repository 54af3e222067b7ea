//! Browser-side services

pub mod mesh;

pub use mesh::{MeshSdk, MeshSession};
