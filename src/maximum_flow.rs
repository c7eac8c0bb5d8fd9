pub mod edmonds_karp;
pub mod error;
pub mod graph;
pub mod residual;
pub mod summary;
