//! Runtime adapters implementing the spawn seam.

pub mod tokio_spawner;

pub use tokio_spawner::TokioSpawner;
