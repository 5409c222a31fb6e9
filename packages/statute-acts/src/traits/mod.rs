//! Trait seams between the pipeline and the outside world.
//!
//! The pipeline only talks to the network through these, so tests can
//! swap in the mocks from [`crate::fetchers`] and [`crate::testing`].

pub mod fetcher;
pub mod generator;
