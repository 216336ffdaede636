//! Data types and algorithms for octree partitioning of LiDAR point clouds.
//!
//! This library is organized into two crates:
//! - **core**: the geometric vocabulary of points, axes, and half-open regions
//! - **octree**: coordinate scaling and the point-cloud octree itself
//!
//! The typical workflow is to collect a cloud of `CloudPoint`s, construct a
//! root `Octree` over a `Region`, optionally rescale the cloud into an
//! integer coordinate range with `Octree::setup`, call `Octree::build`, and
//! then read the per-node occupancy bytes out of `Octree::bft`.

pub use cloud_blocks_core as core;
pub use cloud_blocks_octree as octree;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::octree::prelude::*;
}
