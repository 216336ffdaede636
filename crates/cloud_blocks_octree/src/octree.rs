//! The point-cloud `Octree`: a recursive partition of a LiDAR cloud into
//! axis-aligned cubic octants.
//!
//! Every node records which of its eight child octants hold points as a
//! single occupancy byte: bit `i` is set iff child `i` is non-empty, with
//! octant indices in the `Region::split` ordering. A breadth-first traversal
//! of the built tree emits one occupancy byte per node, which is the compact
//! level-order description of the cloud's shape that LiDAR occupancy coders
//! consume.
//!
//! Building is one-shot: a tree moves from unbuilt to built exactly once and
//! is read-only afterwards. A node owns its subset of the cloud only while it
//! is being partitioned; after `build`, points live in the leaves and every
//! internal node's buffer has been released.

use crate::scale::scale_to_range;

use cloud_blocks_core::prelude::*;

use std::collections::VecDeque;
use thiserror::Error;
use tracing::debug;

/// The ways building an `Octree` can fail.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum OctreeError {
    /// A region was constructed with `min > max` on some axis.
    #[error(transparent)]
    InvalidBounds(#[from] InvalidBounds),
    /// An axis of the cloud has zero width, so no scale factor exists for it.
    #[error("cannot derive a scale factor for the zero-width {0:?} axis")]
    DegenerateAxis(Axis3),
    /// `build` or `setup` was called on an already-built tree.
    #[error("the octree has already been built")]
    AlreadyBuilt,
}

/// A recursive octant partition of a LiDAR point cloud.
///
/// Construct the root with [`Octree::new`], optionally quantize the cloud
/// onto an integer coordinate range with [`Octree::setup`], then call
/// [`Octree::build`] once. [`Octree::bft`] yields the level-order occupancy
/// bytes of the built tree.
pub struct Octree<A> {
    points: Vec<CloudPoint<A>>,
    bounds: Region,
    level: u16,
    octant: Option<u8>,
    occupancy: u8,
    location: Option<Point3>,
    children: [Option<Box<Octree<A>>>; 8],
    scale_factors: Option<[f64; 3]>,
    built: bool,
}

impl<A> Octree<A> {
    /// Constructs the unbuilt root node, owning `points` and covering
    /// `bounds`.
    pub fn new(points: Vec<CloudPoint<A>>, bounds: Region) -> Self {
        Self::node(points, bounds, 0, None)
    }

    fn node(points: Vec<CloudPoint<A>>, bounds: Region, level: u16, octant: Option<u8>) -> Self {
        Self {
            points,
            bounds,
            level,
            octant,
            occupancy: 0,
            location: None,
            children: Default::default(),
            scale_factors: None,
            built: false,
        }
    }

    /// Rescales every coordinate axis of the cloud onto `[0, 2^levels - 1]`
    /// and replaces `bounds` with the cube covering exactly those values.
    ///
    /// The replacement bounds have least upper bound `2^levels` per axis, so
    /// the greatest scaled coordinate is still a member and subdivision
    /// reaches unit-width octants after exactly `levels` halvings, bounding
    /// the depth of the subsequent `build`.
    ///
    /// Either all three axes are scaled or none: a zero-width axis fails with
    /// `DegenerateAxis` naming the offender and leaves the cloud untouched.
    pub fn setup(&mut self, levels: u32) -> Result<(), OctreeError> {
        assert!(levels > 0 && levels <= 32, "levels must be in 1..=32");

        if self.built {
            return Err(OctreeError::AlreadyBuilt);
        }

        let to_max = ((1u64 << levels) - 1) as f64;

        let mut scaled_axes: Vec<Vec<f64>> = Vec::with_capacity(3);
        let mut factors = [0.0; 3];
        for &axis in Axis3::ALL.iter() {
            let values: Vec<f64> = self.points.iter().map(|p| p.position.at(axis)).collect();
            let (scaled, factor) = scale_to_range(0.0, to_max, &values)
                .map_err(|_| OctreeError::DegenerateAxis(axis))?;
            factors[axis.index()] = factor;
            scaled_axes.push(scaled);
        }

        // All axes scaled successfully; commit.
        for (&axis, scaled) in Axis3::ALL.iter().zip(scaled_axes.iter()) {
            for (point, value) in self.points.iter_mut().zip(scaled.iter()) {
                *point.position.at_mut(axis) = *value;
            }
        }
        self.scale_factors = Some(factors);
        self.bounds = Region::from_corners(Point3::fill(0.0), Point3::fill((1u64 << levels) as f64))?;

        debug!(
            levels,
            x_factor = factors[0],
            y_factor = factors[1],
            z_factor = factors[2],
            "rescaled cloud onto integer range"
        );

        Ok(())
    }

    /// Partitions the cloud into the octant tree. One-shot: a second call
    /// fails with `AlreadyBuilt`.
    ///
    /// Nodes holding more than one point subdivide their bounds at the
    /// midpoint into eight octants, route each point to the octant containing
    /// it, and recurse into the non-empty octants; nodes holding at most one
    /// point (or only coincident points, which no subdivision can separate)
    /// terminate as leaves and retain their points.
    pub fn build(&mut self) -> Result<(), OctreeError> {
        if self.built {
            return Err(OctreeError::AlreadyBuilt);
        }

        debug!(num_points = self.points.len(), "building octree");

        self.build_node()
    }

    fn build_node(&mut self) -> Result<(), OctreeError> {
        self.built = true;

        if self.points.len() <= 1 || self.all_points_coincident() {
            // Leaves keep their points and an occupancy of 0.
            return Ok(());
        }

        let center = self.bounds.center();
        let octant_regions = self.bounds.split()?;

        let mut buckets: [Vec<CloudPoint<A>>; 8] = Default::default();
        let mut dropped = 0usize;
        for point in std::mem::take(&mut self.points) {
            // Half-open sibling regions are disjoint, so the first octant
            // containing the point is the only one.
            match octant_regions
                .iter()
                .position(|region| region.contains(&point.position))
            {
                Some(octant) => buckets[octant].push(point),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(level = self.level, dropped, "dropped points outside node bounds");
        }

        let mut children: [Option<Box<Octree<A>>>; 8] = Default::default();
        for (octant, region) in octant_regions.iter().enumerate() {
            let bucket = std::mem::take(&mut buckets[octant]);
            if bucket.is_empty() {
                continue;
            }

            let mut child = Octree::node(bucket, *region, self.level + 1, Some(octant as u8));
            child.build_node()?;
            children[octant] = Some(Box::new(child));
        }

        // The occupancy byte falls out of the finished child array.
        let mut occupancy = 0u8;
        for (octant, child) in children.iter().enumerate() {
            occupancy |= (child.is_some() as u8) << octant;
        }

        self.location = Some(center);
        self.children = children;
        self.occupancy = occupancy;

        Ok(())
    }

    fn all_points_coincident(&self) -> bool {
        match self.points.split_first() {
            Some((first, rest)) => rest.iter().all(|p| p.position == first.position),
            None => true,
        }
    }

    /// The level-order sequence of occupancy bytes for the subtree rooted at
    /// this node.
    ///
    /// Nodes are visited breadth-first with children enqueued in ascending
    /// octant order: byte 0 describes this node, followed by its children,
    /// then its grandchildren, level by level. The output length equals the
    /// subtree's node count. The tree is read-only after `build`, so repeated
    /// calls return identical sequences.
    pub fn bft(&self) -> Vec<u8> {
        let mut occupancies = Vec::new();

        let mut queue: VecDeque<&Octree<A>> = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            occupancies.push(node.occupancy);
            for child in node.children.iter().flatten() {
                queue.push_back(child.as_ref());
            }
        }

        occupancies
    }

    /// The region this node covers.
    #[inline]
    pub fn bounds(&self) -> &Region {
        &self.bounds
    }

    /// Bit `i` set iff the child in octant `i` holds at least one point.
    /// Zero before `build` and zero forever on leaves.
    #[inline]
    pub fn occupancy(&self) -> u8 {
        self.occupancy
    }

    /// The midpoint this node's bounds were subdivided at. `None` on leaves
    /// and unbuilt nodes.
    #[inline]
    pub fn location(&self) -> Option<Point3> {
        self.location
    }

    /// Depth from the root (the root is level 0).
    #[inline]
    pub fn level(&self) -> u16 {
        self.level
    }

    /// The child slot this node occupies in its parent. `None` on the root.
    #[inline]
    pub fn octant(&self) -> Option<u8> {
        self.octant
    }

    /// All eight child slots in octant order.
    #[inline]
    pub fn children(&self) -> &[Option<Box<Octree<A>>>; 8] {
        &self.children
    }

    /// The child in `octant`, if that octant holds any points.
    pub fn child(&self, octant: u8) -> Option<&Octree<A>> {
        debug_assert!(octant < 8);

        self.children[octant as usize].as_deref()
    }

    /// This node's retained points: the whole cloud before `build`, the
    /// node's samples on leaves afterwards, and empty on internal nodes.
    #[inline]
    pub fn points(&self) -> &[CloudPoint<A>] {
        &self.points
    }

    /// Returns `true` iff this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| child.is_none())
    }

    /// Returns `true` iff `build` has completed for this node.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The number of points held by the leaves of this subtree.
    pub fn num_points(&self) -> usize {
        self.points.len()
            + self
                .children
                .iter()
                .flatten()
                .map(|child| child.num_points())
                .sum::<usize>()
    }

    /// The per-axis scale factors recorded by `setup`, if it ran.
    #[inline]
    pub fn scale_factors(&self) -> Option<[f64; 3]> {
        self.scale_factors
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
