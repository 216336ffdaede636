use crate::{Axis3, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error produced when a region's minimum exceeds its maximum on some axis.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("invalid bounds on the {axis:?} axis: minimum {min} exceeds maximum {max}")]
pub struct InvalidBounds {
    pub axis: Axis3,
    pub min: f64,
    pub max: f64,
}

/// An axis-aligned box. Mathematically the Cartesian product of a half-open
/// interval `[min, max)` on each axis.
///
/// A point lying exactly on a maximum face is outside the region. Sibling
/// octants produced by `split` share faces, so the half-open convention
/// guarantees that a point on a shared face belongs to exactly one of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Region {
    minimum: Point3,
    maximum: Point3,
}

impl Region {
    /// Constructs the region `[x_min, x_max) x [y_min, y_max) x [z_min, z_max)`.
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> Result<Self, InvalidBounds> {
        Self::from_corners(Point3([x_min, y_min, z_min]), Point3([x_max, y_max, z_max]))
    }

    /// The representation of a region as its minimum corner and least upper
    /// bound.
    pub fn from_corners(minimum: Point3, maximum: Point3) -> Result<Self, InvalidBounds> {
        for &axis in Axis3::ALL.iter() {
            if minimum.at(axis) > maximum.at(axis) {
                return Err(InvalidBounds {
                    axis,
                    min: minimum.at(axis),
                    max: maximum.at(axis),
                });
            }
        }

        Ok(Self { minimum, maximum })
    }

    /// The least point contained in the region.
    #[inline]
    pub fn minimum(&self) -> Point3 {
        self.minimum
    }

    /// The least upper bound; no contained point reaches it on any axis.
    #[inline]
    pub fn maximum(&self) -> Point3 {
        self.maximum
    }

    /// The lower bound on `axis`.
    #[inline]
    pub fn min(&self, axis: Axis3) -> f64 {
        self.minimum.at(axis)
    }

    /// The exclusive upper bound on `axis`.
    #[inline]
    pub fn max(&self, axis: Axis3) -> f64 {
        self.maximum.at(axis)
    }

    /// The coordinate-wise midpoint of the region's corners.
    #[inline]
    pub fn center(&self) -> Point3 {
        Point3([
            (self.minimum.x() + self.maximum.x()) / 2.0,
            (self.minimum.y() + self.maximum.y()) / 2.0,
            (self.minimum.z() + self.maximum.z()) / 2.0,
        ])
    }

    /// Returns `true` iff `p` is contained in this region.
    #[inline]
    pub fn contains(&self, p: &Point3) -> bool {
        Axis3::ALL
            .iter()
            .all(|&axis| self.min(axis) <= p.at(axis) && p.at(axis) < self.max(axis))
    }

    /// The eight octant sub-regions of `self`, split at `center`.
    ///
    /// Octant `i` takes the upper x half iff bit 0 of `i` is set, the upper y
    /// half iff bit 1 is set, and the upper z half iff bit 2 is set; lower
    /// halves are `[min, mid)` and upper halves `[mid, max)`. The same
    /// ordering numbers `Octree` children, their occupancy bits, and the
    /// traversal order, so occupancy bit `i` always names the same geometric
    /// octant.
    pub fn split(&self) -> Result<[Region; 8], InvalidBounds> {
        let mid = self.center();

        let mut octants = [*self; 8];
        for (octant, region) in octants.iter_mut().enumerate() {
            let mut minimum = self.minimum;
            let mut maximum = mid;
            for &axis in Axis3::ALL.iter() {
                if octant & (1 << axis.index()) != 0 {
                    *minimum.at_mut(axis) = mid.at(axis);
                    *maximum.at_mut(axis) = self.maximum.at(axis);
                }
            }
            *region = Region::from_corners(minimum, maximum)?;
        }

        Ok(octants)
    }
}

/// Returns the tightest region with every position in `positions` between its
/// corners, or `None` for an empty iterator.
///
/// Positions equal to the maximum corner on some axis lie on an open face of
/// the result and are not `contains`-members of it.
pub fn bounding_region(positions: impl IntoIterator<Item = Point3>) -> Option<Region> {
    let mut positions = positions.into_iter();
    let first = positions.next()?;

    let mut minimum = first;
    let mut maximum = first;
    for p in positions {
        minimum = minimum.meet(&p);
        maximum = maximum.join(&p);
    }

    Some(Region { minimum, maximum })
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
