use crate::Axis3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-dimensional sample position with `f64` coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Point3(pub [f64; 3]);

impl Point3 {
    /// The point with `value` for every coordinate.
    #[inline]
    pub fn fill(value: f64) -> Self {
        Point3([value; 3])
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// The coordinate on `axis`.
    #[inline]
    pub fn at(&self, axis: Axis3) -> f64 {
        self.0[axis.index()]
    }

    #[inline]
    pub fn at_mut(&mut self, axis: Axis3) -> &mut f64 {
        &mut self.0[axis.index()]
    }

    /// The componentwise minimum of `self` and `other`.
    #[inline]
    pub fn meet(&self, other: &Self) -> Self {
        Point3([
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        ])
    }

    /// The componentwise maximum of `self` and `other`.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        Point3([
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        ])
    }
}

/// A single LiDAR sample: a position plus one opaque auxiliary value.
///
/// The auxiliary channel (intensity, return count, classification, ...) is
/// carried through scaling and partitioning untouched; the octree never
/// interprets it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct CloudPoint<A> {
    pub position: Point3,
    pub aux: A,
}

impl<A> CloudPoint<A> {
    #[inline]
    pub fn new(position: Point3, aux: A) -> Self {
        Self { position, aux }
    }
}
