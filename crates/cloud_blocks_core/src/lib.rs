//! The core data types for describing LiDAR point clouds:
//! - `Point3` and `CloudPoint`: a sample position and its auxiliary channel
//! - `Region`: an axis-aligned bounding box with half-open membership
//! - `Axis3`: compile-time-checked axis selection

pub mod axis;
pub mod point;
pub mod region;

pub use axis::Axis3;
pub use point::{CloudPoint, Point3};
pub use region::{bounding_region, InvalidBounds, Region};

pub mod prelude {
    pub use super::{bounding_region, Axis3, CloudPoint, InvalidBounds, Point3, Region};
}
