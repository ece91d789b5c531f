//! Runtime shapes: fully known [Shape]s for tensors, [PartialShape]s for
//! shape inference, and the [Axis] an op concatenates along.
//!
//! Example shapes:
//! - `Shape::scalar()` - rank 0, one element
//! - `Shape::from([4, 4])` - a 4x4 matrix
//! - `PartialShape::from([Some(10), None, Some(2)])` - rank 3, middle dimension unknown
//! - `PartialShape::unknown()` - nothing known, not even the rank

mod axis;
mod partial;
mod shape;

pub use axis::Axis;
pub(crate) use axis::try_normalize_axis;
pub use partial::{merge_dim, PartialShape};
pub use shape::{HasShape, Shape};
