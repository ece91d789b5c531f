//! Operations on tensors and their shapes.
//!
//! # Concatenating tensors
//!
//! Concatenation is available on arrays, slices and vecs of [crate::tensor::Tensor]
//! via [TryConcatTensorAlong]. The axis is validated at runtime, and every input must
//! have the same rank and agree on every dimension except the axis.
//!
//! ```rust
//! # use concat_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let a: Tensor<f32> = dev.zeros_like(&Shape::from([3, 4]));
//! let b: Tensor<f32> = dev.zeros_like(&Shape::from([3, 5]));
//! let (c, _) = [a, b].concat_tensor_along(1);
//! assert_eq!(c.shape(), &Shape::from([3, 9]));
//! ```
//!
//! # Inferring shapes
//!
//! Before any data exists, [infer_concat_shape] predicts the output from
//! [crate::shapes::PartialShape]s. Fully known shapes can also be concatenated
//! directly with [TryConcatShapeAlong].
//!
//! ```rust
//! # use concat_core::prelude::*;
//! let out = infer_concat_shape(
//!     Some(0),
//!     &[PartialShape::from([Some(2), None]), PartialShape::from([Some(3), Some(4)])],
//! )
//! .unwrap();
//! assert_eq!(out, PartialShape::from([5, 4]));
//! ```
//!
//! # Gradients
//!
//! Forward returns a [ConcatRecord]. Pass it to [TryConcatGrad] together with a
//! gradient shaped like the output to recover one gradient per input. To split an
//! arbitrary tensor without a record, use [TrySplitTensorAlong].

mod concat;
mod concat_grad;
mod concat_shape_along;
mod concat_tensor_along;
mod split_tensor_along;

pub use concat::Concat;
pub use concat_grad::TryConcatGrad;
pub use concat_shape_along::{infer_concat_shape, TryConcatShapeAlong};
pub use concat_tensor_along::{ConcatAlongKernel, ConcatRecord, TryConcatTensorAlong};
pub use split_tensor_along::TrySplitTensorAlong;
