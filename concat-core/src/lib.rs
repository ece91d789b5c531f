//! # concat-core
//!
//! A tensor concatenation operator, together with the shape inference that
//! predicts its result and the gradient operator that undoes it.
//!
//! There are three pieces, used at three different times:
//!
//! 1. **Shape inference** ([tensor_ops::infer_concat_shape]) runs while a graph is
//!    being built. Shapes may only be partially known ([shapes::PartialShape]),
//!    and the axis itself may be unknown until execution ([shapes::Axis::Dynamic]).
//! 2. **Execution** ([tensor_ops::TryConcatTensorAlong]) runs on concrete
//!    [tensor::Tensor]s, re-validates their shapes, and copies each input into its
//!    slice of the output. It also returns a [tensor_ops::ConcatRecord].
//! 3. **Backward** ([tensor_ops::TryConcatGrad]) consumes that record and splits a
//!    gradient shaped like the output into one gradient per input.
//!
//! # Shapes & Tensors
//!
//! A [`tensor::Tensor`] is an immutable, contiguous, row-major nd array with a
//! runtime [`shapes::Shape`]. Element types are anything implementing
//! [`dtypes::Unit`]; concatenation is a pure copy so no arithmetic is needed.
//!
//! ```rust
//! # use concat_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a = dev.tensor_from_vec(vec![1.0f32, 2.0, 3.0, 4.0], [2, 2]);
//! let b = dev.tensor_from_vec(vec![5.0f32, 6.0], [1, 2]);
//! let (c, record) = [a, b].concat_tensor_along(0);
//! assert_eq!(c.shape(), &Shape::from([3, 2]));
//! assert_eq!(c.as_vec(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! let grads = c.concat_grad(record);
//! assert_eq!(grads[1].as_vec(), [5.0, 6.0]);
//! ```
//!
//! # Host surface
//!
//! Graph-like hosts that carry an axis that may be static or dynamic should use
//! the [tensor_ops::Concat] op, which bundles inference, forward and backward.
//!
//! # Feature flags
//!
//! - `parallel`: run the forward row copies and the backward slicing with rayon.
//! - `f16`: support `half::f16` tensors.
//! - `test-f64`: run unit tests with `f64` instead of `f32`.

pub mod dtypes;
pub mod shapes;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::dtypes::*;
    pub use crate::shapes::*;
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}
