use super::{
    infer_concat_shape, ConcatAlongKernel, ConcatRecord, TryConcatGrad, TryConcatTensorAlong,
};
use crate::{
    dtypes::{Dtype, Unit},
    shapes::*,
    tensor::*,
};
use num_traits::PrimInt;

/// A concatenation op as a graph would hold it: the axis is either fixed when the
/// op is built, or only supplied when the op runs.
///
/// The same op validates shapes before execution ([Concat::try_infer_shape]),
/// executes ([Concat::try_forward] / [Concat::try_forward_dyn]), and runs the
/// backward pass ([Concat::try_backward]).
///
/// Static axis:
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let op = Concat::along(0);
/// let inferred = op
///     .try_infer_shape(&[PartialShape::from([4, 4]), PartialShape::from([Some(2), None])])
///     .unwrap();
/// assert_eq!(inferred, PartialShape::from([6, 4]));
///
/// let a: Tensor<f32> = dev.sample_uniform_like(&Shape::from([4, 4]));
/// let b: Tensor<f32> = dev.sample_uniform_like(&Shape::from([2, 4]));
/// let (c, record) = op.try_forward(&[a, b]).unwrap();
/// assert_eq!(c.shape(), &Shape::from([6, 4]));
/// let grads = op.try_backward(record, &c).unwrap();
/// assert_eq!(grads.len(), 2);
/// ```
///
/// Dynamic axis:
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let op = Concat::dynamic();
/// let inferred = op
///     .try_infer_shape(&[PartialShape::unknown(), PartialShape::from([4, 4, 4, 4])])
///     .unwrap();
/// assert_eq!(inferred.rank(), Some(4));
///
/// let a: Tensor<f32> = dev.zeros_like(&Shape::from([1, 3]));
/// let b: Tensor<f32> = dev.zeros_like(&Shape::from([1, 2]));
/// let axis: Tensor<i32> = dev.tensor_from_vec(vec![1], Shape::scalar());
/// let (c, _) = op.try_forward_dyn(&axis, &[a, b]).unwrap();
/// assert_eq!(c.shape(), &Shape::from([1, 5]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concat {
    axis: Axis,
}

impl Concat {
    /// Concatenate along a fixed axis.
    pub fn along(axis: isize) -> Self {
        Self {
            axis: Axis::Static(axis),
        }
    }

    /// Concatenate along an axis that is supplied at execution time.
    pub fn dynamic() -> Self {
        Self {
            axis: Axis::Dynamic,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Infers the output shape before execution. See [infer_concat_shape].
    pub fn try_infer_shape(&self, inputs: &[PartialShape]) -> Result<PartialShape, Error> {
        infer_concat_shape(self.axis.known(), inputs)
    }

    /// Runs a static axis op. A dynamic op fails with [Error::UnresolvedAxis].
    pub fn try_forward<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>>(
        &self,
        inputs: &[Tensor<E, D>],
    ) -> Result<(Tensor<E, D>, ConcatRecord), Error> {
        let ax = self.axis.try_resolve(None)?;
        inputs.try_concat_tensor_along(ax)
    }

    /// Runs the op with the axis read from a scalar integer tensor.
    ///
    /// The axis tensor must have rank 0 ([Error::AxisNotScalar]) and its value must
    /// fit in an `isize` ([Error::AxisNotRepresentable]). On a static op it must
    /// agree with the fixed axis ([Error::AxisConflict]).
    pub fn try_forward_dyn<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>, I, A>(
        &self,
        axis: &Tensor<I, A>,
        inputs: &[Tensor<E, D>],
    ) -> Result<(Tensor<E, D>, ConcatRecord), Error>
    where
        I: Dtype + PrimInt,
        A: Storage<I>,
    {
        if axis.rank() != 0 {
            return Err(Error::AxisNotScalar { rank: axis.rank() });
        }
        let value = axis.as_vec()[0];
        let runtime = value.to_isize().ok_or_else(|| Error::AxisNotRepresentable {
            axis: format!("{value:?}"),
        })?;
        let ax = self.axis.try_resolve(Some(runtime))?;
        inputs.try_concat_tensor_along(ax)
    }

    /// Splits `grad_out` into gradients for each input of the forward call that
    /// produced `record`.
    pub fn try_backward<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>>(
        &self,
        record: ConcatRecord,
        grad_out: &Tensor<E, D>,
    ) -> Result<Vec<Tensor<E, D>>, Error> {
        grad_out.try_concat_grad(record)
    }
}
