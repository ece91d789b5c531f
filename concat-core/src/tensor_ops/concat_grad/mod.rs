use super::{ConcatAlongKernel, ConcatRecord};
use crate::{dtypes::Unit, tensor::*};

/// The backward pass of concatenation: splits a gradient shaped like the
/// forward output into one gradient per forward input.
///
/// Concatenation embeds each input into its own range of the output axis with an
/// identity map, so each input's gradient is exactly its slice of `self`. The
/// [ConcatRecord] from the forward pass is consumed.
///
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let a: Tensor<f32> = dev.zeros_like(&Shape::from([2, 1]));
/// let b: Tensor<f32> = dev.zeros_like(&Shape::from([2, 2]));
/// let (_, record) = [a, b].concat_tensor_along(1);
///
/// let grad_out = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
/// let grads = grad_out.concat_grad(record);
/// assert_eq!(grads[0].as_vec(), [1.0, 4.0]);
/// assert_eq!(grads[1].as_vec(), [2.0, 3.0, 5.0, 6.0]);
/// ```
pub trait TryConcatGrad<E: Unit, D: Storage<E>>: Sized {
    /// Splits self into per-input gradients.
    fn concat_grad(&self, record: ConcatRecord) -> Vec<Tensor<E, D>> {
        self.try_concat_grad(record).unwrap()
    }
    /// Fallibly splits self into per-input gradients. Fails with
    /// [Error::ShapeMismatch] if self is not shaped like the forward output.
    fn try_concat_grad(&self, record: ConcatRecord) -> Result<Vec<Tensor<E, D>>, Error>;
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>> TryConcatGrad<E, D> for Tensor<E, D> {
    fn try_concat_grad(&self, record: ConcatRecord) -> Result<Vec<Tensor<E, D>>, Error> {
        if &self.shape != record.output_shape() {
            return Err(Error::ShapeMismatch {
                expected: record.output_shape().clone(),
                found: self.shape.clone(),
            });
        }
        log::debug!(
            "concat backward along axis {}: {} -> sizes {:?}",
            record.axis(),
            self.shape,
            record.sizes()
        );

        let mut grads = record
            .input_shapes()
            .iter()
            .map(|shape| self.device.try_zeros_like(shape))
            .collect::<Result<Vec<_>, _>>()?;
        self.device.backward(record.axis(), self, &mut grads)?;
        Ok(grads)
    }
}
