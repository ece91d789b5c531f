use rand::distributions::Distribution;
use rand_distr::{Standard, StandardNormal};

use crate::{
    dtypes::Unit,
    shapes::{HasShape, Shape},
};

use super::{Error, Tensor};

/// Something that can store nd arrays of element type `E`.
pub trait Storage<E: Unit>: 'static + std::fmt::Debug + Default + Clone + Send + Sync {
    /// Generic Storage type
    type Vec: 'static + std::fmt::Debug + Clone + Send + Sync;

    /// Copies the buffer of `tensor` out in row major order.
    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E>;
}

/// Construct tensors filled with zeros (`E::default()`).
pub trait ZerosTensor<E: Unit>: Storage<E> {
    /// Build the tensor with a shape given by something else.
    ///
    /// Given a shape directly:
    /// ```rust
    /// # use concat_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.zeros_like(&Shape::from([5, 3]));
    /// ```
    ///
    /// Given another tensor:
    /// ```rust
    /// # use concat_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.zeros_like(&Shape::from([2, 3]));
    /// let b: Tensor<f32> = dev.zeros_like(&a);
    /// ```
    fn zeros_like<S: HasShape>(&self, src: &S) -> Tensor<E, Self> {
        self.try_zeros_like(src).unwrap()
    }

    /// Fallible version of [ZerosTensor::zeros_like]
    fn try_zeros_like<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error>;
}

/// Construct tensors from rust vectors.
pub trait TensorFromVec<E: Unit>: Storage<E> {
    /// ```rust
    /// # use concat_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
    /// let scalar: Tensor<i32> = dev.tensor_from_vec(vec![1], Shape::scalar());
    /// ```
    fn tensor_from_vec(&self, src: Vec<E>, shape: impl Into<Shape>) -> Tensor<E, Self> {
        self.try_tensor_from_vec(src, shape).unwrap()
    }

    /// Fails with [Error::WrongNumElements] if `src` does not have exactly as many
    /// elements as `shape`.
    fn try_tensor_from_vec(
        &self,
        src: Vec<E>,
        shape: impl Into<Shape>,
    ) -> Result<Tensor<E, Self>, Error>;
}

/// Constructs tensors filled with random values from a given distribution.
pub trait SampleTensor<E: Unit>: Storage<E> {
    /// Samples a tensor with a given shape from a uniform distribution
    fn sample_uniform_like<S: HasShape>(&self, src: &S) -> Tensor<E, Self>
    where
        Standard: Distribution<E>,
    {
        self.sample_like(src, Standard)
    }

    /// Samples a tensor with a given shape from a normal distribution
    fn sample_normal_like<S: HasShape>(&self, src: &S) -> Tensor<E, Self>
    where
        StandardNormal: Distribution<E>,
    {
        self.sample_like(src, StandardNormal)
    }

    /// Samples a tensor with a given shape from a given distribution.
    fn sample_like<S: HasShape, D: Distribution<E>>(&self, src: &S, distr: D) -> Tensor<E, Self> {
        self.try_sample_like(src, distr).unwrap()
    }

    /// Fallibly samples a tensor with a given shape from a given distribution.
    fn try_sample_like<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error>;
}
