//! The [Tensor] struct, [Cpu] device, and the traits used to allocate tensors.
//!
//! # Creating tensors
//!
//! Tensors are created through a device:
//!
//! ```rust
//! # use concat_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32> = dev.zeros_like(&Shape::from([2, 3]));
//! let b: Tensor<i32> = dev.tensor_from_vec(vec![1, 2, 3, 4, 5, 6], [2, 3]);
//! let c: Tensor<f32> = dev.sample_normal_like(&a);
//! assert_eq!(c.shape(), a.shape());
//! assert_eq!(b.as_vec(), [1, 2, 3, 4, 5, 6]);
//! ```
//!
//! Tensors are immutable once built: every op returns new tensors. Cloning a
//! tensor only clones a reference counted pointer to its data.

pub(crate) mod cpu;
mod error;
pub(crate) mod storage_traits;

use std::sync::Arc;

use crate::{
    dtypes::Unit,
    shapes::{HasShape, Shape},
};

pub use cpu::Cpu;
pub use error::Error;
pub use storage_traits::{SampleTensor, Storage, TensorFromVec, ZerosTensor};

/// The single tensor struct: a contiguous row-major nd array.
///
/// Generics:
/// 1. [Unit] - the type of the data stored in the array
/// 2. [Storage] - the device the array is stored on
#[derive(Debug, Clone)]
pub struct Tensor<E: Unit = f32, D: Storage<E> = Cpu> {
    pub(crate) data: Arc<D::Vec>,
    pub(crate) shape: Shape,
    pub(crate) device: D,
}

impl<E: Unit, D: Storage<E>> Tensor<E, D> {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// Copies the data out into a [Vec] in row major order.
    pub fn as_vec(&self) -> Vec<E> {
        self.device.tensor_to_vec(self)
    }
}

impl<E: Unit, D: Storage<E>> HasShape for Tensor<E, D> {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}
