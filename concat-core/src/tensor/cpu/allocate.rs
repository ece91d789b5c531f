use rand::{distributions::Distribution, Rng};
use std::sync::Arc;

use super::Cpu;
use crate::{
    dtypes::Unit,
    shapes::{HasShape, Shape},
    tensor::{storage_traits::*, Error, Tensor},
};

impl Cpu {
    #[inline]
    pub(crate) fn try_alloc_elem<E: Unit>(&self, numel: usize, elem: E) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.resize(numel, elem);
        Ok(data)
    }
}

impl<E: Unit> ZerosTensor<E> for Cpu {
    fn try_zeros_like<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error> {
        let shape = src.shape().clone();
        let data = self.try_alloc_elem::<E>(shape.num_elements(), Default::default())?;
        Ok(Tensor {
            data: Arc::new(data),
            shape,
            device: self.clone(),
        })
    }
}

impl<E: Unit> TensorFromVec<E> for Cpu {
    fn try_tensor_from_vec(
        &self,
        src: Vec<E>,
        shape: impl Into<Shape>,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        if src.len() != shape.num_elements() {
            return Err(Error::WrongNumElements);
        }
        Ok(Tensor {
            data: Arc::new(src),
            shape,
            device: self.clone(),
        })
    }
}

impl<E: Unit> SampleTensor<E> for Cpu {
    fn try_sample_like<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = src.shape().clone();
        let mut data = self.try_alloc_elem::<E>(shape.num_elements(), Default::default())?;
        {
            let mut rng = self.rng();
            data.iter_mut().for_each(|x| *x = rng.sample(&distr));
        }
        Ok(Tensor {
            data: Arc::new(data),
            shape,
            device: self.clone(),
        })
    }
}
