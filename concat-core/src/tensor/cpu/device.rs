use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::dtypes::Unit;
use crate::tensor::{storage_traits::Storage, Tensor};

/// A device that stores tensors on the heap.
///
/// The device owns a seeded random number generator that is used to sample
/// tensors. Clones of a device share the same generator.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub(crate) rng: Arc<Mutex<StdRng>>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl Cpu {
    /// Constructs rng with the given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub(crate) fn rng(&self) -> MutexGuard<'_, StdRng> {
        // a poisoned generator is still a valid generator
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<E: Unit> Storage<E> for Cpu {
    type Vec = Vec<E>;

    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E> {
        tensor.data.as_ref().clone()
    }
}
