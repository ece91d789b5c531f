use super::{ConcatAlongKernel, ConcatRecord, TryConcatGrad};
use crate::{dtypes::Unit, shapes::try_normalize_axis, tensor::*};

/// Split a tensor into pieces along a given axis.
///
/// This is the reverse of [super::TryConcatTensorAlong::concat_tensor_along].
/// `sizes` must add up to the size of `ax`.
///
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let ab: Tensor<f32> = dev.zeros_like(&Shape::from([4, 5]));
/// let pieces = ab.split_tensor_along(1, &[2, 0, 3]);
/// assert_eq!(pieces[0].shape(), &Shape::from([4, 2]));
/// assert_eq!(pieces[1].shape(), &Shape::from([4, 0]));
/// assert_eq!(pieces[2].shape(), &Shape::from([4, 3]));
/// ```
pub trait TrySplitTensorAlong<E: Unit, D: Storage<E>>: Sized {
    /// Splits self along the given axis.
    fn split_tensor_along(&self, ax: isize, sizes: &[usize]) -> Vec<Tensor<E, D>> {
        self.try_split_tensor_along(ax, sizes).unwrap()
    }
    /// Fallibly splits self along the given axis.
    fn try_split_tensor_along(&self, ax: isize, sizes: &[usize])
        -> Result<Vec<Tensor<E, D>>, Error>;
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>> TrySplitTensorAlong<E, D>
    for Tensor<E, D>
{
    fn try_split_tensor_along(
        &self,
        ax: isize,
        sizes: &[usize],
    ) -> Result<Vec<Tensor<E, D>>, Error> {
        let ax = try_normalize_axis(ax, self.rank())?;
        let total = sizes
            .iter()
            .try_fold(0usize, |total, &size| total.checked_add(size))
            .ok_or(Error::DimensionOverflow { dim: ax })?;
        if total != self.shape[ax] {
            return Err(Error::ShapeMismatch {
                expected: self.shape.with_dim(ax, total),
                found: self.shape.clone(),
            });
        }
        self.try_concat_grad(ConcatRecord::new(ax, sizes.to_vec(), self.shape.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shapes::*, tensor_ops::*, tests::*};

    #[test]
    fn test_split_ax_0() {
        let dev: TestDevice = Default::default();
        let ab: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([5, 3, 4]));
        let pieces = ab.split_tensor_along(0, &[2, 3]);
        assert_eq!(pieces[0].shape(), &Shape::from([2, 3, 4]));
        assert_eq!(pieces[1].shape(), &Shape::from([3, 3, 4]));
        assert_eq!(pieces[0].as_vec(), ab.as_vec()[..24]);
        assert_eq!(pieces[1].as_vec(), ab.as_vec()[24..]);

        let (ab_concat, _) = pieces.concat_tensor_along(0);
        assert_eq!(ab_concat.as_vec(), ab.as_vec());
    }

    #[test]
    fn test_split_ax_2() {
        let dev: TestDevice = Default::default();
        let ab: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 3, 5]));
        let pieces = ab.split_tensor_along(2, &[1, 4]);
        assert_eq!(pieces[0].as_vec(), slice_along(&ab, 2, 0, 1));
        assert_eq!(pieces[1].as_vec(), slice_along(&ab, 2, 1, 5));
    }

    #[test]
    fn test_split_bad_sizes() {
        let dev: TestDevice = Default::default();
        let ab: Tensor<TestDtype> = dev.zeros_like(&Shape::from([4, 5]));
        assert_eq!(
            ab.try_split_tensor_along(1, &[2, 2]).unwrap_err(),
            Error::ShapeMismatch {
                expected: Shape::from([4, 4]),
                found: Shape::from([4, 5]),
            }
        );
        assert!(matches!(
            ab.try_split_tensor_along(2, &[5]),
            Err(Error::AxisOutOfRange { axis: 2, rank: Some(2) })
        ));
        assert_eq!(
            ab.try_split_tensor_along(1, &[usize::MAX, 6]).unwrap_err(),
            Error::DimensionOverflow { dim: 1 }
        );
    }
}
