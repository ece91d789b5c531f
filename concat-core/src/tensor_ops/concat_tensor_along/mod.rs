use super::concat_shape_along::try_concat_shapes;
use crate::{dtypes::Unit, shapes::*, tensor::*};

pub(crate) mod cpu_kernel;

/// Everything the backward pass needs to know about a forward concatenation:
/// the axis, the size of each input along it, and the output shape.
///
/// Returned by [TryConcatTensorAlong] and consumed by [super::TryConcatGrad].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatRecord {
    axis: usize,
    sizes: Vec<usize>,
    output_shape: Shape,
}

impl ConcatRecord {
    pub(crate) fn new(axis: usize, sizes: Vec<usize>, output_shape: Shape) -> Self {
        debug_assert_eq!(sizes.iter().sum::<usize>(), output_shape[axis]);
        Self {
            axis,
            sizes,
            output_shape,
        }
    }

    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The size of each input along [ConcatRecord::axis], in input order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn num_inputs(&self) -> usize {
        self.sizes.len()
    }

    pub fn output_shape(&self) -> &Shape {
        &self.output_shape
    }

    /// Where each input starts along the axis of the output: an exclusive
    /// prefix sum of [ConcatRecord::sizes].
    ///
    /// ```rust
    /// # use concat_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let inputs: Vec<Tensor<f32>> = [1, 0, 2, 6]
    ///     .map(|n| dev.zeros_like(&Shape::from([10, n, 2])))
    ///     .to_vec();
    /// let (_, record) = inputs.concat_tensor_along(1);
    /// assert_eq!(record.offsets(), [0, 1, 1, 3]);
    /// ```
    pub fn offsets(&self) -> Vec<usize> {
        self.sizes
            .iter()
            .scan(0, |offset, &size| {
                let start = *offset;
                *offset += size;
                Some(start)
            })
            .collect()
    }

    /// The shape input `i` had in the forward pass.
    ///
    /// **Panics** if `i >= self.num_inputs()`.
    pub fn input_shape(&self, i: usize) -> Shape {
        self.output_shape.with_dim(self.axis, self.sizes[i])
    }

    pub fn input_shapes(&self) -> Vec<Shape> {
        (0..self.num_inputs()).map(|i| self.input_shape(i)).collect()
    }
}

/// Concatenate an ordered list of tensors along a given axis.
///
/// All inputs must have the same rank and the same sizes in every dimension
/// except `ax`. Sizes along `ax` may differ, including zero. Returns the output
/// tensor and the [ConcatRecord] to hand to the backward pass.
///
/// Along axis 0:
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let a: Tensor<f32> = dev.sample_normal_like(&Shape::from([2, 3, 4]));
/// let b: Tensor<f32> = dev.sample_normal_like(&Shape::from([3, 3, 4]));
/// let (c, _) = [a, b].concat_tensor_along(0);
/// assert_eq!(c.shape(), &Shape::from([5, 3, 4]));
/// ```
///
/// Along axis 1:
/// ```rust
/// # use concat_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let a: Tensor<i32> = dev.tensor_from_vec(vec![1, 2, 3, 4], [2, 2]);
/// let b: Tensor<i32> = dev.tensor_from_vec(vec![5, 6], [2, 1]);
/// let (c, _) = [a, b].concat_tensor_along(1);
/// assert_eq!(c.as_vec(), [1, 2, 5, 3, 4, 6]);
/// ```
pub trait TryConcatTensorAlong<E: Unit, D: Storage<E>>: Sized {
    /// Concatenates self along the given axis.
    fn concat_tensor_along(self, ax: isize) -> (Tensor<E, D>, ConcatRecord) {
        self.try_concat_tensor_along(ax).unwrap()
    }
    /// Fallibly concatenates self along the given axis.
    fn try_concat_tensor_along(self, ax: isize) -> Result<(Tensor<E, D>, ConcatRecord), Error>;
}

pub trait ConcatAlongKernel<E: Unit>: Storage<E> {
    /// Copies every input into its slice of `out` along `ax`.
    fn forward(
        &self,
        ax: usize,
        inputs: &[Tensor<E, Self>],
        out: &mut Tensor<E, Self>,
    ) -> Result<(), Error>;

    /// Copies the slice of `grad_out` along `ax` that belongs to each of
    /// `grads` into it. `grads` are already allocated with their final shapes.
    fn backward(
        &self,
        ax: usize,
        grad_out: &Tensor<E, Self>,
        grads: &mut [Tensor<E, Self>],
    ) -> Result<(), Error>;
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>> TryConcatTensorAlong<E, D>
    for &[Tensor<E, D>]
{
    fn try_concat_tensor_along(self, ax: isize) -> Result<(Tensor<E, D>, ConcatRecord), Error> {
        let (ax, out_shape) = try_concat_shapes(self.iter().map(|t| t.shape()), ax)?;
        let sizes: Vec<usize> = self.iter().map(|t| t.shape()[ax]).collect();
        log::debug!(
            "concat along axis {ax}: {} inputs -> {out_shape}",
            self.len()
        );

        let device = self[0].device.clone();
        let mut out = device.try_zeros_like(&out_shape)?;
        device.forward(ax, self, &mut out)?;

        Ok((out, ConcatRecord::new(ax, sizes, out_shape)))
    }
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>> TryConcatTensorAlong<E, D>
    for &Vec<Tensor<E, D>>
{
    fn try_concat_tensor_along(self, ax: isize) -> Result<(Tensor<E, D>, ConcatRecord), Error> {
        self.as_slice().try_concat_tensor_along(ax)
    }
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>> TryConcatTensorAlong<E, D>
    for Vec<Tensor<E, D>>
{
    fn try_concat_tensor_along(self, ax: isize) -> Result<(Tensor<E, D>, ConcatRecord), Error> {
        self.as_slice().try_concat_tensor_along(ax)
    }
}

impl<E: Unit, D: ConcatAlongKernel<E> + ZerosTensor<E>, const N: usize>
    TryConcatTensorAlong<E, D> for [Tensor<E, D>; N]
{
    fn try_concat_tensor_along(self, ax: isize) -> Result<(Tensor<E, D>, ConcatRecord), Error> {
        self.as_slice().try_concat_tensor_along(ax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tensor_ops::TryConcatGrad, tests::*};

    #[test]
    fn test_concat_ax_0() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 3, 4]));
        let b: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([3, 3, 4]));
        let (c, record) = [a.clone(), b.clone()].concat_tensor_along(0);
        assert_eq!(c.shape(), &Shape::from([5, 3, 4]));
        assert_eq!(record.sizes(), [2, 3]);
        assert_eq!(record.axis(), 0);
        assert_eq!(slice_along(&c, 0, 0, 2), a.as_vec());
        assert_eq!(slice_along(&c, 0, 2, 5), b.as_vec());
    }

    #[test]
    fn test_concat_ax_1() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 2, 4]));
        let b: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 3, 4]));
        let (c, _) = [a.clone(), b.clone()].concat_tensor_along(1);
        assert_eq!(c.shape(), &Shape::from([2, 5, 4]));
        assert_eq!(slice_along(&c, 1, 0, 2), a.as_vec());
        assert_eq!(slice_along(&c, 1, 2, 5), b.as_vec());
    }

    #[test]
    fn test_concat_ax_2() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 3, 2]));
        let b: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 3, 3]));
        let (c, _) = [a.clone(), b.clone()].concat_tensor_along(2);
        assert_eq!(c.shape(), &Shape::from([2, 3, 5]));
        assert_eq!(slice_along(&c, 2, 0, 2), a.as_vec());
        assert_eq!(slice_along(&c, 2, 2, 5), b.as_vec());
    }

    #[test]
    fn test_hstack_and_vstack() {
        let dev: TestDevice = Default::default();
        let shape = Shape::from([4, 4]);
        let p1: Tensor<f32> = dev.sample_uniform_like(&shape);
        let p2: Tensor<f32> = dev.sample_uniform_like(&shape);

        let (rows, _) = [p1.clone(), p2.clone()].concat_tensor_along(0);
        assert_eq!(rows.shape(), &Shape::from([8, 4]));
        assert_eq!(rows.as_vec()[..16], p1.as_vec());
        assert_eq!(rows.as_vec()[16..], p2.as_vec());

        let (cols, _) = [p1.clone(), p2.clone()].concat_tensor_along(1);
        assert_eq!(cols.shape(), &Shape::from([4, 8]));
        assert_eq!(slice_along(&cols, 1, 0, 4), p1.as_vec());
        assert_eq!(slice_along(&cols, 1, 4, 8), p2.as_vec());
    }

    #[test]
    fn test_concat_int_dtypes() {
        let dev: TestDevice = Default::default();
        let a: Tensor<i32> = dev.sample_uniform_like(&Shape::from([2, 3]));
        let b: Tensor<i32> = dev.sample_uniform_like(&Shape::from([2, 3]));
        let (c, _) = [a.clone(), b.clone()].concat_tensor_along(0);
        assert_eq!(c.as_vec()[..6], a.as_vec());
        assert_eq!(c.as_vec()[6..], b.as_vec());

        let a: Tensor<i16> = dev.tensor_from_vec(vec![1, 2], [2, 1]);
        let b: Tensor<i16> = dev.tensor_from_vec(vec![3, 4, 5, 6], [2, 2]);
        let (c, _) = [a, b].concat_tensor_along(1);
        assert_eq!(c.as_vec(), [1, 3, 4, 2, 5, 6]);
    }

    #[test]
    fn test_concat_many_inputs() {
        let dev: TestDevice = Default::default();
        let inputs: Vec<Tensor<TestDtype>> = [1, 2, 6]
            .map(|n| dev.sample_normal_like(&Shape::from([10, n, 2])))
            .to_vec();
        let (c, record) = inputs.as_slice().concat_tensor_along(1);
        assert_eq!(c.shape(), &Shape::from([10, 9, 2]));
        assert_eq!(record.offsets(), [0, 1, 3]);
        for (t, (start, size)) in inputs.iter().zip(record.offsets().into_iter().zip([1, 2, 6])) {
            assert_eq!(slice_along(&c, 1, start, start + size), t.as_vec());
        }
    }

    #[test]
    fn test_concat_single_input_is_identity() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([3, 4]));
        let (c, record) = [a.clone()].concat_tensor_along(1);
        assert_eq!(c.shape(), a.shape());
        assert_eq!(c.as_vec(), a.as_vec());
        assert_eq!(record.sizes(), [4]);
    }

    #[test]
    fn test_concat_zero_sized() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 0, 3]));
        let b: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 2, 3]));
        let z: Tensor<TestDtype> = dev.sample_normal_like(&Shape::from([2, 0, 3]));

        let (c, record) = [a.clone(), b.clone(), z.clone()].concat_tensor_along(1);
        assert_eq!(c.shape(), &Shape::from([2, 2, 3]));
        assert_eq!(c.as_vec(), b.as_vec());
        assert_eq!(record.offsets(), [0, 0, 2]);

        let (c, _) = [a, z].concat_tensor_along(1);
        assert_eq!(c.shape(), &Shape::from([2, 0, 3]));
        assert!(c.as_vec().is_empty());
    }

    #[test]
    fn test_concat_zero_sized_still_validated() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.zeros_like(&Shape::from([2, 0, 3]));
        let b: Tensor<TestDtype> = dev.zeros_like(&Shape::from([5, 2, 3]));
        let r = [a, b].try_concat_tensor_along(1);
        assert!(matches!(
            r,
            Err(Error::DimensionMismatch { input: 1, dim: 0, expected: 2, found: 5 })
        ));
    }

    #[test]
    fn test_concat_zero_sized_huge_dims() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.zeros_like(&Shape::from([0, usize::MAX, usize::MAX]));
        let b: Tensor<TestDtype> = dev.zeros_like(&Shape::from([0, 0, usize::MAX]));
        let (c, record) = [a, b].concat_tensor_along(1);
        assert_eq!(c.shape(), &Shape::from([0, usize::MAX, usize::MAX]));
        assert!(c.as_vec().is_empty());

        let grads = c.concat_grad(record);
        assert_eq!(grads[0].shape(), &Shape::from([0, usize::MAX, usize::MAX]));
        assert_eq!(grads[1].shape(), &Shape::from([0, 0, usize::MAX]));
    }

    #[test]
    fn test_concat_axis_size_overflow() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.zeros_like(&Shape::from([usize::MAX, 0]));
        let b: Tensor<TestDtype> = dev.zeros_like(&Shape::from([1, 0]));
        let r = [a, b].try_concat_tensor_along(0);
        assert!(matches!(r, Err(Error::DimensionOverflow { dim: 0 })));
    }

    #[test]
    fn test_concat_validation_errors() {
        let dev: TestDevice = Default::default();
        let t = |dims: &[usize]| -> Tensor<TestDtype> { dev.zeros_like(&Shape::from(dims)) };

        let r = [t(&[4, 4, 4, 4]), t(&[4, 4, 4])].try_concat_tensor_along(1);
        assert!(matches!(r, Err(Error::RankMismatch { input: 1, expected: 4, found: 3 })));

        let r = [t(&[1, 2, 1]), t(&[3, 2, 1])].try_concat_tensor_along(1);
        assert!(matches!(r, Err(Error::DimensionMismatch { dim: 0, .. })));

        let r = [t(&[4, 4, 4]), t(&[4, 4, 4])].try_concat_tensor_along(3);
        assert!(matches!(r, Err(Error::AxisOutOfRange { axis: 3, rank: Some(3) })));

        let r = [t(&[4, 4, 4]), t(&[4, 4, 4])].try_concat_tensor_along(-1);
        assert!(matches!(r, Err(Error::AxisOutOfRange { axis: -1, .. })));

        let r = [t(&[]), t(&[])].try_concat_tensor_along(0);
        assert!(matches!(r, Err(Error::AxisOutOfRange { axis: 0, rank: Some(0) })));

        let empty: Vec<Tensor<TestDtype>> = Vec::new();
        assert!(matches!(empty.try_concat_tensor_along(0), Err(Error::EmptyInputs)));
    }

    #[test]
    fn test_record_input_shapes() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.zeros_like(&Shape::from([3, 1, 2]));
        let b: Tensor<TestDtype> = dev.zeros_like(&Shape::from([3, 4, 2]));
        let (_, record) = [a.clone(), b.clone()].concat_tensor_along(1);
        assert_eq!(record.num_inputs(), 2);
        assert_eq!(record.output_shape(), &Shape::from([3, 5, 2]));
        assert_eq!(record.input_shapes(), [a.shape().clone(), b.shape().clone()]);
    }
}
