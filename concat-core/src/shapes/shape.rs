/// The concrete shape of a tensor: one size per dimension.
///
/// Shapes are immutable; operations build new shapes, e.g. with [Shape::with_dim].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self { dims: dims.into() }
    }

    /// The rank 0 shape.
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// The number of dimensions.
    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The number of elements in this shape; the product of all dimensions.
    /// A rank 0 shape has one element, and any zero dimension gives zero.
    ///
    /// Saturates at `usize::MAX`. No buffer of that length can be allocated, so
    /// such shapes fail with [Error::OutOfMemory](crate::tensor::Error::OutOfMemory)
    /// when a tensor is created.
    pub fn num_elements(&self) -> usize {
        if self.dims.contains(&0) {
            return 0;
        }
        saturating_product(&self.dims)
    }

    /// The strides of how this shape is layed out in memory (row major).
    /// Saturates like [Shape::num_elements].
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.rank()];
        for i in (0..self.rank().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1].saturating_mul(self.dims[i + 1]);
        }
        strides
    }

    /// Product of the dimensions after `ax`.
    pub(crate) fn inner_size(&self, ax: usize) -> usize {
        saturating_product(&self.dims[ax + 1..])
    }

    /// Copy of this shape with dimension `ax` replaced by `size`.
    ///
    /// **Panics** if `ax >= self.rank()`.
    pub fn with_dim(&self, ax: usize, size: usize) -> Self {
        let mut dims = self.dims.clone();
        dims[ax] = size;
        Self { dims }
    }
}

fn saturating_product(dims: &[usize]) -> usize {
    dims.iter().fold(1, |n, &d| n.saturating_mul(d))
}

impl std::ops::Index<usize> for Shape {
    type Output = usize;
    fn index(&self, index: usize) -> &Self::Output {
        &self.dims[index]
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

/// Represents something that has a [Shape].
pub trait HasShape {
    fn shape(&self) -> &Shape;
}

impl HasShape for Shape {
    fn shape(&self) -> &Shape {
        self
    }
}
