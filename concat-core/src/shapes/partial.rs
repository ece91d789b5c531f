use super::Shape;

/// A shape that may only be partially known, used during shape inference.
///
/// - `dims == None`: even the rank is unknown.
/// - `dims == Some(..)`: the rank is known, and each dimension is
///   independently known (`Some(size)`) or unknown (`None`).
///
/// ```rust
/// # use concat_core::prelude::*;
/// let a = PartialShape::from([Some(10), None, Some(2)]);
/// assert_eq!(a.rank(), Some(3));
/// assert_eq!(a.dim(1), None);
/// assert_eq!(a.to_string(), "[10, ?, 2]");
/// assert_eq!(PartialShape::unknown().rank(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PartialShape {
    dims: Option<Vec<Option<usize>>>,
}

impl PartialShape {
    /// Nothing is known, including the rank.
    pub fn unknown() -> Self {
        Self { dims: None }
    }

    /// The rank is known, but none of the dimensions are.
    pub fn with_rank(rank: usize) -> Self {
        Self {
            dims: Some(vec![None; rank]),
        }
    }

    pub fn new(dims: impl Into<Vec<Option<usize>>>) -> Self {
        Self {
            dims: Some(dims.into()),
        }
    }

    pub fn rank(&self) -> Option<usize> {
        self.dims.as_ref().map(Vec::len)
    }

    pub fn dims(&self) -> Option<&[Option<usize>]> {
        self.dims.as_deref()
    }

    /// The size of dimension `i`, if both the rank and that dimension are known.
    pub fn dim(&self, i: usize) -> Option<usize> {
        self.dims.as_ref().and_then(|dims| dims.get(i).copied().flatten())
    }

    pub fn is_fully_known(&self) -> bool {
        self.dims
            .as_ref()
            .map_or(false, |dims| dims.iter().all(Option::is_some))
    }

    /// Converts to a concrete [Shape] if every dimension is known.
    pub fn to_shape(&self) -> Option<Shape> {
        let dims = self.dims.as_ref()?;
        dims.iter()
            .copied()
            .collect::<Option<Vec<usize>>>()
            .map(Shape::from)
    }
}

/// Three way compare of two optionally known sizes of the same dimension.
///
/// Unknown merges with anything; two known sizes must agree. On conflict the
/// pair `(lhs, rhs)` is returned.
#[inline]
pub fn merge_dim(lhs: Option<usize>, rhs: Option<usize>) -> Result<Option<usize>, (usize, usize)> {
    match (lhs, rhs) {
        (Some(l), Some(r)) if l != r => Err((l, r)),
        (Some(l), _) => Ok(Some(l)),
        (None, r) => Ok(r),
    }
}

impl std::fmt::Display for PartialShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.dims {
            None => f.write_str("<unknown>"),
            Some(dims) => {
                f.write_str("[")?;
                for (i, d) in dims.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match d {
                        Some(d) => write!(f, "{d}")?,
                        None => f.write_str("?")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl From<Shape> for PartialShape {
    fn from(shape: Shape) -> Self {
        Self::from(&shape)
    }
}

impl From<&Shape> for PartialShape {
    fn from(shape: &Shape) -> Self {
        Self::new(shape.dims().iter().copied().map(Some).collect::<Vec<_>>())
    }
}

impl From<Vec<Option<usize>>> for PartialShape {
    fn from(dims: Vec<Option<usize>>) -> Self {
        Self::new(dims)
    }
}

impl<const N: usize> From<[Option<usize>; N]> for PartialShape {
    fn from(dims: [Option<usize>; N]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for PartialShape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(dims.map(Some).to_vec())
    }
}
