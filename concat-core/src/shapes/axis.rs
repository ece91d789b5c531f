use crate::tensor::Error;

/// The dimension an op concatenates along.
///
/// A [Axis::Static] axis is fixed when the op is built. A [Axis::Dynamic] axis
/// only becomes known when the op executes, where it is supplied as a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Static(isize),
    Dynamic,
}

impl Axis {
    /// The axis value if it is known before execution.
    pub fn known(&self) -> Option<isize> {
        match self {
            Self::Static(ax) => Some(*ax),
            Self::Dynamic => None,
        }
    }

    /// Picks the axis value to execute with, given the value supplied at
    /// execution time (if any).
    pub fn try_resolve(&self, runtime: Option<isize>) -> Result<isize, Error> {
        match (*self, runtime) {
            (Self::Static(fixed), None) => Ok(fixed),
            (Self::Static(fixed), Some(runtime)) if fixed == runtime => Ok(fixed),
            (Self::Static(fixed), Some(runtime)) => Err(Error::AxisConflict { fixed, runtime }),
            (Self::Dynamic, Some(runtime)) => Ok(runtime),
            (Self::Dynamic, None) => Err(Error::UnresolvedAxis),
        }
    }
}

impl From<isize> for Axis {
    fn from(ax: isize) -> Self {
        Self::Static(ax)
    }
}

/// Checks `0 <= ax < rank` and converts to an index.
pub(crate) fn try_normalize_axis(ax: isize, rank: usize) -> Result<usize, Error> {
    match usize::try_from(ax) {
        Ok(i) if i < rank => Ok(i),
        _ => Err(Error::AxisOutOfRange {
            axis: ax,
            rank: Some(rank),
        }),
    }
}
