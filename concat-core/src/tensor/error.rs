use crate::shapes::Shape;

/// Represents a number of different errors that can occur from creating tensors
/// or launching tensor operations.
///
/// Shape errors reflect a programming error of the caller. They are reported
/// synchronously and no partial output is ever produced.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements,
    /// An op that needs at least one input tensor was given none.
    EmptyInputs,
    /// Input `input` has rank `found`, but an earlier input had rank `expected`.
    RankMismatch {
        input: usize,
        expected: usize,
        found: usize,
    },
    /// `axis` is not a valid dimension index. `rank` is `None` if it was rejected
    /// before the rank was known (negative axes).
    AxisOutOfRange { axis: isize, rank: Option<usize> },
    /// Input `input` disagrees with an earlier input on the size of non-axis dimension `dim`.
    DimensionMismatch {
        input: usize,
        dim: usize,
        expected: usize,
        found: usize,
    },
    /// A gradient (or split) does not match the shape recorded for it.
    ShapeMismatch { expected: Shape, found: Shape },
    /// A dynamic axis op was executed without an axis value.
    UnresolvedAxis,
    /// A static axis op was executed with a different runtime axis value.
    AxisConflict { fixed: isize, runtime: isize },
    /// The runtime axis tensor was not a scalar.
    AxisNotScalar { rank: usize },
    /// The runtime axis value does not fit in an `isize`. Holds the value as given.
    AxisNotRepresentable { axis: String },
    /// The sizes along dimension `dim` add up to more than `usize::MAX`.
    DimensionOverflow { dim: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("out of memory"),
            Self::WrongNumElements => f.write_str("wrong number of elements for shape"),
            Self::EmptyInputs => f.write_str("concat requires at least one input"),
            Self::RankMismatch {
                input,
                expected,
                found,
            } => write!(
                f,
                "rank mismatch: input {input} has rank {found}, expected rank {expected}"
            ),
            Self::AxisOutOfRange {
                axis,
                rank: Some(rank),
            } => write!(f, "axis {axis} is out of range for rank {rank}"),
            Self::AxisOutOfRange { axis, rank: None } => {
                write!(f, "axis {axis} is out of range")
            }
            Self::DimensionMismatch {
                input,
                dim,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch: input {input} has size {found} in dimension {dim}, expected {expected}"
            ),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected}, found {found}")
            }
            Self::UnresolvedAxis => f.write_str("dynamic axis was not supplied"),
            Self::AxisConflict { fixed, runtime } => write!(
                f,
                "runtime axis {runtime} conflicts with static axis {fixed}"
            ),
            Self::AxisNotScalar { rank } => {
                write!(f, "axis tensor must be a scalar, found rank {rank}")
            }
            Self::AxisNotRepresentable { axis } => {
                write!(f, "axis {axis} does not fit in an isize")
            }
            Self::DimensionOverflow { dim } => {
                write!(f, "sizes along dimension {dim} overflow usize")
            }
        }
    }
}

impl std::error::Error for Error {}
