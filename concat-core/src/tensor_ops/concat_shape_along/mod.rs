use crate::{shapes::*, tensor::Error};

/// Infers the output shape of concatenating `inputs` along `axis`, where shapes
/// and the axis may be only partially known.
///
/// Inference merges known facts and only fails when two known facts conflict:
/// - inputs with known, different ranks fail with [Error::RankMismatch]
/// - a negative axis, or one `>=` the known rank, fails with [Error::AxisOutOfRange]
/// - known, different sizes in a non-axis dimension fail with [Error::DimensionMismatch]
///
/// The output axis dimension is the sum of the inputs' axis dimensions, or unknown
/// if any of them is unknown. If `axis` is `None` the rank is still inferred, but
/// since any dimension may turn out to be the axis, no dimension size is.
///
/// ```rust
/// # use concat_core::prelude::*;
/// let a = PartialShape::from([Some(10), Some(1), None]);
/// let b = PartialShape::from([None, Some(2), Some(2)]);
/// let c = infer_concat_shape(Some(1), &[a.clone(), b.clone()]).unwrap();
/// assert_eq!(c, PartialShape::from([10, 3, 2]));
///
/// // axis only known at execution time
/// let c = infer_concat_shape(None, &[a, b, PartialShape::unknown()]).unwrap();
/// assert_eq!(c, PartialShape::with_rank(3));
/// ```
pub fn infer_concat_shape(
    axis: Option<isize>,
    inputs: &[PartialShape],
) -> Result<PartialShape, Error> {
    let mut rank = None;
    for (i, shape) in inputs.iter().enumerate() {
        match (rank, shape.rank()) {
            (Some(expected), Some(found)) if expected != found => {
                return Err(Error::RankMismatch {
                    input: i,
                    expected,
                    found,
                })
            }
            (None, found) => rank = found,
            _ => {}
        }
    }

    if let Some(ax) = axis {
        if ax < 0 {
            return Err(Error::AxisOutOfRange { axis: ax, rank });
        }
    }

    let Some(rank) = rank else {
        log::debug!("concat shape inference: rank unknown across {} inputs", inputs.len());
        return Ok(PartialShape::unknown());
    };

    let out = match axis {
        Some(ax) => infer_static_axis(try_normalize_axis(ax, rank)?, rank, inputs)?,
        None => infer_dynamic_axis(rank, inputs)?,
    };
    log::debug!("concat shape inference: axis={axis:?} -> {out}");
    Ok(out)
}

fn infer_static_axis(ax: usize, rank: usize, inputs: &[PartialShape]) -> Result<PartialShape, Error> {
    let mut dims = vec![None; rank];
    for (i, shape) in inputs.iter().enumerate() {
        let Some(in_dims) = shape.dims() else {
            continue;
        };
        for (d, &size) in in_dims.iter().enumerate() {
            if d == ax {
                continue;
            }
            dims[d] = merge_dim(dims[d], size).map_err(|(expected, found)| {
                Error::DimensionMismatch {
                    input: i,
                    dim: d,
                    expected,
                    found,
                }
            })?;
        }
    }
    let sizes: Option<Vec<usize>> = inputs.iter().map(|shape| shape.dim(ax)).collect();
    dims[ax] = match sizes {
        Some(sizes) => Some(
            sizes
                .into_iter()
                .try_fold(0usize, usize::checked_add)
                .ok_or(Error::DimensionOverflow { dim: ax })?,
        ),
        None => None,
    };
    Ok(PartialShape::new(dims))
}

fn infer_dynamic_axis(rank: usize, inputs: &[PartialShape]) -> Result<PartialShape, Error> {
    if let [only] = inputs {
        return Ok(only.clone());
    }

    // only the axis may hold differing sizes, so two conflicting dimensions
    // can never be valid
    let mut conflicts = (0..rank).filter_map(|d| {
        let mut merged = None;
        for (i, shape) in inputs.iter().enumerate() {
            match merge_dim(merged, shape.dim(d)) {
                Ok(m) => merged = m,
                Err((expected, found)) => {
                    return Some(Error::DimensionMismatch {
                        input: i,
                        dim: d,
                        expected,
                        found,
                    })
                }
            }
        }
        None
    });
    if let (Some(_), Some(second)) = (conflicts.next(), conflicts.next()) {
        return Err(second);
    }

    Ok(PartialShape::with_rank(rank))
}

/// Validates that concrete shapes can be concatenated along `ax` and returns the
/// normalized axis along with the output shape.
pub(crate) fn try_concat_shapes<'a, I>(shapes: I, ax: isize) -> Result<(usize, Shape), Error>
where
    I: IntoIterator<Item = &'a Shape>,
    I::IntoIter: Clone,
{
    let shapes = shapes.into_iter();
    let mut rest = shapes.clone().enumerate();
    let Some((_, first)) = rest.next() else {
        return Err(Error::EmptyInputs);
    };

    let rank = first.rank();
    for (i, shape) in rest.clone() {
        if shape.rank() != rank {
            return Err(Error::RankMismatch {
                input: i,
                expected: rank,
                found: shape.rank(),
            });
        }
    }

    let ax = try_normalize_axis(ax, rank)?;

    for (i, shape) in rest {
        for d in (0..rank).filter(|&d| d != ax) {
            if shape[d] != first[d] {
                return Err(Error::DimensionMismatch {
                    input: i,
                    dim: d,
                    expected: first[d],
                    found: shape[d],
                });
            }
        }
    }

    let total = shapes
        .map(|shape| shape[ax])
        .try_fold(0usize, usize::checked_add)
        .ok_or(Error::DimensionOverflow { dim: ax })?;
    Ok((ax, first.with_dim(ax, total)))
}

/// Concatenate concrete shapes along a given axis.
///
/// ```rust
/// # use concat_core::prelude::*;
/// let a = Shape::from([2, 3]);
/// let b = Shape::from([4, 3]);
/// assert_eq!([a.clone(), b.clone()].concat_shape_along(0), Shape::from([6, 3]));
///
/// let r = [a, b].try_concat_shape_along(1);
/// assert!(matches!(r, Err(Error::DimensionMismatch { input: 1, dim: 0, .. })));
/// ```
pub trait TryConcatShapeAlong: Sized {
    /// Concatenates self along the given axis.
    fn concat_shape_along(self, ax: isize) -> Shape {
        self.try_concat_shape_along(ax).unwrap()
    }
    /// Fallibly concatenates self along the given axis.
    fn try_concat_shape_along(self, ax: isize) -> Result<Shape, Error>;
}

impl TryConcatShapeAlong for &[Shape] {
    fn try_concat_shape_along(self, ax: isize) -> Result<Shape, Error> {
        try_concat_shapes(self, ax).map(|(_, shape)| shape)
    }
}

impl<const N: usize> TryConcatShapeAlong for [Shape; N] {
    fn try_concat_shape_along(self, ax: isize) -> Result<Shape, Error> {
        self.as_slice().try_concat_shape_along(ax)
    }
}
