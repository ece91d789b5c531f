//! Element types. [Unit] is anything a tensor can hold; [Dtype] adds arithmetic
//! and primitive conversions.
//!
//! When the `f16` feature is enabled, this exports the [f16] type.

#[cfg(feature = "f16")]
pub use half::f16;

/// An element that can be stored in a tensor and copied around. Concatenation
/// never does arithmetic, so this is all it needs.
pub trait Unit:
    'static + Copy + Default + std::fmt::Debug + PartialEq + PartialOrd + Send + Sync
{
}

macro_rules! units {
    ($($type:ty),*) => {
        $(impl Unit for $type {})*
    };
}

units!(f32, f64, usize, isize, u8, i8, u16, i16, u32, i32, u64, i64, bool);
#[cfg(feature = "f16")]
units!(f16);

/// A [Unit] with arithmetic and conversions to and from primitives. [`bool`] is
/// a [Unit] but not a [Dtype].
///
/// Runtime axis tensors are read through [num_traits::ToPrimitive].
pub trait Dtype:
    Unit
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::Mul<Self, Output = Self>
    + std::ops::Div<Self, Output = Self>
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
{
}

macro_rules! dtypes {
    ($($type:ty),*) => {
        $(impl Dtype for $type {})*
    };
}

dtypes!(f32, f64, usize, isize, u8, i8, u16, i16, u32, i32, u64, i64);
#[cfg(feature = "f16")]
dtypes!(f16);
