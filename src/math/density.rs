//! Standard normal probability density.
//!
//! ```text
//!   φ(x) = exp(-x² / 2) / sqrt(2π)
//! ```
//!
//! The normalizing constant is derived from the float type's own π so that
//! `f64` callers get the full 53 bits rather than a rounded literal such as
//! `3.14159`, which would bias any acceptance test built on top of it.
//!
//! # Examples
//!
//! ```
//! use intpdf::math::density::standard_normal_pdf;
//!
//! let peak = standard_normal_pdf(0.0_f64);
//! assert!((peak - 0.398942).abs() < 1e-6);
//! ```

use num_traits::{Float, FloatConst};

/// Evaluates the standard normal density at `x`.
///
/// Works for both `f32` and `f64`. `x` must be finite.
pub fn standard_normal_pdf<T>(x: T) -> T
where
    T: Float + FloatConst,
{
    let two = T::one() + T::one();
    (-x * x / two).exp() / (two * T::PI()).sqrt()
}
