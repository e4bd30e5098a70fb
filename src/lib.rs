//! Monte Carlo estimate of the standard normal probability mass.
//!
//! Points are drawn uniformly from the `[-5, 5] × [0, 0.5]` rectangle and the
//! fraction falling under the density curve, scaled by the rectangle's area,
//! estimates the integral (≈1.0).

pub mod config;
pub mod error;
pub mod math;

pub use config::EstimatorConfig;
pub use error::{Error, Result};
pub use math::density::standard_normal_pdf;
pub use math::monte_carlo::{
    estimate_area, estimate_standard_normal_mass, estimate_standard_normal_mass_parallel,
    BoundingBox, Estimate,
};
