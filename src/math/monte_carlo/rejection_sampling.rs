//! # Rejection Sampling Area Estimation
//!
//! Estimates the area under a non-negative curve `f` over `[x_min, x_max]` by
//! throwing points uniformly into a rectangle `[x_min, x_max] × [0, height]`
//! and counting the ones that land on or below the curve:
//!
//! ```text
//!   area ≈ (x_max - x_min) · height · accepted / samples
//! ```
//!
//! The estimate is only unbiased when the rectangle encloses the curve, i.e.
//! `f(x) <= height` everywhere on the interval. Points are drawn as two
//! independent uniforms in `[0, 1)`, x first and then y, so a run of `n`
//! trials consumes exactly `2n` values from the random source.
//!
//! # Examples
//!
//! ```
//! use intpdf::math::monte_carlo::rejection_sampling::{estimate_area, BoundingBox};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Area of the triangle under f(x) = x on [0, 1] is 0.5.
//! let bbox = BoundingBox::new(0.0, 1.0, 1.0).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let estimate = estimate_area(|x| x, bbox, 100_000, &mut rng).unwrap();
//! assert!((estimate.value() - 0.5).abs() < 0.01);
//! ```

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};

/// Sampling rectangle `[x_min, x_max] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x_min: f64,
    x_max: f64,
    height: f64,
}

/// The `[-5, 5] × [0, 0.5]` rectangle used for the standard normal density.
///
/// Its height sits above the density peak (≈0.3989) and the mass outside
/// ±5 is below 6e-7.
pub const STANDARD_NORMAL_BOX: BoundingBox = BoundingBox {
    x_min: -5.0,
    x_max: 5.0,
    height: 0.5,
};

impl BoundingBox {
    /// Creates a rectangle, rejecting non-finite bounds and empty extents.
    pub fn new(x_min: f64, x_max: f64, height: f64) -> Result<Self> {
        let finite = x_min.is_finite() && x_max.is_finite() && height.is_finite();
        if !finite || x_max <= x_min || height <= 0.0 {
            return Err(Error::InvalidBoundingBox {
                x_min,
                x_max,
                height,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            height,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height
    }

    /// Draws one point uniformly from the rectangle (x in `[x_min, x_max)`,
    /// y in `[0, height)`).
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let x = rng.gen::<f64>() * self.width() + self.x_min;
        let y = rng.gen::<f64>() * self.height;
        (x, y)
    }
}

/// Outcome of a completed estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    accepted: u64,
    samples: u64,
    area: f64,
}

impl Estimate {
    /// `samples` is non-zero and `accepted <= samples`; both hold for every
    /// estimate built inside this crate.
    pub(crate) fn new(accepted: u64, samples: u64, area: f64) -> Self {
        debug_assert!(samples > 0);
        debug_assert!(accepted <= samples);
        Self {
            accepted,
            samples,
            area,
        }
    }

    /// Number of points that fell on or under the curve.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of trials run.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Area of the rectangle the points were drawn from.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn acceptance_rate(&self) -> f64 {
        self.accepted as f64 / self.samples as f64
    }

    /// The area estimate, always within `[0, area]`.
    pub fn value(&self) -> f64 {
        self.area * self.acceptance_rate()
    }
}

/// Accept/reject tester for a fixed curve and rectangle.
#[derive(Debug, Clone)]
pub struct RejectionSampler<F> {
    curve: F,
    bbox: BoundingBox,
}

impl<F> RejectionSampler<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(curve: F, bbox: BoundingBox) -> Self {
        Self { curve, bbox }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Runs a single trial. A point exactly on the curve is accepted.
    pub fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        let (x, y) = self.bbox.sample_point(rng);
        y <= (self.curve)(x)
    }

    /// Runs `samples` sequential trials against `rng` and returns the count
    /// of accepted points.
    pub fn count_accepted<R: Rng + ?Sized>(&self, samples: u64, rng: &mut R) -> u64 {
        let mut accepted = 0;
        for _ in 0..samples {
            if self.trial(rng) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Estimates the area under the curve from `samples` trials.
    ///
    /// Returns [`Error::ZeroSamples`] without touching `rng` when `samples`
    /// is zero.
    pub fn estimate<R: Rng + ?Sized>(&self, samples: u64, rng: &mut R) -> Result<Estimate> {
        if samples == 0 {
            return Err(Error::ZeroSamples);
        }
        debug!(
            "rejection sampling {} points in [{}, {}] x [0, {}]",
            samples, self.bbox.x_min, self.bbox.x_max, self.bbox.height
        );

        let accepted = self.count_accepted(samples, rng);
        let estimate = Estimate::new(accepted, samples, self.bbox.area());

        debug!("accepted {} of {} points, estimate {}", accepted, samples, estimate.value());
        Ok(estimate)
    }
}

/// Estimates the area under `f` within `bbox` using `samples` trials.
pub fn estimate_area<F, R>(
    f: F,
    bbox: BoundingBox,
    samples: u64,
    rng: &mut R,
) -> Result<Estimate>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    RejectionSampler::new(f, bbox).estimate(samples, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_standard_box_geometry() {
        assert_eq!(STANDARD_NORMAL_BOX.x_min(), -5.0);
        assert_eq!(STANDARD_NORMAL_BOX.x_max(), 5.0);
        assert_eq!(STANDARD_NORMAL_BOX.width(), 10.0);
        assert_eq!(STANDARD_NORMAL_BOX.height(), 0.5);
        assert_eq!(STANDARD_NORMAL_BOX.area(), 5.0);
    }

    #[test]
    fn test_invalid_boxes() {
        assert!(BoundingBox::new(1.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(2.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 1.0, 0.0).is_err());
        assert!(BoundingBox::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(BoundingBox::new(f64::NAN, 1.0, 1.0).is_err());
        assert_eq!(BoundingBox::new(-5.0, 5.0, 0.5), Ok(STANDARD_NORMAL_BOX));
    }

    #[test]
    fn test_sample_point_stays_in_box() {
        let bbox = BoundingBox::new(-2.0, 3.0, 0.25).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10_000 {
            let (x, y) = bbox.sample_point(&mut rng);
            assert!((-2.0..=3.0).contains(&x));
            assert!((0.0..0.25).contains(&y));
        }
    }

    #[test]
    fn test_point_on_curve_is_accepted() {
        // An all-zero source puts every point at (x_min, 0), exactly on f = 0.
        let mut rng = StepRng::new(0, 0);
        let bbox = BoundingBox::new(0.0, 1.0, 1.0).unwrap();
        let estimate = estimate_area(|_| 0.0, bbox, 10, &mut rng).unwrap();
        assert_eq!(estimate.accepted(), 10);
        assert_eq!(estimate.value(), 1.0);
    }

    #[test]
    fn test_points_above_curve_are_rejected() {
        // An all-ones source puts every point just below the top-right corner.
        let mut rng = StepRng::new(u64::MAX, 0);
        let bbox = BoundingBox::new(0.0, 1.0, 1.0).unwrap();
        let estimate = estimate_area(|x| 0.5 * x, bbox, 10, &mut rng).unwrap();
        assert_eq!(estimate.accepted(), 0);
        assert_eq!(estimate.value(), 0.0);
    }

    #[test]
    fn test_zero_samples_draws_nothing() {
        let mut rng = StepRng::new(0, 1);
        let bbox = BoundingBox::new(0.0, 1.0, 1.0).unwrap();
        let sampler = RejectionSampler::new(|x| x, bbox);
        assert_eq!(sampler.estimate(0, &mut rng), Err(Error::ZeroSamples));
        assert_eq!(rand::RngCore::next_u64(&mut rng), 0);
    }

    #[test]
    fn test_counter_never_exceeds_samples() {
        let sampler = RejectionSampler::new(|_| 10.0, STANDARD_NORMAL_BOX);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut previous = 0;
        for samples in [1, 10, 100, 1_000] {
            let accepted = sampler.count_accepted(samples, &mut rng);
            assert_eq!(accepted, samples);
            assert!(accepted >= previous);
            previous = accepted;
        }
    }

    #[test]
    fn test_two_draws_per_trial() {
        // StepRng counts calls, so after n trials the next value is 2n.
        let mut rng = StepRng::new(0, 1);
        let bbox = BoundingBox::new(0.0, 1.0, 1.0).unwrap();
        let sampler = RejectionSampler::new(|x| x, bbox);
        sampler.count_accepted(25, &mut rng);
        assert_eq!(rand::RngCore::next_u64(&mut rng), 50);
    }

    #[test]
    fn test_triangle_area() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bbox = BoundingBox::new(0.0, 2.0, 2.0).unwrap();
        let sampler = RejectionSampler::new(|x| x, bbox);
        assert_eq!(sampler.bounding_box(), bbox);
        let estimate = sampler.estimate(200_000, &mut rng).unwrap();
        assert_eq!(estimate.samples(), 200_000);
        assert_eq!(estimate.area(), 4.0);
        assert_relative_eq!(estimate.value(), 2.0, epsilon = 0.03);
        assert_relative_eq!(estimate.acceptance_rate(), 0.5, epsilon = 0.01);
    }
}
