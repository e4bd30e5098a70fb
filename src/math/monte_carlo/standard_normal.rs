//! Probability mass of the standard normal density over `[-5, 5]`.
//!
//! The true value is `1 - 2Φ(-5) ≈ 0.9999994`, so the estimates below should
//! settle around 1.0 as the sample count grows.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::rejection_sampling::{Estimate, RejectionSampler, STANDARD_NORMAL_BOX};
use crate::error::{Error, Result};
use crate::math::density::standard_normal_pdf;

fn sampler() -> RejectionSampler<fn(f64) -> f64> {
    RejectionSampler::new(standard_normal_pdf as fn(f64) -> f64, STANDARD_NORMAL_BOX)
}

/// Estimates the standard normal mass on `[-5, 5]` from `samples` sequential
/// trials drawn from `rng`.
///
/// # Examples
///
/// ```
/// use intpdf::math::monte_carlo::standard_normal::estimate_standard_normal_mass;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(2024);
/// let estimate = estimate_standard_normal_mass(100_000, &mut rng).unwrap();
/// assert!((estimate.value() - 1.0).abs() < 0.05);
/// ```
pub fn estimate_standard_normal_mass<R: Rng + ?Sized>(
    samples: u64,
    rng: &mut R,
) -> Result<Estimate> {
    sampler().estimate(samples, rng)
}

/// Parallel form of [`estimate_standard_normal_mass`].
///
/// The trials are cut into `workers` fixed batches; the first
/// `samples % workers` batches run one extra trial. Batch `i` draws from
/// `ChaCha8Rng::seed_from_u64(seed)` on stream `i` and keeps its own counter,
/// and the counters are summed once every batch has finished. The result
/// depends only on `(samples, workers, seed)`, never on thread scheduling.
pub fn estimate_standard_normal_mass_parallel(
    samples: u64,
    workers: usize,
    seed: u64,
) -> Result<Estimate> {
    if workers == 0 {
        return Err(Error::InvalidWorkerCount(workers));
    }
    if samples == 0 {
        return Err(Error::ZeroSamples);
    }

    let sampler = sampler();
    let batches = workers as u64;
    let per_batch = samples / batches;
    let remainder = samples % batches;
    debug!(
        "parallel rejection sampling: {} points over {} batches (seed {})",
        samples, workers, seed
    );

    let accepted: u64 = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let batch_samples = per_batch + u64::from(batch < remainder);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(batch);
            let accepted = sampler.count_accepted(batch_samples, &mut rng);
            trace!("batch {}: accepted {} of {}", batch, accepted, batch_samples);
            accepted
        })
        .sum();

    let estimate = Estimate::new(accepted, samples, STANDARD_NORMAL_BOX.area());
    debug!("accepted {} of {} points, estimate {}", accepted, samples, estimate.value());
    Ok(estimate)
}
