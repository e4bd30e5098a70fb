//! Run configuration for the estimator.
//!
//! The command line only ever sets the sample count; worker count and seed
//! are for library callers.

use std::ffi::OsString;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::math::monte_carlo::rejection_sampling::Estimate;
use crate::math::monte_carlo::standard_normal::{
    estimate_standard_normal_mass, estimate_standard_normal_mass_parallel,
};

/// Sample count used when none is given on the command line.
pub const DEFAULT_SAMPLES: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of trials to run
    pub samples: u64,
    /// Number of parallel batches; 1 runs sequentially
    pub workers: usize,
    /// Fixed seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            workers: 1,
            seed: None,
        }
    }
}

impl EstimatorConfig {
    /// Builds a configuration from the arguments following the program name.
    ///
    /// No argument keeps the default sample count, one argument is parsed as
    /// the sample count, anything more is an error.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<I::Item> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(Self::default()),
            [samples] => Ok(Self {
                samples: parse_samples(samples.as_ref())?,
                ..Self::default()
            }),
            _ => Err(Error::TooManyArguments(args.len())),
        }
    }

    /// Same as [`from_args`](Self::from_args) for raw process arguments.
    ///
    /// An argument that is not valid UTF-8 is reported as an invalid sample
    /// count, shown with replacement characters.
    pub fn from_os_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() > 1 {
            return Err(Error::TooManyArguments(args.len()));
        }
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| Error::InvalidSampleCount(arg.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<String>>>()?;
        Self::from_args(args)
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed for this run: the configured one, or the current time in
    /// nanoseconds since the Unix epoch.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.resolve_seed())
    }

    /// Runs the estimator, sequentially for a single worker and in parallel
    /// batches otherwise.
    pub fn run(&self) -> Result<Estimate> {
        match self.workers {
            0 => Err(Error::InvalidWorkerCount(0)),
            1 => estimate_standard_normal_mass(self.samples, &mut self.rng()),
            workers => {
                estimate_standard_normal_mass_parallel(self.samples, workers, self.resolve_seed())
            }
        }
    }
}

fn parse_samples(arg: &str) -> Result<u64> {
    arg.parse::<u64>().map_err(|_| Error::InvalidSampleCount(arg.to_string()))
}

fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        // Truncation keeps the fast-moving low bits.
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => {
            warn!("system clock is before the Unix epoch: {}", err);
            err.duration().as_nanos() as u64
        }
    }
}
