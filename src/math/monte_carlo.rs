pub mod rejection_sampling;
pub mod standard_normal;

pub use rejection_sampling::{
    estimate_area, BoundingBox, Estimate, RejectionSampler, STANDARD_NORMAL_BOX,
};
pub use standard_normal::{estimate_standard_normal_mass, estimate_standard_normal_mass_parallel};
