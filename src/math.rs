pub mod density;
pub mod monte_carlo;

pub use density::standard_normal_pdf;
pub use monte_carlo::{estimate_standard_normal_mass, estimate_standard_normal_mass_parallel};
