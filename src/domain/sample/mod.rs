//! Correlated random sample generation

mod generator;
mod profile;

pub use generator::SampleGenerator;
pub use profile::PerformanceProfile;
