//! Random, internally consistent student records

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::profile::PerformanceProfile;
use crate::domain::student::{
    AgeBand, CREDIT_LADDER, Disability, Gender, HighestEducation, ImdBand, LiteralOption, Region,
    StudentRecord,
};

/// Generates sample records whose academic fields are correlated with the
/// sampled education level.
#[derive(Debug, Clone)]
pub struct SampleGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SampleGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one complete record
    pub fn generate(&mut self) -> StudentRecord {
        let gender = self.pick::<Gender>();
        let age_band = self.pick::<AgeBand>();
        let highest_education = self.pick::<HighestEducation>();

        let profile = PerformanceProfile::for_education(highest_education);
        let avg_score = self.rng.gen_range(profile.avg_score.clone());
        let num_assessments = self.rng.gen_range(profile.num_assessments.clone());
        let num_of_prev_attempts = self.rng.gen_range(profile.prev_attempts.clone());

        let region = self.pick::<Region>();
        let imd_band = self.pick::<ImdBand>();
        let disability = self.pick::<Disability>();
        let studied_credits = CREDIT_LADDER[self.rng.gen_range(0..CREDIT_LADDER.len())];

        StudentRecord {
            gender,
            region,
            highest_education,
            imd_band,
            age_band,
            num_of_prev_attempts,
            studied_credits,
            disability,
            avg_score: round_to_tenth(avg_score),
            num_assessments,
        }
    }

    /// Generate `count` independent records
    pub fn generate_many(&mut self, count: usize) -> Vec<StudentRecord> {
        (0..count).map(|_| self.generate()).collect()
    }

    fn pick<T: LiteralOption>(&mut self) -> T {
        T::ALL[self.rng.gen_range(0..T::ALL.len())]
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
