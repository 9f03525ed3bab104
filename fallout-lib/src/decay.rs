use crate::db::FalloutDb;
use crate::error::Result;

/// Fraction of a quantity left after `half_lives` halvings.
fn decay_factor(half_lives: u32) -> f64 {
    0.5_f64.powi(half_lives as i32)
}

impl FalloutDb {
    /// Mass remaining after `half_lives` half-lives: `grams * 0.5^half_lives`.
    ///
    /// Performs no validation; a non-positive mass flows through unchanged.
    /// Monotonically non-increasing in `half_lives`, and equal to `grams`
    /// when `half_lives` is zero.
    pub fn remaining_grams(&self, grams: f64, half_lives: u32) -> f64 {
        grams * decay_factor(half_lives)
    }

    /// Decay-time estimate: the substance's half-life rescaled by the decay
    /// factor, `half_life_years * 0.5^half_lives`.
    ///
    /// This is not an elapsed-time-to-N-half-lives; it applies the same
    /// rescaling to the half-life constant as to mass.
    pub fn decay_time_years(&self, substance: &str, half_lives: u32) -> Result<f64> {
        Ok(self.half_life_years(substance)? * decay_factor(half_lives))
    }

    /// Radiation dose for `grams` of a substance:
    /// `sieverts_per_gram * grams`. Linear in mass, with no upper bound.
    pub fn dose_sieverts(&self, substance: &str, grams: f64) -> Result<f64> {
        Ok(self.sieverts_per_gram(substance)? * grams)
    }
}
