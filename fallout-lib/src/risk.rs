use std::fmt;

use crate::db::FalloutDb;
use crate::error::Result;

/// Doses below this are classified `Safe`, in sieverts.
pub const UNSAFE_DOSE_SV: f64 = 1.0;

/// Doses at or above this are classified `Deadly`, in sieverts.
pub const DEADLY_DOSE_SV: f64 = 5.0;

/// Coarse risk classification of a radiation dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Unsafe,
    Deadly,
}

impl RiskLevel {
    /// Band a dose in sieverts. Lower bounds are inclusive: exactly 1.0 Sv
    /// is `Unsafe`, exactly 5.0 Sv is `Deadly`.
    pub fn from_dose(dose_sv: f64) -> Self {
        if dose_sv < UNSAFE_DOSE_SV {
            Self::Safe
        } else if dose_sv < DEADLY_DOSE_SV {
            Self::Unsafe
        } else {
            Self::Deadly
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Unsafe => write!(f, "Unsafe"),
            Self::Deadly => write!(f, "Deadly"),
        }
    }
}

impl FalloutDb {
    /// Classify the risk of `grams` of a substance.
    ///
    /// Returns the risk level together with the computed dose in sieverts.
    pub fn classify_risk(&self, substance: &str, grams: f64) -> Result<(RiskLevel, f64)> {
        let dose = self.dose_sieverts(substance, grams)?;
        Ok((RiskLevel::from_dose(dose), dose))
    }
}
