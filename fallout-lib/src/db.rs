use std::collections::HashMap;

use fallout_data::{SubstanceDatabase, SubstanceRecord};

use crate::error::{FalloutError, Result};
use crate::substances_db::SUBSTANCES;

/// The main interface to the substance table.
///
/// Owns the records and a name index built at construction; the table is
/// read-only for the rest of its life.
pub struct FalloutDb {
    data: SubstanceDatabase,
    name_index: HashMap<String, usize>,
}

impl FalloutDb {
    /// Build a database over the built-in substance table.
    pub fn new() -> Self {
        let substances = SUBSTANCES
            .iter()
            .map(
                |&(name, sieverts_per_gram, half_life_years, category)| SubstanceRecord {
                    name: name.to_string(),
                    sieverts_per_gram,
                    half_life_years,
                    category: category.to_string(),
                },
            )
            .collect();
        Self::with_substances(substances).expect("built-in substance table is valid")
    }

    /// Build a database over a caller-supplied substance table.
    ///
    /// Every `sieverts_per_gram` and `half_life_years` must be strictly
    /// positive and finite, and names must be non-empty and unique.
    pub fn with_substances(substances: Vec<SubstanceRecord>) -> Result<Self> {
        let mut name_index = HashMap::new();
        for (i, record) in substances.iter().enumerate() {
            if record.name.is_empty() {
                return Err(FalloutError::EmptyName);
            }
            if !(record.sieverts_per_gram.is_finite() && record.sieverts_per_gram > 0.0) {
                return Err(FalloutError::InvalidConstant {
                    substance: record.name.clone(),
                    field: "sieverts_per_gram",
                    value: record.sieverts_per_gram,
                });
            }
            if !(record.half_life_years.is_finite() && record.half_life_years > 0.0) {
                return Err(FalloutError::InvalidConstant {
                    substance: record.name.clone(),
                    field: "half_life_years",
                    value: record.half_life_years,
                });
            }
            if name_index.insert(record.name.clone(), i).is_some() {
                return Err(FalloutError::DuplicateSubstance(record.name.clone()));
            }
        }

        // Lowercase aliases for case-insensitive lookup; exact names win.
        for (i, record) in substances.iter().enumerate() {
            name_index.entry(record.name.to_lowercase()).or_insert(i);
        }

        Ok(FalloutDb {
            data: SubstanceDatabase { substances },
            name_index,
        })
    }

    /// Access the raw substance records, in table order.
    pub fn substances(&self) -> &[SubstanceRecord] {
        &self.data.substances
    }

    /// Substance names, in table order.
    pub fn names(&self) -> Vec<&str> {
        self.data
            .substances
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Resolve a substance name (exact, then case-insensitive) to its record.
    pub(crate) fn record(&self, substance: &str) -> Result<&SubstanceRecord> {
        if let Some(&i) = self.name_index.get(substance) {
            return Ok(&self.data.substances[i]);
        }
        if let Some(&i) = self.name_index.get(&substance.to_lowercase()) {
            return Ok(&self.data.substances[i]);
        }
        Err(FalloutError::UnknownSubstance(substance.to_string()))
    }

    /// Radiation dose contribution per gram, in sieverts.
    pub fn sieverts_per_gram(&self, substance: &str) -> Result<f64> {
        Ok(self.record(substance)?.sieverts_per_gram)
    }

    /// Half-life in years.
    pub fn half_life_years(&self, substance: &str) -> Result<f64> {
        Ok(self.record(substance)?.half_life_years)
    }

    /// Informational category label.
    pub fn category(&self, substance: &str) -> Result<&str> {
        Ok(&self.record(substance)?.category)
    }
}

impl Default for FalloutDb {
    fn default() -> Self {
        Self::new()
    }
}
