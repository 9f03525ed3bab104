#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A substance table, either the built-in set or a caller-supplied
/// replacement. This is also the JSON shape accepted by the CLI's
/// `--substances` option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstanceDatabase {
    pub substances: Vec<SubstanceRecord>,
}

/// One radioactive substance.
///
/// `sieverts_per_gram` and `half_life_years` must be strictly positive;
/// `category` is an informational label and takes no part in any
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceRecord {
    pub name: String,
    pub sieverts_per_gram: f64,
    pub half_life_years: f64,
    pub category: String,
}
