use approx::assert_relative_eq;
use fallout::fallout_data::SubstanceRecord;
use fallout::{DEADLY_DOSE_SV, FalloutDb, FalloutError, RiskLevel, UNSAFE_DOSE_SV};

#[test]
fn test_remaining_grams_formula() {
    let db = FalloutDb::new();
    assert_relative_eq!(db.remaining_grams(10.0, 0), 10.0);
    assert_relative_eq!(db.remaining_grams(10.0, 1), 5.0);
    assert_relative_eq!(db.remaining_grams(10.0, 3), 1.25);
    assert_relative_eq!(db.remaining_grams(7.5, 2), 7.5 * 0.25);
}

#[test]
fn test_remaining_grams_negative_mass_passes_through() {
    // The core performs no validation; callers gate their input.
    let db = FalloutDb::new();
    assert_relative_eq!(db.remaining_grams(-4.0, 0), -4.0);
    assert_relative_eq!(db.remaining_grams(-4.0, 2), -1.0);
}

#[test]
fn test_remaining_grams_monotonic_nonincreasing() {
    let db = FalloutDb::new();
    let mut prev = db.remaining_grams(123.4, 0);
    for n in 1..40 {
        let next = db.remaining_grams(123.4, n);
        assert!(next <= prev, "n={n}: {next} > {prev}");
        prev = next;
    }
}

#[test]
fn test_decay_time_formula() {
    let db = FalloutDb::new();
    assert_relative_eq!(db.decay_time_years("Cesium-137", 0).unwrap(), 30.05);
    assert_relative_eq!(db.decay_time_years("Cesium-137", 1).unwrap(), 15.025);
    assert_relative_eq!(db.decay_time_years("Cobalt-60", 2).unwrap(), 5.27 * 0.25);
}

#[test]
fn test_dose_zero_for_zero_mass() {
    let db = FalloutDb::new();
    for record in db.substances() {
        assert_eq!(db.dose_sieverts(&record.name, 0.0).unwrap(), 0.0);
    }
}

#[test]
fn test_dose_linear_in_mass() {
    let db = FalloutDb::new();
    let one = db.dose_sieverts("Strontium-90", 1.0).unwrap();
    assert_relative_eq!(one, 5053.7);
    assert_relative_eq!(db.dose_sieverts("Strontium-90", 3.0).unwrap(), 3.0 * one);
}

#[test]
fn test_risk_boundaries() {
    // A unit-dose substance makes dose == grams.
    let db = FalloutDb::with_substances(vec![SubstanceRecord {
        name: "Unit".to_string(),
        sieverts_per_gram: 1.0,
        half_life_years: 1.0,
        category: "Test".to_string(),
    }])
    .unwrap();

    let (level, dose) = db.classify_risk("Unit", 0.999).unwrap();
    assert_eq!(level, RiskLevel::Safe);
    assert_relative_eq!(dose, 0.999);
    assert_eq!(db.classify_risk("Unit", 1.0).unwrap().0, RiskLevel::Unsafe);
    assert_eq!(db.classify_risk("Unit", 4.999).unwrap().0, RiskLevel::Unsafe);
    assert_eq!(db.classify_risk("Unit", 5.0).unwrap().0, RiskLevel::Deadly);
}

#[test]
fn test_risk_bands_from_dose() {
    assert_eq!(RiskLevel::from_dose(0.0), RiskLevel::Safe);
    assert_eq!(RiskLevel::from_dose(UNSAFE_DOSE_SV), RiskLevel::Unsafe);
    assert_eq!(RiskLevel::from_dose(DEADLY_DOSE_SV), RiskLevel::Deadly);
    assert_eq!(RiskLevel::from_dose(1e9), RiskLevel::Deadly);
}

#[test]
fn test_unknown_substance_errors() {
    let db = FalloutDb::new();
    assert!(matches!(
        db.decay_time_years("Xx", 1),
        Err(FalloutError::UnknownSubstance(_))
    ));
    assert!(matches!(
        db.dose_sieverts("Xx", 1.0),
        Err(FalloutError::UnknownSubstance(_))
    ));
    assert!(matches!(
        db.classify_risk("Xx", 1.0),
        Err(FalloutError::UnknownSubstance(_))
    ));
    // Failed lookups leave the table untouched.
    assert_eq!(db.substances().len(), 41);
}

#[test]
fn test_cesium_scenario() {
    // 10 g of Cesium-137 over one half-life.
    let db = FalloutDb::new();
    let remaining = db.remaining_grams(10.0, 1);
    assert_relative_eq!(remaining, 5.0);

    let (risk, dose) = db.classify_risk("Cesium-137", remaining).unwrap();
    assert_relative_eq!(dose, 22505.0);
    assert_eq!(risk, RiskLevel::Deadly);

    assert_relative_eq!(db.decay_time_years("Cesium-137", 1).unwrap(), 15.025);
}

#[test]
fn test_tritium_scenario() {
    // 100 g of tritium is still a sub-sievert dose.
    let db = FalloutDb::new();
    let (risk, dose) = db.classify_risk("Tritium (H-3)", 100.0).unwrap();
    assert_relative_eq!(dose, 0.18, epsilon = 1e-12);
    assert_eq!(risk, RiskLevel::Safe);
}
