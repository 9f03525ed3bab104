/// Built-in radioactive substance table.
///
/// Each entry: (name, sieverts_per_gram, half_life_years, category)
pub(crate) const SUBSTANCES: &[(&str, f64, f64, &str)] = &[
    // Nuclear fuel cycle isotopes
    ("Uranium-235", 2.3, 7.04e8, "Fissile Material"),
    ("Plutonium-239", 575.0, 24100.0, "Weapons Material"),
    ("Cesium-137", 4501.0, 30.05, "Fission Product"),
    // Medical radionuclides
    ("Technetium-99m", 6.2e5, 0.0024, "Diagnostics"),
    ("Iodine-131", 8e5, 0.022, "Therapeutics"),
    // Industrial applications
    ("Cobalt-60", 17000.0, 5.27, "Sterilization"),
    ("Americium-241", 3200.0, 432.2, "Smoke Detectors"),
    // Nuclear weapons components
    ("Polonium-210", 4.5e6, 0.38, "Neutron Initiator"),
    ("Californium-252", 2.4e7, 2.645, "Neutron Source"),
    // Long-lived fission products
    ("Strontium-90", 5053.7, 28.79, "Bone Seeker"),
    ("Zirconium-93", 9.8, 1.53e6, "Reactor Waste"),
    // Actinide series
    ("Neptunium-237", 34.0, 2.14e6, "Transuranic Waste"),
    ("Curium-244", 6800.0, 18.1, "Thermoelectric"),
    // Natural radioisotopes
    ("Potassium-40", 0.027, 1.25e9, "Geological Dating"),
    ("Radium-226", 1.1e4, 1600.0, "Legacy Devices"),
    // Additional isotopes
    ("Tritium (H-3)", 0.0018, 12.32, "Fusion Fuel"),
    ("Thorium-232", 11.0, 1.4e10, "Breeder Fuel"),
    ("Plutonium-238", 620.0, 87.7, "RTG Power"),
    ("Nickel-63", 0.15, 100.1, "Betavoltaics"),
    ("Promethium-147", 850.0, 2.62, "Luminescent"),
    ("Radon-222", 1.8e7, 0.0104, "Environmental"),
    ("Carbon-14", 0.005, 5730.0, "Dating"),
    ("Einsteinium-253", 2.1e5, 0.33, "Research"),
    ("Fermium-257", 3.4e5, 100.5, "Synthetic"),
    ("Molybdenum-99", 4.8e4, 0.027, "Medical Parent"),
    ("Xenon-135", 1.2e5, 0.011, "Reactor Poison"),
    ("Iridium-192", 1.4e4, 0.35, "Industrial Radiography"),
    ("Selenium-75", 2.1e4, 0.31, "Nondestructive Testing"),
    ("Yttrium-90", 3.8e5, 0.019, "Therapeutic"),
    ("Rhenium-188", 2.9e5, 0.23, "Therapeutic"),
    ("Lutetium-177", 4.1e5, 0.16, "Therapeutic"),
    ("Astatine-211", 7.2e6, 0.046, "Alpha Therapy"),
    ("Lead-210", 1.1e5, 22.3, "Environmental"),
    ("Bismuth-209", 0.0003, 1.9e19, "Stable Endpoint"),
    ("Actinium-227", 4.8e4, 21.8, "Alpha Source"),
    ("Protactinium-231", 12.0, 3.28e4, "Decay Chain"),
    ("Neptunium-239", 850.0, 0.22, "Transuranic"),
    ("Curium-242", 1.2e4, 0.45, "Research"),
    ("Berkelium-249", 2.3e4, 0.90, "Synthetic"),
    ("Californium-249", 3.1e4, 351.0, "Neutron Source"),
    ("Einsteinium-254", 4.5e5, 0.75, "High Activity"),
];
