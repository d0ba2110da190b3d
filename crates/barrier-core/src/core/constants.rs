use phf::phf_map;

/// Molar gas constant in kJ/(mol·K).
pub const GAS_CONSTANT: f64 = 8.31446261815324e-3;

/// Avogadro constant in 1/mol.
pub const AVOGADRO: f64 = 6.02214076e23;

/// Standard atomic weights in g/mol, keyed by element symbol.
static ELEMENT_MOLAR_MASSES: phf::Map<&'static str, f64> = phf_map! {
    "H" => 1.008,
    "He" => 4.0026,
    "Li" => 6.94,
    "Be" => 9.0122,
    "B" => 10.81,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.999,
    "F" => 18.998,
    "Ne" => 20.180,
    "Na" => 22.990,
    "Mg" => 24.305,
    "Al" => 26.982,
    "Si" => 28.085,
    "P" => 30.974,
    "S" => 32.06,
    "Cl" => 35.45,
    "Ar" => 39.948,
    "K" => 39.098,
    "Ca" => 40.078,
    "Ti" => 47.867,
    "V" => 50.942,
    "Cr" => 51.996,
    "Mn" => 54.938,
    "Fe" => 55.845,
    "Co" => 58.933,
    "Ni" => 58.693,
    "Cu" => 63.546,
    "Zn" => 65.38,
    "Ga" => 69.723,
    "Ge" => 72.630,
    "As" => 74.922,
    "Se" => 78.971,
    "Br" => 79.904,
    "Kr" => 83.798,
    "Zr" => 91.224,
    "Mo" => 95.95,
    "Ag" => 107.87,
    "Cd" => 112.41,
    "In" => 114.82,
    "Sn" => 118.71,
    "Sb" => 121.76,
    "I" => 126.90,
    "Xe" => 131.29,
    "Ba" => 137.33,
    "W" => 183.84,
    "Pt" => 195.08,
    "Au" => 196.97,
    "Hg" => 200.59,
    "Pb" => 207.2,
};

/// Looks up the standard atomic weight for an element symbol.
pub fn element_molar_mass(symbol: &str) -> Option<f64> {
    ELEMENT_MOLAR_MASSES.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_elements_resolve() {
        assert!((element_molar_mass("Si").unwrap() - 28.085).abs() < 1e-9);
        assert!((element_molar_mass("O").unwrap() - 15.999).abs() < 1e-9);
    }

    #[test]
    fn unknown_symbol_returns_none() {
        assert!(element_molar_mass("Xx").is_none());
        assert!(element_molar_mass("si").is_none());
    }
}
