#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    if dist < 1e-6 {
        return 1e10;
    }
    let rho = sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    4.0 * epsilon * (rho12 - rho6)
}

/// Lennard-Jones 12-6 shifted so the potential vanishes at the cutoff.
#[inline]
pub fn lennard_jones_shifted(dist: f64, cutoff: f64, sigma: f64, epsilon: f64) -> f64 {
    lennard_jones_12_6(dist, sigma, epsilon) - lennard_jones_12_6(cutoff, sigma, epsilon)
}
