use nalgebra::{Matrix3, Vector3};

/// A triclinic unit cell described by its lattice parameters.
///
/// Lengths are in Å, angles in degrees. The fractional-to-Cartesian
/// transformation follows the standard crystallographic convention with `a`
/// along the x-axis and `b` in the xy-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    fn angle_cosines(&self) -> (f64, f64, f64) {
        (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        )
    }

    /// Unit-cell volume in Å³.
    pub fn volume(&self) -> f64 {
        let (ca, cb, cg) = self.angle_cosines();
        let factor = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        self.a * self.b * self.c * factor.max(0.0).sqrt()
    }

    /// The matrix mapping fractional coordinates to Cartesian Å.
    pub fn frac_to_cart(&self) -> Matrix3<f64> {
        let (ca, cb, cg) = self.angle_cosines();
        let sg = self.gamma.to_radians().sin();
        let factor = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        let v_reduced = factor.max(0.0).sqrt();
        Matrix3::new(
            self.a,
            self.b * cg,
            self.c * cb,
            0.0,
            self.b * sg,
            self.c * (ca - cb * cg) / sg,
            0.0,
            0.0,
            self.c * v_reduced / sg,
        )
    }

    /// Converts a fractional displacement to a Cartesian vector in Å.
    pub fn cartesian(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        self.frac_to_cart() * frac
    }

    /// Perpendicular spacing between consecutive lattice planes along each
    /// axis, in Å: volume over the area of the opposing face. Equals the
    /// edge lengths only for orthogonal cells; in a skewed cell the planes
    /// sit closer together than the edges suggest.
    pub fn perpendicular_widths(&self) -> [f64; 3] {
        let volume = self.volume();
        let sa = self.alpha.to_radians().sin();
        let sb = self.beta.to_radians().sin();
        let sg = self.gamma.to_radians().sin();
        [
            volume / (self.b * self.c * sa),
            volume / (self.a * self.c * sb),
            volume / (self.a * self.b * sg),
        ]
    }
}
