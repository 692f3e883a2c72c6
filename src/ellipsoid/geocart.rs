use super::Ellipsoid;
use crate::math::Convergence;
use crate::Error;
use std::f64::consts::FRAC_PI_2;

/// Geographic <--> Cartesian conversion
impl Ellipsoid {
    /// Geographic to cartesian geocentric conversion.
    ///
    /// Closed form, via the prime vertical radius of curvature.
    /// Angular input in radians, height and output in meters.
    #[must_use]
    pub fn cartesian(&self, geographic: [f64; 3]) -> [f64; 3] {
        let [lam, phi, h] = geographic;

        let n = self.prime_vertical_radius_of_curvature(phi);
        let (sinphi, cosphi) = phi.sin_cos();
        let (sinlam, coslam) = lam.sin_cos();

        [
            (n + h) * cosphi * coslam,
            (n + h) * cosphi * sinlam,
            (n * (1.0 - self.eccentricity_squared()) + h) * sinphi,
        ]
    }

    /// Cartesian geocentric to geographic conversion, the inverse of
    /// [`cartesian`](Self::cartesian).
    ///
    /// The longitude is plain geometry in the equatoreal plane; the
    /// latitude is recovered by fixed point iteration over the prime
    /// vertical radius of curvature, bounded by `convergence`.
    pub fn geographic(
        &self,
        cartesian: [f64; 3],
        convergence: &Convergence,
    ) -> Result<[f64; 3], Error> {
        let [x, y, z] = cartesian;
        let es = self.eccentricity_squared();

        let lam = y.atan2(x);

        // The perpendicular distance from the point coordinate to the Z-axis
        // (HM eq. 5-28)
        let p = x.hypot(y);

        // Close to the Z-axis the iteration breaks down, but then the latitude
        // is also known to be at one of the poles, where the height is |Z| - b
        if p < self.a * 1e-16 {
            let phi = FRAC_PI_2.copysign(z);
            let h = z.abs() - self.semiminor_axis();
            return Ok([lam, phi, h]);
        }

        // Initial guess: the geocentric latitude corrected for flattening
        let mut phi = z.atan2(p * (1.0 - es));
        for _ in 0..convergence.max_iterations {
            let n = self.prime_vertical_radius_of_curvature(phi);
            let next = (z + es * n * phi.sin()).atan2(p);
            if (next - phi).abs() <= convergence.tolerance {
                let (sinphi, cosphi) = next.sin_cos();
                let n = self.a / (1.0 - sinphi * sinphi * es).sqrt();

                // Bowring (1985), as quoted by Burtch (2006), suggests this
                // expression as more accurate than the common h = p/cos 𝜙 - N
                let h = p * cosphi + z * sinphi - self.a * self.a / n;
                return Ok([lam, next, h]);
            }
            phi = next;
        }

        Err(Error::NumericalConvergenceFailure(
            "geodetic latitude recovery",
            convergence.max_iterations,
        ))
    }
}

// ----- T E S T S ---------------------------------------------------------------------
