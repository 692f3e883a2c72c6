//! Lambert Conformal Conic
use crate::ellipsoid::Ellipsoid;
use crate::math::{msfn, phi_from_ts, ts, Convergence};
use crate::Error;
use std::f64::consts::FRAC_PI_2;

const EPS10: f64 = 1e-10;

/// Lambert Conformal Conic with two standard parallels (EPSG method 9802),
/// following the Snyder/PROJ formulation,
/// cf. <https://proj.org/operations/projections/lcc.html>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lcc {
    a: f64,
    e: f64,
    /// Cone constant
    n: f64,
    c: f64,
    /// Radius of the parallel of origin, a·c·ts(𝜙₀)ⁿ
    rho0: f64,
    lon_0: f64,
    x_0: f64,
    y_0: f64,
}

impl Lcc {
    /// Angular parameters in degrees, false origin in meters.
    /// For the tangent case, give the single standard parallel twice.
    pub fn new(
        ellps: Ellipsoid,
        lat_1: f64,
        lat_2: f64,
        lat_0: f64,
        lon_0: f64,
        x_0: f64,
        y_0: f64,
    ) -> Result<Lcc, Error> {
        let e = ellps.eccentricity();
        let es = ellps.eccentricity_squared();
        let phi1 = lat_1.to_radians();
        let phi2 = lat_2.to_radians();
        let phi0 = lat_0.to_radians();

        if (phi1 + phi2).abs() < EPS10 {
            return Err(Error::General(
                "Lcc: Invalid value for lat_1 and lat_2: |lat_1 + lat_2| should be > 0",
            ));
        }
        if phi1.cos().abs() < EPS10 || phi1.abs() >= FRAC_PI_2 {
            return Err(Error::General(
                "Lcc: Invalid value for lat_1: |lat_1| should be < 90°",
            ));
        }
        if phi2.cos().abs() < EPS10 || phi2.abs() >= FRAC_PI_2 {
            return Err(Error::General(
                "Lcc: Invalid value for lat_2: |lat_2| should be < 90°",
            ));
        }

        let sc = phi1.sin_cos();
        let mut n = sc.0;
        let m1 = msfn(sc, es);
        let ts1 = ts(sc, e);

        // Secant case?
        if (phi1 - phi2).abs() >= EPS10 {
            let sc = phi2.sin_cos();
            n = (m1 / msfn(sc, es)).ln();
            if n == 0. {
                return Err(Error::General("Lcc: Invalid value for eccentricity"));
            }
            let denom = (ts1 / ts(sc, e)).ln();
            if denom == 0. {
                return Err(Error::General("Lcc: Invalid value for eccentricity"));
            }
            n /= denom;
        }

        let a = ellps.semimajor_axis();
        let c = m1 * ts1.powf(-n) / n;
        let mut rho0 = 0.;
        if (phi0.abs() - FRAC_PI_2).abs() > EPS10 {
            rho0 = a * c * ts(phi0.sin_cos(), e).powf(n);
        }

        Ok(Lcc {
            a,
            e,
            n,
            c,
            rho0,
            lon_0: lon_0.to_radians(),
            x_0,
            y_0,
        })
    }

    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), Error> {
        let lam = lon.to_radians() - self.lon_0;
        let phi = lat.to_radians();

        // Close to one of the poles?
        let mut rho = 0.;
        if (phi.abs() - FRAC_PI_2).abs() < EPS10 {
            if phi * self.n <= 0. {
                return Err(Error::General("Lcc: latitude at the wrong pole"));
            }
        } else {
            rho = self.a * self.c * ts(phi.sin_cos(), self.e).powf(self.n);
        }

        let sc = (lam * self.n).sin_cos();
        Ok((self.x_0 + rho * sc.0, self.y_0 + self.rho0 - rho * sc.1))
    }

    pub fn unproject(
        &self,
        easting: f64,
        northing: f64,
        convergence: &Convergence,
    ) -> Result<(f64, f64), Error> {
        let mut x = easting - self.x_0;
        let mut y = self.rho0 - (northing - self.y_0);
        let mut rho = x.hypot(y);

        // On the cone apex
        if rho == 0. {
            return Ok((self.lon_0.to_degrees(), 90_f64.copysign(self.n)));
        }

        // Standard parallels on the southern hemisphere?
        if self.n < 0. {
            rho = -rho;
            x = -x;
            y = -y;
        }

        let ts0 = (rho / (self.a * self.c)).powf(1. / self.n);
        let phi = phi_from_ts(ts0, self.e, convergence)?;
        let lam = x.atan2(y) / self.n + self.lon_0;
        Ok((lam.to_degrees(), phi.to_degrees()))
    }
}

// ----- T E S T S ---------------------------------------------------------------------
