//! Mercator
use crate::ellipsoid::Ellipsoid;
use crate::math::{msfn, phi_from_ts, ts, Convergence};
use crate::Error;
use std::f64::consts::FRAC_PI_2;

const EPS10: f64 = 1e-10;

/// Mercator on the ellipsoid, one standard parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merc {
    a: f64,
    e: f64,
    k_0: f64,
    lon_0: f64,
    x_0: f64,
    y_0: f64,
}

impl Merc {
    /// Angular parameters in degrees, false origin in meters.
    ///
    /// A nonzero `lat_ts` (latitude of true scale) trumps `k_0`.
    pub fn new(
        ellps: Ellipsoid,
        k_0: f64,
        lat_ts: f64,
        lon_0: f64,
        x_0: f64,
        y_0: f64,
    ) -> Result<Merc, Error> {
        if lat_ts.abs() > 90. {
            return Err(Error::General(
                "Merc: Invalid value for lat_ts: |lat_ts| should be <= 90°",
            ));
        }

        let mut k_0 = k_0;
        if lat_ts != 0.0 {
            k_0 = msfn(lat_ts.to_radians().sin_cos(), ellps.eccentricity_squared());
        }

        Ok(Merc {
            a: ellps.semimajor_axis(),
            e: ellps.eccentricity(),
            k_0,
            lon_0: lon_0.to_radians(),
            x_0,
            y_0,
        })
    }

    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), Error> {
        let phi = lat.to_radians();
        if (phi.abs() - FRAC_PI_2).abs() < EPS10 {
            return Err(Error::General("Merc: latitude at a pole"));
        }

        let easting = self.x_0 + self.a * self.k_0 * (lon.to_radians() - self.lon_0);

        // ts is exp(-𝜓), so the isometric northing is -ln ts
        let northing = self.y_0 - self.a * self.k_0 * ts(phi.sin_cos(), self.e).ln();
        Ok((easting, northing))
    }

    pub fn unproject(
        &self,
        easting: f64,
        northing: f64,
        convergence: &Convergence,
    ) -> Result<(f64, f64), Error> {
        let lam = (easting - self.x_0) / (self.a * self.k_0) + self.lon_0;

        let ts0 = (-(northing - self.y_0) / (self.a * self.k_0)).exp();
        let phi = phi_from_ts(ts0, self.e, convergence)?;
        Ok((lam.to_degrees(), phi.to_degrees()))
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn merc() -> Result<(), Error> {
        let merc = Merc::new(Ellipsoid::default(), 1., 0., 0., 0., 0.)?;

        // Validation value from PROJ: echo 12 55 0 0 | cct -d18 +proj=merc
        // followed by quadrant tests from PROJ builtins.gie
        let geo = [(12., 55.), (2., 1.), (2., -1.), (-2., 1.), (-2., -1.)];
        let projected = [
            (1_335_833.889_519_282_8, 7_326_837.714_873_877),
            (222_638.981_586_547, 110_579.965_218_249),
            (222_638.981_586_547, -110_579.965_218_249),
            (-222_638.981_586_547, 110_579.965_218_249),
            (-222_638.981_586_547, -110_579.965_218_249),
        ];

        let convergence = Convergence::default();
        for i in 0..geo.len() {
            let (x, y) = merc.project(geo[i].0, geo[i].1)?;
            assert_float_eq!(x, projected[i].0, abs <= 1e-5);
            assert_float_eq!(y, projected[i].1, abs <= 1e-5);

            let (lon, lat) = merc.unproject(x, y, &convergence)?;
            assert_float_eq!(lon, geo[i].0, abs <= 1e-9);
            assert_float_eq!(lat, geo[i].1, abs <= 1e-9);
        }
        Ok(())
    }

    #[test]
    fn merc_lat_ts() -> Result<(), Error> {
        // Validation value from PROJ: echo 12 55 0 0 | cct -d18 +proj=merc +lat_ts=56
        let merc = Merc::new(Ellipsoid::default(), 1., 56., 0., 0., 0.)?;
        let (x, y) = merc.project(12., 55.)?;
        assert_float_eq!(x, 748_713.257_925_886_8, abs <= 1e-5);
        assert_float_eq!(y, 4_106_573.862_841_270_4, abs <= 1e-5);

        let (lon, lat) = merc.unproject(x, y, &Convergence::default())?;
        assert_float_eq!(lon, 12., abs <= 1e-9);
        assert_float_eq!(lat, 55., abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn out_of_domain() {
        let merc = Merc::new(Ellipsoid::default(), 1., 0., 0., 0., 0.).unwrap();
        assert!(merc.project(0., 90.).is_err());
        assert!(Merc::new(Ellipsoid::default(), 1., 91., 0., 0., 0.).is_err());
    }
}
