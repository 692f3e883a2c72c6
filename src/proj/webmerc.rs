//! Web Mercator
use crate::Error;
use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;

const EPS10: f64 = 1e-10;

/// The spherical "Pseudo-Mercator" used by web mapping tile schemes
/// (EPSG method 1024): spherical Mercator formulas evaluated on the
/// semimajor axis of the base ellipsoid. Both directions are closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Webmerc {
    a: f64,
}

impl Webmerc {
    #[must_use]
    pub fn new(semimajor_axis: f64) -> Webmerc {
        Webmerc { a: semimajor_axis }
    }

    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), Error> {
        let phi = lat.to_radians();
        if (phi.abs() - FRAC_PI_2).abs() < EPS10 {
            return Err(Error::General("Webmerc: latitude at a pole"));
        }

        let easting = self.a * lon.to_radians();
        let northing = self.a * (FRAC_PI_4 + phi / 2.0).tan().ln();
        Ok((easting, northing))
    }

    pub fn unproject(&self, easting: f64, northing: f64) -> Result<(f64, f64), Error> {
        let lon = (easting / self.a).to_degrees();
        let lat = (FRAC_PI_2 - 2.0 * (-northing / self.a).exp().atan()).to_degrees();
        Ok((lon, lat))
    }
}

// ----- T E S T S ---------------------------------------------------------------------
