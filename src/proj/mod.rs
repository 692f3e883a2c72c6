mod lcc;
mod merc;
mod webmerc;

pub use lcc::Lcc;
pub use merc::Merc;
pub use webmerc::Webmerc;

use crate::math::Convergence;
use crate::Error;

/// A map projection: a bidirectional mapping between geographic
/// coordinates (degrees) and planar easting/northing (meters).
///
/// All parameters are resolved and precomputed at construction, so a
/// `Projection` is a plain value, cheap to copy into an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Lambert Conformal Conic, two standard parallels
    Lcc(Lcc),
    /// Mercator on the ellipsoid
    Merc(Merc),
    /// Spherical "Web Mercator"
    Webmerc(Webmerc),
}

impl Projection {
    /// Geographic to projected
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), Error> {
        match self {
            Projection::Lcc(p) => p.project(lon, lat),
            Projection::Merc(p) => p.project(lon, lat),
            Projection::Webmerc(p) => p.project(lon, lat),
        }
    }

    /// Projected to geographic
    pub fn unproject(
        &self,
        easting: f64,
        northing: f64,
        convergence: &Convergence,
    ) -> Result<(f64, f64), Error> {
        match self {
            Projection::Lcc(p) => p.unproject(easting, northing, convergence),
            Projection::Merc(p) => p.unproject(easting, northing, convergence),
            Projection::Webmerc(p) => p.unproject(easting, northing),
        }
    }
}
