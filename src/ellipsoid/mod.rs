mod geocart;

use crate::Error;

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_101)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid, from semimajor axis (in meters) and flattening.
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        debug_assert!(semimajor_axis > 0.);
        debug_assert!((0. ..1.).contains(&flattening));
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid, built-in
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        match name {
            "GRS80" => Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_222_101)),
            "WGS84" => Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563)),
            "intl" => Ok(Ellipsoid::new(6_378_388.0, 1. / 297.0)),
            "Helmert" => Ok(Ellipsoid::new(6_378_200.0, 1. / 298.3)),
            "clrk66" => Ok(Ellipsoid::new(6_378_206.4, 1. / 294.978_698_2)),
            "clrk80" => Ok(Ellipsoid::new(6_378_249.145, 1. / 293.465)),
            "bessel" => Ok(Ellipsoid::new(6_377_397.155, 1. / 299.152_812_8)),
            _ => Err(Error::General("unknown ellipsoid name")),
        }
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Axes and flattening ---------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
