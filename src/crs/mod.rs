pub(crate) mod registry;

use crate::ellipsoid::Ellipsoid;
use crate::proj::Projection;
use std::fmt;

// ----- C R S   I D E N T I F I E R S -------------------------------------------------

/// A CRS identifier: authority name plus numeric code, e.g. `EPSG:4326`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrsId {
    pub authority: String,
    pub code: u32,
}

impl CrsId {
    #[must_use]
    pub fn new(authority: &str, code: u32) -> CrsId {
        CrsId {
            authority: authority.to_string(),
            code,
        }
    }

    /// An identifier in the EPSG namespace
    #[must_use]
    pub fn epsg(code: u32) -> CrsId {
        CrsId::new("EPSG", code)
    }
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

// ----- D A T U M   S H I F T   P A R A M E T E R S -----------------------------------

/// The 7 parameters of a position vector datum shift, as published:
/// translations in meters, rotations in arcseconds, scale in parts
/// per million.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DatumShift {
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub ppm: f64,
}

impl DatumShift {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(tx: f64, ty: f64, tz: f64, rx: f64, ry: f64, rz: f64, ppm: f64) -> DatumShift {
        DatumShift {
            tx,
            ty,
            tz,
            rx,
            ry,
            rz,
            ppm,
        }
    }

    /// The all-zero shift, carried by systems directly on the reference datum
    #[must_use]
    pub fn null() -> DatumShift {
        DatumShift::default()
    }
}

// ----- C O O R D I N A T E   R E F E R E N C E   S Y S T E M S -----------------------

/// A geographic CRS: angular coordinates on a named datum.
///
/// `to_reference` is the datum's position vector link to the common
/// reference datum (WGS84). `None` means the link is unknown, which makes
/// any operation requiring a datum crossing unconstructible.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicCrs {
    pub id: CrsId,
    pub datum: String,
    pub ellps: Ellipsoid,
    pub to_reference: Option<DatumShift>,
}

impl GeographicCrs {
    #[must_use]
    pub fn new(
        id: CrsId,
        datum: &str,
        ellps: Ellipsoid,
        to_reference: Option<DatumShift>,
    ) -> GeographicCrs {
        GeographicCrs {
            id,
            datum: datum.to_string(),
            ellps,
            to_reference,
        }
    }

    /// Do coordinates in `self` and `other` refer to the same datum,
    /// making any shift between them superfluous?
    #[must_use]
    pub fn datum_matches(&self, other: &GeographicCrs) -> bool {
        self.datum == other.datum
    }
}

/// A projected CRS: planar coordinates obtained by applying a map
/// projection to a base geographic CRS.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCrs {
    pub id: CrsId,
    pub base: GeographicCrs,
    pub projection: Projection,
}

/// A coordinate reference system, polymorphic over the three kinds the
/// engine distinguishes. Immutable once constructed; owned by the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    /// Longitude, latitude (degrees)
    Geographic2D(GeographicCrs),
    /// Longitude, latitude (degrees), ellipsoidal height (meters)
    Geographic3D(GeographicCrs),
    /// Easting, northing (meters)
    Projected(ProjectedCrs),
}

impl Crs {
    #[must_use]
    pub fn id(&self) -> &CrsId {
        match self {
            Crs::Geographic2D(g) | Crs::Geographic3D(g) => &g.id,
            Crs::Projected(p) => &p.id,
        }
    }

    /// The geographic CRS itself, or the base of a projected CRS
    #[must_use]
    pub fn base(&self) -> &GeographicCrs {
        match self {
            Crs::Geographic2D(g) | Crs::Geographic3D(g) => g,
            Crs::Projected(p) => &p.base,
        }
    }

    /// Coordinate dimension: 3 for Geographic3D, otherwise 2
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Crs::Geographic3D(_) => 3,
            _ => 2,
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------
