use super::{Crs, CrsId, DatumShift, GeographicCrs, ProjectedCrs};
use crate::ellipsoid::Ellipsoid;
use crate::proj::{Lcc, Merc, Projection, Webmerc};
use crate::Error;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// ----- T H E   R E G I S T R Y   T R A I T -------------------------------------------

/// The `Registry` trait defines the mode of communication between the
/// transformation engine and the source of CRS definitions.
///
/// The engine treats a registry as a read-only dependency: definitions are
/// resolved when an operation is composed, and the built operation keeps no
/// reference back into the registry.
pub trait Registry {
    /// Resolve `id` to its definition, or `Err(NotFound)`
    fn lookup(&self, id: &CrsId) -> Result<&Crs, Error>;

    /// A published datum shift directly relating `_source` to `_target`,
    /// bypassing the reference datum. The default is to know none.
    fn direct_shift(&self, _source: &CrsId, _target: &CrsId) -> Option<DatumShift> {
        None
    }
}

// ----- T H E   M I N I M A L   R E G I S T R Y ---------------------------------------

/// A minimalistic in-memory registry, holding the built-in definitions
/// plus any number of run-time registered ones. Usually sufficient for
/// cartographic uses, and for test authoring.
#[derive(Debug, Default)]
pub struct Minimal {
    /// CRS definitions, keyed by identifier
    definitions: BTreeMap<CrsId, Crs>,
    /// Direct datum shifts, keyed by (source, target) identifier pairs
    direct: BTreeMap<(CrsId, CrsId), DatumShift>,
}

impl Minimal {
    /// A registry seeded with the built-in definitions. `default()` gives
    /// an entirely empty one.
    #[must_use]
    pub fn new() -> Minimal {
        let mut registry = Minimal::default();
        for crs in BUILTIN_DEFINITIONS.iter() {
            registry.register(crs.clone());
        }
        registry
    }

    /// Register a definition, replacing any previous holder of its id
    pub fn register(&mut self, crs: Crs) {
        debug!("register: {}", crs.id());
        self.definitions.insert(crs.id().clone(), crs);
    }

    /// Register a direct datum shift from `source` to `target`, taking
    /// precedence over the route through the reference datum
    pub fn register_direct_shift(&mut self, source: CrsId, target: CrsId, shift: DatumShift) {
        debug!("register: direct shift {source} -> {target}");
        self.direct.insert((source, target), shift);
    }
}

impl Registry for Minimal {
    fn lookup(&self, id: &CrsId) -> Result<&Crs, Error> {
        self.definitions
            .get(id)
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    fn direct_shift(&self, source: &CrsId, target: &CrsId) -> Option<DatumShift> {
        self.direct
            .get(&(source.clone(), target.clone()))
            .copied()
    }
}

// ----- B U I L T I N   D E F I N I T I O N S -----------------------------------------

// The handful of systems exercised by the test material. Parameter values
// as published in the EPSG dataset (position vector shifts to WGS84).

fn wgs84_geographic() -> GeographicCrs {
    GeographicCrs::new(
        CrsId::epsg(4326),
        "WGS84",
        Ellipsoid::named("WGS84").unwrap(),
        Some(DatumShift::null()),
    )
}

fn bd72_geographic() -> GeographicCrs {
    GeographicCrs::new(
        CrsId::epsg(4313),
        "BD72",
        Ellipsoid::named("intl").unwrap(),
        Some(DatumShift::new(
            -106.869, 52.2978, -103.724, 0.3366, -0.457, 1.8422, -1.2747,
        )),
    )
}

static BUILTIN_DEFINITIONS: Lazy<Vec<Crs>> = Lazy::new(|| {
    let intl = Ellipsoid::named("intl").unwrap();
    vec![
        // WGS84, 2D and 3D
        Crs::Geographic2D(wgs84_geographic()),
        Crs::Geographic3D(GeographicCrs {
            id: CrsId::epsg(4979),
            ..wgs84_geographic()
        }),
        // ETRS89
        Crs::Geographic2D(GeographicCrs::new(
            CrsId::epsg(4258),
            "ETRS89",
            Ellipsoid::named("GRS80").unwrap(),
            Some(DatumShift::null()),
        )),
        // ED50
        Crs::Geographic2D(GeographicCrs::new(
            CrsId::epsg(4230),
            "ED50",
            intl,
            Some(DatumShift::new(-87., -98., -121., 0., 0., 0., 0.)),
        )),
        // ED87
        Crs::Geographic2D(GeographicCrs::new(
            CrsId::epsg(4231),
            "ED87",
            intl,
            Some(DatumShift::new(
                -83.11, -97.38, -117.22, 0.005_692_91, -0.044_697_6, 0.044_285_1, 0.1218,
            )),
        )),
        // Belge 1950: no published link to the reference datum
        Crs::Geographic2D(GeographicCrs::new(
            CrsId::epsg(4809),
            "Belge1950",
            intl,
            None,
        )),
        // Belge 1972 / Belgian Lambert 72
        Crs::Geographic2D(bd72_geographic()),
        Crs::Projected(ProjectedCrs {
            id: CrsId::epsg(31370),
            base: bd72_geographic(),
            projection: Projection::Lcc(
                Lcc::new(
                    intl,
                    51.166_667_233_333_33,
                    49.833_333_9,
                    90.,
                    4.367_486_666_666_666,
                    150_000.013,
                    5_400_088.438,
                )
                .unwrap(),
            ),
        }),
        // World Mercator
        Crs::Projected(ProjectedCrs {
            id: CrsId::epsg(3395),
            base: wgs84_geographic(),
            projection: Projection::Merc(
                Merc::new(Ellipsoid::named("WGS84").unwrap(), 1., 0., 0., 0., 0.).unwrap(),
            ),
        }),
        // Pseudo-Mercator ("Web Mercator")
        Crs::Projected(ProjectedCrs {
            id: CrsId::epsg(3857),
            base: wgs84_geographic(),
            projection: Projection::Webmerc(Webmerc::new(
                Ellipsoid::named("WGS84").unwrap().semimajor_axis(),
            )),
        }),
    ]
});

// ----- T E S T S ---------------------------------------------------------------------
