//! End-to-end checks of composed coordinate operations, against published
//! sample points for the European datums and the Belgian Lambert 72 grid.

use float_eq::assert_float_eq;
use geotrans::{compose, Convergence, CoordinateOperation, Crs, CrsId, Error, Minimal, Registry};

fn operation(source: u32, target: u32) -> Result<CoordinateOperation, Error> {
    let registry = Minimal::new();
    compose(&registry, &CrsId::epsg(source), &CrsId::epsg(target))
}

// ----- D A T U M   S H I F T S -------------------------------------------------------

#[test]
fn ed87_to_wgs84() -> Result<(), Error> {
    let op = operation(4231, 4326)?;
    let mut out = [0.; 2];
    op.forward(&[3., 50.], &mut out)?;
    assert_float_eq!(out[0], 2.998_715_525_302_54, abs <= 1e-6);
    assert_float_eq!(out[1], 49.999_132_307_618_4, abs <= 1e-6);
    Ok(())
}

#[test]
fn wgs84_to_ed87() -> Result<(), Error> {
    let op = operation(4326, 4231)?;
    let mut out = [0.; 2];
    op.forward(&[3., 50.], &mut out)?;
    assert_float_eq!(out[0], 3.001_284_480_682_81, abs <= 1e-6);
    assert_float_eq!(out[1], 50.000_867_660_866_2, abs <= 1e-6);
    Ok(())
}

#[test]
fn etrs89_to_ed87() -> Result<(), Error> {
    let op = operation(4258, 4231)?;
    let mut out = [0.; 2];
    op.forward(&[3., 50.], &mut out)?;
    assert_float_eq!(out[0], 3.001_284_480_682_79, abs <= 1e-6);
    assert_float_eq!(out[1], 50.000_867_659_937_6, abs <= 1e-6);

    // The reverse recovers the input
    let mut back = [0.; 2];
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 3.0, abs <= 1e-6);
    assert_float_eq!(back[1], 50.0, abs <= 1e-6);
    Ok(())
}

#[test]
fn ed87_to_etrs89() -> Result<(), Error> {
    let op = operation(4231, 4258)?;
    let mut out = [0.; 2];
    op.forward(&[3., 50.], &mut out)?;
    assert_float_eq!(out[0], 2.998_715_525_302_54, abs <= 1e-6);
    assert_float_eq!(out[1], 49.999_132_308_547_1, abs <= 1e-6);

    let mut back = [0.; 2];
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 3.0, abs <= 1e-6);
    assert_float_eq!(back[1], 50.0, abs <= 1e-6);
    Ok(())
}

#[test]
fn wgs84_to_etrs89() -> Result<(), Error> {
    // The datums differ only through their ellipsoids; the null shifts
    // make the crossing numerically (near) transparent
    let op = operation(4326, 4258)?;
    let mut out = [0.; 2];
    op.forward(&[3., 50.], &mut out)?;
    assert_float_eq!(out[0], 3.0, abs <= 1e-6);
    assert_float_eq!(out[1], 50.0, abs <= 1e-6);

    let mut back = [0.; 2];
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 3.0, abs <= 1e-6);
    assert_float_eq!(back[1], 50.0, abs <= 1e-6);
    Ok(())
}

// ----- P R O J E C T E D   S Y S T E M S ---------------------------------------------

#[test]
fn lambert72_to_geographic() -> Result<(), Error> {
    let op = operation(31370, 4313)?;
    let mut out = [0.; 2];
    op.forward(&[250_000., 125_000.], &mut out)?;
    assert_float_eq!(out[0], 5.774_910, abs <= 1e-4);
    assert_float_eq!(out[1], 50.4278, abs <= 1e-4);
    Ok(())
}

#[test]
fn lambert72_to_wgs84() -> Result<(), Error> {
    let op = operation(31370, 4326)?;
    let mut out = [0.; 2];
    op.forward(&[250_000., 125_000.], &mut out)?;
    assert_float_eq!(out[0], 5.776_209_184_292_82, abs <= 1e-4);
    assert_float_eq!(out[1], 50.427_334_166_919_2, abs <= 1e-4);
    Ok(())
}

#[test]
fn lambert72_to_web_mercator() -> Result<(), Error> {
    let op = operation(31370, 3857)?;
    let mut out = [0.; 2];
    op.forward(&[250_000., 125_000.], &mut out)?;
    // accurate to within 50 cm
    assert_float_eq!(out[0], 643_004.665_110_905, abs <= 0.5);
    assert_float_eq!(out[1], 6_520_614.153_593_73, abs <= 0.5);

    // The projected roundtrip closes to within a few millimeters (the
    // datum shift reverse is a first order inverse, and the 2D contract
    // discards the intermediate height)
    let mut back = [0.; 2];
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 250_000., abs <= 5e-3);
    assert_float_eq!(back[1], 125_000., abs <= 5e-3);
    Ok(())
}

#[test]
fn wgs84_to_world_mercator() -> Result<(), Error> {
    // Same datum on both sides: the operation is the bare projection
    let op = operation(4326, 3395)?;
    let mut out = [0.; 2];
    op.forward(&[12., 55.], &mut out)?;
    assert_float_eq!(out[0], 1_335_833.889_519_282_8, abs <= 1e-5);
    assert_float_eq!(out[1], 7_326_837.715_045_5, abs <= 1e-5);

    let mut back = [0.; 2];
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 12., abs <= 1e-9);
    assert_float_eq!(back[1], 55., abs <= 1e-9);
    Ok(())
}

// ----- C O N T R A C T   P R O P E R T I E S -----------------------------------------

#[test]
fn identity_is_exact() -> Result<(), Error> {
    let op = operation(4326, 4326)?;
    let input = [5.776_209_184_292_82, 50.427_334_166_919_2];
    let mut out = [0.; 2];
    op.forward(&input, &mut out)?;
    assert_eq!(input, out);
    Ok(())
}

#[test]
fn composition_is_deterministic() -> Result<(), Error> {
    let a = operation(31370, 3857)?;
    let b = operation(31370, 3857)?;

    let mut out_a = [0.; 2];
    let mut out_b = [0.; 2];
    a.forward(&[250_000., 125_000.], &mut out_a)?;
    b.forward(&[250_000., 125_000.], &mut out_b)?;
    assert_eq!(out_a, out_b);
    Ok(())
}

#[test]
fn roundtrips_stay_within_tolerance() -> Result<(), Error> {
    // A sweep over geographic pairs: reverse(forward(x)) within 1e-6 degrees
    let pairs = [(4231, 4326), (4230, 4258), (4313, 4326), (4258, 4231)];
    let coords = [(3., 50.), (-5.5, 41.), (12.25, 61.75), (4.36, 50.85)];

    for (source, target) in pairs {
        let op = operation(source, target)?;
        for (lon, lat) in coords {
            let mut out = [0.; 2];
            let mut back = [0.; 2];
            op.forward(&[lon, lat], &mut out)?;
            op.reverse(&out, &mut back)?;
            assert_float_eq!(back[0], lon, abs <= 1e-6);
            assert_float_eq!(back[1], lat, abs <= 1e-6);
        }
    }
    Ok(())
}

#[test]
fn missing_datum_link_fails_composition() {
    // Belge 1950 carries no shift to the reference datum, so any crossing
    // must refuse composition rather than produce wrong numbers
    assert!(matches!(
        operation(4809, 4326),
        Err(Error::InvalidOperationConfiguration(_))
    ));
}

#[test]
fn unknown_crs() {
    assert!(matches!(operation(4326, 99_999), Err(Error::NotFound(_))));
}

#[test]
fn three_dimensional_buffers() -> Result<(), Error> {
    // WGS84 3D to ED87: the ellipsoidal height survives the datum crossing
    let op = operation(4979, 4231)?;
    let mut out = [0.; 3];
    op.forward(&[3., 50., 100.], &mut out)?;
    assert_float_eq!(out[0], 3.001_284_480_682_81, abs <= 1e-6);
    assert_float_eq!(out[1], 50.000_867_660_866_2, abs <= 1e-6);
    // ED87 is 2D: the height slot is zero-filled by the documented rule
    assert_eq!(out[2], 0.);

    // ... while a 3D target reports the shifted height
    let op = operation(4979, 4979)?;
    op.forward(&[3., 50., 100.], &mut out)?;
    assert_eq!(out, [3., 50., 100.]);
    Ok(())
}

#[test]
fn convergence_is_configurable() -> Result<(), Error> {
    // An unreachable criterion surfaces as a convergence failure instead
    // of a silently inaccurate result
    let op = operation(4231, 4326)?.with_convergence(Convergence {
        tolerance: 1e-16,
        max_iterations: 1,
    });
    let mut out = [0.; 2];
    assert!(matches!(
        op.forward(&[3., 50.], &mut out),
        Err(Error::NumericalConvergenceFailure(_, 1))
    ));
    Ok(())
}

#[test]
fn synthetic_registry_definitions() -> Result<(), Error> {
    // The engine is usable with entirely synthetic CRS definitions
    use geotrans::{DatumShift, Ellipsoid, GeographicCrs};

    let mut registry = Minimal::new();
    registry.register(Crs::Geographic2D(GeographicCrs::new(
        CrsId::new("TEST", 1),
        "TestDatum",
        Ellipsoid::named("bessel")?,
        Some(DatumShift::new(598.1, 73.7, 418.2, 0.202, 0.045, -2.455, 6.7)),
    )));

    let op = compose(&registry, &CrsId::new("TEST", 1), &CrsId::epsg(4326))?;
    let mut out = [0.; 2];
    let mut back = [0.; 2];
    op.forward(&[10., 52.], &mut out)?;
    op.reverse(&out, &mut back)?;
    assert_float_eq!(back[0], 10., abs <= 1e-6);
    assert_float_eq!(back[1], 52., abs <= 1e-6);

    // A registry lookup hands back the registered definition
    assert_eq!(
        registry.lookup(&CrsId::new("TEST", 1))?.base().datum,
        "TestDatum"
    );
    Ok(())
}
