//! Assembly of coordinate operations from pairs of CRS definitions
use super::{CoordinateOperation, Helmert, Step};
use crate::crs::registry::Registry;
use crate::crs::{Crs, CrsId, GeographicCrs};
use crate::Error;
use log::{debug, trace};

/// Build the [`CoordinateOperation`] converting coordinates from `source`
/// to `target`, both resolved through `registry`.
///
/// The operation is assembled as the minimal step sequence relating the
/// two systems:
///
/// 1. Identical identifiers yield the identity operation.
/// 2. A projected CRS is first reduced to its base geographic form.
/// 3. Geographic CRSs on the same datum need no datum crossing.
/// 4. Otherwise the route runs through geocentric space: a direct shift
///    when the registry publishes one for the pair, else through the
///    reference datum (the source's link forward, the target's reversed).
///
/// Composition is deterministic, and fails fast: a CRS without the datum
/// link required for a crossing refuses composition with
/// [`Error::InvalidOperationConfiguration`] rather than producing an
/// operation that would be silently wrong.
pub fn compose(
    registry: &dyn Registry,
    source: &CrsId,
    target: &CrsId,
) -> Result<CoordinateOperation, Error> {
    let src = registry.lookup(source)?;
    let dst = registry.lookup(target)?;

    if source == target {
        trace!("compose: {source} -> {target} is the identity");
        return Ok(CoordinateOperation::new(
            vec![Step::Identity],
            src.dimension(),
            dst.dimension(),
        ));
    }

    let mut steps = Vec::new();

    // Reduce a projected source to its base geographic form
    if let Crs::Projected(projected) = src {
        steps.push(Step::ProjectedToGeographic(projected.projection));
    }

    let src_base = src.base();
    let dst_base = dst.base();

    // Datum crossing, through geocentric space
    if !src_base.datum_matches(dst_base) {
        steps.push(Step::GeographicToGeocentric(src_base.ellps));

        if let Some(direct) = registry.direct_shift(&src_base.id, &dst_base.id) {
            trace!("compose: direct shift {} -> {}", src_base.id, dst_base.id);
            steps.push(Step::GeocentricShift(Helmert::new(direct)));
        } else {
            let src_link = src_base.to_reference.ok_or_else(|| missing_link(src_base))?;
            let dst_link = dst_base.to_reference.ok_or_else(|| missing_link(dst_base))?;
            steps.push(Step::GeocentricShift(Helmert::new(src_link)));
            steps.push(Step::GeocentricShift(Helmert::new(dst_link).reversed()));
        }

        steps.push(Step::GeocentricToGeographic(dst_base.ellps));
    }

    // ... and project into a projected target
    if let Crs::Projected(projected) = dst {
        steps.push(Step::GeographicToProjected(projected.projection));
    }

    // Same datum, both geographic: nothing left to do but relabel
    if steps.is_empty() {
        steps.push(Step::Identity);
    }

    debug!("compose: {source} -> {target} in {} step(s)", steps.len());
    Ok(CoordinateOperation::new(
        steps,
        src.dimension(),
        dst.dimension(),
    ))
}

fn missing_link(crs: &GeographicCrs) -> Error {
    Error::InvalidOperationConfiguration(format!(
        "{} ({}) has no datum shift to the reference datum",
        crs.id, crs.datum
    ))
}

// ----- T E S T S ---------------------------------------------------------------------
