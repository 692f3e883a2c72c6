//! *A coordinate reference system transformation engine*.
//!
//! Given coordinates expressed in one geodetic or projected coordinate
//! reference system (CRS), produce the equivalent coordinates in another,
//! exactly and reversibly wherever a reverse exists.
//!
//! The engine composes heterogeneous transformation steps - datum shifts,
//! map projections, geographic/geocentric conversions - into a single
//! reusable [`CoordinateOperation`], selecting the correct chain for an
//! arbitrary pair of registered CRS identifiers:
//!
//! ```
//! use geotrans::{compose, CrsId, Minimal};
//!
//! fn main() -> Result<(), geotrans::Error> {
//!     let registry = Minimal::new();
//!
//!     // Belgian Lambert 72 to WGS 84
//!     let op = compose(&registry, &CrsId::epsg(31370), &CrsId::epsg(4326))?;
//!
//!     let mut geo = [0.; 2];
//!     op.forward(&[250_000., 125_000.], &mut geo)?;
//!     assert!((geo[0] - 5.776_209).abs() < 1e-6);
//!     assert!((geo[1] - 50.427_334).abs() < 1e-6);
//!
//!     // ... and back
//!     let mut projected = [0.; 2];
//!     op.reverse(&geo, &mut projected)?;
//!     assert!((projected[0] - 250_000.).abs() < 1e-3);
//!     Ok(())
//! }
//! ```
//!
//! A composed operation is an immutable value: construction resolves all
//! parameters up front, so a single instance may be shared freely across
//! threads and invoked repeatedly on caller-supplied coordinate buffers.

mod crs;
mod ellipsoid;
mod math;
mod op;
mod proj;

pub use crs::registry::{Minimal, Registry};
pub use crs::{Crs, CrsId, DatumShift, GeographicCrs, ProjectedCrs};
pub use ellipsoid::Ellipsoid;
pub use math::Convergence;
pub use op::compose::compose;
pub use op::{CoordinateOperation, Helmert, Step};
pub use proj::{Lcc, Merc, Projection, Webmerc};

use thiserror::Error;

/// The crate-wide error type.
///
/// Composition-time problems (unknown identifiers, missing datum links,
/// degenerate projection parameters) are reported when the operation is
/// built, never mid-transform. Per-call failures are limited to buffer
/// contract violations and non-convergence of a bounded iterative inverse.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("coordinate reference system {0} not found")]
    NotFound(CrsId),

    #[error("invalid operation configuration: {0}")]
    InvalidOperationConfiguration(String),

    #[error("{0}: no convergence after {1} iterations")]
    NumericalConvergenceFailure(&'static str, usize),

    #[error("unsupported coordinate dimension {0} (expected 2 or 3)")]
    InvalidDimension(usize),

    #[error("input and output buffer lengths differ ({0} vs {1})")]
    DimensionMismatch(usize, usize),
}
