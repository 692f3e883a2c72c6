pub(crate) mod compose;

use crate::crs::DatumShift;
use crate::ellipsoid::Ellipsoid;
use crate::math::Convergence;
use crate::proj::Projection;
use crate::Error;

// ----- T H E   H E L M E R T   S H I F T ---------------------------------------------

/// A 7 parameter position vector frame shift between two geocentric
/// datums, in application form: rotations in radians, translations in
/// meters, scale offset in parts per million.
///
/// The linear form is the canonical small-angle position vector
/// formulation,
///
/// ```text
/// X' = tx + s·(X - rz·Y + ry·Z)
/// Y' = ty + s·(rz·X + Y - rx·Z)
/// Z' = tz + s·(-ry·X + rx·Y + Z)      with s = 1 + ppm·1e-6
/// ```
///
/// The reverse shift negates all seven parameters and reapplies the same
/// form. That is the standard first order approximation for this
/// transformation family, not an exact matrix inverse: the scale of the
/// reverse is 1 - ppm·1e-6 rather than 1/(1 + ppm·1e-6), and the rotation
/// is transposed only to first order. Consumer accuracy expectations are
/// calibrated to exactly this behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helmert {
    tx: f64,
    ty: f64,
    tz: f64,
    rx: f64,
    ry: f64,
    rz: f64,
    ppm: f64,
}

impl Helmert {
    /// From the published parameter form (rotations in arcseconds)
    #[must_use]
    pub fn new(shift: DatumShift) -> Helmert {
        Helmert {
            tx: shift.tx,
            ty: shift.ty,
            tz: shift.tz,
            rx: (shift.rx / 3600.).to_radians(),
            ry: (shift.ry / 3600.).to_radians(),
            rz: (shift.rz / 3600.).to_radians(),
            ppm: shift.ppm,
        }
    }

    /// The first order inverse: all seven parameters negated
    #[must_use]
    pub fn reversed(&self) -> Helmert {
        Helmert {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            ppm: -self.ppm,
        }
    }

    #[must_use]
    pub fn apply(&self, cartesian: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = cartesian;
        let s = 1.0 + self.ppm * 1e-6;
        [
            self.tx + s * (x - self.rz * y + self.ry * z),
            self.ty + s * (self.rz * x + y - self.rx * z),
            self.tz + s * (-self.ry * x + self.rx * y + z),
        ]
    }
}

// ----- T H E   S T E P   V A R I A N T S ---------------------------------------------

/// One stage of a coordinate operation pipeline.
///
/// Each variant is a pure function of its parameters, invertible by
/// construction; the pipeline dispatches over the variants with a single
/// match per stage. Geographic coordinates cross step boundaries in
/// degrees, geocentric and projected ones in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Ellipsoidal geographic to 3D cartesian geocentric
    GeographicToGeocentric(Ellipsoid),
    /// Position vector shift between two geocentric frames
    GeocentricShift(Helmert),
    /// 3D cartesian geocentric to ellipsoidal geographic
    GeocentricToGeographic(Ellipsoid),
    /// Map projection, forward
    GeographicToProjected(Projection),
    /// Map projection, inverse
    ProjectedToGeographic(Projection),
    /// The do-nothing operation
    Identity,
}

impl Step {
    fn fwd(&self, coord: &mut [f64; 3], convergence: &Convergence) -> Result<(), Error> {
        match *self {
            Step::GeographicToGeocentric(ellps) => {
                *coord =
                    ellps.cartesian([coord[0].to_radians(), coord[1].to_radians(), coord[2]]);
            }
            Step::GeocentricShift(shift) => *coord = shift.apply(*coord),
            Step::GeocentricToGeographic(ellps) => {
                let geo = ellps.geographic(*coord, convergence)?;
                *coord = [geo[0].to_degrees(), geo[1].to_degrees(), geo[2]];
            }
            Step::GeographicToProjected(projection) => {
                let (easting, northing) = projection.project(coord[0], coord[1])?;
                coord[0] = easting;
                coord[1] = northing;
            }
            Step::ProjectedToGeographic(projection) => {
                let (lon, lat) = projection.unproject(coord[0], coord[1], convergence)?;
                coord[0] = lon;
                coord[1] = lat;
            }
            Step::Identity => (),
        }
        Ok(())
    }

    fn inv(&self, coord: &mut [f64; 3], convergence: &Convergence) -> Result<(), Error> {
        match *self {
            Step::GeographicToGeocentric(ellps) => {
                let geo = ellps.geographic(*coord, convergence)?;
                *coord = [geo[0].to_degrees(), geo[1].to_degrees(), geo[2]];
            }
            Step::GeocentricShift(shift) => *coord = shift.reversed().apply(*coord),
            Step::GeocentricToGeographic(ellps) => {
                *coord =
                    ellps.cartesian([coord[0].to_radians(), coord[1].to_radians(), coord[2]]);
            }
            Step::GeographicToProjected(projection) => {
                let (lon, lat) = projection.unproject(coord[0], coord[1], convergence)?;
                coord[0] = lon;
                coord[1] = lat;
            }
            Step::ProjectedToGeographic(projection) => {
                let (easting, northing) = projection.project(coord[0], coord[1])?;
                coord[0] = easting;
                coord[1] = northing;
            }
            Step::Identity => (),
        }
        Ok(())
    }
}

// ----- T H E   C O O R D I N A T E   O P E R A T I O N -------------------------------

/// An ordered, immutable sequence of transformation steps relating a
/// source CRS to a target CRS, built once by [`compose`](crate::compose)
/// and applied any number of times.
///
/// The reverse direction runs the same steps in reverse order, each
/// replaced by its own inverse. Construction resolves all configuration,
/// so an instance holds no mutable state and is safe for unsynchronized
/// concurrent use.
///
/// # Buffer contract
///
/// `forward` and `reverse` take an input and an output slice of equal
/// length, either 2 (x, y) or 3 (x, y, z); anything else is an error, and
/// the output buffer is written only after every step has succeeded.
/// A 2D source CRS ignores the third input element (the height is taken
/// as 0); a 2D target CRS zero-fills the third output element; 3D CRSs
/// carry the ellipsoidal height through.
#[derive(Debug, Clone)]
pub struct CoordinateOperation {
    steps: Vec<Step>,
    source_dimension: usize,
    target_dimension: usize,
    convergence: Convergence,
}

impl CoordinateOperation {
    pub(crate) fn new(
        steps: Vec<Step>,
        source_dimension: usize,
        target_dimension: usize,
    ) -> CoordinateOperation {
        CoordinateOperation {
            steps,
            source_dimension,
            target_dimension,
            convergence: Convergence::default(),
        }
    }

    /// Rebind the convergence criteria of the iterative inverses
    #[must_use]
    pub fn with_convergence(mut self, convergence: Convergence) -> CoordinateOperation {
        self.convergence = convergence;
        self
    }

    /// The step sequence, in forward order
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn source_dimension(&self) -> usize {
        self.source_dimension
    }

    #[must_use]
    pub fn target_dimension(&self) -> usize {
        self.target_dimension
    }

    /// Transform `input` from the source CRS to the target CRS,
    /// writing the result to `output`
    pub fn forward(&self, input: &[f64], output: &mut [f64]) -> Result<(), Error> {
        check_buffers(input, output)?;
        let mut coord = lift(input, self.source_dimension);
        for step in &self.steps {
            step.fwd(&mut coord, &self.convergence)?;
        }
        lower(coord, output, self.target_dimension);
        Ok(())
    }

    /// Transform `input` from the target CRS back to the source CRS,
    /// writing the result to `output`
    pub fn reverse(&self, input: &[f64], output: &mut [f64]) -> Result<(), Error> {
        check_buffers(input, output)?;
        let mut coord = lift(input, self.target_dimension);
        for step in self.steps.iter().rev() {
            step.inv(&mut coord, &self.convergence)?;
        }
        lower(coord, output, self.source_dimension);
        Ok(())
    }
}

// ----- B U F F E R   H A N D L I N G -------------------------------------------------

fn check_buffers(input: &[f64], output: &[f64]) -> Result<(), Error> {
    if !(2..=3).contains(&input.len()) {
        return Err(Error::InvalidDimension(input.len()));
    }
    if input.len() != output.len() {
        return Err(Error::DimensionMismatch(input.len(), output.len()));
    }
    Ok(())
}

fn lift(input: &[f64], dimension: usize) -> [f64; 3] {
    let height = if dimension == 3 && input.len() == 3 {
        input[2]
    } else {
        0.0
    };
    [input[0], input[1], height]
}

fn lower(coord: [f64; 3], output: &mut [f64], dimension: usize) {
    output[0] = coord[0];
    output[1] = coord[1];
    if output.len() == 3 {
        output[2] = if dimension == 3 { coord[2] } else { 0.0 };
    }
}

// ----- T E S T S ---------------------------------------------------------------------
