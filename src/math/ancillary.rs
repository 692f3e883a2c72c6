use crate::math::Convergence;
use crate::Error;
use std::f64::consts::FRAC_PI_2;

/// ts determines the function ts(phi) as defined in Snyder (1987),
/// Eq. (7-10): the exponential of the negated isometric latitude,
/// i.e. exp(-𝜓), but evaluated in a numerically more stable way than
/// the naive definition
///
///   𝜓 = log(
///           tan(𝜋/4 + 𝜙/2) *
///           ( (1 - e × sin 𝜙) / (1 + e × sin 𝜙) ) ^ (e/2)
///       )
///
/// Inputs:
///   (sin 𝜙, cos 𝜙): trigs of geographic latitude
///   e: eccentricity of the ellipsoid
pub fn ts(sincos: (f64, f64), e: f64) -> f64 {
    // exp(-asinh(tan 𝜙))
    //    = 1 / (tan 𝜙 + sec 𝜙)
    //    = cos 𝜙 / (1 + sin 𝜙)  good for 𝜙 > 0
    //    = (1 - sin 𝜙) / cos 𝜙  good for 𝜙 < 0
    let factor = if sincos.0 > 0. {
        sincos.1 / (1. + sincos.0)
    } else {
        (1. - sincos.0) / sincos.1
    };
    (e * (e * sincos.0).atanh()).exp() * factor
}

/// Snyder (1982) eq. 12-15: the particular scale factor m(phi)
pub fn msfn(sincos: (f64, f64), es: f64) -> f64 {
    sincos.1 / (1. - sincos.0 * sincos.0 * es).sqrt()
}

/// Geographic latitude from ts = exp(-𝜓), the inverse of [`ts`].
///
/// The fixed point iteration from Snyder (1987), eq. (7-9): linearly
/// convergent with ratio ~e²/2, so the default criteria are reached in
/// 4-5 rounds anywhere on Earth-like ellipsoids.
pub fn phi_from_ts(ts0: f64, e: f64, convergence: &Convergence) -> Result<f64, Error> {
    let mut phi = FRAC_PI_2 - 2. * ts0.atan();
    for _ in 0..convergence.max_iterations {
        let con = e * phi.sin();
        let next = FRAC_PI_2 - 2. * (ts0 * ((1. - con) / (1. + con)).powf(0.5 * e)).atan();
        if (next - phi).abs() <= convergence.tolerance {
            return Ok(next);
        }
        phi = next;
    }
    Err(Error::NumericalConvergenceFailure(
        "conformal latitude inversion",
        convergence.max_iterations,
    ))
}

// ----- T E S T S ---------------------------------------------------------------------
