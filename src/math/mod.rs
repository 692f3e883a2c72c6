pub(crate) mod ancillary;

pub(crate) use ancillary::msfn;
pub(crate) use ancillary::phi_from_ts;
pub(crate) use ancillary::ts;

/// Convergence criteria for the bounded iterative inverses (geodetic
/// latitude recovery, conformal latitude inversion).
///
/// Every iterative inverse in the engine runs until successive iterates
/// agree to within `tolerance` (radians), and gives up with
/// [`Error::NumericalConvergenceFailure`](crate::Error::NumericalConvergenceFailure)
/// after `max_iterations` steps. The defaults converge with ample margin
/// for any coordinate in the domain of the corresponding forward mapping;
/// exceeding the bound signals a degenerate or out-of-domain input, not a
/// transient condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Largest acceptable difference between successive iterates, in radians
    pub tolerance: f64,
    /// Iteration bound
    pub max_iterations: usize,
}

impl Default for Convergence {
    fn default() -> Convergence {
        Convergence {
            tolerance: 1e-11,
            max_iterations: 10,
        }
    }
}
