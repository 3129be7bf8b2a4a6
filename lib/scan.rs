//! Locate sign changes of a continuous function by sampling it on a uniform
//! grid.
//!
//! ```
//! use ncband::scan::{ Crossing, scan_and_bracket };
//!
//! // poles of tan are falling crossings; its zeros are rising
//! let (a, b) = scan_and_bracket(f64::tan, 1.0, 4.0, 1000, Crossing::Rising)
//!     .unwrap();
//! assert!(a < std::f64::consts::PI && std::f64::consts::PI < b);
//! ```

use ndarray as nd;
use tracing::debug;
use crate::error::BracketError;

pub type ScanResult<T> = Result<T, BracketError>;

/// Specifies a kind of sign change to look for in [`scan_and_bracket`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Crossing {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Crossing {
    // signs are -1, 0, +1 or NaN; a step of at least one half counts, so that
    // landing exactly on a zero still registers and NaN never does
    fn matches(&self, sa: f64, sb: f64) -> bool {
        let step = sb - sa;
        match self {
            Self::Falling => step < -0.5,
            Self::Rising => step > 0.5,
            Self::All => step.abs() > 0.5,
        }
    }
}

// unlike `f64::signum`, zero maps to zero
fn sign(y: f64) -> f64 {
    if y > 0.0 {
        1.0
    } else if y < 0.0 {
        -1.0
    } else if y == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Sample `f` at `resolution` evenly spaced points over `[lower, upper]` and
/// return the first pair of adjacent samples across which the sign of `f`
/// changes in the manner specified by `kind`.
///
/// Only the *first* qualifying crossing is returned; with [`Crossing::Rising`]
/// this is the lowest negative-to-positive transition, skipping any earlier
/// positive-to-negative ones (e.g. at poles).
pub fn scan_and_bracket<F>(
    f: F,
    lower: f64,
    upper: f64,
    resolution: usize,
    kind: Crossing,
) -> ScanResult<(f64, f64)>
where F: FnMut(f64) -> f64
{
    if resolution < 2 { return Err(BracketError(lower, upper, resolution)); }
    let x: nd::Array1<f64> = nd::Array1::linspace(lower, upper, resolution);
    let s: nd::Array1<f64> = x.mapv(f).mapv(sign);
    let bracket
        = s.iter().zip(s.iter().skip(1))
        .position(|(sk, skp1)| kind.matches(*sk, *skp1))
        .map(|k| (x[k], x[k + 1]));
    match bracket {
        Some((a, b)) => {
            debug!(a, b, ?kind, "bracketed sign change");
            Ok((a, b))
        },
        None => Err(BracketError(lower, upper, resolution)),
    }
}
