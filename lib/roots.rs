//! Derivative-free root refinement within a bracketing interval.

use tracing::trace;
use crate::error::RootError;

pub type RootResult<T> = Result<T, RootError>;

/// Relative tolerance used alongside the absolute `epsilon` in [`brent`].
pub const RTOL: f64 = 4.0 * f64::EPSILON;

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl<T> Bounds<T> {
    fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Bounds<U> {
        (f(self.0), f(self.1)).into()
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from(xx: (T, T)) -> Self { Self(xx.0, xx.1) }
}

/// Find a root of `f` within `bounds` using Brent's method (inverse quadratic
/// interpolation and secant steps, safeguarded by bisection).
///
/// `f` must take values of opposite sign at the two ends of `bounds`, or be
/// exactly zero at one of them; otherwise [`RootError::NotBracketed`] is
/// returned. Iteration stops when the bracket is narrower than
/// `epsilon + RTOL * |x|`, and [`RootError::MaxIters`] is returned if this
/// does not happen within `maxiters` evaluations.
///
/// ```
/// use ncband::roots::brent;
///
/// let x = brent(|x| x * x - 2.0, (0.0, 2.0), 1e-14, 100).unwrap();
/// assert!((x - 2.0_f64.sqrt()).abs() < 1e-13);
/// ```
pub fn brent<F>(mut f: F, bounds: (f64, f64), epsilon: f64, maxiters: usize)
    -> RootResult<f64>
where F: FnMut(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;

    let b: Bounds<f64> = bounds.into();
    let fb = b.map(&mut f);
    if fb.0 == 0.0 { return Ok(b.0); }
    if fb.1 == 0.0 { return Ok(b.1); }
    if fb.0.is_nan() || fb.1.is_nan() || fb.0.signum() == fb.1.signum() {
        return Err(RootError::NotBracketed {
            a: b.0, b: b.1, fa: fb.0, fb: fb.1 });
    }

    // `cur` is the best estimate so far, `blk` the contrapoint keeping the
    // root bracketed, and `pre` the previous iterate
    let (mut xpre, mut xcur) = (b.0, b.1);
    let (mut fpre, mut fcur) = (fb.0, fb.1);
    let (mut xblk, mut fblk) = (0.0, 0.0);
    let (mut spre, mut scur) = (0.0, 0.0);
    for k in 0..maxiters {
        if fpre != 0.0 && fcur != 0.0 && fpre.signum() != fcur.signum() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (epsilon + RTOL * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            trace!(iters = k, root = xcur, "brent converged");
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry
                = if xpre == xblk {
                    // secant
                    -fcur * (xcur - xpre) / (fcur - fpre)
                } else {
                    // inverse quadratic interpolation
                    let dpre = (fpre - fcur) / (xpre - xcur);
                    let dblk = (fblk - fcur) / (xblk - xcur);
                    -fcur * (fblk * dblk - fpre * dpre)
                        / (dblk * dpre * (fblk - fpre))
                };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }
    Err(RootError::MaxIters(maxiters))
}
