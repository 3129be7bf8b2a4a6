//! Globally adaptive Gauss-Kronrod quadrature in one and two dimensions.
//!
//! Each panel is integrated with the 15-point Kronrod rule; the difference from
//! the embedded 7-point Gauss rule is taken as the panel's error estimate, and
//! the panel with the largest estimate is bisected until the total estimate
//! meets `max(abs, rel * |value|)` or the subdivision limit is reached.
//!
//! Known discontinuities of the integrand (or its derivative) should be passed
//! as breakpoints so that no panel straddles them.
//!
//! ```
//! use ncband::quad::{ quad, Tolerance };
//!
//! let est = quad(|x| x.sin(), 0.0, std::f64::consts::PI, &[], Tolerance::default())
//!     .unwrap();
//! assert!((est.value - 2.0).abs() < 1e-10);
//! ```

use serde::{ Deserialize, Serialize };
use tracing::trace;
use crate::{ error::QuadError, DEF_REL_TOL };

pub type QuadResult<T> = Result<T, QuadError>;

pub(crate) const DEF_ABS_TOL: f64 = 1.49e-8;
pub(crate) const DEF_LIMIT: usize = 200;

// Kronrod abscissae on [0, 1]; odd indices are shared with the Gauss rule
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// Requested accuracy and work bound for an adaptive quadrature.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Absolute error bound.
    pub abs: f64,
    /// Relative error bound.
    pub rel: f64,
    /// Maximum number of panels.
    pub limit: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { abs: DEF_ABS_TOL, rel: DEF_REL_TOL, limit: DEF_LIMIT }
    }
}

impl Tolerance {
    /// Default tolerance with relative bound `rel`.
    pub fn relative(rel: f64) -> Self {
        Self { rel, ..Self::default() }
    }

    fn target(&self, value: f64) -> f64 {
        self.abs.max(self.rel * value.abs())
    }
}

/// An integral together with an estimate of its absolute error.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Value of the integral.
    pub value: f64,
    /// Estimated absolute error.
    pub error: f64,
}

impl Estimate {
    /// Multiply both the value and the error by `s`.
    pub fn scaled(self, s: f64) -> Self {
        Self { value: self.value * s, error: self.error * s.abs() }
    }
}

#[derive(Copy, Clone, Debug)]
struct Panel {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

fn gauss_kronrod<F, E>(f: &mut F, a: f64, b: f64) -> Result<Panel, E>
where F: FnMut(f64) -> Result<f64, E>
{
    let c = (a + b) / 2.0;
    let hl = (b - a) / 2.0;
    let fc = f(c)?;
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;
    for (j, (xk, wk)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = hl * xk;
        let fsum = f(c - dx)? + f(c + dx)?;
        kronrod += wk * fsum;
        if j % 2 == 1 { gauss += WG[j / 2] * fsum; }
    }
    Ok(Panel {
        a,
        b,
        value: kronrod * hl,
        error: ((kronrod - gauss) * hl).abs(),
    })
}

// interior breakpoints, sorted and deduplicated, with the endpoints attached
fn partition(a: f64, b: f64, points: &[f64]) -> Vec<f64> {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let mut nodes: Vec<f64>
        = points.iter().copied()
        .filter(|p| lo < *p && *p < hi)
        .collect();
    nodes.sort_by(|l, r| l.total_cmp(r));
    nodes.dedup();
    let mut out = Vec::with_capacity(nodes.len() + 2);
    out.push(lo);
    out.extend(nodes);
    out.push(hi);
    if a > b { out.reverse(); }
    out
}

/// Like [`quad`], but for an integrand that may itself fail.
///
/// The first error returned by `f` aborts the integration and is passed back
/// to the caller.
pub fn try_quad<F, E>(
    mut f: F,
    a: f64,
    b: f64,
    points: &[f64],
    tol: Tolerance,
) -> Result<Estimate, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<QuadError>,
{
    QuadError::check_tolerance(tol.abs, tol.rel)?;
    let nodes = partition(a, b, points);
    let mut panels: Vec<Panel>
        = nodes.iter().zip(nodes.iter().skip(1))
        .map(|(lo, hi)| gauss_kronrod(&mut f, *lo, *hi))
        .collect::<Result<_, E>>()?;
    loop {
        let value: f64 = panels.iter().map(|p| p.value).sum();
        let error: f64 = panels.iter().map(|p| p.error).sum();
        let target = tol.target(value);
        if error <= target {
            trace!(value, error, panels = panels.len(), "quadrature converged");
            return Ok(Estimate { value, error });
        }
        if panels.len() >= tol.limit.max(nodes.len() - 1) {
            return Err(QuadError::NotConverged {
                value, error, target, limit: tol.limit }.into());
        }
        let worst
            = panels.iter().enumerate()
            .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
            .map(|(k, _)| k)
            .unwrap_or(0);
        let p = panels.swap_remove(worst);
        let m = (p.a + p.b) / 2.0;
        panels.push(gauss_kronrod(&mut f, p.a, m)?);
        panels.push(gauss_kronrod(&mut f, m, p.b)?);
    }
}

/// Integrate `f` over `[a, b]`, splitting first at the interior `points`.
pub fn quad<F>(mut f: F, a: f64, b: f64, points: &[f64], tol: Tolerance)
    -> QuadResult<Estimate>
where F: FnMut(f64) -> f64
{
    try_quad(|x| Ok(f(x)), a, b, points, tol)
}

/// Integrate `f(x, y)` over the rectangle `[xa, xb] × [ya, yb]` as an iterated
/// integral, with `y` innermost.
///
/// The outer integral is split at `points`; for each outer `x`, the inner
/// integral is split at `inner_points(x)`. Both levels use `tol`. The returned
/// error estimate is that of the outer integral.
pub fn dblquad<F, P>(
    mut f: F,
    (xa, xb): (f64, f64),
    (ya, yb): (f64, f64),
    points: &[f64],
    mut inner_points: P,
    tol: Tolerance,
) -> QuadResult<Estimate>
where
    F: FnMut(f64, f64) -> f64,
    P: FnMut(f64) -> Vec<f64>,
{
    try_quad(
        |x| {
            let ypoints = inner_points(x);
            quad(|y| f(x, y), ya, yb, &ypoints, tol).map(|est| est.value)
        },
        xa,
        xb,
        points,
        tol,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn tight() -> Tolerance { Tolerance { abs: 0.0, rel: 1e-12, limit: 500 } }

    #[test]
    fn polynomial_exact() {
        let est = quad(|x| 3.0 * x * x - x + 1.0, -1.0, 2.0, &[], tight()).unwrap();
        assert_relative_eq!(est.value, 10.5, max_relative = 1e-14);
    }

    #[test]
    fn reversed_limits() {
        let est = quad(|x| x.exp(), 1.0, 0.0, &[], tight()).unwrap();
        assert_relative_eq!(est.value, 1.0 - 1.0_f64.exp(), max_relative = 1e-12);
    }

    #[test]
    fn discontinuity_with_breakpoint() {
        let step = |x: f64| if x < 0.3 { 1.0 } else { 2.0 };
        let est = quad(step, 0.0, 1.0, &[0.3], tight()).unwrap();
        assert_relative_eq!(est.value, 1.7, max_relative = 1e-12);
        // the same integral converges without the hint, only more slowly
        let est = quad(step, 0.0, 1.0, &[], Tolerance::relative(1e-6)).unwrap();
        assert_relative_eq!(est.value, 1.7, max_relative = 1e-5);
    }

    #[test]
    fn breakpoints_outside_are_ignored() {
        let est = quad(|x| x, 0.0, 1.0, &[-1.0, 0.0, 1.0, 5.0, 0.5, 0.5], tight())
            .unwrap();
        assert_relative_eq!(est.value, 0.5, max_relative = 1e-14);
    }

    #[test]
    fn oscillatory() {
        let tol = Tolerance { abs: 1e-12, ..tight() };
        let est = quad(|x| (20.0 * x).cos(), 0.0, PI, &[], tol).unwrap();
        assert!(est.value.abs() < 1e-10);
    }

    #[test]
    fn limit_reached() {
        let tol = Tolerance { abs: 0.0, rel: 1e-14, limit: 3 };
        let res = quad(|x| x.abs().sqrt(), -1.0, 1.0, &[], tol);
        assert!(matches!(res, Err(QuadError::NotConverged { limit: 3, .. })));
    }

    #[test]
    fn bad_tolerance() {
        let tol = Tolerance { abs: 0.0, rel: 0.0, limit: 10 };
        assert!(matches!(
            quad(|x| x, 0.0, 1.0, &[], tol),
            Err(QuadError::BadTolerance(_, _))
        ));
    }

    #[test]
    fn double_integral_with_kink() {
        // ∫∫ max(x, y) over the unit square = 2/3
        let est = dblquad(
            |x, y| x.max(y),
            (0.0, 1.0),
            (0.0, 1.0),
            &[],
            |x| vec![x],
            tight(),
        )
        .unwrap();
        assert_relative_eq!(est.value, 2.0 / 3.0, max_relative = 1e-10);
    }

    #[test]
    fn estimate_scaling() {
        let est = Estimate { value: 2.0, error: 0.1 }.scaled(-3.0);
        assert_eq!(est, Estimate { value: -6.0, error: 0.30000000000000004 });
    }
}
