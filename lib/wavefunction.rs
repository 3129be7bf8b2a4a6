//! Unnormalized radial wavefunctions of a carrier in a spherical core/shell
//! well.
//!
//! With `k` the wavevector in the core and `q` the wavevector in the shell,
//! ```text
//!          sin(k r)
//! ψ(r) = ------------                         0 ≤ r < R
//!        r sin(k R)
//!
//!        sin(q (R + H - r))
//! ψ(r) = ------------------                   R ≤ r < R + H
//!           r sin(q H)
//!
//! ψ(r) = 0                                    otherwise
//! ```
//! which is continuous at the interface with `ψ(R) = 1 / R` and vanishes at the
//! outer surface. Wavevectors may be real or purely imaginary, so values are
//! carried as complex numbers throughout.
//!
//! Both ratios of sines are evaluated with
//! [`sin_ratio`][crate::special::sin_ratio], so evanescent branches stay finite
//! however thick the barrier region is. The shell branch is not stabilized
//! against `sin(q H) → 0`; such a state would have a node exactly at the
//! interface and is not produced by the ground-state solver, but callers
//! sampling arbitrary wavevectors should be aware that the value diverges
//! there.

use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    quad::{ quad, QuadResult, Tolerance },
    special::sin_ratio,
};

/// Below this radius, the core branch is evaluated from its Taylor series.
pub const CORE_TAYLOR_CUTOFF: f64 = 1e-8;

/// Core branch of the radial wavefunction.
pub fn core_wavefunction(x: f64, k: C64, core_width: f64) -> C64 {
    if x.abs() < CORE_TAYLOR_CUTOFF {
        let denom = (k * core_width).sin();
        let ksq = k * k;
        let xsq = x * x;
        (k - k * ksq * xsq / 6.0 + k * ksq * ksq * xsq * xsq / 120.0) / denom
    } else {
        sin_ratio(k * x, k * core_width) / x
    }
}

/// Shell branch of the radial wavefunction.
pub fn shell_wavefunction(x: f64, q: C64, core_width: f64, shell_width: f64)
    -> C64
{
    sin_ratio(q * (core_width + shell_width - x), q * shell_width) / x
}

/// Evaluate the full piecewise radial wavefunction at `x`.
pub fn wavefunction(x: f64, k: C64, q: C64, core_width: f64, shell_width: f64)
    -> C64
{
    if (0.0..core_width).contains(&x) {
        core_wavefunction(x, k, core_width)
    } else if (core_width..core_width + shell_width).contains(&x) {
        shell_wavefunction(x, q, core_width, shell_width)
    } else {
        C64::zero()
    }
}

/// Radial probability density `|ψ(x)|²`.
pub fn density(x: f64, k: C64, q: C64, core_width: f64, shell_width: f64)
    -> f64
{
    wavefunction(x, k, q, core_width, shell_width).norm_sqr()
}

/// A carrier's radial wavefunction with its wavevectors and the well geometry
/// bundled together.
///
/// All quantities should be expressed in the same (ideally order-unity) length
/// unit; see [`Units`][crate::units::Units].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialWavefunction {
    /// Wavevector in the core.
    pub k: C64,
    /// Wavevector in the shell.
    pub q: C64,
    /// Core radius.
    pub core_width: f64,
    /// Shell thickness.
    pub shell_width: f64,
}

impl RadialWavefunction {
    pub fn new(k: C64, q: C64, core_width: f64, shell_width: f64) -> Self {
        Self { k, q, core_width, shell_width }
    }

    /// Outer radius of the particle.
    pub fn radius(&self) -> f64 { self.core_width + self.shell_width }

    /// Evaluate the wavefunction at `x`.
    pub fn value(&self, x: f64) -> C64 {
        wavefunction(x, self.k, self.q, self.core_width, self.shell_width)
    }

    /// Evaluate `|ψ(x)|²` at `x`.
    pub fn density(&self, x: f64) -> f64 { self.value(x).norm_sqr() }

    /// Compute the radial normalization `∫ r² |ψ(r)|² dr` over the particle.
    pub fn norm(&self, tol: Tolerance) -> QuadResult<f64> {
        quad(
            |r| r * r * self.density(r),
            0.0,
            self.radius(),
            &[self.core_width],
            tol,
        )
        .map(|est| est.value)
    }

    /// Return a copy with all lengths multiplied by `s` (and wavevectors
    /// divided by `s`), so that `ψ'(s r) = ψ(r) / s`.
    pub fn rescaled(&self, s: f64) -> Self {
        Self {
            k: self.k / s,
            q: self.q / s,
            core_width: self.core_width * s,
            shell_width: self.shell_width * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use std::f64::consts::PI;

    const R: f64 = 1.23;
    const H: f64 = 1.05;

    fn electron() -> RadialWavefunction {
        RadialWavefunction::new(C64::new(1.2, 0.0), C64::new(0.0, 0.8), R, H)
    }

    #[test]
    fn finite_at_origin() {
        let wf = electron();
        let at_zero = wf.value(0.0);
        assert_relative_eq!(at_zero.re, 1.2 / (1.2 * R).sin(), max_relative = 1e-14);
        // the two branches of the core wavefunction join smoothly
        let below = core_wavefunction(0.99e-8, wf.k, R);
        let above = core_wavefunction(1.01e-8, wf.k, R);
        assert_relative_eq!(below.re, above.re, max_relative = 1e-12);
    }

    #[test]
    fn continuous_at_interface() {
        let wf = electron();
        let inner = core_wavefunction(R, wf.k, R);
        let outer = shell_wavefunction(R, wf.q, R, H);
        assert_relative_eq!(inner.re, 1.0 / R, max_relative = 1e-12);
        assert_relative_eq!(outer.re, 1.0 / R, max_relative = 1e-12);
        assert_abs_diff_eq!(outer.im, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn vanishes_outside() {
        let wf = electron();
        assert_eq!(wf.value(R + H), C64::zero());
        assert_eq!(wf.value(10.0), C64::zero());
        assert_eq!(wf.value(-0.5), C64::zero());
        assert!(wf.value(R + H - 1e-6).norm() < 1e-5);
    }

    #[test]
    fn evanescent_core_is_real() {
        // a carrier confined to the shell sees an imaginary core wavevector
        let wf = RadialWavefunction::new(C64::new(0.0, 0.9), C64::new(1.5, 0.0), R, H);
        for x in [0.0, 0.3, 1.0, 1.5, 2.0] {
            assert_eq!(wf.value(x).im, 0.0);
        }
        let expected = (0.9 * 0.3_f64).sinh() / (0.3 * (0.9 * R).sinh());
        assert_relative_eq!(wf.value(0.3).re, expected, max_relative = 1e-12);
    }

    #[test]
    fn thick_barrier_stays_finite() {
        // q H = 500i would overflow sinh on its own
        let wf = RadialWavefunction::new(C64::new(1.2, 0.0), C64::new(0.0, 2.0), R, 250.0);
        let at_interface = wf.value(R);
        assert_relative_eq!(at_interface.re, 1.0 / R, max_relative = 1e-12);
        // decays as exp(-κ (r - R)) / r into the shell
        let x = R + 3.0;
        let expected = (-2.0 * 3.0_f64).exp() / x;
        assert_relative_eq!(wf.value(x).re, expected, max_relative = 1e-12);
        let norm = wf.norm(Tolerance::relative(1e-10)).unwrap();
        assert!(norm.is_finite() && norm > 0.0);
    }

    #[test]
    fn norm_of_free_sphere() {
        // k R = π/2 with a vanishing shell contribution reduces to a sine
        // integral: ∫₀ᴿ sin²(k r) dr = R/2 for k R = π/2
        let k = PI / 2.0 / R;
        let wf = RadialWavefunction::new(C64::new(k, 0.0), C64::new(20.0, 0.0), R, 1e-9);
        let norm = wf.norm(Tolerance::relative(1e-12)).unwrap();
        assert_relative_eq!(norm, R / 2.0, max_relative = 1e-6);
    }

    #[test]
    fn rescaling_preserves_shape() {
        let wf = electron();
        let big = wf.rescaled(2.0);
        assert_relative_eq!(big.radius(), 2.0 * wf.radius());
        for x in [0.1, 0.7, 1.4, 2.0] {
            assert_relative_eq!(big.value(2.0 * x).re, wf.value(x).re / 2.0,
                max_relative = 1e-12);
        }
        let n1 = wf.norm(Tolerance::relative(1e-10)).unwrap();
        let n2 = big.norm(Tolerance::relative(1e-10)).unwrap();
        assert_relative_eq!(n2, 2.0 * n1, max_relative = 1e-8);
    }
}
