//! Electron/hole overlap integrals `|∫ r² ψₑ(r) ψₕ(r) dr|²`.
//!
//! Both wavefunctions must share a geometry and be expressed in the natural
//! length unit of the [`Units`] passed alongside them; results are converted
//! back to SI (m²) on return. The integrals use the unnormalized wavefunctions
//! of [`wavefunction`][crate::wavefunction]; see [`normalized_overlap`] for the
//! dimensionless form.

use num_complex::Complex64 as C64;
use tracing::warn;
use crate::{
    error::Degeneracy,
    quad::{ quad, Tolerance },
    solve::{ BandResult, Region },
    units::Units,
    wavefunction::RadialWavefunction,
};

/// Denominators of the analytic overlap smaller than this in magnitude are
/// reported as [`Degeneracy::OverlapDenominator`].
pub const DEGENERACY_THRESHOLD: f64 = 1e-4;

// ∫₀ʷ sin(a u) sin(b u) du / (sin(a w) sin(b w)), split into numerator and
// denominator so the latter can be checked
fn region_integral(a: C64, b: C64, w: f64) -> (C64, C64) {
    let denom = (a * w).sin() * (b * w).sin() * 2.0 * (b * b - a * a);
    let numer
        = -((b - a) * ((b + a) * w).sin() - (b + a) * ((b - a) * w).sin());
    (numer, denom)
}

fn check_denominator(region: Region, denom: C64) -> BandResult<()> {
    let magnitude = denom.norm();
    if !(DEGENERACY_THRESHOLD..f64::INFINITY).contains(&magnitude) {
        warn!(%region, magnitude, "near-degenerate analytic overlap denominator");
        Err(Degeneracy::OverlapDenominator {
            region,
            magnitude,
            threshold: DEGENERACY_THRESHOLD,
        }.into())
    } else {
        Ok(())
    }
}

/// Closed-form overlap integral.
///
/// The core and shell contributions each carry a denominator proportional to
/// `sin(kₑ w) sin(kₕ w) (kₕ² - kₑ²)`; if either falls below
/// [`DEGENERACY_THRESHOLD`] (in natural units) or overflows, as it does for a
/// thick evanescent region, the closed form is unreliable
/// and [`BandError::NumericalDegeneracy`][crate::error::BandError::NumericalDegeneracy]
/// is returned instead of a value.
/// [`numerical_overlap`] remains usable in that case.
pub fn analytical_overlap(
    electron: &RadialWavefunction,
    hole: &RadialWavefunction,
    units: &Units,
) -> BandResult<f64>
{
    let (core_numer, core_denom)
        = region_integral(electron.k, hole.k, electron.core_width);
    let (shell_numer, shell_denom)
        = region_integral(electron.q, hole.q, electron.shell_width);
    check_denominator(Region::Core, core_denom)?;
    check_denominator(Region::Shell, shell_denom)?;
    let total = core_numer / core_denom + shell_numer / shell_denom;
    Ok(units.from_nat_area(total.norm_sqr()))
}

// ∫ r² ψₑ ψₕ dr in natural units
fn overlap_amplitude(
    electron: &RadialWavefunction,
    hole: &RadialWavefunction,
    tol: Tolerance,
) -> BandResult<C64>
{
    let radius = electron.radius();
    let points = [electron.core_width];
    let integrand = |r: f64| r * r * electron.value(r) * hole.value(r);
    let re = quad(|r| integrand(r).re, 0.0, radius, &points, tol)?;
    let im = quad(|r| integrand(r).im, 0.0, radius, &points, tol)?;
    Ok(C64::new(re.value, im.value))
}

/// Overlap integral by adaptive quadrature of the real and imaginary parts of
/// the integrand, split at the core/shell interface.
pub fn numerical_overlap(
    electron: &RadialWavefunction,
    hole: &RadialWavefunction,
    units: &Units,
    tol: Tolerance,
) -> BandResult<f64>
{
    let amp = overlap_amplitude(electron, hole, tol)?;
    Ok(units.from_nat_area(amp.norm_sqr()))
}

/// Overlap of the normalized wavefunctions,
/// `|∫ r² ψₑ ψₕ dr|² / (∫ r² |ψₑ|² dr · ∫ r² |ψₕ|² dr)`.
///
/// Dimensionless, and at most 1 by the Cauchy-Schwarz inequality.
pub fn normalized_overlap(
    electron: &RadialWavefunction,
    hole: &RadialWavefunction,
    tol: Tolerance,
) -> BandResult<f64>
{
    let amp = overlap_amplitude(electron, hole, tol)?;
    let norm_e = electron.norm(tol)?;
    let norm_h = hole.norm(tol)?;
    Ok(amp.norm_sqr() / (norm_e * norm_h))
}
