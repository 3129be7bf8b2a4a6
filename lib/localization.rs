//! Minimum region widths for carrier localization in a type-II particle with
//! the electron confined to the core and the hole to the shell.
//!
//! A ground state only exists inside its own well once the well is wide enough
//! for the bound level to fall below the band offset. For the electron this
//! fixes a minimum core radius at a given shell thickness; for the hole, a
//! minimum shell thickness at a given core radius.
//!
//! All lengths here are in nanometers and all wavevectors in nm^-1.

use std::f64::consts::PI;
use tracing::debug;
use crate::{
    error::BandError,
    roots::brent,
    scan::{ scan_and_bracket, Crossing },
    solve::{ BandResult, Carrier },
    special::{ tanxdivx, TANXDIVX_CUTOFF },
    units::{ hbar, me, nm },
    DEF_EPSILON,
    DEF_MAXITERS,
};

/// Number of samples in the fallback bracket scan for the electron width.
pub const FALLBACK_RESOLUTION: usize = 10000;

// distance kept from the poles of the residuals
const POLE_MARGIN: f64 = 1e-10;

/// Wavevector scale `sqrt(2 m U) / ħ` (nm^-1) for a carrier of mass ratio
/// `mass` under a band offset `offset` (J).
pub fn offset_wavenumber(mass: f64, offset: f64) -> f64 {
    (2.0 * mass * me * offset).sqrt() / hbar * nm
}

// x cot x + m' - 1; the root is where the core state has a zero-energy level
// at the edge of the barrier
fn electron_aux(x: f64, mass_ratio: f64) -> f64 {
    if x.abs() < TANXDIVX_CUTOFF {
        mass_ratio - x * x / 3.0
    } else {
        tanxdivx(x).recip() + mass_ratio - 1.0
    }
}

/// Minimum core radius (nm) that localizes the electron in the core, for a
/// shell of thickness `shell_width` (nm).
///
/// `core_mass` and `shell_mass` are the electron effective mass ratios and
/// `offset` is the conduction band offset (J).
pub fn electron_min_core_width(
    core_mass: f64,
    shell_mass: f64,
    offset: f64,
    shell_width: f64,
) -> BandResult<f64>
{
    let x1
        = brent(
            |x| electron_aux(x, shell_mass / core_mass),
            (0.0, PI - POLE_MARGIN),
            DEF_EPSILON,
            DEF_MAXITERS,
        )?;
    let k1 = offset_wavenumber(core_mass, offset);
    let m = core_mass / shell_mass;
    let f = |r: f64| {
        shell_width + m * r / (1.0 - m + tanxdivx(k1 * r).recip())
    };

    let mut bounds = (x1 / k1, PI / k1);
    let (flo, fhi) = (f(bounds.0), f(bounds.1));
    if flo.signum() == fhi.signum() {
        debug!(flo, fhi, "endpoints do not bracket; scanning");
        bounds
            = scan_and_bracket(f, POLE_MARGIN, PI / k1, FALLBACK_RESOLUTION,
                Crossing::Rising)
            .map_err(|source| {
                BandError::NoBoundStateFound { carrier: Carrier::Electron, source }
            })?;
    }
    let width = brent(f, bounds, DEF_EPSILON, DEF_MAXITERS)?;
    debug!(x1, k1, width, "electron localization width");
    Ok(width)
}

/// Minimum shell thickness (nm) that localizes the hole in the shell, for a
/// core of radius `core_width` (nm).
///
/// `shell_mass` is the hole effective mass ratio in the shell and `offset` is
/// the valence band offset (J).
pub fn hole_min_shell_width(shell_mass: f64, offset: f64, core_width: f64)
    -> BandResult<f64>
{
    let q1 = offset_wavenumber(shell_mass, offset);
    let width
        = brent(
            |h| core_width + (q1 * h).tan() * q1,
            (PI / (2.0 * q1) + POLE_MARGIN, PI / q1),
            DEF_EPSILON,
            DEF_MAXITERS,
        )?;
    debug!(q1, width, "hole localization width");
    Ok(width)
}
