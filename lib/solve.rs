//! Ground-state energies of a carrier in a spherical core/shell well.
//!
//! Matching the logarithmic derivative of the [radial
//! wavefunction][crate::wavefunction] across the interface, with the
//! effective-mass (BenDaniel-Duke) boundary condition, gives the residual
//! ```text
//!        ⎛        1     ⎞ m_shell              1        R
//! D(E) = ⎜1 - ----------⎟ ------- - 1 - ---------- · -
//!        ⎝    tanxdivx(kR)⎠ m_core        tanxdivx(qH)  H
//! ```
//! whose zeros are the energy levels. Poles of `x cot x` make `D` jump from
//! positive to negative, so levels are the negative-to-positive crossings; the
//! lowest one is the ground state.

use std::fmt;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use tracing::{ debug, instrument };
use crate::{
    error::BandError,
    roots::brent,
    scan::{ scan_and_bracket, Crossing },
    special::{ tanxdivx, wavenumber },
    units::e,
    DEF_EPSILON,
    DEF_MAXITERS,
    DEF_RESOLUTION,
};

pub type BandResult<T> = Result<T, BandError>;

/// Charge carrier species.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    Electron,
    Hole,
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electron => write!(f, "electron"),
            Self::Hole => write!(f, "hole"),
        }
    }
}

/// A region of the particle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Core,
    Shell,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

/// Everything the eigen-energy solver needs to know about one carrier in one
/// particle.
///
/// The region named by `well` is offset-free; the other one sits `offset`
/// higher in the carrier's energy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarrierParams {
    /// Effective mass ratio in the core.
    pub core_mass: f64,
    /// Effective mass ratio in the shell.
    pub shell_mass: f64,
    /// Band offset between the two regions (J).
    pub offset: f64,
    /// Region with the lower carrier energy.
    pub well: Region,
    /// Core radius (m).
    pub core_width: f64,
    /// Shell thickness (m).
    pub shell_width: f64,
}

impl CarrierParams {
    /// Potential offsets (J) seen by the carrier in the core and the shell.
    pub fn region_offsets(&self) -> (f64, f64) {
        match self.well {
            Region::Core => (0.0, self.offset),
            Region::Shell => (self.offset, 0.0),
        }
    }

    /// Core and shell wavevectors (m^-1) at `energy` (J).
    pub fn wavenumbers(&self, energy: f64) -> (C64, C64) {
        let (vc, vs) = self.region_offsets();
        (
            wavenumber(energy, self.core_mass, vc),
            wavenumber(energy, self.shell_mass, vs),
        )
    }

    /// Boundary-matching residual at `energy` (eV).
    pub fn residual(&self, energy: f64) -> f64 {
        let (k, q) = self.wavenumbers(energy * e);
        let mass_ratio = self.shell_mass / self.core_mass;
        let core_x = k * self.core_width;
        let shell_x = q * self.shell_width;
        (
            (1.0 - 1.0 / tanxdivx(core_x)) * mass_ratio
            - 1.0
            - 1.0 / tanxdivx(shell_x) * (self.core_width / self.shell_width)
        ).re
    }

    /// The default scan window `[0, 5 × offset]` (eV).
    pub fn default_bounds(&self) -> (f64, f64) { (0.0, 5.0 * self.offset / e) }
}

/// Energy-search settings.
///
/// Unset fields fall back to crate defaults: a scan window of five times the
/// carrier's band offset, an absolute energy tolerance of `2e-12` eV, and at
/// most `1000` refinement iterations.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Number of sample energies in the bracketing scan (default: `1000`).
    pub resolution: usize,
    /// Electron scan window in eV.
    pub electron_bounds: Option<(f64, f64)>,
    /// Hole scan window in eV.
    pub hole_bounds: Option<(f64, f64)>,
    /// Absolute energy tolerance in eV.
    pub epsilon: Option<f64>,
    /// Maximum number of refinement iterations.
    pub maxiters: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            resolution: DEF_RESOLUTION,
            electron_bounds: None,
            hole_bounds: None,
            epsilon: None,
            maxiters: None,
        }
    }
}

impl SolveOptions {
    /// Scan window override for `carrier`.
    pub fn bounds(&self, carrier: Carrier) -> Option<(f64, f64)> {
        match carrier {
            Carrier::Electron => self.electron_bounds,
            Carrier::Hole => self.hole_bounds,
        }
    }
}

/// Find the ground-state energy (eV) of `carrier`.
///
/// The residual is sampled over the scan window and the first
/// negative-to-positive crossing is refined with [Brent's method][brent].
/// Returns [`BandError::NoBoundStateFound`] if the window contains no such
/// crossing.
#[instrument(level = "debug", skip(params, opts))]
pub fn solve_ground_state(
    carrier: Carrier,
    params: &CarrierParams,
    opts: &SolveOptions,
) -> BandResult<f64>
{
    let (lower, upper)
        = opts.bounds(carrier).unwrap_or_else(|| params.default_bounds());
    let bracket
        = scan_and_bracket(
            |en| params.residual(en),
            lower,
            upper,
            opts.resolution,
            Crossing::Rising,
        )
        .map_err(|source| BandError::NoBoundStateFound { carrier, source })?;
    let energy
        = brent(
            |en| params.residual(en),
            bracket,
            opts.epsilon.unwrap_or(DEF_EPSILON),
            opts.maxiters.unwrap_or(DEF_MAXITERS),
        )?;
    debug!(?bracket, energy, "refined ground state");
    Ok(energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn inp_cds_electron() -> CarrierParams {
        CarrierParams {
            core_mass: 0.073,
            shell_mass: 0.21,
            offset: 0.86 * e,
            well: Region::Core,
            core_width: 1.23e-9,
            shell_width: 1.05e-9,
        }
    }

    #[test]
    fn residual_negative_at_band_edge() {
        let p = inp_cds_electron();
        assert!(p.residual(0.0) < 0.0);
    }

    #[test]
    fn offset_goes_to_barrier() {
        let mut p = inp_cds_electron();
        assert_eq!(p.region_offsets(), (0.0, 0.86 * e));
        p.well = Region::Shell;
        assert_eq!(p.region_offsets(), (0.86 * e, 0.0));
        let (k, q) = p.wavenumbers(0.1 * e);
        assert!(k.re == 0.0 && k.im > 0.0);
        assert!(q.im == 0.0 && q.re > 0.0);
    }

    #[test]
    fn ground_state_is_a_root() {
        let p = inp_cds_electron();
        let en = solve_ground_state(Carrier::Electron, &p, &SolveOptions::default())
            .unwrap();
        assert_abs_diff_eq!(en, 0.7425657435912, epsilon = 1e-6);
        assert!(p.residual(en - 1e-6) < 0.0);
        assert!(p.residual(en + 1e-6) > 0.0);
    }

    #[test]
    fn thick_barrier_residual_is_finite() {
        // 2 |q| H far above the overflow point of sinh
        let p = CarrierParams {
            core_mass: 0.64,
            shell_mass: 0.68,
            offset: 0.39 * e,
            well: Region::Core,
            core_width: 1.23e-9,
            shell_width: 250e-9,
        };
        for en in [0.0, 0.1, 0.2073, 0.3, 0.389] {
            assert!(p.residual(en).is_finite(), "residual at {en} eV");
        }
        let en = solve_ground_state(Carrier::Hole, &p, &SolveOptions::default())
            .unwrap();
        assert!(en < 0.39);
        let thinner = CarrierParams { shell_width: 100e-9, ..p };
        let en_thin
            = solve_ground_state(Carrier::Hole, &thinner, &SolveOptions::default())
            .unwrap();
        assert_abs_diff_eq!(en, en_thin, epsilon = 1e-9);
    }

    #[test]
    fn window_without_level() {
        let p = inp_cds_electron();
        let opts = SolveOptions {
            electron_bounds: Some((0.0, 0.5)),
            ..SolveOptions::default()
        };
        let res = solve_ground_state(Carrier::Electron, &p, &opts);
        assert!(matches!(
            res,
            Err(BandError::NoBoundStateFound { carrier: Carrier::Electron, .. })
        ));
    }

    #[test]
    fn options_from_json() {
        let opts: SolveOptions
            = serde_json::from_str(r#"{ "resolution": 4000, "epsilon": 1e-10 }"#)
            .unwrap();
        assert_eq!(opts.resolution, 4000);
        assert_eq!(opts.epsilon, Some(1e-10));
        assert_eq!(opts.electron_bounds, None);
        assert_eq!(opts.bounds(Carrier::Hole), None);
    }
}
