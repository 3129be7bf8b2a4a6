//! Electrostatic interaction energies of an electron/hole pair in a dielectric
//! core/shell sphere.
//!
//! Each energy is the expectation value of a pair operator over the normalized
//! radial densities,
//! ```text
//! E = ∫∫ r_a² ρₑ(r_a) r_b² ρₕ(r_b) V(r_a, r_b) dr_a dr_b,
//!     ρ(r) = |ψ(r)|² / ∫ r² |ψ(r)|² dr,
//! ```
//! over `[0, R + H]²`, where `V` is one of the operators in [`Interaction`].
//! Lengths are in the natural unit of the [`Units`] used to build the
//! [`Dielectric`], and energies come out in its natural energy unit (eV for
//! [`Units::NANO`]). Both operators are inversely proportional to length, so
//! under `r → s r` the energies scale as `1 / s`.

use tracing::debug;
use crate::{
    quad::{ dblquad, Estimate, Tolerance },
    solve::BandResult,
    special::heaviside,
    units::Units,
    wavefunction::RadialWavefunction,
};

/// Relative tolerance for the radial normalization integrals.
pub const NORM_REL_TOL: f64 = 1e-10;

/// Pair operator selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Direct Coulomb attraction screened by the dielectric of the region(s)
    /// containing the carriers.
    CoulombScreening,
    /// Interaction with the polarization charge induced at the core/shell and
    /// shell/vacuum interfaces.
    InterfacePolarization,
}

/// Geometry and dielectric constants of the particle, in natural units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dielectric {
    /// Core radius.
    pub core_radius: f64,
    /// Outer radius of the particle.
    pub outer_radius: f64,
    /// Relative dielectric constant of the core.
    pub core_eps: f64,
    /// Relative dielectric constant of the shell.
    pub shell_eps: f64,
    // e / (4π ε₀ a) in natural energy units
    prefactor: f64,
}

impl Dielectric {
    pub fn new(
        core_radius: f64,
        outer_radius: f64,
        core_eps: f64,
        shell_eps: f64,
        units: &Units,
    ) -> Self
    {
        Self {
            core_radius,
            outer_radius,
            core_eps,
            shell_eps,
            prefactor: units.coulomb(),
        }
    }

    /// Return a copy with both radii multiplied by `s`.
    pub fn rescaled(&self, s: f64) -> Self {
        Self {
            core_radius: self.core_radius * s,
            outer_radius: self.outer_radius * s,
            ..*self
        }
    }

    /// Screened Coulomb operator.
    ///
    /// Carriers both inside the core interact through the core dielectric;
    /// each carrier in the shell contributes half an interaction through the
    /// shell dielectric.
    pub fn coulomb_screening(&self, r_a: f64, r_b: f64) -> f64 {
        let rmax = r_a.max(r_b);
        let r_c = self.core_radius;
        let val
            = -heaviside(r_c - r_a) * heaviside(r_c - r_b)
                / (rmax * self.core_eps)
            - (heaviside(r_a - r_c) + heaviside(r_b - r_c))
                / (2.0 * rmax * self.shell_eps);
        val * self.prefactor
    }

    /// Interface polarization operator.
    pub fn interface_polarization(&self, r_a: f64, r_b: f64) -> f64 {
        let r_c = self.core_radius;
        let r_p = self.outer_radius;
        let val
            = -heaviside(r_c - r_a) * heaviside(r_c - r_b)
                * (self.core_eps / self.shell_eps - 1.0)
                / (r_c * self.core_eps)
            - (self.shell_eps - 1.0) / (2.0 * r_p * self.shell_eps);
        val * self.prefactor
    }

    /// Evaluate the operator selected by `kind`.
    pub fn operator(&self, kind: Interaction, r_a: f64, r_b: f64) -> f64 {
        match kind {
            Interaction::CoulombScreening => self.coulomb_screening(r_a, r_b),
            Interaction::InterfacePolarization
                => self.interface_polarization(r_a, r_b),
        }
    }
}

/// Compute the interaction energy of type `kind` for the given electron and
/// hole wavefunctions as a double adaptive quadrature at relative tolerance
/// `tol.rel`.
///
/// Both integration variables are split at the core radius and the inner one
/// additionally at the outer variable (the kink of `max(r_a, r_b)`).
pub fn screening_energy(
    kind: Interaction,
    dielectric: &Dielectric,
    electron: &RadialWavefunction,
    hole: &RadialWavefunction,
    tol: Tolerance,
) -> BandResult<Estimate>
{
    let norm_tol = Tolerance { rel: NORM_REL_TOL.min(tol.rel), ..tol };
    let norm = electron.norm(norm_tol)? * hole.norm(norm_tol)?;
    let r_c = dielectric.core_radius;
    let est
        = dblquad(
            |r_a, r_b| {
                r_a * r_a * electron.density(r_a)
                    * r_b * r_b * hole.density(r_b)
                    * dielectric.operator(kind, r_a, r_b)
            },
            (0.0, dielectric.outer_radius),
            (0.0, dielectric.outer_radius),
            &[r_c],
            |r_a| vec![r_c, r_a],
            tol,
        )?
        .scaled(norm.recip());
    debug!(?kind, value = est.value, error = est.error, "screening energy");
    Ok(est)
}
