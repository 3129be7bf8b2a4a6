//! A spherical core/shell nanocrystal built from two bulk materials.
//!
//! [`CoreShellParticle`] owns the geometry and band offsets, classifies the
//! band alignment once at construction, and caches the ground-state energies
//! until the geometry or the solver settings change. Every other quantity
//! (wavevectors, overlaps, interaction energies) is derived from the cached
//! energies on demand.
//!
//! ```
//! use ncband::{
//!     material::Material,
//!     particle::{ BandAlignment, CoreShellParticle },
//!     units::EnergyUnit,
//! };
//!
//! let core = Material::new(1.0, -0.7, 0.1, 0.5, 8.0, "A");
//! let shell = Material::new(1.4, -0.3, 0.2, 0.6, 6.0, "B");
//! let csnc = CoreShellParticle::new(core, shell, 2.0, 1.5).unwrap();
//! assert_eq!(csnc.alignment(), BandAlignment::TypeIIElectronCoreFirst);
//!
//! let (ee, eh) = csnc.energies(EnergyUnit::ElectronVolt).unwrap();
//! assert!(0.0 < ee && ee < 5.0 * 0.4);
//! assert!(0.0 < eh && eh < 5.0 * 0.4);
//! ```

use std::{ cell::Cell, sync::Arc };
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use tracing::debug;
use crate::{
    error::BandError,
    localization,
    material::Material,
    overlap,
    quad::{ Estimate, Tolerance },
    screening::{ screening_energy, Dielectric, Interaction },
    solve::{
        solve_ground_state,
        BandResult,
        Carrier,
        CarrierParams,
        Region,
        SolveOptions,
    },
    units::{ e, EnergyUnit, Meters, Nanometers, Units },
    wavefunction::RadialWavefunction,
    DEF_REL_TOL,
};

/// Relative tolerance for the overlap quadratures.
pub const OVERLAP_REL_TOL: f64 = 1e-10;

/// Relative ordering of the core and shell band edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandAlignment {
    /// The shell gap straddles the core gap; both carriers are confined to
    /// the core.
    TypeI,
    /// Both shell band edges lie above the core's; the electron is confined to
    /// the core and the hole to the shell.
    TypeIIElectronCoreFirst,
    /// Both core band edges lie above the shell's; the hole is confined to the
    /// core and the electron to the shell.
    TypeIIHoleCoreFirst,
    /// Anything else (including inverted type I and coincident edges).
    Unclassified,
}

impl BandAlignment {
    /// Classify the band alignment of `core` inside `shell`.
    pub fn classify(core: &Material, shell: &Material) -> Self {
        let cbe_lower = core.cbe < shell.cbe;
        let cbe_higher = core.cbe > shell.cbe;
        let vbe_lower = core.vbe < shell.vbe;
        let vbe_higher = core.vbe > shell.vbe;
        if cbe_lower && vbe_higher {
            Self::TypeI
        } else if cbe_lower && vbe_lower {
            Self::TypeIIElectronCoreFirst
        } else if cbe_higher && vbe_higher {
            Self::TypeIIHoleCoreFirst
        } else {
            Self::Unclassified
        }
    }

    /// Region in which `carrier` sits at the bottom of its well.
    ///
    /// Only meaningful for classified alignments; `Unclassified` places both
    /// carriers in the shell.
    pub fn well(&self, carrier: Carrier) -> Region {
        match (self, carrier) {
            (Self::TypeI, _) => Region::Core,
            (Self::TypeIIElectronCoreFirst, Carrier::Electron) => Region::Core,
            (Self::TypeIIHoleCoreFirst, Carrier::Hole) => Region::Core,
            _ => Region::Shell,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum EnergyCache {
    Stale,
    Valid { electron: f64, hole: f64 },
}

/// A core/shell nanocrystal.
///
/// Geometry is supplied in nanometers and stored in meters. Ground-state
/// energies are computed on first request and reused until
/// [`set_core_width`][Self::set_core_width],
/// [`set_shell_width`][Self::set_shell_width] or
/// [`set_options`][Self::set_options] is called.
///
/// Materials are held behind [`Arc`], so particles built from the same
/// `Arc<Material>` share one copy and cloning a particle does not copy them.
/// The cache uses interior mutability, so a particle is not [`Sync`]; share
/// it across threads by cloning.
#[derive(Clone, Debug)]
pub struct CoreShellParticle {
    core: Arc<Material>,
    shell: Arc<Material>,
    core_width: Meters,
    shell_width: Meters,
    // conduction and valence band offsets (J)
    ue: f64,
    uh: f64,
    alignment: BandAlignment,
    opts: SolveOptions,
    cache: Cell<EnergyCache>,
    solves: Cell<usize>,
}

impl CoreShellParticle {
    /// Create a new particle with core radius `core_width` and shell thickness
    /// `shell_width`, both in nanometers.
    ///
    /// Materials may be passed by value or as an existing `Arc<Material>`.
    ///
    /// Fails with [`BandError::UnclassifiedBandAlignment`] if the materials
    /// form neither a type-I nor a type-II heterostructure, and with
    /// [`BandError::InvalidGeometry`] if either width is not positive.
    pub fn new<C, S>(core: C, shell: S, core_width: f64, shell_width: f64)
        -> BandResult<Self>
    where
        C: Into<Arc<Material>>,
        S: Into<Arc<Material>>,
    {
        let core: Arc<Material> = core.into();
        let shell: Arc<Material> = shell.into();
        BandError::check_geometry(core_width, shell_width)?;
        let alignment = BandAlignment::classify(&core, &shell);
        if alignment == BandAlignment::Unclassified {
            return Err(BandError::UnclassifiedBandAlignment {
                core: core.name.clone(),
                shell: shell.name.clone(),
            });
        }
        let ue = (core.cbe - shell.cbe).abs() * e;
        let uh = (core.vbe - shell.vbe).abs() * e;
        debug!(
            core = %core.name,
            shell = %shell.name,
            ?alignment,
            core_width,
            shell_width,
            "new core/shell particle",
        );
        Ok(Self {
            core,
            shell,
            core_width: Nanometers(core_width).into(),
            shell_width: Nanometers(shell_width).into(),
            ue,
            uh,
            alignment,
            opts: SolveOptions::default(),
            cache: Cell::new(EnergyCache::Stale),
            solves: Cell::new(0),
        })
    }

    /// Replace the solver settings, returning `self`.
    pub fn with_options(mut self, opts: SolveOptions) -> Self {
        self.set_options(opts);
        self
    }

    pub fn core(&self) -> &Arc<Material> { &self.core }

    pub fn shell(&self) -> &Arc<Material> { &self.shell }

    pub fn alignment(&self) -> BandAlignment { self.alignment }

    pub fn options(&self) -> &SolveOptions { &self.opts }

    /// Core radius.
    pub fn core_width(&self) -> Meters { self.core_width }

    /// Shell thickness.
    pub fn shell_width(&self) -> Meters { self.shell_width }

    /// Outer radius.
    pub fn radius(&self) -> Meters { Meters(self.core_width.0 + self.shell_width.0) }

    /// Conduction band offset (J).
    pub fn electron_offset(&self) -> f64 { self.ue }

    /// Valence band offset (J).
    pub fn hole_offset(&self) -> f64 { self.uh }

    /// Number of ground-state solves performed so far.
    pub fn solve_count(&self) -> usize { self.solves.get() }

    fn invalidate(&self) {
        if self.cache.replace(EnergyCache::Stale) != EnergyCache::Stale {
            debug!("energy cache invalidated");
        }
    }

    /// Set the core radius (nm).
    pub fn set_core_width(&mut self, core_width: f64) -> BandResult<()> {
        BandError::check_geometry(core_width, Nanometers::from(self.shell_width).0)?;
        self.core_width = Nanometers(core_width).into();
        self.invalidate();
        Ok(())
    }

    /// Set the shell thickness (nm).
    pub fn set_shell_width(&mut self, shell_width: f64) -> BandResult<()> {
        BandError::check_geometry(Nanometers::from(self.core_width).0, shell_width)?;
        self.shell_width = Nanometers(shell_width).into();
        self.invalidate();
        Ok(())
    }

    /// Replace the solver settings.
    pub fn set_options(&mut self, opts: SolveOptions) {
        self.opts = opts;
        self.invalidate();
    }

    /// Solver parameters for `carrier`.
    pub fn carrier_params(&self, carrier: Carrier) -> CarrierParams {
        let (core_mass, shell_mass, offset) = match carrier {
            Carrier::Electron => (self.core.m_e, self.shell.m_e, self.ue),
            Carrier::Hole => (self.core.m_h, self.shell.m_h, self.uh),
        };
        CarrierParams {
            core_mass,
            shell_mass,
            offset,
            well: self.alignment.well(carrier),
            core_width: self.core_width.0,
            shell_width: self.shell_width.0,
        }
    }

    fn energies_ev(&self) -> BandResult<(f64, f64)> {
        if let EnergyCache::Valid { electron, hole } = self.cache.get() {
            return Ok((electron, hole));
        }
        let solve = |carrier: Carrier| {
            self.solves.set(self.solves.get() + 1);
            solve_ground_state(carrier, &self.carrier_params(carrier), &self.opts)
        };
        let electron = solve(Carrier::Electron)?;
        let hole = solve(Carrier::Hole)?;
        self.cache.set(EnergyCache::Valid { electron, hole });
        Ok((electron, hole))
    }

    /// Ground-state electron and hole energies, measured from the bottom of
    /// each carrier's well.
    pub fn energies(&self, unit: EnergyUnit) -> BandResult<(f64, f64)> {
        let (electron, hole) = self.energies_ev()?;
        Ok((unit.from_ev(electron), unit.from_ev(hole)))
    }

    /// Ground-state wavevectors `(kₑ, qₑ, kₕ, qₕ)` (m^-1) in the core (`k`)
    /// and shell (`q`).
    pub fn wavenumbers(&self) -> BandResult<(C64, C64, C64, C64)> {
        let (electron, hole) = self.energies_ev()?;
        let (ke, qe)
            = self.carrier_params(Carrier::Electron).wavenumbers(electron * e);
        let (kh, qh) = self.carrier_params(Carrier::Hole).wavenumbers(hole * e);
        Ok((ke, qe, kh, qh))
    }

    /// Electron and hole ground-state radial wavefunctions, in nanometers.
    pub fn radial_wavefunctions(&self)
        -> BandResult<(RadialWavefunction, RadialWavefunction)>
    {
        let uu = Units::NANO;
        let (ke, qe, kh, qh) = self.wavenumbers()?;
        let core: f64 = uu.to_nat_length(self.core_width.0);
        let shell: f64 = uu.to_nat_length(self.shell_width.0);
        Ok((
            RadialWavefunction::new(
                uu.to_nat_wavenumber(ke), uu.to_nat_wavenumber(qe), core, shell),
            RadialWavefunction::new(
                uu.to_nat_wavenumber(kh), uu.to_nat_wavenumber(qh), core, shell),
        ))
    }

    /// Closed-form electron/hole overlap integral (m²).
    ///
    /// See [`overlap::analytical_overlap`].
    pub fn analytical_overlap_integral(&self) -> BandResult<f64> {
        let (el, ho) = self.radial_wavefunctions()?;
        overlap::analytical_overlap(&el, &ho, &Units::NANO)
    }

    /// Electron/hole overlap integral (m²) by adaptive quadrature.
    pub fn numerical_overlap_integral(&self) -> BandResult<f64> {
        let (el, ho) = self.radial_wavefunctions()?;
        overlap::numerical_overlap(
            &el, &ho, &Units::NANO, Tolerance::relative(OVERLAP_REL_TOL))
    }

    /// Overlap of the normalized electron and hole wavefunctions
    /// (dimensionless, in `[0, 1]`).
    pub fn normalized_overlap_integral(&self) -> BandResult<f64> {
        let (el, ho) = self.radial_wavefunctions()?;
        overlap::normalized_overlap(&el, &ho, Tolerance::relative(OVERLAP_REL_TOL))
    }

    fn dielectric(&self) -> Dielectric {
        let uu = Units::NANO;
        Dielectric::new(
            uu.to_nat_length(self.core_width.0),
            uu.to_nat_length(self.radius().0),
            self.core.eps,
            self.shell.eps,
            &uu,
        )
    }

    fn interaction_energy(&self, kind: Interaction, rel_tol: f64)
        -> BandResult<Estimate>
    {
        let (el, ho) = self.radial_wavefunctions()?;
        screening_energy(
            kind, &self.dielectric(), &el, &ho, Tolerance::relative(rel_tol))
    }

    /// Screened electron/hole Coulomb energy (eV) with its quadrature error
    /// estimate, computed to relative tolerance `rel_tol` (default `1e-3`).
    pub fn coulomb_screening_energy(&self, rel_tol: Option<f64>)
        -> BandResult<Estimate>
    {
        self.interaction_energy(
            Interaction::CoulombScreening, rel_tol.unwrap_or(DEF_REL_TOL))
    }

    /// Interface polarization energy (eV) with its quadrature error estimate,
    /// computed to relative tolerance `rel_tol` (default `1e-3`).
    pub fn interface_polarization_energy(&self, rel_tol: Option<f64>)
        -> BandResult<Estimate>
    {
        self.interaction_energy(
            Interaction::InterfacePolarization, rel_tol.unwrap_or(DEF_REL_TOL))
    }

    /// Energy gap (eV) between the lowest conduction band edge and the highest
    /// valence band edge of the two materials.
    pub fn bandgap(&self) -> f64 {
        self.core.cbe.min(self.shell.cbe) - self.core.vbe.max(self.shell.vbe)
    }

    /// Lowest optical transition energy (eV): the band gap plus both
    /// confinement energies and both interaction energies, the latter
    /// computed to relative tolerance `rel_tol` (default `1e-3`).
    pub fn exciton_energy(&self, rel_tol: Option<f64>) -> BandResult<f64> {
        let (electron, hole) = self.energies_ev()?;
        let coulomb = self.coulomb_screening_energy(rel_tol)?;
        let polarization = self.interface_polarization_energy(rel_tol)?;
        Ok(self.bandgap() + electron + hole + coulomb.value + polarization.value)
    }

    fn require_electron_core_first(&self) -> BandResult<()> {
        match self.alignment {
            BandAlignment::TypeIIElectronCoreFirst => Ok(()),
            other => Err(BandError::UnsupportedConfiguration(other)),
        }
    }

    /// Minimum core radius (nm) that localizes the electron in the core, for a
    /// shell of thickness `shell_width` (nm; defaults to the particle's own).
    ///
    /// Only implemented for [`BandAlignment::TypeIIElectronCoreFirst`];
    /// other alignments return [`BandError::UnsupportedConfiguration`].
    pub fn localization_electron_min_width(&self, shell_width: Option<f64>)
        -> BandResult<f64>
    {
        self.require_electron_core_first()?;
        let shell_width
            = shell_width.unwrap_or(Nanometers::from(self.shell_width).0);
        BandError::check_geometry(Nanometers::from(self.core_width).0, shell_width)?;
        localization::electron_min_core_width(
            self.core.m_e, self.shell.m_e, self.ue, shell_width)
    }

    /// Minimum shell thickness (nm) that localizes the hole in the shell, for a
    /// core of radius `core_width` (nm; defaults to the particle's own).
    ///
    /// Only implemented for [`BandAlignment::TypeIIElectronCoreFirst`];
    /// other alignments return [`BandError::UnsupportedConfiguration`].
    pub fn localization_hole_min_width(&self, core_width: Option<f64>)
        -> BandResult<f64>
    {
        self.require_electron_core_first()?;
        let core_width = core_width.unwrap_or(Nanometers::from(self.core_width).0);
        BandError::check_geometry(core_width, Nanometers::from(self.shell_width).0)?;
        localization::hole_min_shell_width(self.shell.m_h, self.uh, core_width)
    }
}
