#![allow(non_snake_case)]

//! Quantized carrier energies, overlap integrals and electrostatic interaction
//! energies of spherical core/shell semiconductor nanocrystals in the
//! effective-mass approximation.
//!
//! Provides implementations for the following numerical routines:
//! - Ground-state electron and hole energies from the boundary-matching
//!   condition at the core/shell interface (sign-change scan followed by
//!   Brent refinement)
//! - Piecewise radial wavefunctions with small-radius stabilization
//! - Analytic and adaptive-quadrature electron/hole overlap integrals
//! - Coulomb screening and interface polarization energies as double
//!   integrals over radial densities
//! - Minimum core/shell widths for carrier localization
//!
//! ```
//! use ncband::{ material::Material, particle::CoreShellParticle, units::EnergyUnit };
//!
//! let inp = Material::new(1.34, 0.0, 0.073, 0.64, 9.6, "InP");
//! let cds = Material::new(2.20, -0.39, 0.21, 0.68, 5.3, "CdS");
//! let csnc = CoreShellParticle::new(inp, cds, 1.23, 1.05).unwrap();
//! let (e, h) = csnc.energies(EnergyUnit::ElectronVolt).unwrap();
//! assert!(e > 0.0 && h > 0.0);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod special;
pub mod scan;
pub mod roots;
pub mod quad;
pub mod material;
pub mod wavefunction;
pub mod solve;
pub mod overlap;
pub mod screening;
pub mod localization;
pub mod particle;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 2e-12;
pub(crate) const DEF_MAXITERS: usize = 1000;
pub(crate) const DEF_RESOLUTION: usize = 1000;
pub(crate) const DEF_REL_TOL: f64 = 1e-3;
