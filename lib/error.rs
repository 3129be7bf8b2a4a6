//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::{
    particle::BandAlignment,
    solve::{ Carrier, Region },
};

/// Returned from [`scan_and_bracket`][crate::scan::scan_and_bracket] when no
/// sign change of the requested kind occurs over the sampled interval.
#[derive(Debug, Error)]
#[error("no qualifying sign change over [{0:e}, {1:e}] at {2} samples")]
pub struct BracketError(pub f64, pub f64, pub usize);

/// Returned from [`brent`][crate::roots::brent].
#[derive(Debug, Error)]
pub enum RootError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the function values at the interval endpoints do not have
    /// opposite signs.
    #[error("interval [{a:e}, {b:e}] does not bracket a root; f(a) = {fa:e}, f(b) = {fb:e}")]
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    /// Returned when the iteration limit is reached before convergence.
    #[error("root search failed to converge within {0} iterations")]
    MaxIters(usize),
}

impl RootError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}

/// Returned from functions in [`quad`][crate::quad].
#[derive(Debug, Error)]
pub enum QuadError {
    /// Returned when both tolerances are non-positive or either is negative.
    #[error("quadrature tolerances must be non-negative and not both zero; got abs = {0}, rel = {1}")]
    BadTolerance(f64, f64),

    /// Returned when the subdivision limit is reached before the error
    /// estimate drops below the requested tolerance.
    #[error("quadrature did not converge within {limit} subintervals: value = {value:e}, error = {error:e}, target = {target:e}")]
    NotConverged { value: f64, error: f64, target: f64, limit: usize },
}

impl QuadError {
    pub(crate) fn check_tolerance(abs: f64, rel: f64) -> Result<(), Self> {
        (abs >= 0.0 && rel >= 0.0 && (abs > 0.0 || rel > 0.0))
            .then_some(())
            .ok_or(Self::BadTolerance(abs, rel))
    }
}

/// Numerical conditions under which a result cannot be trusted.
#[derive(Debug, Error)]
pub enum Degeneracy {
    /// A denominator of the analytic overlap integral is close to zero,
    /// meaning the electron and hole wavevectors are nearly resonant or the
    /// wavefunction normalization at the interface is singular.
    #[error("analytic overlap denominator in the {region} is {magnitude:e} (threshold {threshold:e})")]
    OverlapDenominator { region: Region, magnitude: f64, threshold: f64 },

    /// [`QuadError`]
    #[error("quadrature error: {0}")]
    Quadrature(#[from] QuadError),
}

/// Returned from particle-level operations.
#[derive(Debug, Error)]
pub enum BandError {
    /// Returned when the energy scan finds no negative-to-positive crossing
    /// of the boundary-matching residual.
    #[error("no bound {carrier} state found: {source}")]
    NoBoundStateFound { carrier: Carrier, source: BracketError },

    /// Returned when the band edges of the two materials are neither type I
    /// nor type II.
    #[error("materials {core} (core) and {shell} (shell) have unclassified band alignment")]
    UnclassifiedBandAlignment { core: String, shell: String },

    /// Returned when a solver has no implementation for the particle's band
    /// alignment.
    #[error("operation is not implemented for band alignment {0:?}")]
    UnsupportedConfiguration(BandAlignment),

    /// [`Degeneracy`]
    #[error("numerical degeneracy: {0}")]
    NumericalDegeneracy(#[from] Degeneracy),

    /// Returned when a core width is not positive or a shell width is not
    /// positive.
    #[error("invalid geometry: core width = {core:e} nm, shell width = {shell:e} nm")]
    InvalidGeometry { core: f64, shell: f64 },

    /// [`RootError`]
    #[error("root-finding error: {0}")]
    Root(#[from] RootError),
}

impl From<QuadError> for BandError {
    fn from(err: QuadError) -> Self {
        Self::NumericalDegeneracy(Degeneracy::Quadrature(err))
    }
}

impl BandError {
    pub(crate) fn check_geometry(core: f64, shell: f64) -> Result<(), Self> {
        (core.is_finite() && shell.is_finite() && core > 0.0 && shell > 0.0)
            .then_some(())
            .ok_or(Self::InvalidGeometry { core, shell })
    }
}
