#![allow(non_upper_case_globals)]

//! Physical constants, unit conversions, and the length scale used to bring
//! nanocrystal quantities to order unity.
//!
//! Concrete physical constants are taken from NIST.
//!
//! Geometry enters the library in nanometers and is held internally in meters;
//! the two are kept apart by the [`Nanometers`] and [`Meters`] wrappers so that
//! the conversion happens in exactly one place.

use std::f64::consts::PI;
use serde::{ Deserialize, Serialize };

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.8541878128e-12;
//              +/- 0.0000000013e-12

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// one nanometer (m)
pub const nm: f64 = 1e-9;

/// A length in nanometers, the unit in which geometry is supplied.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Nanometers(pub f64);

/// A length in meters, the unit assumed by every internal formula.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Meters(pub f64);

impl From<Nanometers> for Meters {
    fn from(x: Nanometers) -> Self { Self(x.0 * nm) }
}

impl From<Meters> for Nanometers {
    fn from(x: Meters) -> Self { Self(x.0 / nm) }
}

/// Unit in which energies are reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    /// Electron-volts.
    #[default]
    ElectronVolt,
    /// Joules.
    Joule,
}

impl EnergyUnit {
    /// Convert an energy given in electron-volts to `self`.
    pub fn from_ev(self, energy: f64) -> f64 {
        match self {
            Self::ElectronVolt => energy,
            Self::Joule => energy * e,
        }
    }
}

/// Scaling factors relating SI quantities to the dimensionless ("natural")
/// values used inside quadratures.
///
/// SI wavevectors (~1e9 m^-1) and radii (~1e-9 m) differ by eighteen orders of
/// magnitude; every integral is evaluated after converting both with the same
/// length scale so that their products are of order unity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Base length scale (m).
    pub a: f64,
    /// Energy scale (J).
    pub e: f64,
}

impl Units {
    /// Nanometer lengths and electron-volt energies.
    pub const NANO: Self = Self { a: nm, e };

    /// Convert a quantity with dimensions of length in meters to natural
    /// units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a quantity with dimensions of inverse length in meters^-1 to
    /// natural units.
    pub fn to_nat_wavenumber<T, U>(&self, k: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        k * self.a
    }

    /// Convert a dimensionless quantity to one with area units in meters².
    pub fn from_nat_area<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.powi(2)
    }

    /// Coulomb prefactor `e / (4π ε₀ a)`: the potential energy, in natural
    /// energy units, of two elementary charges one natural length apart in
    /// vacuum.
    pub fn coulomb(&self) -> f64 {
        e / (4.0 * PI * e0 * self.a) * (e / self.e)
    }
}
