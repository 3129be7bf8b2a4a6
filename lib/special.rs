//! Scalar primitives shared by the eigen-energy, wavefunction, and localization
//! solvers.

use num_complex::{ Complex64 as C64, ComplexFloat };
use crate::units::{ hbar, me };

/// Below this magnitude, `tan(x)/x` is replaced by its Taylor expansion.
pub const TANXDIVX_CUTOFF: f64 = 1e-13;

/// Imaginary part above which [`sin_ratio`] switches to its overflow-free form.
pub const SIN_RATIO_CUTOFF: f64 = 300.0;

/// Tangent evaluated without intermediate overflow.
///
/// `num-complex` computes `tan(a + ib)` as a ratio of `sinh(2b)` and
/// `cosh(2b)`, both of which overflow once `|2b|` exceeds ~709 and leave
/// `inf / inf`. The complex implementation here divides both through by
/// `cosh(2b)` first, so the result saturates to `±i` instead.
pub trait Tangent: ComplexFloat<Real = f64> {
    fn stable_tan(self) -> Self;
}

impl Tangent for f64 {
    fn stable_tan(self) -> Self { self.tan() }
}

impl Tangent for C64 {
    fn stable_tan(self) -> Self {
        let a2 = 2.0 * self.re;
        let b2 = 2.0 * self.im;
        let ch = b2.cosh();
        C64::new(a2.sin() / ch, b2.tanh()) / (a2.cos() / ch + 1.0)
    }
}

/// Compute `tan(x) / x`, falling back to `1 - x²/2` for `|x| < 1e-13` to avoid
/// the `0/0` at the origin.
///
/// Defined for both real and complex arguments with the same cutoff, so a
/// purely imaginary `x = iy` yields `tanh(y) / y` in the real part. Large
/// imaginary parts are handled by [`Tangent::stable_tan`].
///
/// ```
/// use num_complex::Complex64 as C64;
/// use ncband::special::tanxdivx;
///
/// assert_eq!(tanxdivx(0.0_f64), 1.0);
/// let z = tanxdivx(C64::new(0.0, 1.0));
/// assert!((z.re - 1.0_f64.tanh()).abs() < 1e-15);
/// let far = tanxdivx(C64::new(0.0, 1000.0));
/// assert!((far.re - 1e-3).abs() < 1e-18);
/// ```
pub fn tanxdivx<T>(x: T) -> T
where T: Tangent
{
    let two = T::one() + T::one();
    if x.abs() < TANXDIVX_CUTOFF {
        T::one() - x * x / two
    } else {
        x.stable_tan() / x
    }
}

// sin(z) e^(-|Im z|), bounded for every z
fn damped_sin(z: C64) -> C64 {
    let b = z.im.abs();
    let i = C64::i();
    ((i * z - b).exp() - (-i * z - b).exp()) / (2.0 * i)
}

/// Compute `sin(num) / sin(den)` for complex arguments whose imaginary parts
/// may be large enough for either sine to overflow on its own.
///
/// Below [`SIN_RATIO_CUTOFF`] in both imaginary parts the sines are divided
/// directly; above it the common exponential growth is factored out first.
pub fn sin_ratio(num: C64, den: C64) -> C64 {
    if num.im.abs().max(den.im.abs()) < SIN_RATIO_CUTOFF {
        num.sin() / den.sin()
    } else {
        damped_sin(num) / damped_sin(den) * (num.im.abs() - den.im.abs()).exp()
    }
}

/// Step function with a value of one half at zero.
pub fn heaviside(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x == 0.0 {
        0.5
    } else {
        0.0
    }
}

/// Compute the wavevector (m^-1) of a carrier with energy `energy` (J) and
/// effective mass `mass_ratio` (in units of the electron rest mass) in a region
/// of constant potential `potential_offset` (J).
///
/// The principal branch of the complex square root is used: the result is real
/// and non-negative above the offset (propagating) and positive imaginary
/// below it (evanescent).
pub fn wavenumber(energy: f64, mass_ratio: f64, potential_offset: f64) -> C64 {
    C64::new(2.0 * mass_ratio * me * (energy - potential_offset), 0.0).sqrt()
        / hbar
}
