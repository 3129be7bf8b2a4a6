//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Boundary matching](#boundary-matching)
//! - [Band alignment](#band-alignment)
//! - [Units](#units)
//! - [Interaction energies](#interaction-energies)
//! - [Localization](#localization)
//!
//! # Background
//! In the effective-mass approximation, a carrier (electron or hole) in a
//! spherical core/shell nanocrystal moves in a piecewise-constant potential:
//! zero in the region where its band edge is lowest (its *well*) and a band
//! offset *U* in the other region, with infinite walls at the outer surface.
//! Writing the radial part of the ground (*l* = 0) state as *R*(*r*) and
//! *u*(*r*) ≡ *r* *R*(*r*), the radial time-independent Schrödinger equation in
//! each region reduces to
//! ```text
//!    ħ²  ∂²u
//! - ---- --- + V u(r) = E u(r)
//!   2 m* ∂r²
//! ```
//! with *m*\* the effective mass of the carrier in that region. Each region then
//! has a (possibly imaginary) wavevector
//! ```text
//!     √(2 m* (E - V))
//! k = ---------------
//!            ħ
//! ```
//! and the solution that is regular at the origin and vanishes at the outer
//! radius *R* + *H* is
//! ```text
//!          sin(k r)
//! R(r) = ------------         0 ≤ r < R
//!        r sin(k R)
//!
//!        sin(q (R + H - r))
//! R(r) = ------------------   R ≤ r < R + H
//!           r sin(q H)
//! ```
//! where *k* and *q* are the core and shell wavevectors. The normalization is
//! chosen so that both branches meet at *R*(*R*) = 1 / *R*. When *E* < *V* in a
//! region the wavevector is purely imaginary and the sines become hyperbolic
//! sines; complex arithmetic handles both cases uniformly, with the principal
//! branch of the square root fixing the sign convention.
//!
//! Near *r* = 0 the core branch is a 0/0 form and is evaluated from its Taylor
//! series instead.
//!
//! # Boundary matching
//! Continuity of *R* is built into the form above. The second boundary
//! condition at the interface is the BenDaniel-Duke condition[^1], continuity
//! of (1/*m*\*) ∂*R*/∂*r*, which accounts for the change in effective mass.
//! Written in terms of the function *x* cot *x* = 1 / tanxdivx(*x*), it becomes
//! ```text
//! ⎛        1      ⎞ m_shell              1        R
//! ⎜1 - -----------⎟ ------- - 1 - ----------- · - = 0
//! ⎝    tanxdivx(kR)⎠ m_core       tanxdivx(qH)  H
//! ```
//! Every zero of the left-hand side as a function of *E* is a bound level.
//! *x* cot *x* has poles at *x* = *n* π, across which the residual jumps from
//! positive to negative, while genuine levels are crossed from negative to
//! positive. The ground state is therefore the lowest negative-to-positive
//! crossing in [0, 5 *U*], located by sampling the residual on a uniform grid
//! and refined with Brent's method[^2].
//!
//! # Band alignment
//! Which region is the well for which carrier depends on the relative ordering
//! of the bulk band edges:
//! ```text
//!   type I          type II (e core)   type II (h core)
//!
//!  ──┐    ┌──           ┌──────           ───┐
//!    └────┘          ───┘                    └─────
//!                         ┌──────         ───┐
//!  ──┐    ┌──        ───┘                    └─────
//!    └────┘
//! shell core shell   core  shell          core  shell
//! ```
//! In a type-I particle both carriers are confined to the core. In the two
//! type-II orderings the electron and hole are confined to different regions.
//! Any other ordering (an inverted type I, or coincident band edges) is
//! rejected, since the offsets would not define a well for one of the
//! carriers.
//!
//! # Units
//! SI wavevectors of confined states are of order 1e9 m^-1 while radii are of
//! order 1e-9 m. Integrals are evaluated after converting both to nanometers
//! (see [`Units::NANO`][crate::units::Units::NANO]), so that integrands and
//! their products are of order unity and the adaptive quadrature's tolerances
//! are meaningful. Lengths are converted back to SI on return where the result
//! carries dimensions.
//!
//! # Interaction energies
//! The electron and hole interact through the screened Coulomb potential and
//! through the polarization charges induced at the dielectric interfaces[^3].
//! Both are evaluated as expectation values over the radial densities
//! ```text
//!          ⌠ R+H ⌠ R+H
//! ⟨V⟩ =    ⎮     ⎮     r_e² ρ_e(r_e) r_h² ρ_h(r_h) V(r_e, r_h) dr_h dr_e
//!          ⌡ 0   ⌡ 0
//! ```
//! with normalized densities *ρ*(*r*) = |*R*(*r*)|² / ∫ *r*² |*R*|² d*r*. The
//! Coulomb term uses the dielectric constant of the region(s) occupied by the
//! carriers, and the polarization term combines the core/shell mismatch
//! *ε*<sub>c</sub>/*ε*<sub>s</sub> - 1 with the shell/vacuum mismatch
//! *ε*<sub>s</sub> - 1. Both operators are proportional to 1/*r*, so the
//! energies scale as 1/*s* under a uniform scaling *r* → *s* *r* of the whole
//! particle.
//!
//! Each integral is computed with adaptive Gauss-Kronrod (7/15-point)
//! quadrature[^4], split at the core/shell interface and, for the inner
//! integral, at the outer variable, where max(*r*<sub>e</sub>,
//! *r*<sub>h</sub>) has a kink.
//!
//! The square of the overlap ∫ *r*² *R*<sub>e</sub> *R*<sub>h</sub> d*r* has a
//! closed form as a sum of core and shell terms, each with a denominator
//! proportional to sin(*k*<sub>e</sub> *w*) sin(*k*<sub>h</sub> *w*)
//! (*k*<sub>h</sub>² - *k*<sub>e</sub>²). Nearly resonant wavevectors make this
//! numerically meaningless, which is reported as an error instead; the
//! quadrature route remains available.
//!
//! # Localization
//! In a type-II particle with the electron in the core, shrinking the core
//! pushes the electron level up toward the conduction band offset and the
//! electron spreads into the shell. The threshold core radius at a given shell
//! thickness *H* is taken as the root of
//! ```text
//!          m r
//! H + --------------- = 0,    m = m_core / m_shell
//!     1 - m + k₁r cot(k₁r)
//! ```
//! with *k*₁ = √(2 *m*<sub>core</sub> *U*)/*ħ* the core wavevector at the
//! offset. The search interval is bounded below by *x*₁ / *k*₁, where *x*₁ is
//! the root of
//! ```text
//! x cot x + m_shell/m_core - 1 = 0,    0 < x < π
//! ```
//! and above by π / *k*₁; if the function does not change sign over that
//! interval, the bracket is found by scanning instead. Likewise, the threshold
//! shell thickness for the hole is the root of *R* + *q*₁ tan(*q*₁ *h*) over
//! (π / 2 *q*₁, π / *q*₁). Only this ordering is implemented.
//!
//! [^1]: D. J. BenDaniel and C. B. Duke, "Space-charge effects on electron
//! tunneling." Physical Review **152** 2 683-692 (1966).
//!
//! [^2]: R. P. Brent, *Algorithms for Minimization Without Derivatives*,
//! Prentice-Hall (1973), ch. 4.
//!
//! [^3]: A. Piryatinski, S. A. Ivanov, S. Tretiak, and V. I. Klimov, "Effect of
//! quantum and dielectric confinement on the exciton-exciton interaction
//! energy in type II core/shell semiconductor nanocrystals." Nano Letters
//! **7** 1 108-115 (2007).
//!
//! [^4]: R. Piessens, E. de Doncker-Kapenga, C. W. Überhuber, and D. K.
//! Kahaner, *QUADPACK: A Subroutine Package for Automatic Integration*,
//! Springer (1983).
