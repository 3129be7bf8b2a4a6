//! InP/CdS (type I) at a 1.23 nm core. Values pinned here are model output
//! regressions, not literature values; `transition_energies_against_table_1`
//! records how the model departs from the measured gaps of Dennis et al., Nano
//! Letters 12(11) 5545-5551 (2012), Table 1.

use approx::assert_relative_eq;
use ncband::{
    error::BandError,
    material::Material,
    particle::{ BandAlignment, CoreShellParticle },
    solve::{ Carrier, SolveOptions },
    units::EnergyUnit,
};

const CORE: f64 = 1.23;
const SHELL: f64 = 1.05;

fn inp(m_e: f64) -> Material { Material::new(1.34, 0.0, m_e, 0.64, 9.6, "InP") }

fn cds() -> Material { Material::new(2.20, -0.39, 0.21, 0.68, 5.3, "CdS") }

fn particle() -> CoreShellParticle {
    CoreShellParticle::new(inp(0.073), cds(), CORE, SHELL).unwrap()
}

#[test]
fn ground_state_energies() {
    let p = particle();
    assert_eq!(p.alignment(), BandAlignment::TypeI);
    let (ee, eh) = p.energies(EnergyUnit::ElectronVolt).unwrap();
    assert_relative_eq!(ee, 0.7425657435912489, max_relative = 1e-6);
    assert_relative_eq!(eh, 0.21023774168110754, max_relative = 1e-6);

    // bound below each carrier's offset
    assert!(ee < 0.86 && eh < 0.39);

    let light = CoreShellParticle::new(inp(0.07), cds(), CORE, SHELL).unwrap();
    let (ee, eh) = light.energies(EnergyUnit::ElectronVolt).unwrap();
    assert_relative_eq!(ee, 0.7457515638219812, max_relative = 1e-6);
    assert_relative_eq!(eh, 0.21023774168110754, max_relative = 1e-6);
}

#[test]
fn energies_fall_with_shell_width() {
    let mut p = particle();
    let expected = [
        (0.53, 0.934145191653124, 0.22856535292619157),
        (1.47, 0.7058772601329827, 0.20793621747101756),
        (1.9, 0.6926034218675297, 0.20744048505807713),
    ];
    let mut last = (f64::INFINITY, f64::INFINITY);
    for (shell, ee_ref, eh_ref) in expected {
        p.set_shell_width(shell).unwrap();
        let (ee, eh) = p.energies(EnergyUnit::ElectronVolt).unwrap();
        assert_relative_eq!(ee, ee_ref, max_relative = 1e-6);
        assert_relative_eq!(eh, eh_ref, max_relative = 1e-6);
        assert!(ee < last.0 && eh < last.1);
        last = (ee, eh);
    }
}

#[test]
fn wavenumbers() {
    let (ke, qe, kh, qh) = particle().wavenumbers().unwrap();
    assert_relative_eq!(ke.re, 1.1927994127517738e9, max_relative = 1e-6);
    assert_eq!(ke.im, 0.0);
    assert_eq!(qe.re, 0.0);
    assert_relative_eq!(qe.im, 0.8045361814733037e9, max_relative = 1e-6);
    assert_relative_eq!(kh.re, 1.8792469750083587e9, max_relative = 1e-6);
    assert_relative_eq!(qh.im, 1.7911924314338536e9, max_relative = 1e-6);
}

#[test]
fn overlap_integrals() {
    let p = particle();
    let analytic = p.analytical_overlap_integral().unwrap();
    let numeric = p.numerical_overlap_integral().unwrap();
    assert_relative_eq!(analytic, numeric, max_relative = 1e-8);
    assert_relative_eq!(analytic, 1.3223676868699563e-18, max_relative = 1e-5);
    let normalized = p.normalized_overlap_integral().unwrap();
    assert_relative_eq!(normalized, 0.9127154854714004, max_relative = 1e-5);
    assert!(normalized <= 1.0);
}

#[test]
fn interaction_energies() {
    let p = particle();
    let coulomb = p.coulomb_screening_energy(None).unwrap();
    assert_relative_eq!(coulomb.value, -0.13531589873035382, max_relative = 2e-3);
    assert!(coulomb.error.is_finite() && coulomb.error >= 0.0);
    let polarization = p.interface_polarization_energy(None).unwrap();
    assert_relative_eq!(polarization.value, -0.3103755246430427, max_relative = 2e-3);

    let exciton = p.exciton_energy(None).unwrap();
    let expected
        = 1.34 + 0.7425657435912489 + 0.21023774168110754
        - 0.13531589873035382 - 0.3103755246430427;
    assert_relative_eq!(exciton, expected, max_relative = 1e-3);
}

#[test]
fn larger_particles_bind_more_weakly() {
    let small = particle();
    let big = CoreShellParticle::new(inp(0.073), cds(), 2.0 * CORE, 2.0 * SHELL)
        .unwrap();
    let col = small.coulomb_screening_energy(Some(1e-6)).unwrap().value;
    let col2 = big.coulomb_screening_energy(Some(1e-6)).unwrap().value;
    assert!(col2 < 0.0 && col2.abs() < col.abs());
    let pol = small.interface_polarization_energy(Some(1e-6)).unwrap().value;
    let pol2 = big.interface_polarization_energy(Some(1e-6)).unwrap().value;
    assert!(pol2 < 0.0 && pol2.abs() < pol.abs());
}

#[test]
fn narrow_window_has_no_level() {
    let p = particle().with_options(SolveOptions {
        hole_bounds: Some((0.0, 0.1)),
        ..SolveOptions::default()
    });
    assert!(matches!(
        p.energies(EnergyUnit::ElectronVolt),
        Err(BandError::NoBoundStateFound { carrier: Carrier::Hole, .. })
    ));
    // a failed solve leaves nothing cached
    assert!(p.energies(EnergyUnit::ElectronVolt).is_err());
}

#[test]
fn localization_is_type_ii_only() {
    let p = particle();
    assert!(matches!(
        p.localization_electron_min_width(None),
        Err(BandError::UnsupportedConfiguration(BandAlignment::TypeI))
    ));
}

// shell thickness (nm) and measured lowest transition (eV)
const TABLE_1: [(f64, f64); 6] = [
    (0.53, 1.78),
    (1.05, 1.46),
    (1.47, 1.37),
    (1.90, 1.32),
    (2.76, 1.26),
    (3.84, 1.24),
];

// With these bulk band edges the particle is type I with a 0.86 eV conduction
// offset, so the electron stays confined to the 1.23 nm core and the
// transition does not red-shift as the shell grows. The model sits 0.17 eV (thinnest shell) to 0.71 eV (thickest)
// above the measured gaps.
#[test]
fn transition_energies_against_table_1() {
    let mut p = particle();
    let mut model = Vec::with_capacity(TABLE_1.len());
    for (shell, measured) in TABLE_1 {
        p.set_shell_width(shell).unwrap();
        let exciton = p.exciton_energy(None).unwrap();
        let excess = exciton - measured;
        assert!(
            (0.1..0.8).contains(&excess),
            "shell {shell} nm: model {exciton} eV, measured {measured} eV",
        );
        model.push(exciton);
    }
    // measured gaps fall by 0.54 eV over the series; the model stays flat
    let lo = model.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = model.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(hi - lo < 0.2);
    assert!(model[5] >= model[1]);
}

