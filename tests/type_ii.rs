//! Type-II particles built from two model materials with 0.4 eV offsets in
//! both bands, at a 2.0 nm core and 1.5 nm shell.

use approx::assert_relative_eq;
use ncband::{
    error::BandError,
    material::Material,
    particle::{ BandAlignment, CoreShellParticle },
    units::EnergyUnit,
};

fn mat_a() -> Material { Material::new(1.0, -0.7, 0.1, 0.5, 8.0, "A") }

fn mat_b() -> Material { Material::new(1.4, -0.3, 0.2, 0.6, 6.0, "B") }

#[test]
fn electron_core_first() {
    let p = CoreShellParticle::new(mat_a(), mat_b(), 2.0, 1.5).unwrap();
    assert_eq!(p.alignment(), BandAlignment::TypeIIElectronCoreFirst);
    let (ee, eh) = p.energies(EnergyUnit::ElectronVolt).unwrap();
    assert_relative_eq!(ee, 0.30518167338553515, max_relative = 1e-6);
    assert_relative_eq!(eh, 0.1698821927924909, max_relative = 1e-6);

    let coulomb = p.coulomb_screening_energy(None).unwrap();
    assert_relative_eq!(coulomb.value, -0.06242691239395365, max_relative = 2e-3);
    let polarization = p.interface_polarization_energy(None).unwrap();
    assert_relative_eq!(polarization.value, -0.17389813564968354, max_relative = 2e-3);

    let numeric = p.numerical_overlap_integral().unwrap();
    assert_relative_eq!(numeric, 2.0108622248683385e-18, max_relative = 1e-5);
    let analytic = p.analytical_overlap_integral().unwrap();
    assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
    assert_relative_eq!(analytic, 2.0108622248683392e-18, max_relative = 1e-5);
    let normalized = p.normalized_overlap_integral().unwrap();
    assert_relative_eq!(normalized, 0.49654224854643453, max_relative = 1e-5);
}

#[test]
fn hole_core_first() {
    let p = CoreShellParticle::new(mat_b(), mat_a(), 2.0, 1.5).unwrap();
    assert_eq!(p.alignment(), BandAlignment::TypeIIHoleCoreFirst);
    let (ee, eh) = p.energies(EnergyUnit::ElectronVolt).unwrap();
    assert_relative_eq!(ee, 0.5258566201914312, max_relative = 1e-6);
    assert_relative_eq!(eh, 0.11117720097057707, max_relative = 1e-6);

    let coulomb = p.coulomb_screening_energy(None).unwrap();
    assert_relative_eq!(coulomb.value, -0.10468843593611965, max_relative = 2e-3);
    let polarization = p.interface_polarization_energy(None).unwrap();
    assert_relative_eq!(polarization.value, -0.16436438913502308, max_relative = 2e-3);
    let normalized = p.normalized_overlap_integral().unwrap();
    assert_relative_eq!(normalized, 0.6774705398906213, max_relative = 1e-5);

    assert!(matches!(
        p.localization_hole_min_width(None),
        Err(BandError::UnsupportedConfiguration(BandAlignment::TypeIIHoleCoreFirst))
    ));
}

#[test]
fn localization_widths() {
    let p = CoreShellParticle::new(mat_a(), mat_b(), 2.0, 1.5).unwrap();
    let core_min = p.localization_electron_min_width(None).unwrap();
    assert_relative_eq!(core_min, 2.035035358690398, max_relative = 1e-6);
    let shell_min = p.localization_hole_min_width(None).unwrap();
    assert_relative_eq!(shell_min, 0.9836386814915267, max_relative = 1e-6);
}
