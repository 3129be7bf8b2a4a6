//! Bulk band-edge data for a semiconductor.

use serde::{ Deserialize, Serialize };

/// Immutable record of the band-edge properties of a bulk semiconductor.
///
/// Band edges are in electron-volts on a common absolute scale; masses are in
/// units of the electron rest mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Conduction band edge (eV).
    pub cbe: f64,
    /// Valence band edge (eV).
    pub vbe: f64,
    /// Electron effective mass ratio.
    pub m_e: f64,
    /// Hole effective mass ratio.
    pub m_h: f64,
    /// Relative dielectric constant.
    pub eps: f64,
    /// Display name.
    pub name: String,
}

impl Material {
    pub fn new(
        cbe: f64,
        vbe: f64,
        m_e: f64,
        m_h: f64,
        eps: f64,
        name: &str,
    ) -> Self
    {
        Self { cbe, vbe, m_e, m_h, eps, name: name.to_string() }
    }

    /// Bulk bandgap (eV).
    pub fn bandgap(&self) -> f64 { self.cbe - self.vbe }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn deserialize_table_entry() {
        let json = r#"{
            "cbe": 2.20, "vbe": -0.39, "m_e": 0.21, "m_h": 0.68,
            "eps": 5.3, "name": "CdS"
        }"#;
        let cds: Material = serde_json::from_str(json).unwrap();
        assert_eq!(cds, Material::new(2.20, -0.39, 0.21, 0.68, 5.3, "CdS"));
        assert_relative_eq!(cds.bandgap(), 2.59, max_relative = 1e-12);
    }
}
