use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CompoundType – closed set of material classes
// ---------------------------------------------------------------------------

/// Material class of a compound. The set is closed; iteration order is the
/// declaration order and is used for chart series and comparison rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompoundType {
    Sulfide,
    Oxide,
    Phosphate,
    Selenide,
    Nitride,
    Fluoride,
    Chloride,
    Silicate,
}

impl CompoundType {
    pub const ALL: [CompoundType; 8] = [
        CompoundType::Sulfide,
        CompoundType::Oxide,
        CompoundType::Phosphate,
        CompoundType::Selenide,
        CompoundType::Nitride,
        CompoundType::Fluoride,
        CompoundType::Chloride,
        CompoundType::Silicate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompoundType::Sulfide => "Sulfide",
            CompoundType::Oxide => "Oxide",
            CompoundType::Phosphate => "Phosphate",
            CompoundType::Selenide => "Selenide",
            CompoundType::Nitride => "Nitride",
            CompoundType::Fluoride => "Fluoride",
            CompoundType::Chloride => "Chloride",
            CompoundType::Silicate => "Silicate",
        }
    }
}

impl fmt::Display for CompoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for category strings outside the closed set.
#[derive(Debug, thiserror::Error)]
#[error("unknown compound type: {0}")]
pub struct UnknownType(pub String);

impl FromStr for CompoundType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompoundType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Compound – one row of the materials database
// ---------------------------------------------------------------------------

fn not_reported() -> f64 {
    f64::NAN
}

/// A single candidate cathode material. All fields are immutable once loaded.
///
/// Numeric descriptors default to NaN when absent from the source file; every
/// computation that reads such a field excludes the record instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compound {
    pub id: String,
    /// Doped / variant formula, e.g. `Li0.5TiS2`.
    pub formula: String,
    /// Parent compound, e.g. `TiS2`.
    pub base_formula: String,
    #[serde(rename = "type")]
    pub kind: CompoundType,

    // -- Electrochemical --
    #[serde(default = "not_reported")]
    pub voltage: f64,
    #[serde(default = "not_reported")]
    pub capacity: f64,
    #[serde(default = "not_reported")]
    pub conductivity: f64,
    #[serde(default = "not_reported")]
    pub energy_gravimetric: f64,
    #[serde(default = "not_reported")]
    pub energy_volumetric: f64,
    #[serde(default = "not_reported")]
    pub overpotential: f64,

    // -- Performance --
    #[serde(default)]
    pub cycle_life: u32,
    #[serde(default = "not_reported")]
    pub stability: f64,
    #[serde(default = "not_reported")]
    pub rate_capability: f64,
    #[serde(default = "not_reported")]
    pub coulombic_efficiency: f64,

    // -- Structural --
    #[serde(default)]
    pub space_group: String,
    #[serde(default)]
    pub crystal_system: String,
    #[serde(default = "not_reported")]
    pub li_content: f64,
    #[serde(default = "not_reported")]
    pub ti_content: f64,
    #[serde(default = "not_reported")]
    pub density: f64,
    #[serde(default = "not_reported")]
    pub elastic_modulus: f64,
    #[serde(default = "not_reported")]
    pub volume_expansion: f64,
    #[serde(default = "not_reported")]
    pub bandgap: f64,
}

// ---------------------------------------------------------------------------
// Property – numeric descriptors selectable for plots and histograms
// ---------------------------------------------------------------------------

/// Numeric descriptor of a [`Compound`], used for axis selection and binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Voltage,
    Capacity,
    Conductivity,
    Stability,
    VolumeExpansion,
    Bandgap,
    EnergyGravimetric,
    EnergyVolumetric,
    CycleLife,
    RateCapability,
    CoulombicEfficiency,
}

impl Property {
    /// Properties offered for the scatter-plot x-axis.
    pub const X_AXIS: [Property; 6] = [
        Property::Voltage,
        Property::Capacity,
        Property::Conductivity,
        Property::Stability,
        Property::VolumeExpansion,
        Property::Bandgap,
    ];

    /// Properties offered for the scatter-plot y-axis.
    pub const Y_AXIS: [Property; 5] = [
        Property::EnergyGravimetric,
        Property::EnergyVolumetric,
        Property::CycleLife,
        Property::RateCapability,
        Property::CoulombicEfficiency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Property::Voltage => "Voltage (V)",
            Property::Capacity => "Capacity (mAh/g)",
            Property::Conductivity => "Conductivity (mS/cm)",
            Property::Stability => "Stability",
            Property::VolumeExpansion => "Volume Expansion (%)",
            Property::Bandgap => "Bandgap (eV)",
            Property::EnergyGravimetric => "Energy Density (Wh/kg)",
            Property::EnergyVolumetric => "Volumetric Energy (Wh/L)",
            Property::CycleLife => "Cycle Life",
            Property::RateCapability => "Rate Capability (%)",
            Property::CoulombicEfficiency => "Coulombic Efficiency (%)",
        }
    }

    /// Read this property's value from a compound.
    pub fn value(self, c: &Compound) -> f64 {
        match self {
            Property::Voltage => c.voltage,
            Property::Capacity => c.capacity,
            Property::Conductivity => c.conductivity,
            Property::Stability => c.stability,
            Property::VolumeExpansion => c.volume_expansion,
            Property::Bandgap => c.bandgap,
            Property::EnergyGravimetric => c.energy_gravimetric,
            Property::EnergyVolumetric => c.energy_volumetric,
            Property::CycleLife => c.cycle_life as f64,
            Property::RateCapability => c.rate_capability,
            Property::CoulombicEfficiency => c.coulombic_efficiency,
        }
    }
}

// ---------------------------------------------------------------------------
// CompoundDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded database. Write-once for the session: built by the loader,
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompoundDataset {
    /// All compounds, in source-file order.
    pub compounds: Vec<Compound>,
    /// Number of compounds per material class (over the whole store).
    pub type_counts: BTreeMap<CompoundType, usize>,
}

impl CompoundDataset {
    pub fn from_compounds(compounds: Vec<Compound>) -> Self {
        let mut type_counts: BTreeMap<CompoundType, usize> = BTreeMap::new();
        for c in &compounds {
            *type_counts.entry(c.kind).or_default() += 1;
        }
        CompoundDataset {
            compounds,
            type_counts,
        }
    }

    /// Number of compounds in the store.
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test fixture
// ---------------------------------------------------------------------------

/// A fully populated compound for unit tests; only the distinguishing fields
/// are parameters, everything else gets a plausible fixed value.
#[cfg(test)]
pub(crate) fn test_compound(
    formula: &str,
    kind: CompoundType,
    voltage: f64,
    energy_gravimetric: f64,
) -> Compound {
    Compound {
        id: formula.to_string(),
        formula: formula.to_string(),
        base_formula: formula.to_string(),
        kind,
        voltage,
        capacity: 250.0,
        conductivity: 50.0,
        energy_gravimetric,
        energy_volumetric: 2600.0,
        overpotential: 0.05,
        cycle_life: 10_000,
        stability: 0.85,
        rate_capability: 90.0,
        coulombic_efficiency: 99.0,
        space_group: "P-3m1".to_string(),
        crystal_system: "Trigonal".to_string(),
        li_content: 0.5,
        ti_content: 0.33,
        density: 3.2,
        elastic_modulus: 110.0,
        volume_expansion: 8.0,
        bandgap: 1.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_round_trips_through_label() {
        for t in CompoundType::ALL {
            assert_eq!(t.label().parse::<CompoundType>().unwrap(), t);
        }
        assert!("Plutonide".parse::<CompoundType>().is_err());
    }

    #[test]
    fn type_counts_cover_all_compounds() {
        let ds = CompoundDataset::from_compounds(vec![
            test_compound("TiS2", CompoundType::Sulfide, 3.9, 3074.0),
            test_compound("Ti2S3", CompoundType::Sulfide, 3.7, 2850.0),
            test_compound("TiO2", CompoundType::Oxide, 3.4, 2970.0),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.type_counts[&CompoundType::Sulfide], 2);
        assert_eq!(ds.type_counts[&CompoundType::Oxide], 1);
        assert_eq!(ds.type_counts.get(&CompoundType::Nitride), None);
    }

    #[test]
    fn property_reads_the_matching_field() {
        let c = test_compound("TiS2", CompoundType::Sulfide, 3.9, 3074.0);
        assert_eq!(Property::Voltage.value(&c), 3.9);
        assert_eq!(Property::EnergyGravimetric.value(&c), 3074.0);
        assert_eq!(Property::CycleLife.value(&c), 10_000.0);
    }
}
