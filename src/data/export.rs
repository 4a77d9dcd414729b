use super::model::{Compound, CompoundDataset};

// ---------------------------------------------------------------------------
// Flat-file export of the filtered view
// ---------------------------------------------------------------------------

/// Column order of the exported file. Must stay in sync with [`record_line`].
const HEADER: &str = "id,formula,base_formula,type,voltage,capacity,conductivity,\
                      energy_gravimetric,energy_volumetric,overpotential,cycle_life,\
                      stability,rate_capability,coulombic_efficiency,space_group,\
                      crystal_system,li_content,ti_content,density,elastic_modulus,\
                      volume_expansion,bandgap";

/// Serialize the view as comma-delimited text: header line, then one line per
/// compound in view order.
///
/// Values are numbers and short identifiers that never contain the delimiter,
/// so no quoting is applied; this is deliberately not a general CSV writer.
/// The UI guarantees this is never invoked on an empty view (export disabled).
pub fn to_csv(dataset: &CompoundDataset, view: &[usize]) -> String {
    let mut out = String::with_capacity((view.len() + 1) * 128);
    out.push_str(HEADER);
    for &i in view {
        out.push('\n');
        out.push_str(&record_line(&dataset.compounds[i]));
    }
    out
}

/// Suggested file name for the exported view, carrying the record count.
pub fn export_file_name(view_len: usize) -> String {
    format!("filtered_compounds_{view_len}.csv")
}

fn record_line(c: &Compound) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        c.id,
        c.formula,
        c.base_formula,
        c.kind,
        c.voltage,
        c.capacity,
        c.conductivity,
        c.energy_gravimetric,
        c.energy_volumetric,
        c.overpotential,
        c.cycle_life,
        c.stability,
        c.rate_capability,
        c.coulombic_efficiency,
        c.space_group,
        c.crystal_system,
        c.li_content,
        c.ti_content,
        c.density,
        c.elastic_modulus,
        c.volume_expansion,
        c.bandgap,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_compound, CompoundType};

    #[test]
    fn header_and_rows_have_matching_field_counts() {
        let ds = CompoundDataset::from_compounds(vec![test_compound(
            "TiS2",
            CompoundType::Sulfide,
            3.9,
            3074.0,
        )]);
        let text = to_csv(&ds, &[0]);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert_eq!(lines.next(), None);
        assert_eq!(
            header.split(',').count(),
            row.split(',').count(),
            "header/row column mismatch"
        );
        assert!(header.starts_with("id,formula,base_formula,type,voltage"));
        assert!(row.starts_with("TiS2,TiS2,TiS2,Sulfide,3.9,"));
    }

    #[test]
    fn one_line_per_compound_in_view_order() {
        let ds = CompoundDataset::from_compounds(vec![
            test_compound("TiS2", CompoundType::Sulfide, 3.9, 3074.0),
            test_compound("TiO2", CompoundType::Oxide, 3.4, 2970.0),
            test_compound("TiPO4", CompoundType::Phosphate, 3.2, 2650.0),
        ]);
        let text = to_csv(&ds, &[2, 0]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("TiPO4,"));
        assert!(lines[2].starts_with("TiS2,"));
    }

    #[test]
    fn file_name_reflects_record_count() {
        assert_eq!(export_file_name(165), "filtered_compounds_165.csv");
    }
}
