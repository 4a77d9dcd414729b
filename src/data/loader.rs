use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Compound, CompoundDataset, CompoundType};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a compound database from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – records-oriented array, `[{ "id": ..., "formula": ..., ... }]`
/// * `.csv`  – header row with column names, one compound per row
///
/// Structural failures (unreadable file, not an array, missing required
/// columns) abort the load; individually malformed records are skipped with a
/// warning so one bad row cannot blank the whole database.
pub fn load_file(path: &Path) -> Result<CompoundDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<CompoundDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<CompoundDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut compounds = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (i, rec) in records.iter().enumerate() {
        match serde_json::from_value::<Compound>(rec.clone()) {
            Ok(c) => compounds.push(c),
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping JSON record {i}: {e}");
            }
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed records");
    }

    Ok(CompoundDataset::from_compounds(compounds))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the columns of [`Compound`]. The four
/// identity columns are required; numeric columns that are absent or
/// unparsable load as NaN and fall out of the affected computations.
fn load_csv(path: &Path) -> Result<CompoundDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    parse_csv(reader)
}

fn parse_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<CompoundDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in ["id", "formula", "base_formula", "type"] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut compounds = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .unwrap_or("")
        };
        let text = |name: &str| field(name).to_string();
        let num = |name: &str| field(name).trim().parse::<f64>().unwrap_or(f64::NAN);

        let kind: CompoundType = match field("type").parse() {
            Ok(k) => k,
            Err(e) => {
                log::warn!("Skipping CSV row {row_no}: {e}");
                continue;
            }
        };

        compounds.push(Compound {
            id: text("id"),
            formula: text("formula"),
            base_formula: text("base_formula"),
            kind,
            voltage: num("voltage"),
            capacity: num("capacity"),
            conductivity: num("conductivity"),
            energy_gravimetric: num("energy_gravimetric"),
            energy_volumetric: num("energy_volumetric"),
            overpotential: num("overpotential"),
            cycle_life: field("cycle_life").trim().parse().unwrap_or(0),
            stability: num("stability"),
            rate_capability: num("rate_capability"),
            coulombic_efficiency: num("coulombic_efficiency"),
            space_group: text("space_group"),
            crystal_system: text("crystal_system"),
            li_content: num("li_content"),
            ti_content: num("ti_content"),
            density: num("density"),
            elastic_modulus: num("elastic_modulus"),
            volume_expansion: num("volume_expansion"),
            bandgap: num("bandgap"),
        });
    }

    Ok(CompoundDataset::from_compounds(compounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_of_records_loads() {
        let text = r#"[
            {"id": "mp-1", "formula": "TiS2", "base_formula": "TiS2",
             "type": "Sulfide", "voltage": 3.9, "energy_gravimetric": 3074.0,
             "conductivity": 222.0, "cycle_life": 62500},
            {"id": "mp-2", "formula": "TiO2", "base_formula": "TiO2",
             "type": "Oxide", "voltage": 3.4, "energy_gravimetric": 2970.0}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.compounds[0].formula, "TiS2");
        assert_eq!(ds.compounds[0].cycle_life, 62_500);
        // Descriptors absent from the file load as NaN.
        assert!(ds.compounds[1].capacity.is_nan());
        assert_eq!(ds.compounds[1].voltage, 3.4);
    }

    #[test]
    fn malformed_json_record_is_skipped_not_fatal() {
        let text = r#"[
            {"id": "mp-1", "formula": "TiS2", "base_formula": "TiS2", "type": "Sulfide"},
            {"id": "mp-2", "formula": "TiX2", "base_formula": "TiX2", "type": "Unobtainium"},
            {"formula": "no id here"}
        ]"#;
        let ds = parse_json(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.compounds[0].id, "mp-1");
    }

    #[test]
    fn non_array_json_is_a_structural_failure() {
        assert!(parse_json(r#"{"id": "mp-1"}"#).is_err());
        assert!(parse_json("not json at all").is_err());
    }

    #[test]
    fn csv_rows_load_with_missing_numerics_as_nan() {
        let data = "\
id,formula,base_formula,type,voltage,energy_gravimetric
mp-1,TiS2,TiS2,Sulfide,3.9,3074
mp-2,TiO2,TiO2,Oxide,,2970
mp-3,TiX2,TiX2,Mystery,3.0,1000
";
        let ds = parse_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        // The unknown-type row is dropped, the blank voltage fails closed.
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.compounds[0].voltage, 3.9);
        assert!(ds.compounds[1].voltage.is_nan());
        assert!(ds.compounds[0].density.is_nan());
    }

    #[test]
    fn csv_without_required_columns_fails() {
        let data = "formula,voltage\nTiS2,3.9\n";
        assert!(parse_csv(csv::Reader::from_reader(data.as_bytes())).is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(load_file(Path::new("compounds.parquet")).is_err());
    }
}
