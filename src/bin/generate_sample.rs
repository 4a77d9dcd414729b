//! Generates a deterministic sample compound database for trying out the
//! explorer: `compounds_data.json` and `compounds_data.csv` in the current
//! directory, ~4000 records across all eight material classes.

use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Per-class sampling parameters: base formulas, mean voltage, and the
/// log10-conductivity range (conductivity spans many orders of magnitude).
struct ClassProfile {
    label: &'static str,
    bases: &'static [&'static str],
    voltage_mean: f64,
    log_cond: (f64, f64),
    cycles_mean: f64,
}

const PROFILES: [ClassProfile; 8] = [
    ClassProfile { label: "Sulfide", bases: &["TiS2", "Ti2S3", "TiS3"], voltage_mean: 3.8, log_cond: (1.0, 2.5), cycles_mean: 50_000.0 },
    ClassProfile { label: "Oxide", bases: &["TiO2", "Ti2O3", "TiVO4"], voltage_mean: 3.4, log_cond: (-6.0, -2.0), cycles_mean: 8_000.0 },
    ClassProfile { label: "Phosphate", bases: &["TiPO4", "LiTi2(PO4)3"], voltage_mean: 3.2, log_cond: (-5.0, -1.0), cycles_mean: 10_000.0 },
    ClassProfile { label: "Selenide", bases: &["TiSe2", "Ti2Se3"], voltage_mean: 3.7, log_cond: (1.0, 2.3), cycles_mean: 45_000.0 },
    ClassProfile { label: "Nitride", bases: &["TiN", "Ti3N4"], voltage_mean: 2.9, log_cond: (0.0, 1.5), cycles_mean: 20_000.0 },
    ClassProfile { label: "Fluoride", bases: &["TiF3", "TiF4"], voltage_mean: 4.1, log_cond: (-4.0, -1.0), cycles_mean: 6_000.0 },
    ClassProfile { label: "Chloride", bases: &["TiCl3", "TiCl4"], voltage_mean: 3.6, log_cond: (-3.0, 0.0), cycles_mean: 5_000.0 },
    ClassProfile { label: "Silicate", bases: &["TiSiO4", "Li2TiSiO5"], voltage_mean: 3.0, log_cond: (-5.0, -2.0), cycles_mean: 7_000.0 },
];

const SPACE_GROUPS: [&str; 6] = ["P-3m1", "Pnma", "Fd-3m", "R-3m", "C2/m", "I4/mmm"];
const CRYSTAL_SYSTEMS: [&str; 5] = ["Trigonal", "Orthorhombic", "Cubic", "Monoclinic", "Tetragonal"];
const PER_CLASS: usize = 500;

fn generate_compound(rng: &mut SimpleRng, profile: &ClassProfile, n: usize) -> Value {
    let base = *rng.pick(profile.bases);
    let li = (rng.next_f64() * 0.9 * 100.0).round() / 100.0;
    let formula = if li > 0.0 {
        format!("Li{li:.2}{base}")
    } else {
        base.to_string()
    };

    let voltage = rng.gauss(profile.voltage_mean, 0.3).clamp(0.5, 5.0);
    let capacity = rng.gauss(250.0, 60.0).clamp(80.0, 400.0);
    let log_cond = profile.log_cond.0 + rng.next_f64() * (profile.log_cond.1 - profile.log_cond.0);
    let conductivity = 10f64.powf(log_cond);
    let energy_gravimetric = (voltage * capacity * rng.gauss(3.2, 0.2)).clamp(200.0, 5000.0);
    let energy_volumetric = energy_gravimetric * rng.gauss(1.1, 0.1);
    let cycle_life = rng.gauss(profile.cycles_mean, profile.cycles_mean * 0.3).max(500.0) as u64;

    json!({
        "id": format!("gen-{:05}", n),
        "formula": formula,
        "base_formula": base,
        "type": profile.label,
        "voltage": round2(voltage),
        "capacity": round2(capacity),
        "conductivity": conductivity,
        "energy_gravimetric": round2(energy_gravimetric),
        "energy_volumetric": round2(energy_volumetric),
        "overpotential": round3(rng.gauss(0.08, 0.03).max(0.005)),
        "cycle_life": cycle_life,
        "stability": round3(rng.gauss(0.85, 0.08).clamp(0.3, 1.0)),
        "rate_capability": round2(rng.gauss(85.0, 8.0).clamp(30.0, 100.0)),
        "coulombic_efficiency": round2(rng.gauss(98.5, 1.0).clamp(85.0, 100.0)),
        "space_group": *rng.pick(&SPACE_GROUPS),
        "crystal_system": *rng.pick(&CRYSTAL_SYSTEMS),
        "li_content": round2(li),
        "ti_content": round3(rng.gauss(0.33, 0.08).clamp(0.05, 0.6)),
        "density": round2(rng.gauss(3.6, 0.6).clamp(1.5, 7.0)),
        "elastic_modulus": round2(rng.gauss(120.0, 30.0).clamp(20.0, 300.0)),
        "volume_expansion": round2(rng.gauss(8.0, 4.0).clamp(0.2, 25.0)),
        "bandgap": round3(rng.gauss(1.8, 0.9).clamp(0.0, 4.5)),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let mut records = Vec::with_capacity(PROFILES.len() * PER_CLASS);
    for profile in &PROFILES {
        for _ in 0..PER_CLASS {
            let n = records.len();
            records.push(generate_compound(&mut rng, profile, n));
        }
    }

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write("compounds_data.json", json).context("writing compounds_data.json")?;

    let mut writer = csv::Writer::from_path("compounds_data.csv").context("opening compounds_data.csv")?;
    let columns = [
        "id", "formula", "base_formula", "type", "voltage", "capacity", "conductivity",
        "energy_gravimetric", "energy_volumetric", "overpotential", "cycle_life", "stability",
        "rate_capability", "coulombic_efficiency", "space_group", "crystal_system", "li_content",
        "ti_content", "density", "elastic_modulus", "volume_expansion", "bandgap",
    ];
    writer.write_record(columns)?;
    for rec in &records {
        let row: Vec<String> = columns
            .iter()
            .map(|col| match &rec[*col] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!(
        "Generated {} compounds → compounds_data.json / compounds_data.csv",
        records.len()
    );
    Ok(())
}
