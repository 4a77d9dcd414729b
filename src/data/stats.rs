use super::model::{Compound, CompoundDataset, CompoundType};

// ---------------------------------------------------------------------------
// Summary statistics over the filtered view
// ---------------------------------------------------------------------------

/// Aggregate scalars for the current view. Means are kept at full precision;
/// rounding happens at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub avg_voltage: f64,
    pub avg_energy: f64,
    pub max_cycles: u32,
    pub avg_conductivity: f64,
}

/// Compute summary statistics, or `None` for an empty view. `None` is the
/// empty-state marker, not an error; callers must check it before rendering.
pub fn summary(dataset: &CompoundDataset, view: &[usize]) -> Option<SummaryStats> {
    if view.is_empty() {
        return None;
    }
    let compounds = || view.iter().map(|&i| &dataset.compounds[i]);
    Some(SummaryStats {
        count: view.len(),
        avg_voltage: mean(compounds().map(|c| c.voltage)),
        avg_energy: mean(compounds().map(|c| c.energy_gravimetric)),
        max_cycles: compounds().map(|c| c.cycle_life).max().unwrap_or(0),
        // Plain arithmetic mean even though conductivity spans orders of
        // magnitude; matches what the rest of the system displays.
        avg_conductivity: mean(compounds().map(|c| c.conductivity)),
    })
}

/// Arithmetic mean over the finite values of the iterator. Non-finite entries
/// (missing fields) are excluded; 0.0 if nothing remains.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values.filter(|v| v.is_finite()) {
        sum += v;
        n += 1;
    }
    if n == 0 { 0.0 } else { sum / n as f64 }
}

// ---------------------------------------------------------------------------
// Histogram binner
// ---------------------------------------------------------------------------

/// One bin of a frequency distribution. `label` is the bin's lower edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub label: String,
    pub count: usize,
}

/// Fixed-bin-count frequency distribution of `value` over the view.
///
/// The domain is configuration, not derived from the data, so histograms of
/// two datasets with the same configuration are directly comparable. Values
/// at or above `domain_max` land in the last bin instead of being dropped.
/// Always returns exactly `bin_count` bins; an empty view gives all zeros.
pub fn histogram(
    dataset: &CompoundDataset,
    view: &[usize],
    value: impl Fn(&Compound) -> f64,
    domain_max: f64,
    bin_count: usize,
    label_decimals: usize,
) -> Vec<HistogramBin> {
    let mut counts = vec![0usize; bin_count];
    for &i in view {
        let v = value(&dataset.compounds[i]);
        if !v.is_finite() {
            continue;
        }
        let bin = ((v / domain_max) * bin_count as f64).floor() as i64;
        let bin = bin.clamp(0, bin_count as i64 - 1) as usize;
        counts[bin] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            label: format!(
                "{:.prec$}",
                i as f64 * domain_max / bin_count as f64,
                prec = label_decimals
            ),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-type aggregation
// ---------------------------------------------------------------------------

/// Average properties of one material class within the view.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStats {
    pub kind: CompoundType,
    pub avg_voltage: f64,
    pub avg_energy: f64,
    pub avg_conductivity: f64,
    pub count: usize,
}

/// Group the view by material class and average each group. Classes with no
/// matching compound are omitted entirely — never emitted with zero counts.
/// Rows come out in [`CompoundType::ALL`] order.
pub fn by_type(dataset: &CompoundDataset, view: &[usize]) -> Vec<TypeStats> {
    CompoundType::ALL
        .into_iter()
        .filter_map(|kind| {
            let group: Vec<&Compound> = view
                .iter()
                .map(|&i| &dataset.compounds[i])
                .filter(|c| c.kind == kind)
                .collect();
            if group.is_empty() {
                return None;
            }
            Some(TypeStats {
                kind,
                avg_voltage: mean(group.iter().map(|c| c.voltage)),
                avg_energy: mean(group.iter().map(|c| c.energy_gravimetric)),
                avg_conductivity: mean(group.iter().map(|c| c.conductivity)),
                count: group.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{test_compound, Property};

    fn dataset() -> CompoundDataset {
        CompoundDataset::from_compounds(vec![
            test_compound("TiS2", CompoundType::Sulfide, 3.9, 3074.0),
            test_compound("TiO2", CompoundType::Oxide, 3.4, 2970.0),
        ])
    }

    fn full_view(ds: &CompoundDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn summary_of_empty_view_is_none() {
        assert_eq!(summary(&dataset(), &[]), None);
    }

    #[test]
    fn summary_means_match_hand_computation() {
        let ds = dataset();
        let s = summary(&ds, &full_view(&ds)).unwrap();
        assert_eq!(s.count, 2);
        assert!((s.avg_voltage - 3.65).abs() < 1e-12);
        assert!((s.avg_energy - 3022.0).abs() < 1e-12);
        assert_eq!(s.max_cycles, 10_000);
    }

    #[test]
    fn summary_of_singleton_view_returns_its_own_values() {
        let ds = dataset();
        let s = summary(&ds, &[0]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.avg_voltage, 3.9);
        assert_eq!(s.avg_energy, 3074.0);
        assert_eq!(s.avg_conductivity, 50.0);
    }

    #[test]
    fn non_finite_values_are_excluded_from_means() {
        let mut a = test_compound("a", CompoundType::Oxide, 3.0, 2000.0);
        a.conductivity = f64::NAN;
        let b = test_compound("b", CompoundType::Oxide, 4.0, 3000.0);
        let ds = CompoundDataset::from_compounds(vec![a, b]);
        let s = summary(&ds, &full_view(&ds)).unwrap();
        assert_eq!(s.avg_conductivity, 50.0);
        assert_eq!(s.avg_voltage, 3.5);
    }

    #[test]
    fn histogram_counts_sum_to_view_length() {
        let ds = dataset();
        let view = full_view(&ds);
        let bins = histogram(&ds, &view, |c| c.voltage, 5.0, 15, 1);
        assert_eq!(bins.len(), 15);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), view.len());
    }

    #[test]
    fn histogram_of_empty_view_is_all_zeros() {
        let ds = dataset();
        let bins = histogram(&ds, &[], |c| c.energy_gravimetric, 5000.0, 15, 0);
        assert_eq!(bins.len(), 15);
        assert!(bins.iter().all(|b| b.count == 0));
    }

    #[test]
    fn value_at_domain_max_falls_into_last_bin() {
        let ds = CompoundDataset::from_compounds(vec![test_compound(
            "edge",
            CompoundType::Sulfide,
            5.0,
            3000.0,
        )]);
        let bins = histogram(&ds, &[0], |c| c.voltage, 5.0, 15, 1);
        assert_eq!(bins[14].count, 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn histogram_labels_are_lower_edges() {
        let ds = dataset();
        let v = histogram(&ds, &[], |c| c.voltage, 5.0, 15, 1);
        assert_eq!(v[0].label, "0.0");
        assert_eq!(v[3].label, "1.0");
        let e = histogram(&ds, &[], |c| Property::EnergyGravimetric.value(c), 5000.0, 15, 0);
        assert_eq!(e[0].label, "0");
        assert_eq!(e[3].label, "1000");
    }

    #[test]
    fn by_type_omits_empty_classes_and_averages_per_group() {
        let ds = CompoundDataset::from_compounds(vec![
            test_compound("TiS2", CompoundType::Sulfide, 3.9, 3074.0),
            test_compound("Ti2S3", CompoundType::Sulfide, 3.7, 2850.0),
            test_compound("TiO2", CompoundType::Oxide, 3.4, 2970.0),
        ]);
        let rows = by_type(&ds, &full_view(&ds));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.count > 0));

        let sulfide = &rows[0];
        assert_eq!(sulfide.kind, CompoundType::Sulfide);
        assert_eq!(sulfide.count, 2);
        assert!((sulfide.avg_voltage - 3.8).abs() < 1e-12);
        assert!((sulfide.avg_energy - 2962.0).abs() < 1e-12);

        assert!(by_type(&ds, &[]).is_empty());
    }
}
